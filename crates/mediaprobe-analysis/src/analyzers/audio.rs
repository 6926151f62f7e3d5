//! Audio analyzer
//!
//! Reads duration, bit rate, sample rate, and stream tags from the first
//! audio stream ffprobe reports. Fields the stream does not carry are
//! omitted, never defaulted to zero.

use serde_json::Value;

use mediaprobe_core::Metadata;

use crate::invoker::ProcessInvoker;
use crate::parsers::ffprobe::FfprobeOutput;
use crate::resolver::ResolvedFile;

use super::run_ffprobe;

pub struct AudioAnalyzer {
    invoker: ProcessInvoker,
}

impl AudioAnalyzer {
    pub fn new(ffprobe_path: impl Into<String>) -> Self {
        Self {
            invoker: ProcessInvoker::new(ffprobe_path),
        }
    }

    /// `{duration, bit_rate, sample_rate, tags}`, or empty when ffprobe is
    /// unavailable, fails, or finds no audio stream.
    pub async fn metadata(&self, file: &ResolvedFile) -> Metadata {
        match run_ffprobe(&self.invoker, file).await {
            Some(probe) => metadata_from_probe(&probe),
            None => Metadata::new(),
        }
    }
}

fn metadata_from_probe(probe: &FfprobeOutput) -> Metadata {
    let mut metadata = Metadata::new();
    let Some(audio) = probe.audio_stream() else {
        return metadata;
    };

    if let Some(duration) = audio.duration {
        metadata.set("duration", (duration * 10.0).round() / 10.0);
    }
    if let Some(bit_rate) = audio.bit_rate {
        metadata.set("bit_rate", bit_rate);
    }
    if let Some(sample_rate) = audio.sample_rate {
        metadata.set("sample_rate", sample_rate);
    }
    if !audio.tags.is_empty() {
        let tags: serde_json::Map<String, Value> = audio
            .tags
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
            .collect();
        metadata.set("tags", tags);
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ffprobe;

    fn probe(json: &str) -> Metadata {
        metadata_from_probe(&ffprobe::parse(json))
    }

    #[test]
    fn test_full_audio_stream() {
        let metadata = probe(
            r#"{"streams": [{
                "codec_type": "audio",
                "duration": "1.997551",
                "bit_rate": "107286",
                "sample_rate": "44100",
                "tags": {"encoder": "LAME3.100"}
            }]}"#,
        );
        assert_eq!(metadata.get_f64("duration"), Some(2.0));
        assert_eq!(metadata.get_u64("bit_rate"), Some(107286));
        assert_eq!(metadata.get_u64("sample_rate"), Some(44100));
        let tags = metadata.get("tags").unwrap();
        assert_eq!(tags["encoder"], "LAME3.100");
    }

    #[test]
    fn test_duration_rounds_to_one_decimal() {
        let metadata = probe(
            r#"{"streams": [{"codec_type": "audio", "duration": "123.456"}]}"#,
        );
        assert_eq!(metadata.get_f64("duration"), Some(123.5));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let metadata = probe(r#"{"streams": [{"codec_type": "audio", "sample_rate": "48000"}]}"#);
        assert_eq!(metadata.get_u64("sample_rate"), Some(48000));
        assert_eq!(metadata.get("duration"), None);
        assert_eq!(metadata.get("bit_rate"), None);
        assert_eq!(metadata.get("tags"), None);
    }

    #[test]
    fn test_ignores_video_streams() {
        let metadata = probe(
            r#"{"streams": [
                {"codec_type": "video", "width": 640, "height": 480},
                {"codec_type": "audio", "sample_rate": "22050"}
            ]}"#,
        );
        assert_eq!(metadata.get_u64("sample_rate"), Some(22050));
        assert_eq!(metadata.get("width"), None);
    }

    #[test]
    fn test_no_audio_stream_yields_empty_metadata() {
        assert!(probe(r#"{"streams": [{"codec_type": "video"}]}"#).is_empty());
        assert!(probe(r#"{}"#).is_empty());
    }
}
