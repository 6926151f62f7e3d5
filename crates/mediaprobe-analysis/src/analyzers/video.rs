//! Video analyzer
//!
//! Probes the container with ffprobe and normalizes the video stream's
//! dimensions: rotation metadata swaps width/height, and an anamorphic
//! display aspect ratio overrides the encoded height.

use mediaprobe_core::Metadata;

use crate::invoker::ProcessInvoker;
use crate::orientation::Rotation;
use crate::parsers::ffprobe::FfprobeOutput;
use crate::resolver::ResolvedFile;

use super::run_ffprobe;

pub struct VideoAnalyzer {
    invoker: ProcessInvoker,
}

impl VideoAnalyzer {
    pub fn new(ffprobe_path: impl Into<String>) -> Self {
        Self {
            invoker: ProcessInvoker::new(ffprobe_path),
        }
    }

    /// `{width, height, duration, angle, audio, video}`, or empty when
    /// ffprobe is unavailable, fails, or finds no video stream.
    pub async fn metadata(&self, file: &ResolvedFile) -> Metadata {
        match run_ffprobe(&self.invoker, file).await {
            Some(probe) => metadata_from_probe(&probe),
            None => Metadata::new(),
        }
    }
}

fn metadata_from_probe(probe: &FfprobeOutput) -> Metadata {
    let mut metadata = Metadata::new();
    let Some(video) = probe.video_stream() else {
        return metadata;
    };

    let angle = video.rotation();
    let rotation = angle.map(Rotation::from_degrees).unwrap_or_default();

    let encoded_width = video.width;
    let encoded_height = video.height;

    // When the container's display aspect ratio disagrees with the encoded
    // frame (anamorphic content), derive the display height from it.
    let computed_height = match (encoded_width, video.display_aspect_ratio_parts()) {
        (Some(width), Some((num, den))) => {
            Some(((width as f64) * (den as f64) / (num as f64)).round() as u64)
        }
        _ => None,
    };
    let display_height = computed_height.or(encoded_height);

    let (width, height) = if rotation.swaps_dimensions() {
        (display_height, encoded_width)
    } else {
        (encoded_width, display_height)
    };

    if let Some(width) = width {
        metadata.set("width", width);
    }
    if let Some(height) = height {
        metadata.set("height", height);
    }
    if let Some(duration) = video.duration.or(probe.format.duration) {
        metadata.set("duration", duration);
    }
    if let Some(angle) = angle {
        metadata.set("angle", angle);
    }
    metadata.set("audio", probe.audio_stream().is_some());
    metadata.set("video", true);
    metadata
}
