//! ffprobe JSON output parsing
//!
//! Decodes `{"streams": [...], "format": {...}}` into typed records.
//! ffprobe reports most numbers as JSON strings, so the numeric fields
//! accept either form and fail soft to absent.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Full decoded ffprobe document.
#[derive(Debug, Default, Deserialize)]
pub struct FfprobeOutput {
    #[serde(default)]
    pub streams: Vec<FfprobeStream>,
    #[serde(default)]
    pub format: FfprobeFormat,
}

#[derive(Debug, Default, Deserialize)]
pub struct FfprobeFormat {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub bit_rate: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FfprobeStream {
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub width: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub height: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub bit_rate: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub sample_rate: Option<u64>,
    #[serde(default)]
    pub display_aspect_ratio: Option<String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub side_data_list: Vec<SideData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SideData {
    #[serde(default)]
    pub side_data_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rotation: Option<f64>,
}

/// Parse ffprobe stdout. Undecodable output yields an empty document, which
/// downstream treats the same as "no streams found".
pub fn parse(stdout: &str) -> FfprobeOutput {
    serde_json::from_str(stdout).unwrap_or_default()
}

impl FfprobeOutput {
    /// First stream whose codec_type is "video".
    pub fn video_stream(&self) -> Option<&FfprobeStream> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
    }

    /// First stream whose codec_type is "audio".
    pub fn audio_stream(&self) -> Option<&FfprobeStream> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("audio"))
    }
}

impl FfprobeStream {
    /// Rotation in degrees, from the `rotate` tag or a "Display Matrix"
    /// side-data block. Tag takes precedence when both are present.
    pub fn rotation(&self) -> Option<i64> {
        if let Some(angle) = self.tags.get("rotate").and_then(|r| r.parse::<i64>().ok()) {
            return Some(angle);
        }
        self.side_data_list
            .iter()
            .find(|sd| sd.side_data_type.as_deref() == Some("Display Matrix"))
            .and_then(|sd| sd.rotation)
            .map(|deg| deg.round() as i64)
    }

    /// `display_aspect_ratio` as (numerator, denominator), e.g. "16:9".
    pub fn display_aspect_ratio_parts(&self) -> Option<(u64, u64)> {
        let dar = self.display_aspect_ratio.as_deref()?;
        let (num, den) = dar.split_once(':')?;
        let num = num.trim().parse::<u64>().ok()?;
        let den = den.trim().parse::<u64>().ok()?;
        if num == 0 || den == 0 {
            return None;
        }
        Some((num, den))
    }
}

/// Accept a JSON number or a numeric string; anything else is absent.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
