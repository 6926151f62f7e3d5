//! Configuration module
//!
//! Tool locations and the image backend choice. Defaults are the bare
//! command names resolved via PATH; deployments with tools in non-standard
//! locations override per tool.

use std::env;

/// Which in-process library the image analyzer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageBackend {
    /// Full decode via the `image` crate. Slower, but validates the pixel
    /// data and supports every format the crate is built with.
    #[default]
    Decoder,
    /// Header-only probe via `imagesize`. Reads a few hundred bytes at most.
    HeaderProbe,
}

impl ImageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "decoder" | "image" => Some(ImageBackend::Decoder),
            "header-probe" | "header_probe" | "imagesize" => Some(ImageBackend::HeaderProbe),
            _ => None,
        }
    }
}

/// Analyzer configuration: external tool paths and the image backend.
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub ffprobe_path: String,
    pub pdfinfo_path: String,
    pub file_path: String,
    pub image_backend: ImageBackend,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: "ffprobe".to_string(),
            pdfinfo_path: "pdfinfo".to_string(),
            file_path: "file".to_string(),
            image_backend: ImageBackend::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `MEDIAPROBE_FFPROBE_PATH`,
    /// `MEDIAPROBE_PDFINFO_PATH`, `MEDIAPROBE_FILE_PATH`,
    /// `MEDIAPROBE_IMAGE_BACKEND` (`decoder` or `header-probe`).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let image_backend = match env::var("MEDIAPROBE_IMAGE_BACKEND") {
            Ok(value) => ImageBackend::parse(&value).unwrap_or_else(|| {
                tracing::warn!(
                    value = %value,
                    "Unknown MEDIAPROBE_IMAGE_BACKEND, using default backend"
                );
                defaults.image_backend
            }),
            Err(_) => defaults.image_backend,
        };

        Self {
            ffprobe_path: env::var("MEDIAPROBE_FFPROBE_PATH").unwrap_or(defaults.ffprobe_path),
            pdfinfo_path: env::var("MEDIAPROBE_PDFINFO_PATH").unwrap_or(defaults.pdfinfo_path),
            file_path: env::var("MEDIAPROBE_FILE_PATH").unwrap_or(defaults.file_path),
            image_backend,
        }
    }
}
