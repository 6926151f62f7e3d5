//! Analyzer selection
//!
//! Maps a declared or sniffed media type to the analyzer variant that
//! handles it. Anything without a specific analyzer falls through to
//! [`NullAnalyzer`].

use mediaprobe_core::AnalyzerConfig;

use crate::analyzers::{
    Analyzer, AudioAnalyzer, BackendCapability, ContentTypeAnalyzer, ImageAnalyzer, NullAnalyzer,
    PdfAnalyzer, VideoAnalyzer,
};

/// The media kinds this crate can analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Pdf,
    ContentType,
    Other,
}

impl MediaKind {
    /// Classify a MIME type into a media kind.
    pub fn from_content_type(content_type: &str) -> Self {
        let normalized = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        if normalized == "application/pdf" {
            MediaKind::Pdf
        } else if normalized.starts_with("image/") {
            MediaKind::Image
        } else if normalized.starts_with("video/") {
            MediaKind::Video
        } else if normalized.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Other
        }
    }
}

/// Build the analyzer for a media kind from configuration and the detected
/// backend capability.
pub fn analyzer_for(
    kind: MediaKind,
    config: &AnalyzerConfig,
    capability: BackendCapability,
) -> Analyzer {
    match kind {
        MediaKind::Image => {
            Analyzer::Image(ImageAnalyzer::new(config.image_backend, capability))
        }
        MediaKind::Video => Analyzer::Video(VideoAnalyzer::new(config.ffprobe_path.clone())),
        MediaKind::Audio => Analyzer::Audio(AudioAnalyzer::new(config.ffprobe_path.clone())),
        MediaKind::Pdf => Analyzer::Pdf(PdfAnalyzer::new(config.pdfinfo_path.clone())),
        MediaKind::ContentType => {
            Analyzer::ContentType(ContentTypeAnalyzer::new(config.file_path.clone()))
        }
        MediaKind::Other => Analyzer::Null(NullAnalyzer),
    }
}
