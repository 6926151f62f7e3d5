//! Media analyzer family
//!
//! One analyzer per media kind, dispatched as a closed enum. Every analyzer
//! exposes the same total operation: `metadata(&ResolvedFile) -> Metadata`.
//! Missing tools, unsupported files, and malformed output all degrade to an
//! empty map; nothing here raises past the metadata boundary.

pub mod audio;
pub mod content_type;
pub mod image;
pub mod null;
pub mod pdf;
pub mod video;

pub use audio::AudioAnalyzer;
pub use content_type::ContentTypeAnalyzer;
pub use image::{BackendCapability, ImageAnalyzer};
pub use null::NullAnalyzer;
pub use pdf::PdfAnalyzer;
pub use video::VideoAnalyzer;

use mediaprobe_core::Metadata;

use crate::invoker::ProcessInvoker;
use crate::parsers::ffprobe::{self, FfprobeOutput};
use crate::resolver::ResolvedFile;

/// Arguments matching existing ffprobe deployments exactly.
pub(crate) const FFPROBE_ARGS: &[&str] = &[
    "-print_format",
    "json",
    "-show_streams",
    "-show_format",
    "-v",
    "error",
];

/// Shared ffprobe front half for the video and audio analyzers. `None`
/// covers every degraded case: empty input, missing tool, failed run.
pub(crate) async fn run_ffprobe(
    invoker: &ProcessInvoker,
    file: &ResolvedFile,
) -> Option<FfprobeOutput> {
    if file.is_empty() {
        return None;
    }
    let result = invoker.run(FFPROBE_ARGS, file.path()).await.ok()?;
    if !result.success {
        return None;
    }
    Some(ffprobe::parse(&result.stdout))
}

/// The closed analyzer family.
pub enum Analyzer {
    Image(ImageAnalyzer),
    Video(VideoAnalyzer),
    Audio(AudioAnalyzer),
    Pdf(PdfAnalyzer),
    ContentType(ContentTypeAnalyzer),
    Null(NullAnalyzer),
}

impl Analyzer {
    /// Analyze one resolved file. Total: failures yield an empty map.
    pub async fn metadata(&self, file: &ResolvedFile) -> Metadata {
        match self {
            Analyzer::Image(analyzer) => analyzer.metadata(file).await,
            Analyzer::Video(analyzer) => analyzer.metadata(file).await,
            Analyzer::Audio(analyzer) => analyzer.metadata(file).await,
            Analyzer::Pdf(analyzer) => analyzer.metadata(file).await,
            Analyzer::ContentType(analyzer) => analyzer.metadata(file).await,
            Analyzer::Null(analyzer) => analyzer.metadata(file),
        }
    }
}
