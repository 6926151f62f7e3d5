//! Mediaprobe Analysis Library
//!
//! Extracts normalized structural metadata (dimensions, duration, bit rate,
//! page count, rotation-corrected sizes) from attached files by invoking
//! external inspection tools (`ffprobe`, `pdfinfo`, `file`) and in-process
//! image backends, and cross-checks declared content types against actual
//! bytes.

pub mod analyzers;
pub mod attachable;
pub mod invoker;
pub mod orientation;
pub mod parsers;
pub mod probe;
pub mod resolver;
pub mod selector;
pub mod spoof;

// Re-export commonly used types
pub use analyzers::{
    Analyzer, AudioAnalyzer, BackendCapability, ContentTypeAnalyzer, ImageAnalyzer, NullAnalyzer,
    PdfAnalyzer, VideoAnalyzer,
};
pub use attachable::{Attachable, BlobInfo, BlobStore, ByteStream, TokenVerifier};
pub use invoker::{ProbeResult, ProcessInvoker};
pub use mediaprobe_core::{
    AnalyzerConfig, ImageBackend, InvokeError, Metadata, ResolveError, SpoofCheckError,
    EMPTY_CONTENT_TYPE,
};
pub use orientation::Rotation;
pub use probe::MediaProbe;
pub use resolver::{AttachableResolver, ResolvedFile};
pub use selector::{analyzer_for, MediaKind};
pub use spoof::spoofed;
