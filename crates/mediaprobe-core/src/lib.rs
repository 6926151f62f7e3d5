//! Mediaprobe Core Library
//!
//! Shared types for the mediaprobe workspace: the error taxonomy, analyzer
//! configuration, the `Metadata` map returned by every analyzer, and the
//! content-type family registry used by spoof detection.

pub mod config;
pub mod content_type;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use config::{AnalyzerConfig, ImageBackend};
pub use content_type::EMPTY_CONTENT_TYPE;
pub use error::{InvokeError, ResolveError, SpoofCheckError};
pub use metadata::Metadata;
