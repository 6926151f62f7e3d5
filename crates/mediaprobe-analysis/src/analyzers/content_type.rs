//! Content-type analyzer
//!
//! Asks the `file` tool for the MIME type of the resolved bytes. Zero-byte
//! input short-circuits to the synthetic `inode/x-empty` type without
//! spawning anything.

use mediaprobe_core::{Metadata, EMPTY_CONTENT_TYPE};

use crate::invoker::ProcessInvoker;
use crate::parsers::mime;
use crate::resolver::ResolvedFile;

/// Arguments matching existing `file` deployments exactly.
pub(crate) const FILE_ARGS: &[&str] = &["-b", "--mime-type"];

pub struct ContentTypeAnalyzer {
    invoker: ProcessInvoker,
}

impl ContentTypeAnalyzer {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            invoker: ProcessInvoker::new(file_path),
        }
    }

    /// `{content_type}`, or empty when the tool is unavailable or fails.
    pub async fn metadata(&self, file: &ResolvedFile) -> Metadata {
        let mut metadata = Metadata::new();
        if file.is_empty() {
            metadata.set("content_type", EMPTY_CONTENT_TYPE);
            return metadata;
        }
        let result = match self.invoker.run(FILE_ARGS, file.path()).await {
            Ok(result) => result,
            Err(_) => return metadata,
        };
        if !result.success {
            return metadata;
        }
        metadata.set("content_type", mime::parse(&result.stdout));
        metadata
    }
}
