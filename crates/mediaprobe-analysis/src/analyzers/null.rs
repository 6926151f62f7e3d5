//! Fallback analyzer for media kinds nothing else handles

use mediaprobe_core::Metadata;

use crate::resolver::ResolvedFile;

/// Always returns empty metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnalyzer;

impl NullAnalyzer {
    pub fn metadata(&self, _file: &ResolvedFile) -> Metadata {
        Metadata::new()
    }
}
