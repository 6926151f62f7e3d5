//! Top-level facade
//!
//! [`MediaProbe`] wires the resolver, the analyzer family, and the spoof
//! cross-check behind the two operations the validation layer consumes:
//! `metadata_for` and `spoofed`. Each call resolves the attachable to one
//! on-disk file, runs at most one external process, and releases the file
//! on every exit path.

use std::sync::Arc;

use mediaprobe_core::{AnalyzerConfig, Metadata, ResolveError, SpoofCheckError};

use crate::analyzers::BackendCapability;
use crate::attachable::{Attachable, BlobStore, TokenVerifier};
use crate::invoker::ProcessInvoker;
use crate::resolver::AttachableResolver;
use crate::selector::{analyzer_for, MediaKind};
use crate::spoof;

/// Analysis entry point. Cheap to clone; safe to share across tasks (all
/// state is immutable after construction).
#[derive(Clone)]
pub struct MediaProbe {
    config: AnalyzerConfig,
    capability: BackendCapability,
    resolver: AttachableResolver,
}

impl MediaProbe {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            capability: BackendCapability::detect(),
            resolver: AttachableResolver::new(),
        }
    }

    /// Attach a blob store so `Attachable::Blob` and `Attachable::SignedToken`
    /// resolve.
    pub fn with_blob_store(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.resolver = self.resolver.with_blob_store(store);
        self
    }

    pub fn with_token_verifier(mut self, verifier: Arc<dyn TokenVerifier>) -> Self {
        self.resolver = self.resolver.with_token_verifier(verifier);
        self
    }

    /// Extract metadata for one attachable.
    ///
    /// Only resolution failures propagate; every content-level problem
    /// (corrupt file, missing tool, unsupported format) yields an empty
    /// map. Pure function of the resolved content, so results may be
    /// cached by the caller.
    pub async fn metadata_for(
        &self,
        attachable: &Attachable,
        kind: MediaKind,
    ) -> Result<Metadata, ResolveError> {
        let file = self.resolver.resolve(attachable).await?;
        let analyzer = analyzer_for(kind, &self.config, self.capability);
        Ok(analyzer.metadata(&file).await)
    }

    /// Cross-check a declared content type against the attachable's bytes.
    pub async fn spoofed(
        &self,
        attachable: &Attachable,
        declared: &str,
    ) -> Result<bool, SpoofCheckError> {
        let file = self.resolver.resolve(attachable).await?;
        let invoker = ProcessInvoker::new(self.config.file_path.clone());
        spoof::spoofed(declared, &file, &invoker).await
    }
}

impl Default for MediaProbe {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
