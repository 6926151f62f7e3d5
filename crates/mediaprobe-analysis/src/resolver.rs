//! Attachable resolution
//!
//! Normalizes every [`Attachable`] variant into a [`ResolvedFile`]: a
//! seekable on-disk file plus the resolved filename and declared content
//! type. The temp file (when one is created) is owned exclusively by the
//! `ResolvedFile` and removed when it is dropped, on every exit path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::StreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use mediaprobe_core::ResolveError;

use crate::attachable::{Attachable, BlobStore, TokenVerifier};

/// A resolved attachable: one readable file on disk.
///
/// Owns at most one temporary file; a path-based attachable is used in place
/// and owns nothing. Not shared across threads; consumed within a single
/// analysis call.
#[derive(Debug)]
pub struct ResolvedFile {
    // Held only for its Drop impl, which deletes the temp file.
    _temp: Option<NamedTempFile>,
    path: PathBuf,
    filename: String,
    content_type: Option<String>,
    byte_size: u64,
}

impl ResolvedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// Zero-byte files are valid and flow through to the analyzer, which
    /// turns them into empty metadata.
    pub fn is_empty(&self) -> bool {
        self.byte_size == 0
    }
}

/// Creates a temp file whose extension matches the source filename, so
/// extension-sniffing tools behave the same as on the original upload.
fn temp_file_for(filename: &str) -> Result<NamedTempFile, ResolveError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("mediaprobe-");
    let suffix = Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()));
    if let Some(suffix) = &suffix {
        builder.suffix(suffix.as_str());
    }
    Ok(builder.tempfile()?)
}

/// Resolves attachables against an optional blob store and token verifier.
#[derive(Clone, Default)]
pub struct AttachableResolver {
    blobs: Option<Arc<dyn BlobStore>>,
    tokens: Option<Arc<dyn TokenVerifier>>,
}

impl AttachableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob_store(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.blobs = Some(store);
        self
    }

    pub fn with_token_verifier(mut self, verifier: Arc<dyn TokenVerifier>) -> Self {
        self.tokens = Some(verifier);
        self
    }

    /// Resolve one attachable to an on-disk file.
    ///
    /// Blob and signed-token attachables require the corresponding
    /// collaborator to be configured; resolving one without it is an
    /// integration error, reported as `UnsupportedAttachable`.
    pub async fn resolve(&self, attachable: &Attachable) -> Result<ResolvedFile, ResolveError> {
        match attachable {
            Attachable::Bytes {
                data,
                filename,
                content_type,
            } => {
                let temp = temp_file_for(filename)?;
                tokio::fs::write(temp.path(), data).await?;
                Ok(ResolvedFile {
                    path: temp.path().to_path_buf(),
                    _temp: Some(temp),
                    filename: filename.clone(),
                    content_type: content_type.clone(),
                    byte_size: data.len() as u64,
                })
            }
            Attachable::Blob { key } => self.resolve_blob(key).await,
            Attachable::SignedToken(token) => {
                let verifier = self.tokens.as_ref().ok_or_else(|| {
                    ResolveError::UnsupportedAttachable {
                        kind: attachable.kind().to_string(),
                    }
                })?;
                let key = verifier
                    .verify(token)
                    .ok_or(ResolveError::InvalidSignedToken)?;
                self.resolve_blob(&key).await
            }
            Attachable::File(path) => {
                let meta = tokio::fs::metadata(path).await?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok(ResolvedFile {
                    _temp: None,
                    path: path.clone(),
                    filename,
                    content_type: None,
                    byte_size: meta.len(),
                })
            }
        }
    }

    async fn resolve_blob(&self, key: &str) -> Result<ResolvedFile, ResolveError> {
        let store = self
            .blobs
            .as_ref()
            .ok_or_else(|| ResolveError::UnsupportedAttachable {
                kind: "blob".to_string(),
            })?;

        let info = store.blob_info(key).await?;
        let filename = info.filename.unwrap_or_else(|| key.to_string());
        let temp = temp_file_for(&filename)?;

        // Stream chunks straight to disk; never buffer the whole blob.
        let mut stream = store.download_stream(key).await?;
        let mut file = tokio::fs::File::create(temp.path()).await?;
        let mut byte_size = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            byte_size += chunk.len() as u64;
        }
        file.flush().await?;
        drop(file);

        tracing::debug!(key = %key, byte_size, "Blob downloaded for analysis");

        Ok(ResolvedFile {
            path: temp.path().to_path_buf(),
            _temp: Some(temp),
            filename,
            content_type: info.content_type,
            byte_size,
        })
    }
}
