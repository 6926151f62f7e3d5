//! Attachable model
//!
//! An attachable is whatever the integration layer hands us: raw bytes from
//! an upload, a key into a blob store, a signed token that resolves to such
//! a key, or a plain file path. This crate never depends on any framework's
//! attachment types; the boundary is this enum plus the two collaborator
//! traits below.

use std::path::PathBuf;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use mediaprobe_core::ResolveError;

/// Chunked byte stream yielded by a blob store download.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, ResolveError>> + Send>>;

/// Denormalized description of a stored blob.
#[derive(Debug, Clone)]
pub struct BlobInfo {
    pub key: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// Read access to persisted blobs.
///
/// Implemented by the integration layer over whatever storage it uses.
/// Downloads are streamed so large attachments never sit fully in memory.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Look up the blob's filename and declared content type.
    async fn blob_info(&self, key: &str) -> Result<BlobInfo, ResolveError>;

    /// Stream the blob's content in chunks.
    async fn download_stream(&self, key: &str) -> Result<ByteStream, ResolveError>;
}

/// Verifies signed blob tokens.
pub trait TokenVerifier: Send + Sync {
    /// Returns the blob key the token refers to, or `None` when the
    /// signature is invalid, expired, or unknown.
    fn verify(&self, token: &str) -> Option<String>;
}

/// One of the supported attachable representations.
#[derive(Debug, Clone)]
pub enum Attachable {
    /// In-memory bytes with a filename and an optional declared type.
    Bytes {
        data: Bytes,
        filename: String,
        content_type: Option<String>,
    },
    /// A key into the configured [`BlobStore`].
    Blob { key: String },
    /// An opaque signed token resolvable to a blob key.
    SignedToken(String),
    /// An existing file, used in place without copying.
    File(PathBuf),
}

impl Attachable {
    /// Short tag for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Attachable::Bytes { .. } => "bytes",
            Attachable::Blob { .. } => "blob",
            Attachable::SignedToken(_) => "signed_token",
            Attachable::File(_) => "file",
        }
    }
}
