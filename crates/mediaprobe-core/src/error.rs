//! Error types module
//!
//! The error taxonomy is deliberately small. Unsupported or corrupt media is
//! not an error anywhere in this workspace: analyzers degrade to an empty
//! [`Metadata`](crate::Metadata) map instead. Errors are reserved for the
//! cases a caller can act on — an attachable that cannot be resolved to
//! bytes, and a missing external tool.

use std::io;

/// Failure to turn an attachable into a readable on-disk file.
///
/// This is the one error that `metadata_for` propagates to the caller: it
/// indicates an integration problem (an unknown attachable shape, a bad
/// signed token, an unreachable blob store), not a problem with the file
/// content itself.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("unsupported attachable kind: {kind}")]
    UnsupportedAttachable { kind: String },

    #[error("invalid or expired signed token")]
    InvalidSignedToken,

    #[error("blob store error: {0}")]
    Blob(#[source] anyhow::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Failure to spawn an external inspection tool.
///
/// A tool that spawns and exits non-zero is *not* an `InvokeError`; that
/// outcome is routine "unsupported file" and is reported through
/// `ProbeResult::success`.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("{tool} is not installed")]
    ToolNotInstalled { tool: String },

    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}

impl InvokeError {
    /// The tool name the error refers to.
    pub fn tool(&self) -> &str {
        match self {
            InvokeError::ToolNotInstalled { tool } => tool,
            InvokeError::Spawn { tool, .. } => tool,
        }
    }
}

/// Failure of the content-type spoof cross-check.
///
/// Unlike metadata extraction, a missing `file` binary here is surfaced to
/// the caller: silently skipping the check would let spoofed uploads pass.
#[derive(Debug, thiserror::Error)]
pub enum SpoofCheckError {
    #[error("{tool} is not installed; cannot verify the content type of uploaded files")]
    ToolNotInstalled { tool: String },

    #[error("content type probe failed: {0}")]
    Probe(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl From<InvokeError> for SpoofCheckError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::ToolNotInstalled { tool } => SpoofCheckError::ToolNotInstalled { tool },
            InvokeError::Spawn { tool, source } => {
                SpoofCheckError::Probe(format!("failed to spawn {}: {}", tool, source))
            }
        }
    }
}
