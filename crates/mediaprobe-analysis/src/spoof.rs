//! Content-type spoof cross-check
//!
//! Compares the declared content type against the type the `file` tool
//! derives from the actual bytes, up to the registered alias families.
//! Unlike metadata extraction, a missing `file` binary is an error here:
//! this check exists to catch malicious uploads, and silently passing
//! everything through would be a security regression.

use mediaprobe_core::{content_type, SpoofCheckError};

use crate::analyzers::content_type::FILE_ARGS;
use crate::invoker::ProcessInvoker;
use crate::resolver::ResolvedFile;

/// Whether the declared content type misrepresents the file's bytes.
///
/// Zero-byte content is reported as spoofed: no reliable type can be
/// derived from it, so the declaration cannot be trusted.
pub async fn spoofed(
    declared: &str,
    file: &ResolvedFile,
    invoker: &ProcessInvoker,
) -> Result<bool, SpoofCheckError> {
    if file.is_empty() {
        tracing::debug!(declared = %declared, "Zero-byte content treated as spoofed");
        return Ok(true);
    }

    let result = invoker.run(FILE_ARGS, file.path()).await?;
    if !result.success {
        // The tool ran but could not type the content; without a derived
        // type the declaration cannot be verified.
        tracing::warn!(declared = %declared, "Content type probe exited with failure status");
        return Ok(true);
    }

    let derived = crate::parsers::mime::parse(&result.stdout);
    let matched = content_type::matches(declared, &derived);
    if !matched {
        tracing::warn!(
            declared = %declared,
            derived = %derived,
            "Declared content type does not match file content"
        );
    }
    Ok(!matched)
}
