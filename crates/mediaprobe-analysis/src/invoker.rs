//! External tool invocation
//!
//! One spawn per analysis, stdout captured, no retries. A non-zero exit is
//! routine ("tool ran and found nothing") and is reported through
//! [`ProbeResult::success`]; only a binary missing from PATH becomes an
//! error, because that is a deployment problem worth logging once.

use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tokio::process::Command;

use mediaprobe_core::InvokeError;

/// Raw result of one tool invocation.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub success: bool,
    pub stdout: String,
}

/// Invokes one configured external tool against file paths.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The bare tool name, for logs and errors (strips any directory part).
    pub fn tool_name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.program)
    }

    /// Run the tool with `args` followed by `path`, capturing stdout.
    #[tracing::instrument(skip(self, args, path), fields(tool = %self.tool_name()))]
    pub async fn run(&self, args: &[&str], path: &Path) -> Result<ProbeResult, InvokeError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.program)
            .args(args)
            .arg(path)
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        let success = output.status.success();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if success {
            tracing::debug!(
                duration_ms = start.elapsed().as_millis(),
                stdout_bytes = stdout.len(),
                "Tool invocation completed"
            );
        } else {
            tracing::debug!(
                exit_code = output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "Tool exited with failure status"
            );
        }

        Ok(ProbeResult { success, stdout })
    }

    fn spawn_error(&self, err: io::Error) -> InvokeError {
        let tool = self.tool_name().to_string();
        if err.kind() == io::ErrorKind::NotFound {
            log_missing_tool_once(&tool);
            InvokeError::ToolNotInstalled { tool }
        } else {
            InvokeError::Spawn { tool, source: err }
        }
    }
}

/// Log the missing-tool condition once per tool per process. A race just
/// logs twice, which is harmless.
fn log_missing_tool_once(tool: &str) {
    static SEEN: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    let seen = SEEN.get_or_init(|| Mutex::new(HashSet::new()));
    let mut seen = match seen.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if seen.insert(tool.to_string()) {
        tracing::info!(
            tool = %tool,
            "Skipping analysis because the tool is not installed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tool_name_strips_directories() {
        assert_eq!(ProcessInvoker::new("ffprobe").tool_name(), "ffprobe");
        assert_eq!(
            ProcessInvoker::new("/usr/local/bin/pdfinfo").tool_name(),
            "pdfinfo"
        );
    }

    #[tokio::test]
    async fn test_run_captures_stdout_on_success() {
        let invoker = ProcessInvoker::new("echo");
        let result = invoker
            .run(&["-n", "hello"], Path::new("world"))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello world");
    }

    #[tokio::test]
    async fn test_missing_binary_is_tool_not_installed() {
        let invoker = ProcessInvoker::new("mediaprobe-no-such-tool");
        let err = invoker
            .run(&[], &PathBuf::from("/tmp/ignored"))
            .await
            .unwrap_err();
        match err {
            InvokeError::ToolNotInstalled { tool } => {
                assert_eq!(tool, "mediaprobe-no-such-tool")
            }
            other => panic!("expected ToolNotInstalled, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let invoker = ProcessInvoker::new("false");
        let result = invoker.run(&[], Path::new("/tmp/ignored")).await.unwrap();
        assert!(!result.success);
    }
}
