// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Script execution through an external interpreter.
//!
//! [`ProcessExecutor`] is the only code in the workspace that spawns processes.
//! Tools depend on the [`ScriptExecutor`] trait so tests can swap in a fake.

use async_trait::async_trait;
use folio_core::FolioError;
use tracing::{debug, warn};

/// One interpreter call: `<command> <flag> <script>`.
///
/// Built per tool call and dropped once the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInvocation {
    pub command: String,
    pub flag: String,
    pub script: String,
}

impl ScriptInvocation {
    pub fn new(
        command: impl Into<String>,
        flag: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            flag: flag.into(),
            script: script.into(),
        }
    }

    /// Arguments passed to the command. The script is always a single argument.
    pub fn args(&self) -> [&str; 2] {
        [self.flag.as_str(), self.script.as_str()]
    }
}

/// Runs a script and returns its trimmed standard output.
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    async fn execute(&self, invocation: &ScriptInvocation) -> Result<String, FolioError>;
}

/// Executes invocations as child processes via `tokio::process`.
///
/// No shell is involved: the script text is handed to the interpreter as one argv entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptExecutor for ProcessExecutor {
    async fn execute(&self, invocation: &ScriptInvocation) -> Result<String, FolioError> {
        debug!(
            command = %invocation.command,
            script_len = invocation.script.len(),
            "executing script"
        );

        let output = tokio::process::Command::new(&invocation.command)
            .args(invocation.args())
            .output()
            .await
            .map_err(|e| FolioError::Spawn {
                command: invocation.command.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();

        // Automation tooling writes warnings to stderr even when it succeeds.
        if !stderr.is_empty() {
            warn!(command = %invocation.command, stderr = %stderr, "script wrote to stderr");
        }

        if !output.status.success() {
            let exit_code = output.status.code();
            let message = if stderr.is_empty() {
                match exit_code {
                    Some(code) => format!("exit status {code}"),
                    None => "terminated by signal".to_string(),
                }
            } else {
                stderr.to_string()
            };
            return Err(FolioError::Execution { message, exit_code });
        }

        Ok(stdout.trim().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn sh(script: &str) -> ScriptInvocation {
        ScriptInvocation::new("sh", "-c", script)
    }

    #[test]
    fn osascript_invocation_passes_script_as_one_argument() {
        let invocation =
            ScriptInvocation::new("osascript", "-e", "tell application \"Pages\"\nend tell");
        assert_eq!(invocation.command, "osascript");
        assert_eq!(
            invocation.args(),
            ["-e", "tell application \"Pages\"\nend tell"]
        );
    }

    #[tokio::test]
    async fn returns_trimmed_stdout() {
        let out = ProcessExecutor.execute(&sh("printf '  hello\\n\\n'")).await.unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn script_text_is_not_shell_interpolated() {
        // The argument reaches the interpreter verbatim, quotes and all.
        let out = ProcessExecutor
            .execute(&ScriptInvocation::new("printf", "%s", "a \"b\" $HOME `c`"))
            .await
            .unwrap();
        assert_eq!(out, "a \"b\" $HOME `c`");
    }

    #[tokio::test]
    async fn nonzero_exit_carries_stderr() {
        let err = ProcessExecutor
            .execute(&sh("echo 'Pages got an error' >&2; exit 1"))
            .await
            .unwrap_err();
        match err {
            FolioError::Execution { message, exit_code } => {
                assert_eq!(message, "Pages got an error");
                assert_eq!(exit_code, Some(1));
            }
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn nonzero_exit_without_stderr_reports_status() {
        let err = ProcessExecutor.execute(&sh("exit 3")).await.unwrap_err();
        assert!(err.to_string().contains("exit status 3"));
    }

    #[tokio::test]
    async fn missing_interpreter_is_a_spawn_error() {
        let invocation = ScriptInvocation::new("folio-no-such-interpreter", "-e", "return 1");
        let err = ProcessExecutor.execute(&invocation).await.unwrap_err();
        assert!(matches!(
            err,
            FolioError::Spawn { ref command, .. } if command == "folio-no-such-interpreter"
        ));
    }

    #[tokio::test]
    #[traced_test]
    async fn stderr_on_success_is_logged_not_fatal() {
        let out = ProcessExecutor
            .execute(&sh("echo 'deprecated dictionary' >&2; echo ok"))
            .await
            .unwrap();
        assert_eq!(out, "ok");
        assert!(logs_contain("deprecated dictionary"));
    }
}
