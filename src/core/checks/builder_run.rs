use crate::core::{CheckOutcome, ProjectCheck};
use crate::utils::error::{GeneError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const ECHOED_LINES: usize = 5;

/// Runs the dataset builder as a child process and waits at most `timeout`.
pub struct BuilderRunCheck {
    program: PathBuf,
    args: Vec<String>,
    working_dir: PathBuf,
    timeout: Duration,
}

impl BuilderRunCheck {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command_name(&self) -> String {
        self.program.display().to_string()
    }

    pub async fn execute(&self) -> Result<Output> {
        tracing::debug!(
            "Spawning {} in {} (timeout {:?})",
            self.command_name(),
            self.working_dir.display(),
            self.timeout
        );

        let child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // 逾時後 future 被丟棄時一併終止子行程
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| GeneError::ProcessError {
                command: self.command_name(),
                message: format!("failed to spawn: {}", e),
            })?;

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => Ok(output?),
            Err(_) => Err(GeneError::Timeout {
                command: self.command_name(),
                timeout: self.timeout,
            }),
        }
    }
}

#[async_trait]
impl ProjectCheck for BuilderRunCheck {
    fn name(&self) -> &str {
        "Analysis script"
    }

    async fn run(&self) -> CheckOutcome {
        let output = match self.execute().await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Builder invocation failed: {}", e);
                let label = if e.is_timeout() {
                    "❌ Analysis script timed out"
                } else {
                    "❌ Analysis script could not be run"
                };
                return CheckOutcome::fail(
                    self.name(),
                    vec![label.to_string(), format!("   Error: {}", e)],
                );
            }
        };

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let mut details = vec![
                "✅ Analysis script ran successfully".to_string(),
                "   Output:".to_string(),
            ];
            details.extend(
                stdout
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .take(ECHOED_LINES)
                    .map(|line| format!("     {}", line)),
            );
            CheckOutcome::pass(self.name(), details)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("Builder exited with {}", output.status);
            CheckOutcome::fail(
                self.name(),
                vec![
                    format!("❌ Analysis script failed ({})", output.status),
                    format!("   Error: {}", stderr.trim_end()),
                ],
            )
        }
    }
}
