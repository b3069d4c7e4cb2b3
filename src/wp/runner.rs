//! Command execution behind a trait, so the orchestrator can be driven by
//! a scripted runner in tests.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::RunnerError;
use crate::wp::WpCommand;

/// Locale pinned for every child so wp-cli output stays parseable
/// regardless of the operator's shell environment.
const CHILD_LOCALE: &str = "de_CH.UTF-8";

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run one command and return its combined stdout and stderr.
    ///
    /// A non-zero exit is not an error here. Callers match on the output
    /// text; only failing to spawn or to read the child is fatal.
    async fn run(&self, command: &WpCommand) -> Result<String, RunnerError>;
}

/// Production runner invoking the real wp-cli binary.
pub struct WpCliRunner {
    wp_bin: String,
}

impl WpCliRunner {
    pub fn new(wp_bin: impl Into<String>) -> Self {
        Self {
            wp_bin: wp_bin.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for WpCliRunner {
    async fn run(&self, command: &WpCommand) -> Result<String, RunnerError> {
        debug!(command = %command, "running wp-cli");

        let child = Command::new(&self.wp_bin)
            .args(command.to_argv())
            .env("LC_ALL", CHILD_LOCALE)
            .env("LANG", CHILD_LOCALE)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| RunnerError::Capture {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            debug!(command = %command, status = %output.status, "wp-cli exited non-zero");
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(stderr.trim_end());
        }
        Ok(text.trim_end().to_string())
    }
}
