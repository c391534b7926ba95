//! Sound played when a notification starts showing.

use std::process::Stdio;

use tokio::process::Command;

/// Shell command run, detached, every time a popup starts sliding in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCommand {
    command: String,
}

impl SoundCommand {
    /// `None` for an empty command.
    pub fn new(command: impl Into<String>) -> Option<Self> {
        let command = command.into();
        if command.trim().is_empty() {
            return None;
        }
        Some(Self { command })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Start the command and return immediately.
    ///
    /// The exit status is only logged; a command that fails to start is ignored.
    pub fn play(&self) {
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::debug!(command = %self.command, "No runtime, sound skipped");
            return;
        }

        let spawned = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                let command = self.command.clone();
                tokio::spawn(async move {
                    match child.wait().await {
                        Ok(status) => tracing::debug!(%command, %status, "Sound command exited"),
                        Err(e) => {
                            tracing::debug!(%command, error = %e, "Sound command wait failed")
                        }
                    }
                });
            }
            Err(e) => tracing::debug!(
                command = %self.command,
                error = %e,
                "Sound command failed to start"
            ),
        }
    }
}
