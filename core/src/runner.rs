//! Emulator backend runners
//!
//! A [`Runner`] knows how to start the emulation backend for one platform
//! from a fully populated configuration store. Backends run as separate
//! processes; the runner only prepares the command line and waits for it.

pub mod vice;

use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use hearth_shared::Platform;

use crate::store::ConfigStore;

pub use vice::ViceRunner;

/// Trait for platform-specific emulator runners.
pub trait Runner: Send {
    /// Platform this runner starts.
    fn platform(&self) -> Platform;

    /// Build the backend command for `config` without starting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration lacks what the backend needs
    /// (e.g. no media attached) or a location cannot be resolved.
    fn command(&self, config: &ConfigStore) -> Result<Command>;

    /// Start the backend and wait for it to exit.
    fn run(&self, config: &ConfigStore) -> Result<ExitStatus> {
        let mut cmd = self.command(config)?;
        tracing::info!("Running {} backend: {:?}", self.platform(), cmd);

        let status = cmd.status().with_context(|| {
            format!(
                "Failed to run '{}'. Make sure it is installed and in your PATH.",
                cmd.get_program().to_string_lossy()
            )
        })?;

        if !status.success() {
            tracing::warn!("{} backend exited with {}", self.platform(), status);
        }
        Ok(status)
    }
}

/// Render a command as a single shell-like line for display.
pub fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|arg| {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                format!("\"{arg}\"")
            } else {
                arg.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
