/// Spawning the editor with inherited stdio.
use std::process::{Command, Stdio};

use super::errors::LaunchError;
use crate::resolve::Target;

/// Runs an external program and waits for it.
pub trait Launcher {
    /// Run `command` with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError` if the process cannot start or exits unsuccessfully.
    fn launch(&self, command: &str, args: &[String]) -> Result<(), LaunchError>;
}

/// Launches real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &str, args: &[String]) -> Result<(), LaunchError> {
        tracing::debug!(command, ?args, "spawning editor");
        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                command: command.to_owned(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!(command, code = ?status.code(), "editor exited with failure");
            Err(LaunchError::Exited {
                command: command.to_owned(),
                code: status.code(),
            })
        }
    }
}

/// Arguments that make VS Code open `target` through Remote-SSH.
#[must_use]
pub fn remote_args(target: &Target) -> Vec<String> {
    vec![
        "--remote".to_owned(),
        format!("ssh-remote+{}", target.host),
        target.path.clone(),
    ]
}
