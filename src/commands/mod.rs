/// Command dispatch: routes parsed CLI input to its implementation.
pub mod complete;
pub mod completions;
pub mod edit;
pub mod init;
pub mod open;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::PathBuf;

use crate::cli::OutputCtx;
use crate::cli::args::{Cli, Command};
use crate::config::{self, Config, ConfigError};
use crate::errors::ScodeError;
use crate::launch::{ExecutableProbe, Launcher};

/// Environment handed to every command: where the document lives and the
/// side-effecting collaborators.
pub struct Runtime<'a> {
    /// `--config` / `SCODE_CONFIG` override. `None` uses the per-user location.
    pub config_override: Option<PathBuf>,
    pub probe: &'a dyn ExecutableProbe,
    pub launcher: &'a dyn Launcher,
}

impl Runtime<'_> {
    /// Location of the configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if there is no override and no user config dir.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_override {
            Some(path) => Ok(path.clone()),
            None => config::default_config_path(),
        }
    }

    /// Read and validate the configuration document.
    ///
    /// # Errors
    ///
    /// Returns any `ConfigError` from locating, reading, or validating the document.
    pub fn load_config(&self) -> Result<(Config, PathBuf), ConfigError> {
        let path = self.config_path()?;
        let config = config::load_from_path(&path, self.probe)?;
        Ok((config, path))
    }
}

/// Dispatch parsed CLI input to its handler.
///
/// # Errors
///
/// Returns `ScodeError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx, rt: &Runtime<'_>) -> Result<(), ScodeError> {
    match &cli.command {
        None => open::run(&cli.open, ctx, rt),
        Some(Command::Init) => init::run(ctx, rt),
        Some(Command::Edit) => edit::run(rt),
        Some(Command::Completions(args)) => {
            completions::run(args);
            Ok(())
        }
        Some(Command::Complete(args)) => {
            complete::run(args, rt);
            Ok(())
        }
    }
}
