/// The per-user document location and the starter document written by `init`.
use std::path::{Path, PathBuf};

use super::errors::ConfigError;

/// Directory under the user configuration directory.
const APP_DIR: &str = "scode";

/// Document file name.
const FILE_NAME: &str = "config.yaml";

const TEMPLATE: &str = "\
ssh_host: prod
vscode_exec: code
folders:
  - path: /srv/projects/api
    alias: api
    host: prod
  - path: /home/user/infra
";

/// A minimal valid document.
#[must_use]
pub fn template() -> &'static str {
    TEMPLATE
}

/// `<user config dir>/scode/config.yaml`.
///
/// # Errors
///
/// Returns `ConfigError::NoConfigDir` if the platform reports no config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write [`template`] to `path`, creating parent directories.
///
/// # Errors
///
/// - `ConfigError::AlreadyExists` if something is already at `path`
/// - `ConfigError::Write` if the directory or file cannot be created
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, TEMPLATE).map_err(write_err)?;

    tracing::info!(path = %path.display(), "wrote configuration template");
    Ok(())
}
