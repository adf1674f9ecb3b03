/// Parse, default, and validate the configuration document.
///
/// Validation order is fixed: editor command, then `ssh_host`, then each
/// folder in document order. The first failure aborts the load.
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::errors::ConfigError;
use super::model::{Config, DEFAULT_EDITOR, FolderEntry};
use super::template::template;
use crate::launch::ExecutableProbe;

/// The document as written. Every field may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    ssh_host: Option<String>,
    vscode_exec: Option<String>,
    folders: Option<Vec<RawFolder>>,
}

#[derive(Debug, Deserialize)]
struct RawFolder {
    path: Option<String>,
    alias: Option<String>,
    host: Option<String>,
}

/// Drop empty strings so "unset" has a single representation.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn parse(bytes: &[u8]) -> Result<RawDocument, ConfigError> {
    // An empty file is a document with nothing set, not a syntax error.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawDocument::default());
    }
    let raw: Option<RawDocument> = serde_yaml::from_slice(bytes)?;
    Ok(raw.unwrap_or_default())
}

/// Build a validated `Config` from raw document bytes.
///
/// # Errors
///
/// - `ConfigError::Malformed` if the bytes are not a valid document
/// - `ConfigError::EditorNotFound` if `vscode_exec` cannot be located
/// - `ConfigError::MissingDefaultHost` if `ssh_host` is empty
/// - `ConfigError::EmptyFolderPath` / `ConfigError::DuplicateAlias` for bad folders
pub fn load(bytes: &[u8], probe: &dyn ExecutableProbe) -> Result<Config, ConfigError> {
    let raw = parse(bytes)?;

    let editor_command =
        non_empty(raw.vscode_exec).unwrap_or_else(|| DEFAULT_EDITOR.to_owned());
    let Some(found) = probe.locate(&editor_command) else {
        return Err(ConfigError::EditorNotFound {
            command: editor_command,
        });
    };
    tracing::debug!(command = %editor_command, path = %found.display(), "editor located");

    let default_host = non_empty(raw.ssh_host).ok_or(ConfigError::MissingDefaultHost)?;

    let raw_folders = raw.folders.unwrap_or_default();
    let mut folders = Vec::with_capacity(raw_folders.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(raw_folders.len());

    for (index, raw_folder) in raw_folders.into_iter().enumerate() {
        let alias = non_empty(raw_folder.alias);
        let path = raw_folder.path.unwrap_or_default();
        if path.trim().is_empty() {
            return Err(ConfigError::EmptyFolderPath { index, alias });
        }

        let folder = FolderEntry {
            path,
            alias,
            host: non_empty(raw_folder.host),
        };
        if !seen.insert(folder.effective_alias().to_owned()) {
            return Err(ConfigError::DuplicateAlias {
                alias: folder.effective_alias().to_owned(),
            });
        }
        folders.push(folder);
    }

    tracing::debug!(
        default_host = %default_host,
        folders = folders.len(),
        "configuration loaded"
    );

    Ok(Config {
        default_host,
        editor_command,
        folders,
    })
}

/// Read the document at `path` and load it.
///
/// # Errors
///
/// Returns `ConfigError::Missing` (carrying the path and a template) when the
/// file does not exist, `ConfigError::Read` on other I/O failures, and any
/// error from [`load`].
pub fn load_from_path(path: &Path, probe: &dyn ExecutableProbe) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), "reading configuration");
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
                template: template(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    load(&bytes, probe)
}
