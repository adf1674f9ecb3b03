/// Errors from loading, validating, and initializing the configuration document.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing a validated `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document does not exist at the expected location.
    #[error(
        "configuration file not found\n\nexpected path:\n  {}\n\nrequired structure:\n\n{template}",
        path.display()
    )]
    Missing {
        /// Where the document was expected.
        path: PathBuf,
        /// A minimal valid document the user can start from.
        template: &'static str,
    },

    /// The document exists but is not valid YAML for the expected shape.
    #[error("invalid YAML: {0}")]
    Malformed(#[from] serde_yaml::Error),

    /// The configured editor command is not runnable from the search path.
    #[error("editor command '{command}' (vscode_exec) not found in PATH")]
    EditorNotFound {
        /// The command name that failed to resolve.
        command: String,
    },

    /// `ssh_host` is missing or empty.
    #[error("ssh_host is required")]
    MissingDefaultHost,

    /// A folder entry has an empty (or whitespace-only) path.
    #[error("folder #{} has an empty path{}", index + 1, alias.as_deref().map(|a| format!(" (alias '{a}')")).unwrap_or_default())]
    EmptyFolderPath {
        /// Zero-based position of the entry in `folders`.
        index: usize,
        /// The explicit alias of the entry, when it has one.
        alias: Option<String>,
    },

    /// Two folder entries share the same effective alias.
    #[error("duplicate alias '{alias}'")]
    DuplicateAlias {
        /// The repeated effective alias.
        alias: String,
    },

    /// The document exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template could not be written by `init`.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `init` refuses to overwrite an existing document.
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// The platform has no per-user configuration directory.
    #[error("could not determine the user configuration directory")]
    NoConfigDir,
}

impl ConfigError {
    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "config_missing",
            Self::Malformed(_) => "malformed_document",
            Self::EditorNotFound { .. } => "editor_not_found",
            Self::MissingDefaultHost => "missing_default_host",
            Self::EmptyFolderPath { .. } => "empty_folder_path",
            Self::DuplicateAlias { .. } => "duplicate_alias",
            Self::Read { .. } => "config_read_failed",
            Self::Write { .. } => "config_write_failed",
            Self::AlreadyExists { .. } => "config_exists",
            Self::NoConfigDir => "no_config_dir",
        }
    }
}
