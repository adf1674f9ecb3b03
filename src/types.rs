/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the internal `Config` / `Target` types.
use serde::{Deserialize, Serialize};

use crate::config::{Config, FolderEntry};
use crate::errors::ScodeError;
use crate::resolve::Target;

/// One row of the alias listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderOutput {
    /// Effective alias.
    pub alias: String,
    /// Remote path.
    pub path: String,
    /// Host the folder opens on (entry host or `ssh_host`).
    pub host: String,
}

impl FolderOutput {
    #[must_use]
    pub fn from_entry(entry: &FolderEntry, config: &Config) -> Self {
        Self {
            alias: entry.effective_alias().to_owned(),
            path: entry.path.clone(),
            host: entry.host_or(&config.default_host).to_owned(),
        }
    }
}

/// A resolved target and the editor invocation that opens it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetOutput {
    pub alias: String,
    pub path: String,
    pub host: String,
    /// Program followed by its arguments.
    pub command: Vec<String>,
    /// Whether the editor was left unlaunched.
    pub dry_run: bool,
}

impl TargetOutput {
    #[must_use]
    pub fn new(target: &Target, command: Vec<String>, dry_run: bool) -> Self {
        Self {
            alias: target.alias.clone(),
            path: target.path.clone(),
            host: target.host.clone(),
            command,
            dry_run,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Close aliases, for `alias_not_found`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `ScodeError`.
    #[must_use]
    pub fn from_error(err: &ScodeError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                candidates: err.candidates().map(<[String]>::to_vec),
            },
        }
    }
}
