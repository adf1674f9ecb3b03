//! Validated configuration types.

/// Editor command used when `vscode_exec` is empty or absent.
pub const DEFAULT_EDITOR: &str = "code";

/// One remote-editable folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// Absolute path on the remote host.
    pub path: String,
    /// Explicit alias. `None` when the document leaves it empty.
    pub alias: Option<String>,
    /// Host override. `None` falls back to `Config::default_host`.
    pub host: Option<String>,
}

impl FolderEntry {
    /// The identifier used to select this entry: the explicit alias, or the
    /// last segment of the remote path.
    #[must_use]
    pub fn effective_alias(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => base_name(&self.path),
        }
    }

    /// The host this entry opens on.
    #[must_use]
    pub fn host_or<'a>(&'a self, default_host: &'a str) -> &'a str {
        self.host.as_deref().unwrap_or(default_host)
    }
}

/// Last element of a `/`-separated path, ignoring trailing separators.
///
/// Remote paths are POSIX regardless of the local platform, so this does not
/// go through `std::path`.
fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// A validated configuration. Immutable once returned by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `ssh_host`: host used by entries without their own.
    pub default_host: String,
    /// `vscode_exec`: the editor executable.
    pub editor_command: String,
    /// Folder entries in document order.
    pub folders: Vec<FolderEntry>,
}
