/// Alias resolution: listing, exact lookup, and prefix completion.
///
/// Everything here is a pure function of the `Config`; no I/O.
use super::errors::ResolveError;
use super::suggest::suggest;
use crate::config::{Config, FolderEntry};

/// A folder chosen for opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The effective alias that selected it.
    pub alias: String,
    /// Remote path.
    pub path: String,
    /// Entry host, or the configuration's default host.
    pub host: String,
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No alias requested: every entry, sorted by effective alias.
    Listing(Vec<FolderEntry>),
    /// The entry matching the requested alias.
    Target(Target),
}

/// Entries sorted by effective alias (byte-wise, stable).
#[must_use]
pub fn sorted_entries(config: &Config) -> Vec<FolderEntry> {
    let mut entries = config.folders.clone();
    entries.sort_by(|a, b| a.effective_alias().cmp(b.effective_alias()));
    entries
}

/// Resolve an optional alias against `config`.
///
/// Matching is exact and case-sensitive.
///
/// # Errors
///
/// Returns `ResolveError::AliasNotFound` if `alias` is given and nothing matches.
pub fn resolve(config: &Config, alias: Option<&str>) -> Result<Resolution, ResolveError> {
    let Some(alias) = alias else {
        return Ok(Resolution::Listing(sorted_entries(config)));
    };

    let Some(folder) = config.folders.iter().find(|f| f.effective_alias() == alias) else {
        let mut aliases: Vec<&str> =
            config.folders.iter().map(FolderEntry::effective_alias).collect();
        aliases.sort_unstable();
        return Err(ResolveError::AliasNotFound {
            alias: alias.to_owned(),
            suggestions: suggest(aliases, alias),
        });
    };

    let target = Target {
        alias: alias.to_owned(),
        path: folder.path.clone(),
        host: folder.host_or(&config.default_host).to_owned(),
    };
    tracing::debug!(alias, host = %target.host, path = %target.path, "alias resolved");
    Ok(Resolution::Target(target))
}

/// Effective aliases starting with `prefix`, ascending.
#[must_use]
pub fn complete(config: &Config, prefix: &str) -> Vec<String> {
    let mut out: Vec<String> = config
        .folders
        .iter()
        .map(FolderEntry::effective_alias)
        .filter(|alias| alias.starts_with(prefix))
        .map(str::to_owned)
        .collect();
    out.sort();
    out
}
