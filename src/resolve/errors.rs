/// Errors from alias resolution.
use thiserror::Error;

/// Errors that can occur while selecting a folder by alias.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No entry's effective alias equals the requested one.
    #[error("alias not found: '{alias}'")]
    AliasNotFound {
        /// The alias exactly as requested.
        alias: String,
        /// Close aliases, best first. May be empty.
        suggestions: Vec<String>,
    },
}
