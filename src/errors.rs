/// Top-level error for a single `scode` invocation.
use thiserror::Error;

use crate::config::ConfigError;
use crate::launch::LaunchError;
use crate::resolve::ResolveError;

/// Any failure that ends the invocation.
#[derive(Debug, Error)]
pub enum ScodeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl ScodeError {
    /// Return the CLI exit code for this error.
    ///
    /// A failed editor run propagates the editor's own exit code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::EditorNotFound { .. }) => 3,
            Self::Config(_) => 2,
            Self::Resolve(ResolveError::AliasNotFound { .. }) => 4,
            Self::Launch(LaunchError::Exited { code, .. }) => code.unwrap_or(1),
            Self::Launch(LaunchError::Spawn { .. }) => 1,
        }
    }

    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.code(),
            Self::Resolve(ResolveError::AliasNotFound { .. }) => "alias_not_found",
            Self::Launch(_) => "launch_failed",
        }
    }

    /// Alternatives worth showing next to the message, if any.
    #[must_use]
    pub fn candidates(&self) -> Option<&[String]> {
        match self {
            Self::Resolve(ResolveError::AliasNotFound { suggestions, .. })
                if !suggestions.is_empty() =>
            {
                Some(suggestions.as_slice())
            }
            _ => None,
        }
    }
}
