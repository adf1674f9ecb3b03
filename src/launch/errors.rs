/// Errors from running the external editor.
use thiserror::Error;

/// The editor process failed to start or did not exit successfully.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The process could not be spawned.
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited with a failure status.
    #[error("'{command}' exited with {}", code.map_or_else(|| "a signal".to_owned(), |c| format!("status {c}")))]
    Exited {
        command: String,
        /// Exit code, or `None` if terminated by a signal.
        code: Option<i32>,
    },
}
