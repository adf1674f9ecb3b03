/// Executable lookup on the command search path.
use std::path::PathBuf;

/// Answers whether a command is runnable, and where it lives.
pub trait ExecutableProbe {
    /// Resolve `command` to an executable, or `None` if it cannot be run.
    fn locate(&self, command: &str) -> Option<PathBuf>;
}

/// Looks commands up in `PATH` (and `PATHEXT` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ExecutableProbe for SystemProbe {
    fn locate(&self, command: &str) -> Option<PathBuf> {
        which::which(command).ok()
    }
}
