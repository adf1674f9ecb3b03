/// Environment-facing collaborators: executable lookup and process launch.
pub mod errors;
pub mod probe;
pub mod process;

pub use errors::LaunchError;
pub use probe::{ExecutableProbe, SystemProbe};
pub use process::{Launcher, ProcessLauncher, remote_args};
