/// CLI layer: argument parsing, output formatting, completion scripts.
pub mod args;
pub mod completions;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use output::{OutputCtx, write_error};
