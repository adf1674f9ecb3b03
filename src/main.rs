#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! scode: open remote folders in VS Code over SSH by short alias.

mod cli;
mod commands;
mod config;
mod errors;
mod launch;
mod logging;
mod resolve;
mod types;

use cli::{Cli, OutputCtx, write_error};
use commands::Runtime;
use launch::{ProcessLauncher, SystemProbe};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.fields.as_deref(), cli.no_header);
    let rt = Runtime {
        config_override: cli.config.clone(),
        probe: &SystemProbe,
        launcher: &ProcessLauncher,
    };

    match commands::dispatch(&cli, &ctx, &rt) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let error_output = ErrorOutput::from_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
