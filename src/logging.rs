/// Logging setup using tracing.
///
/// Logs go to stderr so they never mix with listing output. The level is
/// controlled by the `SCODE_LOG` environment variable (default `warn`);
/// `--debug` forces `debug` for this crate.
use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SCODE_LOG";

/// Install the global subscriber. Safe to call once per process.
pub fn init(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("scode=debug,warn")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal();

    // A subscriber may already be set (e.g. by a test harness); keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(debug)
                .without_time(),
        )
        .try_init();
}
