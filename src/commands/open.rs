/// Default command: list folders, or open one by alias.
use super::Runtime;
use crate::cli::OutputCtx;
use crate::cli::args::OpenArgs;
use crate::cli::output::{DebugTimer, write_folders, write_target};
use crate::config::{Config, FolderEntry};
use crate::errors::ScodeError;
use crate::launch::remote_args;
use crate::resolve::{Resolution, Target, resolve};
use crate::types::{FolderOutput, TargetOutput};

/// Run `scode [ALIAS]`.
///
/// # Errors
///
/// Returns `ScodeError` on configuration failure, unknown alias, or editor failure.
pub fn run(args: &OpenArgs, ctx: &OutputCtx, rt: &Runtime<'_>) -> Result<(), ScodeError> {
    let _t_load = DebugTimer::start("load_config");
    let (config, _) = rt.load_config()?;
    drop(_t_load);

    let _t_resolve = DebugTimer::start("resolve");
    let resolution = resolve(&config, args.alias.as_deref())?;
    drop(_t_resolve);

    match resolution {
        Resolution::Listing(entries) => {
            write_folders(&listing(&entries, &config), ctx);
            Ok(())
        }
        Resolution::Target(target) => open_target(&config, &target, args.dry_run, ctx, rt),
    }
}

fn listing(entries: &[FolderEntry], config: &Config) -> Vec<FolderOutput> {
    entries
        .iter()
        .map(|e| FolderOutput::from_entry(e, config))
        .collect()
}

fn open_target(
    config: &Config,
    target: &Target,
    dry_run: bool,
    ctx: &OutputCtx,
    rt: &Runtime<'_>,
) -> Result<(), ScodeError> {
    let args = remote_args(target);

    if dry_run {
        let mut command = Vec::with_capacity(args.len() + 1);
        command.push(config.editor_command.clone());
        command.extend(args);
        write_target(&TargetOutput::new(target, command, true), ctx);
        return Ok(());
    }

    tracing::info!(alias = %target.alias, host = %target.host, "opening remote folder");
    let _t_launch = DebugTimer::start("launch");
    rt.launcher.launch(&config.editor_command, &args)?;
    Ok(())
}
