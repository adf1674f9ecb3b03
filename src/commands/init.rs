/// `init` command: write the starter configuration document.
use super::Runtime;
use crate::cli::{OutputCtx, OutputFormat};
use crate::config::write_template;
use crate::errors::ScodeError;

/// Run `scode init`.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` if the document exists, or a write error.
pub fn run(ctx: &OutputCtx, rt: &Runtime<'_>) -> Result<(), ScodeError> {
    let path = rt.config_path()?;
    write_template(&path)?;

    match ctx.format {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let body = serde_json::json!({ "ok": true, "path": path.display().to_string() });
            println!("{body}");
        }
        _ => println!("Created {}", path.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{FakeProbe, RecordingLauncher, runtime};
    use crate::config::ConfigError;
    use crate::config::template::template;

    #[test]
    fn test_init_writes_loadable_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scode").join("config.yaml");
        let probe = FakeProbe::all();
        let launcher = RecordingLauncher::default();
        let rt = runtime(&path, &probe, &launcher);
        let ctx = OutputCtx::new(OutputFormat::Plain, false, None, false);

        run(&ctx, &rt).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), template());
        let (config, _) = rt.load_config().unwrap();
        assert_eq!(config.default_host, "prod");
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let probe = FakeProbe::all();
        let launcher = RecordingLauncher::default();
        let rt = runtime(&path, &probe, &launcher);
        let ctx = OutputCtx::new(OutputFormat::Plain, false, None, false);

        run(&ctx, &rt).unwrap();
        let result = run(&ctx, &rt);
        assert!(matches!(
            result,
            Err(ScodeError::Config(ConfigError::AlreadyExists { .. }))
        ));
    }
}
