/// `__complete` command: alias candidates for shell completion.
use super::Runtime;
use crate::cli::args::CompleteArgs;
use crate::resolve::complete;

/// Aliases starting with `prefix`. Any configuration error yields an empty list.
#[must_use]
pub fn candidates(prefix: &str, rt: &Runtime<'_>) -> Vec<String> {
    match rt.load_config() {
        Ok((config, _)) => complete(&config, prefix),
        Err(err) => {
            tracing::debug!(%err, "completion skipped: configuration unavailable");
            Vec::new()
        }
    }
}

/// Run `scode __complete [PREFIX]`. Never fails.
pub fn run(args: &CompleteArgs, rt: &Runtime<'_>) {
    for alias in candidates(args.prefix.as_deref().unwrap_or_default(), rt) {
        println!("{alias}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{FakeProbe, RecordingLauncher, SAMPLE, runtime};

    #[test]
    fn test_candidates_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, SAMPLE).unwrap();
        let probe = FakeProbe::all();
        let launcher = RecordingLauncher::default();
        let rt = runtime(&path, &probe, &launcher);

        assert_eq!(candidates("ap", &rt), vec!["api", "app"]);
    }

    #[test]
    fn test_candidates_swallow_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let probe = FakeProbe::all();
        let launcher = RecordingLauncher::default();
        let rt = runtime(&path, &probe, &launcher);

        assert!(candidates("ap", &rt).is_empty());
    }

    #[test]
    fn test_candidates_swallow_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "ssh_host: prod\nfolders:\n  - path: /a/api\n  - path: /b/api\n")
            .unwrap();
        let probe = FakeProbe::all();
        let launcher = RecordingLauncher::default();
        let rt = runtime(&path, &probe, &launcher);

        assert!(candidates("", &rt).is_empty());
    }
}
