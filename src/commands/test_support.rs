/// Fake collaborators for command tests.
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::Runtime;
use crate::launch::{ExecutableProbe, LaunchError, Launcher};

/// Probe that finds every command except those listed as missing.
pub struct FakeProbe {
    pub missing: Vec<&'static str>,
}

impl FakeProbe {
    pub fn all() -> Self {
        Self { missing: vec![] }
    }
}

impl ExecutableProbe for FakeProbe {
    fn locate(&self, command: &str) -> Option<PathBuf> {
        (!self.missing.iter().any(|m| *m == command)).then(|| PathBuf::from("/usr/bin").join(command))
    }
}

/// Launcher that records invocations and returns a preset result.
#[derive(Default)]
pub struct RecordingLauncher {
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
    pub exit_code: Option<i32>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, command: &str, args: &[String]) -> Result<(), LaunchError> {
        self.calls
            .borrow_mut()
            .push((command.to_owned(), args.to_vec()));
        match self.exit_code {
            None => Ok(()),
            Some(code) => Err(LaunchError::Exited {
                command: command.to_owned(),
                code: Some(code),
            }),
        }
    }
}

pub fn runtime<'a>(
    path: &Path,
    probe: &'a FakeProbe,
    launcher: &'a RecordingLauncher,
) -> Runtime<'a> {
    Runtime {
        config_override: Some(path.to_path_buf()),
        probe,
        launcher,
    }
}

pub const SAMPLE: &str = "\
ssh_host: prod
folders:
  - path: /home/user/infra
  - path: /srv/projects/api
    host: staging
  - path: /srv/projects/app
";
