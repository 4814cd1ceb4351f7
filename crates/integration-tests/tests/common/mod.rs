// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tempfile::TempDir;

use sitefix_launcher_core::application::{ExitPolicy, Launcher, LauncherConfig};
use sitefix_launcher_core::domain::ChildExit;
use sitefix_launcher_core::port::launcher_locator::mocks::FixedLauncherLocator;
use sitefix_launcher_core::port::{Invocation, ProcessRunner, RunError};
use sitefix_launcher_infra_system::{InheritedStdioRunner, SystemHostProbe};

// Executables written by one test must not be open for writing while another
// test forks (ETXTBSY), so fixture setup and launches are serialized.
static SERIAL: Mutex<()> = Mutex::new(());

pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// A package root with `lib/` (launcher) and `bin/` (wrapped tool)
pub struct Package {
    root: TempDir,
}

impl Package {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("lib")).unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Where the launcher pretends to live; the file itself is never needed
    pub fn launcher_exe(&self) -> PathBuf {
        self.root().join("lib").join("sitefix-launcher")
    }

    pub fn tool(&self) -> PathBuf {
        self.root().join("bin").join("sitefix")
    }

    /// File the fake tool records its arguments into
    pub fn args_file(&self) -> PathBuf {
        self.root().join("args.txt")
    }

    #[cfg(unix)]
    pub fn install_tool(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        fs::write(self.tool(), format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(self.tool(), fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Fake tool that writes one argument per line into `args_file`, then exits with `code`
    #[cfg(unix)]
    pub fn install_recording_tool(&self, code: i32) {
        self.install_tool(&format!(
            "for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{}'\nexit {}",
            self.args_file().display(),
            code
        ));
    }

    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.args_file())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn launcher(&self, runner: Arc<dyn ProcessRunner>, exit_policy: ExitPolicy) -> Launcher {
        Launcher::new(
            runner,
            Arc::new(SystemHostProbe::new()),
            Arc::new(FixedLauncherLocator::new(self.launcher_exe())),
            LauncherConfig { exit_policy },
        )
    }
}

/// Real runner that also remembers what it was asked to start
#[derive(Default)]
pub struct RecordingRunner {
    inner: InheritedStdioRunner,
    invocations: Mutex<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildExit, RunError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        self.inner.run(invocation).await
    }
}
