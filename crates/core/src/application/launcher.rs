// Launch service: resolve the wrapped executable, run it, absorb failures
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::exit_policy::ExitPolicy;
use crate::domain::{ArgumentVector, ChildExit, TargetExecutable};
use crate::error::{LaunchError, Result};
use crate::port::{HostProbe, Invocation, LauncherLocator, ProcessRunner};

/// Launcher configuration
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub exit_policy: ExitPolicy,
}

/// What happened to a single launch
#[derive(Debug)]
pub enum LaunchOutcome {
    /// The child ran and terminated (successfully or not)
    Completed(ChildExit),
    /// The child could not be run; the error is kept for logging only
    Failed(LaunchError),
}

impl LaunchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(exit) if exit.success())
    }
}

/// Hands the launcher's arguments and stdio over to `bin/sitefix`
pub struct Launcher {
    runner: Arc<dyn ProcessRunner>,
    host: Arc<dyn HostProbe>,
    locator: Arc<dyn LauncherLocator>,
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        host: Arc<dyn HostProbe>,
        locator: Arc<dyn LauncherLocator>,
        config: LauncherConfig,
    ) -> Self {
        Self {
            runner,
            host,
            locator,
            config,
        }
    }

    /// Path of the wrapped executable for a launcher living in `launcher_dir`
    pub fn resolve_target(&self, launcher_dir: &Path) -> TargetExecutable {
        TargetExecutable::resolve(launcher_dir, &self.host.platform())
    }

    /// Run the wrapped executable once.
    ///
    /// Never fails: this is the single point where invocation errors are
    /// absorbed. They are logged at debug level and returned in the outcome,
    /// nothing is written to the user's terminal.
    pub async fn launch(&self, args: ArgumentVector) -> LaunchOutcome {
        match self.try_launch(args).await {
            Ok(exit) => {
                debug!(
                    exit = ?exit,
                    success = exit.success(),
                    "Wrapped executable terminated"
                );
                LaunchOutcome::Completed(exit)
            }
            Err(error) => {
                debug!(
                    error = %error,
                    "Launch failed; suppressing (the wrapped executable reports its own errors)"
                );
                LaunchOutcome::Failed(error)
            }
        }
    }

    /// Launch and map the outcome to the launcher's exit status
    pub async fn run(&self, args: ArgumentVector) -> i32 {
        let outcome = self.launch(args).await;
        let code = self.config.exit_policy.exit_code(&outcome);

        debug!(
            policy = %self.config.exit_policy,
            exit_code = code,
            "Launcher exiting"
        );

        code
    }

    async fn try_launch(&self, args: ArgumentVector) -> Result<ChildExit> {
        let location = self
            .locator
            .locate()
            .map_err(LaunchError::LauncherLocation)?;

        let target = self.resolve_target(location.directory());

        if self.locator.is_launcher(target.path(), &location) {
            return Err(LaunchError::SelfInvocation(target.into_path()));
        }

        info!(
            launcher = %location.executable().display(),
            program = %target.path().display(),
            arg_count = args.len(),
            "Launching wrapped executable"
        );

        let invocation = Invocation::new(target.into_path(), args);
        Ok(self.runner.run(&invocation).await?)
    }
}
