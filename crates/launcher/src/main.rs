//! Sitefix Launcher - Main Entry Point
//!
//! Runs `<launcher-dir>/../bin/sitefix[.exe]` with this process's arguments
//! and stdio. The launcher prints nothing of its own: the wrapped executable
//! reports its own errors.

mod config;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use sitefix_launcher_core::application::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use sitefix_launcher_core::application::{ExitPolicy, Launcher};
use sitefix_launcher_core::domain::ArgumentVector;
use sitefix_launcher_infra_system::{CurrentExeLocator, InheritedStdioRunner, SystemHostProbe};

use config::EnvConfig;

fn main() {
    let code = run();
    std::process::exit(code);
}

/// Everything up to the exit call; returning drops the log guard and flushes it
fn run() -> i32 {
    let config = EnvConfig::from_env();

    // A broken logging setup must not make the launcher noisy
    let _log_guard = logging::init(&config.logging).ok().flatten();

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    debug!(
        version = sitefix_launcher_core::VERSION,
        exit_policy = %config.launcher.exit_policy,
        "Sitefix launcher starting"
    );

    let args = ArgumentVector::from_argv(std::env::args_os());
    let exit_policy = config.launcher.exit_policy;

    match launch(config, args) {
        Ok(code) => code,
        Err(e) => {
            debug!(error = ?e, "Launcher setup failed");
            match exit_policy {
                ExitPolicy::Propagate => EXIT_FAILURE,
                ExitPolicy::Swallow => EXIT_SUCCESS,
            }
        }
    }
}

fn launch(config: EnvConfig, args: ArgumentVector) -> Result<i32> {
    // One child, one wait: a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let launcher = Launcher::new(
        Arc::new(InheritedStdioRunner::new()),
        Arc::new(SystemHostProbe::new()),
        Arc::new(CurrentExeLocator::new()),
        config.launcher,
    );

    Ok(runtime.block_on(launcher.run(args)))
}
