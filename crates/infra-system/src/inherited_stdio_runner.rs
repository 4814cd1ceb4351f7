// Process runner with inherited standard streams
// reason: tokio::process so the wait can be raced against Ctrl+C
use async_trait::async_trait;
use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tracing::{debug, info};

use sitefix_launcher_core::domain::ChildExit;
use sitefix_launcher_core::port::{Invocation, ProcessRunner, RunError};

/// Runs the wrapped executable in the foreground.
///
/// stdin, stdout and stderr are inherited handles, so the child talks to
/// the user's terminal directly and the launcher never touches its I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct InheritedStdioRunner;

impl InheritedStdioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Spawn the child with the launcher's stdio
    fn spawn(&self, invocation: &Invocation) -> Result<Child, RunError> {
        Command::new(&invocation.program)
            .args(invocation.args.as_slice())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: invocation.program.clone(),
                source,
            })
    }

    /// Wait for the child, staying alive through Ctrl+C.
    ///
    /// The interrupt already reaches the child through the terminal's
    /// process group; the launcher only has to outlive it.
    async fn wait_through_interrupts(child: &mut Child) -> io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status,
                interrupt = tokio::signal::ctrl_c() => match interrupt {
                    Ok(()) => debug!("Interrupt received, waiting for child to exit"),
                    Err(e) => {
                        debug!(error = %e, "Cannot listen for interrupts, waiting without");
                        return child.wait().await;
                    }
                },
            }
        }
    }
}

#[async_trait]
impl ProcessRunner for InheritedStdioRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildExit, RunError> {
        let mut child = self.spawn(invocation)?;

        info!(
            program = %invocation.program.display(),
            pid = ?child.id(),
            "Child process started"
        );

        let status = Self::wait_through_interrupts(&mut child)
            .await
            .map_err(RunError::Wait)?;
        let exit = child_exit(status);

        info!(
            exit_code = ?status.code(),
            signal = ?signal_name(&exit),
            "Child process terminated"
        );

        Ok(exit)
    }
}

/// Convert an OS exit status into the domain's view of it
fn child_exit(status: ExitStatus) -> ChildExit {
    if let Some(code) = status.code() {
        return ChildExit::Exited(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return ChildExit::Signaled(signal);
        }
    }

    // No code and no signal: report a generic failure
    ChildExit::Exited(sitefix_launcher_core::application::constants::EXIT_FAILURE)
}

#[cfg(unix)]
fn signal_name(exit: &ChildExit) -> Option<String> {
    use nix::sys::signal::Signal;

    match exit {
        ChildExit::Signaled(raw) => Some(
            Signal::try_from(*raw)
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|_| raw.to_string()),
        ),
        ChildExit::Exited(_) => None,
    }
}

#[cfg(not(unix))]
fn signal_name(_exit: &ChildExit) -> Option<String> {
    None
}
