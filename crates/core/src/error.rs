// Central Error Type for the Launcher
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::application::constants::{EXIT_CANNOT_EXECUTE, EXIT_FAILURE, EXIT_NOT_FOUND};
use crate::port::RunError;

/// Every way an invocation can fail before the child reports its own status
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("could not locate the launcher executable: {0}")]
    LauncherLocation(#[source] io::Error),

    #[error("refusing to launch {0:?}: it is the launcher itself")]
    SelfInvocation(PathBuf),

    #[error(transparent)]
    Run(#[from] RunError),
}

impl LaunchError {
    /// Exit status reported for this failure when exit codes are propagated
    ///
    /// Follows the shell convention: 127 when the program is missing,
    /// 126 when it exists but cannot be executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Run(RunError::Spawn { source, .. }) => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_CANNOT_EXECUTE,
                _ => EXIT_FAILURE,
            },
            Self::Run(RunError::Wait(_)) | Self::LauncherLocation(_) | Self::SelfInvocation(_) => {
                EXIT_FAILURE
            }
        }
    }
}

/// Result type alias using LaunchError
pub type Result<T> = std::result::Result<T, LaunchError>;
