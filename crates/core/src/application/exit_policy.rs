// Exit policy: how a launch outcome becomes the launcher's own exit status
//
// Independent of message suppression: the launcher never prints about a
// failed launch, whichever policy is active.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::constants::EXIT_SUCCESS;
use super::launcher::LaunchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Exit with the child's status (or a shell-style code when it never started)
    #[default]
    Propagate,
    /// Always exit 0, whatever happened
    Swallow,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown exit policy {0:?} (expected \"propagate\" or \"swallow\")")]
pub struct ParseExitPolicyError(pub String);

impl ExitPolicy {
    pub fn exit_code(&self, outcome: &LaunchOutcome) -> i32 {
        match self {
            Self::Swallow => EXIT_SUCCESS,
            Self::Propagate => match outcome {
                LaunchOutcome::Completed(exit) => exit.status_code(),
                LaunchOutcome::Failed(error) => error.exit_code(),
            },
        }
    }
}

impl FromStr for ExitPolicy {
    type Err = ParseExitPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "swallow" => Ok(Self::Swallow),
            _ => Err(ParseExitPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for ExitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::Swallow => write!(f, "swallow"),
        }
    }
}
