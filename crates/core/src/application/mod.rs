// Application Layer - The launch use case

pub mod constants;
pub mod exit_policy;
pub mod launcher;

// Re-exports
pub use exit_policy::{ExitPolicy, ParseExitPolicyError};
pub use launcher::{LaunchOutcome, Launcher, LauncherConfig};
