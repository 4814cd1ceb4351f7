// Port Layer - Interfaces for the operating system

pub mod host_probe;
pub mod launcher_locator;
pub mod process_runner;

// Re-exports
pub use host_probe::HostProbe;
pub use launcher_locator::LauncherLocator;
pub use process_runner::{Invocation, ProcessRunner, RunError};
