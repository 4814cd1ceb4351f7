// Domain Layer - Launch targets, arguments and child results

pub mod args;
pub mod exit;
pub mod location;
pub mod platform;
pub mod target;

// Re-exports
pub use args::ArgumentVector;
pub use exit::ChildExit;
pub use location::LauncherLocation;
pub use platform::HostPlatform;
pub use target::{TargetExecutable, BIN_DIR, EXECUTABLE_NAME};
