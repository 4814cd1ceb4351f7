// Launcher exit codes (no magic values)

/// Exit code when the launch succeeded or failures are swallowed
pub const EXIT_SUCCESS: i32 = 0;

/// Generic failure (launcher not locatable, self-invocation, wait failure)
pub const EXIT_FAILURE: i32 = 1;

/// The wrapped executable exists but could not be executed
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// The wrapped executable does not exist
pub const EXIT_NOT_FOUND: i32 = 127;
