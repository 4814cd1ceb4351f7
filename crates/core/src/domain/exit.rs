// How the wrapped executable terminated

/// Offset added to a signal number to form a shell-style exit status
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Termination state of the child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Child returned normally with this exit code
    Exited(i32),
    /// Child was terminated by this signal (Unix only)
    Signaled(i32),
}

impl ChildExit {
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    /// Shell-style status: the exit code, or 128 + signal number
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled(signal) => SIGNAL_EXIT_BASE + signal,
        }
    }
}
