// Process Runner Port
// Abstraction for starting the wrapped executable with the launcher's own stdio
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ArgumentVector, ChildExit};

/// A single child process to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: ArgumentVector,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: ArgumentVector) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Process runner errors
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to start {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for child process: {0}")]
    Wait(#[source] io::Error),
}

/// Process Runner trait
///
/// Implementations:
/// - InheritedStdioRunner: spawns the program with stdin/stdout/stderr inherited
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Start the program and block until it terminates
    ///
    /// The child shares the launcher's standard streams; nothing is
    /// captured or buffered by the runner.
    ///
    /// # Errors
    /// - RunError::Spawn if the program cannot be started
    /// - RunError::Wait if waiting on the child fails
    async fn run(&self, invocation: &Invocation) -> Result<ChildExit, RunError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};
    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Child exits with this code
        Exit(i32),
        /// Child is killed by this signal
        Signal(i32),
        /// Spawning fails with this error kind
        SpawnFail(io::ErrorKind),
    }
    /// Mock Process Runner recording every invocation
    pub struct MockProcessRunner {
        behavior: MockBehavior,
        invocations: Arc<Mutex<Vec<Invocation>>>,
    }
    impl MockProcessRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn new_success() -> Self {
            Self::new(MockBehavior::Exit(0))
        }
        pub fn new_exit(code: i32) -> Self {
            Self::new(MockBehavior::Exit(code))
        }
        pub fn new_spawn_fail(kind: io::ErrorKind) -> Self {
            Self::new(MockBehavior::SpawnFail(kind))
        }
        pub fn invocations(&self) -> Vec<Invocation> {
            self.invocations.lock().unwrap().clone()
        }
        pub fn call_count(&self) -> usize {
            self.invocations.lock().unwrap().len()
        }
    }
    #[async_trait]
    impl ProcessRunner for MockProcessRunner {
        async fn run(&self, invocation: &Invocation) -> Result<ChildExit, RunError> {
            self.invocations.lock().unwrap().push(invocation.clone());

            match &self.behavior {
                MockBehavior::Exit(code) => Ok(ChildExit::Exited(*code)),
                MockBehavior::Signal(signal) => Ok(ChildExit::Signaled(*signal)),
                MockBehavior::SpawnFail(kind) => Err(RunError::Spawn {
                    program: invocation.program.clone(),
                    source: io::Error::new(*kind, "mock spawn failure"),
                }),
            }
        }
    }
}
