// Launcher Locator Port
// Finds the running launcher so the wrapped executable can be resolved relative to it
use std::io;
use std::path::Path;

use crate::domain::LauncherLocation;

pub trait LauncherLocator: Send + Sync {
    /// Locate the running launcher executable
    ///
    /// # Errors
    /// Any I/O error raised while querying the current executable
    fn locate(&self) -> io::Result<LauncherLocation>;

    /// Check whether `candidate` is the launcher itself
    ///
    /// Used to refuse launching ourselves when the launcher is installed
    /// where the wrapped executable is expected.
    fn is_launcher(&self, candidate: &Path, location: &LauncherLocation) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::path::{Component, PathBuf};

    /// Locator returning a fixed path (or a fixed failure)
    pub struct FixedLauncherLocator {
        executable: Option<PathBuf>,
    }
    impl FixedLauncherLocator {
        pub fn new(executable: impl Into<PathBuf>) -> Self {
            Self {
                executable: Some(executable.into()),
            }
        }
        /// Locator whose `locate` always fails with `NotFound`
        pub fn failing() -> Self {
            Self { executable: None }
        }
    }
    impl LauncherLocator for FixedLauncherLocator {
        fn locate(&self) -> io::Result<LauncherLocation> {
            self.executable
                .clone()
                .map(LauncherLocation::new)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "mock: no executable"))
        }
        fn is_launcher(&self, candidate: &Path, location: &LauncherLocation) -> bool {
            normalize(candidate) == normalize(location.executable())
        }
    }

    // Lexical `..` folding; no filesystem in mocks
    fn normalize(path: &Path) -> PathBuf {
        let mut out = PathBuf::new();
        for component in path.components() {
            match component {
                Component::ParentDir => {
                    out.pop();
                }
                Component::CurDir => {}
                other => out.push(other),
            }
        }
        out
    }
}
