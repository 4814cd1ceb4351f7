// Where the running launcher lives on disk
use std::path::{Path, PathBuf};

/// Path of the running launcher executable, symlinks already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherLocation {
    executable: PathBuf,
}

impl LauncherLocation {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Directory containing the launcher
    pub fn directory(&self) -> &Path {
        self.executable.parent().unwrap_or_else(|| Path::new(""))
    }
}
