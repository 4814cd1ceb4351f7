// Resolution of the wrapped executable's path
use std::path::{Path, PathBuf};

use super::HostPlatform;

/// File stem of the wrapped executable
pub const EXECUTABLE_NAME: &str = "sitefix";

/// Directory holding the wrapped executable, a sibling of the launcher's directory
pub const BIN_DIR: &str = "bin";

/// The platform-specific executable the launcher hands off to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetExecutable {
    path: PathBuf,
}

impl TargetExecutable {
    /// Resolve `<launcher_dir>/../bin/sitefix`, with `.exe` on Windows.
    ///
    /// Depends only on the launcher directory and the platform, never on the
    /// current working directory or the environment.
    pub fn resolve(launcher_dir: &Path, platform: &HostPlatform) -> Self {
        let file_name = format!("{}{}", EXECUTABLE_NAME, platform.executable_suffix());
        Self {
            path: launcher_dir.join("..").join(BIN_DIR).join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
