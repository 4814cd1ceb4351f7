// Launcher locator backed by std::env::current_exe
use std::io;
use std::path::Path;

use tracing::debug;

use sitefix_launcher_core::domain::LauncherLocation;
use sitefix_launcher_core::port::LauncherLocator;

/// Locates the running launcher through the OS.
///
/// The path is canonicalized so a launcher reached through a symlink
/// (e.g. a package manager's `bin` link) resolves relative to its real
/// location. When canonicalization fails the raw path is used.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentExeLocator;

impl CurrentExeLocator {
    pub fn new() -> Self {
        Self
    }
}

impl LauncherLocator for CurrentExeLocator {
    fn locate(&self) -> io::Result<LauncherLocation> {
        let executable = std::env::current_exe()?;
        let executable = match std::fs::canonicalize(&executable) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(
                    path = %executable.display(),
                    error = %e,
                    "Could not canonicalize launcher path, using it as-is"
                );
                executable
            }
        };

        Ok(LauncherLocation::new(executable))
    }

    fn is_launcher(&self, candidate: &Path, location: &LauncherLocation) -> bool {
        // A missing candidate cannot be the launcher
        match std::fs::canonicalize(candidate) {
            Ok(resolved) => resolved == location.executable(),
            Err(_) => false,
        }
    }
}
