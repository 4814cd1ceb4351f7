// Host platform identity
use std::fmt;

/// Operating system the launcher is running on.
///
/// Only the Windows/non-Windows split matters for locating the wrapped
/// executable; the OS name is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Other(String),
}

impl HostPlatform {
    /// Map an OS identifier to a platform.
    ///
    /// Accepts the names reported by `std::env::consts::OS` ("windows",
    /// "linux", "macos", ...) as well as "win32".
    pub fn from_os_name(os: &str) -> Self {
        let os = os.trim();
        if os.eq_ignore_ascii_case("windows") || os.eq_ignore_ascii_case("win32") {
            Self::Windows
        } else {
            Self::Other(os.to_string())
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Suffix appended to executable file names on this platform
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Other(_) => "",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Other(os) => write!(f, "{}", os),
        }
    }
}
