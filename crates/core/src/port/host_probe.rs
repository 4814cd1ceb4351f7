// Host Probe Port (for testability)
use crate::domain::HostPlatform;

/// Reports which operating system the launcher runs on
pub trait HostProbe: Send + Sync {
    fn platform(&self) -> HostPlatform;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Host probe that always reports the same platform
    pub struct FixedHostProbe {
        platform: HostPlatform,
    }
    impl FixedHostProbe {
        pub fn new(platform: HostPlatform) -> Self {
            Self { platform }
        }
        pub fn windows() -> Self {
            Self::new(HostPlatform::Windows)
        }
        pub fn linux() -> Self {
            Self::new(HostPlatform::from_os_name("linux"))
        }
    }
    impl HostProbe for FixedHostProbe {
        fn platform(&self) -> HostPlatform {
            self.platform.clone()
        }
    }
}
