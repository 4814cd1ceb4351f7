// Host probe implementation
use sitefix_launcher_core::domain::HostPlatform;
use sitefix_launcher_core::port::HostProbe;

/// Reports the OS this binary was built for and is therefore running on
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostProbe;

impl SystemHostProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for SystemHostProbe {
    fn platform(&self) -> HostPlatform {
        HostPlatform::from_os_name(std::env::consts::OS)
    }
}
