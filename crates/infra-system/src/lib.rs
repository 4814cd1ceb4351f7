// Sitefix Launcher Infrastructure - System Adapters
// Implements: ProcessRunner, HostProbe, LauncherLocator

pub mod current_exe_locator;
pub mod host_probe_impl;
pub mod inherited_stdio_runner;

pub use current_exe_locator::CurrentExeLocator;
pub use host_probe_impl::SystemHostProbe;
pub use inherited_stdio_runner::InheritedStdioRunner;
