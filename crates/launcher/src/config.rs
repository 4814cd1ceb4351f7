// Environment configuration for the launcher
//
// Every variable is prefixed SITEFIX_LAUNCHER_ so it never collides with the
// wrapped tool's own SITEFIX_* settings. RUST_LOG is left to the wrapped tool.
use std::path::PathBuf;
use std::str::FromStr;

use sitefix_launcher_core::application::{ExitPolicy, LauncherConfig};
use tracing_subscriber::EnvFilter;

pub const ENV_EXIT_POLICY: &str = "SITEFIX_LAUNCHER_EXIT_POLICY";
pub const ENV_LOG: &str = "SITEFIX_LAUNCHER_LOG";
pub const ENV_LOG_FORMAT: &str = "SITEFIX_LAUNCHER_LOG_FORMAT";
pub const ENV_LOG_FILE: &str = "SITEFIX_LAUNCHER_LOG_FILE";

/// Logging stays silent unless explicitly enabled
pub const DEFAULT_LOG_FILTER: &str = "off";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "unknown log format {:?} (expected \"pretty\", \"compact\" or \"json\")",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

/// Everything the launcher reads from its environment
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub launcher: LauncherConfig,
    pub logging: LogSettings,
    /// Rejected values, reported once logging is up
    pub warnings: Vec<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or empty values use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_EXIT_POLICY) {
            match raw.parse::<ExitPolicy>() {
                Ok(policy) => config.launcher.exit_policy = policy,
                Err(e) => config.warnings.push(format!("{}: {}", ENV_EXIT_POLICY, e)),
            }
        }

        if let Some(filter) = get(ENV_LOG) {
            match EnvFilter::try_new(&filter) {
                Ok(_) => config.logging.filter = filter,
                Err(e) => config
                    .warnings
                    .push(format!("{}: invalid filter {:?}: {}", ENV_LOG, filter, e)),
            }
        }

        if let Some(raw) = get(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.logging.format = format,
                Err(e) => config.warnings.push(format!("{}: {}", ENV_LOG_FORMAT, e)),
            }
        }

        config.logging.file = get(ENV_LOG_FILE).map(PathBuf::from);

        config
    }
}
