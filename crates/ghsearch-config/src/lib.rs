//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

/// Default GitHub API root.
pub const DEFAULT_GITHUB_ROOT_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token, empty for anonymous access.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Log raw response bodies before decoding.
    pub debug_mode: bool,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("GHSEARCH_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("GHSEARCH_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("GHSEARCH_API_GITHUB_ROOT_URL", DEFAULT_GITHUB_ROOT_URL),
                    token: env_to_str("GHSEARCH_API_GITHUB_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("GHSEARCH_LOGGING_USE_BUNYAN", false),
            },
            debug_mode: env_to_bool("GHSEARCH_DEBUG_MODE", false),
            version,
        })
    }

    /// Build a configuration without reading the environment.
    pub fn with_root_url<T: Into<String>>(root_url: T) -> Self {
        Config {
            api: ApiConfig {
                driver: ApiDriver::GitHub,
                github: ApiGitHubConfig {
                    connect_timeout: 5000,
                    root_url: root_url.into(),
                    token: String::new(),
                },
            },
            logging: LoggingConfig { use_bunyan: false },
            debug_mode: false,
            version: "0.0.0".into(),
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
