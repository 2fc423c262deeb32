//! Client configuration.
//!
//! Values are layered: built-in defaults, then the environment
//! (`STACKIT_API_URL`, `STACKIT_HOME`), then command-line flags applied
//! through the `with_*` builders.

use std::path::{Path, PathBuf};

use crate::router::Route;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const API_URL_ENV: &str = "STACKIT_API_URL";
pub const HOME_ENV: &str = "STACKIT_HOME";

const HOME_DIR_NAME: &str = ".stackit";
const LOG_FILE: &str = "stackit.log";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the forum REST API, without a trailing slash
    pub api_url: String,
    /// Directory holding the session file and the log
    pub home_dir: PathBuf,
    /// Route mounted at start-up
    pub initial_route: Route,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            home_dir: default_home_dir(),
            initial_route: Route::Home,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = value(API_URL_ENV) {
            config = config.with_api_url(url);
        }
        if let Some(home) = value(HOME_ENV) {
            config = config.with_home_dir(home);
        }
        config
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = dir.into();
        self
    }

    pub fn with_initial_route(mut self, route: Route) -> Self {
        self.initial_route = route;
        self
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn log_path(&self) -> PathBuf {
        self.home_dir.join(LOG_FILE)
    }
}

/// `~/.stackit`, or `./.stackit` when no home directory is known.
fn default_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HOME_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert!(config.home_dir.ends_with(".stackit"));
        assert_eq!(config.initial_route, Route::Home);
        assert!(config.log_path().ends_with(".stackit/stackit.log"));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("STACKIT_API_URL", "https://forum.example.com/"),
            ("STACKIT_HOME", "/tmp/stackit-test"),
        ]));
        assert_eq!(config.api_url, "https://forum.example.com");
        assert_eq!(config.home_dir, PathBuf::from("/tmp/stackit-test"));
    }

    #[test]
    fn test_blank_environment_values_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[("STACKIT_API_URL", "  ")]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_builders_override_environment() {
        let config = ClientConfig::from_lookup(lookup(&[("STACKIT_API_URL", "http://env:1")]))
            .with_api_url("http://flag:2")
            .with_initial_route(Route::Ask);
        assert_eq!(config.api_url, "http://flag:2");
        assert_eq!(config.initial_route, Route::Ask);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(API_URL_ENV, "http://from-env:9000");
        let config = ClientConfig::from_env();
        std::env::remove_var(API_URL_ENV);
        assert_eq!(config.api_url, "http://from-env:9000");
    }
}
