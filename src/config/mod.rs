//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix (SCC_API_HOST, SCC_PORT)
const ENV_PREFIX: &str = "SCC";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Scheme and authority of the REST API, e.g. `https://host.example`.
    /// Empty means same-origin.
    #[serde(default)]
    pub api_host: String,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Whether `api_host` is usable as an absolute base URL.
    ///
    /// Used for a startup warning only; the host is applied verbatim either way.
    pub fn api_host_is_absolute(&self) -> bool {
        url::Url::parse(&self.api_host)
            .map(|url| url.has_host())
            .unwrap_or(false)
    }
}

pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "station-configuration", "station-configuration-client")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_dir())
}

pub fn load_config_from(config_dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("api_host", "")?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (SCC_API_HOST, SCC_PORT)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("SCC_API_HOST");
        std::env::remove_var("SCC_PORT");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_host, "");
        assert!(!config.api_host_is_absolute());
    }

    #[test]
    #[serial]
    fn test_file_source() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "api_host = \"https://radios.example.org\"\nport = 9090\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.api_host, "https://radios.example.org");
        assert_eq!(config.port, 9090);
        assert!(config.api_host_is_absolute());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "api_host = \"https://radios.example.org\"\n",
        )
        .unwrap();

        std::env::set_var("SCC_API_HOST", "http://localhost:5000");
        std::env::set_var("SCC_PORT", "3001");
        let config = load_config_from(dir.path());
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.api_host, "http://localhost:5000");
        assert_eq!(config.port, 3001);
    }
}
