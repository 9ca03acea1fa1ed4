//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `EUINDICO_API_URL` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `EUINDICO_API_URL`: Backend base URL, including `/api` (required)
//! - `EUINDICO_STORAGE_PATH`: Session storage file
//! - `EUINDICO_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `EUINDICO_APP_NAME`: Product name shown by the shell
//! - `EUINDICO_VERSION`: Product version shown by the shell
//! - `EUINDICO_LOG_LEVEL`: Default log filter
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./euindico.json` or `./euindico.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use euindico_domain::{ApiConfig, AppInfo, Config, EuIndicoError, Result, StorageConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to a config file, and finally to the
/// built-in defaults.
///
/// # Errors
/// Returns `EuIndicoError::Config` if a source exists but is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match load_from_file(None) {
                Err(EuIndicoError::Config(message)) if probe_config_paths().is_none() => {
                    tracing::info!(reason = %message, "No configuration found, using defaults");
                    Ok(Config::default())
                }
                other => other,
            }
        }
    }
}

/// Load configuration from environment variables
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `EuIndicoError::Config` if `EUINDICO_API_URL` is missing or a
/// value is invalid.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("EUINDICO_API_URL")?;
    let timeout_secs = optional_env("EUINDICO_API_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| EuIndicoError::Config(format!("Invalid request timeout: {e}")))
        })
        .transpose()?;

    let defaults = Config::default();

    Ok(Config {
        api: ApiConfig { base_url, timeout_secs, user_agent: defaults.api.user_agent },
        storage: StorageConfig {
            path: optional_env("EUINDICO_STORAGE_PATH").unwrap_or(defaults.storage.path),
        },
        app: AppInfo {
            name: optional_env("EUINDICO_APP_NAME").unwrap_or(defaults.app.name),
            version: optional_env("EUINDICO_VERSION").unwrap_or(defaults.app.version),
        },
        log_level: optional_env("EUINDICO_LOG_LEVEL").unwrap_or(defaults.log_level),
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `EuIndicoError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EuIndicoError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EuIndicoError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EuIndicoError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EuIndicoError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EuIndicoError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(EuIndicoError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "euindico.json", "euindico.toml"];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(NAMES.iter().map(|name| cwd.join(name)));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `EuIndicoError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        EuIndicoError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Non-empty environment variable, if set
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 6] = [
        "EUINDICO_API_URL",
        "EUINDICO_STORAGE_PATH",
        "EUINDICO_API_TIMEOUT_SECS",
        "EUINDICO_APP_NAME",
        "EUINDICO_VERSION",
        "EUINDICO_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("EUINDICO_API_URL", "https://indico.example/api");
        std::env::set_var("EUINDICO_STORAGE_PATH", "/tmp/session.json");
        std::env::set_var("EUINDICO_API_TIMEOUT_SECS", "15");
        std::env::set_var("EUINDICO_APP_NAME", "Eu Indico Staging");
        std::env::set_var("EUINDICO_VERSION", "2.0.0");
        std::env::set_var("EUINDICO_LOG_LEVEL", "debug");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.api.base_url, "https://indico.example/api");
        assert_eq!(config.api.timeout_secs, Some(15));
        assert_eq!(config.storage.path, "/tmp/session.json");
        assert_eq!(config.app.name, "Eu Indico Staging");
        assert_eq!(config.app.version, "2.0.0");
        assert_eq!(config.log_level, "debug");

        clear_env();
    }

    #[test]
    fn test_load_from_env_uses_defaults_for_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("EUINDICO_API_URL", "http://localhost:5050/api");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.app.name, "Eu Indico");
        assert_eq!(config.log_level, "info");

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, EuIndicoError::Config(message) if message.contains("EUINDICO_API_URL")));
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("EUINDICO_API_URL", "http://localhost:5050/api");
        std::env::set_var("EUINDICO_API_TIMEOUT_SECS", "soon");

        assert!(matches!(load_from_env(), Err(EuIndicoError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_parse_config_rejects_unknown_extension() {
        let result = parse_config("{}", Path::new("config.yaml"));
        assert!(matches!(result, Err(EuIndicoError::Config(message)) if message.contains("yaml")));
    }

    #[test]
    fn test_parse_config_partial_toml_keeps_defaults() {
        let config = parse_config(
            "log_level = \"warn\"\n[api]\nbase_url = \"http://10.0.0.2/api\"\n",
            Path::new("euindico.toml"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2/api");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.storage.path, "euindico-session.json");
    }
}
