//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.butai/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ButaiConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub listings_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub notice_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub username: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LISTINGS_PATH: &str = "/apartments";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NOTICE_SECS: u64 = 4;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub listings_path: String,
    pub timeout_secs: u64,
    pub notice_secs: u64,
    pub username: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.butai/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".butai").join("config.toml"))
}

/// Load config from `~/.butai/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ButaiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ButaiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ButaiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ButaiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ButaiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Butai Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:8080"   # Or set BUTAI_BASE_URL env var
# listings_path = "/apartments"
# timeout_secs = 10

# [ui]
# notice_secs = 4                      # How long transient notices stay up

# [profile]
# username = "jonas"
# email = "jonas@example.com"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &ButaiConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BUTAI_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Listings path: env → config → default
    let listings_path = std::env::var("BUTAI_LISTINGS_PATH")
        .ok()
        .or_else(|| config.api.listings_path.clone())
        .unwrap_or_else(|| DEFAULT_LISTINGS_PATH.to_string());

    ResolvedConfig {
        base_url,
        listings_path,
        timeout_secs: config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        notice_secs: config.ui.notice_secs.unwrap_or(DEFAULT_NOTICE_SECS),
        username: config.profile.username.clone(),
        email: config.profile.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ButaiConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.profile.username.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ButaiConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.listings_path, DEFAULT_LISTINGS_PATH);
        assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(resolved.notice_secs, DEFAULT_NOTICE_SECS);
        assert!(resolved.username.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ButaiConfig {
            api: ApiConfig {
                base_url: Some("https://api.example.com".to_string()),
                listings_path: Some("/v2/apartments".to_string()),
                timeout_secs: Some(30),
            },
            ui: UiConfig {
                notice_secs: Some(8),
            },
            profile: ProfileConfig {
                username: Some("jonas".to_string()),
                email: Some("jonas@example.com".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, "https://api.example.com");
        assert_eq!(resolved.listings_path, "/v2/apartments");
        assert_eq!(resolved.timeout_secs, 30);
        assert_eq!(resolved.notice_secs, 8);
        assert_eq!(resolved.username.as_deref(), Some("jonas"));
        assert_eq!(resolved.email.as_deref(), Some("jonas@example.com"));
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = ButaiConfig {
            api: ApiConfig {
                base_url: Some("https://from-config.example.com".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("https://from-cli.example.com"));
        assert_eq!(resolved.base_url, "https://from-cli.example.com");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "https://api.example.com"
timeout_secs = 15

[ui]
notice_secs = 6

[profile]
username = "ona"
"#;
        let config: ButaiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(config.api.timeout_secs, Some(15));
        assert!(config.api.listings_path.is_none());
        assert_eq!(config.ui.notice_secs, Some(6));
        assert_eq!(config.profile.username.as_deref(), Some("ona"));
        assert!(config.profile.email.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[api]
base_url = "http://10.0.0.5:8080"
"#;
        let config: ButaiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://10.0.0.5:8080"));
        assert!(config.api.timeout_secs.is_none());
        assert!(config.ui.notice_secs.is_none());
    }
}
