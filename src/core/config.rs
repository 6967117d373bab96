//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wain/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::gis::DEFAULT_QARS_BASE_URL;
use crate::gis::maps::DEFAULT_MAPS_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WainConfig {
    #[serde(default)]
    pub gis: GisConfig,
    #[serde(default)]
    pub maps: MapsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GisConfig {
    pub base_url: Option<String>,
    /// Request timeout in seconds. Unset = no local timeout, the
    /// HTTP client default applies.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MapsConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub gis_base_url: String,
    pub gis_timeout: Option<Duration>,
    pub maps_base_url: String,
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

/// Returns the path to `~/.wain/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wain").join("config.toml"))
}

/// Load config from `~/.wain/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WainConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WainConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WainConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WainConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WainConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Wain Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [gis]
# base_url = "https://services.gisqatar.org.qa/server/rest/services/Vector/QARS_wgs84/MapServer/0"
#                                      # Or set WAIN_GIS_BASE_URL env var
# timeout_secs = 30                    # No local timeout when unset

# [maps]
# base_url = "https://www.google.com"  # Or set WAIN_MAPS_BASE_URL env var
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
/// `cli_gis_url` is from the `--gis-url` flag (None = not specified).
pub fn resolve(config: &WainConfig, cli_gis_url: Option<&str>) -> ResolvedConfig {
    // GIS base URL: CLI → env → config → default
    let gis_base_url = cli_gis_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("WAIN_GIS_BASE_URL").ok())
        .or_else(|| config.gis.base_url.clone())
        .unwrap_or_else(|| DEFAULT_QARS_BASE_URL.to_string());

    // Timeout: env → config (no default: unset means client default)
    let gis_timeout = std::env::var("WAIN_GIS_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .or(config.gis.timeout_secs)
        .map(Duration::from_secs);

    // Maps base URL: env → config → default
    let maps_base_url = std::env::var("WAIN_MAPS_BASE_URL")
        .ok()
        .or_else(|| config.maps.base_url.clone())
        .unwrap_or_else(|| DEFAULT_MAPS_BASE_URL.to_string());

    ResolvedConfig {
        gis_base_url,
        gis_timeout,
        maps_base_url,
    }
}
