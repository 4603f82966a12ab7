//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.abacus/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::format::DEFAULT_THOUSANDS_SEPARATOR;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AbacusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub thousands_separator: Option<char>,
    pub show_hints: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE_NAME: &str = "abacus.log";
pub const DEFAULT_SHOW_HINTS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub thousands_separator: char,
    pub show_hints: bool,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
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

/// Returns the `~/.abacus` directory.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".abacus"))
}

/// Returns the path to `~/.abacus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `path`, or from `~/.abacus/config.toml` if `None`.
///
/// A missing default file is generated and `AbacusConfig::default()` is
/// returned. An explicitly given path that is missing is an I/O error.
/// A malformed file returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<AbacusConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(AbacusConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(AbacusConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AbacusConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Abacus Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "abacus.log"            # Relative paths resolve against ~/.abacus/

# [display]
# thousands_separator = ","
# show_hints = true                  # Key hints under the keypad
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AbacusConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, reading environment variables through `env`.
pub fn resolve_with_env(
    config: &AbacusConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("ABACUS_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env("ABACUS_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(|file| resolve_log_path(&file))
        .unwrap_or_else(default_log_path);

    // Separator: env → config → default (first char of the env value)
    let thousands_separator = env("ABACUS_THOUSANDS_SEPARATOR")
        .and_then(|s| s.chars().next())
        .or(config.display.thousands_separator)
        .unwrap_or(DEFAULT_THOUSANDS_SEPARATOR);

    ResolvedConfig {
        log_level,
        log_file,
        thousands_separator,
        show_hints: config.display.show_hints.unwrap_or(DEFAULT_SHOW_HINTS),
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match LevelFilter::from_str(level.trim()) {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, using default", level);
            None
        }
    }
}

/// Relative log paths live next to the config file.
fn resolve_log_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn default_log_path() -> PathBuf {
    resolve_log_path(DEFAULT_LOG_FILE_NAME)
}
