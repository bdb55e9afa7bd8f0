//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::roster::DEFAULT_PAGE_SIZE;
use crate::core::storage::DEFAULT_DATA_FILE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Problems met while loading, reported once logging is up
    #[serde(skip)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub page_size: Option<usize>,
    pub frontend: Option<Frontend>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

/// Which presentation layer drives the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    #[default]
    Tui,
    Console,
}

impl Frontend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tui" => Some(Frontend::Tui),
            "console" => Some(Frontend::Console),
            _ => None,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "roster.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub page_size: usize,
    pub frontend: Frontend,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Loading and resolution fallbacks, for `main` to report
    pub warnings: Vec<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub frontend: Option<Frontend>,
    pub data_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.roster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
}

/// Load config from `~/.roster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RosterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RosterConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(RosterConfig {
            warnings: vec!["Could not determine home directory, using default config".to_string()],
            ..Default::default()
        });
    };
    load_config_from(&path)
}

/// Load config from an explicit path, generating a default if it is missing.
pub fn load_config_from(path: &Path) -> Result<RosterConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        let mut config = RosterConfig::default();
        if let Err(e) = generate_default_config(path) {
            config
                .warnings
                .push(format!("Failed to write default config {}: {}", path.display(), e));
        }
        return Ok(config);
    }

    let contents = fs::read_to_string(path)?;
    let config: RosterConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Roster Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "user_data.txt"        # Relative to the working directory
# page_size = 20                     # Users per page in the list view
# frontend = "tui"                   # "tui" or "console"

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "roster.log"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RosterConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve`, with environment lookups supplied by the caller.
pub fn resolve_with_env(
    config: &RosterConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = config.warnings.clone();

    // Data file: CLI → env → config → default
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env("ROSTER_DATA_FILE").map(PathBuf::from))
        .or_else(|| config.general.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    // Frontend: CLI → env → config → default
    let frontend = cli
        .frontend
        .or_else(|| {
            let value = env("ROSTER_FRONTEND")?;
            let parsed = Frontend::parse(&value);
            if parsed.is_none() {
                warnings.push(format!("Unknown ROSTER_FRONTEND {value:?}, ignoring it"));
            }
            parsed
        })
        .or(config.general.frontend)
        .unwrap_or_default();

    let log_level = config
        .logging
        .level
        .as_deref()
        .and_then(|level| match level.parse() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warnings.push(format!(
                    "Unknown log level {level:?} in config, using {DEFAULT_LOG_LEVEL}"
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        data_file,
        page_size: config
            .general
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1),
        frontend,
        log_level,
        log_file: config
            .logging
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&RosterConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.data_file, PathBuf::from("user_data.txt"));
        assert_eq!(resolved.page_size, 20);
        assert_eq!(resolved.frontend, Frontend::Tui);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.log_file, PathBuf::from("roster.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = RosterConfig {
            general: GeneralConfig {
                data_file: Some("people.txt".to_string()),
                page_size: Some(5),
                frontend: Some(Frontend::Console),
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                file: Some("other.log".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.data_file, PathBuf::from("people.txt"));
        assert_eq!(resolved.page_size, 5);
        assert_eq!(resolved.frontend, Frontend::Console);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("other.log"));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = RosterConfig {
            general: GeneralConfig {
                data_file: Some("config.txt".to_string()),
                frontend: Some(Frontend::Tui),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "ROSTER_DATA_FILE" => Some("env.txt".to_string()),
            "ROSTER_FRONTEND" => Some("Console".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.data_file, PathBuf::from("env.txt"));
        assert_eq!(resolved.frontend, Frontend::Console);

        let cli = CliOverrides {
            frontend: Some(Frontend::Tui),
            data_file: Some(PathBuf::from("cli.txt")),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.data_file, PathBuf::from("cli.txt"));
        assert_eq!(resolved.frontend, Frontend::Tui);
    }

    #[test]
    fn test_zero_page_size_and_bad_level_fall_back() {
        let config = RosterConfig {
            general: GeneralConfig {
                page_size: Some(0),
                ..Default::default()
            },
            logging: LoggingConfig {
                level: Some("chatty".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.page_size, 1);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.warnings,
            vec![r#"Unknown log level "chatty" in config, using INFO"#]
        );
    }

    #[test]
    fn test_clean_resolution_has_no_warnings() {
        let resolved = resolve_with_env(&RosterConfig::default(), &CliOverrides::default(), no_env);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_unknown_frontend_env_is_reported() {
        let env = |key: &str| (key == "ROSTER_FRONTEND").then(|| "gui".to_string());
        let resolved = resolve_with_env(&RosterConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.frontend, Frontend::Tui);
        assert_eq!(
            resolved.warnings,
            vec![r#"Unknown ROSTER_FRONTEND "gui", ignoring it"#]
        );
    }

    #[test]
    fn test_unwritable_default_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let config = load_config_from(&blocker.join("config.toml")).unwrap();
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].starts_with("Failed to write default config"));

        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.warnings, config.warnings);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
frontend = "console"
"#;
        let config: RosterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.frontend, Some(Frontend::Console));
        assert!(config.general.data_file.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_missing_config_generates_commented_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".roster").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.page_size.is_none());

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.starts_with("# Roster Configuration"));
        // Every line is commented out, so it parses back to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.general.frontend.is_none());
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\npage_size = \"lots\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
