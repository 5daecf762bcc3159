//! Configuration for the soshell dashboard.
//!
//! A single TOML file at the platform config dir, overlaid with
//! `SOSHELL_`-prefixed environment variables. The interesting knob is the
//! responsive breakpoint: the width (in terminal columns) below which the
//! dashboard collapses to a single column with a bottom navigation bar.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Width (columns) below which the viewport is classified narrow.
    /// The dashboard then drops its sidebars and shows the bottom nav.
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u32,

    /// Extra columns beyond `breakpoint` required before the right-hand
    /// widgets column appears (the three-column layout threshold).
    #[serde(default = "default_wide_margin")]
    pub wide_margin: u32,

    /// Route path opened at startup (e.g. "/", "/friends").
    #[serde(default = "default_route")]
    pub default_route: String,

    /// Log file path. Logs never go to stdout — that would corrupt the TUI.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoint: default_breakpoint(),
            wide_margin: default_wide_margin(),
            default_route: default_route(),
            log_file: None,
        }
    }
}

// 100 columns is where compact terminal layouts conventionally kick in;
// a browser would use 768px here.
fn default_breakpoint() -> u32 {
    100
}
fn default_wide_margin() -> u32 {
    60
}
fn default_route() -> String {
    "/".into()
}

impl Config {
    /// Reject configurations the UI cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_route.starts_with('/') {
            return Err(ConfigError::Validation {
                field: "default_route".into(),
                reason: format!("must start with '/', got '{}'", self.default_route),
            });
        }
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "soshell", "soshell").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("soshell");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the Config from an explicit file path + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SOSHELL_"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// Load config, returning defaults if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.breakpoint, 100);
        assert_eq!(cfg.wide_margin, 60);
        assert_eq!(cfg.default_route, "/");
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "breakpoint = 120\ndefault_route = \"/friends\"\nlog_file = \"/tmp/soshell.log\"\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.breakpoint, 120);
        assert_eq!(cfg.wide_margin, 60); // untouched default
        assert_eq!(cfg.default_route, "/friends");
        assert_eq!(cfg.log_file.unwrap(), PathBuf::from("/tmp/soshell.log"));
    }

    #[test]
    fn invalid_route_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_route = \"friends\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = Config {
            breakpoint: 90,
            wide_margin: 40,
            default_route: "/watch".into(),
            log_file: Some(PathBuf::from("/tmp/s.log")),
        };
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.breakpoint, 90);
        assert_eq!(back.default_route, "/watch");
    }
}
