//! Runner configuration from environment variables and command-line flags.
//!
//! - `DIAGONAL_LOG_PATH`: write logs to this file (logging is off otherwise)
//! - `DIAGONAL_LOG_LEVEL`: default log filter for the file (default: "info")
//! - `DIAGONAL_SWIPE_MIN`: minimum swipe distance in surface pixels (default: 4)
//!
//! Flags: `--autostart` skips the title screen, `--swipe-min <n>` overrides
//! the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Terminal surfaces are a few dozen pixels wide, far smaller than a touch
/// screen, so the default threshold is scaled down accordingly.
pub const DEFAULT_TERMINAL_SWIPE_MIN: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_path: Option<PathBuf>,
    pub log_level: String,
    pub swipe_min: f32,
    pub autostart: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: String::from("info"),
            swipe_min: DEFAULT_TERMINAL_SWIPE_MIN,
            autostart: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup("DIAGONAL_LOG_PATH").filter(|p| !p.is_empty()) {
            config.log_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("DIAGONAL_LOG_LEVEL").filter(|l| !l.is_empty()) {
            config.log_level = level;
        }
        if let Some(v) = lookup("DIAGONAL_SWIPE_MIN") {
            config.swipe_min = parse_distance(&v)
                .ok_or_else(|| anyhow!("DIAGONAL_SWIPE_MIN: invalid distance: {}", v))?;
        }
        Ok(config)
    }

    /// Apply command-line flags on top of this configuration.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--autostart" => self.autostart = true,
                "--swipe-min" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --swipe-min"))?;
                    self.swipe_min =
                        parse_distance(v).ok_or_else(|| anyhow!("invalid --swipe-min value: {}", v))?;
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }
}

fn parse_distance(s: &str) -> Option<f32> {
    s.trim()
        .parse::<f32>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}
