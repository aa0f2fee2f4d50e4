use crate::error::{AppError, AppResult, ConfigErrorKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub boot_interval_ms: u64,  // delay between boot lines
    pub word_interval_ms: u64,  // delay between hero word changes
    pub prompt: String,
    pub color: bool,
    pub boot: bool,             // play the boot sequence at all
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boot_interval_ms: 500,
            word_interval_ms: 2000,
            prompt: "> ".to_string(),
            color: true,
            boot: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        toml::from_str(&data).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Parse(e),
        })
    }

    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let d = Self::default();
        Ok(Self {
            boot_interval_ms: parse_var(&get, "PULSENODE_BOOT_INTERVAL_MS")?.unwrap_or(d.boot_interval_ms),
            word_interval_ms: parse_var(&get, "PULSENODE_WORD_INTERVAL_MS")?.unwrap_or(d.word_interval_ms),
            prompt: get("PULSENODE_PROMPT").unwrap_or(d.prompt),
            color: parse_flag(&get, "PULSENODE_COLOR")?.unwrap_or(d.color),
            boot: parse_flag(&get, "PULSENODE_BOOT")?.unwrap_or(d.boot),
        })
    }

    pub fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.boot_interval_ms)
    }

    pub fn word_interval(&self) -> Duration {
        Duration::from_millis(self.word_interval_ms)
    }
}

fn parse_var<T: FromStr>(get: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<T>> {
    match get(key) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::InvalidEnv(key.to_string(), v)),
    }
}

fn parse_flag(get: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<bool>> {
    match get(key) {
        None => Ok(None),
        Some(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(AppError::InvalidEnv(key.to_string(), v)),
        },
    }
}
