use gol::{Overpopulation, render};
use thiserror::Error;

pub const OVERPOPULATION_VAR: &str = "GOL_OVERPOPULATION";
pub const ALIVE_MARKER_VAR: &str = "GOL_ALIVE_MARKER";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown overpopulation mode {0:?}, expected `any-cell` or `alive-only`")]
    Overpopulation(String),
    #[error("the alive marker must not be empty")]
    EmptyMarker,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub overpopulation: Overpopulation,
    pub render: render::Settings,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Invalid values are logged and replaced by their default.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = var(OVERPOPULATION_VAR) {
            match parse_overpopulation(&value) {
                Ok(mode) => config.overpopulation = mode,
                Err(e) => log::warn!("{OVERPOPULATION_VAR}: {e}"),
            }
        }
        if let Some(value) = var(ALIVE_MARKER_VAR) {
            match parse_marker(&value) {
                Ok(marker) => config.render.alive_marker = marker,
                Err(e) => log::warn!("{ALIVE_MARKER_VAR}: {e}"),
            }
        }
        config
    }
}

fn parse_overpopulation(value: &str) -> Result<Overpopulation, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "any-cell" => Ok(Overpopulation::AnyCell),
        "alive-only" => Ok(Overpopulation::AliveOnly),
        _ => Err(ConfigError::Overpopulation(value.to_string())),
    }
}

fn parse_marker(value: &str) -> Result<String, ConfigError> {
    match value.trim() {
        "" => Err(ConfigError::EmptyMarker),
        marker => Ok(marker.to_string()),
    }
}
