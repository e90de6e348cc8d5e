use super::{map::Grid, presets};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Construction parameters of a lake. Fixed once the environment is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrozenLakeConfig {
    /// Explicit layout rows. Takes precedence over `map_name`.
    pub desc: Option<Vec<String>>,

    /// Name of a preset layout (see [`presets::MAPS`]).
    pub map_name: Option<String>,

    /// Enables dense step/hole rewards.
    pub rewarding: bool,

    pub step_reward: f64,

    pub hole_reward: f64,

    pub is_slippery: bool,
}

impl Default for FrozenLakeConfig {
    fn default() -> Self {
        Self {
            desc: None,
            map_name: Some("4x4".into()),
            rewarding: true,
            step_reward: -1.,
            hole_reward: -100.,
            is_slippery: false,
        }
    }
}

impl FrozenLakeConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn with_desc<S: Into<String>>(mut self, rows: impl IntoIterator<Item = S>) -> Self {
        self.desc = Some(rows.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_map_name(mut self, name: impl Into<String>) -> Self {
        self.desc = None;
        self.map_name = Some(name.into());
        self
    }

    pub fn with_slippery(mut self, is_slippery: bool) -> Self {
        self.is_slippery = is_slippery;
        self
    }

    pub fn with_rewarding(mut self, rewarding: bool) -> Self {
        self.rewarding = rewarding;
        self
    }

    /// Resolves the map source into a grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        match (&self.desc, &self.map_name) {
            (Some(desc), _) => Ok(Grid::parse(desc.as_slice())),
            (None, Some(name)) => presets::get(name)
                .map(Grid::parse)
                .ok_or_else(|| ConfigError::UnknownPreset(name.clone())),
            (None, None) => Err(ConfigError::MissingMap),
        }
    }
}
