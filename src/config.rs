//! Configuration for the controller
//!
//! Stored as TOML. Every field has a default, so an empty (or missing)
//! file gives the stock BlueStacks setup with the stock thresholds.

use crate::profile::{KeyTable, ProfileRegistry, DEFAULT_PROFILE};
use headsurf_core::calibration::{
    DEFAULT_JUMP_THRESHOLD, DEFAULT_SIDE_THRESHOLD, DEFAULT_SLIDE_THRESHOLD,
};
use headsurf_core::{Action, CoreError, Sensitivity, Session, ThresholdBases};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration problems detected at load time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown profile \"{name}\" (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("Profile \"{profile}\" maps {action} to unknown key \"{key}\"")]
    UnknownKey {
        profile: String,
        action: Action,
        key: String,
    },

    #[error(transparent)]
    Threshold(#[from] CoreError),

    #[error("min_confidence {0} must be within [0, 1]")]
    InvalidConfidence(f64),
}

/// Base thresholds (fractions of the frame) and the sensitivity multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Upward head movement needed to jump
    #[serde(default = "default_jump")]
    pub jump: f64,
    /// Downward head movement needed to slide
    #[serde(default = "default_slide")]
    pub slide: f64,
    /// Sideways head movement needed to change lane
    #[serde(default = "default_side")]
    pub side: f64,
    /// Multiplier applied to all three, snapped to 0.2 - 2.5 in 0.1 steps
    #[serde(default)]
    pub sensitivity: Sensitivity,
}

fn default_jump() -> f64 {
    DEFAULT_JUMP_THRESHOLD
}
fn default_slide() -> f64 {
    DEFAULT_SLIDE_THRESHOLD
}
fn default_side() -> f64 {
    DEFAULT_SIDE_THRESHOLD
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            jump: default_jump(),
            slide: default_slide(),
            side: default_side(),
            sensitivity: Sensitivity::default(),
        }
    }
}

impl ThresholdConfig {
    pub fn bases(&self) -> Result<ThresholdBases, CoreError> {
        ThresholdBases::new(self.jump, self.slide, self.side)
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadsurfConfig {
    /// Active emulator profile
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Mirror x (selfie-view camera)
    #[serde(default)]
    pub mirror: bool,
    /// Samples reporting a lower confidence count as "not detected"
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
    /// How long to wait for a control key after each frame
    #[serde(default = "default_control_poll_ms")]
    pub control_poll_ms: u64,
    /// Name for the virtual keyboard device
    #[serde(default = "default_device_name")]
    pub device_name: String,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    /// Extra (or overriding) profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, KeyTable>,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}
fn default_min_confidence() -> f64 {
    0.5
}
fn default_control_poll_ms() -> u64 {
    5
}
fn default_device_name() -> String {
    "headsurf virtual keyboard".to_string()
}

impl Default for HeadsurfConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            mirror: false,
            min_confidence: default_min_confidence(),
            control_poll_ms: default_control_poll_ms(),
            device_name: default_device_name(),
            thresholds: ThresholdConfig::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl HeadsurfConfig {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("headsurf")
            .join("config.toml")
    }

    /// Load and validate config from a file, or return default if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check thresholds, confidence, every profile, and the active profile name
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.bases()?;
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidConfidence(self.min_confidence));
        }
        self.registry()?.resolve(&self.profile)?;
        Ok(())
    }

    /// Builtin profiles plus the ones defined in this config
    pub fn registry(&self) -> Result<ProfileRegistry, ConfigError> {
        let mut registry = ProfileRegistry::with_builtins();
        for (name, table) in &self.profiles {
            registry.register(name, table.clone())?;
        }
        Ok(registry)
    }

    /// Key table of the active profile
    pub fn active_table(&self) -> Result<KeyTable, ConfigError> {
        Ok(self.registry()?.resolve(&self.profile)?.clone())
    }

    /// Fresh, uncalibrated session using these thresholds
    pub fn session(&self) -> Result<Session, ConfigError> {
        Ok(Session::new(self.thresholds.bases()?, self.thresholds.sensitivity))
    }
}
