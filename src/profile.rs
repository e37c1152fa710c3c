//! Emulator profiles: which key each action presses
//!
//! A profile is a total table over [`Action`]; a profile missing an action
//! fails to parse, and a profile naming an unknown key fails validation when
//! the config is loaded rather than at dispatch time.

use crate::config::ConfigError;
use crate::keys;
use headsurf_core::Action;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the profile used when none is configured
pub const DEFAULT_PROFILE: &str = "bluestacks";

/// Action → key identifier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyTable {
    pub jump: String,
    pub slide: String,
    pub left: String,
    pub right: String,
}

impl KeyTable {
    pub fn new(jump: &str, slide: &str, left: &str, right: &str) -> Self {
        Self {
            jump: jump.to_string(),
            slide: slide.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Key identifier for `action`
    pub fn key_for(&self, action: Action) -> &str {
        match action {
            Action::Jump => &self.jump,
            Action::Slide => &self.slide,
            Action::Left => &self.left,
            Action::Right => &self.right,
        }
    }

    /// Check that every key resolves to an input code
    pub fn validate(&self, profile: &str) -> Result<(), ConfigError> {
        for action in Action::ALL {
            let key = self.key_for(action);
            if !keys::is_known(key) {
                return Err(ConfigError::UnknownKey {
                    profile: profile.to_string(),
                    action,
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Built-in emulator profiles
pub fn builtin_profiles() -> [(&'static str, KeyTable); 2] {
    [
        // Arrow keys, BlueStacks default game controls
        ("bluestacks", KeyTable::new("up", "down", "left", "right")),
        // WASD, Nox default game controls
        ("nox", KeyTable::new("w", "s", "a", "d")),
    ]
}

/// Lookup of profiles by name
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, KeyTable>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with builtin profiles pre-loaded
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, table) in builtin_profiles() {
            registry.profiles.insert(name.to_string(), table);
        }
        registry
    }

    /// Validate and register a profile, replacing any with the same name
    pub fn register(&mut self, name: &str, table: KeyTable) -> Result<(), ConfigError> {
        table.validate(name)?;
        self.profiles.insert(name.to_string(), table);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&KeyTable> {
        self.profiles.get(name)
    }

    /// Find a profile or fail with the list of known names
    pub fn resolve(&self, name: &str) -> Result<&KeyTable, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownProfile {
            name: name.to_string(),
            available: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    /// Profile names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyTable)> {
        self.profiles.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
