//! Montage resource registry.
//!
//! This module provides a store for animation montage definitions that can be
//! reused by multiple characters. A montage is a timeline split into named
//! sections; characters play it through their
//! [`AnimInstance`](crate::components::animinstance::AnimInstance).
//!
//! The default store holds the punch montage used by the melee attack, with
//! the two sections `Punch1` and `Punch2`. More definitions can be loaded from
//! JSON:
//!
//! ```json
//! {
//!   "punch_montage": {
//!     "sections": [
//!       { "name": "Punch1", "start": 0.0, "length": 0.6 },
//!       { "name": "Punch2", "start": 0.6, "length": 0.6 }
//!     ]
//!   }
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub const PUNCH_MONTAGE: &str = "punch_montage";
const PUNCH_SECTION_LENGTH: f32 = 0.6;

/// Named time range inside a montage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MontageSection {
    pub name: String,
    /// Section start in seconds.
    pub start: f32,
    /// Section duration in seconds.
    pub length: f32,
}

/// Immutable data describing a montage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MontageDef {
    pub sections: Vec<MontageSection>,
}

impl MontageDef {
    pub fn section(&self, name: &str) -> Option<&MontageSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Total playable length: end of the last section.
    pub fn length(&self) -> f32 {
        self.sections
            .iter()
            .map(|s| s.start + s.length)
            .fold(0.0, f32::max)
    }
}

/// Central registry of montage definitions keyed by asset name.
#[derive(Resource, Debug, Clone)]
pub struct MontageStore {
    pub montages: FxHashMap<String, MontageDef>,
}

impl Default for MontageStore {
    fn default() -> Self {
        let mut store = Self::empty();
        store.insert(
            PUNCH_MONTAGE,
            MontageDef {
                sections: vec![
                    MontageSection {
                        name: "Punch1".to_string(),
                        start: 0.0,
                        length: PUNCH_SECTION_LENGTH,
                    },
                    MontageSection {
                        name: "Punch2".to_string(),
                        start: PUNCH_SECTION_LENGTH,
                        length: PUNCH_SECTION_LENGTH,
                    },
                ],
            },
        );
        store
    }
}

impl MontageStore {
    pub fn empty() -> Self {
        Self {
            montages: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, def: MontageDef) {
        self.montages.insert(key.into(), def);
    }

    pub fn get(&self, key: &str) -> Option<&MontageDef> {
        self.montages.get(key)
    }

    /// Add or replace definitions from a JSON object of `name -> MontageDef`.
    pub fn extend_from_json(&mut self, text: &str) -> Result<usize, String> {
        let defs: FxHashMap<String, MontageDef> = serde_json::from_str(text)
            .map_err(|e| format!("Failed to parse montage definitions: {}", e))?;
        for (name, def) in &defs {
            if let Some(bad) = def.sections.iter().find(|s| s.length <= 0.0 || s.start < 0.0) {
                return Err(format!(
                    "Montage '{}' section '{}' has an invalid time range",
                    name, bad.name
                ));
            }
        }
        let count = defs.len();
        self.montages.extend(defs);
        Ok(count)
    }

    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read montage file {:?}: {}", path, e))?;
        self.extend_from_json(&text)
    }
}
