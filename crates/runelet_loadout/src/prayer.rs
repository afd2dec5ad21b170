//! Spellbooks and prayer presets

use crate::id::PresetId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Active spellbook of a loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spellbook {
    /// Standard spellbook
    #[default]
    Standard,
    /// Ancient Magicks
    Ancient,
    /// Lunar spellbook
    Lunar,
    /// Arceuus spellbook
    Arceuus,
}

impl Spellbook {
    /// Get all spellbooks
    pub fn all() -> [Self; 4] {
        [Self::Standard, Self::Arceuus, Self::Ancient, Self::Lunar]
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard spellbook",
            Self::Ancient => "Ancient spellbook",
            Self::Lunar => "Lunar spellbook",
            Self::Arceuus => "Arceuus spellbook",
        }
    }
}

impl fmt::Display for Spellbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Named set of prayers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerPreset {
    pub id: PresetId,
    pub name: String,
    /// Prayer ids, in activation order (duplicates allowed)
    pub prayers: Vec<String>,
}

impl PrayerPreset {
    /// Create an empty preset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PresetId::generate(),
            name: name.into(),
            prayers: Vec::new(),
        }
    }

    /// Set prayers
    pub fn with_prayers<I, S>(mut self, prayers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prayers = prayers.into_iter().map(Into::into).collect();
        self
    }

    /// Merge a partial update into this preset
    pub fn apply(&mut self, update: PresetUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(prayers) = update.prayers {
            self.prayers = prayers;
        }
    }
}

/// Partial update to a prayer preset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetUpdate {
    pub name: Option<String>,
    pub prayers: Option<Vec<String>>,
}

impl PresetUpdate {
    /// Rename the preset
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            prayers: None,
        }
    }

    /// Replace the preset's prayers
    pub fn prayers<I, S>(prayers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            prayers: Some(prayers.into_iter().map(Into::into).collect()),
        }
    }
}
