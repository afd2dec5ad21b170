//! Player combat skill levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest trainable level
pub const MIN_LEVEL: u8 = 1;
/// Highest trainable level
pub const MAX_LEVEL: u8 = 99;

/// Combat skills tracked for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Attack,
    Strength,
    Defence,
    Ranged,
    Magic,
    Prayer,
}

impl Skill {
    /// Get all skills, in display order
    pub fn all() -> [Self; 6] {
        [
            Self::Attack,
            Self::Strength,
            Self::Defence,
            Self::Ranged,
            Self::Magic,
            Self::Prayer,
        ]
    }

    /// Wire name of the skill
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Strength => "strength",
            Self::Defence => "defence",
            Self::Ranged => "ranged",
            Self::Magic => "magic",
            Self::Prayer => "prayer",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Skill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|skill| skill.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown skill: {}", s))
    }
}

/// Levels of the combat skills, all maxed by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub attack: u8,
    pub strength: u8,
    pub defence: u8,
    pub ranged: u8,
    pub magic: u8,
    pub prayer: u8,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            attack: MAX_LEVEL,
            strength: MAX_LEVEL,
            defence: MAX_LEVEL,
            ranged: MAX_LEVEL,
            magic: MAX_LEVEL,
            prayer: MAX_LEVEL,
        }
    }
}

impl PlayerStats {
    /// Get the level of a skill
    pub fn level(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Attack => self.attack,
            Skill::Strength => self.strength,
            Skill::Defence => self.defence,
            Skill::Ranged => self.ranged,
            Skill::Magic => self.magic,
            Skill::Prayer => self.prayer,
        }
    }

    /// Set the level of a skill
    /// Returns false and keeps the old level if `level` is outside 1..=99
    pub fn set_level(&mut self, skill: Skill, level: u8) -> bool {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            log::warn!("Ignoring {} level {}", skill, level);
            return false;
        }
        let entry = match skill {
            Skill::Attack => &mut self.attack,
            Skill::Strength => &mut self.strength,
            Skill::Defence => &mut self.defence,
            Skill::Ranged => &mut self.ranged,
            Skill::Magic => &mut self.magic,
            Skill::Prayer => &mut self.prayer,
        };
        *entry = level;
        true
    }

    /// (skill, level) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Skill, u8)> + '_ {
        Skill::all().into_iter().map(|skill| (skill, self.level(skill)))
    }
}
