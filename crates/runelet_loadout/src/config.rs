//! Editor configuration

use serde::{Deserialize, Serialize};

/// Default names used when creating blueprints, loadouts and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Title of a fresh blueprint
    pub blueprint_title: String,
    /// Name of the loadout a fresh blueprint starts with
    pub default_loadout_name: String,
    /// Name used when a loadout is created from scratch
    pub new_loadout_name: String,
    /// Appended to the name of a duplicated loadout
    pub copy_suffix: String,
    /// Name of a new prayer preset
    pub new_preset_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blueprint_title: "Untitled Blueprint".to_string(),
            default_loadout_name: "Default Loadout".to_string(),
            new_loadout_name: "New Loadout".to_string(),
            copy_suffix: " (Copy)".to_string(),
            new_preset_name: "New Preset".to_string(),
        }
    }
}

impl EditorConfig {
    /// Name for a copy of the loadout called `name`
    pub fn copy_name(&self, name: &str) -> String {
        format!("{}{}", name, self.copy_suffix)
    }
}
