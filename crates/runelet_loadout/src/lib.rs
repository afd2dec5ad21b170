//! Runelet Loadout - Loadout engine and blueprint editing
//!
//! Builds on `runelet_inventory` to manage complete gear setups.
//!
//! # Features
//!
//! - Equip/unequip with displacement back into the inventory
//! - Shift-style inventory moves and equipment swaps
//! - Prayer presets, spellbook and notes per loadout
//! - Player combat levels for the session
//! - Blueprints holding one or more loadouts
//! - Editing session with an active loadout and drag and drop routing
//! - JSON embed codec
//!
//! # Example
//!
//! ```ignore
//! use runelet_loadout::prelude::*;
//!
//! let mut editor = BlueprintEditor::default();
//! editor.equip_item(spear, None);
//! let totals = editor.total_bonuses();
//! ```

pub mod blueprint;
pub mod codec;
pub mod config;
pub mod drag;
pub mod editor;
pub mod id;
pub mod loadout;
pub mod prayer;
pub mod skills;

pub mod prelude {
    pub use crate::blueprint::{Blueprint, BlueprintError, LoadoutTab};
    pub use crate::codec::{decode, decode_or_default, encode, encode_pretty, CodecError};
    pub use crate::config::EditorConfig;
    pub use crate::drag::{DragPayload, DragSource, DropAction, DropReport, DropTarget};
    pub use crate::editor::BlueprintEditor;
    pub use crate::id::{LoadoutId, PresetId};
    pub use crate::loadout::{EquipOutcome, Loadout, LoadoutError};
    pub use crate::prayer::{PrayerPreset, PresetUpdate, Spellbook};
    pub use crate::skills::{PlayerStats, Skill};
}

pub use prelude::*;
