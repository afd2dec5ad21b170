//! Blueprint editing session
//!
//! Owns one blueprint, tracks the active loadout and the item being dragged.
//! Every loadout operation targets the active loadout.

use crate::blueprint::{Blueprint, BlueprintError, LoadoutTab};
use crate::config::EditorConfig;
use crate::drag::{DragPayload, DropAction, DropReport, DropTarget};
use crate::id::{LoadoutId, PresetId};
use crate::loadout::{EquipOutcome, Loadout, LoadoutError};
use crate::prayer::{PrayerPreset, PresetUpdate, Spellbook};
use crate::skills::{PlayerStats, Skill};
use runelet_inventory::{EquipmentBonuses, EquipmentSlot, EquippedItems, Inventory, Item};

/// Editing session for a single blueprint
#[derive(Debug, Clone)]
pub struct BlueprintEditor {
    blueprint: Blueprint,
    active: Option<LoadoutId>,
    drag: Option<DragPayload>,
    player_stats: PlayerStats,
    config: EditorConfig,
}

impl BlueprintEditor {
    /// Start a session on a fresh draft
    pub fn new(config: EditorConfig) -> Self {
        let blueprint = Blueprint::new(&config);
        Self::open(blueprint, config)
    }

    /// Start a session on an existing blueprint, activating its first loadout
    pub fn open(blueprint: Blueprint, config: EditorConfig) -> Self {
        let active = blueprint.first_id().cloned();
        Self {
            blueprint,
            active,
            drag: None,
            player_stats: PlayerStats::default(),
            config,
        }
    }

    /// Get the blueprint being edited
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// End the session, returning the blueprint
    pub fn into_blueprint(self) -> Blueprint {
        self.blueprint
    }

    /// Get the session config
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Set the blueprint title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.blueprint.title = title.into();
    }

    /// Set the blueprint description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.blueprint.description = description.into();
    }

    /// Get the player's combat levels
    pub fn player_stats(&self) -> &PlayerStats {
        &self.player_stats
    }

    /// Set a combat level, ignoring levels outside 1..=99
    pub fn set_player_stat(&mut self, skill: Skill, level: u8) -> bool {
        self.player_stats.set_level(skill, level)
    }

    // Loadout list

    /// Get the active loadout id
    pub fn active_id(&self) -> Option<&LoadoutId> {
        self.active.as_ref()
    }

    /// Get the active loadout
    pub fn active_loadout(&self) -> Option<&Loadout> {
        self.active.as_ref().and_then(|id| self.blueprint.get(id))
    }

    /// Activate a loadout
    pub fn set_active_loadout(&mut self, id: &LoadoutId) -> bool {
        if self.blueprint.get(id).is_none() {
            log::warn!("Cannot activate unknown loadout {}", id);
            return false;
        }
        self.active = Some(id.clone());
        true
    }

    /// Add a loadout and make it active
    ///
    /// Copies the active loadout and inserts the copy right after it, named
    /// from config. Without an active loadout an empty one named `name` is
    /// appended instead.
    pub fn add_loadout(&mut self, name: Option<&str>) -> LoadoutId {
        let source = self
            .active
            .as_ref()
            .and_then(|id| Some((self.blueprint.position(id)?, self.blueprint.get(id)?)));

        let id = match source {
            Some((index, active)) => {
                let copy = active.duplicate(self.config.copy_name(active.name()));
                let id = copy.id().clone();
                self.blueprint.insert(index + 1, copy);
                id
            }
            None => {
                let loadout = Loadout::new(name.unwrap_or(&self.config.new_loadout_name));
                let id = loadout.id().clone();
                self.blueprint.push(loadout);
                id
            }
        };

        log::debug!("Added loadout {}", id);
        self.active = Some(id.clone());
        id
    }

    /// Remove a loadout
    ///
    /// Removing the active loadout activates the first remaining one.
    pub fn remove_loadout(&mut self, id: &LoadoutId) -> Result<(), BlueprintError> {
        if let Err(e) = self.blueprint.remove_loadout(id) {
            log::warn!("{}", e);
            return Err(e);
        }
        self.sync_active();
        Ok(())
    }

    /// Rename a loadout, trimming whitespace
    pub fn rename_loadout(&mut self, id: &LoadoutId, name: &str) -> bool {
        self.blueprint.rename_loadout(id, name)
    }

    /// Replace every loadout at once
    pub fn replace_loadouts(&mut self, loadouts: Vec<Loadout>) -> bool {
        let replaced = self.blueprint.replace_loadouts(loadouts);
        self.sync_active();
        replaced
    }

    /// (id, name) pairs for tab navigation
    pub fn loadout_tabs(&self) -> Vec<LoadoutTab> {
        self.blueprint.tabs()
    }

    /// Point the active id back at the list if it went stale
    fn sync_active(&mut self) {
        let valid = self
            .active
            .as_ref()
            .is_some_and(|id| self.blueprint.get(id).is_some());
        if !valid {
            self.active = self.blueprint.first_id().cloned();
        }
    }

    /// Run `f` on the active loadout, or return `fallback` if there is none
    fn with_active<R>(&mut self, op: &str, fallback: R, f: impl FnOnce(&mut Loadout) -> R) -> R {
        match self.active.as_ref().and_then(|id| self.blueprint.get_mut(id)) {
            Some(loadout) => f(loadout),
            None => {
                log::warn!("No active loadout for {}", op);
                fallback
            }
        }
    }

    // Active loadout views

    /// Equipment of the active loadout
    pub fn active_equipped_items(&self) -> Option<&EquippedItems> {
        self.active_loadout().map(Loadout::equipped_items)
    }

    /// Inventory of the active loadout
    pub fn active_inventory_items(&self) -> Option<&Inventory> {
        self.active_loadout().map(Loadout::inventory_items)
    }

    /// Prayer presets of the active loadout, empty without one
    pub fn active_prayer_presets(&self) -> &[PrayerPreset] {
        self.active_loadout()
            .map(Loadout::prayer_presets)
            .unwrap_or_default()
    }

    /// Spellbook of the active loadout, standard without one
    pub fn active_spellbook(&self) -> Spellbook {
        self.active_loadout()
            .map(Loadout::spellbook)
            .unwrap_or_default()
    }

    /// Bonus totals of the active loadout, all zero without one
    pub fn total_bonuses(&self) -> EquipmentBonuses {
        self.active_loadout()
            .map(Loadout::total_bonuses)
            .unwrap_or_default()
    }

    // Active loadout operations

    /// Equip an item on the active loadout
    pub fn equip_item(&mut self, item: Item, from_inventory_index: Option<usize>) -> EquipOutcome {
        self.with_active("equip", EquipOutcome::default(), |l| {
            l.equip_item(item, from_inventory_index)
        })
    }

    /// Equip an item taken from an inventory slot
    pub fn equip_from_inventory(&mut self, item: Item, from_index: usize) -> EquipOutcome {
        self.with_active("equip", EquipOutcome::default(), |l| {
            l.equip_from_inventory(item, from_index)
        })
    }

    /// Move an equipped item into the inventory
    pub fn unequip_item(&mut self, slot: EquipmentSlot) -> Result<Option<usize>, LoadoutError> {
        self.with_active("unequip", Ok(None), |l| l.unequip_item(slot))
    }

    /// Put an item in the first free inventory slot
    pub fn add_item_to_inventory(&mut self, item: Item) -> bool {
        self.with_active("add item", false, |l| l.add_item_to_inventory(item))
    }

    /// Overwrite one inventory slot
    pub fn set_inventory_item(&mut self, index: usize, item: Option<Item>) -> bool {
        self.with_active("set inventory item", false, |l| l.set_inventory_item(index, item))
    }

    /// Move an inventory item, shifting the items in between
    pub fn move_inventory_item(&mut self, from_index: usize, to_index: usize) -> bool {
        self.with_active("move inventory item", false, |l| {
            l.move_inventory_item(from_index, to_index)
        })
    }

    /// Exchange an equipment slot with an inventory slot
    pub fn swap_equipment_and_inventory_item(
        &mut self,
        slot: EquipmentSlot,
        inv_index: usize,
    ) -> EquipOutcome {
        self.with_active("swap", EquipOutcome::default(), |l| {
            l.swap_equipment_and_inventory_item(slot, inv_index)
        })
    }

    /// Replace the stored runes of a rune pouch
    pub fn update_rune_pouch(&mut self, index: usize, runes: Vec<Option<Item>>) -> bool {
        self.with_active("update rune pouch", false, |l| l.update_rune_pouch(index, runes))
    }

    /// Set the spellbook of the active loadout
    pub fn set_spellbook(&mut self, spellbook: Spellbook) -> bool {
        self.with_active("set spellbook", false, |l| {
            l.set_spellbook(spellbook);
            true
        })
    }

    /// Set the notes of the active loadout
    pub fn set_notes(&mut self, notes: impl Into<String>) -> bool {
        let notes = notes.into();
        self.with_active("set notes", false, |l| {
            l.set_notes(notes);
            true
        })
    }

    /// Add a prayer preset, named from config when `name` is `None`
    pub fn add_prayer_preset(&mut self, name: Option<&str>) -> Option<PresetId> {
        let name = name.unwrap_or(&self.config.new_preset_name).to_string();
        self.with_active("add prayer preset", None, |l| Some(l.add_prayer_preset(name)))
    }

    /// Rename a prayer preset or replace its prayers
    pub fn update_prayer_preset(&mut self, id: &PresetId, update: PresetUpdate) -> bool {
        self.with_active("update prayer preset", false, |l| {
            l.update_prayer_preset(id, update)
        })
    }

    /// Delete a prayer preset
    pub fn remove_prayer_preset(&mut self, id: &PresetId) -> bool {
        self.with_active("remove prayer preset", false, |l| l.remove_prayer_preset(id))
    }

    // Drag and drop

    /// Pick up an item
    pub fn start_drag(&mut self, payload: DragPayload) {
        self.drag = Some(payload);
    }

    /// Cancel the drag, returning the payload
    pub fn end_drag(&mut self) -> Option<DragPayload> {
        self.drag.take()
    }

    /// Get the item being dragged
    pub fn drag_payload(&self) -> Option<&DragPayload> {
        self.drag.as_ref()
    }

    /// Release the dragged item on a target
    pub fn drop_payload(&mut self, target: DropTarget) -> DropReport {
        let Some(DragPayload { source, item }) = self.drag.take() else {
            log::debug!("Drop without a drag payload");
            return DropReport::ignored();
        };

        let action = DropAction::resolve(source, target);
        let (applied, dropped) = match action {
            DropAction::EquipFromInventory { from_index } => {
                let outcome = self.equip_from_inventory(item, from_index);
                (outcome.equipped, outcome.dropped)
            }
            DropAction::Equip => {
                let outcome = self.equip_item(item, None);
                (outcome.equipped, outcome.dropped)
            }
            DropAction::MoveInventory {
                from_index,
                to_index,
            } => (self.move_inventory_item(from_index, to_index), Vec::new()),
            DropAction::SetInventory { index } => {
                (self.set_inventory_item(index, Some(item)), Vec::new())
            }
            DropAction::SwapEquipment { slot, index } => {
                let had_item = self
                    .active_equipped_items()
                    .is_some_and(|eq| eq.is_occupied(slot));
                let outcome = self.swap_equipment_and_inventory_item(slot, index);
                (had_item || outcome.equipped, outcome.dropped)
            }
            DropAction::Ignore => (false, Vec::new()),
        };

        DropReport {
            action,
            applied,
            dropped,
        }
    }
}

impl Default for BlueprintEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
