//! Loadout state and the equip/unequip/move/swap engine

use crate::id::{LoadoutId, PresetId};
use crate::prayer::{PrayerPreset, PresetUpdate, Spellbook};
use runelet_inventory::equipment::{natural_slot, slots_to_clear};
use runelet_inventory::{
    total_bonuses, EquipmentBonuses, EquipmentSlot, EquippedItems, Inventory, Item, INVENTORY_SIZE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loadout errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadoutError {
    /// No free inventory slot for an unequipped item
    #[error("Cannot unequip {item} from {slot}, inventory is full")]
    InventoryFull { item: String, slot: EquipmentSlot },
}

/// Result of an equip or swap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipOutcome {
    /// Whether the new item was equipped
    pub equipped: bool,
    /// Displaced items that found no inventory slot and were lost
    pub dropped: Vec<Item>,
}

/// A single gear setup: equipment, inventory, prayers and spellbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    id: LoadoutId,
    name: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    equipped_items: EquippedItems,
    #[serde(default)]
    inventory_items: Inventory,
    #[serde(default)]
    prayer_presets: Vec<PrayerPreset>,
    #[serde(default)]
    spellbook: Spellbook,
}

impl Loadout {
    /// Create an empty loadout
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LoadoutId::generate(),
            name: name.into(),
            notes: String::new(),
            equipped_items: EquippedItems::new(),
            inventory_items: Inventory::new(),
            prayer_presets: Vec::new(),
            spellbook: Spellbook::default(),
        }
    }

    /// Fully independent copy with a fresh id
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        Self {
            id: LoadoutId::generate(),
            name: name.into(),
            ..self.clone()
        }
    }

    /// Get the loadout id
    pub fn id(&self) -> &LoadoutId {
        &self.id
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the free-form notes
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Get the equipped items
    pub fn equipped_items(&self) -> &EquippedItems {
        &self.equipped_items
    }

    /// Get the 28-slot inventory
    pub fn inventory_items(&self) -> &Inventory {
        &self.inventory_items
    }

    /// Get the prayer presets, in creation order
    pub fn prayer_presets(&self) -> &[PrayerPreset] {
        &self.prayer_presets
    }

    /// Get the active spellbook
    pub fn spellbook(&self) -> Spellbook {
        self.spellbook
    }

    /// Summed bonuses of the currently equipped items
    pub fn total_bonuses(&self) -> EquipmentBonuses {
        total_bonuses(&self.equipped_items)
    }

    /// Rename, trimming whitespace
    /// Returns false if the trimmed name is empty
    pub fn rename(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("Ignoring blank name for loadout {}", self.id);
            return false;
        }
        self.name = name.to_string();
        true
    }

    // Equipment

    /// Equip an item, routing displaced items back into the inventory
    ///
    /// When `from_inventory_index` is given, the item previously in the new
    /// item's natural slot goes to that exact inventory index (clearing it if
    /// there was none). Every other displaced item goes to the first empty
    /// slot, or is dropped when the inventory is full.
    pub fn equip_item(&mut self, item: Item, from_inventory_index: Option<usize>) -> EquipOutcome {
        let Some(declared) = item.declared_slot() else {
            log::warn!("Cannot equip {}, it has no equipment stats", item.name);
            return EquipOutcome::default();
        };

        let from_inventory_index = match from_inventory_index {
            Some(index) if index >= INVENTORY_SIZE => {
                log::warn!("Ignoring out of range source slot {} for {}", index, item.name);
                None
            }
            other => other,
        };

        let target = natural_slot(declared);
        let mut primary = None;
        let mut displaced = Vec::new();
        for slot in slots_to_clear(declared, &self.equipped_items) {
            if let Some(previous) = self.equipped_items.take(slot) {
                if slot == target {
                    primary = Some(previous);
                } else {
                    displaced.push(previous);
                }
            }
        }

        log::debug!("Equipping {} into {}", item.name, target);
        self.equipped_items.set(target, item);

        match from_inventory_index {
            Some(index) => {
                self.inventory_items.set_slot(index, primary);
            }
            None => {
                if let Some(previous) = primary {
                    displaced.insert(0, previous);
                }
            }
        }

        let mut outcome = EquipOutcome {
            equipped: true,
            dropped: Vec::new(),
        };
        for previous in displaced {
            if let Some(dropped) = self.stash(previous) {
                outcome.dropped.push(dropped);
            }
        }
        outcome
    }

    /// Equip an item dragged out of the inventory
    pub fn equip_from_inventory(&mut self, item: Item, from_index: usize) -> EquipOutcome {
        self.equip_item(item, Some(from_index))
    }

    /// Move an equipped item into the first empty inventory slot
    ///
    /// Returns the inventory index used, or `None` if the slot was empty.
    /// Fails without changing anything when the inventory is full.
    pub fn unequip_item(&mut self, slot: EquipmentSlot) -> Result<Option<usize>, LoadoutError> {
        let Some(item) = self.equipped_items.get(slot) else {
            log::debug!("Nothing equipped in {}", slot);
            return Ok(None);
        };

        match self.inventory_items.add_item(item.clone()) {
            Some(index) => {
                self.equipped_items.take(slot);
                Ok(Some(index))
            }
            None => {
                log::warn!("Cannot unequip {}, inventory is full", item.name);
                Err(LoadoutError::InventoryFull {
                    item: item.name.clone(),
                    slot,
                })
            }
        }
    }

    /// Exchange an equipped item with an inventory slot
    ///
    /// The equipped item always lands at `inv_index`. The inventory item is
    /// equipped if it belongs in `slot`; otherwise the slot is left empty and
    /// the inventory item is re-stashed in the first free slot.
    pub fn swap_equipment_and_inventory_item(
        &mut self,
        slot: EquipmentSlot,
        inv_index: usize,
    ) -> EquipOutcome {
        if inv_index >= INVENTORY_SIZE {
            log::warn!("Inventory slot {} out of range", inv_index);
            return EquipOutcome::default();
        }

        let from_equipment = self.equipped_items.get(slot).cloned();
        let from_inventory = self.inventory_items.clear_slot(inv_index);
        self.inventory_items.set_slot(inv_index, from_equipment);

        match from_inventory {
            Some(item) if fits(&item, slot) => self.equip_item(item, Some(inv_index)),
            other => {
                self.equipped_items.take(slot);
                let mut outcome = EquipOutcome::default();
                if let Some(item) = other {
                    log::debug!("{} does not fit {}, returning it to the inventory", item.name, slot);
                    outcome.dropped.extend(self.stash(item));
                }
                outcome
            }
        }
    }

    // Inventory

    /// Put an item in the first empty inventory slot
    pub fn add_item_to_inventory(&mut self, item: Item) -> bool {
        self.inventory_items.add_item(item).is_some()
    }

    /// Overwrite an inventory slot
    pub fn set_inventory_item(&mut self, index: usize, item: Option<Item>) -> bool {
        let placed = self.inventory_items.set_slot(index, item);
        if !placed {
            log::warn!("Inventory slot {} out of range", index);
        }
        placed
    }

    /// Move an inventory item, shifting the items in between
    pub fn move_inventory_item(&mut self, from_index: usize, to_index: usize) -> bool {
        if from_index == to_index {
            return false;
        }
        let moved = self.inventory_items.move_item(from_index, to_index);
        if !moved {
            log::warn!("Cannot move inventory slot {} to {}", from_index, to_index);
        }
        moved
    }

    /// Replace the contents of the rune container at `inventory_index`
    ///
    /// The new contents must have exactly as many entries as the container
    /// has slots.
    pub fn update_rune_pouch(&mut self, inventory_index: usize, runes: Vec<Option<Item>>) -> bool {
        let Some(pouch) = self.inventory_items.get_slot_mut(inventory_index) else {
            log::warn!("No item in inventory slot {}", inventory_index);
            return false;
        };
        match pouch.rune_pouch_slots {
            Some(capacity) if capacity == runes.len() => {
                pouch.stored_runes = Some(runes);
                true
            }
            Some(capacity) => {
                log::warn!(
                    "{} holds {} runes, got {}",
                    pouch.name,
                    capacity,
                    runes.len()
                );
                false
            }
            None => {
                log::warn!("{} is not a rune container", pouch.name);
                false
            }
        }
    }

    /// Place a displaced item in the first empty slot, returning it if none is free
    fn stash(&mut self, item: Item) -> Option<Item> {
        if self.inventory_items.is_full() {
            log::warn!("Inventory full, dropping displaced {}", item.name);
            return Some(item);
        }
        self.inventory_items.add_item(item);
        None
    }

    // Details

    /// Switch spellbook
    pub fn set_spellbook(&mut self, spellbook: Spellbook) {
        self.spellbook = spellbook;
    }

    /// Replace the notes
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Append an empty prayer preset
    pub fn add_prayer_preset(&mut self, name: impl Into<String>) -> PresetId {
        let preset = PrayerPreset::new(name);
        let id = preset.id.clone();
        self.prayer_presets.push(preset);
        id
    }

    /// Merge an update into a prayer preset
    pub fn update_prayer_preset(&mut self, id: &PresetId, update: PresetUpdate) -> bool {
        match self.prayer_presets.iter_mut().find(|p| &p.id == id) {
            Some(preset) => {
                preset.apply(update);
                true
            }
            None => {
                log::warn!("Prayer preset {} not found", id);
                false
            }
        }
    }

    /// Remove a prayer preset
    pub fn remove_prayer_preset(&mut self, id: &PresetId) -> bool {
        let before = self.prayer_presets.len();
        self.prayer_presets.retain(|p| &p.id != id);
        self.prayer_presets.len() != before
    }
}

/// Check if an item belongs in the storage slot `slot`
fn fits(item: &Item, slot: EquipmentSlot) -> bool {
    item.declared_slot()
        .is_some_and(|declared| declared.storage_slot() == slot.storage_slot())
}
