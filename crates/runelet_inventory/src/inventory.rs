//! Fixed-capacity inventory

use crate::container::enrich;
use crate::item::Item;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of inventory slots
pub const INVENTORY_SIZE: usize = 28;

/// Inventory errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Serialized inventory had the wrong number of slots
    #[error("Inventory must have {INVENTORY_SIZE} slots, found {0}")]
    InvalidLength(usize),
}

/// Inventory of exactly [`INVENTORY_SIZE`] slots
///
/// Empty slots are explicit `None` placeholders; no operation changes the
/// number of slots. Every item entering the inventory is enriched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Item>>", into = "Vec<Option<Item>>")]
pub struct Inventory {
    /// Inventory slots (None = empty)
    slots: Vec<Option<Item>>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self {
            slots: vec![None; INVENTORY_SIZE],
        }
    }

    /// Get inventory capacity
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get number of used slots
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Get number of free slots
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.used_slots()
    }

    /// Check if inventory is full
    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    /// Check if inventory is empty
    pub fn is_empty(&self) -> bool {
        self.used_slots() == 0
    }

    /// Get slot contents
    pub fn get_slot(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot)?.as_ref()
    }

    /// Get mutable slot contents
    pub fn get_slot_mut(&mut self, slot: usize) -> Option<&mut Item> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// All slots in order, including empty ones
    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    /// Find first empty slot
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Add item to the first empty slot
    /// Returns the slot used, or None if the inventory is full
    pub fn add_item(&mut self, item: Item) -> Option<usize> {
        let slot = self.find_empty_slot()?;
        self.slots[slot] = enrich(Some(item));
        Some(slot)
    }

    /// Overwrite a slot
    /// Returns false if the slot is out of range
    pub fn set_slot(&mut self, slot: usize, item: Option<Item>) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = enrich(item);
                true
            }
            None => false,
        }
    }

    /// Clear a slot
    pub fn clear_slot(&mut self, slot: usize) -> Option<Item> {
        self.slots.get_mut(slot)?.take()
    }

    /// Move the item at `from` to `to`, shifting the slots in between
    ///
    /// This is a splice, not a swap: every slot between the two positions
    /// shifts one step toward the vacated position.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.capacity() || to >= self.capacity() || from == to {
            return false;
        }

        let moved = self.slots.remove(from);
        self.slots.insert(to, moved);
        true
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Option<Item>>> for Inventory {
    type Error = InventoryError;

    fn try_from(slots: Vec<Option<Item>>) -> Result<Self, Self::Error> {
        if slots.len() != INVENTORY_SIZE {
            return Err(InventoryError::InvalidLength(slots.len()));
        }
        Ok(Self { slots })
    }
}

impl From<Inventory> for Vec<Option<Item>> {
    fn from(inventory: Inventory) -> Self {
        inventory.slots
    }
}
