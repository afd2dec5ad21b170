//! Drag and drop between search results, equipment and inventory

use runelet_inventory::{EquipmentSlot, Item};
use serde::{Deserialize, Serialize};

/// Where a dragged item was picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragSource {
    /// An inventory slot
    Inventory { index: usize },
    /// Item search results
    Search,
    /// An equipment slot
    Equipment { slot: EquipmentSlot },
}

/// Item in flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub source: DragSource,
    pub item: Item,
}

impl DragPayload {
    /// Item picked from search results
    pub fn from_search(item: Item) -> Self {
        Self {
            source: DragSource::Search,
            item,
        }
    }

    /// Item picked from an inventory slot
    pub fn from_inventory(index: usize, item: Item) -> Self {
        Self {
            source: DragSource::Inventory { index },
            item,
        }
    }

    /// Item picked from an equipment slot
    pub fn from_equipment(slot: EquipmentSlot, item: Item) -> Self {
        Self {
            source: DragSource::Equipment { slot },
            item,
        }
    }
}

/// Where a dragged item was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Equipment(EquipmentSlot),
    Inventory(usize),
}

/// Engine operation a drop resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// Equip, sending the replaced item to the source slot
    EquipFromInventory { from_index: usize },
    /// Equip, routing replaced items first-fit
    Equip,
    /// Reorder the inventory
    MoveInventory { from_index: usize, to_index: usize },
    /// Place a copy of the item at an inventory index
    SetInventory { index: usize },
    /// Exchange an equipped item with an inventory slot
    SwapEquipment { slot: EquipmentSlot, index: usize },
    /// Nothing to do
    Ignore,
}

impl DropAction {
    /// Resolve a drop
    pub fn resolve(source: DragSource, target: DropTarget) -> Self {
        match (source, target) {
            (DragSource::Inventory { index }, DropTarget::Equipment(_)) => {
                Self::EquipFromInventory { from_index: index }
            }
            (DragSource::Inventory { index }, DropTarget::Inventory(to_index)) => {
                Self::MoveInventory {
                    from_index: index,
                    to_index,
                }
            }
            (DragSource::Search, DropTarget::Equipment(_)) => Self::Equip,
            (DragSource::Search, DropTarget::Inventory(index)) => Self::SetInventory { index },
            (DragSource::Equipment { .. }, DropTarget::Equipment(_)) => Self::Ignore,
            (DragSource::Equipment { slot }, DropTarget::Inventory(index)) => {
                Self::SwapEquipment { slot, index }
            }
        }
    }
}

/// What happened when a payload was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropReport {
    pub action: DropAction,
    /// Whether the engine accepted the operation
    pub applied: bool,
    /// Displaced items lost to a full inventory
    pub dropped: Vec<Item>,
}

impl DropReport {
    pub(crate) fn ignored() -> Self {
        Self {
            action: DropAction::Ignore,
            applied: false,
            dropped: Vec::new(),
        }
    }
}
