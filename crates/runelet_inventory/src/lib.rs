//! Runelet Inventory - Items, Equipment and Inventory
//!
//! This crate provides the item model that loadouts are built from.
//!
//! # Features
//!
//! - Catalog item records with equipment bonuses
//! - Rune container enrichment
//! - Eleven storage slots with two-handed/shield exclusivity
//! - Fixed 28-slot inventory
//! - Equipment bonus totals
//! - Paginated catalog ingestion
//!
//! # Example
//!
//! ```ignore
//! use runelet_inventory::prelude::*;
//!
//! let whip = Item::equipable(
//!     4151,
//!     "Abyssal whip",
//!     EquipmentStat::new(EquipmentSlot::Weapon).with_attack([0, 82, 0, 0, 0]),
//! );
//!
//! let mut inventory = Inventory::new();
//! inventory.add_item(whip);
//! ```

pub mod catalog;
pub mod container;
pub mod equipment;
pub mod inventory;
pub mod item;
pub mod stats;

pub mod prelude {
    pub use crate::catalog::{CatalogError, CatalogPage, ItemCatalog, PageLinks, PageMeta};
    pub use crate::container::{container_capacity, enrich};
    pub use crate::equipment::{natural_slot, slots_to_clear, EquipmentSlot, EquippedItems};
    pub use crate::inventory::{Inventory, InventoryError, INVENTORY_SIZE};
    pub use crate::item::{EquipmentStat, Item, ItemFlags, ItemRequirement, RequirementKind};
    pub use crate::stats::{total_bonuses, EquipmentBonuses};
}

pub use prelude::*;
