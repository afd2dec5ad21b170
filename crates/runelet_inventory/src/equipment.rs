//! Equipment slots and the two-handed/shield exclusivity rule

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    /// Helmets, hats
    Head,
    /// Capes
    Cape,
    /// Amulets, necklaces
    Neck,
    /// Arrows, bolts, blessings
    Ammo,
    /// One-handed weapon (also stores two-handed weapons)
    Weapon,
    /// Body armour
    Body,
    /// Shields, defenders, books
    Shield,
    /// Leg armour
    Legs,
    /// Gloves
    Hands,
    /// Boots
    Feet,
    /// Rings
    Ring,
    /// Two-handed weapon (declared slot only, stored under `Weapon`)
    #[serde(rename = "2h")]
    TwoHand,
}

impl EquipmentSlot {
    /// The eleven physical storage slots, in display order
    pub const STORAGE: [EquipmentSlot; 11] = [
        Self::Head,
        Self::Cape,
        Self::Neck,
        Self::Ammo,
        Self::Weapon,
        Self::Body,
        Self::Shield,
        Self::Legs,
        Self::Hands,
        Self::Feet,
        Self::Ring,
    ];

    /// Get all declared slots, including the virtual two-handed slot
    pub fn all() -> Vec<Self> {
        let mut slots = Self::STORAGE.to_vec();
        slots.push(Self::TwoHand);
        slots
    }

    /// Storage key used for this slot (`TwoHand` maps to `Weapon`)
    pub fn storage_slot(self) -> Self {
        match self {
            Self::TwoHand => Self::Weapon,
            other => other,
        }
    }

    /// Wire name of the slot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Cape => "cape",
            Self::Neck => "neck",
            Self::Ammo => "ammo",
            Self::Weapon => "weapon",
            Self::Body => "body",
            Self::Shield => "shield",
            Self::Legs => "legs",
            Self::Hands => "hands",
            Self::Feet => "feet",
            Self::Ring => "ring",
            Self::TwoHand => "2h",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for EquipmentSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|slot| slot.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown equipment slot: {}", s))
    }
}

/// Equipped items, one optional item per storage slot
///
/// There is no `2h` key: two-handed weapons live under `weapon`, so
/// lookups through [`EquipmentSlot::TwoHand`] resolve to the weapon slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquippedItems {
    pub head: Option<Item>,
    pub cape: Option<Item>,
    pub neck: Option<Item>,
    pub ammo: Option<Item>,
    pub weapon: Option<Item>,
    pub body: Option<Item>,
    pub shield: Option<Item>,
    pub legs: Option<Item>,
    pub hands: Option<Item>,
    pub feet: Option<Item>,
    pub ring: Option<Item>,
}

impl EquippedItems {
    /// Create an empty equipment map
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot.storage_slot() {
            EquipmentSlot::Head => &self.head,
            EquipmentSlot::Cape => &self.cape,
            EquipmentSlot::Neck => &self.neck,
            EquipmentSlot::Ammo => &self.ammo,
            EquipmentSlot::Weapon | EquipmentSlot::TwoHand => &self.weapon,
            EquipmentSlot::Body => &self.body,
            EquipmentSlot::Shield => &self.shield,
            EquipmentSlot::Legs => &self.legs,
            EquipmentSlot::Hands => &self.hands,
            EquipmentSlot::Feet => &self.feet,
            EquipmentSlot::Ring => &self.ring,
        }
    }

    fn entry_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot.storage_slot() {
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Cape => &mut self.cape,
            EquipmentSlot::Neck => &mut self.neck,
            EquipmentSlot::Ammo => &mut self.ammo,
            EquipmentSlot::Weapon | EquipmentSlot::TwoHand => &mut self.weapon,
            EquipmentSlot::Body => &mut self.body,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Legs => &mut self.legs,
            EquipmentSlot::Hands => &mut self.hands,
            EquipmentSlot::Feet => &mut self.feet,
            EquipmentSlot::Ring => &mut self.ring,
        }
    }

    /// Get equipped item in slot
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.entry(slot).as_ref()
    }

    /// Check if slot is occupied
    pub fn is_occupied(&self, slot: EquipmentSlot) -> bool {
        self.entry(slot).is_some()
    }

    /// Store an item in a slot, returning the previous occupant
    pub fn set(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.entry_mut(slot).replace(item)
    }

    /// Remove and return the item in a slot
    pub fn take(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.entry_mut(slot).take()
    }

    /// Check if the weapon slot holds a two-handed weapon
    pub fn has_two_handed(&self) -> bool {
        self.weapon.as_ref().is_some_and(Item::is_two_handed)
    }

    /// Iterate over occupied storage slots
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        EquipmentSlot::STORAGE
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }

    /// Get count of equipped items
    pub fn equipped_count(&self) -> usize {
        self.iter().count()
    }

    /// Check the exclusivity invariant: no shield alongside a two-handed weapon
    pub fn is_consistent(&self) -> bool {
        !(self.has_two_handed() && self.shield.is_some())
    }
}

/// Storage slot a newly equipped item is placed into
///
/// The occupant of this slot before the equip is the *primary* displaced item.
pub fn natural_slot(declared: EquipmentSlot) -> EquipmentSlot {
    declared.storage_slot()
}

/// Storage slots that must be cleared before equipping an item declaring `declared`
///
/// - `2h` clears both `weapon` and `shield`
/// - `shield` clears `shield` and a two-handed weapon (but not a one-handed one)
/// - `weapon` clears `weapon` only
/// - any other slot clears itself
///
/// Only occupied slots are returned. The natural slot, when occupied, is
/// always listed first.
pub fn slots_to_clear(declared: EquipmentSlot, equipped: &EquippedItems) -> Vec<EquipmentSlot> {
    let candidates: Vec<EquipmentSlot> = match declared {
        EquipmentSlot::TwoHand => vec![EquipmentSlot::Weapon, EquipmentSlot::Shield],
        EquipmentSlot::Shield if equipped.has_two_handed() => {
            vec![EquipmentSlot::Shield, EquipmentSlot::Weapon]
        }
        other => vec![other],
    };

    candidates
        .into_iter()
        .filter(|slot| equipped.is_occupied(*slot))
        .collect()
}
