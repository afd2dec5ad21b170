//! Catalog item records

use crate::equipment::EquipmentSlot;
use serde::{Deserialize, Serialize};

/// Kind of requirement gating an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    /// Skill level requirement
    Skill,
    /// Quest completion requirement
    Quest,
}

/// Requirement shown alongside an item (informational only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequirement {
    /// Requirement kind
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    /// Skill or quest name
    pub name: String,
    /// Required level (skills only)
    pub level: Option<u32>,
}

impl ItemRequirement {
    /// Create a skill requirement
    pub fn skill(name: impl Into<String>, level: u32) -> Self {
        Self {
            kind: RequirementKind::Skill,
            name: name.into(),
            level: Some(level),
        }
    }
}

/// Boolean catalog flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemFlags {
    pub is_members: bool,
    pub is_tradeable: bool,
    pub is_equipable: bool,
    pub is_stackable: bool,
    pub is_noteable: bool,
}

/// Equipment bonuses of an equipable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStat {
    /// Declared slot
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub attack_stab: i32,
    #[serde(default)]
    pub attack_slash: i32,
    #[serde(default)]
    pub attack_crush: i32,
    #[serde(default)]
    pub attack_magic: i32,
    #[serde(default)]
    pub attack_ranged: i32,
    #[serde(default)]
    pub defence_stab: i32,
    #[serde(default)]
    pub defence_slash: i32,
    #[serde(default)]
    pub defence_crush: i32,
    #[serde(default)]
    pub defence_magic: i32,
    #[serde(default)]
    pub defence_ranged: i32,
    #[serde(default)]
    pub melee_strength: i32,
    #[serde(default)]
    pub ranged_strength: i32,
    #[serde(default)]
    pub magic_damage: i32,
    #[serde(default)]
    pub prayer: i32,
    /// Attack speed in game ticks (weapons only)
    #[serde(default)]
    pub speed: Option<u32>,
}

impl EquipmentStat {
    /// Create zeroed stats for a slot
    pub fn new(slot: EquipmentSlot) -> Self {
        Self {
            slot,
            attack_stab: 0,
            attack_slash: 0,
            attack_crush: 0,
            attack_magic: 0,
            attack_ranged: 0,
            defence_stab: 0,
            defence_slash: 0,
            defence_crush: 0,
            defence_magic: 0,
            defence_ranged: 0,
            melee_strength: 0,
            ranged_strength: 0,
            magic_damage: 0,
            prayer: 0,
            speed: None,
        }
    }

    /// Set attack bonuses (stab, slash, crush, magic, ranged)
    pub fn with_attack(mut self, [stab, slash, crush, magic, ranged]: [i32; 5]) -> Self {
        self.attack_stab = stab;
        self.attack_slash = slash;
        self.attack_crush = crush;
        self.attack_magic = magic;
        self.attack_ranged = ranged;
        self
    }

    /// Set defence bonuses (stab, slash, crush, magic, ranged)
    pub fn with_defence(mut self, [stab, slash, crush, magic, ranged]: [i32; 5]) -> Self {
        self.defence_stab = stab;
        self.defence_slash = slash;
        self.defence_crush = crush;
        self.defence_magic = magic;
        self.defence_ranged = ranged;
        self
    }

    /// Set melee strength
    pub fn with_melee_strength(mut self, value: i32) -> Self {
        self.melee_strength = value;
        self
    }

    /// Set ranged strength
    pub fn with_ranged_strength(mut self, value: i32) -> Self {
        self.ranged_strength = value;
        self
    }

    /// Set magic damage
    pub fn with_magic_damage(mut self, value: i32) -> Self {
        self.magic_damage = value;
        self
    }

    /// Set prayer bonus
    pub fn with_prayer(mut self, value: i32) -> Self {
        self.prayer = value;
        self
    }
}

/// Immutable catalog item record
///
/// Items placed into a loadout are value copies of the catalog record.
/// `rune_pouch_slots` and `stored_runes` are only present once the item
/// has been run through [`crate::container::enrich`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog UUID
    pub uuid: String,
    /// Numeric game item id
    pub item_id: u32,
    /// Display name
    pub name: String,
    /// Examine text
    #[serde(default)]
    pub examine: String,
    /// Icon URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Catalog flags
    #[serde(default)]
    pub flags: ItemFlags,
    /// Wiki page URL
    #[serde(default)]
    pub wiki_url: String,
    /// Equipment bonuses (present iff equipable)
    #[serde(default)]
    pub equipment_stats: Option<EquipmentStat>,
    /// Skill/quest requirements
    #[serde(default)]
    pub requirements: Vec<ItemRequirement>,
    /// Container capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rune_pouch_slots: Option<usize>,
    /// Container contents, one entry per capacity slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_runes: Option<Vec<Option<Item>>>,
}

impl Item {
    /// Create a plain (non-equipable) item
    pub fn new(item_id: u32, name: impl Into<String>) -> Self {
        Self {
            uuid: format!("item-{item_id}"),
            item_id,
            name: name.into(),
            examine: String::new(),
            image_url: None,
            flags: ItemFlags {
                is_tradeable: true,
                ..ItemFlags::default()
            },
            wiki_url: String::new(),
            equipment_stats: None,
            requirements: Vec::new(),
            rune_pouch_slots: None,
            stored_runes: None,
        }
    }

    /// Create an equipable item with the given stats
    pub fn equipable(item_id: u32, name: impl Into<String>, stats: EquipmentStat) -> Self {
        let mut item = Self::new(item_id, name);
        item.flags.is_equipable = true;
        item.equipment_stats = Some(stats);
        item
    }

    /// Mark as stackable
    pub fn stackable(mut self) -> Self {
        self.flags.is_stackable = true;
        self
    }

    /// Declared equipment slot, if equipable
    pub fn declared_slot(&self) -> Option<EquipmentSlot> {
        self.equipment_stats.as_ref().map(|stats| stats.slot)
    }

    /// Check if the item declares the two-handed slot
    pub fn is_two_handed(&self) -> bool {
        self.declared_slot() == Some(EquipmentSlot::TwoHand)
    }
}
