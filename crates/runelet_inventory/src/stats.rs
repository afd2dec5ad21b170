//! Equipment bonus totals

use crate::equipment::EquippedItems;
use crate::item::EquipmentStat;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Summed combat bonuses of a set of equipped items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentBonuses {
    pub attack_stab: i32,
    pub attack_slash: i32,
    pub attack_crush: i32,
    pub attack_magic: i32,
    pub attack_ranged: i32,
    pub defence_stab: i32,
    pub defence_slash: i32,
    pub defence_crush: i32,
    pub defence_magic: i32,
    pub defence_ranged: i32,
    pub melee_strength: i32,
    pub ranged_strength: i32,
    pub magic_damage: i32,
    pub prayer: i32,
}

impl EquipmentBonuses {
    /// Field names paired with values, in display order
    pub fn fields(&self) -> [(&'static str, i32); 14] {
        [
            ("attack_stab", self.attack_stab),
            ("attack_slash", self.attack_slash),
            ("attack_crush", self.attack_crush),
            ("attack_magic", self.attack_magic),
            ("attack_ranged", self.attack_ranged),
            ("defence_stab", self.defence_stab),
            ("defence_slash", self.defence_slash),
            ("defence_crush", self.defence_crush),
            ("defence_magic", self.defence_magic),
            ("defence_ranged", self.defence_ranged),
            ("melee_strength", self.melee_strength),
            ("ranged_strength", self.ranged_strength),
            ("magic_damage", self.magic_damage),
            ("prayer", self.prayer),
        ]
    }
}

impl AddAssign<&EquipmentStat> for EquipmentBonuses {
    fn add_assign(&mut self, stats: &EquipmentStat) {
        self.attack_stab += stats.attack_stab;
        self.attack_slash += stats.attack_slash;
        self.attack_crush += stats.attack_crush;
        self.attack_magic += stats.attack_magic;
        self.attack_ranged += stats.attack_ranged;
        self.defence_stab += stats.defence_stab;
        self.defence_slash += stats.defence_slash;
        self.defence_crush += stats.defence_crush;
        self.defence_magic += stats.defence_magic;
        self.defence_ranged += stats.defence_ranged;
        self.melee_strength += stats.melee_strength;
        self.ranged_strength += stats.ranged_strength;
        self.magic_damage += stats.magic_damage;
        self.prayer += stats.prayer;
    }
}

/// Sum bonuses over every equipped item
///
/// Computed on every call; items without stats contribute nothing.
pub fn total_bonuses(equipped: &EquippedItems) -> EquipmentBonuses {
    let mut totals = EquipmentBonuses::default();
    for (_, item) in equipped.iter() {
        if let Some(stats) = &item.equipment_stats {
            totals += stats;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentSlot;
    use crate::item::Item;

    #[test]
    fn test_empty_totals() {
        assert_eq!(total_bonuses(&EquippedItems::new()), EquipmentBonuses::default());
    }

    #[test]
    fn test_sum_equipped() {
        let mut eq = EquippedItems::new();
        eq.set(
            EquipmentSlot::Weapon,
            Item::equipable(
                4151,
                "Abyssal whip",
                EquipmentStat::new(EquipmentSlot::Weapon)
                    .with_attack([0, 82, 0, 0, 0])
                    .with_melee_strength(82),
            ),
        );
        eq.set(
            EquipmentSlot::Neck,
            Item::equipable(
                6585,
                "Amulet of fury",
                EquipmentStat::new(EquipmentSlot::Neck)
                    .with_attack([10, 10, 10, 10, 10])
                    .with_defence([15, 15, 15, 15, 15])
                    .with_melee_strength(8)
                    .with_prayer(5),
            ),
        );
        eq.set(
            EquipmentSlot::Ammo,
            Item::equipable(
                11212,
                "Dragon arrow",
                EquipmentStat::new(EquipmentSlot::Ammo).with_ranged_strength(60),
            ),
        );
        eq.set(
            EquipmentSlot::Cape,
            Item::equipable(
                21791,
                "Imbued saradomin cape",
                EquipmentStat::new(EquipmentSlot::Cape)
                    .with_attack([0, 0, 0, 15, 0])
                    .with_magic_damage(2),
            ),
        );

        let totals = total_bonuses(&eq);
        assert_eq!(totals.attack_slash, 92);
        assert_eq!(totals.attack_stab, 10);
        assert_eq!(totals.attack_magic, 25);
        assert_eq!(totals.defence_magic, 15);
        assert_eq!(totals.melee_strength, 90);
        assert_eq!(totals.prayer, 5);
        assert_eq!(totals.ranged_strength, 60);
        assert_eq!(totals.magic_damage, 2);
    }

    #[test]
    fn test_negative_bonuses() {
        let mut eq = EquippedItems::new();
        eq.set(
            EquipmentSlot::Body,
            Item::equipable(
                10551,
                "Fighter torso",
                EquipmentStat::new(EquipmentSlot::Body)
                    .with_attack([0, 0, 0, -40, -40])
                    .with_defence([62, 63, 61, -6, 60]),
            ),
        );

        let totals = total_bonuses(&eq);
        assert_eq!(totals.attack_magic, -40);
        assert_eq!(totals.defence_magic, -6);
    }

    #[test]
    fn test_items_without_stats() {
        let mut eq = EquippedItems::new();
        eq.head = Some(Item::new(1, "Odd hat"));

        assert_eq!(total_bonuses(&eq), EquipmentBonuses::default());
    }
}
