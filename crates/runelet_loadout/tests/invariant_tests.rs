//! Invariant tests for runelet_loadout
//!
//! These tests verify loadout rules that must hold after every operation

use proptest::prelude::*;
use runelet_inventory::*;
use runelet_loadout::*;

fn weapon(id: u32, name: &str, slot: EquipmentSlot, strength: i32) -> Item {
    Item::equipable(
        id,
        name,
        EquipmentStat::new(slot)
            .with_attack([strength, strength, 0, -2, 0])
            .with_melee_strength(strength),
    )
}

fn sword() -> Item {
    weapon(1277, "Sword", EquipmentSlot::Weapon, 10)
}

fn spear() -> Item {
    weapon(1237, "Spear", EquipmentSlot::TwoHand, 20)
}

fn shield() -> Item {
    Item::equipable(
        1171,
        "Shield",
        EquipmentStat::new(EquipmentSlot::Shield).with_defence([5, 6, 4, -1, 5]),
    )
}

fn shark() -> Item {
    Item::new(385, "Shark")
}

fn two_handed_rule_holds(equipped: &EquippedItems) -> bool {
    !(equipped.has_two_handed() && equipped.is_occupied(EquipmentSlot::Shield))
}

fn summed(equipped: &EquippedItems) -> [i32; 14] {
    let mut sums = [0; 14];
    for (_, item) in equipped.iter() {
        if let Some(s) = &item.equipment_stats {
            let values = [
                s.attack_stab,
                s.attack_slash,
                s.attack_crush,
                s.attack_magic,
                s.attack_ranged,
                s.defence_stab,
                s.defence_slash,
                s.defence_crush,
                s.defence_magic,
                s.defence_ranged,
                s.melee_strength,
                s.ranged_strength,
                s.magic_damage,
                s.prayer,
            ];
            for (sum, value) in sums.iter_mut().zip(values) {
                *sum += value;
            }
        }
    }
    sums
}

const POOL_SIZE: usize = 5;

fn item_pool(index: usize) -> Item {
    match index {
        0 => sword(),
        1 => spear(),
        2 => shield(),
        3 => shark(),
        _ => Item::new(12791, "Rune pouch"),
    }
}

/// Engine operation on the active loadout
#[derive(Debug, Clone)]
enum Op {
    Equip(usize),
    EquipFromInventory(usize),
    Unequip(EquipmentSlot),
    Add(usize),
    Move(usize, usize),
    Swap(EquipmentSlot, usize),
}

fn arb_slot() -> impl Strategy<Value = EquipmentSlot> {
    prop::sample::select(EquipmentSlot::all())
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..POOL_SIZE).prop_map(Op::Equip),
        (0..INVENTORY_SIZE).prop_map(Op::EquipFromInventory),
        arb_slot().prop_map(Op::Unequip),
        (0..POOL_SIZE).prop_map(Op::Add),
        (0..INVENTORY_SIZE, 0..INVENTORY_SIZE).prop_map(|(from, to)| Op::Move(from, to)),
        (arb_slot(), 0..INVENTORY_SIZE).prop_map(|(slot, index)| Op::Swap(slot, index)),
    ]
}

fn apply(editor: &mut BlueprintEditor, op: &Op) {
    match *op {
        Op::Equip(item) => {
            editor.equip_item(item_pool(item), None);
        }
        Op::EquipFromInventory(index) => {
            let item = editor
                .active_inventory_items()
                .and_then(|inv| inv.get_slot(index))
                .cloned();
            if let Some(item) = item {
                editor.equip_from_inventory(item, index);
            }
        }
        Op::Unequip(slot) => {
            let _ = editor.unequip_item(slot);
        }
        Op::Add(item) => {
            editor.add_item_to_inventory(item_pool(item));
        }
        Op::Move(from, to) => {
            editor.move_inventory_item(from, to);
        }
        Op::Swap(slot, index) => {
            editor.swap_equipment_and_inventory_item(slot, index);
        }
    }
}

proptest! {
    /// INVARIANT: Shield is empty whenever the weapon slot holds a two-handed item
    #[test]
    fn invariant_two_handed_excludes_shield(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut editor = BlueprintEditor::default();

        for op in &ops {
            apply(&mut editor, op);
            let equipped = editor.active_equipped_items().unwrap();
            prop_assert!(two_handed_rule_holds(equipped));
            prop_assert!(equipped.is_consistent());
        }
    }

    /// INVARIANT: Bonus totals always equal the sum over currently equipped items
    #[test]
    fn invariant_totals_never_stale(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut editor = BlueprintEditor::default();

        for op in &ops {
            apply(&mut editor, op);
            let expected = summed(editor.active_equipped_items().unwrap());
            let actual: Vec<i32> = editor.total_bonuses().fields().iter().map(|(_, v)| *v).collect();
            prop_assert_eq!(actual, expected.to_vec());
        }
    }

    /// INVARIANT: The inventory always has exactly 28 slots
    #[test]
    fn invariant_inventory_length_fixed(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut editor = BlueprintEditor::default();

        for op in &ops {
            apply(&mut editor, op);
            prop_assert_eq!(editor.active_inventory_items().unwrap().slots().len(), INVENTORY_SIZE);
        }

        let json = encode(editor.blueprint()).unwrap();
        let decoded = decode(&json).unwrap();
        prop_assert_eq!(decoded.loadouts()[0].inventory_items().slots().len(), INVENTORY_SIZE);
    }
}

/// INVARIANT: Inventory moves shift the items in between instead of swapping
#[test]
fn invariant_move_shifts() {
    let mut editor = BlueprintEditor::default();
    for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
        editor.set_inventory_item(i, Some(Item::new(i as u32 + 1, *name)));
    }

    assert!(editor.move_inventory_item(0, 2));

    let names: Vec<_> = editor
        .active_inventory_items()
        .unwrap()
        .slots()
        .iter()
        .take(4)
        .map(|s| s.as_ref().map(|i| i.name.clone()))
        .collect();
    assert_eq!(
        names,
        vec![
            Some("B".to_string()),
            Some("C".to_string()),
            Some("A".to_string()),
            Some("D".to_string())
        ]
    );
}

/// INVARIANT: A blueprint never loses its last loadout
#[test]
fn invariant_last_loadout_kept() {
    let mut editor = BlueprintEditor::default();
    let id = editor.active_id().cloned().unwrap();

    assert_eq!(editor.remove_loadout(&id), Err(BlueprintError::LastLoadout));
    assert_eq!(editor.blueprint().len(), 1);
    assert_eq!(editor.active_id(), Some(&id));
}

/// INVARIANT: The active id always points into the loadout list
#[test]
fn invariant_active_id_valid() {
    let mut editor = BlueprintEditor::default();
    let mut ids = vec![editor.active_id().cloned().unwrap()];
    for _ in 0..4 {
        ids.push(editor.add_loadout(None));
    }

    for id in &ids {
        let _ = editor.remove_loadout(id);
        let active = editor.active_id().unwrap();
        assert!(editor.blueprint().get(active).is_some());
    }
    assert_eq!(editor.blueprint().len(), 1);
}

/// SCENARIO: Equipping a two-handed spear over a one-handed sword
#[test]
fn scenario_spear_replaces_sword() {
    let mut editor = BlueprintEditor::default();
    editor.equip_item(sword(), None);

    let outcome = editor.equip_item(spear(), None);

    assert!(outcome.equipped);
    assert!(outcome.dropped.is_empty());
    let equipped = editor.active_equipped_items().unwrap();
    assert_eq!(equipped.get(EquipmentSlot::Weapon).unwrap().name, "Spear");
    assert!(equipped.get(EquipmentSlot::Shield).is_none());
    assert_eq!(
        editor.active_inventory_items().unwrap().get_slot(0).unwrap().name,
        "Sword"
    );
}

/// SCENARIO: Equipping a shield from slot 5 while holding a spear, inventory otherwise full
#[test]
fn scenario_shield_from_inventory_displaces_spear() {
    let mut editor = BlueprintEditor::default();
    editor.equip_item(spear(), None);
    for i in 0..INVENTORY_SIZE {
        editor.set_inventory_item(i, Some(shark()));
    }
    editor.set_inventory_item(5, Some(shield()));

    let outcome = editor.equip_from_inventory(shield(), 5);

    assert!(outcome.equipped);
    assert!(outcome.dropped.is_empty());
    let equipped = editor.active_equipped_items().unwrap();
    assert_eq!(equipped.get(EquipmentSlot::Shield).unwrap().name, "Shield");
    assert!(equipped.get(EquipmentSlot::Weapon).is_none());
    let inventory = editor.active_inventory_items().unwrap();
    assert_eq!(inventory.get_slot(5).unwrap().name, "Spear");
    assert!(inventory.is_full());
}

/// SCENARIO: Unequipping into a full inventory fails without changing anything
#[test]
fn scenario_unequip_full_inventory() {
    let mut editor = BlueprintEditor::default();
    editor.equip_item(sword(), None);
    for _ in 0..INVENTORY_SIZE {
        editor.add_item_to_inventory(shark());
    }
    let before = editor.active_loadout().cloned().unwrap();

    let result = editor.unequip_item(EquipmentSlot::Weapon);

    assert!(matches!(result, Err(LoadoutError::InventoryFull { .. })));
    assert_eq!(editor.active_loadout(), Some(&before));
}

/// SCENARIO: Rune pouches gain empty rune slots, other items are untouched
#[test]
fn scenario_enrich_rune_pouch() {
    let pouch = enrich(Some(Item::new(12791, "Rune pouch"))).unwrap();
    assert_eq!(pouch.rune_pouch_slots, Some(3));
    assert_eq!(pouch.stored_runes, Some(vec![None, None, None]));

    let rope = Item::new(954, "Rope");
    assert_eq!(enrich(Some(rope.clone())), Some(rope));
    assert_eq!(enrich(None), None);
}

/// SCENARIO: A copied loadout shares nothing with its source
#[test]
fn scenario_add_loadout_no_aliasing() {
    let mut editor = BlueprintEditor::default();
    editor.equip_item(sword(), None);
    editor.add_item_to_inventory(Item::new(12791, "Rune pouch"));
    editor.add_prayer_preset(Some("Melee"));
    let first = editor.active_id().cloned().unwrap();

    let second = editor.add_loadout(None);
    assert_eq!(editor.blueprint().len(), 2);
    assert_eq!(editor.active_id(), Some(&second));

    editor.unequip_item(EquipmentSlot::Weapon).unwrap();
    editor.equip_item(shield(), None);
    editor.update_rune_pouch(0, vec![Some(Item::new(560, "Death rune")), None, None]);
    let preset = editor.active_prayer_presets()[0].id.clone();
    editor.update_prayer_preset(&preset, PresetUpdate::prayers(["piety"]));

    let original = editor.blueprint().get(&first).unwrap();
    let equipped = original.equipped_items();
    assert_eq!(equipped.get(EquipmentSlot::Weapon).unwrap().name, "Sword");
    assert!(equipped.get(EquipmentSlot::Shield).is_none());
    assert_eq!(
        original.inventory_items().get_slot(0).unwrap().stored_runes,
        Some(vec![None, None, None])
    );
    assert!(original.prayer_presets()[0].prayers.is_empty());
}
