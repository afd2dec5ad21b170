//! Container enrichment for rune pouches

use crate::item::Item;

/// Known rune container item ids and their slot capacity
const RUNE_POUCHES: &[(u32, usize)] = &[
    (12791, 3), // Rune pouch
    (24416, 3), // Rune pouch (i)
    (30692, 3), // Rune pouch (castle wars)
    (27086, 3), // Rune pouch (emir's arena)
    (23650, 3), // Rune pouch (lms)
    (27281, 4), // Divine rune pouch
    (27509, 4), // Divine rune pouch (i)
];

/// Get container capacity for an item id
pub fn container_capacity(item_id: u32) -> Option<usize> {
    RUNE_POUCHES
        .iter()
        .find(|(id, _)| *id == item_id)
        .map(|(_, slots)| *slots)
}

/// Attach container metadata to an item before it is stored
///
/// Unknown items pass through untouched. Containers get their capacity and,
/// unless they already carry contents, an empty rune list of that length.
pub fn enrich(item: Option<Item>) -> Option<Item> {
    let mut item = item?;

    if let Some(slots) = container_capacity(item.item_id) {
        log::debug!("Enriching container {} ({} slots)", item.name, slots);
        item.rune_pouch_slots = Some(slots);
        if item.stored_runes.is_none() {
            item.stored_runes = Some(vec![None; slots]);
        }
    }

    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich_none() {
        assert_eq!(enrich(None), None);
    }

    #[test]
    fn test_enrich_rune_pouch() {
        let pouch = enrich(Some(Item::new(12791, "Rune pouch"))).unwrap();

        assert_eq!(pouch.rune_pouch_slots, Some(3));
        assert_eq!(pouch.stored_runes, Some(vec![None, None, None]));
    }

    #[test]
    fn test_enrich_divine_pouch() {
        let pouch = enrich(Some(Item::new(27281, "Divine rune pouch"))).unwrap();

        assert_eq!(pouch.rune_pouch_slots, Some(4));
        assert_eq!(pouch.stored_runes.map(|r| r.len()), Some(4));
    }

    #[test]
    fn test_enrich_keeps_contents() {
        let mut pouch = enrich(Some(Item::new(12791, "Rune pouch"))).unwrap();
        let runes = pouch.stored_runes.as_mut().unwrap();
        runes[0] = Some(Item::new(560, "Death rune").stackable());

        let again = enrich(Some(pouch.clone())).unwrap();
        assert_eq!(again, pouch);
    }

    #[test]
    fn test_enrich_unknown_item() {
        let rope = Item::new(954, "Rope");
        assert_eq!(enrich(Some(rope.clone())), Some(rope));
    }
}
