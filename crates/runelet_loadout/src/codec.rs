//! Blueprint embed codec
//!
//! Blueprints travel inside guide documents as a JSON string attribute.

use crate::blueprint::Blueprint;
use crate::config::EditorConfig;
use thiserror::Error;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed or mistyped JSON
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// Document decoded but has no loadouts
    #[error("Blueprint has no loadouts")]
    Empty,
}

/// Encode a blueprint as compact JSON
pub fn encode(blueprint: &Blueprint) -> Result<String, CodecError> {
    Ok(serde_json::to_string(blueprint)?)
}

/// Encode a blueprint as indented JSON
pub fn encode_pretty(blueprint: &Blueprint) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(blueprint)?)
}

/// Decode an embedded blueprint
pub fn decode(data: &str) -> Result<Blueprint, CodecError> {
    let blueprint: Blueprint = serde_json::from_str(data)?;
    if blueprint.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(blueprint)
}

/// Decode an embedded blueprint, falling back to a fresh draft
///
/// Never fails: a missing attribute or corrupted data yields
/// `Blueprint::new(config)`.
pub fn decode_or_default(data: Option<&str>, config: &EditorConfig) -> Blueprint {
    let Some(data) = data.filter(|d| !d.trim().is_empty()) else {
        return Blueprint::new(config);
    };
    match decode(data) {
        Ok(blueprint) => blueprint,
        Err(e) => {
            log::error!("Failed to load embedded blueprint: {}", e);
            Blueprint::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runelet_inventory::{EquipmentSlot, EquipmentStat, Item};

    #[test]
    fn test_encode_decode() {
        let config = EditorConfig::default();
        let mut blueprint = Blueprint::new(&config).with_id("bp-1");
        let id = blueprint.first_id().cloned().unwrap();
        let loadout = blueprint.get_mut(&id).unwrap();
        loadout.equip_item(
            Item::equipable(11832, "Bandos chestplate", EquipmentStat::new(EquipmentSlot::Body)),
            None,
        );
        loadout.add_item_to_inventory(Item::new(12791, "Rune pouch"));

        let json = encode(&blueprint).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(decode(&json).unwrap(), blueprint);

        let pretty = encode_pretty(&blueprint).unwrap();
        assert_eq!(decode(&pretty).unwrap(), blueprint);
    }

    #[test]
    fn test_decode_empty_blueprint() {
        let result = decode(r#"{ "title": "Nothing", "loadouts": [] }"#);
        assert!(matches!(result, Err(CodecError::Empty)));
    }

    #[test]
    fn test_decode_wrong_inventory_length() {
        let json = serde_json::json!({
            "title": "Short",
            "loadouts": [{
                "id": "a",
                "name": "A",
                "inventoryItems": [null, null]
            }]
        });
        assert!(matches!(decode(&json.to_string()), Err(CodecError::Json(_))));
    }

    #[test]
    fn test_decode_minimal_loadout() {
        let json = serde_json::json!({
            "id": null,
            "title": "Minimal",
            "loadouts": [{ "id": "a", "name": "A" }]
        });
        let blueprint = decode(&json.to_string()).unwrap();

        let loadout = &blueprint.loadouts()[0];
        assert_eq!(loadout.id().as_str(), "a");
        assert_eq!(loadout.inventory_items().capacity(), 28);
        assert_eq!(loadout.equipped_items().equipped_count(), 0);
    }

    #[test]
    fn test_decode_or_default() {
        let config = EditorConfig::default();

        let missing = decode_or_default(None, &config);
        assert_eq!(missing.title, "Untitled Blueprint");
        assert_eq!(missing.len(), 1);

        let corrupted = decode_or_default(Some("{not json"), &config);
        assert_eq!(corrupted.id, None);
        assert_eq!(corrupted.len(), 1);

        let stored = Blueprint::new(&config).with_id("kept");
        let json = encode(&stored).unwrap();
        assert_eq!(decode_or_default(Some(&json), &config).id.as_deref(), Some("kept"));
    }
}
