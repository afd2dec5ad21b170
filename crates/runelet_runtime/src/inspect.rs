//! Headless inspection of blueprint and catalog documents

use runelet_inventory::{CatalogError, CatalogPage, EquipmentBonuses, ItemCatalog};
use runelet_loadout::{codec, Blueprint, CodecError, Loadout};
use std::fmt::Write;
use thiserror::Error;

/// Inspection errors
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid blueprint: {0}")]
    Blueprint(#[from] CodecError),
    #[error("Invalid catalog page: {0}")]
    Catalog(#[from] CatalogError),
}

/// A parsed input file
#[derive(Debug)]
pub enum Document {
    Blueprint(Blueprint),
    Catalog(CatalogPage),
}

impl Document {
    /// Parse a blueprint, or a catalog page if the document has a `data` array
    pub fn parse(text: &str) -> Result<Self, InspectError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.get("data").is_some_and(|d| d.is_array()) {
            log::debug!("Input looks like a catalog page");
            Ok(Self::Catalog(CatalogPage::from_json(text)?))
        } else {
            Ok(Self::Blueprint(codec::decode(text)?))
        }
    }
}

/// Render a blueprint as text
pub fn blueprint_summary(blueprint: &Blueprint) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Blueprint: {}", blueprint.title);
    if let Some(id) = &blueprint.id {
        let _ = writeln!(out, "  Id: {}", id);
    }
    if !blueprint.description.is_empty() {
        let _ = writeln!(out, "  {}", blueprint.description);
    }
    for loadout in blueprint.loadouts() {
        out.push_str(&loadout_summary(loadout));
    }
    out
}

fn loadout_summary(loadout: &Loadout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nLoadout: {} ({})", loadout.name(), loadout.spellbook());

    let equipped = loadout.equipped_items();
    if equipped.equipped_count() == 0 {
        let _ = writeln!(out, "  Equipment: none");
    } else {
        let _ = writeln!(out, "  Equipment:");
        for (slot, item) in equipped.iter() {
            let _ = writeln!(out, "    {:<7} {}", slot, item.name);
        }
    }

    let inventory = loadout.inventory_items();
    let _ = writeln!(
        out,
        "  Inventory: {}/{} slots used",
        inventory.used_slots(),
        inventory.capacity()
    );
    if !loadout.prayer_presets().is_empty() {
        let _ = writeln!(out, "  Prayer presets: {}", loadout.prayer_presets().len());
    }
    out.push_str(&bonus_summary(&loadout.total_bonuses()));
    out
}

fn bonus_summary(bonuses: &EquipmentBonuses) -> String {
    let mut out = String::from("  Bonuses:\n");
    for (name, value) in bonuses.fields() {
        let _ = writeln!(out, "    {:<16} {:+}", name, value);
    }
    out
}

/// Render a catalog as text, with search results when a query is given
pub fn catalog_summary(catalog: &ItemCatalog, query: Option<&str>, min_len: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Catalog: {} items", catalog.len());
    if let Some(meta) = catalog.meta() {
        let _ = writeln!(out, "  Page {} of {}", meta.current_page, meta.last_page);
    }
    match catalog.next_page() {
        Some(page) => {
            let _ = writeln!(out, "  Next page: {}", page);
        }
        None => {
            let _ = writeln!(out, "  No more pages");
        }
    }

    if let Some(query) = query {
        let results = catalog.search(query, min_len);
        let _ = writeln!(out, "\nSearch \"{}\": {} matches", query, results.len());
        for item in results {
            let _ = writeln!(out, "  {:>6} {}", item.item_id, item.name);
        }
    }
    out
}
