//! Paginated item catalog
//!
//! The catalog API returns items in pages wrapped in an envelope of links
//! and pagination metadata. Fetching pages is left to the caller; this
//! module only decodes them and keeps the items seen so far.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Page did not match the expected envelope
    #[error("Malformed catalog page: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Page navigation links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    #[serde(default)]
    pub from: Option<u32>,
    pub last_page: u32,
    #[serde(default)]
    pub path: String,
    pub per_page: u32,
    #[serde(default)]
    pub to: Option<u32>,
    pub total: u32,
}

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<Item>,
    #[serde(default)]
    pub links: PageLinks,
    pub meta: PageMeta,
}

impl CatalogPage {
    /// Decode a page from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Items collected from catalog pages, keyed by UUID
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    /// Items in first-seen order
    items: Vec<Item>,
    /// uuid -> index into `items`
    index: HashMap<String, usize>,
    /// Metadata of the last ingested page
    meta: Option<PageMeta>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a page into the catalog
    ///
    /// Items already present are replaced in place.
    pub fn ingest(&mut self, page: CatalogPage) {
        for item in page.data {
            match self.index.get(&item.uuid) {
                Some(&i) => self.items[i] = item,
                None => {
                    self.index.insert(item.uuid.clone(), self.items.len());
                    self.items.push(item);
                }
            }
        }
        log::debug!(
            "Catalog page {}/{} ingested, {} items known",
            page.meta.current_page,
            page.meta.last_page,
            self.items.len()
        );
        self.meta = Some(page.meta);
    }

    /// Get item by UUID
    pub fn get(&self, uuid: &str) -> Option<&Item> {
        self.index.get(uuid).map(|&i| &self.items[i])
    }

    /// All known items
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of known items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no items are known
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Metadata of the last ingested page
    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    /// Check if more pages can be fetched
    pub fn has_more_pages(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| meta.current_page < meta.last_page)
    }

    /// Page number to fetch next
    pub fn next_page(&self) -> Option<u32> {
        match &self.meta {
            None => Some(1),
            Some(_) if self.has_more_pages() => self.meta.as_ref().map(|m| m.current_page + 1),
            Some(_) => None,
        }
    }

    /// Search known items by name
    ///
    /// Queries shorter than `min_len` (after trimming) match nothing.
    pub fn search(&self, query: &str, min_len: usize) -> Vec<&Item> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < min_len {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect()
    }
}
