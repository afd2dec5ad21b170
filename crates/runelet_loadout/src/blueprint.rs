//! Blueprints: an ordered, never empty list of loadouts

use crate::config::EditorConfig;
use crate::id::LoadoutId;
use crate::loadout::Loadout;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Blueprint errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlueprintError {
    /// A blueprint must keep at least one loadout
    #[error("Cannot remove the last loadout")]
    LastLoadout,
    /// No loadout with this id
    #[error("Loadout not found: {0}")]
    LoadoutNotFound(LoadoutId),
}

/// Navigation entry for a loadout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadoutTab {
    pub id: LoadoutId,
    pub label: String,
}

/// A character blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Saved id, `None` for an unsaved draft
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    loadouts: Vec<Loadout>,
}

impl Blueprint {
    /// Create a draft with a single empty loadout
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            id: None,
            title: config.blueprint_title.clone(),
            description: String::new(),
            loadouts: vec![Loadout::new(config.default_loadout_name.clone())],
        }
    }

    /// Set the saved id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn loadouts(&self) -> &[Loadout] {
        &self.loadouts
    }

    pub fn len(&self) -> usize {
        self.loadouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loadouts.is_empty()
    }

    /// Position of a loadout in the list
    pub fn position(&self, id: &LoadoutId) -> Option<usize> {
        self.loadouts.iter().position(|l| l.id() == id)
    }

    pub fn get(&self, id: &LoadoutId) -> Option<&Loadout> {
        self.loadouts.iter().find(|l| l.id() == id)
    }

    pub fn get_mut(&mut self, id: &LoadoutId) -> Option<&mut Loadout> {
        self.loadouts.iter_mut().find(|l| l.id() == id)
    }

    /// Id of the first loadout
    pub fn first_id(&self) -> Option<&LoadoutId> {
        self.loadouts.first().map(Loadout::id)
    }

    /// Insert a loadout at `index`, appending if past the end
    pub fn insert(&mut self, index: usize, loadout: Loadout) {
        let index = index.min(self.loadouts.len());
        self.loadouts.insert(index, loadout);
    }

    /// Append a loadout
    pub fn push(&mut self, loadout: Loadout) {
        self.loadouts.push(loadout);
    }

    /// Remove a loadout, refusing to remove the last one
    pub fn remove_loadout(&mut self, id: &LoadoutId) -> Result<Loadout, BlueprintError> {
        let index = self
            .position(id)
            .ok_or_else(|| BlueprintError::LoadoutNotFound(id.clone()))?;
        if self.loadouts.len() <= 1 {
            return Err(BlueprintError::LastLoadout);
        }
        Ok(self.loadouts.remove(index))
    }

    /// Rename a loadout, ignoring names that are blank after trimming
    pub fn rename_loadout(&mut self, id: &LoadoutId, name: &str) -> bool {
        match self.get_mut(id) {
            Some(loadout) => loadout.rename(name),
            None => {
                log::warn!("Cannot rename unknown loadout {}", id);
                false
            }
        }
    }

    /// Replace the whole loadout list
    ///
    /// An empty list is refused.
    pub fn replace_loadouts(&mut self, loadouts: Vec<Loadout>) -> bool {
        if loadouts.is_empty() {
            log::warn!("Refusing to replace loadouts with an empty list");
            return false;
        }
        self.loadouts = loadouts;
        true
    }

    /// (id, name) pairs in list order
    pub fn tabs(&self) -> Vec<LoadoutTab> {
        self.loadouts
            .iter()
            .map(|l| LoadoutTab {
                id: l.id().clone(),
                label: l.name().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blueprint() {
        let blueprint = Blueprint::new(&EditorConfig::default());

        assert_eq!(blueprint.id, None);
        assert_eq!(blueprint.title, "Untitled Blueprint");
        assert_eq!(blueprint.len(), 1);
        assert_eq!(blueprint.loadouts()[0].name(), "Default Loadout");
    }

    #[test]
    fn test_remove_last_refused() {
        let mut blueprint = Blueprint::new(&EditorConfig::default());
        let id = blueprint.first_id().cloned().unwrap();

        assert_eq!(blueprint.remove_loadout(&id), Err(BlueprintError::LastLoadout));
        assert_eq!(blueprint.len(), 1);
    }

    #[test]
    fn test_remove_unknown() {
        let mut blueprint = Blueprint::new(&EditorConfig::default());
        blueprint.push(Loadout::new("Second"));

        let missing = LoadoutId::new("missing");
        assert_eq!(
            blueprint.remove_loadout(&missing),
            Err(BlueprintError::LoadoutNotFound(missing))
        );
        assert_eq!(blueprint.len(), 2);
    }

    #[test]
    fn test_insert_and_tabs() {
        let mut blueprint = Blueprint::new(&EditorConfig::default());
        blueprint.push(Loadout::new("Last"));
        blueprint.insert(1, Loadout::new("Middle"));
        blueprint.insert(99, Loadout::new("End"));

        let labels: Vec<_> = blueprint.tabs().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Default Loadout", "Middle", "Last", "End"]);
    }

    #[test]
    fn test_replace_loadouts() {
        let mut blueprint = Blueprint::new(&EditorConfig::default());

        assert!(!blueprint.replace_loadouts(Vec::new()));
        assert_eq!(blueprint.len(), 1);

        assert!(blueprint.replace_loadouts(vec![Loadout::new("A"), Loadout::new("B")]));
        assert_eq!(blueprint.len(), 2);
    }

    #[test]
    fn test_rename_loadout() {
        let mut blueprint = Blueprint::new(&EditorConfig::default());
        let id = blueprint.first_id().cloned().unwrap();

        assert!(blueprint.rename_loadout(&id, " Bandos "));
        assert_eq!(blueprint.loadouts()[0].name(), "Bandos");
        assert!(!blueprint.rename_loadout(&LoadoutId::new("missing"), "x"));
    }
}
