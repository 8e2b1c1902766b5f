//! Loadout persistence.
//!
//! The `LoadoutRepository` trait is the seam to whatever stores saved
//! loadouts. `InMemoryLoadouts` is a simple implementation that can be
//! loaded from and written to JSON. Deleting goes through
//! [`confirm_and_delete`], which asks before touching the store.

use crate::error::LoadoutError;
use crate::loadout::{Loadout, LoadoutId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Storage for saved loadouts.
pub trait LoadoutRepository {
    /// All saved loadouts, in storage order.
    fn all(&self) -> Vec<Loadout>;

    fn get(&self, id: &LoadoutId) -> Option<Loadout>;

    /// Insert or replace a loadout with the same id.
    fn save(&mut self, loadout: Loadout);

    /// Remove a loadout, returning it.
    ///
    /// # Errors
    ///
    /// `UnknownLoadout` when no loadout has this id.
    fn delete(&mut self, id: &LoadoutId) -> Result<Loadout, LoadoutError>;
}

/// Loadouts held in memory.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{InMemoryLoadouts, Loadout, LoadoutRepository};
///
/// let mut store = InMemoryLoadouts::new();
/// let loadout = Loadout::new("Trials", vec![], vec![]);
/// let id = loadout.id.clone();
/// store.save(loadout);
///
/// assert_eq!(store.get(&id).unwrap().name, "Trials");
/// store.delete(&id).unwrap();
/// assert!(store.get(&id).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryLoadouts {
    loadouts: Vec<Loadout>,
}

impl InMemoryLoadouts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, LoadoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LoadoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.loadouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loadouts.is_empty()
    }
}

impl LoadoutRepository for InMemoryLoadouts {
    fn all(&self) -> Vec<Loadout> {
        self.loadouts.clone()
    }

    fn get(&self, id: &LoadoutId) -> Option<Loadout> {
        self.loadouts.iter().find(|l| &l.id == id).cloned()
    }

    fn save(&mut self, loadout: Loadout) {
        match self.loadouts.iter_mut().find(|l| l.id == loadout.id) {
            Some(existing) => *existing = loadout,
            None => self.loadouts.push(loadout),
        }
    }

    fn delete(&mut self, id: &LoadoutId) -> Result<Loadout, LoadoutError> {
        let index = self
            .loadouts
            .iter()
            .position(|l| &l.id == id)
            .ok_or_else(|| LoadoutError::UnknownLoadout(id.clone()))?;
        Ok(self.loadouts.remove(index))
    }
}

/// Prompt shown before deleting `loadout`.
pub fn delete_prompt(loadout: &Loadout) -> String {
    format!("Delete loadout \"{}\"?", loadout.name)
}

/// Delete a saved loadout after the user confirms.
///
/// `confirm` receives the prompt text. Returns `Ok(true)` if the loadout was
/// deleted and `Ok(false)` if the user cancelled, in which case the
/// repository is left untouched.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{confirm_and_delete, InMemoryLoadouts, Loadout, LoadoutRepository};
///
/// let mut store = InMemoryLoadouts::new();
/// let loadout = Loadout::new("Gambit", vec![], vec![]);
/// let id = loadout.id.clone();
/// store.save(loadout);
///
/// assert!(!confirm_and_delete(&mut store, &id, |_| false).unwrap());
/// assert_eq!(store.len(), 1);
///
/// assert!(confirm_and_delete(&mut store, &id, |prompt| prompt.contains("Gambit")).unwrap());
/// assert!(store.is_empty());
/// ```
pub fn confirm_and_delete<R, F>(
    repository: &mut R,
    id: &LoadoutId,
    confirm: F,
) -> Result<bool, LoadoutError>
where
    R: LoadoutRepository + ?Sized,
    F: FnOnce(&str) -> bool,
{
    let loadout = repository
        .get(id)
        .ok_or_else(|| LoadoutError::UnknownLoadout(id.clone()))?;

    if !confirm(&delete_prompt(&loadout)) {
        debug!(loadout = %id, "Loadout delete cancelled");
        return Ok(false);
    }

    repository.delete(id)?;
    debug!(loadout = %id, name = %loadout.name, "Loadout deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> (InMemoryLoadouts, Vec<LoadoutId>) {
        let mut store = InMemoryLoadouts::new();
        let mut ids = Vec::new();
        for name in names {
            let loadout = Loadout::new(*name, vec![], vec![]);
            ids.push(loadout.id.clone());
            store.save(loadout);
        }
        (store, ids)
    }

    #[test]
    fn test_save_replaces_same_id() {
        let (mut store, ids) = store_with(&["A"]);
        let mut renamed = store.get(&ids[0]).unwrap();
        renamed.name = "B".to_string();
        store.save(renamed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&ids[0]).unwrap().name, "B");
    }

    #[test]
    fn test_delete_unknown() {
        let (mut store, _) = store_with(&["A"]);
        let err = store.delete(&LoadoutId::from("nope")).unwrap_err();
        assert!(matches!(err, LoadoutError::UnknownLoadout(_)));
    }

    #[test]
    fn test_cancel_leaves_state_unchanged() {
        let (mut store, ids) = store_with(&["A", "B"]);
        let before = store.clone();
        let mut prompts = Vec::new();
        let deleted = confirm_and_delete(&mut store, &ids[1], |prompt| {
            prompts.push(prompt.to_string());
            false
        })
        .unwrap();
        assert!(!deleted);
        assert_eq!(store, before);
        assert_eq!(prompts, ["Delete loadout \"B\"?"]);
    }

    #[test]
    fn test_confirm_deletes_only_target() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        assert!(confirm_and_delete(&mut store, &ids[1], |_| true).unwrap());
        let names: Vec<String> = store.all().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_confirm_unknown_never_prompts() {
        let (mut store, _) = store_with(&["A"]);
        let mut asked = false;
        let result = confirm_and_delete(&mut store, &LoadoutId::from("x"), |_| {
            asked = true;
            true
        });
        assert!(result.is_err());
        assert!(!asked);
    }

    #[test]
    fn test_json_round_trip() {
        let (store, ids) = store_with(&["A", "B"]);
        let json = store.to_json().unwrap();
        let back = InMemoryLoadouts::from_json(&json).unwrap();
        assert_eq!(back.get(&ids[1]).unwrap().name, "B");
        assert_eq!(back, store);
    }
}
