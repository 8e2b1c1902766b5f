//! Loadouts and loadout page assembly.
//!
//! A loadout is a named list of item references plus mod choices. This
//! module builds the ad-hoc loadouts shown next to the saved ones (the one
//! made from currently equipped gear), filters saved loadouts to a
//! character's class and orders everything for the page.

use crate::catalog::BucketCatalog;
use crate::constraints::OptimizerParams;
use crate::item::{ClassType, Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Name given to the loadout built from equipped items.
pub const FROM_EQUIPPED_NAME: &str = "From Equipped";

/// Identifier of a loadout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadoutId(String);

impl LoadoutId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoadoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LoadoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for LoadoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to an item inside a loadout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadoutItem {
    pub id: ItemId,
    pub hash: u32,
    /// Whether applying the loadout equips the item (otherwise it is just moved).
    #[serde(default)]
    pub equipped: bool,
}

impl LoadoutItem {
    pub fn from_item(item: &Item, equipped: bool) -> Self {
        Self {
            id: item.id.clone(),
            hash: item.hash,
            equipped,
        }
    }
}

/// A named collection of item references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub id: LoadoutId,
    pub name: String,
    #[serde(default)]
    pub class_type: ClassType,
    #[serde(default)]
    pub items: Vec<LoadoutItem>,
    /// Armor mod hashes to apply.
    #[serde(default)]
    pub mods: Vec<u32>,
    /// Optimizer settings the loadout was created with.
    #[serde(default)]
    pub parameters: Option<OptimizerParams>,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub last_updated_at: Option<i64>,
}

impl Loadout {
    /// A new unsaved loadout for any class.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::{ClassType, Loadout};
    ///
    /// let a = Loadout::new("Raid", vec![], vec![]);
    /// let b = Loadout::new("Raid", vec![], vec![]);
    /// assert_ne!(a.id, b.id);
    /// assert_eq!(a.class_type, ClassType::Unknown);
    /// ```
    pub fn new(name: impl Into<String>, items: Vec<LoadoutItem>, mods: Vec<u32>) -> Self {
        Self {
            id: LoadoutId::generate(),
            name: name.into(),
            class_type: ClassType::Unknown,
            items,
            mods,
            parameters: None,
            last_updated_at: None,
        }
    }

    /// Loadout made of everything `character` has equipped in an eligible bucket.
    pub fn from_equipped(
        character: &Character,
        catalog: &BucketCatalog,
        name: impl Into<String>,
    ) -> Self {
        let equipped: Vec<&Item> = character
            .items
            .iter()
            .filter(|item| item.equipped && catalog.is_from_equipped_type(&item.bucket.bucket_type))
            .collect();
        let items = equipped
            .iter()
            .map(|item| LoadoutItem::from_item(item, true))
            .collect();
        let mods = equipped
            .iter()
            .flat_map(|item| item.mods.iter().copied())
            .collect();

        Self {
            class_type: character.class_type,
            ..Self::new(name, items, mods)
        }
    }

    /// Ids of the items this loadout equips.
    pub fn equipped_item_ids(&self) -> HashSet<ItemId> {
        self.items
            .iter()
            .filter(|item| item.equipped)
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn is_usable_by(&self, class_type: ClassType) -> bool {
        self.class_type.is_compatible_with(class_type)
    }
}

/// A player character and the items it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub class_type: ClassType,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Saved loadouts usable by `class_type`, most recently updated first.
///
/// Loadouts without a timestamp sort as if updated at time zero. Ties keep
/// their input order.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{saved_for_class, ClassType, Loadout};
///
/// let mut old = Loadout::new("Old", vec![], vec![]);
/// old.last_updated_at = Some(10);
/// let mut new = Loadout::new("New", vec![], vec![]);
/// new.last_updated_at = Some(20);
/// let mut titan = Loadout::new("Titan only", vec![], vec![]);
/// titan.class_type = ClassType::Titan;
///
/// let all = vec![old, titan, new];
/// let names: Vec<&str> = saved_for_class(&all, ClassType::Hunter)
///     .iter()
///     .map(|l| l.name.as_str())
///     .collect();
/// assert_eq!(names, ["New", "Old"]);
/// ```
pub fn saved_for_class(loadouts: &[Loadout], class_type: ClassType) -> Vec<&Loadout> {
    let mut saved: Vec<&Loadout> = loadouts
        .iter()
        .filter(|loadout| loadout.is_usable_by(class_type))
        .collect();
    saved.sort_by_key(|loadout| std::cmp::Reverse(loadout.last_updated_at.unwrap_or(0)));
    saved
}

/// Optional generated loadouts shown above the saved ones.
#[derive(Debug, Clone, Default)]
pub struct GeneratedLoadouts {
    /// Moves the items matching the current search query.
    pub query: Option<Loadout>,
    /// What was equipped before the last loadout was applied.
    pub previous: Option<Loadout>,
    /// Highest-power gear for the character.
    pub max_power: Option<Loadout>,
}

/// One loadout on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutEntry {
    pub loadout: Loadout,
    /// Whether the loadout is persisted (and so can be edited or deleted).
    pub saved: bool,
}

/// Loadouts for one character, in page order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadoutsPage {
    pub entries: Vec<LoadoutEntry>,
}

impl LoadoutsPage {
    /// Order: query, previous, from-equipped, max power, then saved
    /// loadouts for the character's class. Missing generated ones are skipped.
    pub fn assemble(
        character: &Character,
        catalog: &BucketCatalog,
        saved: &[Loadout],
        generated: GeneratedLoadouts,
    ) -> Self {
        let current = Loadout::from_equipped(character, catalog, FROM_EQUIPPED_NAME);

        let unsaved = [
            generated.query,
            generated.previous,
            Some(current),
            generated.max_power,
        ];
        let mut entries: Vec<LoadoutEntry> = unsaved
            .into_iter()
            .flatten()
            .map(|loadout| LoadoutEntry {
                loadout,
                saved: false,
            })
            .collect();

        entries.extend(
            saved_for_class(saved, character.class_type)
                .into_iter()
                .map(|loadout| LoadoutEntry {
                    loadout: loadout.clone(),
                    saved: true,
                }),
        );

        Self { entries }
    }

    /// `(id, name)` pairs for the page menu.
    pub fn menu(&self) -> impl Iterator<Item = (&LoadoutId, &str)> {
        self.entries
            .iter()
            .map(|entry| (&entry.loadout.id, entry.loadout.name.as_str()))
    }

    pub fn get(&self, id: &LoadoutId) -> Option<&LoadoutEntry> {
        self.entries.iter().find(|entry| &entry.loadout.id == id)
    }
}
