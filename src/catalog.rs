//! Bucket catalog configuration.
//!
//! The catalog lists, per display category, the canonical order of bucket
//! type keys. It also names the bucket types eligible for a loadout built
//! from currently equipped gear. A built-in layout is provided; a JSON
//! document can override it category by category. Armor always keeps the
//! order of [`ArmorBucket::ALL`].

use crate::bucket::{ArmorBucket, BucketCategory};
use crate::error::LoadoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use tracing::warn;

/// Canonical bucket ordering per category.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{BucketCatalog, BucketCategory};
///
/// let catalog = BucketCatalog::default();
/// let order = catalog.bucket_order(&BucketCategory::Weapons, &[]);
/// assert_eq!(order, ["KineticSlot", "Energy", "Power"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogOverrides")]
pub struct BucketCatalog {
    /// Bucket type keys per category, in display order.
    categories: HashMap<BucketCategory, Vec<String>>,
    /// Bucket types copied into a loadout made from equipped items.
    from_equipped_types: Vec<String>,
}

/// Catalog as written in a config document; every part is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogOverrides {
    categories: HashMap<BucketCategory, Vec<String>>,
    from_equipped_types: Option<Vec<String>>,
}

impl From<CatalogOverrides> for BucketCatalog {
    fn from(overrides: CatalogOverrides) -> Self {
        let mut catalog = Self::default();
        for (category, order) in overrides.categories {
            if category == BucketCategory::Armor {
                if order != armor_order() {
                    warn!(?order, "Ignoring armor order override");
                }
                continue;
            }
            catalog.categories.insert(category, order);
        }
        if let Some(types) = overrides.from_equipped_types {
            catalog.from_equipped_types = types;
        }
        catalog
    }
}

fn armor_order() -> Vec<String> {
    ArmorBucket::ALL
        .iter()
        .map(|bucket| bucket.bucket_type().to_string())
        .collect()
}

fn strings(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

impl Default for BucketCatalog {
    fn default() -> Self {
        let weapons = strings(&["KineticSlot", "Energy", "Power"]);
        let armor = armor_order();
        let general = strings(&["Class", "Ghost", "Emblems", "Ships", "Vehicle"]);

        let mut from_equipped_types = vec!["Class".to_string()];
        from_equipped_types.extend(weapons.iter().cloned());
        from_equipped_types.extend(armor.iter().cloned());
        from_equipped_types.extend(strings(&["Ghost", "Emblems", "Ships", "Vehicle"]));

        let categories = HashMap::from([
            (BucketCategory::Weapons, weapons),
            (BucketCategory::Armor, armor),
            (BucketCategory::General, general),
        ]);

        Self {
            categories,
            from_equipped_types,
        }
    }
}

impl BucketCatalog {
    /// Parse a catalog from JSON.
    ///
    /// Each listed category replaces the built-in order for that category
    /// only; unlisted categories and a missing `from_equipped_types` keep
    /// the built-in values. An `Armor` entry is ignored.
    pub fn from_json(json: &str) -> Result<Self, LoadoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LoadoutError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Canonical bucket types for `category`; empty when the category is unknown.
    pub fn canonical_order(&self, category: &BucketCategory) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Display order of buckets within `category`.
    ///
    /// Fixed categories (weapons, armor) return their full canonical list,
    /// so empty slots still show, followed by any `observed` type the list
    /// lacks. Other categories order the `observed` bucket types by
    /// canonical position; types the catalog does not list go last, in
    /// input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::{BucketCatalog, BucketCategory};
    ///
    /// let catalog = BucketCatalog::default();
    /// let observed = ["Vehicle".to_string(), "Mystery".to_string(), "Ghost".to_string()];
    /// let order = catalog.bucket_order(&BucketCategory::General, &observed);
    /// assert_eq!(order, ["Ghost", "Vehicle", "Mystery"]);
    /// ```
    pub fn bucket_order(&self, category: &BucketCategory, observed: &[String]) -> Vec<String> {
        let canonical = self.canonical_order(category);
        if category.is_fixed() {
            let mut order = canonical.to_vec();
            order.extend(
                observed
                    .iter()
                    .filter(|bucket_type| !canonical.contains(*bucket_type))
                    .cloned(),
            );
            return order;
        }

        let mut order: Vec<&String> = observed.iter().collect();
        order.sort_by_key(|bucket_type| {
            canonical
                .iter()
                .position(|known| known == *bucket_type)
                .unwrap_or(usize::MAX)
        });
        order.into_iter().cloned().collect()
    }

    pub fn is_from_equipped_type(&self, bucket_type: &str) -> bool {
        self.from_equipped_types
            .iter()
            .any(|known| known == bucket_type)
    }
}
