//! Bucket module.
//!
//! Buckets are the game's equipment slots. The five armor buckets form a
//! closed enumeration with a fixed order that both the optimizer (for
//! positional indexing) and the loadout view (for slot order) rely on.
//! Every other bucket is described only by a [`BucketInfo`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The five armor buckets, in canonical order.
///
/// # Examples
///
/// ```rust
/// use loadout_core::ArmorBucket;
///
/// assert_eq!(
///     ArmorBucket::ALL,
///     [
///         ArmorBucket::Helmet,
///         ArmorBucket::Gauntlets,
///         ArmorBucket::Chest,
///         ArmorBucket::Legs,
///         ArmorBucket::ClassItem,
///     ]
/// );
/// assert_eq!(ArmorBucket::Legs.index(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorBucket {
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
}

impl ArmorBucket {
    /// Number of armor buckets.
    pub const COUNT: usize = 5;

    /// All armor buckets in canonical order.
    pub const ALL: [ArmorBucket; ArmorBucket::COUNT] = [
        ArmorBucket::Helmet,
        ArmorBucket::Gauntlets,
        ArmorBucket::Chest,
        ArmorBucket::Legs,
        ArmorBucket::ClassItem,
    ];

    /// Position of this bucket in [`ArmorBucket::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The game's definition hash for this bucket.
    #[must_use]
    pub const fn definition_hash(self) -> u32 {
        match self {
            ArmorBucket::Helmet => hashes::HELMET,
            ArmorBucket::Gauntlets => hashes::GAUNTLETS,
            ArmorBucket::Chest => hashes::CHEST_ARMOR,
            ArmorBucket::Legs => hashes::LEG_ARMOR,
            ArmorBucket::ClassItem => hashes::CLASS_ARMOR,
        }
    }

    /// Classify a bucket hash. Non-armor buckets return `None`.
    #[must_use]
    pub fn from_hash(hash: u32) -> Option<Self> {
        ArmorBucket::ALL
            .into_iter()
            .find(|bucket| bucket.definition_hash() == hash)
    }

    /// The bucket type key used by the catalog (`"Helmet"`, `"Leg"`...).
    #[must_use]
    pub const fn bucket_type(self) -> &'static str {
        match self {
            ArmorBucket::Helmet => "Helmet",
            ArmorBucket::Gauntlets => "Gauntlets",
            ArmorBucket::Chest => "Chest",
            ArmorBucket::Legs => "Leg",
            ArmorBucket::ClassItem => "ClassItem",
        }
    }

    /// Full description of this bucket.
    pub fn info(self) -> BucketInfo {
        BucketInfo::new(
            self.definition_hash(),
            self.bucket_type(),
            BucketCategory::Armor,
        )
    }
}

/// Well-known bucket hashes.
pub mod hashes {
    pub const KINETIC_WEAPONS: u32 = 1_498_876_634;
    pub const ENERGY_WEAPONS: u32 = 2_465_295_065;
    pub const POWER_WEAPONS: u32 = 953_998_645;
    pub const HELMET: u32 = 3_448_274_439;
    pub const GAUNTLETS: u32 = 3_551_918_588;
    pub const CHEST_ARMOR: u32 = 14_239_492;
    pub const LEG_ARMOR: u32 = 20_886_954;
    pub const CLASS_ARMOR: u32 = 1_585_787_867;
    pub const SUBCLASS: u32 = 3_284_755_031;
    pub const GHOST: u32 = 4_023_194_814;
    pub const VEHICLE: u32 = 2_025_709_351;
    pub const SHIPS: u32 = 284_967_655;
    pub const EMBLEMS: u32 = 4_274_335_291;
}

/// Display category a bucket sorts into.
///
/// Weapons and Armor are fixed categories: they always show every one of
/// their buckets. Anything the catalog does not know lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BucketCategory {
    Weapons,
    Armor,
    General,
    Other(String),
}

impl BucketCategory {
    /// Categories shown on a loadout row, in order.
    pub const DISPLAYED: [BucketCategory; 3] = [
        BucketCategory::Weapons,
        BucketCategory::Armor,
        BucketCategory::General,
    ];

    /// Whether this category always lists its full canonical bucket order.
    pub fn is_fixed(&self) -> bool {
        matches!(self, BucketCategory::Weapons | BucketCategory::Armor)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BucketCategory::Weapons => "Weapons",
            BucketCategory::Armor => "Armor",
            BucketCategory::General => "General",
            BucketCategory::Other(name) => name,
        }
    }
}

impl From<&str> for BucketCategory {
    fn from(s: &str) -> Self {
        match s {
            "Weapons" => BucketCategory::Weapons,
            "Armor" => BucketCategory::Armor,
            "General" => BucketCategory::General,
            other => BucketCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for BucketCategory {
    fn from(s: String) -> Self {
        BucketCategory::from(s.as_str())
    }
}

impl From<BucketCategory> for String {
    fn from(category: BucketCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for BucketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slot an item lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Definition hash of the bucket.
    pub hash: u32,
    /// Bucket type key, e.g. `"KineticSlot"` or `"Helmet"`.
    pub bucket_type: String,
    /// Display category.
    pub category: BucketCategory,
}

impl BucketInfo {
    pub fn new(hash: u32, bucket_type: impl Into<String>, category: BucketCategory) -> Self {
        Self {
            hash,
            bucket_type: bucket_type.into(),
            category,
        }
    }

    /// The armor bucket this slot corresponds to, if any.
    pub fn armor_bucket(&self) -> Option<ArmorBucket> {
        ArmorBucket::from_hash(self.hash)
    }

    pub fn is_subclass(&self) -> bool {
        self.hash == hashes::SUBCLASS
    }
}

/// A value for every armor bucket, indexed in canonical order.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{ArmorBucket, BucketMap};
///
/// let names = BucketMap::from_fn(|bucket| bucket.to_string());
/// assert_eq!(names[ArmorBucket::ClassItem], "class_item");
/// assert_eq!(names.values()[0], "helmet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BucketMap<T>([T; ArmorBucket::COUNT]);

impl<T> BucketMap<T> {
    /// Build a map by calling `f` once per bucket, in canonical order.
    pub fn from_fn(mut f: impl FnMut(ArmorBucket) -> T) -> Self {
        Self(std::array::from_fn(|i| f(ArmorBucket::ALL[i])))
    }

    /// Build a map from values listed in canonical bucket order.
    pub const fn from_array(values: [T; ArmorBucket::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, bucket: ArmorBucket) -> &T {
        &self.0[bucket.index()]
    }

    pub fn get_mut(&mut self, bucket: ArmorBucket) -> &mut T {
        &mut self.0[bucket.index()]
    }

    /// Iterate `(bucket, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ArmorBucket, &T)> {
        ArmorBucket::ALL.into_iter().zip(self.0.iter())
    }

    /// Positional view; index `i` corresponds to `ArmorBucket::ALL[i]`.
    pub fn values(&self) -> &[T; ArmorBucket::COUNT] {
        &self.0
    }

    pub fn into_values(self) -> [T; ArmorBucket::COUNT] {
        self.0
    }

    pub fn map<'s, U>(&'s self, mut f: impl FnMut(ArmorBucket, &'s T) -> U) -> BucketMap<U> {
        BucketMap::from_fn(|bucket| f(bucket, self.get(bucket)))
    }
}

impl<T> Index<ArmorBucket> for BucketMap<T> {
    type Output = T;

    fn index(&self, bucket: ArmorBucket) -> &T {
        self.get(bucket)
    }
}

impl<T> IndexMut<ArmorBucket> for BucketMap<T> {
    fn index_mut(&mut self, bucket: ArmorBucket) -> &mut T {
        self.get_mut(bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut sorted = ArmorBucket::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, ArmorBucket::ALL);
        assert!(ArmorBucket::Helmet < ArmorBucket::Gauntlets);
        assert!(ArmorBucket::Legs < ArmorBucket::ClassItem);
    }

    #[test]
    fn test_from_hash_filters_non_armor() {
        for bucket in ArmorBucket::ALL {
            assert_eq!(ArmorBucket::from_hash(bucket.definition_hash()), Some(bucket));
        }
        assert_eq!(ArmorBucket::from_hash(hashes::KINETIC_WEAPONS), None);
        assert_eq!(ArmorBucket::from_hash(hashes::SUBCLASS), None);
        assert_eq!(ArmorBucket::from_hash(hashes::GHOST), None);
    }

    #[test]
    fn test_category_strings() {
        assert_eq!(BucketCategory::from("Armor"), BucketCategory::Armor);
        assert_eq!(
            BucketCategory::from("Inventory"),
            BucketCategory::Other("Inventory".to_string())
        );
        assert!(BucketCategory::Weapons.is_fixed());
        assert!(!BucketCategory::General.is_fixed());

        let json = serde_json::to_string(&BucketCategory::General).unwrap();
        assert_eq!(json, "\"General\"");
    }

    #[test]
    fn test_armor_bucket_info() {
        let info = ArmorBucket::Chest.info();
        assert_eq!(info.bucket_type, "Chest");
        assert_eq!(info.category, BucketCategory::Armor);
        assert_eq!(info.armor_bucket(), Some(ArmorBucket::Chest));
        assert!(!info.is_subclass());
    }

    #[test]
    fn test_bucket_map_map_borrows_values() {
        let names = BucketMap::from_fn(|bucket| vec![bucket.to_string()]);
        let first: BucketMap<&String> = names.map(|_, list| &list[0]);
        assert_eq!(first[ArmorBucket::Chest], "chest");
        assert_eq!(first[ArmorBucket::ClassItem], "class_item");
    }

    #[test]
    fn test_bucket_map_positional() {
        let mut map: BucketMap<Vec<u32>> = BucketMap::default();
        map[ArmorBucket::Gauntlets].push(7);
        assert_eq!(map.values()[1], vec![7]);
        let lengths = map.map(|_, items| items.len());
        assert_eq!(lengths.into_values(), [0, 1, 0, 0, 0]);
    }
}
