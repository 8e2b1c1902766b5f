//! Item module.
//!
//! Items are owned by the surrounding inventory system. This crate only
//! reads the handful of fields it needs: identity, slot, class, equipped
//! state, rarity, power and armor stat contributions.

use crate::bucket::{ArmorBucket, BucketInfo};
use crate::stat::StatMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instance identifier of an item.
///
/// # Examples
///
/// ```rust
/// use loadout_core::ItemId;
///
/// let id: ItemId = "6917529123".into();
/// assert_eq!(id.as_str(), "6917529123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Character class. `Unknown` means "any class".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClassType {
    Titan,
    Hunter,
    Warlock,
    #[default]
    Unknown,
}

impl ClassType {
    /// Whether something restricted to `self` is usable by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::ClassType;
    ///
    /// assert!(ClassType::Hunter.is_compatible_with(ClassType::Hunter));
    /// assert!(ClassType::Unknown.is_compatible_with(ClassType::Titan));
    /// assert!(ClassType::Warlock.is_compatible_with(ClassType::Unknown));
    /// assert!(!ClassType::Warlock.is_compatible_with(ClassType::Titan));
    /// ```
    pub fn is_compatible_with(self, other: ClassType) -> bool {
        self == ClassType::Unknown || other == ClassType::Unknown || self == other
    }
}

/// An inventory item as seen by the loadout core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Definition hash; identifies the item kind (e.g. a specific exotic).
    pub hash: u32,
    #[serde(default)]
    pub name: String,
    pub bucket: BucketInfo,
    #[serde(default)]
    pub class_type: ClassType,
    /// Equipped on the character that owns it.
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub exotic: bool,
    #[serde(default)]
    pub power: u32,
    /// Armor stat contributions. All zero for non-armor items.
    #[serde(default)]
    pub stats: StatMap<u32>,
    /// Plugged armor mod hashes.
    #[serde(default)]
    pub mods: Vec<u32>,
}

impl Item {
    /// Create an item with default flags and no stats.
    pub fn new(id: impl Into<ItemId>, hash: u32, bucket: BucketInfo) -> Self {
        Self {
            id: id.into(),
            hash,
            name: String::new(),
            bucket,
            class_type: ClassType::Unknown,
            equipped: false,
            exotic: false,
            power: 0,
            stats: StatMap::default(),
            mods: Vec::new(),
        }
    }

    /// Create an armor piece for `bucket` with the given stat contributions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::{ArmorBucket, ArmorStat, Item, StatMap};
    ///
    /// let helmet = Item::armor("1", 100, ArmorBucket::Helmet, StatMap::from_array([2, 10, 20, 2, 10, 20]));
    /// assert_eq!(helmet.armor_bucket(), Some(ArmorBucket::Helmet));
    /// assert_eq!(helmet.stats[ArmorStat::Recovery], 20);
    /// ```
    pub fn armor(
        id: impl Into<ItemId>,
        hash: u32,
        bucket: ArmorBucket,
        stats: StatMap<u32>,
    ) -> Self {
        Self {
            stats,
            ..Self::new(id, hash, bucket.info())
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_class(mut self, class_type: ClassType) -> Self {
        self.class_type = class_type;
        self
    }

    pub fn with_equipped(mut self, equipped: bool) -> Self {
        self.equipped = equipped;
        self
    }

    pub fn with_exotic(mut self, exotic: bool) -> Self {
        self.exotic = exotic;
        self
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    pub fn with_mods(mut self, mods: Vec<u32>) -> Self {
        self.mods = mods;
        self
    }

    /// The armor bucket this item goes in, `None` for non-armor.
    pub fn armor_bucket(&self) -> Option<ArmorBucket> {
        self.bucket.armor_bucket()
    }

    pub fn can_be_equipped_by(&self, class_type: ClassType) -> bool {
        self.class_type.is_compatible_with(class_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::{hashes, BucketCategory};

    #[test]
    fn test_non_armor_item_has_no_armor_bucket() {
        let weapon = Item::new(
            "10",
            42,
            BucketInfo::new(hashes::KINETIC_WEAPONS, "KineticSlot", BucketCategory::Weapons),
        );
        assert_eq!(weapon.armor_bucket(), None);
    }

    #[test]
    fn test_class_restriction() {
        let item = Item::armor("1", 1, ArmorBucket::Chest, StatMap::default())
            .with_class(ClassType::Titan);
        assert!(item.can_be_equipped_by(ClassType::Titan));
        assert!(!item.can_be_equipped_by(ClassType::Hunter));
        assert!(item.can_be_equipped_by(ClassType::Unknown));
    }

    #[test]
    fn test_item_deserializes_with_defaults() {
        let json = r#"{
            "id": "6917529",
            "hash": 3381022971,
            "bucket": {"hash": 3448274439, "bucket_type": "Helmet", "category": "Armor"}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::from("6917529"));
        assert_eq!(item.armor_bucket(), Some(ArmorBucket::Helmet));
        assert_eq!(item.class_type, ClassType::Unknown);
        assert!(!item.equipped);
        assert_eq!(item.stats.total(), 0);
    }
}
