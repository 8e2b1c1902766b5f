//! Armor set ("stat mix") module.
//!
//! An `ArmorSet` is one stat vector together with, for every armor bucket,
//! the list of items that can fill that bucket without changing the
//! vector. Sets are produced by the external set search and never
//! modified afterwards.

use crate::aggregate::aggregate;
use crate::bucket::BucketMap;
use crate::error::LoadoutError;
use crate::item::Item;
use crate::range::{StatFilters, StatRanges};
use crate::stat::ArmorStats;
use serde::{Deserialize, Serialize};

/// One stat mix: interchangeable items per bucket plus their total stats.
///
/// `armor().values()[i]` always belongs to `ArmorBucket::ALL[i]`, so
/// consumers may index positionally.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{ArmorBucket, ArmorSet, ArmorStat, BucketMap, Item, StatMap};
///
/// let armor = BucketMap::from_fn(|bucket| {
///     vec![Item::armor(format!("{bucket}-a"), 1, bucket, StatMap::splat(10))]
/// });
/// let set = ArmorSet::new(armor).unwrap();
/// assert_eq!(set.stats()[ArmorStat::Mobility], 50);
/// assert_eq!(set.armor()[ArmorBucket::Chest][0].id.as_str(), "chest-a");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArmorSet {
    stats: ArmorStats,
    armor: BucketMap<Vec<Item>>,
}

impl ArmorSet {
    /// Build a set, checking that every bucket is filled with
    /// interchangeable items of the right slot.
    ///
    /// # Errors
    ///
    /// * `EmptyBucket` if a bucket has no items
    /// * `WrongBucket` if an item belongs to another slot
    /// * `NotInterchangeable` if an item's stats differ from the bucket's first item
    pub fn new(armor: BucketMap<Vec<Item>>) -> Result<Self, LoadoutError> {
        for (bucket, items) in armor.iter() {
            let first = items.first().ok_or(LoadoutError::EmptyBucket(bucket))?;
            for item in items {
                if item.armor_bucket() != Some(bucket) {
                    return Err(LoadoutError::WrongBucket {
                        bucket,
                        item: item.id.clone(),
                    });
                }
                if item.stats != first.stats {
                    return Err(LoadoutError::NotInterchangeable {
                        bucket,
                        item: item.id.clone(),
                    });
                }
            }
        }

        let stats = aggregate(&armor.map(|_, items| &items[0]));
        Ok(Self { stats, armor })
    }

    /// Total stats of the set.
    pub fn stats(&self) -> &ArmorStats {
        &self.stats
    }

    /// Interchangeable items per bucket.
    pub fn armor(&self) -> &BucketMap<Vec<Item>> {
        &self.armor
    }

    /// First item of every bucket; any other choice gives the same stats.
    pub fn representative(&self) -> BucketMap<&Item> {
        self.armor.map(|_, items| &items[0])
    }

    /// Number of distinct item combinations this mix stands for.
    pub fn combinations(&self) -> usize {
        self.armor
            .values()
            .iter()
            .map(Vec::len)
            .product()
    }

    pub fn satisfies(&self, filters: &StatFilters) -> bool {
        filters.accepts(&self.stats)
    }

    /// Whether the set holds an exotic in any bucket.
    pub fn has_exotic(&self) -> bool {
        self.representative().values().iter().any(|item| item.exotic)
    }
}

/// Output of a set search.
///
/// An empty result is a normal outcome ("no sets found"), not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArmorSetResults {
    sets: Vec<ArmorSet>,
}

impl ArmorSetResults {
    pub fn new(sets: Vec<ArmorSet>) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[ArmorSet] {
        &self.sets
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Only the sets meeting `filters`, in the same order.
    pub fn filtered(&self, filters: &StatFilters) -> Self {
        Self::new(
            self.sets
                .iter()
                .filter(|set| set.satisfies(filters))
                .cloned()
                .collect(),
        )
    }

    /// Range each stat spans across the results, `None` when empty.
    pub fn stat_ranges(&self) -> Option<StatRanges> {
        StatRanges::spanning(self.sets.iter().map(ArmorSet::stats))
    }
}

impl<'de> Deserialize<'de> for ArmorSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            armor: BucketMap<Vec<Item>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        ArmorSet::new(raw.armor).map_err(serde::de::Error::custom)
    }
}
