//! Bucket classification and display grouping.
//!
//! Classification sorts an unordered item collection into the five armor
//! buckets. Grouping further splits a bucket into equipped and unequipped
//! items. Both steps are stable: items keep their relative input order.

use crate::bucket::BucketMap;
use crate::item::{Item, ItemId};
use std::collections::HashSet;
use tracing::debug;

/// Armor items sorted by bucket.
pub type ItemsByBucket<'a> = BucketMap<Vec<&'a Item>>;

/// Sort items into armor buckets, dropping anything that is not armor.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{classify, ArmorBucket, Item, StatMap};
///
/// let items = vec![
///     Item::armor("a", 1, ArmorBucket::Legs, StatMap::default()),
///     Item::armor("b", 1, ArmorBucket::Helmet, StatMap::default()),
///     Item::armor("c", 1, ArmorBucket::Legs, StatMap::default()),
/// ];
/// let by_bucket = classify(&items);
/// let legs: Vec<&str> = by_bucket[ArmorBucket::Legs].iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(legs, ["a", "c"]);
/// assert!(by_bucket[ArmorBucket::Chest].is_empty());
/// ```
pub fn classify<'a>(items: impl IntoIterator<Item = &'a Item>) -> ItemsByBucket<'a> {
    let mut by_bucket = ItemsByBucket::default();
    let mut skipped = 0usize;
    for item in items {
        match item.armor_bucket() {
            Some(bucket) => by_bucket[bucket].push(item),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "Ignored non-armor items during classification");
    }
    by_bucket
}

/// Items of one bucket split by whether they are equipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EquippedPartition<'a> {
    pub equipped: Vec<&'a Item>,
    pub unequipped: Vec<&'a Item>,
}

impl<'a> EquippedPartition<'a> {
    pub fn is_empty(&self) -> bool {
        self.equipped.is_empty() && self.unequipped.is_empty()
    }

    pub fn len(&self) -> usize {
        self.equipped.len() + self.unequipped.len()
    }

    /// Non-empty groups in display order: equipped first.
    pub fn groups(&self) -> impl Iterator<Item = (EquipState, &[&'a Item])> {
        [
            (EquipState::Equipped, self.equipped.as_slice()),
            (EquipState::Unequipped, self.unequipped.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
    }
}

/// Which half of a partition a group came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipState {
    Equipped,
    Unequipped,
}

/// Split `items` by membership in `equipped_ids`, keeping input order.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{partition_equipped, ArmorBucket, Item, ItemId, StatMap};
/// use std::collections::HashSet;
///
/// let items: Vec<Item> = ["a", "b", "c"]
///     .iter()
///     .map(|id| Item::armor(*id, 1, ArmorBucket::Helmet, StatMap::default()))
///     .collect();
/// let equipped: HashSet<ItemId> = ["a", "c"].iter().map(|id| ItemId::from(*id)).collect();
///
/// let split = partition_equipped(&items, &equipped);
/// assert_eq!(split.equipped.len(), 2);
/// assert_eq!(split.unequipped[0].id.as_str(), "b");
/// ```
pub fn partition_equipped<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    equipped_ids: &HashSet<ItemId>,
) -> EquippedPartition<'a> {
    let (equipped, unequipped): (Vec<&'a Item>, Vec<&'a Item>) = items
        .into_iter()
        .partition(|item| equipped_ids.contains(&item.id));
    EquippedPartition {
        equipped,
        unequipped,
    }
}

/// Classify `items` and split every bucket into equipped and unequipped.
///
/// Buckets with no items map to an empty partition.
pub fn group_for_display<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    equipped_ids: &HashSet<ItemId>,
) -> BucketMap<EquippedPartition<'a>> {
    let by_bucket = classify(items);
    by_bucket.map(|_, items| partition_equipped(items.iter().copied(), equipped_ids))
}

/// Group items by bucket type key, keeping first-seen key order.
///
/// Used for categories that are not made of the five armor buckets.
pub fn group_by_bucket_type<'a>(
    items: impl IntoIterator<Item = &'a Item>,
) -> Vec<(String, Vec<&'a Item>)> {
    let mut groups: Vec<(String, Vec<&'a Item>)> = Vec::new();
    for item in items {
        match groups
            .iter_mut()
            .find(|(bucket_type, _)| *bucket_type == item.bucket.bucket_type)
        {
            Some((_, group)) => group.push(item),
            None => groups.push((item.bucket.bucket_type.clone(), vec![item])),
        }
    }
    groups
}
