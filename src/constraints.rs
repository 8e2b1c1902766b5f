//! Optimizer constraint types.
//!
//! These are the user-authored inputs handed to the external set search:
//! stat filters, pinned and excluded items per bucket, and the exotic
//! lock. The crate does not run the search; it only defines the inputs
//! and how a single candidate item is checked against them.

use crate::bucket::{ArmorBucket, BucketMap};
use crate::error::LoadoutError;
use crate::item::{Item, ItemId};
use crate::range::StatFilters;
use serde::{Deserialize, Serialize};

/// Stored exotic-lock value meaning "no exotics at all".
pub const LOCKED_EXOTIC_NO_EXOTIC: i64 = -1;

/// Stored exotic-lock value meaning "some exotic, any one".
pub const LOCKED_EXOTIC_ANY_EXOTIC: i64 = -2;

/// Exotic selection policy for generated sets.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{ExoticPolicy, LOCKED_EXOTIC_NO_EXOTIC};
///
/// assert_eq!(
///     ExoticPolicy::from_legacy(LOCKED_EXOTIC_NO_EXOTIC).unwrap(),
///     ExoticPolicy::NoExotic
/// );
/// assert_eq!(
///     ExoticPolicy::from_legacy(3_381_022_971).unwrap(),
///     ExoticPolicy::Specific(3_381_022_971)
/// );
/// assert!(ExoticPolicy::from_legacy(-7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExoticPolicy {
    /// No constraint on exotics.
    #[default]
    Unlocked,
    NoExotic,
    AnyExotic,
    /// Exactly this exotic, by definition hash.
    Specific(u32),
}

impl ExoticPolicy {
    /// Decode a stored lock value.
    pub fn from_legacy(value: i64) -> Result<Self, LoadoutError> {
        match value {
            LOCKED_EXOTIC_NO_EXOTIC => Ok(ExoticPolicy::NoExotic),
            LOCKED_EXOTIC_ANY_EXOTIC => Ok(ExoticPolicy::AnyExotic),
            v => u32::try_from(v)
                .map(ExoticPolicy::Specific)
                .map_err(|_| LoadoutError::InvalidExoticLock(v)),
        }
    }

    /// Encode for storage. `Unlocked` has no stored form.
    pub fn to_legacy(self) -> Option<i64> {
        match self {
            ExoticPolicy::Unlocked => None,
            ExoticPolicy::NoExotic => Some(LOCKED_EXOTIC_NO_EXOTIC),
            ExoticPolicy::AnyExotic => Some(LOCKED_EXOTIC_ANY_EXOTIC),
            ExoticPolicy::Specific(hash) => Some(i64::from(hash)),
        }
    }

    /// Whether `item` may appear in a set under this policy.
    ///
    /// Legendary items are always allowed; the policy only restricts exotics.
    pub fn permits(self, item: &Item) -> bool {
        if !item.exotic {
            return true;
        }
        match self {
            ExoticPolicy::Unlocked | ExoticPolicy::AnyExotic => true,
            ExoticPolicy::NoExotic => false,
            ExoticPolicy::Specific(hash) => item.hash == hash,
        }
    }

    /// Whether a complete set must contain an exotic.
    pub fn requires_exotic(self) -> bool {
        matches!(self, ExoticPolicy::AnyExotic | ExoticPolicy::Specific(_))
    }
}

/// Forced item per bucket.
pub type PinnedItems = BucketMap<Option<ItemId>>;

/// Forbidden items per bucket.
pub type ExcludedItems = BucketMap<Vec<ItemId>>;

/// Everything the set search needs besides the items themselves.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{ArmorBucket, Item, OptimizerParams, StatMap};
///
/// let helmet = Item::armor("1", 10, ArmorBucket::Helmet, StatMap::default());
/// let other = Item::armor("2", 11, ArmorBucket::Helmet, StatMap::default());
///
/// let mut params = OptimizerParams::default();
/// params.pin(ArmorBucket::Helmet, helmet.id.clone());
///
/// assert!(params.admits(&helmet));
/// assert!(!params.admits(&other));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerParams {
    pub filters: StatFilters,
    #[serde(default)]
    pub pinned: PinnedItems,
    #[serde(default)]
    pub excluded: ExcludedItems,
    #[serde(default)]
    pub exotic: ExoticPolicy,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self {
            filters: StatFilters::unconstrained(),
            pinned: PinnedItems::default(),
            excluded: ExcludedItems::default(),
            exotic: ExoticPolicy::Unlocked,
        }
    }
}

impl OptimizerParams {
    /// Force `item` into `bucket`, replacing any earlier pin.
    pub fn pin(&mut self, bucket: ArmorBucket, item: ItemId) {
        self.pinned[bucket] = Some(item);
    }

    pub fn unpin(&mut self, bucket: ArmorBucket) {
        self.pinned[bucket] = None;
    }

    /// Forbid `item` in `bucket`. Excluding twice has no extra effect.
    pub fn exclude(&mut self, bucket: ArmorBucket, item: ItemId) {
        let excluded = &mut self.excluded[bucket];
        if !excluded.contains(&item) {
            excluded.push(item);
        }
    }

    pub fn is_excluded(&self, bucket: ArmorBucket, item: &ItemId) -> bool {
        self.excluded[bucket].contains(item)
    }

    /// Check pin, exclusion and exotic policy for one candidate.
    ///
    /// Non-armor items are never admitted.
    pub fn admits(&self, item: &Item) -> bool {
        let Some(bucket) = item.armor_bucket() else {
            return false;
        };
        if let Some(pinned) = &self.pinned[bucket] {
            return pinned == &item.id;
        }
        !self.is_excluded(bucket, &item.id) && self.exotic.permits(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::StatMap;

    fn exotic(id: &str, hash: u32) -> Item {
        Item::armor(id, hash, ArmorBucket::Chest, StatMap::default()).with_exotic(true)
    }

    fn legendary(id: &str) -> Item {
        Item::armor(id, 7, ArmorBucket::Chest, StatMap::default())
    }

    #[test]
    fn test_legacy_round_trip() {
        for policy in [
            ExoticPolicy::NoExotic,
            ExoticPolicy::AnyExotic,
            ExoticPolicy::Specific(0),
            ExoticPolicy::Specific(u32::MAX),
        ] {
            let stored = policy.to_legacy().unwrap();
            assert_eq!(ExoticPolicy::from_legacy(stored).unwrap(), policy);
        }
        assert_eq!(ExoticPolicy::Unlocked.to_legacy(), None);
    }

    #[test]
    fn test_no_exotic_never_matches_an_item() {
        let policy = ExoticPolicy::from_legacy(LOCKED_EXOTIC_NO_EXOTIC).unwrap();
        assert!(!policy.permits(&exotic("1", 0)));
        assert!(!policy.permits(&exotic("2", u32::MAX)));
        assert!(policy.permits(&legendary("3")));
    }

    #[test]
    fn test_specific_exotic() {
        let policy = ExoticPolicy::Specific(99);
        assert!(policy.permits(&exotic("1", 99)));
        assert!(!policy.permits(&exotic("2", 98)));
        assert!(policy.permits(&legendary("3")));
        assert!(policy.requires_exotic());
    }

    #[test]
    fn test_any_exotic() {
        let policy = ExoticPolicy::from_legacy(LOCKED_EXOTIC_ANY_EXOTIC).unwrap();
        assert!(policy.permits(&exotic("1", 12)));
        assert!(policy.requires_exotic());
        assert!(!ExoticPolicy::NoExotic.requires_exotic());
    }

    #[test]
    fn test_out_of_range_legacy_value() {
        let err = ExoticPolicy::from_legacy(-3).unwrap_err();
        assert!(matches!(err, LoadoutError::InvalidExoticLock(-3)));
        assert!(ExoticPolicy::from_legacy(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_exclusions() {
        let mut params = OptimizerParams::default();
        let item = legendary("5");
        params.exclude(ArmorBucket::Chest, item.id.clone());
        params.exclude(ArmorBucket::Chest, item.id.clone());
        assert_eq!(params.excluded[ArmorBucket::Chest].len(), 1);
        assert!(!params.admits(&item));
        assert!(params.admits(&legendary("6")));
    }

    #[test]
    fn test_pin_overrides_exotic_policy() {
        let mut params = OptimizerParams {
            exotic: ExoticPolicy::NoExotic,
            ..OptimizerParams::default()
        };
        let pinned = exotic("9", 1);
        params.pin(ArmorBucket::Chest, pinned.id.clone());
        assert!(params.admits(&pinned));
        params.unpin(ArmorBucket::Chest);
        assert!(!params.admits(&pinned));
    }
}
