//! Stat aggregation module.
//!
//! Armor stats combine additively: the stat vector of a set is the
//! elementwise sum of its pieces. Summation is commutative, so the result
//! depends only on which items are chosen, never on their order.

use crate::bucket::{ArmorBucket, BucketMap};
use crate::item::{Item, ItemId};
use crate::stat::ArmorStats;
use serde::{Deserialize, Serialize};

/// Sum the stats of one selected item per bucket.
///
/// The caller supplies a complete selection; the `BucketMap` shape already
/// guarantees exactly one entry per bucket.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{aggregate, ArmorBucket, ArmorStat, BucketMap, Item, StatMap};
///
/// let items: Vec<Item> = ArmorBucket::ALL
///     .iter()
///     .map(|&b| Item::armor(b.to_string(), 1, b, StatMap::from_array([2, 10, 20, 2, 2, 30])))
///     .collect();
/// let selection = BucketMap::from_fn(|b| &items[b.index()]);
///
/// let stats = aggregate(&selection);
/// assert_eq!(stats[ArmorStat::Recovery], 100);
/// assert_eq!(stats[ArmorStat::Strength], 150);
/// ```
pub fn aggregate(selection: &BucketMap<&Item>) -> ArmorStats {
    sum_stats(selection.values().iter().copied())
}

/// Sum the stats of an arbitrary list of items.
pub fn sum_stats<'a>(items: impl IntoIterator<Item = &'a Item>) -> ArmorStats {
    items.into_iter().map(|item| &item.stats).sum()
}

/// Aggregated stats with the contribution of every piece.
///
/// Useful for tooltips and debugging: each entry records which item
/// supplied which part of the total.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{ArmorBucket, BucketMap, Item, StatBreakdown, StatMap};
///
/// let items: Vec<Item> = ArmorBucket::ALL
///     .iter()
///     .map(|&b| Item::armor(b.to_string(), 1, b, StatMap::splat(4)))
///     .collect();
/// let selection = BucketMap::from_fn(|b| &items[b.index()]);
///
/// let breakdown = StatBreakdown::from_selection(&selection);
/// assert_eq!(breakdown.stats.total(), 120);
/// assert_eq!(breakdown.contributions.len(), 5);
/// assert_eq!(breakdown.contributions[0].0, ArmorBucket::Helmet);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBreakdown {
    /// The summed stats.
    pub stats: ArmorStats,

    /// `(bucket, item, stats contributed)` in canonical bucket order.
    pub contributions: Vec<(ArmorBucket, ItemId, ArmorStats)>,
}

impl StatBreakdown {
    pub fn from_selection(selection: &BucketMap<&Item>) -> Self {
        let contributions = selection
            .iter()
            .map(|(bucket, item)| (bucket, item.id.clone(), item.stats))
            .collect();
        Self {
            stats: aggregate(selection),
            contributions,
        }
    }

    /// Contribution of the piece in `bucket`.
    pub fn contribution(&self, bucket: ArmorBucket) -> Option<&ArmorStats> {
        self.contributions
            .iter()
            .find(|(b, _, _)| *b == bucket)
            .map(|(_, _, stats)| stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::{ArmorStat, StatMap};

    fn set_with(stats: [[u32; 6]; 5]) -> Vec<Item> {
        ArmorBucket::ALL
            .iter()
            .map(|&bucket| {
                Item::armor(
                    format!("{bucket}"),
                    1,
                    bucket,
                    StatMap::from_array(stats[bucket.index()]),
                )
            })
            .collect()
    }

    #[test]
    fn test_aggregate_sums_each_stat() {
        let items = set_with([
            [2, 6, 26, 10, 10, 10],
            [10, 2, 20, 2, 16, 14],
            [2, 20, 10, 20, 2, 10],
            [16, 2, 14, 6, 20, 6],
            [0, 0, 0, 0, 0, 0],
        ]);
        let selection = BucketMap::from_fn(|b| &items[b.index()]);
        let stats = aggregate(&selection);

        assert_eq!(stats[ArmorStat::Mobility], 30);
        assert_eq!(stats[ArmorStat::Resilience], 30);
        assert_eq!(stats[ArmorStat::Recovery], 70);
        assert_eq!(stats[ArmorStat::Discipline], 38);
        assert_eq!(stats[ArmorStat::Intellect], 48);
        assert_eq!(stats[ArmorStat::Strength], 40);
    }

    #[test]
    fn test_sum_stats_order_independent() {
        let items = set_with([[1, 2, 3, 4, 5, 6]; 5]);
        let forward = sum_stats(items.iter());
        let backward = sum_stats(items.iter().rev());
        assert_eq!(forward, backward);
        assert_eq!(forward, StatMap::from_array([5, 10, 15, 20, 25, 30]));
    }

    #[test]
    fn test_sum_stats_empty() {
        assert_eq!(sum_stats(std::iter::empty()), ArmorStats::default());
    }

    #[test]
    fn test_breakdown_contributions() {
        let items = set_with([[1; 6], [2; 6], [3; 6], [4; 6], [5; 6]]);
        let selection = BucketMap::from_fn(|b| &items[b.index()]);
        let breakdown = StatBreakdown::from_selection(&selection);

        assert_eq!(breakdown.stats, StatMap::splat(15));
        assert_eq!(
            breakdown.contribution(ArmorBucket::Legs),
            Some(&StatMap::splat(4))
        );
        assert_eq!(breakdown.contributions[4].1, ItemId::from("class_item"));
    }
}
