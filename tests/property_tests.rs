//! Property tests for classification, aggregation and filters.

use loadout_core::bucket::hashes;
use loadout_core::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_stats() -> impl Strategy<Value = [u32; 6]> {
    prop::array::uniform6(0u32..=42)
}

/// Any bucket: one of the five armor slots, or a weapon / subclass slot.
fn arb_bucket() -> impl Strategy<Value = BucketInfo> {
    prop_oneof![
        prop::sample::select(ArmorBucket::ALL.to_vec()).prop_map(ArmorBucket::info),
        Just(BucketInfo::new(
            hashes::KINETIC_WEAPONS,
            "KineticSlot",
            BucketCategory::Weapons
        )),
        Just(BucketInfo::new(hashes::SUBCLASS, "Class", BucketCategory::General)),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((arb_bucket(), arb_stats(), any::<bool>()), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (bucket, stats, equipped))| {
                let mut item = Item::new(format!("item-{i}"), 1, bucket).with_equipped(equipped);
                item.stats = StatMap::from_array(stats);
                item
            })
            .collect()
    })
}

fn arb_selection() -> impl Strategy<Value = Vec<Item>> {
    prop::array::uniform5(arb_stats()).prop_map(|all_stats| {
        ArmorBucket::ALL
            .iter()
            .zip(all_stats)
            .map(|(&bucket, stats)| Item::armor(bucket.to_string(), 1, bucket, StatMap::from_array(stats)))
            .collect()
    })
}

proptest! {
    #[test]
    fn classification_is_lossless(items in arb_items()) {
        let by_bucket = classify(&items);

        let mut classified = 0;
        for (bucket, bucket_items) in by_bucket.iter() {
            for item in bucket_items {
                prop_assert_eq!(item.armor_bucket(), Some(bucket));
            }
            classified += bucket_items.len();
        }

        let armor_count = items.iter().filter(|item| item.armor_bucket().is_some()).count();
        prop_assert_eq!(classified, armor_count);

        let unique: HashSet<&ItemId> = by_bucket
            .values()
            .iter()
            .flat_map(|bucket_items| bucket_items.iter().map(|item| &item.id))
            .collect();
        prop_assert_eq!(unique.len(), armor_count);
    }

    #[test]
    fn partition_preserves_order(items in arb_items()) {
        let equipped: HashSet<ItemId> = items
            .iter()
            .filter(|item| item.equipped)
            .map(|item| item.id.clone())
            .collect();
        let split = partition_equipped(&items, &equipped);

        let expected_equipped: Vec<&Item> = items.iter().filter(|item| item.equipped).collect();
        let expected_unequipped: Vec<&Item> = items.iter().filter(|item| !item.equipped).collect();
        prop_assert_eq!(split.equipped, expected_equipped);
        prop_assert_eq!(split.unequipped, expected_unequipped);
    }

    #[test]
    fn aggregate_is_elementwise_sum(items in arb_selection()) {
        let selection = BucketMap::from_fn(|bucket| &items[bucket.index()]);
        let stats = aggregate(&selection);
        for stat in ArmorStat::ALL {
            let expected: u32 = items.iter().map(|item| item.stats[stat]).sum();
            prop_assert_eq!(stats[stat], expected);
        }
    }

    #[test]
    fn aggregate_ignores_order(items in arb_selection(), seed in any::<u64>()) {
        let mut shuffled: Vec<&Item> = items.iter().collect();
        let len = shuffled.len();
        // Deterministic permutation driven by the seed.
        for i in (1..len).rev() {
            let j = (seed.rotate_left(i as u32) % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        let selection = BucketMap::from_fn(|bucket| &items[bucket.index()]);
        prop_assert_eq!(aggregate(&selection), sum_stats(shuffled));
    }

    #[test]
    fn ignored_filter_accepts_anything(min in 0u32..100, span in 0u32..100, value in 0u32..500) {
        let filter = MinMaxIgnored::new(min, min + span, true).unwrap();
        prop_assert!(filter.accepts(value));

        let active = MinMaxIgnored::active(filter.range());
        prop_assert_eq!(active.accepts(value), value >= min && value <= min + span);
    }
}
