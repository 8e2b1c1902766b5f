//! Loadout row view model.
//!
//! Turns a saved loadout into what a loadout row displays: the subclass,
//! one section per category with items laid out by bucket and split into
//! equipped and unequipped groups, the armor stat summary and the power
//! level. Nothing here renders; a front end walks the resulting structure.

use crate::aggregate::sum_stats;
use crate::bucket::BucketCategory;
use crate::catalog::BucketCatalog;
use crate::classify::{group_by_bucket_type, partition_equipped, EquippedPartition};
use crate::item::{Item, ItemId};
use crate::loadout::{Character, Loadout, LoadoutItem};
use crate::stat::ArmorStats;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Weapons a complete loadout holds.
pub const FULL_WEAPON_COUNT: usize = 3;

/// Armor pieces a complete loadout holds.
pub const FULL_ARMOR_COUNT: usize = 5;

/// One bucket column in a category.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSlot<'a> {
    pub bucket_type: String,
    pub items: EquippedPartition<'a>,
}

impl<'a> BucketSlot<'a> {
    /// Empty slot kept so fixed categories show every bucket.
    pub fn is_placeholder(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body of a category section.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryContent<'a> {
    /// The loadout has no items in this category.
    Placeholder,
    /// Buckets in display order.
    Buckets(Vec<BucketSlot<'a>>),
}

/// One category section of a loadout row.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView<'a> {
    pub category: BucketCategory,
    pub content: CategoryContent<'a>,
    /// Summed armor stats; only for an armor category with exactly five pieces.
    pub stat_summary: Option<ArmorStats>,
    /// Whether a link into the optimizer is offered.
    pub opens_in_optimizer: bool,
}

impl<'a> CategoryView<'a> {
    pub fn slots(&self) -> &[BucketSlot<'a>] {
        match &self.content {
            CategoryContent::Placeholder => &[],
            CategoryContent::Buckets(slots) => slots,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, CategoryContent::Placeholder)
    }
}

/// Everything a loadout row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutView<'a> {
    pub loadout: &'a Loadout,
    pub subclass: Option<&'a Item>,
    /// Resolved items the character can equip, subclass included.
    pub items: Vec<&'a Item>,
    /// Weapons, Armor and General, in that order.
    pub categories: Vec<CategoryView<'a>>,
    /// Power level, shown only for a full set of weapons and armor.
    pub power: Option<u32>,
    /// Loadout entries with no matching item in the inventory.
    pub missing_items: Vec<&'a LoadoutItem>,
    pub mods: &'a [u32],
}

impl<'a> LoadoutView<'a> {
    /// Build the row for `loadout` as seen by `character`.
    ///
    /// Items are looked up by id in `all_items`. Items the character cannot
    /// equip are left out; unmatched entries end up in `missing_items`.
    pub fn build(
        loadout: &'a Loadout,
        character: &Character,
        all_items: &'a [Item],
        catalog: &BucketCatalog,
    ) -> Self {
        let by_id: HashMap<&ItemId, &'a Item> =
            all_items.iter().map(|item| (&item.id, item)).collect();

        let mut resolved: Vec<&'a Item> = Vec::with_capacity(loadout.items.len());
        let mut missing_items = Vec::new();
        for entry in &loadout.items {
            match by_id.get(&entry.id) {
                Some(item) => resolved.push(*item),
                None => missing_items.push(entry),
            }
        }
        if !missing_items.is_empty() {
            warn!(
                loadout = %loadout.id,
                missing = missing_items.len(),
                "Loadout references items that are not in the inventory"
            );
        }

        let items: Vec<&'a Item> = resolved
            .into_iter()
            .filter(|item| item.can_be_equipped_by(character.class_type))
            .collect();
        let mut equippable = items.clone();
        let subclass_index = equippable
            .iter()
            .position(|item| item.bucket.is_subclass());
        let subclass = subclass_index.map(|index| equippable.remove(index));

        let equipped_ids = loadout.equipped_item_ids();
        let categories: Vec<CategoryView<'a>> = BucketCategory::DISPLAYED
            .into_iter()
            .map(|category| {
                let items: Vec<&'a Item> = equippable
                    .iter()
                    .copied()
                    .filter(|item| item.bucket.category == category)
                    .collect();
                category_view(category, &items, &equipped_ids, loadout, catalog)
            })
            .collect();

        let power = full_set_power(&equippable);

        Self {
            loadout,
            subclass,
            items,
            categories,
            power,
            missing_items,
            mods: &loadout.mods,
        }
    }

    pub fn category(&self, category: &BucketCategory) -> Option<&CategoryView<'a>> {
        self.categories.iter().find(|view| &view.category == category)
    }

    pub fn has_missing_items(&self) -> bool {
        !self.missing_items.is_empty()
    }

    /// True when no inventory item of the loadout can be shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn category_view<'a>(
    category: BucketCategory,
    items: &[&'a Item],
    equipped_ids: &HashSet<ItemId>,
    loadout: &Loadout,
    catalog: &BucketCatalog,
) -> CategoryView<'a> {
    let is_armor = category == BucketCategory::Armor;

    if items.is_empty() {
        return CategoryView {
            opens_in_optimizer: is_armor && loadout.parameters.is_some(),
            category,
            content: CategoryContent::Placeholder,
            stat_summary: None,
        };
    }

    let groups = group_by_bucket_type(items.iter().copied());
    let observed: Vec<String> = groups.iter().map(|(bucket_type, _)| bucket_type.clone()).collect();
    let slots = catalog
        .bucket_order(&category, &observed)
        .into_iter()
        .map(|bucket_type| {
            let bucket_items = groups
                .iter()
                .find(|(known, _)| *known == bucket_type)
                .map(|(_, group)| group.as_slice())
                .unwrap_or(&[]);
            BucketSlot {
                items: partition_equipped(bucket_items.iter().copied(), equipped_ids),
                bucket_type,
            }
        })
        .collect();

    let stat_summary =
        (is_armor && items.len() == FULL_ARMOR_COUNT).then(|| sum_stats(items.iter().copied()));

    CategoryView {
        category,
        content: CategoryContent::Buckets(slots),
        stat_summary,
        opens_in_optimizer: is_armor,
    }
}

/// Floor of the mean power of a full weapon and armor set.
fn full_set_power(items: &[&Item]) -> Option<u32> {
    let in_category = |category: BucketCategory| {
        items
            .iter()
            .filter(move |item| item.bucket.category == category)
    };
    let weapons = in_category(BucketCategory::Weapons).count();
    let armor = in_category(BucketCategory::Armor).count();
    if weapons != FULL_WEAPON_COUNT || armor != FULL_ARMOR_COUNT {
        return None;
    }

    let total: u64 = in_category(BucketCategory::Weapons)
        .chain(in_category(BucketCategory::Armor))
        .map(|item| u64::from(item.power))
        .sum();
    let count = (FULL_WEAPON_COUNT + FULL_ARMOR_COUNT) as u64;
    u32::try_from(total / count).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::{hashes, ArmorBucket, BucketInfo};
    use crate::constraints::OptimizerParams;
    use crate::item::ClassType;
    use crate::stat::{ArmorStat, StatMap};

    fn weapon(id: &str, hash: u32, bucket_type: &str, power: u32) -> Item {
        Item::new(id, 1, BucketInfo::new(hash, bucket_type, BucketCategory::Weapons))
            .with_power(power)
    }

    fn armor(id: &str, bucket: ArmorBucket, power: u32) -> Item {
        Item::armor(id, 2, bucket, StatMap::from_array([2, 10, 20, 2, 2, 10])).with_power(power)
    }

    fn character() -> Character {
        Character {
            id: "c".to_string(),
            class_type: ClassType::Hunter,
            items: vec![],
        }
    }

    fn loadout_of(items: &[Item]) -> Loadout {
        Loadout::new(
            "Test",
            items.iter().map(|item| LoadoutItem::from_item(item, true)).collect(),
            vec![],
        )
    }

    fn full_inventory() -> Vec<Item> {
        let mut items = vec![
            weapon("k", hashes::KINETIC_WEAPONS, "KineticSlot", 1810),
            weapon("e", hashes::ENERGY_WEAPONS, "Energy", 1811),
            weapon("p", hashes::POWER_WEAPONS, "Power", 1812),
        ];
        items.extend(
            ArmorBucket::ALL
                .iter()
                .map(|&bucket| armor(bucket.bucket_type(), bucket, 1800)),
        );
        items
    }

    #[test]
    fn test_full_loadout_power_and_summary() {
        let items = full_inventory();
        let loadout = loadout_of(&items);
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());

        // (1810 + 1811 + 1812 + 5 * 1800) / 8 = 1804.125
        assert_eq!(view.power, Some(1804));
        let armor = view.category(&BucketCategory::Armor).unwrap();
        let summary = armor.stat_summary.unwrap();
        assert_eq!(summary[ArmorStat::Recovery], 100);
        assert!(armor.opens_in_optimizer);
        assert!(!view.has_missing_items());
    }

    #[test]
    fn test_missing_armor_piece_keeps_slot() {
        let items: Vec<Item> = full_inventory()
            .into_iter()
            .filter(|item| item.armor_bucket() != Some(ArmorBucket::Gauntlets))
            .collect();
        let loadout = loadout_of(&items);
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());

        let armor = view.category(&BucketCategory::Armor).unwrap();
        assert_eq!(armor.slots().len(), 5);
        let placeholders: Vec<&str> = armor
            .slots()
            .iter()
            .filter(|slot| slot.is_placeholder())
            .map(|slot| slot.bucket_type.as_str())
            .collect();
        assert_eq!(placeholders, ["Gauntlets"]);
        assert!(armor.stat_summary.is_none());
        assert!(view.power.is_none());
    }

    #[test]
    fn test_missing_items_reported() {
        let items = full_inventory();
        let mut loadout = loadout_of(&items);
        loadout.items.push(LoadoutItem {
            id: "gone".into(),
            hash: 5,
            equipped: true,
        });
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());
        assert_eq!(view.missing_items.len(), 1);
        assert_eq!(view.missing_items[0].id.as_str(), "gone");
    }

    #[test]
    fn test_subclass_pulled_out_and_class_filtered() {
        let subclass = Item::new(
            "sub",
            9,
            BucketInfo::new(hashes::SUBCLASS, "Class", BucketCategory::General),
        )
        .with_class(ClassType::Hunter);
        let titan_helmet = armor("titan", ArmorBucket::Helmet, 1).with_class(ClassType::Titan);
        let items = vec![subclass, titan_helmet];
        let loadout = loadout_of(&items);
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());

        assert_eq!(view.subclass.map(|item| item.id.as_str()), Some("sub"));
        assert!(view.category(&BucketCategory::Armor).unwrap().is_placeholder());
        assert!(view.category(&BucketCategory::General).unwrap().is_placeholder());
        assert!(!view.is_empty());
    }

    #[test]
    fn test_unequipped_items_grouped_after_equipped() {
        let items = vec![
            armor("h1", ArmorBucket::Helmet, 1),
            armor("h2", ArmorBucket::Helmet, 1),
        ];
        let loadout = Loadout::new(
            "Swap",
            vec![
                LoadoutItem::from_item(&items[0], false),
                LoadoutItem::from_item(&items[1], true),
            ],
            vec![],
        );
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());
        let helmet = &view.category(&BucketCategory::Armor).unwrap().slots()[0];
        assert_eq!(helmet.bucket_type, "Helmet");
        assert_eq!(helmet.items.equipped[0].id.as_str(), "h2");
        assert_eq!(helmet.items.unequipped[0].id.as_str(), "h1");
    }

    #[test]
    fn test_empty_armor_with_parameters_links_optimizer() {
        let items: Vec<Item> = Vec::new();
        let mut loadout = loadout_of(&items);
        loadout.parameters = Some(OptimizerParams::default());
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());

        let armor = view.category(&BucketCategory::Armor).unwrap();
        assert!(armor.is_placeholder());
        assert!(armor.opens_in_optimizer);
        assert!(!view.category(&BucketCategory::Weapons).unwrap().opens_in_optimizer);
        assert!(view.is_empty());
    }

    #[test]
    fn test_general_category_order() {
        let items = vec![
            Item::new("ship", 1, BucketInfo::new(hashes::SHIPS, "Ships", BucketCategory::General)),
            Item::new("ghost", 2, BucketInfo::new(hashes::GHOST, "Ghost", BucketCategory::General)),
        ];
        let loadout = loadout_of(&items);
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());
        let general = view.category(&BucketCategory::General).unwrap();
        let order: Vec<&str> = general.slots().iter().map(|s| s.bucket_type.as_str()).collect();
        assert_eq!(order, ["Ghost", "Ships"]);
    }

    #[test]
    fn test_items_outside_displayed_categories_not_empty() {
        let consumable = Item::new(
            "glimmer",
            3,
            BucketInfo::new(1_469_714_392, "Consumables", BucketCategory::from("Inventory")),
        );
        let items = vec![consumable];
        let loadout = loadout_of(&items);
        let view = LoadoutView::build(&loadout, &character(), &items, &BucketCatalog::default());

        assert!(view.categories.iter().all(CategoryView::is_placeholder));
        assert_eq!(view.items.len(), 1);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_armor_override_keeps_canonical_slots() {
        let items = full_inventory();
        let loadout = loadout_of(&items);
        for json in [
            r#"{"categories": {"General": ["Ships"]}}"#,
            r#"{"categories": {"Armor": ["ClassItem", "Leg", "Chest", "Gauntlets", "Helmet"]}}"#,
        ] {
            let catalog = BucketCatalog::from_json(json).unwrap();
            let view = LoadoutView::build(&loadout, &character(), &items, &catalog);
            let armor = view.category(&BucketCategory::Armor).unwrap();
            let order: Vec<&str> = armor.slots().iter().map(|s| s.bucket_type.as_str()).collect();
            assert_eq!(order, ["Helmet", "Gauntlets", "Chest", "Leg", "ClassItem"]);
            assert!(armor.slots().iter().all(|slot| !slot.is_placeholder()));
        }
    }
}
