//! Loadout page example: build a character, assemble the page and walk
//! each loadout row.
//!
//! This example demonstrates:
//! - Building armor pieces and a character inventory
//! - Assembling the loadouts page (generated + saved loadouts)
//! - Building loadout row views with bucket slots and stat summaries
//! - Checking a stat mix against filters
//! - Deleting a saved loadout with confirmation

use loadout_core::bucket::hashes;
use loadout_core::*;

fn main() -> Result<(), LoadoutError> {
    let armor_stats = [
        [2, 10, 20, 2, 2, 14],
        [10, 2, 16, 6, 2, 14],
        [2, 16, 10, 14, 2, 6],
        [6, 10, 20, 2, 6, 10],
        [0, 0, 0, 0, 0, 0],
    ];

    let mut items: Vec<Item> = ArmorBucket::ALL
        .iter()
        .map(|&bucket| {
            Item::armor(
                format!("{bucket}-1"),
                1000 + bucket.index() as u32,
                bucket,
                StatMap::from_array(armor_stats[bucket.index()]),
            )
            .with_name(format!("Legendary {bucket}"))
            .with_class(ClassType::Warlock)
            .with_equipped(true)
            .with_power(1810)
        })
        .collect();
    items.push(
        Item::new(
            "kinetic-1",
            2000,
            BucketInfo::new(hashes::KINETIC_WEAPONS, "KineticSlot", BucketCategory::Weapons),
        )
        .with_equipped(true)
        .with_power(1815),
    );
    items.push(Item::armor(
        "helmet-2",
        1000,
        ArmorBucket::Helmet,
        StatMap::from_array([20, 2, 2, 10, 10, 2]),
    ));

    let character = Character {
        id: "warlock".to_string(),
        class_type: ClassType::Warlock,
        items: items.clone(),
    };
    let catalog = BucketCatalog::default();

    // Save one loadout that swaps in the spare helmet
    let mut store = InMemoryLoadouts::new();
    let mut raid = Loadout::new(
        "Raid",
        items
            .iter()
            .filter(|item| item.armor_bucket().is_some() && item.id.as_str() != "helmet-1")
            .map(|item| LoadoutItem::from_item(item, true))
            .collect(),
        vec![],
    );
    raid.class_type = ClassType::Warlock;
    raid.last_updated_at = Some(1_700_000_000_000);
    let raid_id = raid.id.clone();
    store.save(raid);

    let page = LoadoutsPage::assemble(&character, &catalog, &store.all(), GeneratedLoadouts::default());

    println!("=== Loadouts ===");
    for entry in &page.entries {
        let view = LoadoutView::build(&entry.loadout, &character, &character.items, &catalog);
        println!(
            "\n{} ({})",
            entry.loadout.name,
            if entry.saved { "saved" } else { "generated" }
        );
        if let Some(power) = view.power {
            println!("  Power: {power}");
        }
        for category in &view.categories {
            if category.is_placeholder() {
                println!("  {}: (empty)", category.category);
                continue;
            }
            println!("  {}:", category.category);
            for slot in category.slots() {
                let names: Vec<&str> = slot
                    .items
                    .equipped
                    .iter()
                    .chain(&slot.items.unequipped)
                    .map(|item| item.id.as_str())
                    .collect();
                println!("    {:<10} {:?}", slot.bucket_type, names);
            }
            if let Some(stats) = category.stat_summary {
                for (stat, value) in stats.iter() {
                    println!("    {stat:<10} {value:>3} (tier {})", stats.tier(stat));
                }
            }
        }
    }

    // Check the equipped mix against a recovery filter
    let by_bucket = classify(items.iter().filter(|item| item.equipped));
    let selection = BucketMap::from_fn(|bucket| by_bucket[bucket][0]);
    let stats = aggregate(&selection);

    let mut filters = StatFilters::unconstrained();
    filters[ArmorStat::Recovery] = MinMaxIgnored::new(60, 100, false)?;
    println!(
        "\nEquipped recovery {} meets filter: {}",
        stats[ArmorStat::Recovery],
        filters.accepts(&stats)
    );

    let deleted = confirm_and_delete(&mut store, &raid_id, |prompt| {
        println!("\n{prompt} yes");
        true
    })?;
    println!("Deleted: {deleted}, remaining saved loadouts: {}", store.len());

    Ok(())
}
