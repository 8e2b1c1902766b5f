//! # loadout-core - Armor Set Data Model & Loadout Grouping
//!
//! The data side of a game loadout manager:
//! - **Closed enumerations** for the six armor stats and five armor buckets
//! - **Total maps** (`StatMap`, `BucketMap`) keyed by those enums
//! - **Stat constraints** (`MinMax`, `MinMaxIgnored`) and optimizer inputs
//! - **Armor sets** ("stat mixes") of interchangeable items per bucket
//! - **Classification and grouping** of items for display
//!
//! ## Core Concepts
//!
//! ### Data Flow
//!
//! ```text
//! [items] → classify → [ItemsByBucket] → one item per bucket → aggregate → [ArmorStats]
//!                                                                  ↓
//!                                          [ArmorSet] ← set search (external)
//! ```
//!
//! Everything is a pure function over in-memory snapshots. When the
//! inventory changes, callers simply run the functions again.
//!
//! ## Example
//!
//! ```rust
//! use loadout_core::*;
//!
//! let items: Vec<Item> = ArmorBucket::ALL
//!     .iter()
//!     .map(|&bucket| {
//!         Item::armor(bucket.to_string(), 1, bucket, StatMap::from_array([2, 10, 20, 2, 2, 14]))
//!     })
//!     .collect();
//!
//! let by_bucket = classify(&items);
//! let selection = BucketMap::from_fn(|bucket| by_bucket[bucket][0]);
//! let stats = aggregate(&selection);
//! assert_eq!(stats[ArmorStat::Recovery], 100);
//!
//! let mut filters = StatFilters::unconstrained();
//! filters[ArmorStat::Recovery] = MinMaxIgnored::new(100, 100, false).unwrap();
//! assert!(filters.accepts(&stats));
//! ```
//!
//! ## Modules
//!
//! - [`stat`] - Armor stats and stat maps
//! - [`bucket`] - Armor buckets, categories and bucket maps
//! - [`range`] - Range and filter types
//! - [`item`] - Item entity
//! - [`constraints`] - Optimizer inputs and exotic policy
//! - [`aggregate`] - Stat aggregation
//! - [`armor_set`] - Armor sets and search results
//! - [`classify`] - Bucket classification and equipped grouping
//! - [`catalog`] - Bucket ordering configuration
//! - [`loadout`] - Loadouts and page assembly
//! - [`view`] - Loadout row view model
//! - [`repository`] - Loadout storage and confirmed delete
//! - [`error`] - Error types

pub mod aggregate;
pub mod armor_set;
pub mod bucket;
pub mod catalog;
pub mod classify;
pub mod constraints;
pub mod error;
pub mod item;
pub mod loadout;
pub mod range;
pub mod repository;
pub mod stat;
pub mod view;

// Re-export main types for convenience
pub use error::LoadoutError;
pub use item::{ClassType, Item, ItemId};
pub use stat::{ArmorStat, ArmorStats, StatMap, MAX_STAT_VALUE};
pub use bucket::{ArmorBucket, BucketCategory, BucketInfo, BucketMap};
pub use range::{MinMax, MinMaxIgnored, StatFilters, StatRanges};

// Re-export the grouping and aggregation entry points
pub use aggregate::{aggregate, sum_stats, StatBreakdown};
pub use armor_set::{ArmorSet, ArmorSetResults};
pub use classify::{
    classify, group_for_display, partition_equipped, EquipState, EquippedPartition, ItemsByBucket,
};

// Re-export optimizer inputs
pub use constraints::{
    ExcludedItems, ExoticPolicy, OptimizerParams, PinnedItems, LOCKED_EXOTIC_ANY_EXOTIC,
    LOCKED_EXOTIC_NO_EXOTIC,
};

// Re-export loadout page types
pub use catalog::BucketCatalog;
pub use loadout::{
    saved_for_class, Character, GeneratedLoadouts, Loadout, LoadoutEntry, LoadoutId, LoadoutItem,
    LoadoutsPage,
};
pub use repository::{confirm_and_delete, InMemoryLoadouts, LoadoutRepository};
pub use view::{BucketSlot, CategoryContent, CategoryView, LoadoutView};
