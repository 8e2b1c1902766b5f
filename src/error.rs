//! Error types for loadout construction and persistence.
//!
//! Grouping and aggregation are total functions and never fail. The
//! constructors that enforce an invariant, and the loadout repository,
//! report problems through the `LoadoutError` enum.

use crate::bucket::ArmorBucket;
use crate::item::ItemId;
use crate::loadout::LoadoutId;
use thiserror::Error;

/// Errors raised while building constrained values or touching saved loadouts.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{LoadoutError, ArmorBucket};
///
/// let err = LoadoutError::EmptyBucket(ArmorBucket::Legs);
/// assert_eq!(err.to_string(), "No items supplied for bucket: legs");
/// ```
#[derive(Debug, Error)]
pub enum LoadoutError {
    /// A range was built with `min > max`.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },

    /// An armor set was built with no item for a bucket.
    #[error("No items supplied for bucket: {0}")]
    EmptyBucket(ArmorBucket),

    /// An item was placed in a bucket it does not belong to.
    #[error("Item {item} does not belong in bucket {bucket}")]
    WrongBucket { bucket: ArmorBucket, item: ItemId },

    /// Two items in the same bucket list have different stat vectors.
    #[error("Item {item} is not interchangeable with the other {bucket} items")]
    NotInterchangeable { bucket: ArmorBucket, item: ItemId },

    /// A stored exotic lock used a negative value that is not a known marker.
    #[error("Invalid exotic lock value: {0}")]
    InvalidExoticLock(i64),

    /// No saved loadout has the requested id.
    #[error("Unknown loadout: {0}")]
    UnknownLoadout(LoadoutId),

    /// Reading or writing JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
