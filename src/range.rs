//! Range types for per-stat constraints.
//!
//! `MinMax` is an inclusive range; `MinMaxIgnored` adds a flag that turns
//! the constraint into a no-op. `StatRanges` and `StatFilters` hold one of
//! each per armor stat.

use crate::error::LoadoutError;
use crate::stat::{ArmorStat, ArmorStats, StatMap, MAX_STAT_VALUE};
use serde::{Deserialize, Serialize};

/// Inclusive numeric range with `min <= max`.
///
/// # Examples
///
/// ```rust
/// use loadout_core::MinMax;
///
/// let range = MinMax::new(30, 70).unwrap();
/// assert!(range.contains(30));
/// assert!(range.contains(70));
/// assert!(!range.contains(71));
///
/// assert!(MinMax::new(70, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMinMax")]
pub struct MinMax {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawMinMax {
    min: u32,
    max: u32,
}

impl TryFrom<RawMinMax> for MinMax {
    type Error = LoadoutError;

    fn try_from(raw: RawMinMax) -> Result<Self, Self::Error> {
        MinMax::new(raw.min, raw.max)
    }
}

impl MinMax {
    pub fn new(min: u32, max: u32) -> Result<Self, LoadoutError> {
        if min > max {
            return Err(LoadoutError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range holding a single value.
    pub const fn point(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Smallest range containing both `self` and `value`.
    pub fn widen(&self, value: u32) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// A range that can be switched off.
///
/// When `ignored` is set the filter accepts every value, whatever its bounds.
///
/// # Examples
///
/// ```rust
/// use loadout_core::MinMaxIgnored;
///
/// let filter = MinMaxIgnored::new(50, 100, false).unwrap();
/// assert!(!filter.accepts(20));
///
/// let ignored = filter.ignored();
/// assert!(ignored.accepts(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinMaxIgnored {
    #[serde(flatten)]
    range: MinMax,
    ignored: bool,
}

impl MinMaxIgnored {
    pub fn new(min: u32, max: u32, ignored: bool) -> Result<Self, LoadoutError> {
        Ok(Self {
            range: MinMax::new(min, max)?,
            ignored,
        })
    }

    /// Active filter over `range`.
    pub const fn active(range: MinMax) -> Self {
        Self {
            range,
            ignored: false,
        }
    }

    /// Copy of this filter with the ignore flag set.
    pub const fn ignored(self) -> Self {
        Self {
            range: self.range,
            ignored: true,
        }
    }

    pub const fn range(&self) -> MinMax {
        self.range
    }

    pub const fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub const fn accepts(&self, value: u32) -> bool {
        self.ignored || self.range.contains(value)
    }
}

impl Default for MinMaxIgnored {
    fn default() -> Self {
        Self {
            range: MinMax {
                min: 0,
                max: MAX_STAT_VALUE,
            },
            ignored: false,
        }
    }
}

/// Inclusive range per armor stat.
pub type StatRanges = StatMap<MinMax>;

/// Optional constraint per armor stat.
pub type StatFilters = StatMap<MinMaxIgnored>;

impl StatMap<MinMax> {
    /// Ranges that exactly cover one stat vector.
    pub fn from_stats(stats: &ArmorStats) -> Self {
        stats.map(|_, value| MinMax::point(*value))
    }

    /// Widen every range to include `stats`.
    pub fn observe(&mut self, stats: &ArmorStats) {
        for stat in ArmorStat::ALL {
            self[stat] = self[stat].widen(stats[stat]);
        }
    }

    /// Reachable range across a list of stat vectors, `None` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::{ArmorStat, ArmorStats, StatRanges};
    ///
    /// let sets = [
    ///     ArmorStats::from_array([10, 60, 30, 20, 10, 10]),
    ///     ArmorStats::from_array([30, 40, 30, 20, 10, 12]),
    /// ];
    /// let ranges = StatRanges::spanning(&sets).unwrap();
    /// assert_eq!(ranges[ArmorStat::Mobility].min(), 10);
    /// assert_eq!(ranges[ArmorStat::Mobility].max(), 30);
    /// assert!(StatRanges::spanning(std::iter::empty()).is_none());
    /// ```
    pub fn spanning<'a>(stats: impl IntoIterator<Item = &'a ArmorStats>) -> Option<Self> {
        let mut iter = stats.into_iter();
        let mut ranges = Self::from_stats(iter.next()?);
        for next in iter {
            ranges.observe(next);
        }
        Some(ranges)
    }
}

impl StatMap<MinMaxIgnored> {
    /// Filters that accept everything.
    pub fn unconstrained() -> Self {
        Self::splat(MinMaxIgnored::default().ignored())
    }

    /// Whether every stat of `stats` satisfies its filter.
    pub fn accepts(&self, stats: &ArmorStats) -> bool {
        self.iter().all(|(stat, filter)| filter.accepts(stats[stat]))
    }

    /// Stats whose filter is currently active.
    pub fn active_stats(&self) -> impl Iterator<Item = ArmorStat> + '_ {
        self.iter()
            .filter(|(_, filter)| !filter.is_ignored())
            .map(|(stat, _)| stat)
    }
}
