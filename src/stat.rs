//! Armor stat module.
//!
//! Provides the closed `ArmorStat` enumeration and `StatMap`, a total
//! mapping from every armor stat to a value. `StatMap` is a fixed-size
//! array indexed by the enum, so a missing or extra key cannot exist.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Index, IndexMut};

/// The six armor stats, in display and aggregation order.
///
/// # Examples
///
/// ```rust
/// use loadout_core::ArmorStat;
///
/// assert!(ArmorStat::Mobility < ArmorStat::Strength);
/// assert_eq!(ArmorStat::Intellect.to_string(), "intellect");
/// assert_eq!("recovery".parse::<ArmorStat>().unwrap(), ArmorStat::Recovery);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorStat {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl ArmorStat {
    /// Number of armor stats.
    pub const COUNT: usize = 6;

    /// All stats in canonical order.
    pub const ALL: [ArmorStat; ArmorStat::COUNT] = [
        ArmorStat::Mobility,
        ArmorStat::Resilience,
        ArmorStat::Recovery,
        ArmorStat::Discipline,
        ArmorStat::Intellect,
        ArmorStat::Strength,
    ];

    /// Position of this stat in [`ArmorStat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The game's definition hash for this stat.
    #[must_use]
    pub const fn definition_hash(self) -> u32 {
        match self {
            ArmorStat::Mobility => 2_996_146_975,
            ArmorStat::Resilience => 392_767_087,
            ArmorStat::Recovery => 1_943_323_491,
            ArmorStat::Discipline => 1_735_777_505,
            ArmorStat::Intellect => 144_602_215,
            ArmorStat::Strength => 4_244_567_218,
        }
    }

    /// Look up an armor stat by definition hash.
    ///
    /// Returns `None` for any stat that is not one of the six armor stats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::ArmorStat;
    ///
    /// assert_eq!(ArmorStat::from_hash(144_602_215), Some(ArmorStat::Intellect));
    /// assert_eq!(ArmorStat::from_hash(1), None);
    /// ```
    #[must_use]
    pub fn from_hash(hash: u32) -> Option<Self> {
        ArmorStat::ALL.into_iter().find(|stat| stat.definition_hash() == hash)
    }
}

/// A value for every armor stat.
///
/// # Examples
///
/// ```rust
/// use loadout_core::{ArmorStat, StatMap};
///
/// let mut map = StatMap::splat(0u32);
/// map[ArmorStat::Recovery] = 20;
/// assert_eq!(map.get(ArmorStat::Recovery), &20);
/// assert_eq!(map.iter().count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatMap<T>([T; ArmorStat::COUNT]);

impl<T> StatMap<T> {
    /// Build a map by calling `f` once per stat, in canonical order.
    pub fn from_fn(mut f: impl FnMut(ArmorStat) -> T) -> Self {
        Self(std::array::from_fn(|i| f(ArmorStat::ALL[i])))
    }

    /// Build a map from values listed in canonical stat order.
    pub const fn from_array(values: [T; ArmorStat::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, stat: ArmorStat) -> &T {
        &self.0[stat.index()]
    }

    pub fn get_mut(&mut self, stat: ArmorStat) -> &mut T {
        &mut self.0[stat.index()]
    }

    /// Iterate `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ArmorStat, &T)> {
        ArmorStat::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; ArmorStat::COUNT] {
        &self.0
    }

    pub fn map<'s, U>(&'s self, mut f: impl FnMut(ArmorStat, &'s T) -> U) -> StatMap<U> {
        StatMap::from_fn(|stat| f(stat, self.get(stat)))
    }
}

impl<T: Clone> StatMap<T> {
    /// Same value for every stat.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<ArmorStat> for StatMap<T> {
    type Output = T;

    fn index(&self, stat: ArmorStat) -> &T {
        self.get(stat)
    }
}

impl<T> IndexMut<ArmorStat> for StatMap<T> {
    fn index_mut(&mut self, stat: ArmorStat) -> &mut T {
        self.get_mut(stat)
    }
}

/// Summed stat values for a set of armor pieces.
pub type ArmorStats = StatMap<u32>;

/// Highest stat value that still counts toward a tier.
pub const MAX_STAT_VALUE: u32 = 100;

/// Points per stat tier.
pub const STAT_TIER_SIZE: u32 = 10;

impl StatMap<u32> {
    /// Sum of all six stats.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Copy with every value limited to `max`, for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadout_core::{ArmorStat, ArmorStats};
    ///
    /// let stats = ArmorStats::from_array([120, 40, 100, 0, 5, 101]);
    /// let shown = stats.capped(100);
    /// assert_eq!(shown[ArmorStat::Mobility], 100);
    /// assert_eq!(shown[ArmorStat::Resilience], 40);
    /// ```
    pub fn capped(&self, max: u32) -> Self {
        self.map(|_, value| (*value).min(max))
    }

    /// Tier (0 to 10) reached by a stat.
    pub fn tier(&self, stat: ArmorStat) -> u32 {
        (*self.get(stat)).min(MAX_STAT_VALUE) / STAT_TIER_SIZE
    }

    /// Sum of tiers across all stats.
    pub fn total_tier(&self) -> u32 {
        ArmorStat::ALL.into_iter().map(|stat| self.tier(stat)).sum()
    }
}

impl Add for StatMap<u32> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        StatMap::from_fn(|stat| self[stat] + rhs[stat])
    }
}

impl<'a> Add<&'a StatMap<u32>> for StatMap<u32> {
    type Output = Self;

    fn add(self, rhs: &'a StatMap<u32>) -> Self {
        self + *rhs
    }
}

impl Sum for StatMap<u32> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, stats| acc + stats)
    }
}

impl<'a> Sum<&'a StatMap<u32>> for StatMap<u32> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, stats| acc + stats)
    }
}
