// Breed Chance Table
// Maps a modded random value onto a breed through weighted ranges.
//
// Buckets are stored as cumulative exclusive upper bounds. With the default
// bounds [10, 40, 100]:
// - [0, 10)   -> Pug
// - [10, 40)  -> Shiba Inu
// - [40, 100) -> St. Bernard
// Anything >= 100 is out of range.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CHANCE_BOUNDS;

use super::{Breed, NftError, NftResult};

/// One weighted range of the chance table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceBucket {
    /// Exclusive upper bound; the lower bound is the previous bucket's upper
    pub upper: u64,
    pub breed: Breed,
}

/// Ordered, contiguous and exhaustive buckets covering [0, max_chance_value)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChanceTable {
    buckets: Vec<ChanceBucket>,
}

impl ChanceTable {
    /// Build a table from explicit buckets
    ///
    /// Bounds must be strictly ascending and the first one above zero, so
    /// the ranges start at 0, never overlap and leave no gap.
    pub fn new(buckets: Vec<ChanceBucket>) -> NftResult<Self> {
        if buckets.is_empty() {
            return Err(NftError::InvalidChanceTable);
        }

        let mut lower = 0u64;
        for bucket in &buckets {
            if bucket.upper <= lower {
                return Err(NftError::InvalidChanceTable);
            }
            lower = bucket.upper;
        }

        Ok(Self { buckets })
    }

    /// Build a table from cumulative bounds, one per breed in breed order
    pub fn from_bounds(bounds: &[u64]) -> NftResult<Self> {
        if bounds.len() != Breed::ALL.len() {
            return Err(NftError::InvalidChanceTable);
        }

        let buckets = bounds
            .iter()
            .zip(Breed::ALL)
            .map(|(upper, breed)| ChanceBucket {
                upper: *upper,
                breed,
            })
            .collect();
        Self::new(buckets)
    }

    /// Total covered range N; valid modded values are [0, N)
    pub fn max_chance_value(&self) -> u64 {
        // new() rejects empty tables
        self.buckets.last().map(|b| b.upper).unwrap_or_default()
    }

    /// Cumulative upper bounds in bucket order
    pub fn bounds(&self) -> Vec<u64> {
        self.buckets.iter().map(|b| b.upper).collect()
    }

    pub fn buckets(&self) -> &[ChanceBucket] {
        &self.buckets
    }

    /// Reduce a random word into [0, N)
    pub fn modded_value(&self, random_word: &U256) -> u64 {
        (*random_word % U256::from(self.max_chance_value())).low_u64()
    }

    /// Resolve a modded value to its breed
    ///
    /// Lower bounds are inclusive, upper bounds exclusive, first match wins.
    pub fn resolve(&self, modded_value: u64) -> NftResult<Breed> {
        self.buckets
            .iter()
            .find(|bucket| modded_value < bucket.upper)
            .map(|bucket| bucket.breed)
            .ok_or(NftError::RangeOutOfBounds)
    }
}

impl Default for ChanceTable {
    fn default() -> Self {
        let buckets = DEFAULT_CHANCE_BOUNDS
            .iter()
            .zip(Breed::ALL)
            .map(|(upper, breed)| ChanceBucket {
                upper: *upper,
                breed,
            })
            .collect();
        Self { buckets }
    }
}
