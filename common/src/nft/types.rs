// Randomized Collectible - Core Types
// This module defines the data structures shared by the minting components.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};

use crate::crypto::Address;

use super::error::{NftError, NftResult};

/// Sequential token identifier, starting at 0
pub type TokenId = u64;

// ========================================
// Breed
// ========================================

/// Trait assigned to a randomized token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Breed {
    Pug = 0,
    ShibaInu = 1,
    StBernard = 2,
}

/// Number of breeds, and of metadata locators a randomized collection needs
pub const BREED_COUNT: usize = 3;

impl Breed {
    /// All breeds in chance-table order
    pub const ALL: [Breed; BREED_COUNT] = [Breed::Pug, Breed::ShibaInu, Breed::StBernard];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> NftResult<Self> {
        Self::ALL.get(index).copied().ok_or(NftError::InvalidBreed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Breed::Pug => "pug",
            Breed::ShibaInu => "shiba-inu",
            Breed::StBernard => "st-bernard",
        }
    }
}

impl Display for Breed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name())
    }
}

// ========================================
// Request Id
// ========================================

/// Opaque identifier of a randomness request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(U256);

impl RequestId {
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &U256 {
        &self.0
    }
}

impl From<u64> for RequestId {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

// ========================================
// Token
// ========================================

/// A minted token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub owner: Address,
    /// None for direct mints, which all share the fixed uri
    pub breed: Option<Breed>,
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_index_roundtrip() {
        for (i, breed) in Breed::ALL.iter().enumerate() {
            assert_eq!(breed.index(), i);
            assert_eq!(Breed::from_index(i), Ok(*breed));
        }
        assert_eq!(Breed::from_index(BREED_COUNT), Err(NftError::InvalidBreed));
    }

    #[test]
    fn test_breed_serde_names() {
        let json = serde_json::to_string(&Breed::ShibaInu).unwrap();
        assert_eq!(json, "\"shiba_inu\"");
        let back: Breed = serde_json::from_str("\"st_bernard\"").unwrap();
        assert_eq!(back, Breed::StBernard);
    }

    #[test]
    fn test_request_id_display() {
        assert_eq!(RequestId::from(42).to_string(), "42");
    }
}
