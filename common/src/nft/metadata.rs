// Token Metadata Locators
// Resolves the uri a minted token points at.

use super::{Breed, NftError, NftResult};

/// Source of token metadata locators
pub trait MetadataStore {
    /// Locator for a randomized token of the given breed
    fn uri_for(&self, breed: Breed) -> NftResult<&str>;

    /// Locator shared by every direct mint
    fn fixed_uri(&self) -> &str;

    /// True once a locator exists for every breed
    fn is_initialized(&self) -> bool;
}

/// Locators fixed at deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticMetadata {
    fixed_uri: String,
    breed_uris: Vec<String>,
}

impl StaticMetadata {
    pub fn new(fixed_uri: String, breed_uris: Vec<String>) -> Self {
        Self {
            fixed_uri,
            breed_uris,
        }
    }

    /// Locator stored at a raw breed index
    pub fn breed_uri(&self, index: usize) -> NftResult<&str> {
        let breed = Breed::from_index(index)?;
        self.uri_for(breed)
    }
}

impl MetadataStore for StaticMetadata {
    fn uri_for(&self, breed: Breed) -> NftResult<&str> {
        self.breed_uris
            .get(breed.index())
            .map(String::as_str)
            .ok_or(NftError::MetadataMissing)
    }

    fn fixed_uri(&self) -> &str {
        &self.fixed_uri
    }

    fn is_initialized(&self) -> bool {
        self.breed_uris.len() >= Breed::ALL.len()
    }
}
