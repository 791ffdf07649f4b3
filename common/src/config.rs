use serde::{Deserialize, Serialize};

use crate::{
    crypto::Hash,
    nft::{
        validate_breed_uris, validate_metadata_uri, validate_name, validate_symbol, ChanceTable,
        NftResult, VrfRequest,
    },
};

// 8 decimals numbers
pub const COIN_DECIMALS: u8 = 8;
// 100 000 000 to represent 1 coin
pub const COIN_VALUE: u64 = 10u64.pow(COIN_DECIMALS as u32);

// Price of a randomized mint request: 0.01 coin
pub const DEFAULT_MINT_FEE: u64 = COIN_VALUE / 100;

// Random words are reduced into [0, MAX_CHANCE_VALUE) before picking a breed
pub const MAX_CHANCE_VALUE: u64 = 100;
// Cumulative upper bounds: 10% pug, 30% shiba inu, 60% st. bernard
pub const DEFAULT_CHANCE_BOUNDS: [u64; 3] = [10, 40, MAX_CHANCE_VALUE];

// Basic collection (direct mints, one shared token uri)
pub const BASIC_COLLECTION_NAME: &str = "Dogie";
pub const BASIC_COLLECTION_SYMBOL: &str = "DOG";
pub const BASIC_TOKEN_URI: &str =
    "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";

// Randomized collection (paid requests fulfilled with random words)
pub const RANDOM_COLLECTION_NAME: &str = "Random IPFS NFT";
pub const RANDOM_COLLECTION_SYMBOL: &str = "RIN";
// Indexed by breed: pug, shiba inu, st. bernard
pub const DEFAULT_BREED_URIS: [&str; 3] = [
    "ipfs://QmaVkBn2tKmjbhphU7eyztbvSQU5EXDdqRyXZtRhSGgJGo",
    "ipfs://QmYQC5aGZu2PTH8XzbJrbDnvhj3gVs7ya33H9mqUNvST3d",
    "ipfs://QmZYmH5iDbD6v3U2ixoVAjioSzvWJszDzYdbeCLquGSpVm",
];

// Prefix every breed metadata locator must carry
pub const IPFS_URI_PREFIX: &str = "ipfs://";

// Randomness request defaults
pub const DEFAULT_GAS_LANE: Hash = Hash::new([
    0xd8, 0x9b, 0x2b, 0xf1, 0x50, 0xe3, 0xb9, 0xe1, 0x34, 0x46, 0x98, 0x6e, 0x57, 0x1f, 0xb9, 0xca,
    0xb2, 0x4b, 0x13, 0xce, 0xa0, 0xa4, 0x3e, 0xa2, 0x0a, 0x60, 0x49, 0xa8, 0x5c, 0xc8, 0x07, 0xcc,
]);
pub const DEFAULT_SUBSCRIPTION_ID: u64 = 1;
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;
// Only the first word is consumed by a mint
pub const NUM_WORDS: u32 = 1;

/// Deployment parameters of one collection
///
/// Loaded from JSON by the minter; missing fields fall back to the
/// randomized collection defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    /// Minimum payment (atomic units) for a randomized mint request
    pub mint_fee: u64,
    /// Token uri used by direct mints
    pub token_uri: String,
    /// One metadata locator per breed, in breed order
    pub breed_uris: Vec<String>,
    /// Cumulative exclusive upper bounds, one per breed
    pub chance_bounds: Vec<u64>,
    pub vrf: VrfRequest,
}

impl CollectionConfig {
    /// Basic collection: direct mints only
    pub fn basic() -> Self {
        Self {
            name: BASIC_COLLECTION_NAME.to_string(),
            symbol: BASIC_COLLECTION_SYMBOL.to_string(),
            breed_uris: Vec::new(),
            ..Self::randomized()
        }
    }

    /// Randomized collection: paid requests fulfilled with random words
    pub fn randomized() -> Self {
        Self {
            name: RANDOM_COLLECTION_NAME.to_string(),
            symbol: RANDOM_COLLECTION_SYMBOL.to_string(),
            mint_fee: DEFAULT_MINT_FEE,
            token_uri: BASIC_TOKEN_URI.to_string(),
            breed_uris: DEFAULT_BREED_URIS.iter().map(|s| s.to_string()).collect(),
            chance_bounds: DEFAULT_CHANCE_BOUNDS.to_vec(),
            vrf: VrfRequest::default(),
        }
    }

    /// Check every field before a coordinator is built from it
    pub fn validate(&self) -> NftResult<()> {
        validate_name(&self.name)?;
        validate_symbol(&self.symbol)?;
        validate_metadata_uri(&self.token_uri)?;
        validate_breed_uris(&self.breed_uris)?;
        self.chance_table()?;
        Ok(())
    }

    pub fn chance_table(&self) -> NftResult<ChanceTable> {
        ChanceTable::from_bounds(&self.chance_bounds)
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::randomized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nft::NftError;

    #[test]
    fn test_presets_are_valid() {
        assert!(CollectionConfig::basic().validate().is_ok());
        assert!(CollectionConfig::randomized().validate().is_ok());
    }

    #[test]
    fn test_preset_identity() {
        let basic = CollectionConfig::basic();
        assert_eq!(basic.name, "Dogie");
        assert_eq!(basic.symbol, "DOG");
        assert!(basic.breed_uris.is_empty());

        let random = CollectionConfig::randomized();
        assert_eq!(random.mint_fee, DEFAULT_MINT_FEE);
        assert_eq!(random.breed_uris.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CollectionConfig =
            serde_json::from_str(r#"{ "name": "Cats", "symbol": "CAT", "mint_fee": 5 }"#)
                .unwrap();
        assert_eq!(config.name, "Cats");
        assert_eq!(config.mint_fee, 5);
        assert_eq!(config.chance_bounds, DEFAULT_CHANCE_BOUNDS.to_vec());
        assert_eq!(config.vrf, VrfRequest::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut config = CollectionConfig::randomized();
        config.symbol = "dog".to_string();
        assert_eq!(config.validate(), Err(NftError::SymbolInvalidChar));

        let mut config = CollectionConfig::randomized();
        config.breed_uris[1] = "https://example.com/1.json".to_string();
        assert_eq!(config.validate(), Err(NftError::InvalidUri));

        let mut config = CollectionConfig::randomized();
        config.chance_bounds = vec![40, 10, 100];
        assert_eq!(config.validate(), Err(NftError::InvalidChanceTable));
    }
}
