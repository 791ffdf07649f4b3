// Collection Input Validation Helpers
// This module provides validation functions for collection configuration.

use crate::config::IPFS_URI_PREFIX;

use super::{NftError, NftResult, BREED_COUNT};

// ========================================
// Protocol Constants
// ========================================

/// Maximum collection name length (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum symbol length (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 8;

/// Maximum metadata URI length (bytes)
pub const MAX_METADATA_URI_LENGTH: usize = 512;

// ========================================
// Collection Validation
// ========================================

/// Validate collection name
pub fn validate_name(name: &str) -> NftResult<()> {
    if name.is_empty() {
        return Err(NftError::InvalidName);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(NftError::NameTooLong);
    }
    Ok(())
}

/// Validate collection symbol
pub fn validate_symbol(symbol: &str) -> NftResult<()> {
    if symbol.is_empty() {
        return Err(NftError::InvalidSymbol);
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(NftError::SymbolTooLong);
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(NftError::SymbolInvalidChar);
    }
    Ok(())
}

/// Validate a metadata URI
pub fn validate_metadata_uri(uri: &str) -> NftResult<()> {
    if uri.is_empty() {
        return Err(NftError::InvalidUri);
    }
    if uri.len() > MAX_METADATA_URI_LENGTH {
        return Err(NftError::UriTooLong);
    }
    Ok(())
}

/// Validate the per-breed metadata locators
///
/// An empty list is allowed (direct-mint collections carry no breeds);
/// otherwise there must be exactly one ipfs locator per breed.
pub fn validate_breed_uris(uris: &[String]) -> NftResult<()> {
    if uris.is_empty() {
        return Ok(());
    }
    if uris.len() != BREED_COUNT {
        return Err(NftError::MetadataMissing);
    }
    for uri in uris {
        validate_metadata_uri(uri)?;
        if !uri.starts_with(IPFS_URI_PREFIX) {
            return Err(NftError::InvalidUri);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BREED_URIS;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Dogie").is_ok());
        assert_eq!(validate_name(""), Err(NftError::InvalidName));
        assert_eq!(
            validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)),
            Err(NftError::NameTooLong)
        );
    }

    #[test]
    fn test_validate_symbol() {
        assert!(validate_symbol("DOG").is_ok());
        assert!(validate_symbol("RIN2").is_ok());
        assert_eq!(validate_symbol(""), Err(NftError::InvalidSymbol));
        assert_eq!(validate_symbol("TOOLONGSYM"), Err(NftError::SymbolTooLong));
        assert_eq!(validate_symbol("D-G"), Err(NftError::SymbolInvalidChar));
    }

    #[test]
    fn test_validate_metadata_uri() {
        assert!(validate_metadata_uri("ipfs://Qm").is_ok());
        assert_eq!(validate_metadata_uri(""), Err(NftError::InvalidUri));
        assert_eq!(
            validate_metadata_uri(&"x".repeat(MAX_METADATA_URI_LENGTH + 1)),
            Err(NftError::UriTooLong)
        );
    }

    #[test]
    fn test_validate_breed_uris() {
        let uris: Vec<String> = DEFAULT_BREED_URIS.iter().map(|s| s.to_string()).collect();
        assert!(validate_breed_uris(&uris).is_ok());
        assert!(validate_breed_uris(&[]).is_ok());
        assert_eq!(
            validate_breed_uris(&uris[..2]),
            Err(NftError::MetadataMissing)
        );

        let mut bad = uris.clone();
        bad[2] = "https://example.com/2.json".to_string();
        assert_eq!(validate_breed_uris(&bad), Err(NftError::InvalidUri));
    }
}
