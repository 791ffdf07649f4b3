// Randomized Collectible - Error Codes
// This module defines all error codes for minting operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Request / fulfillment errors
// - 100-199: Token errors
// - 200-299: Trait (breed) errors
// - 300-399: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Mint operation result type
pub type NftResult<T> = Result<T, NftError>;

/// Mint error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum NftError {
    // ========================================
    // Request errors (1-99)
    // ========================================
    #[error("Payment is below the mint fee")]
    NeedMoreFunds = 1,

    #[error("Request id is already tracked")]
    DuplicateRequest = 2,

    #[error("Request id is not tracked")]
    UnknownRequest = 3,

    #[error("Fulfillment carried no random words")]
    MissingRandomWords = 4,

    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    #[error("Token already exists")]
    TokenAlreadyExists = 101,

    // ========================================
    // Trait errors (200-299)
    // ========================================
    #[error("Modded value is outside the chance table")]
    RangeOutOfBounds = 200,

    #[error("Invalid chance table")]
    InvalidChanceTable = 201,

    #[error("Invalid breed index")]
    InvalidBreed = 202,

    #[error("Breed metadata is not initialized")]
    MetadataMissing = 203,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Name too long")]
    NameTooLong = 300,

    #[error("Symbol too long")]
    SymbolTooLong = 301,

    #[error("Invalid symbol character")]
    SymbolInvalidChar = 302,

    #[error("URI too long")]
    UriTooLong = 303,

    #[error("Invalid name")]
    InvalidName = 304,

    #[error("Invalid URI")]
    InvalidUri = 305,

    #[error("Invalid symbol")]
    InvalidSymbol = 306,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Internal error")]
    Internal = 999,
}

impl NftError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::NeedMoreFunds),
            2 => Some(Self::DuplicateRequest),
            3 => Some(Self::UnknownRequest),
            4 => Some(Self::MissingRandomWords),
            100 => Some(Self::TokenNotFound),
            101 => Some(Self::TokenAlreadyExists),
            200 => Some(Self::RangeOutOfBounds),
            201 => Some(Self::InvalidChanceTable),
            202 => Some(Self::InvalidBreed),
            203 => Some(Self::MetadataMissing),
            300 => Some(Self::NameTooLong),
            301 => Some(Self::SymbolTooLong),
            302 => Some(Self::SymbolInvalidChar),
            303 => Some(Self::UriTooLong),
            304 => Some(Self::InvalidName),
            305 => Some(Self::InvalidUri),
            306 => Some(Self::InvalidSymbol),
            900 => Some(Self::Overflow),
            999 => Some(Self::Internal),
            _ => None,
        }
    }
}
