use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),

    #[error("Too many decimals: {found}, max {max}")]
    TooManyDecimals { found: usize, max: usize },

    #[error("Amount overflow")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid hex string")]
    InvalidHex,

    #[error("Invalid address length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}
