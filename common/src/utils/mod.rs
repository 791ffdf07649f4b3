use crate::{
    config::{COIN_DECIMALS, COIN_VALUE},
    error::AmountError,
};

// Format an atomic amount using COIN_DECIMALS decimals
pub fn format_coin(value: u64) -> String {
    format!(
        "{}.{:0width$}",
        value / COIN_VALUE,
        value % COIN_VALUE,
        width = COIN_DECIMALS as usize
    )
}

/// Parse a coin amount ("0.01", "2", "1.5") into atomic units
///
/// Parsing is exact: no floating point is involved, and more than
/// COIN_DECIMALS fractional digits is an error rather than a rounding.
pub fn parse_coin(value: &str) -> Result<u64, AmountError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (value, ""),
    };

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountError::InvalidFormat(value.to_string()));
    }

    let max = COIN_DECIMALS as usize;
    if fraction.len() > max {
        return Err(AmountError::TooManyDecimals {
            found: fraction.len(),
            max,
        });
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| AmountError::Overflow)?
    };

    let mut atomic_fraction = 0u64;
    if !fraction.is_empty() {
        let padded = format!("{:0<width$}", fraction, width = max);
        atomic_fraction = padded
            .parse()
            .map_err(|_| AmountError::InvalidFormat(value.to_string()))?;
    }

    whole
        .checked_mul(COIN_VALUE)
        .and_then(|v| v.checked_add(atomic_fraction))
        .ok_or(AmountError::Overflow)
}
