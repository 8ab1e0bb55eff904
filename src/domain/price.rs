use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price is empty")]
    Empty,
    #[error("Malformed price: {0:?}")]
    Malformed(String),
}

/// Parses a currency-prefixed decimal such as `"$12.50"` into its numeric value.
///
/// Exactly one leading character is treated as the currency symbol and dropped,
/// whatever it is. The remainder must be a finite decimal. Signs and exponents
/// (`"$-1"`, `"$1e3"`) are accepted; callers needing a non-negative amount
/// check for it themselves.
pub fn parse_price(raw: &str) -> Result<f64, PriceError> {
    let mut chars = raw.chars();
    if chars.next().is_none() {
        return Err(PriceError::Empty);
    }
    let amount = chars.as_str();
    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PriceError::Malformed(raw.to_string())),
    }
}
