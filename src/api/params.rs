use serde::Deserialize;
use thiserror::Error;
use crate::domain::{parse_price, Query};

/// Malformed requests, rejected before they reach the resolver.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("item not specified")]
    MissingItem,
    #[error("quantity not specified")]
    MissingQuantity,
    #[error("incorrect quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("price not specified")]
    MissingPrice,
    #[error("incorrect price: {0:?}")]
    InvalidPrice(String),
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingItem => "missing_item",
            ValidationError::MissingQuantity => "missing_quantity",
            ValidationError::InvalidQuantity(_) => "invalid_quantity",
            ValidationError::MissingPrice => "missing_price",
            ValidationError::InvalidPrice(_) => "invalid_price",
        }
    }
}

/// Raw query-string parameters as received.
#[derive(Debug, Default, Deserialize)]
pub struct BuyParams {
    pub quantity: Option<String>,
    pub price: Option<String>,
}

pub fn item_query(item: &str) -> Result<Query, ValidationError> {
    let item = item.trim();
    if item.is_empty() {
        return Err(ValidationError::MissingItem);
    }
    Ok(Query::new(item))
}

pub fn quantity_query(item: &str, params: &BuyParams) -> Result<Query, ValidationError> {
    let query = item_query(item)?;
    Ok(query.with_min_quantity(required_quantity(params)?))
}

pub fn quantity_price_query(item: &str, params: &BuyParams) -> Result<Query, ValidationError> {
    let query = quantity_query(item, params)?;
    let price = params.price.as_deref().ok_or(ValidationError::MissingPrice)?;
    match parse_price(price) {
        Ok(amount) if amount >= 0.0 => Ok(query.with_max_price(price)),
        _ => Err(ValidationError::InvalidPrice(price.to_string())),
    }
}

fn required_quantity(params: &BuyParams) -> Result<u32, ValidationError> {
    let raw = params.quantity.as_deref().ok_or(ValidationError::MissingQuantity)?;
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(ValidationError::InvalidQuantity(raw.to_string())),
    }
}
