use serde::{Deserialize, Serialize};

/// A single line of stock as reported by one supplier, normalized to a
/// uniform shape regardless of the supplier's own field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: String,
    pub name: String,
    /// Currency-prefixed decimal, e.g. `"$12.50"`. Kept as decoded.
    pub price: String,
    pub quantity: u32,
}

/// The full stock listing returned by one supplier fetch, in supplier order.
pub type Catalog = Vec<StockRecord>;

impl StockRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            quantity,
        }
    }

    /// Case-insensitive exact comparison against a requested item name.
    pub fn is_named(&self, item_name: &str) -> bool {
        self.name.to_lowercase() == item_name.to_lowercase()
    }
}
