/// One availability question: is `item_name` in stock, optionally in at least
/// `min_quantity` units and at a price no higher than `max_price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub item_name: String,
    pub min_quantity: Option<u32>,
    /// Currency-prefixed decimal, compared after [`super::parse_price`].
    pub max_price: Option<String>,
}

impl Query {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            min_quantity: None,
            max_price: None,
        }
    }

    pub fn with_min_quantity(mut self, quantity: u32) -> Self {
        self.min_quantity = Some(quantity);
        self
    }

    pub fn with_max_price(mut self, price: impl Into<String>) -> Self {
        self.max_price = Some(price.into());
        self
    }
}
