//! Availability filter: name, quantity and price predicates over one catalog.

use tracing::{debug, warn};
use crate::domain::{parse_price, Query, StockRecord};

/// Returns the records of `catalog` that satisfy `query`, in catalog order.
///
/// A record matches when its name equals the requested item ignoring case and,
/// where the query sets them, it holds at least `min_quantity` units and its
/// price is no higher than `max_price`. A price that cannot be parsed excludes
/// the record and is logged; the scan carries on.
pub fn check_availability(catalog: &[StockRecord], query: &Query) -> Vec<StockRecord> {
    let mut available = Vec::new();

    for record in catalog.iter().filter(|r| r.is_named(&query.item_name)) {
        if let Some(min_quantity) = query.min_quantity {
            if record.quantity < min_quantity {
                debug!(id = %record.id, quantity = record.quantity, min_quantity, "Insufficient quantity");
                continue;
            }
        }
        if let Some(max_price) = query.max_price.as_deref() {
            if !within_price(max_price, record) {
                continue;
            }
        }
        available.push(record.clone());
    }

    available
}

fn within_price(max_price: &str, record: &StockRecord) -> bool {
    let requested = match parse_price(max_price) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Failed to parse requested price");
            return false;
        }
    };
    let offered = match parse_price(&record.price) {
        Ok(value) => value,
        Err(e) => {
            warn!(id = %record.id, error = %e, "Failed to parse supplier price");
            return false;
        }
    };
    requested >= offered
}
