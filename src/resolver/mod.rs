//! Order resolution: answers a [`Query`] from the cache and the suppliers.
//!
//! Two strategies share the per-supplier step in [`check_supplier`]:
//! - [`OrderResolver::resolve`] walks the cache, then each supplier in priority order.
//! - [`OrderResolver::resolve_fast`] races all suppliers and takes the first match.
//!
//! An empty result means "not found". Supplier failures only ever remove that
//! supplier from consideration.

mod concurrent;
mod sequential;

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{instrument, warn};
use crate::clients::CacheClient;
use crate::domain::{Catalog, Query, StockRecord, SupplierId};
use crate::filter::check_availability;
use crate::supplier::SupplierClient;

/// Resolves availability queries against an ordered list of suppliers and a
/// shared cache.
#[derive(Clone)]
pub struct OrderResolver {
    suppliers: Arc<Vec<SupplierClient>>,
    cache: CacheClient,
}

impl OrderResolver {
    /// `suppliers` are consulted in the given order by the sequential path.
    pub fn new(suppliers: Vec<SupplierClient>, cache: CacheClient) -> Self {
        Self {
            suppliers: Arc::new(suppliers),
            cache,
        }
    }

    /// The current cache contents, for inspection. An unreachable cache reads as empty.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> HashMap<SupplierId, Catalog> {
        match self.cache.get_all().await {
            Ok(catalogs) => catalogs,
            Err(e) => {
                warn!(error = %e, "Cache unavailable for summary");
                HashMap::new()
            }
        }
    }
}

/// Fetches one supplier and filters its catalog.
///
/// A cache-eligible fetch that succeeds is handed to the cache without waiting
/// for the write. A failed fetch counts as no match.
#[instrument(skip(supplier, cache, query), fields(supplier = %supplier.id()))]
async fn check_supplier(
    supplier: &SupplierClient,
    cache: &CacheClient,
    query: &Query,
    cache_eligible: bool,
) -> Vec<StockRecord> {
    match supplier.fetch().await {
        Ok(catalog) => {
            let available = check_availability(&catalog, query);
            if cache_eligible {
                cache.put(supplier.id(), catalog);
            }
            available
        }
        Err(e) => {
            warn!(error = %e, "Skipping supplier");
            Vec::new()
        }
    }
}
