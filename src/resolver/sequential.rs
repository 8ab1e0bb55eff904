use tracing::{debug, info, instrument, warn};
use crate::domain::{Query, StockRecord};
use crate::filter::check_availability;
use super::{check_supplier, OrderResolver};

impl OrderResolver {
    /// Resolves `query` deterministically: cached catalogs first when
    /// `use_cache` is set, then each supplier in priority order, stopping at
    /// the first non-empty match.
    ///
    /// With `use_cache` set, every successful supplier fetch also refreshes
    /// that supplier's cache entry in the background.
    #[instrument(skip(self, query), fields(item = %query.item_name))]
    pub async fn resolve(&self, query: &Query, use_cache: bool) -> Vec<StockRecord> {
        if use_cache {
            match self.cache.get_all().await {
                Ok(cached) => {
                    for (supplier, catalog) in cached {
                        let available = check_availability(&catalog, query);
                        if !available.is_empty() {
                            info!(supplier = %supplier, matches = available.len(), "Resolved from cache");
                            return available;
                        }
                    }
                    debug!("No cached match");
                }
                Err(e) => warn!(error = %e, "Cache unavailable, asking suppliers"),
            }
        }

        for supplier in self.suppliers.iter() {
            let available = check_supplier(supplier, &self.cache, query, use_cache).await;
            if !available.is_empty() {
                info!(supplier = %supplier.id(), matches = available.len(), "Resolved from supplier");
                return available;
            }
        }

        info!("Item not found");
        Vec::new()
    }
}
