use std::sync::Arc;
use tracing::{info, instrument, warn};
use crate::domain::{Catalog, SupplierId};
use super::{decode_catalog, SupplierError, Transport};

/// Adapter for one upstream supplier: knows its endpoint and its wire schema.
///
/// The resolvers only see `fetch()`, so they work for any number of suppliers.
#[derive(Clone)]
pub struct SupplierClient {
    id: SupplierId,
    url: String,
    transport: Arc<dyn Transport>,
}

impl SupplierClient {
    pub fn new(id: SupplierId, url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            id,
            url: url.into(),
            transport,
        }
    }

    pub fn id(&self) -> SupplierId {
        self.id
    }

    /// Fetches and decodes this supplier's catalog. Errors are returned, not retried.
    #[instrument(skip(self), fields(supplier = %self.id))]
    pub async fn fetch(&self) -> Result<Catalog, SupplierError> {
        let body = self.transport.fetch_bytes(&self.url).await.map_err(|e| {
            warn!(error = %e, "Supplier fetch failed");
            e
        })?;
        let catalog = decode_catalog(self.id, &body).map_err(|e| {
            warn!(error = %e, "Supplier response could not be decoded");
            e
        })?;
        info!(records = catalog.len(), "Catalog fetched");
        Ok(catalog)
    }
}
