use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};
use crate::cache_actor::{CacheError, CacheRequest};
use crate::domain::{Catalog, SupplierId};

/// Handle to the [`crate::cache_actor::CacheActor`]. Cheap to clone.
#[derive(Clone)]
pub struct CacheClient {
    sender: mpsc::UnboundedSender<CacheRequest>,
}

impl CacheClient {
    pub fn new(sender: mpsc::UnboundedSender<CacheRequest>) -> Self {
        Self { sender }
    }

    /// Stores `catalog` as the latest for `supplier` without waiting.
    ///
    /// The write is enqueued immediately, so a later `get_all` on any clone
    /// observes it and writes land in call order.
    #[instrument(fields(supplier = %supplier, records = catalog.len()), skip(self, catalog))]
    pub fn put(&self, supplier: SupplierId, catalog: Catalog) {
        match self.sender.send(CacheRequest::Put { supplier, catalog }) {
            Ok(()) => debug!("Cache write enqueued"),
            Err(_) => warn!("Cache actor closed, dropping write"),
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CacheError> {
        debug!("Sending shutdown");
        self.sender
            .send(CacheRequest::Shutdown)
            .map_err(|_| CacheError::ActorCommunicationError("Actor closed".to_string()))
    }
}

crate::client_method!(CacheClient => fn get_all() -> std::collections::HashMap<SupplierId, Catalog> as CacheRequest::GetAll, Error = CacheError);

// Test-only message for inspecting actor state.
#[cfg(test)]
crate::client_method!(CacheClient => fn entry_count() -> usize as CacheRequest::EntryCount, Error = CacheError);
