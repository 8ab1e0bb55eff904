use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};
use crate::clients::CacheClient;
use crate::domain::{Catalog, SupplierId};

/// Messages understood by [`CacheActor`]. Queries carry a oneshot for the reply.
#[derive(Debug)]
pub enum CacheRequest {
    /// Replace the stored catalog for `supplier`. No reply.
    Put {
        supplier: SupplierId,
        catalog: Catalog,
    },
    GetAll {
        respond_to: oneshot::Sender<HashMap<SupplierId, Catalog>>,
    },
    Shutdown,
    #[cfg(test)]
    EntryCount {
        respond_to: oneshot::Sender<usize>,
    },
}

/// Owns the latest catalog per supplier.
///
/// Every read and write goes through the mailbox and is handled one at a time,
/// so no reader ever sees a half-written catalog. The mailbox is unbounded so
/// writes are never refused or reordered: last writer wins in call order.
/// Only one entry per supplier exists, so a backlog drains quickly.
pub struct CacheActor {
    receiver: mpsc::UnboundedReceiver<CacheRequest>,
    catalogs: HashMap<SupplierId, Catalog>,
}

impl CacheActor {
    pub fn new() -> (Self, CacheClient) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            catalogs: HashMap::new(),
        };
        (actor, CacheClient::new(sender))
    }

    #[instrument(name = "cache_actor", skip(self))]
    pub async fn run(mut self) {
        info!("CacheActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CacheRequest::Put { supplier, catalog } => self.handle_put(supplier, catalog),
                CacheRequest::GetAll { respond_to } => {
                    let _ = respond_to.send(self.catalogs.clone());
                }
                CacheRequest::Shutdown => {
                    info!("CacheActor shutting down");
                    break;
                }
                #[cfg(test)]
                CacheRequest::EntryCount { respond_to } => {
                    let _ = respond_to.send(self.catalogs.len());
                }
            }
        }
        info!("CacheActor stopped");
    }

    #[instrument(fields(supplier = %supplier, records = catalog.len()), skip(self, catalog))]
    fn handle_put(&mut self, supplier: SupplierId, catalog: Catalog) {
        self.catalogs.insert(supplier, catalog);
        debug!("Catalog cached");
    }
}
