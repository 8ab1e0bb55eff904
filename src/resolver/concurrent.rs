use tokio::sync::mpsc;
use tracing::{debug, info, info_span, instrument, Instrument};
use crate::domain::{Query, StockRecord};
use super::{check_supplier, OrderResolver};

impl OrderResolver {
    /// Resolves `query` by asking every supplier at once and returning the
    /// first non-empty match to arrive, whichever supplier it came from.
    ///
    /// Returns as soon as a match arrives; the other supplier tasks keep running
    /// in the background and only their cache writes remain. Not found is
    /// reported once every supplier has answered empty.
    #[instrument(skip(self, query), fields(item = %query.item_name))]
    pub async fn resolve_fast(&self, query: &Query) -> Vec<StockRecord> {
        // Room for every answer, so late tasks never wait on a departed reader.
        let (sender, mut receiver) = mpsc::channel(self.suppliers.len().max(1));

        for supplier in self.suppliers.iter().cloned() {
            let sender = sender.clone();
            let cache = self.cache.clone();
            let query = query.clone();
            let span = info_span!("supplier_task", supplier = %supplier.id());
            tokio::spawn(
                async move {
                    let available = check_supplier(&supplier, &cache, &query, true).await;
                    if sender.send((supplier.id(), available)).await.is_err() {
                        debug!("Result arrived after resolution finished");
                    }
                }
                .instrument(span),
            );
        }
        drop(sender);

        while let Some((supplier, available)) = receiver.recv().await {
            if available.is_empty() {
                debug!(supplier = %supplier, "No match");
                continue;
            }
            info!(supplier = %supplier, matches = available.len(), "Resolved from fastest match");
            return available;
        }

        info!("Item not found");
        Vec::new()
    }
}
