use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::domain::{Catalog, StockRecord, SupplierId};
use super::SupplierError;

// Each supplier reports the same four facts under its own field names.

#[derive(Debug, Deserialize)]
struct FruitRecord {
    id: String,
    name: String,
    price: String,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VegetableRecord {
    product_id: String,
    product_name: String,
    price: String,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GrainRecord {
    item_id: String,
    item_name: String,
    price: String,
    quantity: u32,
}

impl From<FruitRecord> for StockRecord {
    fn from(r: FruitRecord) -> Self {
        StockRecord::new(r.id, r.name, r.price, r.quantity)
    }
}

impl From<VegetableRecord> for StockRecord {
    fn from(r: VegetableRecord) -> Self {
        StockRecord::new(r.product_id, r.product_name, r.price, r.quantity)
    }
}

impl From<GrainRecord> for StockRecord {
    fn from(r: GrainRecord) -> Self {
        StockRecord::new(r.item_id, r.item_name, r.price, r.quantity)
    }
}

fn decode_as<T>(supplier: SupplierId, body: &[u8]) -> Result<Catalog, SupplierError>
where
    T: DeserializeOwned + Into<StockRecord>,
{
    let records: Vec<T> = serde_json::from_slice(body)
        .map_err(|e| SupplierError::Decode(format!("{} supplier: {}", supplier, e)))?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// Decodes a raw supplier response using that supplier's field-name schema.
pub fn decode_catalog(supplier: SupplierId, body: &[u8]) -> Result<Catalog, SupplierError> {
    match supplier {
        SupplierId::Fruit => decode_as::<FruitRecord>(supplier, body),
        SupplierId::Vegetable => decode_as::<VegetableRecord>(supplier, body),
        SupplierId::Grain => decode_as::<GrainRecord>(supplier, body),
    }
}
