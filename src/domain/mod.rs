//! Domain types shared by suppliers, the filter, the cache and the resolvers.

pub mod price;
pub mod query;
pub mod stock;
pub mod supplier_id;

pub use price::*;
pub use query::*;
pub use stock::*;
pub use supplier_id::*;
