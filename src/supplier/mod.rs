//! Upstream supplier access: raw transport, per-supplier schemas, and the
//! [`SupplierClient`] adapter the resolvers call.

pub mod client;
pub mod error;
pub mod schema;
pub mod transport;

pub use client::*;
pub use error::*;
pub use schema::*;
pub use transport::*;
