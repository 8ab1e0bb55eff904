//! Client handles for talking to actors.

mod macros;
pub mod cache_client;

pub use cache_client::*;
