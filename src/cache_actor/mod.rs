//! Cache Store: the process-local map of supplier to latest catalog, run as an actor.

pub mod actor;
pub mod error;

pub use actor::*;
pub use error::*;
