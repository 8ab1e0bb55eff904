//! System orchestration: configuration, startup, tracing and shutdown.

pub mod aggregator_system;
pub mod config;
pub mod tracing;

pub use aggregator_system::*;
pub use config::*;
pub use self::tracing::*;
