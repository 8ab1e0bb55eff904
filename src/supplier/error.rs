use thiserror::Error;

/// Failures reaching or decoding one supplier. Never fatal to a resolution.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplierError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Decode error: {0}")]
    Decode(String),
}
