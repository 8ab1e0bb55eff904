use thiserror::Error;

/// Errors that can occur talking to the cache actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CacheError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
