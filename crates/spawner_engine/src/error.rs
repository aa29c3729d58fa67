//! Spawn errors

use spawner_core::ActorId;
use thiserror::Error;

/// Errors returned by [`SpawnEngine::spawn`](crate::SpawnEngine::spawn)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpawnError {
    /// No definition with this name
    #[error("{0} does not exist")]
    NotFound(String),

    /// The host has not loaded its definitions yet
    #[error("Definitions are not loaded yet")]
    NotLoaded,

    /// The actor to spawn at is gone
    #[error("Spawn target not found: {0}")]
    ActorNotFound(ActorId),
}

/// Result type for spawn operations
pub type SpawnResult<T> = std::result::Result<T, SpawnError>;
