//! Errors reported by the host world

use thiserror::Error;

use crate::handle::ActorId;

/// Host world errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorldError {
    /// Actor is not (or no longer) present
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The host refused to create an object
    #[error("Failed to instantiate '{definition}': {reason}")]
    InstantiateFailed { definition: String, reason: String },

    /// Inventory could not take the items
    #[error("Inventory of {0} is full")]
    InventoryFull(ActorId),
}

/// Result type for world operations
pub type Result<T> = std::result::Result<T, WorldError>;
