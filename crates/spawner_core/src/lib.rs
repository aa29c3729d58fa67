//! Spawner Core - Shared Spawner Primitives
//!
//! Types shared by every spawner crate.
//!
//! # Features
//!
//! - Weak object handles and actor ids
//! - Definitions, item templates and per-instance item data
//! - The [`World`] and [`PlayerDirectory`] capability traits the host implements
//! - An in-memory host ([`memory::MemoryWorld`]) for tests and headless runs
//!
//! # Example
//!
//! ```ignore
//! use spawner_core::prelude::*;
//! use spawner_core::memory::MemoryWorld;
//!
//! let mut world = MemoryWorld::new()
//!     .with_definition(Definition::new("Wood").with_item(ItemTemplate::new("$item_wood")));
//! let me = world.add_actor("Ragnar", 1001, [0.0, 0.0, 0.0]);
//! world.set_local(me);
//! ```

pub mod definition;
pub mod error;
pub mod handle;
pub mod memory;
pub mod world;

pub mod prelude {
    pub use crate::definition::{
        Capability, Definition, Instance, ItemData, ItemTemplate, Placement, PlayerIdentity,
        Recipe,
    };
    pub use crate::error::WorldError;
    pub use crate::handle::{ActorId, ObjectHandle, ObjectMap, PlayerId};
    pub use crate::world::{ActorTransform, MessageKind, PlayerDirectory, World};
}

pub use error::Result;
pub use prelude::*;
