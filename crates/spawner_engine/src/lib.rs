//! Spawner Engine - Spawning and Undo
//!
//! Resolves a definition by capability (actor, item, generic), creates its
//! instances through the host [`World`](spawner_core::World) and remembers
//! what was created so the most recent batch can be undone.
//!
//! # Features
//!
//! - Stack splitting against the item's max stack size
//! - Equipable quality and durability from the requested level
//! - Crafter tags driven by configurable exemption tables
//! - Pickup straight into an inventory
//! - LIFO undo that only destroys live, locally owned objects
//!
//! # Example
//!
//! ```ignore
//! use spawner_engine::prelude::*;
//!
//! let engine = SpawnEngine::default();
//! let mut log = UndoLog::new();
//! engine.spawn(&mut world, &mut log, &SpawnRequest::new("Wood", me).with_amount(23))?;
//! log.undo(&mut world);
//! ```

pub mod crafting;
pub mod error;
pub mod spawn;
pub mod stack;
pub mod undo;

pub mod prelude {
    pub use crate::crafting::CraftingPolicy;
    pub use crate::error::{SpawnError, SpawnResult};
    pub use crate::spawn::{SpawnEngine, SpawnOutcome, SpawnRequest};
    pub use crate::stack::StackPlan;
    pub use crate::undo::{SpawnRecord, UndoLog, UndoResult};
}

pub use prelude::*;
