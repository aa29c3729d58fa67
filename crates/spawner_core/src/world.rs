//! Capability traits the spawner consumes from its host
//!
//! The host owns object instantiation, networking and ownership, player
//! state and on-screen messages. The spawner only talks to it through
//! these traits.

use crate::definition::{Definition, Instance, ItemData, Placement, PlayerIdentity, Recipe};
use crate::error::Result;
use crate::handle::{ActorId, ObjectHandle};

/// On-screen message channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Transient status text at the top of the screen
    TopLeft,
    /// Centered summary text
    Center,
}

/// Position and facing of an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorTransform {
    pub position: [f32; 3],
    /// Unit vector the actor is facing
    pub forward: [f32; 3],
}

impl ActorTransform {
    /// Point `distance` in front of the actor, raised by `up`
    pub fn ahead(&self, distance: f32, up: f32) -> [f32; 3] {
        [
            self.position[0] + self.forward[0] * distance,
            self.position[1] + self.forward[1] * distance + up,
            self.position[2] + self.forward[2] * distance,
        ]
    }
}

/// The running game world, as seen from the owner thread
pub trait World {
    /// Names and display names of every spawnable definition, in catalog
    /// order. `None` while the host has not loaded its assets yet.
    fn catalog_entries(&self) -> Option<Vec<(String, String)>>;

    /// Whether the host has loaded its spawnable definitions
    fn is_loaded(&self) -> bool {
        self.catalog_entries().is_some()
    }

    /// Resolve a definition by name
    fn definition(&self, name: &str) -> Option<Definition>;

    /// Create a new object in the world
    fn instantiate(
        &mut self,
        definition: &Definition,
        instance: &Instance,
        placement: Placement,
    ) -> Result<ObjectHandle>;

    /// Request destruction of an object
    fn destroy(&mut self, handle: ObjectHandle);

    /// Whether the object still exists and is owned by the local user
    fn is_owned(&self, handle: ObjectHandle) -> bool;

    /// Instance name of a live object
    fn object_name(&self, handle: ObjectHandle) -> Option<String>;

    /// Active recipe set
    fn recipes(&self) -> &[Recipe];

    /// The actor controlled by the local user, if spawned
    fn local_actor(&self) -> Option<ActorId>;

    /// Find a connected actor by display name
    fn find_actor(&self, name: &str) -> Option<ActorId>;

    /// Player identity of an actor
    fn identity(&self, actor: ActorId) -> Option<PlayerIdentity>;

    /// Position and facing of an actor
    fn transform(&self, actor: ActorId) -> Option<ActorTransform>;

    /// Put items straight into an actor's inventory
    fn add_to_inventory(&mut self, actor: ActorId, definition: &str, item: &ItemData) -> Result<()>;

    /// Show a message to the local user
    fn show_message(&mut self, kind: MessageKind, text: &str);
}

/// Connected-player enumeration, safe to query off the owner thread
pub trait PlayerDirectory: Send + Sync {
    /// Display names of connected players. `None` while not connected.
    fn connected_players(&self) -> Option<Vec<String>>;
}
