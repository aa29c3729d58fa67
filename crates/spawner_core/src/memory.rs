//! In-memory reference host
//!
//! `MemoryWorld` implements [`World`] without a game attached. It records
//! every instantiation, destruction, inventory insertion and message so
//! tests and the headless binary can inspect what the spawner did.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::definition::{Definition, Instance, ItemData, Placement, PlayerIdentity, Recipe};
use crate::error::{Result, WorldError};
use crate::handle::{ActorId, ObjectHandle, ObjectMap, PlayerId};
use crate::world::{ActorTransform, MessageKind, PlayerDirectory, World};

/// Suffix the host appends to instance names
pub const INSTANCE_SUFFIX: &str = "(Clone)";

/// An object created through the world
#[derive(Debug, Clone)]
pub struct MemoryObject {
    pub definition: String,
    pub name: String,
    pub instance: Instance,
    pub placement: Placement,
    /// Owned by the local user
    pub owned: bool,
}

/// A player character
#[derive(Debug, Clone)]
pub struct MemoryActor {
    pub identity: PlayerIdentity,
    pub transform: ActorTransform,
    pub inventory: Vec<(String, ItemData)>,
    /// Maximum inventory entries (None = unlimited)
    pub inventory_capacity: Option<usize>,
}

/// Connected-player list shared with background threads
#[derive(Debug, Clone, Default)]
pub struct SharedPlayers {
    names: Arc<RwLock<Option<Vec<String>>>>,
}

impl SharedPlayers {
    /// Replace the connected list (`None` = not connected)
    pub fn set(&self, names: Option<Vec<String>>) {
        *self.names.write() = names;
    }

    fn push(&self, name: &str) {
        self.names
            .write()
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
    }

    fn remove(&self, name: &str) {
        if let Some(names) = self.names.write().as_mut() {
            names.retain(|n| n != name);
        }
    }
}

impl PlayerDirectory for SharedPlayers {
    fn connected_players(&self) -> Option<Vec<String>> {
        self.names.read().clone()
    }
}

/// In-memory world
pub struct MemoryWorld {
    definitions: Vec<Definition>,
    index: HashMap<String, usize>,
    loaded: bool,
    objects: ObjectMap<MemoryObject>,
    actors: Vec<MemoryActor>,
    local: Option<ActorId>,
    recipes: Vec<Recipe>,
    messages: Vec<(MessageKind, String)>,
    destroyed: Vec<ObjectHandle>,
    fail_after: Option<usize>,
    instantiated: usize,
    players: SharedPlayers,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWorld {
    /// Create an empty, loaded world
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            index: HashMap::new(),
            loaded: true,
            objects: ObjectMap::new(),
            actors: Vec::new(),
            local: None,
            recipes: Vec::new(),
            messages: Vec::new(),
            destroyed: Vec::new(),
            fail_after: None,
            instantiated: 0,
            players: SharedPlayers::default(),
        }
    }

    /// Builder form of [`add_definition`](Self::add_definition)
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.add_definition(definition);
        self
    }

    /// Register a definition; a later definition with the same name replaces it
    pub fn add_definition(&mut self, definition: Definition) {
        if let Some(&i) = self.index.get(&definition.name) {
            self.definitions[i] = definition;
        } else {
            self.index.insert(definition.name.clone(), self.definitions.len());
            self.definitions.push(definition);
        }
    }

    /// Toggle whether assets count as loaded
    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    /// Add a connected player character
    pub fn add_actor(&mut self, name: impl Into<String>, id: i64, position: [f32; 3]) -> ActorId {
        let name = name.into();
        self.players.push(&name);
        self.actors.push(MemoryActor {
            identity: PlayerIdentity {
                id: PlayerId(id),
                name,
            },
            transform: ActorTransform {
                position,
                forward: [0.0, 0.0, 1.0],
            },
            inventory: Vec::new(),
            inventory_capacity: None,
        });
        ActorId(self.actors.len() as u32 - 1)
    }

    /// Mark an actor as controlled by the local user
    pub fn set_local(&mut self, actor: ActorId) {
        self.local = Some(actor);
    }

    /// Drop a player from the connected list (the actor stays resolvable)
    pub fn disconnect(&mut self, name: &str) {
        self.players.remove(name);
    }

    /// Add a recipe to the active set
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Make every instantiation after the first `count` fail
    pub fn fail_instantiate_after(&mut self, count: usize) {
        self.fail_after = Some(count);
    }

    /// Limit an actor's inventory
    pub fn set_inventory_capacity(&mut self, actor: ActorId, capacity: usize) {
        if let Some(a) = self.actors.get_mut(actor.0 as usize) {
            a.inventory_capacity = Some(capacity);
        }
    }

    /// Hand ownership of an object to some other user
    pub fn release_ownership(&mut self, handle: ObjectHandle) {
        if let Some(obj) = self.objects.get_mut(handle) {
            obj.owned = false;
        }
    }

    /// Remove an object without going through `destroy` (someone else did it)
    pub fn remove_externally(&mut self, handle: ObjectHandle) -> Option<MemoryObject> {
        self.objects.remove(handle)
    }

    /// Shared connected-player list
    pub fn players(&self) -> SharedPlayers {
        self.players.clone()
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&MemoryObject> {
        self.objects.get(handle)
    }

    /// Live objects
    pub fn objects(&self) -> impl Iterator<Item = (ObjectHandle, &MemoryObject)> {
        self.objects.iter()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Handles passed to `destroy`, in call order
    pub fn destroyed(&self) -> &[ObjectHandle] {
        &self.destroyed
    }

    pub fn actor(&self, actor: ActorId) -> Option<&MemoryActor> {
        self.actors.get(actor.0 as usize)
    }

    /// Every message shown so far
    pub fn messages(&self) -> &[(MessageKind, String)] {
        &self.messages
    }

    /// Most recent message on a channel
    pub fn last_message(&self, kind: MessageKind) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
    }
}

impl World for MemoryWorld {
    fn catalog_entries(&self) -> Option<Vec<(String, String)>> {
        if !self.loaded {
            return None;
        }
        Some(
            self.definitions
                .iter()
                .map(|d| (d.name.clone(), d.localized_name.clone()))
                .collect(),
        )
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn definition(&self, name: &str) -> Option<Definition> {
        if !self.loaded {
            return None;
        }
        self.index.get(name).map(|&i| self.definitions[i].clone())
    }

    fn instantiate(
        &mut self,
        definition: &Definition,
        instance: &Instance,
        placement: Placement,
    ) -> Result<ObjectHandle> {
        if let Some(limit) = self.fail_after {
            if self.instantiated >= limit {
                return Err(WorldError::InstantiateFailed {
                    definition: definition.name.clone(),
                    reason: "injected failure".to_string(),
                });
            }
        }
        self.instantiated += 1;

        Ok(self.objects.insert(MemoryObject {
            definition: definition.name.clone(),
            name: format!("{}{}", definition.name, INSTANCE_SUFFIX),
            instance: instance.clone(),
            placement,
            owned: true,
        }))
    }

    fn destroy(&mut self, handle: ObjectHandle) {
        self.destroyed.push(handle);
        self.objects.remove(handle);
    }

    fn is_owned(&self, handle: ObjectHandle) -> bool {
        self.objects.get(handle).map(|o| o.owned).unwrap_or(false)
    }

    fn object_name(&self, handle: ObjectHandle) -> Option<String> {
        self.objects.get(handle).map(|o| o.name.clone())
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn local_actor(&self) -> Option<ActorId> {
        self.local
    }

    fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.actors
            .iter()
            .position(|a| a.identity.name == name)
            .map(|i| ActorId(i as u32))
    }

    fn identity(&self, actor: ActorId) -> Option<PlayerIdentity> {
        self.actor(actor).map(|a| a.identity.clone())
    }

    fn transform(&self, actor: ActorId) -> Option<ActorTransform> {
        self.actor(actor).map(|a| a.transform)
    }

    fn add_to_inventory(&mut self, actor: ActorId, definition: &str, item: &ItemData) -> Result<()> {
        let a = self
            .actors
            .get_mut(actor.0 as usize)
            .ok_or(WorldError::ActorNotFound(actor))?;
        if let Some(capacity) = a.inventory_capacity {
            if a.inventory.len() >= capacity {
                return Err(WorldError::InventoryFull(actor));
            }
        }
        a.inventory.push((definition.to_string(), item.clone()));
        Ok(())
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        log::debug!("[{:?}] {}", kind, text);
        self.messages.push((kind, text.to_string()));
    }
}
