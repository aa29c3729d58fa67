//! Turning a spawn request into world objects

use spawner_core::{
    ActorId, Capability, Definition, Instance, ItemData, ItemTemplate, MessageKind, Placement,
    World,
};

use crate::crafting::CraftingPolicy;
use crate::error::{SpawnError, SpawnResult};
use crate::stack::StackPlan;
use crate::undo::{SpawnRecord, UndoLog};

/// Distance in front of the target where objects appear
pub const SPAWN_DISTANCE: f32 = 2.0;

/// Height added for actors and dropped items
pub const SPAWN_LIFT: f32 = 1.0;

/// One press of the spawn button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Definition name
    pub definition: String,
    /// Actor to spawn at (and whose inventory receives pickups)
    pub target: ActorId,
    /// Actor whose identity goes on crafted items
    pub requester: ActorId,
    pub amount: u32,
    pub level: u32,
    /// Put items straight into the target's inventory
    pub pickup: bool,
    /// Put the whole amount into one stack
    pub ignore_stack_size: bool,
}

impl SpawnRequest {
    /// Spawn one instance at, and on behalf of, `target`
    pub fn new(definition: impl Into<String>, target: ActorId) -> Self {
        Self {
            definition: definition.into(),
            target,
            requester: target,
            amount: 1,
            level: 1,
            pickup: false,
            ignore_stack_size: false,
        }
    }

    pub fn with_requester(mut self, requester: ActorId) -> Self {
        self.requester = requester;
        self
    }

    /// Set the amount (at least one)
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount.max(1);
        self
    }

    /// Set the level (at least one)
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    pub fn with_pickup(mut self, pickup: bool) -> Self {
        self.pickup = pickup;
        self
    }

    pub fn with_ignore_stack_size(mut self, ignore: bool) -> Self {
        self.ignore_stack_size = ignore;
        self
    }
}

/// What a spawn call did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnOutcome {
    /// Objects created in the world
    pub placed: usize,
    /// Stacks put into an inventory
    pub picked_up: usize,
    /// Instances the host refused
    pub failed: usize,
}

impl SpawnOutcome {
    /// Instances that made it into the game
    pub fn total(&self) -> usize {
        self.placed + self.picked_up
    }
}

/// Resolves definitions by capability and creates their instances
#[derive(Debug, Clone, Default)]
pub struct SpawnEngine {
    policy: CraftingPolicy,
}

impl SpawnEngine {
    pub fn new(policy: CraftingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CraftingPolicy {
        &self.policy
    }

    /// Spawn the requested definition and push a record onto `log`
    ///
    /// Unknown definitions produce a status message and no record. Host
    /// failures for single instances are logged and skipped; what was
    /// already created stays in the world and in the record.
    pub fn spawn(
        &self,
        world: &mut dyn World,
        log: &mut UndoLog,
        request: &SpawnRequest,
    ) -> SpawnResult<SpawnOutcome> {
        log::info!("Trying to spawn {}", request.definition);

        if !world.is_loaded() {
            log::warn!("Cannot spawn {}: definitions are not loaded", request.definition);
            return Err(SpawnError::NotLoaded);
        }
        let Some(definition) = world.definition(&request.definition) else {
            world.show_message(
                MessageKind::TopLeft,
                &format!("{} does not exist", request.definition),
            );
            log::info!("Spawning {} failed", request.definition);
            return Err(SpawnError::NotFound(request.definition.clone()));
        };
        let transform = world
            .transform(request.target)
            .ok_or(SpawnError::ActorNotFound(request.target))?;

        let amount = request.amount.max(1);
        let level = request.level.max(1);

        // Instances are produced one at a time; amounts can be very large.
        let (instances, lift): (Box<dyn Iterator<Item = Instance>>, f32) =
            match definition.capability() {
                Capability::Actor => (
                    Box::new(std::iter::repeat(Instance::Actor { level }).take(amount as usize)),
                    SPAWN_LIFT,
                ),
                Capability::Item(template) => {
                    let data =
                        self.item_data(&*world, &definition, template, request.requester, level);
                    let plan = if request.ignore_stack_size {
                        StackPlan::single(amount)
                    } else if template.equipable {
                        StackPlan::singles(amount)
                    } else {
                        StackPlan::split(amount, template.max_stack)
                    };
                    (
                        Box::new(
                            plan.stacks()
                                .map(move |stack| Instance::Item(data.clone().with_stack(stack))),
                        ),
                        SPAWN_LIFT,
                    )
                }
                Capability::Generic => (
                    Box::new(std::iter::repeat(Instance::Generic).take(amount as usize)),
                    0.0,
                ),
            };

        let placement = Placement::at(transform.ahead(SPAWN_DISTANCE, lift));
        let mut record = SpawnRecord::new();
        let mut outcome = SpawnOutcome::default();

        for instance in instances {
            match &instance {
                Instance::Item(data) if request.pickup => {
                    match world.add_to_inventory(request.target, &definition.name, data) {
                        Ok(()) => outcome.picked_up += 1,
                        Err(err) => {
                            log::warn!("Could not pick up {}: {}", definition.name, err);
                            outcome.failed += 1;
                        }
                    }
                    record.push(None);
                }
                _ => match world.instantiate(&definition, &instance, placement) {
                    Ok(handle) => {
                        record.push(Some(handle));
                        outcome.placed += 1;
                    }
                    Err(err) => {
                        log::warn!("{}", err);
                        outcome.failed += 1;
                    }
                },
            }
        }

        log.push(record);
        world.show_message(
            MessageKind::TopLeft,
            &format!("Spawning {} {}", amount, definition.name),
        );
        log::info!("Spawned {} {}", outcome.total(), definition.name);
        Ok(outcome)
    }

    /// Instance data shared by every stack of one spawn
    fn item_data(
        &self,
        world: &dyn World,
        definition: &Definition,
        template: &ItemTemplate,
        requester: ActorId,
        level: u32,
    ) -> ItemData {
        let mut data = ItemData::from_template(template);
        if template.equipable {
            data.quality = level;
            data.durability = template.max_durability_at(level);
        }
        if self.policy.should_tag(definition, template, world.recipes()) {
            data.crafter = world.identity(requester);
        }
        data
    }
}
