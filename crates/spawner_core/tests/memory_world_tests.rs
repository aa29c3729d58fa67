//! The in-memory host used through the `World` trait object

use spawner_core::memory::MemoryWorld;
use spawner_core::{Definition, Instance, MessageKind, Placement, World};

fn spawn_rock(world: &mut dyn World) -> spawner_core::ObjectHandle {
    let rock = world.definition("Rock").unwrap();
    world
        .instantiate(&rock, &Instance::Generic, Placement::at([1.0, 2.0, 3.0]))
        .unwrap()
}

#[test]
fn test_stale_handle_after_slot_reuse() {
    let mut world = MemoryWorld::new().with_definition(Definition::new("Rock"));
    let first = spawn_rock(&mut world);
    world.remove_externally(first);

    let second = spawn_rock(&mut world);
    assert_eq!(first.index(), second.index());
    assert!(!world.is_owned(first));
    assert!(world.object_name(first).is_none());
    assert!(world.is_owned(second));
}

#[test]
fn test_ownership_release() {
    let mut world = MemoryWorld::new().with_definition(Definition::new("Rock"));
    let rock = spawn_rock(&mut world);
    world.release_ownership(rock);

    assert!(!world.is_owned(rock));
    assert_eq!(world.object_name(rock).as_deref(), Some("Rock(Clone)"));
}

#[test]
fn test_actor_lookup_and_messages() {
    let mut world = MemoryWorld::new();
    let ragnar = world.add_actor("Ragnar", 10, [0.0; 3]);
    let bjorn = world.add_actor("Bjorn", 11, [4.0, 0.0, 0.0]);
    world.set_local(ragnar);

    let host: &mut dyn World = &mut world;
    assert_eq!(host.local_actor(), Some(ragnar));
    assert_eq!(host.find_actor("Bjorn"), Some(bjorn));
    assert_eq!(host.find_actor("Ivar"), None);
    assert_eq!(host.identity(bjorn).unwrap().name, "Bjorn");
    assert_eq!(host.transform(bjorn).unwrap().ahead(2.0, 0.0), [4.0, 0.0, 2.0]);

    host.show_message(MessageKind::TopLeft, "one");
    host.show_message(MessageKind::Center, "two");
    host.show_message(MessageKind::TopLeft, "three");
    assert_eq!(world.last_message(MessageKind::TopLeft), Some("three"));
    assert_eq!(world.messages().len(), 3);
}
