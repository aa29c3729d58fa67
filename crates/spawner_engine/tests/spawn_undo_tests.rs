//! Spawn and undo against the in-memory host

use spawner_core::memory::MemoryWorld;
use spawner_core::{ActorId, Definition, Instance, ItemTemplate, MessageKind, Recipe, World};
use spawner_engine::prelude::*;

fn setup() -> (MemoryWorld, ActorId) {
    let mut world = MemoryWorld::new()
        .with_definition(Definition::new("Greydwarf").character())
        .with_definition(Definition::new("Stone").with_item(ItemTemplate::new("$item_stone").with_max_stack(10)))
        .with_definition(Definition::new("Resin").with_item(ItemTemplate::new("$item_resin").with_max_stack(0)))
        .with_definition(
            Definition::new("FishingBait")
                .with_item(ItemTemplate::new("$item_fishingbait").with_max_stack(100)),
        )
        .with_definition(
            Definition::new("MeadHealthMinor")
                .with_item(ItemTemplate::new("$item_mead_hp_minor").with_max_stack(10)),
        )
        .with_definition(Definition::new("Beehive"));
    world.add_recipe(Recipe::new("Recipe_FishingBait", "FishingBait"));
    world.add_recipe(Recipe::new("Recipe_PotionHealthMinor", "MeadHealthMinor"));
    let me = world.add_actor("Ragnar", 1001, [5.0, 0.0, 5.0]);
    world.set_local(me);
    (world, me)
}

fn item_stacks(world: &MemoryWorld) -> Vec<u32> {
    let mut stacks: Vec<u32> = world
        .objects()
        .filter_map(|(_, o)| match &o.instance {
            Instance::Item(data) => Some(data.stack),
            _ => None,
        })
        .collect();
    stacks.sort_unstable_by(|a, b| b.cmp(a));
    stacks
}

#[test]
fn test_stack_split_ten_ten_three() {
    let (mut world, me) = setup();
    let mut log = UndoLog::new();
    SpawnEngine::default()
        .spawn(&mut world, &mut log, &SpawnRequest::new("Stone", me).with_amount(23))
        .unwrap();
    assert_eq!(item_stacks(&world), vec![10, 10, 3]);
}

#[test]
fn test_zero_max_stack_gives_singles() {
    let (mut world, me) = setup();
    let mut log = UndoLog::new();
    SpawnEngine::default()
        .spawn(&mut world, &mut log, &SpawnRequest::new("Resin", me).with_amount(5))
        .unwrap();
    assert_eq!(item_stacks(&world), vec![1; 5]);
}

#[test]
fn test_definition_unchanged_by_spawn() {
    let (mut world, me) = setup();
    let before = world.definition("Stone").unwrap();
    let mut log = UndoLog::new();
    SpawnEngine::default()
        .spawn(&mut world, &mut log, &SpawnRequest::new("Stone", me).with_amount(23).with_level(4))
        .unwrap();
    assert_eq!(world.definition("Stone").unwrap(), before);
}

#[test]
fn test_spawn_then_undo_destroys_each_object_once() {
    let (mut world, me) = setup();
    let engine = SpawnEngine::default();
    let mut log = UndoLog::new();

    engine
        .spawn(&mut world, &mut log, &SpawnRequest::new("Greydwarf", me).with_amount(4))
        .unwrap();
    engine
        .spawn(&mut world, &mut log, &SpawnRequest::new("Stone", me).with_amount(15).with_pickup(true))
        .unwrap();
    engine
        .spawn(&mut world, &mut log, &SpawnRequest::new("Beehive", me).with_amount(2))
        .unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(world.object_count(), 6);

    let hives = log.undo(&mut world).unwrap();
    assert_eq!(hives.destroyed, 2);
    assert_eq!(world.last_message(MessageKind::Center), Some("Undo spawn of 2 Beehive"));

    let pickups = log.undo(&mut world).unwrap();
    assert_eq!(pickups.destroyed, 0);
    assert_eq!(world.actor(me).unwrap().inventory.len(), 2);

    let dwarves = log.undo(&mut world).unwrap();
    assert_eq!(dwarves.destroyed, 4);
    assert_eq!(world.object_count(), 0);

    let mut destroyed = world.destroyed().to_vec();
    destroyed.sort_unstable_by_key(|h| h.to_bits());
    destroyed.dedup();
    assert_eq!(destroyed.len(), 6);
    assert!(log.undo(&mut world).is_none());
}

#[test]
fn test_exempt_items_never_tagged() {
    let (mut world, me) = setup();
    let engine = SpawnEngine::default();
    let mut log = UndoLog::new();

    engine
        .spawn(&mut world, &mut log, &SpawnRequest::new("FishingBait", me).with_amount(3))
        .unwrap();
    engine
        .spawn(&mut world, &mut log, &SpawnRequest::new("MeadHealthMinor", me).with_amount(3))
        .unwrap();

    for (_, obj) in world.objects() {
        if let Instance::Item(data) = &obj.instance {
            assert!(data.crafter.is_none(), "{} carries a crafter tag", obj.definition);
        }
    }
}

#[test]
fn test_custom_policy_tags_bait() {
    let (mut world, me) = setup();
    let engine = SpawnEngine::new(CraftingPolicy::permissive());
    let mut log = UndoLog::new();
    engine
        .spawn(&mut world, &mut log, &SpawnRequest::new("FishingBait", me))
        .unwrap();

    let (_, bait) = world.objects().next().unwrap();
    match &bait.instance {
        Instance::Item(data) => assert_eq!(data.crafter.as_ref().unwrap().id.0, 1001),
        other => panic!("unexpected instance {:?}", other),
    }
}
