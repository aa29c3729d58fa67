//! Hotkey-driven spawner sessions against the in-memory host

use std::sync::Arc;

use spawner_core::memory::MemoryWorld;
use spawner_core::{Definition, ItemTemplate, MessageKind};
use spawner_menu::prelude::*;
use tempfile::TempDir;

fn world() -> MemoryWorld {
    let mut world = MemoryWorld::new()
        .with_definition(Definition::new("Boar").with_localized_name("Boar").character())
        .with_definition(
            Definition::new("Wood")
                .with_localized_name("Wood")
                .with_item(ItemTemplate::new("$item_wood").with_max_stack(50)),
        );
    let me = world.add_actor("Ragnar", 1, [0.0; 3]);
    world.set_local(me);
    world
}

fn tap(spawner: &mut Spawner, world: &mut MemoryWorld, keys: &[Key]) {
    let mut state = KeyState::new();
    for &key in keys {
        state.press(key);
    }
    spawner.update(world, &state);
}

#[test]
fn test_toggle_creates_then_hides() {
    let dir = TempDir::new().unwrap();
    let mut world = world();
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));
    assert!(dir.path().join("spawner.toml").exists());
    assert!(spawner.menu().is_none());

    tap(&mut spawner, &mut world, &[Key::Slash]);
    assert!(spawner.menu().unwrap().is_visible());

    tap(&mut spawner, &mut world, &[Key::Slash]);
    assert!(!spawner.menu().unwrap().is_visible());

    tap(&mut spawner, &mut world, &[Key::Slash]);
    assert!(spawner.menu().unwrap().is_visible());
}

#[test]
fn test_nothing_without_local_player() {
    let dir = TempDir::new().unwrap();
    let mut world = MemoryWorld::new().with_definition(Definition::new("Boar"));
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));

    tap(&mut spawner, &mut world, &[Key::Slash]);
    assert!(spawner.menu().is_none());
}

#[test]
fn test_spawn_and_undo_need_a_menu() {
    let dir = TempDir::new().unwrap();
    let mut world = world();
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));

    tap(&mut spawner, &mut world, &[Key::Equals]);
    tap(&mut spawner, &mut world, &[Key::LeftControl, Key::Z]);
    assert!(world.messages().is_empty());
    assert_eq!(world.object_count(), 0);
}

#[test]
fn test_hotkey_spawn_and_undo() {
    let dir = TempDir::new().unwrap();
    let mut world = world();
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));
    tap(&mut spawner, &mut world, &[Key::Slash]);

    {
        let menu = spawner.menu_mut().unwrap();
        menu.set_search_text("boar");
        assert!(menu.select_row(0));
        menu.set_amount_text("3");
    }
    tap(&mut spawner, &mut world, &[Key::Equals]);
    assert_eq!(world.object_count(), 3);
    assert_eq!(world.last_message(MessageKind::TopLeft), Some("Spawning 3 Boar"));

    // Z alone is not the undo shortcut
    tap(&mut spawner, &mut world, &[Key::Z]);
    assert_eq!(world.object_count(), 3);

    tap(&mut spawner, &mut world, &[Key::LeftControl, Key::Z]);
    assert_eq!(world.object_count(), 0);
    assert_eq!(world.last_message(MessageKind::Center), Some("Undo spawn of 3 Boar"));

    // Empty log: no further message
    let before = world.messages().len();
    tap(&mut spawner, &mut world, &[Key::LeftControl, Key::Z]);
    assert_eq!(world.messages().len(), before);
}

#[test]
fn test_close_menu_discards_undo_log() {
    let dir = TempDir::new().unwrap();
    let mut world = world();
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));
    tap(&mut spawner, &mut world, &[Key::Slash]);
    {
        let menu = spawner.menu_mut().unwrap();
        menu.set_search_text("Wood");
        menu.select_row(0);
    }
    tap(&mut spawner, &mut world, &[Key::Equals]);
    assert_eq!(spawner.menu().unwrap().undo_log().len(), 1);

    spawner.close_menu();
    assert!(spawner.menu().is_none());

    tap(&mut spawner, &mut world, &[Key::Slash]);
    assert!(spawner.menu().unwrap().undo_log().is_empty());
    assert_eq!(world.object_count(), 1);
}

#[test]
fn test_favourites_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let mut world = world();
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));
    tap(&mut spawner, &mut world, &[Key::Slash]);
    {
        let menu = spawner.menu_mut().unwrap();
        let wood = menu.catalog().result_names().position(|n| n == "Wood").unwrap();
        menu.toggle_favourite(wood);
    }
    spawner.close_menu();

    tap(&mut spawner, &mut world, &[Key::Slash]);
    let menu = spawner.menu_mut().unwrap();
    assert!(menu.catalog().is_favourite("Wood"));
    menu.set_favourites_only(true);
    assert_eq!(menu.catalog().result_names().collect::<Vec<_>>(), vec!["Wood"]);
}

#[test]
fn test_custom_hotkeys_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("spawner.toml"),
        "[hotkeys]\ntoggle_menu = \"F7\"\n",
    )
    .unwrap();
    let mut world = world();
    let mut spawner = Spawner::from_config_dir(dir.path(), Arc::new(world.players()));

    tap(&mut spawner, &mut world, &[Key::Slash]);
    assert!(spawner.menu().is_none());
    tap(&mut spawner, &mut world, &[Key::F7]);
    assert!(spawner.menu().is_some());
    assert_eq!(spawner.hints()[2], "Toggle: F7");
}
