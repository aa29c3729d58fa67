//! Headless spawner session against the in-memory host
//!
//! Usage: `spawner_headless [config-dir]` (default `./spawner-data`)

use std::path::PathBuf;
use std::sync::Arc;

use spawner_core::memory::MemoryWorld;
use spawner_core::{Definition, ItemTemplate, MessageKind, Recipe};
use spawner_menu::prelude::*;

fn demo_world() -> MemoryWorld {
    let mut world = MemoryWorld::new()
        .with_definition(Definition::new("Boar").with_localized_name("Boar").character())
        .with_definition(Definition::new("Greydwarf").with_localized_name("Greydwarf").character())
        .with_definition(
            Definition::new("Wood")
                .with_localized_name("Wood")
                .with_item(ItemTemplate::new("$item_wood").with_max_stack(50)),
        )
        .with_definition(
            Definition::new("FishingBait")
                .with_localized_name("Fishing bait")
                .with_item(ItemTemplate::new("$item_fishingbait").with_max_stack(100)),
        )
        .with_definition(
            Definition::new("SwordIron")
                .with_localized_name("Iron sword")
                .with_item(
                    ItemTemplate::new("$item_sword_iron")
                        .equipable()
                        .with_durability(200.0, 50.0),
                ),
        )
        .with_definition(Definition::new("Beehive").with_localized_name("Beehive"));
    world.add_recipe(Recipe::new("Recipe_SwordIron", "SwordIron"));
    world.add_recipe(Recipe::new("Recipe_FishingBait", "FishingBait"));

    let local = world.add_actor("Ragnar", 1001, [0.0, 0.0, 0.0]);
    world.set_local(local);
    world.add_actor("Lagertha", 1002, [25.0, 0.0, -4.0]);
    world
}

/// Press and release a shortcut over one frame
fn press(spawner: &mut Spawner, world: &mut MemoryWorld, keys: &mut KeyState, shortcut: &KeyboardShortcut) {
    for &modifier in &shortcut.modifiers {
        keys.press(modifier);
    }
    keys.press(shortcut.key);
    spawner.update(world, keys);
    keys.end_frame();
    keys.release(shortcut.key);
    for &modifier in &shortcut.modifiers {
        keys.release(modifier);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("spawner-data"));
    if let Err(e) = std::fs::create_dir_all(&config_dir) {
        log::error!("Cannot create config directory {:?}: {}", config_dir, e);
        std::process::exit(1);
    }

    let mut world = demo_world();
    let mut keys = KeyState::new();
    let mut spawner = Spawner::from_config_dir(&config_dir, Arc::new(world.players()));
    let hotkeys = spawner.config().hotkeys.clone();
    for hint in spawner.hints() {
        log::info!("{}", hint);
    }

    press(&mut spawner, &mut world, &mut keys, &hotkeys.toggle_menu);
    let Some(menu) = spawner.menu_mut() else {
        log::error!("Menu could not be opened");
        std::process::exit(1);
    };
    log::info!("{} definitions listed", menu.catalog().result_count());

    menu.set_search_text("wood");
    menu.select_row(0);
    menu.set_amount_text("120");
    press(&mut spawner, &mut world, &mut keys, &hotkeys.spawn);

    if let Some(menu) = spawner.menu_mut() {
        menu.set_search_text("sword");
        menu.select_row(0);
        menu.set_amount_text("2");
        menu.set_level_text("3");
        menu.select_player(1);
    }
    press(&mut spawner, &mut world, &mut keys, &hotkeys.spawn);

    log::info!("{} objects in the world", world.object_count());
    press(&mut spawner, &mut world, &mut keys, &hotkeys.undo);
    press(&mut spawner, &mut world, &mut keys, &hotkeys.undo);
    log::info!("{} objects left after undo", world.object_count());

    for (kind, text) in world.messages() {
        let channel = match kind {
            MessageKind::TopLeft => "status",
            MessageKind::Center => "center",
        };
        println!("[{}] {}", channel, text);
    }

    spawner.close_menu();
}
