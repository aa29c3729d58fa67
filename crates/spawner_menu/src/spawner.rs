//! Host-facing spawner controller

use std::path::{Path, PathBuf};
use std::sync::Arc;

use spawner_core::{PlayerDirectory, World};
use spawner_engine::SpawnEngine;

use crate::config::SpawnerConfig;
use crate::hotkeys::{KeyState, MenuAction};
use crate::menu::SpawnerMenu;

/// Entry point a host drives once per frame
///
/// Owns the configuration, the spawn engine and, once opened, the menu.
/// Nothing here returns errors to the host; failures end up in the log or
/// in an on-screen message.
pub struct Spawner {
    config: SpawnerConfig,
    config_dir: PathBuf,
    engine: SpawnEngine,
    players: Arc<dyn PlayerDirectory>,
    menu: Option<SpawnerMenu>,
}

impl Spawner {
    pub fn new(config: SpawnerConfig, config_dir: impl Into<PathBuf>, players: Arc<dyn PlayerDirectory>) -> Self {
        let engine = SpawnEngine::new(config.crafting_policy());
        Self {
            config,
            config_dir: config_dir.into(),
            engine,
            players,
            menu: None,
        }
    }

    /// Load `spawner.toml` from `config_dir` (creating it if missing)
    pub fn from_config_dir(config_dir: impl AsRef<Path>, players: Arc<dyn PlayerDirectory>) -> Self {
        let config = SpawnerConfig::load_or_create(config_dir.as_ref());
        Self::new(config, config_dir.as_ref(), players)
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn engine(&self) -> &SpawnEngine {
        &self.engine
    }

    pub fn menu(&self) -> Option<&SpawnerMenu> {
        self.menu.as_ref()
    }

    pub fn menu_mut(&mut self) -> Option<&mut SpawnerMenu> {
        self.menu.as_mut()
    }

    /// Per-frame update: hotkeys, then player list changes
    pub fn update(&mut self, world: &mut dyn World, keys: &KeyState) {
        if let Some(action) = self.config.hotkeys.action(keys) {
            self.handle(world, action);
        }
        if let Some(menu) = self.menu.as_mut() {
            menu.refresh_players(&*world);
        }
    }

    /// Run one action. Ignored while there is no local player.
    pub fn handle(&mut self, world: &mut dyn World, action: MenuAction) {
        if world.local_actor().is_none() {
            return;
        }

        match action {
            MenuAction::ToggleMenu => match self.menu.as_mut() {
                Some(menu) => menu.toggle_visible(),
                None => {
                    self.menu = SpawnerMenu::create(
                        &*world,
                        Arc::clone(&self.players),
                        &self.config,
                        &self.config_dir,
                    );
                }
            },
            MenuAction::Spawn => {
                if let Some(menu) = self.menu.as_mut() {
                    log::info!("Spawn hotkey pressed");
                    menu.spawn_selected(world, &self.engine);
                }
            }
            MenuAction::Undo => {
                if let Some(menu) = self.menu.as_mut() {
                    if !menu.undo_log().is_empty() {
                        menu.undo(world);
                    }
                }
            }
        }
    }

    /// Tear the menu down
    pub fn close_menu(&mut self) {
        if let Some(menu) = self.menu.take() {
            menu.destroy();
        }
    }

    /// Hint texts for the menu footer
    pub fn hints(&self) -> [String; 3] {
        let hotkeys = &self.config.hotkeys;
        [hotkeys.spawn_hint(), hotkeys.undo_hint(), hotkeys.toggle_hint()]
    }
}
