//! The spawner menu session
//!
//! A `SpawnerMenu` exists from the first toggle until the menu is
//! destroyed. It owns the catalog, the row list, the player dropdown and
//! watcher, the form fields and the undo log.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use spawner_catalog::{Catalog, FavouritesStore};
use spawner_core::{PlayerDirectory, World};
use spawner_engine::{SpawnEngine, SpawnOutcome, SpawnRequest, UndoLog, UndoResult};
use spawner_list::{RowData, RowSource, VirtualList};

use crate::config::{clamp_menu_width, SpawnerConfig};
use crate::players::{PlayerDropdown, PlayerWatcher};
use crate::session::SpawnForm;

/// Filtered catalog results as list rows
pub struct CatalogRows<'a> {
    catalog: &'a Catalog,
    selected: Option<&'a str>,
}

impl<'a> CatalogRows<'a> {
    pub fn new(catalog: &'a Catalog, selected: Option<&'a str>) -> Self {
        Self { catalog, selected }
    }
}

impl RowSource for CatalogRows<'_> {
    fn row_count(&self) -> usize {
        self.catalog.result_count()
    }

    fn row(&self, index: usize) -> Option<RowData<'_>> {
        self.catalog.result(index).map(|state| RowData {
            name: &state.name,
            favourite: state.is_favourite,
            selected: self.selected == Some(state.name.as_str()),
        })
    }
}

/// Live menu state
pub struct SpawnerMenu {
    catalog: Catalog,
    favourites: FavouritesStore,
    list: VirtualList,
    dropdown: PlayerDropdown,
    watcher: Option<PlayerWatcher>,
    visible: Arc<AtomicBool>,
    form: SpawnForm,
    selected: Option<String>,
    undo_log: UndoLog,
    menu_width: f32,
}

impl SpawnerMenu {
    /// Build the menu from the world's catalog
    ///
    /// Returns `None` while the host has no catalog or no local player.
    pub fn create(
        world: &dyn World,
        players: Arc<dyn PlayerDirectory>,
        config: &SpawnerConfig,
        config_dir: &Path,
    ) -> Option<Self> {
        log::info!("Creating spawner menu");

        let Some(local) = world.local_actor().and_then(|actor| world.identity(actor)) else {
            log::warn!("No local player, menu not created");
            return None;
        };
        let Some(entries) = world.catalog_entries() else {
            log::warn!("Catalog not loaded, menu not created");
            return None;
        };

        let mut catalog = Catalog::from_entries(entries);
        let favourites = FavouritesStore::in_dir(config_dir, &config.favourites.file_name);
        match favourites.load(&mut catalog) {
            Ok(count) => log::info!("Loaded {} favourites from {:?}", count, favourites.path()),
            Err(e) => log::warn!("{}", e),
        }

        let connected = players.connected_players().unwrap_or_default();
        let mut dropdown = PlayerDropdown::new();
        dropdown.rebuild(&local.name, &connected);

        let visible = Arc::new(AtomicBool::new(true));
        let watcher = match PlayerWatcher::start(players, connected, config.poll_interval(), visible.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                log::warn!("Failed to start player watcher: {}", e);
                None
            }
        };

        let mut menu = Self {
            catalog,
            favourites,
            list: VirtualList::new(config.list_geometry(), config.ui.pool_size),
            dropdown,
            watcher,
            visible,
            form: SpawnForm::default(),
            selected: None,
            undo_log: UndoLog::new(),
            menu_width: clamp_menu_width(config.ui.menu_width),
        };
        menu.rebuild();
        log::info!("Spawner menu created with {} definitions", menu.catalog.len());
        Some(menu)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    pub fn dropdown(&self) -> &PlayerDropdown {
        &self.dropdown
    }

    pub fn form(&self) -> &SpawnForm {
        &self.form
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn menu_width(&self) -> f32 {
        self.menu_width
    }

    /// Apply a new width, clamped to the supported range
    pub fn set_menu_width(&mut self, width: f32) {
        self.menu_width = clamp_menu_width(width);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible.store(visible, Ordering::Relaxed);
    }

    pub fn toggle_visible(&mut self) {
        let visible = !self.is_visible();
        self.set_visible(visible);
        log::debug!("Spawner menu {}", if visible { "shown" } else { "hidden" });
    }

    /// Recompute the results and repopulate the list. Clears the selection.
    pub fn rebuild(&mut self) {
        self.selected = None;
        self.catalog
            .rebuild_filter(&self.form.search_text, self.form.favourites_only);
        self.list.rebuild(&CatalogRows::new(&self.catalog, None));
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.form.search_text.clear();
        self.form.search_text.push_str(text);
        self.rebuild();
    }

    pub fn set_favourites_only(&mut self, favourites_only: bool) {
        self.form.favourites_only = favourites_only;
        self.rebuild();
    }

    pub fn set_amount_text(&mut self, text: &str) {
        self.form.amount_text = text.to_string();
    }

    pub fn set_level_text(&mut self, text: &str) {
        self.form.level_text = text.to_string();
    }

    pub fn set_pickup(&mut self, pickup: bool) {
        self.form.pickup = pickup;
    }

    pub fn set_ignore_stack_size(&mut self, ignore: bool) {
        self.form.ignore_stack_size = ignore;
    }

    /// Scroll the list to a content offset
    pub fn scroll_to(&mut self, offset: f32) {
        let rows = CatalogRows::new(&self.catalog, self.selected.as_deref());
        self.list.on_scroll(offset, &rows);
    }

    /// Change the visible list height
    pub fn set_viewport_height(&mut self, height: f32) {
        let rows = CatalogRows::new(&self.catalog, self.selected.as_deref());
        self.list.set_viewport_height(height, &rows);
    }

    /// Select the definition shown at result position `index`
    pub fn select_row(&mut self, index: usize) -> bool {
        let Some(state) = self.catalog.result(index) else {
            return false;
        };
        self.selected = Some(state.name.clone());
        self.list.select_exclusive(Some(index));
        true
    }

    /// Flip the favourite flag of the result at `index`, save and rebuild
    pub fn toggle_favourite(&mut self, index: usize) -> bool {
        let Some(state) = self.catalog.result(index) else {
            return false;
        };
        let name = state.name.clone();
        let favourite = !state.is_favourite;

        self.catalog.set_favourite(&name, favourite);
        self.list.set_favourite(index, favourite);
        if let Err(e) = self.favourites.save(&self.catalog) {
            log::warn!("{}", e);
        }
        self.rebuild();
        true
    }

    /// Select a spawn target from the dropdown
    pub fn select_player(&mut self, index: usize) -> bool {
        self.dropdown.select(index)
    }

    /// Apply player list changes reported by the watcher
    pub fn refresh_players(&mut self, world: &dyn World) {
        let Some(connected) = self.watcher.as_ref().and_then(PlayerWatcher::poll) else {
            return;
        };
        let Some(local) = world.local_actor().and_then(|actor| world.identity(actor)) else {
            return;
        };
        log::info!("Updating player dropdown");
        self.dropdown.rebuild(&local.name, &connected);
    }

    /// Spawn the selected definition with the form's options
    pub fn spawn_selected(&mut self, world: &mut dyn World, engine: &SpawnEngine) -> Option<SpawnOutcome> {
        let definition = self.selected.clone()?;
        let Some(local) = world.local_actor() else {
            log::warn!("No local player, spawn ignored");
            return None;
        };

        let mut target = local;
        let mut pickup = self.form.pickup;
        if !self.dropdown.is_local_selected() {
            pickup = false;
            if let Some(name) = self.dropdown.selected_name() {
                target = world.find_actor(name).unwrap_or(local);
            }
        }

        let request = SpawnRequest::new(definition, target)
            .with_requester(local)
            .with_amount(self.form.amount())
            .with_level(self.form.level())
            .with_pickup(pickup)
            .with_ignore_stack_size(self.form.ignore_stack_size);

        match engine.spawn(world, &mut self.undo_log, &request) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                log::info!("{}", e);
                None
            }
        }
    }

    /// Undo the most recent spawn
    pub fn undo(&mut self, world: &mut dyn World) -> Option<UndoResult> {
        self.undo_log.undo(world)
    }

    /// Stop background work and discard the session
    pub fn destroy(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.stop();
        }
        if !self.undo_log.is_empty() {
            log::debug!("Discarding {} undo records", self.undo_log.len());
        }
        self.undo_log.clear();
        log::info!("Spawner menu destroyed");
    }

    pub fn is_watching_players(&self) -> bool {
        self.watcher.as_ref().is_some_and(PlayerWatcher::is_running)
    }
}

impl Drop for SpawnerMenu {
    fn drop(&mut self) {
        if self.watcher.is_some() {
            self.shutdown();
        }
    }
}
