//! Spawner Menu - In-Game Spawn Menu
//!
//! Ties the catalog, the row list and the spawn engine into a menu session
//! driven by hotkeys.
//!
//! # Features
//!
//! - Toggle, spawn and undo shortcuts (`Key + Modifier` text form)
//! - Search and favourites-only filtering with a pooled result list
//! - Spawn target dropdown kept current by a background player watcher
//! - `spawner.toml` configuration with defaults written on first run
//!
//! # Example
//!
//! ```ignore
//! use spawner_menu::prelude::*;
//!
//! let mut spawner = Spawner::from_config_dir(&config_dir, players);
//! loop {
//!     spawner.update(&mut world, &keys);
//!     keys.end_frame();
//! }
//! ```

pub mod config;
pub mod hotkeys;
pub mod menu;
pub mod players;
pub mod session;
pub mod spawner;

pub mod prelude {
    pub use crate::config::{ConfigError, SpawnerConfig};
    pub use crate::hotkeys::{HotkeyConfig, Key, KeyState, KeyboardShortcut, MenuAction};
    pub use crate::menu::{CatalogRows, SpawnerMenu};
    pub use crate::players::{PlayerDropdown, PlayerWatcher};
    pub use crate::session::{parse_count, SpawnForm};
    pub use crate::spawner::Spawner;
}

pub use prelude::*;
