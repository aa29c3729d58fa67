//! Spawner configuration (`spawner.toml`)
//!
//! ```toml
//! [hotkeys]
//! toggle_menu = "Slash"
//! spawn = "Equals"
//! undo = "Z + LeftControl"
//!
//! [ui]
//! menu_width = 450.0
//! row_height = 20.0
//! pool_size = 20
//! viewport_height = 360.0
//!
//! [players]
//! poll_interval_secs = 3
//!
//! [favourites]
//! file_name = "spawner.favourites.txt"
//!
//! [crafting]
//! exempt_recipes = ["Recipe_PotionHealthMinor", "Recipe_PotionStaminaMinor"]
//! exempt_items = ["$item_fishingbait"]
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use spawner_engine::crafting::{CraftingPolicy, DEFAULT_EXEMPT_ITEMS, DEFAULT_EXEMPT_RECIPES};
use spawner_list::ListGeometry;
use thiserror::Error;

use crate::hotkeys::HotkeyConfig;

/// Config file name inside the host's config directory
pub const CONFIG_FILE_NAME: &str = "spawner.toml";

pub const MIN_MENU_WIDTH: f32 = 50.0;
pub const MAX_MENU_WIDTH: f32 = 900.0;

/// Errors from config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    Write(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Clamp a menu width to the supported range
pub fn clamp_menu_width(width: f32) -> f32 {
    if width.is_nan() {
        return MIN_MENU_WIDTH;
    }
    width.clamp(MIN_MENU_WIDTH, MAX_MENU_WIDTH)
}

/// Menu layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub menu_width: f32,
    pub row_height: f32,
    pub pool_size: usize,
    pub viewport_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_width: 450.0,
            row_height: 20.0,
            pool_size: 20,
            viewport_height: 360.0,
        }
    }
}

/// Player list polling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub poll_interval_secs: u64,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 3,
        }
    }
}

/// Favourites file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavouritesConfig {
    pub file_name: String,
}

impl Default for FavouritesConfig {
    fn default() -> Self {
        Self {
            file_name: "spawner.favourites.txt".to_string(),
        }
    }
}

/// Crafter tag exemptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftingConfig {
    pub exempt_recipes: Vec<String>,
    pub exempt_items: Vec<String>,
}

impl Default for CraftingConfig {
    fn default() -> Self {
        Self {
            exempt_recipes: DEFAULT_EXEMPT_RECIPES.iter().map(|s| s.to_string()).collect(),
            exempt_items: DEFAULT_EXEMPT_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Complete spawner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub hotkeys: HotkeyConfig,
    pub ui: UiConfig,
    pub players: PlayersConfig,
    pub favourites: FavouritesConfig,
    pub crafting: CraftingConfig,
}

impl SpawnerConfig {
    /// Parse and validate TOML text
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Write the config as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load `spawner.toml` from `config_dir`, never failing
    ///
    /// A missing file is created with defaults. An unreadable or invalid
    /// file is logged and defaults are used.
    pub fn load_or_create(config_dir: impl AsRef<Path>) -> Self {
        let path = config_dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            let config = Self::default();
            match config.save(&path) {
                Ok(()) => log::info!("Wrote default config to {:?}", path),
                Err(e) => log::warn!("Failed to write default config {:?}: {}", path, e),
            }
            return config;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Invalid config {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    /// Clamp the menu width, grow the row pool to cover the viewport and
    /// reject unusable sizes
    pub fn validate(&mut self) -> ConfigResult<()> {
        let width = clamp_menu_width(self.ui.menu_width);
        if width != self.ui.menu_width {
            log::warn!("menu_width {} out of range, using {}", self.ui.menu_width, width);
            self.ui.menu_width = width;
        }
        if !(self.ui.row_height > 0.0) {
            return Err(ConfigError::Validation("row_height must be positive".into()));
        }
        if self.ui.pool_size == 0 {
            return Err(ConfigError::Validation("pool_size must be at least 1".into()));
        }
        if !(self.ui.viewport_height >= 0.0) {
            return Err(ConfigError::Validation("viewport_height must not be negative".into()));
        }
        let visible = self.list_geometry().max_visible_rows();
        if self.ui.pool_size < visible {
            log::warn!(
                "pool_size {} cannot cover the viewport, using {}",
                self.ui.pool_size,
                visible
            );
            self.ui.pool_size = visible;
        }
        if self.players.poll_interval_secs == 0 {
            return Err(ConfigError::Validation("poll_interval_secs must be at least 1".into()));
        }
        if self.favourites.file_name.trim().is_empty() {
            return Err(ConfigError::Validation("favourites file_name is empty".into()));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.players.poll_interval_secs)
    }

    pub fn list_geometry(&self) -> ListGeometry {
        ListGeometry::new(self.ui.row_height, self.ui.viewport_height)
    }

    pub fn crafting_policy(&self) -> CraftingPolicy {
        CraftingPolicy::new(
            self.crafting.exempt_recipes.iter().cloned(),
            self.crafting.exempt_items.iter().cloned(),
        )
    }
}
