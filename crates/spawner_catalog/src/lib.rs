//! Spawner Catalog - Definition Browsing and Favourites
//!
//! This crate holds the browsing side of the spawner.
//!
//! # Features
//!
//! - One [`PrefabState`] per spawnable definition
//! - Case-insensitive search over raw and display names, computed in parallel
//! - Favourites-first result ordering with an optional favourites-only mode
//! - Flat-file favourites persistence
//!
//! # Example
//!
//! ```ignore
//! use spawner_catalog::prelude::*;
//!
//! let mut catalog = Catalog::from_entries(vec![("Wood", "Wood"), ("Boar", "Boar")]);
//! catalog.set_favourite("Boar", true);
//! catalog.rebuild_filter("", false); // Boar, Wood
//! ```

pub mod catalog;
pub mod favourites;

pub mod prelude {
    pub use crate::catalog::{Catalog, PrefabState};
    pub use crate::favourites::{FavouritesError, FavouritesStore};
}

pub use prelude::*;
