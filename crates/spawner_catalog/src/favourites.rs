//! Favourites persistence
//!
//! A flat UTF-8 file, one definition name per line, no header. Saving
//! rewrites the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;

/// Errors from favourites I/O
#[derive(Debug, Error)]
pub enum FavouritesError {
    #[error("IO error on favourites file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for favourites operations
pub type FavouritesResult<T> = Result<T, FavouritesError>;

/// File-backed favourites list
#[derive(Debug, Clone)]
pub struct FavouritesStore {
    path: PathBuf,
}

impl FavouritesStore {
    /// Store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `file_name` inside a config directory
    pub fn in_dir(config_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(config_dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> FavouritesError {
        FavouritesError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Mark every listed name found in the catalog as favourite.
    ///
    /// A missing file is not an error. Returns the number of favourites set.
    pub fn load(&self, catalog: &mut Catalog) -> FavouritesResult<usize> {
        log::info!("Loading favourites from {:?}", self.path);
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let mut loaded = 0;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.io_error(e))?;
            let name = line.trim_end_matches('\r');
            if name.is_empty() {
                continue;
            }
            if catalog.set_favourite(name, true) {
                loaded += 1;
            } else {
                log::info!("Favourite '{}' not found in catalog", name);
            }
        }
        Ok(loaded)
    }

    /// Write every favourite name, overwriting the file
    pub fn save(&self, catalog: &Catalog) -> FavouritesResult<()> {
        log::info!("Saving favourites to {:?}", self.path);
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        for name in catalog.favourites() {
            writeln!(writer, "{}", name).map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))
    }
}
