//! Catalog of spawnable definitions and the filtered result sequence
//!
//! The catalog keeps one [`PrefabState`] per definition name, in the order
//! the host reported them. Filtering recomputes every entry's search flag
//! in parallel, then assembles the ordered result sequence on the calling
//! thread: favourites first, then everything else.

use std::collections::HashMap;

use rayon::prelude::*;

/// Per-definition browsing state
#[derive(Clone, Debug)]
pub struct PrefabState {
    /// Unique definition name
    pub name: String,
    /// Display name (may be empty)
    pub localized_name: String,
    /// Marked as favourite by the user
    pub is_favourite: bool,
    /// Matched the last filter rebuild
    pub is_searched: bool,
    name_key: String,
    localized_key: String,
}

impl PrefabState {
    fn new(name: String, localized_name: String) -> Self {
        Self {
            name_key: name.to_lowercase(),
            localized_key: localized_name.to_lowercase(),
            name,
            localized_name,
            is_favourite: false,
            is_searched: true,
        }
    }

    /// Case-insensitive match against the name or the display name.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.name_key.contains(needle)
            || (!self.localized_key.is_empty() && self.localized_key.contains(needle))
    }
}

/// Catalog & filter index
#[derive(Debug, Default)]
pub struct Catalog {
    states: Vec<PrefabState>,
    index: HashMap<String, usize>,
    results: Vec<usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(name, localized_name)` pairs. Duplicate names
    /// keep their first occurrence.
    pub fn from_entries<I, N, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, localized) in entries {
            catalog.insert(name, localized);
        }
        catalog.results = (0..catalog.states.len()).collect();
        catalog
    }

    /// Add a definition. Returns false if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, localized_name: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            log::warn!("Duplicate catalog entry '{}' ignored", name);
            return false;
        }
        self.index.insert(name.clone(), self.states.len());
        self.states.push(PrefabState::new(name, localized_name.into()));
        true
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a definition's state by name
    pub fn get(&self, name: &str) -> Option<&PrefabState> {
        self.index.get(name).map(|&i| &self.states[i])
    }

    /// State by catalog index
    pub fn state(&self, index: usize) -> Option<&PrefabState> {
        self.states.get(index)
    }

    /// All states in catalog order
    pub fn states(&self) -> &[PrefabState] {
        &self.states
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Set or clear a favourite. Returns false for unknown names.
    pub fn set_favourite(&mut self, name: &str, favourite: bool) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.states[i].is_favourite = favourite;
                true
            }
            None => false,
        }
    }

    pub fn is_favourite(&self, name: &str) -> bool {
        self.get(name).map(|s| s.is_favourite).unwrap_or(false)
    }

    /// Clear every favourite flag
    pub fn clear_favourites(&mut self) {
        for state in &mut self.states {
            state.is_favourite = false;
        }
    }

    /// Names of every favourite, in catalog order
    pub fn favourites(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|s| s.is_favourite)
            .map(|s| s.name.as_str())
    }

    /// Recompute search flags and the ordered result sequence.
    ///
    /// Returns catalog indices: matching favourites first, followed by
    /// matching non-favourites unless `favourites_only` is set.
    pub fn rebuild_filter(&mut self, search_text: &str, favourites_only: bool) -> &[usize] {
        let needle = search_text.to_lowercase();

        self.states
            .par_iter_mut()
            .for_each(|state| state.is_searched = state.matches(&needle));

        self.results.clear();
        self.results.extend(
            self.states
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_searched && s.is_favourite)
                .map(|(i, _)| i),
        );
        if !favourites_only {
            self.results.extend(
                self.states
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.is_searched && !s.is_favourite)
                    .map(|(i, _)| i),
            );
        }

        log::debug!(
            "Filter '{}' (favourites only: {}) matched {} of {}",
            search_text,
            favourites_only,
            self.results.len(),
            self.states.len()
        );
        &self.results
    }

    /// Current result sequence as catalog indices
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    /// Length of the current result sequence
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// State at a position of the result sequence
    pub fn result(&self, position: usize) -> Option<&PrefabState> {
        self.results.get(position).map(|&i| &self.states[i])
    }

    /// Names of the current result sequence, in order
    pub fn result_names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|&i| self.states[i].name.as_str())
    }
}
