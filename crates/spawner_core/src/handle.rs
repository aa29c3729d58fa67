//! Weak handles to world objects and actors
//!
//! A spawn record never owns what it created; it only remembers a handle.
//! Handles carry a generation so a host can tell a destroyed object apart
//! from a newer object that reused its slot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A weak reference to an object living in the host world
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    /// Lower 24 bits: index, Upper 8 bits: generation
    bits: u32,
}

impl ObjectHandle {
    /// Maximum index value (24 bits)
    pub const MAX_INDEX: u32 = (1 << 24) - 1;

    /// Create a new handle from index and generation
    #[inline]
    pub const fn new(index: u32, generation: u8) -> Self {
        debug_assert!(index <= Self::MAX_INDEX);
        Self {
            bits: (generation as u32) << 24 | index,
        }
    }

    /// Get the index portion
    #[inline]
    pub const fn index(&self) -> u32 {
        self.bits & Self::MAX_INDEX
    }

    /// Get the generation portion
    #[inline]
    pub const fn generation(&self) -> u8 {
        (self.bits >> 24) as u8
    }

    /// Convert to raw bits
    #[inline]
    pub const fn to_bits(&self) -> u32 {
        self.bits
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHandle({}v{})", self.index(), self.generation())
    }
}

/// Identifies an actor (player character) known to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// Persistent player identity stamped on crafted items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

/// Generational storage addressed by [`ObjectHandle`]
///
/// Used by hosts that keep their objects in a flat arena.
pub struct ObjectMap<T> {
    generations: Vec<u8>,
    values: Vec<Option<T>>,
    free_list: Vec<u32>,
}

impl<T> ObjectMap<T> {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            values: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a value and get a handle to it
    pub fn insert(&mut self, value: T) -> ObjectHandle {
        if let Some(index) = self.free_list.pop() {
            self.values[index as usize] = Some(value);
            ObjectHandle::new(index, self.generations[index as usize])
        } else {
            let index = self.values.len() as u32;
            debug_assert!(index <= ObjectHandle::MAX_INDEX, "object map exhausted");
            self.generations.push(0);
            self.values.push(Some(value));
            ObjectHandle::new(index, 0)
        }
    }

    /// Remove a value; stale handles return `None`
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<T> {
        if !self.contains(handle) {
            return None;
        }
        let index = handle.index() as usize;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push(handle.index());
        self.values[index].take()
    }

    /// Check if a handle still refers to a live value
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        let index = handle.index() as usize;
        index < self.generations.len()
            && self.generations[index] == handle.generation()
            && self.values[index].is_some()
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&T> {
        if !self.contains(handle) {
            return None;
        }
        self.values[handle.index() as usize].as_ref()
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut T> {
        if !self.contains(handle) {
            return None;
        }
        self.values[handle.index() as usize].as_mut()
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.values.len() - self.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over live handles and values
    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &T)> {
        self.values.iter().enumerate().filter_map(move |(i, opt)| {
            opt.as_ref()
                .map(|v| (ObjectHandle::new(i as u32, self.generations[i]), v))
        })
    }
}

impl<T> Default for ObjectMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_bits() {
        let h = ObjectHandle::new(1234, 7);
        assert_eq!(h.index(), 1234);
        assert_eq!(h.generation(), 7);
        assert_eq!(ObjectHandle::from_bits(h.to_bits()), h);
    }

    #[test]
    fn test_removed_handle_is_stale() {
        let mut map: ObjectMap<&str> = ObjectMap::new();
        let a = map.insert("troll");
        assert!(map.contains(a));

        assert_eq!(map.remove(a), Some("troll"));
        assert!(!map.contains(a));
        assert_eq!(map.remove(a), None);

        // Reused slot gets a new generation
        let b = map.insert("boar");
        assert_eq!(b.index(), a.index());
        assert_ne!(b.generation(), a.generation());
        assert!(map.get(a).is_none());
        assert_eq!(map.get(b), Some(&"boar"));
    }

    #[test]
    fn test_len_and_iter() {
        let mut map: ObjectMap<u32> = ObjectMap::new();
        let a = map.insert(1);
        map.insert(2);
        map.insert(3);
        map.remove(a);

        assert_eq!(map.len(), 2);
        let values: Vec<u32> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![2, 3]);
    }
}
