//! Fixed-size row pool
//!
//! A slot array allocated once plus a FIFO free queue of slot indices.
//! Acquiring and releasing rows never allocates.

use std::collections::VecDeque;

use crate::row::RowWidget;

/// Fixed pool of row widgets
#[derive(Debug)]
pub struct RowPool {
    rows: Vec<RowWidget>,
    free: VecDeque<usize>,
}

impl RowPool {
    /// Create a pool of `size` rows, all pooled
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![RowWidget::default(); size],
            free: (0..size).collect(),
        }
    }

    /// Total number of rows
    pub fn capacity(&self) -> usize {
        self.rows.len()
    }

    /// Rows waiting in the free queue
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Rows currently assigned
    pub fn live_count(&self) -> usize {
        self.rows.len() - self.free.len()
    }

    /// Take a pooled row. `None` when the pool is exhausted.
    pub(crate) fn acquire(&mut self) -> Option<usize> {
        self.free.pop_front()
    }

    /// Return a live row to the pool. Pooled rows are left alone.
    pub(crate) fn release(&mut self, slot: usize) {
        let Some(row) = self.rows.get_mut(slot) else {
            return;
        };
        if row.is_live() {
            row.pool();
            self.free.push_back(slot);
        }
    }

    /// Return every live row to the pool
    pub(crate) fn release_all(&mut self) {
        for slot in 0..self.rows.len() {
            self.release(slot);
        }
    }

    /// Slot of the live row showing `index`
    pub fn slot_for_index(&self, index: usize) -> Option<usize> {
        self.rows.iter().position(|r| r.pos_index() == Some(index))
    }

    pub fn row(&self, slot: usize) -> Option<&RowWidget> {
        self.rows.get(slot)
    }

    pub(crate) fn row_mut(&mut self, slot: usize) -> Option<&mut RowWidget> {
        self.rows.get_mut(slot)
    }

    /// All rows, pooled or not
    pub fn rows(&self) -> &[RowWidget] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [RowWidget] {
        &mut self.rows
    }

    /// Live rows with their slots
    pub fn live(&self) -> impl Iterator<Item = (usize, &RowWidget)> {
        self.rows.iter().enumerate().filter(|(_, r)| r.is_live())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RowData;

    fn data() -> RowData<'static> {
        RowData {
            name: "Wood",
            favourite: false,
            selected: false,
        }
    }

    #[test]
    fn test_acquire_until_exhausted() {
        let mut pool = RowPool::new(2);
        assert_eq!(pool.acquire(), Some(0));
        assert_eq!(pool.acquire(), Some(1));
        assert_eq!(pool.acquire(), None);
    }

    #[test]
    fn test_release_only_live_rows() {
        let mut pool = RowPool::new(3);
        let slot = pool.acquire().unwrap();
        pool.row_mut(slot).unwrap().assign(5, 100.0, data());
        assert_eq!(pool.live_count(), 1);

        pool.release(slot);
        pool.release(slot);
        assert_eq!(pool.free_count(), 3);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_release_all() {
        let mut pool = RowPool::new(4);
        for i in 0..3 {
            let slot = pool.acquire().unwrap();
            pool.row_mut(slot).unwrap().assign(i, 0.0, data());
        }
        assert_eq!(pool.slot_for_index(2), Some(2));

        pool.release_all();
        assert_eq!(pool.free_count(), 4);
        assert_eq!(pool.slot_for_index(2), None);
    }
}
