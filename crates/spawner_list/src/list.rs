//! Virtualized list over a fixed row pool

use crate::geometry::ListGeometry;
use crate::pool::RowPool;
use crate::row::{RowSource, RowWidget};

/// Scrollable list that materializes only the rows near the viewport
#[derive(Debug)]
pub struct VirtualList {
    geometry: ListGeometry,
    pool: RowPool,
    scroll_offset: f32,
    content_height: f32,
}

impl VirtualList {
    /// Create a list with `pool_size` rows
    pub fn new(geometry: ListGeometry, pool_size: usize) -> Self {
        if pool_size < geometry.max_visible_rows() {
            log::debug!(
                "Row pool of {} is smaller than the {} rows the viewport can show",
                pool_size,
                geometry.max_visible_rows()
            );
        }
        Self {
            geometry,
            pool: RowPool::new(pool_size),
            scroll_offset: 0.0,
            content_height: 0.0,
        }
    }

    pub fn geometry(&self) -> ListGeometry {
        self.geometry
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Height the host should give the scroll content
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn pool(&self) -> &RowPool {
        &self.pool
    }

    /// Live rows with their slots
    pub fn rows(&self) -> impl Iterator<Item = (usize, &RowWidget)> {
        self.pool.live()
    }

    /// Live row showing `index`
    pub fn row_for_index(&self, index: usize) -> Option<&RowWidget> {
        self.pool
            .slot_for_index(index)
            .and_then(|slot| self.pool.row(slot))
    }

    /// Recycle rows for a new scroll position
    pub fn on_scroll(&mut self, scroll_offset: f32, source: &dyn RowSource) {
        let geometry = self.geometry;
        let count = source.row_count();
        self.scroll_offset = scroll_offset;
        self.content_height = geometry.content_height(count);

        for slot in 0..self.pool.capacity() {
            let stale = match self.pool.row(slot).and_then(RowWidget::pos_index) {
                Some(index) => {
                    index >= count || geometry.is_outside(geometry.row_top(index), scroll_offset)
                }
                None => false,
            };
            if stale {
                self.pool.release(slot);
            }
        }

        for index in geometry.visible_range(scroll_offset, count) {
            if self.pool.slot_for_index(index).is_some() {
                continue;
            }
            let Some(data) = source.row(index) else {
                continue;
            };
            let Some(slot) = self.pool.acquire() else {
                log::trace!("Row pool exhausted at index {}", index);
                break;
            };
            if let Some(row) = self.pool.row_mut(slot) {
                row.assign(index, geometry.row_top(index), data);
            }
        }
    }

    /// Pool every row and repopulate at the current offset
    pub fn rebuild(&mut self, source: &dyn RowSource) {
        self.pool.release_all();
        self.on_scroll(self.scroll_offset, source);
    }

    /// Change the viewport height and repopulate
    pub fn set_viewport_height(&mut self, height: f32, source: &dyn RowSource) {
        self.geometry.viewport_height = height;
        self.rebuild(source);
    }

    /// Set the selection mirror of every live row: only `index` is selected
    pub fn select_exclusive(&mut self, index: Option<usize>) {
        for row in self.pool.rows_mut() {
            if row.is_live() {
                row.set_selected(row.pos_index() == index);
            }
        }
    }

    /// Update the favourite mirror of the live row showing `index`
    pub fn set_favourite(&mut self, index: usize, favourite: bool) {
        if let Some(slot) = self.pool.slot_for_index(index) {
            if let Some(row) = self.pool.row_mut(slot) {
                row.set_favourite(favourite);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RowData;
    use std::collections::HashSet;

    struct Names(Vec<String>);

    impl Names {
        fn numbered(count: usize) -> Self {
            Self((0..count).map(|i| format!("Item{}", i)).collect())
        }
    }

    impl RowSource for Names {
        fn row_count(&self) -> usize {
            self.0.len()
        }

        fn row(&self, index: usize) -> Option<RowData<'_>> {
            self.0.get(index).map(|name| RowData {
                name,
                favourite: index % 2 == 0,
                selected: false,
            })
        }
    }

    fn assert_pool_invariants(list: &VirtualList) {
        let mut seen = HashSet::new();
        for (_, row) in list.rows() {
            let index = row.pos_index().unwrap();
            assert!(seen.insert(index), "index {} shown twice", index);
            assert!(row.is_active());
        }
        assert!(seen.len() <= list.pool().capacity());
        assert_eq!(seen.len() + list.pool().free_count(), list.pool().capacity());
    }

    fn live_indices(list: &VirtualList) -> Vec<usize> {
        let mut indices: Vec<_> = list.rows().filter_map(|(_, r)| r.pos_index()).collect();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn test_initial_fill() {
        let source = Names::numbered(100);
        let mut list = VirtualList::new(ListGeometry::new(20.0, 100.0), 20);
        list.on_scroll(0.0, &source);

        assert_eq!(list.content_height(), 99.0 * 20.0);
        assert_eq!(live_indices(&list), (0..7).collect::<Vec<_>>());

        let row = list.row_for_index(3).unwrap();
        assert_eq!(row.name(), "Item3");
        assert_eq!(row.top(), 60.0);
        assert!(!row.is_favourite());
        assert_pool_invariants(&list);
    }

    #[test]
    fn test_scroll_recycles_rows() {
        let source = Names::numbered(100);
        let mut list = VirtualList::new(ListGeometry::new(20.0, 100.0), 20);
        list.on_scroll(0.0, &source);
        list.on_scroll(400.0, &source);

        // ceil((400 - 20) / 20) = 19
        assert_eq!(live_indices(&list), (19..26).collect::<Vec<_>>());
        assert_pool_invariants(&list);
    }

    #[test]
    fn test_small_scroll_keeps_rows_in_margin() {
        let source = Names::numbered(100);
        let mut list = VirtualList::new(ListGeometry::new(20.0, 100.0), 20);
        list.on_scroll(0.0, &source);
        let slot = list.pool().slot_for_index(1).unwrap();

        list.on_scroll(30.0, &source);
        assert_eq!(list.pool().slot_for_index(1), Some(slot));
        assert!(list.row_for_index(0).is_none());
        assert_pool_invariants(&list);
    }

    #[test]
    fn test_pool_exhaustion_is_silent() {
        let source = Names::numbered(100);
        let mut list = VirtualList::new(ListGeometry::new(20.0, 400.0), 5);
        list.on_scroll(0.0, &source);

        assert_eq!(live_indices(&list), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.pool().free_count(), 0);
        assert_pool_invariants(&list);
    }

    #[test]
    fn test_shrinking_source_pools_rows() {
        let mut list = VirtualList::new(ListGeometry::new(20.0, 100.0), 20);
        list.on_scroll(0.0, &Names::numbered(50));

        let short = Names::numbered(3);
        list.on_scroll(0.0, &short);
        assert_eq!(live_indices(&list), vec![0, 1, 2]);
        assert_eq!(list.content_height(), 40.0);
        assert_pool_invariants(&list);
    }

    #[test]
    fn test_rebuild_refreshes_contents() {
        let mut list = VirtualList::new(ListGeometry::new(20.0, 100.0), 20);
        list.on_scroll(0.0, &Names::numbered(10));

        let renamed = Names(vec!["Boar".into(), "Wood".into()]);
        list.rebuild(&renamed);
        assert_eq!(list.row_for_index(0).unwrap().name(), "Boar");
        assert_eq!(live_indices(&list), vec![0, 1]);
        assert_pool_invariants(&list);
    }

    #[test]
    fn test_empty_source() {
        let mut list = VirtualList::new(ListGeometry::default(), 20);
        list.on_scroll(0.0, &Names(Vec::new()));
        assert_eq!(list.content_height(), 0.0);
        assert_eq!(list.rows().count(), 0);
    }

    #[test]
    fn test_select_exclusive() {
        let source = Names::numbered(10);
        let mut list = VirtualList::new(ListGeometry::new(20.0, 100.0), 20);
        list.on_scroll(0.0, &source);

        list.select_exclusive(Some(2));
        assert!(list.row_for_index(2).unwrap().is_selected());
        list.select_exclusive(Some(4));
        assert!(!list.row_for_index(2).unwrap().is_selected());
        assert!(list.row_for_index(4).unwrap().is_selected());
        list.select_exclusive(None);
        assert!(list.rows().all(|(_, r)| !r.is_selected()));
    }

    #[test]
    fn test_invariants_over_scroll_sequence() {
        let source = Names::numbered(300);
        let mut list = VirtualList::new(ListGeometry::new(20.0, 400.0), 20);
        for offset in [0.0, 15.0, 350.0, 5000.0, 5980.0, 120.0, -30.0, 2999.5] {
            list.on_scroll(offset, &source);
            assert_pool_invariants(&list);
        }
        list.rebuild(&source);
        assert_pool_invariants(&list);
    }
}
