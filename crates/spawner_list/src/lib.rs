//! Spawner List - Virtualized Row Pool
//!
//! Shows an arbitrarily long result sequence with a fixed number of row
//! widgets. Rows near the viewport are bound to result indices; the rest sit
//! in a free queue until scrolling needs them again.
//!
//! # Features
//!
//! - Fixed slot array with a FIFO free queue
//! - One row per visible index, padded by one row above and below
//! - Silent degradation when the pool is smaller than the viewport
//!
//! # Example
//!
//! ```ignore
//! use spawner_list::prelude::*;
//!
//! let mut list = VirtualList::new(ListGeometry::new(20.0, 400.0), 20);
//! list.on_scroll(0.0, &rows);
//! for (_, row) in list.rows() {
//!     draw(row.top(), row.name());
//! }
//! ```

pub mod geometry;
pub mod list;
pub mod pool;
pub mod row;

pub mod prelude {
    pub use crate::geometry::ListGeometry;
    pub use crate::list::VirtualList;
    pub use crate::pool::RowPool;
    pub use crate::row::{RowData, RowSource, RowWidget};
}

pub use prelude::*;
