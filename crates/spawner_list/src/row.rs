//! Row widgets and the data they display

/// What a row shows for one index of the result sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowData<'a> {
    pub name: &'a str,
    pub favourite: bool,
    pub selected: bool,
}

/// Supplies row contents to a [`VirtualList`](crate::VirtualList)
pub trait RowSource {
    /// Length of the sequence being listed
    fn row_count(&self) -> usize;

    /// Contents for the row at `index`
    fn row(&self, index: usize) -> Option<RowData<'_>>;
}

/// A pooled row widget
///
/// Rows have no catalog identity of their own. They are reassigned to
/// whatever index scrolls into view and keep their name buffer between
/// assignments.
#[derive(Clone, Debug, Default)]
pub struct RowWidget {
    pos_index: Option<usize>,
    name: String,
    favourite: bool,
    selected: bool,
    top: f32,
    active: bool,
}

impl RowWidget {
    /// Index in the result sequence (None = pooled)
    pub fn pos_index(&self) -> Option<usize> {
        self.pos_index
    }

    pub fn is_live(&self) -> bool {
        self.pos_index.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_favourite(&self) -> bool {
        self.favourite
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Top edge in content coordinates
    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bind the row to an index and activate it
    pub(crate) fn assign(&mut self, index: usize, top: f32, data: RowData<'_>) {
        self.pos_index = Some(index);
        self.top = top;
        self.name.clear();
        self.name.push_str(data.name);
        self.favourite = data.favourite;
        self.selected = data.selected;
        self.active = true;
    }

    /// Clear the assignment and deactivate
    pub(crate) fn pool(&mut self) {
        self.pos_index = None;
        self.selected = false;
        self.active = false;
    }

    /// Update the selection mirror without notifying anyone
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Update the favourite mirror without notifying anyone
    pub fn set_favourite(&mut self, favourite: bool) {
        self.favourite = favourite;
    }
}
