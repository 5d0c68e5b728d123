// Selectable table state.
// Wraps a static row set with a ratatui TableState for keyboard navigation.

use ratatui::widgets::TableState;

/// Rows plus the current selection. Rows never change after construction.
#[derive(Debug)]
pub struct SelectableTable<T> {
    pub items: Vec<T>,
    pub table_state: TableState,
}

impl<T> SelectableTable<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut table = Self {
            items,
            table_state: TableState::default(),
        };
        table.reset_selection();
        table
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Get the selected row.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected()?)
    }

    /// Select the next row, staying on the last one.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= self.items.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Select the previous row, staying on the first one.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Reset selection to first row.
    pub fn reset_selection(&mut self) {
        if self.items.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }
}
