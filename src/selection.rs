//! Selection state: the ordered set of widget ids the user has marked active.
//!
//! Order reflects the sequence in which widgets were selected. The bounds
//! computation is order-independent, but the host surfaces order in its UI
//! (property panes follow the first selection), so it is preserved here.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::widget::WidgetId;

/// Ordered, duplicate-free set of selected widget ids.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Vec<WidgetId>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection, dropping duplicate ids while keeping the
    /// first occurrence of each.
    pub fn replace(&mut self, ids: Vec<WidgetId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Add an id to the end of the selection if not already present.
    pub fn add(&mut self, id: WidgetId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Remove an id from the selection. Returns `true` if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: WidgetId) {
        if !self.remove(&id) {
            self.ids.push(id);
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether the id is currently selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn ids(&self) -> &[WidgetId] {
        &self.ids
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether more than one widget is selected.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.ids.len() > 1
    }
}
