//! Widget records and the in-memory registry.
//!
//! This module defines the widget as the editor knows it (`Widget`), the
//! generated class name that ties a widget id to its rendered element, and
//! the runtime registry that owns all live widgets (`WidgetRegistry`).
//!
//! Data flows into this layer from the host store (JSON deserialization of
//! snapshots and incremental create/delete events). The overlay derivation
//! reads from `WidgetRegistry` to resolve selected ids to their parents.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::WIDGET_CLASS_PREFIX;

/// Unique identifier for a widget.
pub type WidgetId = String;

/// A widget as stored in the registry and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier for this widget.
    pub widget_id: WidgetId,
    /// Id of the container that owns this widget; empty for top-level.
    #[serde(default)]
    pub parent_id: String,
    /// Human-readable name shown in the editor.
    #[serde(default)]
    pub widget_name: String,
    /// Open-ended per-widget configuration (layout, bindings, etc.).
    #[serde(default)]
    pub props: serde_json::Value,
}

/// CSS class generated for a widget's rendered element.
///
/// The rendering layer tags each widget's root element with this class; the
/// geometry lookup resolves ids back to elements through it.
#[must_use]
pub fn widget_class_name(id: &str) -> String {
    format!("{WIDGET_CLASS_PREFIX}{id}")
}

/// In-memory registry of widgets, keyed by id.
pub struct WidgetRegistry {
    widgets: HashMap<WidgetId, Widget>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { widgets: HashMap::new() }
    }

    /// Insert or replace a widget. If a widget with the same id already
    /// exists it is overwritten.
    pub fn insert(&mut self, widget: Widget) {
        self.widgets.insert(widget.widget_id.clone(), widget);
    }

    /// Remove a widget by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Widget> {
        self.widgets.remove(id)
    }

    /// Return a reference to a widget by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.get(id)
    }

    /// Replace all widgets with a full snapshot.
    pub fn load_snapshot(&mut self, widgets: Vec<Widget>) {
        self.widgets.clear();
        for widget in widgets {
            self.widgets.insert(widget.widget_id.clone(), widget);
        }
    }

    /// Ids of all widgets owned by `parent_id`.
    #[must_use]
    pub fn children_of(&self, parent_id: &str) -> Vec<&Widget> {
        let mut children: Vec<&Widget> = self
            .widgets
            .values()
            .filter(|w| w.parent_id == parent_id)
            .collect();
        children.sort_by(|a, b| a.widget_id.cmp(&b.widget_id));
        children
    }

    /// Number of widgets currently in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if the registry contains no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
