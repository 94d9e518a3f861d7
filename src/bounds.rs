//! Render decision and bounding-box computation for the multi-select overlay.
//!
//! Pure derivation over immutable snapshots: the registry and geometry source
//! are read-only for the duration of one computation, and every error-like
//! condition (stale ids, unmounted elements, empty selection) degrades to
//! "no overlay" instead of signaling failure.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use std::collections::HashMap;

use crate::geom::{self, Rect};
use crate::selection::SelectionSet;
use crate::widget::{Widget, WidgetRegistry};

/// Read-only geometry lookup for rendered widgets.
///
/// Implemented over the live document in production
/// ([`crate::engine::DomRectSource`]) and over plain maps in tests. A widget
/// that is selected but not yet mounted simply has no rect.
pub trait RectSource {
    /// Current offset geometry of the widget's rendered element, if mounted.
    fn rect_of(&self, id: &str) -> Option<Rect>;
}

impl RectSource for HashMap<String, Rect> {
    fn rect_of(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

/// Whether the multi-select overlay should render over `container_id`.
///
/// True only when multiple widgets are selected, every resolved widget shares
/// one parent, and that parent is `container_id`. Selected ids with no
/// registry entry are discarded before the parent comparison; an empty
/// `container_id` never matches, so a selection of fully stale ids cannot
/// produce a false positive on the top-level canvas.
#[must_use]
pub fn should_render(container_id: &str, selection: &SelectionSet, registry: &WidgetRegistry) -> bool {
    if container_id.is_empty() {
        return false;
    }

    let resolved: Vec<&Widget> = selection
        .ids()
        .iter()
        .filter_map(|id| registry.get(id))
        .collect();
    let Some(first) = resolved.first() else {
        return false;
    };

    let has_common_parent = resolved.iter().all(|w| w.parent_id == first.parent_id);
    selection.is_multiple() && has_common_parent && container_id == first.parent_id
}

/// Bounding box enclosing the rendered geometry of all selected widgets.
///
/// Ids without a rendered rect are excluded; if none of the selection is
/// mounted yet (a state-before-paint race), there is no box.
#[must_use]
pub fn compute_bounds(selection: &SelectionSet, source: &impl RectSource) -> Option<Rect> {
    let rects: Vec<Rect> = selection
        .ids()
        .iter()
        .filter_map(|id| source.rect_of(id))
        .collect();
    geom::enclosing(&rects)
}
