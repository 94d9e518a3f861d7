//! Overlay derivation: the canonical multi-select box plus presentation
//! options.
//!
//! The toolbar and help hint are additive decorations over the same box; the
//! host renders them, this module only decides what they contain.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::Serialize;

use crate::bounds::{self, RectSource};
use crate::consts::HELP_HINT_TEXT;
use crate::geom::Rect;
use crate::selection::SelectionSet;
use crate::widget::WidgetRegistry;

/// Toolbar action attached to the overlay, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayAction {
    Copy,
    Cut,
    Delete,
}

/// Which decorations the host wants layered on the box.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayOptions {
    /// Show the copy/cut/delete toolbar beside the box.
    pub show_actions: bool,
    /// Show the contextual help hint alongside the toolbar.
    pub show_hint: bool,
}

/// A fully derived overlay, ready for the host to position and style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Box geometry, relative to the container's content box.
    pub bounds: Rect,
    /// Toolbar actions to render; empty when the toolbar is disabled.
    pub actions: Vec<OverlayAction>,
    /// Help hint copy, when enabled.
    pub hint: Option<&'static str>,
}

/// Derive the overlay for `container_id`, or `None` when it should not
/// render there.
#[must_use]
pub fn derive(
    container_id: &str,
    selection: &SelectionSet,
    registry: &WidgetRegistry,
    source: &impl RectSource,
    options: OverlayOptions,
) -> Option<Overlay> {
    if !bounds::should_render(container_id, selection, registry) {
        return None;
    }
    let rect = bounds::compute_bounds(selection, source)?;

    let actions = if options.show_actions {
        vec![OverlayAction::Copy, OverlayAction::Cut, OverlayAction::Delete]
    } else {
        Vec::new()
    };
    let hint = options.show_hint.then_some(HELP_HINT_TEXT);

    Some(Overlay { bounds: rect, actions, hint })
}
