//! Shared constants for the overlay crate.

// ── Geometry lookup ─────────────────────────────────────────────

/// Prefix of the generated per-widget CSS class used to resolve widget ids
/// to their rendered elements.
pub const WIDGET_CLASS_PREFIX: &str = "widget-";

// ── Overlay toolbar ─────────────────────────────────────────────

/// Side length of a toolbar action button, in CSS pixels.
pub const ACTION_BUTTON_SIZE_PX: f64 = 28.0;

/// Gap between the box's right edge and the toolbar, in CSS pixels.
pub const ACTIONS_GUTTER_PX: f64 = 4.0;

/// Help hint shown alongside the toolbar when enabled.
pub const HELP_HINT_TEXT: &str =
    "Copy, cut or delete the selected widgets from the toolbar, or use the keyboard shortcuts.";
