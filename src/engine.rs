use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::bounds::RectSource;
use crate::geom::Rect;
use crate::overlay::{self, Overlay, OverlayOptions};
use crate::selection::SelectionSet;
use crate::widget::{Widget, WidgetId, WidgetRegistry, widget_class_name};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from toolbar handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    None,
    /// Copy the widgets to the host clipboard.
    CopyRequested { ids: Vec<WidgetId> },
    /// Copy the widgets to the host clipboard and delete the originals.
    CutRequested { ids: Vec<WidgetId> },
    /// Widgets were removed locally; the host should persist the deletion.
    WidgetsDeleted { ids: Vec<WidgetId> },
}

/// Core overlay state — all logic that doesn't depend on the DOM.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct OverlayCore {
    pub registry: WidgetRegistry,
    pub selection: SelectionSet,
    pub options: OverlayOptions,
}

impl Default for OverlayCore {
    fn default() -> Self {
        Self {
            registry: WidgetRegistry::new(),
            selection: SelectionSet::new(),
            options: OverlayOptions::default(),
        }
    }
}

impl OverlayCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the registry from a host store snapshot. Selected ids that no
    /// longer resolve are kept; the overlay derivation discards them.
    pub fn load_snapshot(&mut self, widgets: Vec<Widget>) {
        self.registry.load_snapshot(widgets);
    }

    /// Apply a host broadcast: widget created.
    pub fn apply_create(&mut self, widget: Widget) {
        self.registry.insert(widget);
    }

    /// Apply a host broadcast: widget deleted. Also evicts the id from the
    /// selection so a later re-use of the id cannot resurrect it.
    pub fn apply_delete(&mut self, id: &str) {
        self.registry.remove(id);
        self.selection.remove(id);
    }

    // --- Selection inputs ---

    /// Replace the selection with the host's current one.
    pub fn set_selection(&mut self, ids: Vec<WidgetId>) {
        self.selection.replace(ids);
    }

    /// Toggle a single id in or out of the selection.
    pub fn toggle_selected(&mut self, id: WidgetId) {
        self.selection.toggle(id);
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Set which decorations the overlay carries.
    pub fn set_options(&mut self, options: OverlayOptions) {
        self.options = options;
    }

    // --- Derivation ---

    /// Derive the overlay for `container_id`, or `None` when it should not
    /// render there.
    #[must_use]
    pub fn overlay_for(&self, container_id: &str, source: &impl RectSource) -> Option<Overlay> {
        overlay::derive(container_id, &self.selection, &self.registry, source, self.options)
    }

    // --- Toolbar events ---

    /// Toolbar copy button pressed.
    #[must_use]
    pub fn request_copy(&self) -> HostAction {
        if self.selection.is_empty() {
            return HostAction::None;
        }
        HostAction::CopyRequested { ids: self.selection.ids().to_vec() }
    }

    /// Toolbar cut button pressed.
    #[must_use]
    pub fn request_cut(&self) -> HostAction {
        if self.selection.is_empty() {
            return HostAction::None;
        }
        HostAction::CutRequested { ids: self.selection.ids().to_vec() }
    }

    /// Toolbar delete button pressed. Removes the selected widgets from the
    /// registry and clears the selection before reporting back.
    pub fn request_delete(&mut self) -> HostAction {
        if self.selection.is_empty() {
            return HostAction::None;
        }
        let ids = self.selection.ids().to_vec();
        for id in &ids {
            self.registry.remove(id);
        }
        self.selection.clear();
        HostAction::WidgetsDeleted { ids }
    }
}

/// The full overlay engine. Wraps `OverlayCore` and reads live widget
/// geometry from the document.
pub struct Engine {
    pub core: OverlayCore,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self { core: OverlayCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn load_snapshot(&mut self, widgets: Vec<Widget>) {
        self.core.load_snapshot(widgets);
    }

    pub fn apply_create(&mut self, widget: Widget) {
        self.core.apply_create(widget);
    }

    pub fn apply_delete(&mut self, id: &str) {
        self.core.apply_delete(id);
    }

    pub fn set_selection(&mut self, ids: Vec<WidgetId>) {
        self.core.set_selection(ids);
    }

    pub fn set_options(&mut self, options: OverlayOptions) {
        self.core.set_options(options);
    }

    // --- Derivation ---

    /// Derive the overlay for `container_id` from live DOM geometry.
    #[must_use]
    pub fn overlay_for(&self, container_id: &str) -> Option<Overlay> {
        self.core.overlay_for(container_id, &DomRectSource)
    }

    // --- Delegated toolbar events ---

    #[must_use]
    pub fn request_copy(&self) -> HostAction {
        self.core.request_copy()
    }

    #[must_use]
    pub fn request_cut(&self) -> HostAction {
        self.core.request_cut()
    }

    pub fn request_delete(&mut self) -> HostAction {
        self.core.request_delete()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Geometry source backed by the live document.
///
/// Resolves a widget id to the element carrying its generated class and
/// reads that element's offset box. Every absence case (no window, no
/// document, element not mounted, element not an `HtmlElement`) degrades to
/// `None` so a stale selection between state update and paint never errors.
pub struct DomRectSource;

impl RectSource for DomRectSource {
    fn rect_of(&self, id: &str) -> Option<Rect> {
        let document = web_sys::window()?.document()?;
        let selector = format!(".{}", widget_class_name(id));
        let element = match document.query_selector(&selector) {
            Ok(Some(element)) => element,
            Ok(None) | Err(_) => return None,
        };
        let html: &HtmlElement = element.dyn_ref::<HtmlElement>()?;
        Some(Rect {
            top: f64::from(html.offset_top()),
            left: f64::from(html.offset_left()),
            width: f64::from(html.offset_width()),
            height: f64::from(html.offset_height()),
        })
    }
}
