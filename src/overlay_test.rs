#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use serde_json::json;

use super::*;
use crate::consts::HELP_HINT_TEXT;
use crate::widget::Widget;

fn make_widget(id: &str, parent: &str) -> Widget {
    Widget {
        widget_id: id.to_owned(),
        parent_id: parent.to_owned(),
        widget_name: format!("Widget {id}"),
        props: json!({}),
    }
}

fn registry_with(widgets: &[(&str, &str)]) -> WidgetRegistry {
    let mut registry = WidgetRegistry::new();
    for (id, parent) in widgets {
        registry.insert(make_widget(id, parent));
    }
    registry
}

fn selection_of(ids: &[&str]) -> SelectionSet {
    let mut set = SelectionSet::new();
    set.replace(ids.iter().map(|id| (*id).to_owned()).collect());
    set
}

fn source_with(rects: &[(&str, Rect)]) -> HashMap<String, Rect> {
    rects.iter().map(|(id, r)| ((*id).to_owned(), *r)).collect()
}

/// Two siblings under "c0" with known rects; overlay bounds {10,5,25,30}.
fn two_sibling_fixture() -> (WidgetRegistry, SelectionSet, HashMap<String, Rect>) {
    let registry = registry_with(&[("w1", "c0"), ("w2", "c0")]);
    let selection = selection_of(&["w1", "w2"]);
    let source = source_with(&[
        ("w1", Rect::new(10.0, 10.0, 20.0, 20.0)),
        ("w2", Rect::new(30.0, 5.0, 10.0, 10.0)),
    ]);
    (registry, selection, source)
}

// =============================================================
// derive: plain box
// =============================================================

#[test]
fn derive_plain_box() {
    let (registry, selection, source) = two_sibling_fixture();
    let overlay = derive("c0", &selection, &registry, &source, OverlayOptions::default()).unwrap();
    assert_eq!(overlay.bounds, Rect::new(10.0, 5.0, 25.0, 30.0));
    assert!(overlay.actions.is_empty());
    assert!(overlay.hint.is_none());
}

#[test]
fn derive_none_when_should_not_render() {
    let (registry, selection, source) = two_sibling_fixture();
    assert!(derive("c1", &selection, &registry, &source, OverlayOptions::default()).is_none());
}

#[test]
fn derive_none_for_single_selection() {
    let (registry, _, source) = two_sibling_fixture();
    let selection = selection_of(&["w1"]);
    assert!(derive("c0", &selection, &registry, &source, OverlayOptions::default()).is_none());
}

#[test]
fn derive_none_when_nothing_mounted() {
    let (registry, selection, _) = two_sibling_fixture();
    let empty: HashMap<String, Rect> = HashMap::new();
    assert!(derive("c0", &selection, &registry, &empty, OverlayOptions::default()).is_none());
}

// =============================================================
// derive: decorations
// =============================================================

#[test]
fn derive_with_actions_toolbar() {
    let (registry, selection, source) = two_sibling_fixture();
    let options = OverlayOptions { show_actions: true, show_hint: false };
    let overlay = derive("c0", &selection, &registry, &source, options).unwrap();
    assert_eq!(
        overlay.actions,
        [OverlayAction::Copy, OverlayAction::Cut, OverlayAction::Delete]
    );
    assert!(overlay.hint.is_none());
}

#[test]
fn derive_with_actions_and_hint() {
    let (registry, selection, source) = two_sibling_fixture();
    let options = OverlayOptions { show_actions: true, show_hint: true };
    let overlay = derive("c0", &selection, &registry, &source, options).unwrap();
    assert_eq!(overlay.actions.len(), 3);
    assert_eq!(overlay.hint, Some(HELP_HINT_TEXT));
}

#[test]
fn derive_decorations_do_not_change_bounds() {
    let (registry, selection, source) = two_sibling_fixture();
    let plain = derive("c0", &selection, &registry, &source, OverlayOptions::default()).unwrap();
    let options = OverlayOptions { show_actions: true, show_hint: true };
    let decorated = derive("c0", &selection, &registry, &source, options).unwrap();
    assert_eq!(plain.bounds, decorated.bounds);
}

#[test]
fn derive_options_default_is_undecorated() {
    let options = OverlayOptions::default();
    assert!(!options.show_actions);
    assert!(!options.show_hint);
}

// =============================================================
// serde
// =============================================================

#[test]
fn overlay_action_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&OverlayAction::Copy).unwrap(), "\"copy\"");
    assert_eq!(serde_json::to_string(&OverlayAction::Cut).unwrap(), "\"cut\"");
    assert_eq!(serde_json::to_string(&OverlayAction::Delete).unwrap(), "\"delete\"");
}

#[test]
fn overlay_serializes_for_the_host() {
    let (registry, selection, source) = two_sibling_fixture();
    let options = OverlayOptions { show_actions: true, show_hint: false };
    let overlay = derive("c0", &selection, &registry, &source, options).unwrap();
    let value = serde_json::to_value(&overlay).unwrap();
    assert_eq!(value["bounds"]["top"], 10.0);
    assert_eq!(value["bounds"]["left"], 5.0);
    assert_eq!(value["actions"][0], "copy");
    assert!(value["hint"].is_null());
}
