//! Multi-select overlay engine for the widget canvas editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Given the
//! host editor's widget registry and current selection, it decides whether a
//! multi-select bounding overlay should appear over a container, computes the
//! overlay rectangle from the live offset geometry of the selected widgets'
//! rendered elements, and surfaces the overlay's toolbar actions (copy, cut,
//! delete) back to the host as events. The host JavaScript layer is
//! responsible only for feeding state changes into the engine and applying
//! the resulting [`engine::HostAction`]s to its store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::OverlayCore`] |
//! | [`widget`] | Widget records and the id-keyed registry |
//! | [`selection`] | Ordered, duplicate-free selection set |
//! | [`bounds`] | Render decision and bounding-box computation |
//! | [`overlay`] | Overlay derivation with presentation options |
//! | [`geom`] | Rectangle type shared across the crate |
//! | [`consts`] | Shared constants (class prefix, toolbar sizing, etc.) |

pub mod bounds;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod overlay;
pub mod selection;
pub mod widget;
