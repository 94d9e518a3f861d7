#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// Offset geometry of a rendered element, in CSS pixels relative to its
/// offset parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Bottom edge (`top + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Minimal rectangle enclosing every rect in `rects`.
///
/// Returns `None` for an empty input instead of a degenerate or NaN
/// rectangle; callers treat that as "nothing to draw".
#[must_use]
pub fn enclosing(rects: &[Rect]) -> Option<Rect> {
    let first = rects.first()?;
    let mut top = first.top;
    let mut left = first.left;
    let mut bottom = first.bottom();
    let mut right = first.right();
    for r in &rects[1..] {
        top = top.min(r.top);
        left = left.min(r.left);
        bottom = bottom.max(r.bottom());
        right = right.max(r.right());
    }
    Some(Rect { top, left, width: right - left, height: bottom - top })
}
