//! Bulk layout operations over every element.

use crate::config::LayoutLimits;
use crate::document::DesignDocument;
use crate::element::{DesignElement, TextAlign};
use kurbo::Point;

/// Clamp both coordinates of `position` into `[min, max]`.
///
/// Never panics: a NaN coordinate lands on `min`, and an inverted range
/// resolves to `max`.
pub fn clamp_position(position: Point, min: f64, max: f64) -> Point {
    Point::new(clamp_coord(position.x, min, max), clamp_coord(position.y, min, max))
}

fn clamp_coord(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Center every element horizontally and center-align its text.
///
/// Image elements get the text alignment too; it is stored uniformly.
pub fn center_all(doc: &DesignDocument) -> DesignDocument {
    center_all_with(doc, &LayoutLimits::default())
}

/// Like [`center_all`] with explicit limits.
pub fn center_all_with(doc: &DesignDocument, limits: &LayoutLimits) -> DesignDocument {
    doc.map_elements(|el| {
        let mut centered = el.clone();
        centered.position.x = limits.center_x;
        centered.style.text_align = Some(TextAlign::Center);
        centered
    })
}

/// Pull every element back inside the snap margins.
pub fn snap_to_fit(doc: &DesignDocument) -> DesignDocument {
    snap_to_fit_with(doc, &LayoutLimits::default())
}

/// Like [`snap_to_fit`] with explicit limits.
pub fn snap_to_fit_with(doc: &DesignDocument, limits: &LayoutLimits) -> DesignDocument {
    doc.map_elements(|el| DesignElement {
        position: clamp_position(el.position, limits.snap_min, limits.snap_max),
        ..el.clone()
    })
}
