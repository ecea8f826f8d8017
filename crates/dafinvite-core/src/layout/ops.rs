//! Single-element layout operations and hit testing.
//!
//! All operations treat an unknown id as a no-op and return an equal
//! document.

use super::bounds::clamp_position;
use super::drag::percent_to_pixels;
use crate::config::LayoutLimits;
use crate::document::DesignDocument;
use crate::element::{DesignElement, ElementStyle};
use kurbo::{Point, Rect, Size};

/// Move an element to a percentage position, clamped into the canvas.
pub fn move_element(doc: &DesignDocument, id: &str, position: Point) -> DesignDocument {
    move_element_with(doc, id, position, &LayoutLimits::default())
}

/// Like [`move_element`] with explicit limits.
pub fn move_element_with(
    doc: &DesignDocument,
    id: &str,
    position: Point,
    limits: &LayoutLimits,
) -> DesignDocument {
    let position = clamp_position(position, limits.position_min, limits.position_max);
    doc.map_element(id, |el| DesignElement {
        position,
        ..el.clone()
    })
}

/// Resize an element. Each dimension is kept at least one pixel.
pub fn resize_element(doc: &DesignDocument, id: &str, size: Size) -> DesignDocument {
    resize_element_with(doc, id, size, &LayoutLimits::default())
}

/// Like [`resize_element`] with explicit limits.
pub fn resize_element_with(doc: &DesignDocument, id: &str, size: Size, limits: &LayoutLimits) -> DesignDocument {
    let min = limits.min_element_size;
    // NaN.max(min) is min
    let size = Size::new(size.width.max(min), size.height.max(min));
    doc.map_element(id, |el| DesignElement { size, ..el.clone() })
}

/// Merge the set fields of `patch` into an element's style.
pub fn restyle_element(doc: &DesignDocument, id: &str, patch: &ElementStyle) -> DesignDocument {
    doc.map_element(id, |el| DesignElement {
        style: el.style.merged(patch),
        ..el.clone()
    })
}

/// Raise an element above every other element.
pub fn bring_to_front(doc: &DesignDocument, id: &str) -> DesignDocument {
    let top = doc
        .elements
        .iter()
        .filter(|el| el.id != id)
        .map(|el| el.z_index)
        .max();
    match top {
        Some(top) => set_z_index(doc, id, top.saturating_add(1)),
        None => doc.clone(),
    }
}

/// Lower an element below every other element.
pub fn send_to_back(doc: &DesignDocument, id: &str) -> DesignDocument {
    let bottom = doc
        .elements
        .iter()
        .filter(|el| el.id != id)
        .map(|el| el.z_index)
        .min();
    match bottom {
        Some(bottom) => set_z_index(doc, id, bottom.saturating_sub(1)),
        None => doc.clone(),
    }
}

fn set_z_index(doc: &DesignDocument, id: &str, z_index: i32) -> DesignDocument {
    doc.map_element(id, |el| DesignElement {
        z_index,
        ..el.clone()
    })
}

/// Screen-space rectangle an element occupies on a canvas at `canvas`.
pub fn element_rect(element: &DesignElement, canvas: Rect) -> Rect {
    Rect::from_origin_size(
        canvas.origin() + percent_to_pixels(element.position, canvas),
        element.size,
    )
}

/// Topmost element under `pointer`, if any.
pub fn element_at(doc: &DesignDocument, canvas: Rect, pointer: Point) -> Option<&DesignElement> {
    // Front to back
    doc.elements_in_paint_order()
        .into_iter()
        .rev()
        .find(|el| element_rect(el, canvas).contains(pointer))
}
