//! Pointer-drag transform for moving elements on the canvas.

use super::bounds::clamp_position;
use crate::config::LayoutLimits;
use crate::document::DesignDocument;
use crate::element::{DesignElement, ElementId, ElementPatch};
use kurbo::{Point, Rect, Vec2};

/// Convert an element's percentage position into a pixel offset from the
/// canvas origin.
pub fn percent_to_pixels(position: Point, canvas: Rect) -> Vec2 {
    Vec2::new(
        position.x / 100.0 * canvas.width(),
        position.y / 100.0 * canvas.height(),
    )
}

/// An in-progress drag of a single element.
///
/// `offset` is the pointer's distance from the element's top-left corner at
/// pointer-down, so the element does not jump under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub element_id: ElementId,
    pub offset: Vec2,
}

impl DragState {
    /// Start dragging `element` from `pointer`, with the canvas at `canvas`.
    pub fn begin(element: &DesignElement, pointer: Point, canvas: Rect) -> Self {
        let element_origin = canvas.origin() + percent_to_pixels(element.position, canvas);
        Self {
            element_id: element.id.clone(),
            offset: pointer - element_origin,
        }
    }

    /// Percentage position for the dragged element with the pointer at
    /// `pointer`, clamped to the default drag bounds.
    ///
    /// Returns `None` for a zero-sized canvas.
    pub fn position_for(&self, pointer: Point, canvas: Rect) -> Option<Point> {
        self.position_for_with(pointer, canvas, &LayoutLimits::default())
    }

    /// Like [`DragState::position_for`] with explicit limits.
    pub fn position_for_with(&self, pointer: Point, canvas: Rect, limits: &LayoutLimits) -> Option<Point> {
        if canvas.width() <= 0.0 || canvas.height() <= 0.0 {
            return None;
        }
        let local = pointer - canvas.origin() - self.offset;
        let x = local.x / canvas.width() * 100.0;
        let y = local.y / canvas.height() * 100.0;
        Some(clamp_position(Point::new(x, y), limits.drag_min, limits.drag_max))
    }

    /// Move the dragged element in `doc` to follow `pointer`.
    pub fn apply(&self, doc: &DesignDocument, pointer: Point, canvas: Rect) -> DesignDocument {
        self.apply_with(doc, pointer, canvas, &LayoutLimits::default())
    }

    /// Like [`DragState::apply`] with explicit limits.
    pub fn apply_with(
        &self,
        doc: &DesignDocument,
        pointer: Point,
        canvas: Rect,
        limits: &LayoutLimits,
    ) -> DesignDocument {
        match self.position_for_with(pointer, canvas, limits) {
            Some(position) => doc.with_element(&self.element_id, &ElementPatch::new().with_position(position)),
            None => doc.clone(),
        }
    }
}
