//! Targets a color picker can edit.

use crate::document::{
    BackgroundPatch, BorderPatch, CustomColorsPatch, DesignDocument, PaletteSlot, WHITE,
};
use crate::element::{DesignElement, ElementId};

/// Which color of an element a picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementColorField {
    Text,
    Background,
}

/// A color the designer lets the user pick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    /// The solid background color.
    BackgroundSolid,
    /// One gradient stop, by index.
    GradientStop(usize),
    /// The primary border color.
    Border,
    /// The fill between dashes or dots.
    BorderSecondary,
    /// A palette slot.
    Custom(PaletteSlot),
    /// A color on one element.
    Element {
        id: ElementId,
        field: ElementColorField,
    },
}

impl ColorTarget {
    /// Current color at this target, or white if it has none.
    pub fn color_in(&self, doc: &DesignDocument) -> String {
        let color = match self {
            ColorTarget::BackgroundSolid => Some(doc.background.value.as_str()),
            ColorTarget::GradientStop(index) => Some(doc.background.gradient_stop(*index)),
            ColorTarget::Border => Some(doc.border.color.as_str()),
            ColorTarget::BorderSecondary => doc.border.secondary_color.as_deref(),
            ColorTarget::Custom(slot) => Some(doc.custom_colors.get(*slot)),
            ColorTarget::Element { id, field } => doc.element(id).and_then(|el| match field {
                ElementColorField::Text => el.style.color.as_deref(),
                ElementColorField::Background => el.style.background_color.as_deref(),
            }),
        };
        color.unwrap_or(WHITE).to_string()
    }

    /// Set this target to `color`. Unknown elements and out-of-range gradient
    /// stops leave the document unchanged.
    pub fn apply(&self, doc: &DesignDocument, color: &str) -> DesignDocument {
        match self {
            ColorTarget::BackgroundSolid => doc.with_background(&BackgroundPatch {
                value: Some(color.to_string()),
                ..BackgroundPatch::default()
            }),
            ColorTarget::GradientStop(index) => doc.with_background(&BackgroundPatch {
                gradient_colors: Some(doc.background.gradient_colors_with_stop(*index, color)),
                ..BackgroundPatch::default()
            }),
            ColorTarget::Border => doc.with_border(&BorderPatch {
                color: Some(color.to_string()),
                ..BorderPatch::default()
            }),
            ColorTarget::BorderSecondary => doc.with_border(&BorderPatch {
                secondary_color: Some(Some(color.to_string())),
                ..BorderPatch::default()
            }),
            ColorTarget::Custom(slot) => doc.with_custom_colors(&CustomColorsPatch::slot(*slot, color)),
            ColorTarget::Element { id, field } => doc.map_element(id, |el| {
                let mut style = el.style.clone();
                match field {
                    ElementColorField::Text => style.color = Some(color.to_string()),
                    ElementColorField::Background => style.background_color = Some(color.to_string()),
                }
                DesignElement { style, ..el.clone() }
            }),
        }
    }
}
