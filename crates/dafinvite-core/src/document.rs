//! The design document: one invitation's complete visual layout.
//!
//! Documents are values. Every operation here returns a new document and
//! leaves the receiver untouched, so an editor can keep older versions for
//! undo and a renderer never observes a half-applied edit.

use crate::element::{DesignElement, ElementId, ElementPatch, is_data_uri};
use serde::{Deserialize, Serialize};

/// Color every new background, gradient stop and picker falls back to.
pub const WHITE: &str = "#ffffff";
/// Default gradient direction in degrees.
pub const DEFAULT_GRADIENT_DIRECTION: f64 = 135.0;
/// Minimum border width in pixels.
pub const MIN_BORDER_WIDTH: u32 = 1;
/// Maximum border width in pixels.
pub const MAX_BORDER_WIDTH: u32 = 20;

/// Background fill kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Solid,
    Gradient,
    Image,
}

/// Canvas background.
///
/// All fields are kept regardless of `kind`, so switching kinds back and
/// forth does not lose the other settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    /// Hex color (solid) or data URI (image). Unused for gradients.
    #[serde(default)]
    pub value: String,
    /// Degrees, 0-360. Only meaningful for gradients.
    #[serde(default = "default_gradient_direction")]
    pub gradient_direction: f64,
    /// Ordered gradient stops. Only meaningful for gradients.
    #[serde(default)]
    pub gradient_colors: Vec<String>,
}

fn default_gradient_direction() -> f64 {
    DEFAULT_GRADIENT_DIRECTION
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Solid,
            value: WHITE.to_string(),
            gradient_direction: DEFAULT_GRADIENT_DIRECTION,
            gradient_colors: vec![WHITE.to_string(), WHITE.to_string()],
        }
    }
}

impl Background {
    /// Return a copy with `patch` shallow-merged in.
    pub fn merged(&self, patch: &BackgroundPatch) -> Self {
        Self {
            kind: patch.kind.unwrap_or(self.kind),
            value: patch.value.clone().unwrap_or_else(|| self.value.clone()),
            gradient_direction: patch
                .gradient_direction
                .map(|deg| deg.clamp(0.0, 360.0))
                .unwrap_or(self.gradient_direction),
            gradient_colors: patch
                .gradient_colors
                .clone()
                .unwrap_or_else(|| self.gradient_colors.clone()),
        }
    }

    /// Get a gradient stop color, falling back to white.
    pub fn gradient_stop(&self, index: usize) -> &str {
        self.gradient_colors
            .get(index)
            .map(String::as_str)
            .unwrap_or(WHITE)
    }

    /// Gradient stops with `index` replaced. Out-of-range indices are ignored.
    pub fn gradient_colors_with_stop(&self, index: usize, color: &str) -> Vec<String> {
        let mut colors = self.gradient_colors.clone();
        if let Some(stop) = colors.get_mut(index) {
            *stop = color.to_string();
        }
        colors
    }

    /// Gradient stops with a white stop appended.
    pub fn gradient_colors_with_added_stop(&self) -> Vec<String> {
        let mut colors = self.gradient_colors.clone();
        colors.push(WHITE.to_string());
        colors
    }

    /// Check if an uploaded image is set as the background value.
    pub fn has_image(&self) -> bool {
        is_data_uri(&self.value)
    }

    /// Drop an uploaded image, leaving a plain white value.
    pub fn without_image(&self) -> Self {
        Self {
            value: WHITE.to_string(),
            ..self.clone()
        }
    }

    /// CSS `background` shorthand for this background.
    pub fn to_css(&self) -> String {
        match self.kind {
            BackgroundKind::Gradient if !self.gradient_colors.is_empty() => format!(
                "linear-gradient({}deg, {})",
                self.gradient_direction,
                self.gradient_colors.join(", ")
            ),
            BackgroundKind::Image if self.has_image() => {
                format!("url({}) center/cover no-repeat", self.value)
            }
            _ => self.value.clone(),
        }
    }
}

/// Partial update for [`Background`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundPatch {
    pub kind: Option<BackgroundKind>,
    pub value: Option<String>,
    pub gradient_direction: Option<f64>,
    pub gradient_colors: Option<Vec<String>>,
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// Cycle to the next border style.
    pub fn next(self) -> Self {
        match self {
            BorderStyle::Solid => BorderStyle::Dashed,
            BorderStyle::Dashed => BorderStyle::Dotted,
            BorderStyle::Dotted => BorderStyle::Solid,
        }
    }

    /// Get the CSS `border-style` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }

    /// Check if a secondary color applies to this style.
    pub fn uses_secondary_color(&self) -> bool {
        matches!(self, BorderStyle::Dashed | BorderStyle::Dotted)
    }
}

/// Frame drawn around the invitation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub enabled: bool,
    /// Width in pixels, 1-20.
    pub width: u32,
    pub color: String,
    /// Fill between dashes/dots. Ignored for solid borders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub style: BorderStyle,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 2,
            color: "#002596".to_string(),
            secondary_color: None,
            style: BorderStyle::Solid,
        }
    }
}

impl Border {
    /// Return a copy with `patch` shallow-merged in. Width is clamped to 1-20.
    pub fn merged(&self, patch: &BorderPatch) -> Self {
        Self {
            enabled: patch.enabled.unwrap_or(self.enabled),
            width: patch
                .width
                .map(|w| w.clamp(MIN_BORDER_WIDTH, MAX_BORDER_WIDTH))
                .unwrap_or(self.width),
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
            secondary_color: patch
                .secondary_color
                .clone()
                .unwrap_or_else(|| self.secondary_color.clone()),
            style: patch.style.unwrap_or(self.style),
        }
    }

    /// Secondary color, falling back to white.
    pub fn secondary_or_white(&self) -> &str {
        self.secondary_color.as_deref().unwrap_or(WHITE)
    }

    /// CSS `border` shorthand.
    pub fn to_css(&self) -> String {
        if !self.enabled {
            return "none".to_string();
        }
        format!("{}px {} {}", self.width, self.style.css_value(), self.color)
    }

    /// CSS `border-image` for two-color dashed/dotted borders, if one applies.
    pub fn border_image_css(&self) -> Option<String> {
        if !self.enabled || !self.style.uses_secondary_color() {
            return None;
        }
        let secondary = self.secondary_color.as_deref()?;
        Some(format!(
            "repeating-linear-gradient(45deg, {primary} 0px, {primary} 10px, {secondary} 10px, {secondary} 20px) 1",
            primary = self.color,
        ))
    }
}

/// Partial update for [`Border`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderPatch {
    pub enabled: Option<bool>,
    pub width: Option<u32>,
    pub color: Option<String>,
    /// `Some(None)` clears the secondary color.
    pub secondary_color: Option<Option<String>>,
    pub style: Option<BorderStyle>,
}

/// A named slot in the custom palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSlot {
    Primary,
    Secondary,
    Accent,
}

impl PaletteSlot {
    /// All palette slots.
    pub fn all() -> &'static [PaletteSlot] {
        &[PaletteSlot::Primary, PaletteSlot::Secondary, PaletteSlot::Accent]
    }
}

/// Named palette used for new elements and decorative accents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            primary: "#1e293b".to_string(),
            secondary: "#002596".to_string(),
            accent: "#c5a572".to_string(),
        }
    }
}

impl CustomColors {
    /// Get the color in a slot.
    pub fn get(&self, slot: PaletteSlot) -> &str {
        match slot {
            PaletteSlot::Primary => &self.primary,
            PaletteSlot::Secondary => &self.secondary,
            PaletteSlot::Accent => &self.accent,
        }
    }

    /// Return a copy with `patch` shallow-merged in.
    pub fn merged(&self, patch: &CustomColorsPatch) -> Self {
        Self {
            primary: patch.primary.clone().unwrap_or_else(|| self.primary.clone()),
            secondary: patch
                .secondary
                .clone()
                .unwrap_or_else(|| self.secondary.clone()),
            accent: patch.accent.clone().unwrap_or_else(|| self.accent.clone()),
        }
    }
}

/// Partial update for [`CustomColors`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomColorsPatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

impl CustomColorsPatch {
    /// Patch that sets a single slot.
    pub fn slot(slot: PaletteSlot, color: impl Into<String>) -> Self {
        let color = Some(color.into());
        match slot {
            PaletteSlot::Primary => Self { primary: color, ..Self::default() },
            PaletteSlot::Secondary => Self { secondary: color, ..Self::default() },
            PaletteSlot::Accent => Self { accent: color, ..Self::default() },
        }
    }
}

/// One invitation's layout: elements plus card-level decoration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    /// Elements in insertion order.
    #[serde(default)]
    pub elements: Vec<DesignElement>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub border: Border,
    #[serde(default)]
    pub custom_colors: CustomColors,
}

impl DesignDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an element by ID.
    pub fn element(&self, id: &str) -> Option<&DesignElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Check if an element with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Element IDs in insertion order.
    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(|el| &el.id)
    }

    /// The z-index a newly appended element should get: one above the
    /// current maximum, or 1 for an empty document.
    pub fn next_z_index(&self) -> i32 {
        self.elements
            .iter()
            .map(|el| el.z_index)
            .max()
            .map_or(1, |z| z.saturating_add(1))
    }

    /// Elements back to front. Equal z-indices keep insertion order, so a
    /// later element paints over an earlier one.
    pub fn elements_in_paint_order(&self) -> Vec<&DesignElement> {
        let mut ordered: Vec<&DesignElement> = self.elements.iter().collect();
        ordered.sort_by_key(|el| el.z_index);
        ordered
    }

    /// Replace the element matching `id` with a shallow-merged copy.
    /// Returns an unchanged document if no element matches.
    pub fn with_element(&self, id: &str, patch: &ElementPatch) -> Self {
        self.map_element(id, |el| el.merged(patch))
    }

    /// Replace the element matching `id` with `f(element)`.
    /// Returns an unchanged document if no element matches.
    pub fn map_element(&self, id: &str, f: impl FnOnce(&DesignElement) -> DesignElement) -> Self {
        let mut doc = self.clone();
        if let Some(slot) = doc.elements.iter_mut().find(|el| el.id == id) {
            *slot = f(slot);
        }
        doc
    }

    /// Apply `f` to every element.
    pub fn map_elements(&self, f: impl FnMut(&DesignElement) -> DesignElement) -> Self {
        Self {
            elements: self.elements.iter().map(f).collect(),
            ..self.clone()
        }
    }

    /// Remove the element matching `id`. Unchanged if no element matches.
    pub fn without_element(&self, id: &str) -> Self {
        let mut doc = self.clone();
        doc.elements.retain(|el| el.id != id);
        doc
    }

    /// Add an element at the end of the collection.
    pub fn append_element(&self, element: DesignElement) -> Self {
        let mut doc = self.clone();
        doc.elements.push(element);
        doc
    }

    /// Replace the whole element collection.
    pub fn with_elements(&self, elements: Vec<DesignElement>) -> Self {
        Self {
            elements,
            ..self.clone()
        }
    }

    /// Shallow-merge into the background.
    pub fn with_background(&self, patch: &BackgroundPatch) -> Self {
        Self {
            background: self.background.merged(patch),
            ..self.clone()
        }
    }

    /// Shallow-merge into the border.
    pub fn with_border(&self, patch: &BorderPatch) -> Self {
        Self {
            border: self.border.merged(patch),
            ..self.clone()
        }
    }

    /// Shallow-merge into the custom palette.
    pub fn with_custom_colors(&self, patch: &CustomColorsPatch) -> Self {
        Self {
            custom_colors: self.custom_colors.merged(patch),
            ..self.clone()
        }
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the document to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
