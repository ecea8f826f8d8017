//! Per-element style properties.

use serde::{Deserialize, Serialize};

/// Font families offered by the designer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Georgia,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Courier New")]
    CourierNew,
    Helvetica,
    #[serde(rename = "Playfair Display")]
    PlayfairDisplay,
    Merriweather,
    #[serde(rename = "Open Sans")]
    OpenSans,
    Roboto,
    Lato,
}

impl FontFamily {
    /// Get the font family name as used in CSS.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::Merriweather => "Merriweather",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Roboto => "Roboto",
            FontFamily::Lato => "Lato",
        }
    }

    /// Get all available font families, in picker order.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Arial,
            FontFamily::Georgia,
            FontFamily::TimesNewRoman,
            FontFamily::CourierNew,
            FontFamily::Helvetica,
            FontFamily::PlayfairDisplay,
            FontFamily::Merriweather,
            FontFamily::OpenSans,
            FontFamily::Roboto,
            FontFamily::Lato,
        ]
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "300")]
    Light,
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "600")]
    SemiBold,
    #[serde(rename = "bold")]
    Bold,
}

impl FontWeight {
    /// Get the CSS `font-weight` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Normal => "normal",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "bold",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            FontWeight::Light => "Light",
            FontWeight::Normal => "Normal",
            FontWeight::SemiBold => "Semi-bold",
            FontWeight::Bold => "Bold",
        }
    }

    /// Get all available font weights.
    pub fn all() -> &'static [FontWeight] {
        &[
            FontWeight::Normal,
            FontWeight::Bold,
            FontWeight::SemiBold,
            FontWeight::Light,
        ]
    }
}

/// Horizontal text alignment inside an element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Style properties for an element.
///
/// Every field is optional. Text elements use all of them, image elements
/// only `border_radius` and `padding`, but the fields are stored uniformly.
/// The same type doubles as a patch for [`ElementStyle::merged`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl ElementStyle {
    /// Default font size for new text elements.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    /// Default inner padding for text elements.
    pub const DEFAULT_TEXT_PADDING: f64 = 8.0;
    /// Background color used by text elements unless changed.
    pub const TRANSPARENT: &'static str = "transparent";

    /// Style for a freshly added text element.
    pub fn text_default(color: &str) -> Self {
        Self::text(
            Self::DEFAULT_FONT_SIZE,
            FontFamily::Arial,
            color,
            FontWeight::Normal,
        )
    }

    /// Centered text style on a transparent background.
    pub fn text(font_size: f64, font_family: FontFamily, color: &str, font_weight: FontWeight) -> Self {
        Self {
            font_size: Some(font_size),
            font_family: Some(font_family),
            color: Some(color.to_string()),
            font_weight: Some(font_weight),
            text_align: Some(TextAlign::Center),
            background_color: Some(Self::TRANSPARENT.to_string()),
            border_radius: Some(0.0),
            padding: Some(Self::DEFAULT_TEXT_PADDING),
        }
    }

    /// Style for a freshly added image element.
    pub fn image_default() -> Self {
        Self {
            border_radius: Some(0.0),
            padding: Some(0.0),
            ..Self::default()
        }
    }

    /// Return a copy with every field set in `patch` overriding this style.
    pub fn merged(&self, patch: &ElementStyle) -> Self {
        Self {
            font_size: patch.font_size.or(self.font_size),
            font_family: patch.font_family.or(self.font_family),
            color: patch.color.clone().or_else(|| self.color.clone()),
            font_weight: patch.font_weight.or(self.font_weight),
            text_align: patch.text_align.or(self.text_align),
            background_color: patch
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            border_radius: patch.border_radius.or(self.border_radius),
            padding: patch.padding.or(self.padding),
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    /// Set the font weight.
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the text alignment.
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the corner radius.
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }
}
