//! Elements placed on the invitation canvas.

mod image;
mod style;

pub use image::{ImageDataError, ImageFormat, decode_data_uri, encode_data_uri, is_data_uri};
pub use style::{ElementStyle, FontFamily, FontWeight, TextAlign};

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = String;

/// Default size of an uploaded image element, in pixels.
pub const DEFAULT_IMAGE_SIZE: Size = Size::new(100.0, 100.0);
/// Default size of a text element added from the toolbar, in pixels.
pub const DEFAULT_TEXT_SIZE: Size = Size::new(200.0, 50.0);
/// Where new elements land, in canvas percentages.
pub const DEFAULT_INSERT_POSITION: Point = Point::new(50.0, 50.0);
/// Content of a text element added from the toolbar.
pub const NEW_TEXT_CONTENT: &str = "New Text";

/// Generate a fresh element id: `<prefix>-<unix millis>-<random suffix>`.
pub fn generate_element_id(prefix: &str) -> ElementId {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &suffix[..8])
}

/// What an element displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// A block of text. May be empty.
    Text {
        #[serde(default)]
        content: String,
    },
    /// An uploaded image, stored as a data URI.
    #[serde(alias = "logo")]
    Image {
        #[serde(rename = "src", alias = "imageData")]
        image_data: String,
    },
}

/// A positionable block on the invitation canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignElement {
    pub id: ElementId,
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Top-left corner in canvas percentages (0-100).
    pub position: Point,
    /// Box size in pixels.
    pub size: Size,
    #[serde(default)]
    pub style: ElementStyle,
    /// Stacking order; higher paints on top.
    #[serde(default)]
    pub z_index: i32,
}

impl DesignElement {
    /// Get the text content, if this is a text element.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content } => Some(content),
            ElementKind::Image { .. } => None,
        }
    }

    /// Get the image data URI, if this is an image element.
    pub fn image_data(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Image { image_data } => Some(image_data),
            ElementKind::Text { .. } => None,
        }
    }

    /// Check if this element is text.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image { .. })
    }

    /// Short label for element lists.
    pub fn label(&self) -> String {
        match &self.kind {
            ElementKind::Text { content } => content.clone(),
            ElementKind::Image { .. } => format!("Image {}", self.id),
        }
    }

    /// Return a copy with `patch` shallow-merged in.
    ///
    /// `content` only applies to text elements and `image_data` only to image
    /// elements; a `style` in the patch replaces the whole style.
    pub fn merged(&self, patch: &ElementPatch) -> Self {
        let mut element = self.clone();
        match &mut element.kind {
            ElementKind::Text { content } => {
                if let Some(new_content) = &patch.content {
                    content.clone_from(new_content);
                }
            }
            ElementKind::Image { image_data } => {
                if let Some(new_data) = &patch.image_data {
                    image_data.clone_from(new_data);
                }
            }
        }
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(size) = patch.size {
            element.size = size;
        }
        if let Some(style) = &patch.style {
            element.style = style.clone();
        }
        if let Some(z_index) = patch.z_index {
            element.z_index = z_index;
        }
        element
    }
}

/// Partial update for an element. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub content: Option<String>,
    pub image_data: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub style: Option<ElementStyle>,
    pub z_index: Option<i32>,
}

impl ElementPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_image_data(mut self, image_data: impl Into<String>) -> Self {
        self.image_data = Some(image_data.into());
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

/// Create a text element with a generated id.
pub fn create_text_element(
    content: impl Into<String>,
    position: Point,
    size: Size,
    style: ElementStyle,
    z_index: i32,
) -> DesignElement {
    DesignElement {
        id: generate_element_id("text"),
        kind: ElementKind::Text {
            content: content.into(),
        },
        position,
        size,
        style,
        z_index,
    }
}

/// Create an image element with a generated id.
///
/// `size` defaults to [`DEFAULT_IMAGE_SIZE`]; the style only carries the box
/// fields (`border_radius`, `padding`).
pub fn create_image_element(
    image_data: impl Into<String>,
    position: Point,
    size: Option<Size>,
    z_index: i32,
) -> DesignElement {
    DesignElement {
        id: generate_element_id("image"),
        kind: ElementKind::Image {
            image_data: image_data.into(),
        },
        position,
        size: size.unwrap_or(DEFAULT_IMAGE_SIZE),
        style: ElementStyle::image_default(),
        z_index,
    }
}

/// The "New Text" element added from the toolbar, colored with `color`.
pub fn default_text_element(color: &str, z_index: i32) -> DesignElement {
    create_text_element(
        NEW_TEXT_CONTENT,
        DEFAULT_INSERT_POSITION,
        DEFAULT_TEXT_SIZE,
        ElementStyle::text_default(color),
        z_index,
    )
}
