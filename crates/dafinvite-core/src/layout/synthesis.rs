//! Default template seeded into an empty design.

use super::datetime::format_event_date_time;
use crate::document::{Background, BackgroundKind, CustomColors, DEFAULT_GRADIENT_DIRECTION, DesignDocument, WHITE};
use crate::element::{DesignElement, ElementKind, ElementStyle, FontFamily, FontWeight};
use crate::event::EventData;
use kurbo::{Point, Size};

/// Horizontal position shared by all template elements.
const TEMPLATE_X: f64 = 50.0;
const MUTED_TEXT: &str = "#475569";
const FAINT_TEXT: &str = "#64748b";

/// A template element whose content is derived from event data.
///
/// The element ids are reserved: reconciliation recognizes bound elements by
/// id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundField {
    Title,
    Description,
    DateTime,
    Location,
    DressCode,
    Notes,
    Contact,
}

/// Geometry and typography of one template slot.
struct Slot {
    y: f64,
    size: Size,
    font_size: f64,
    font_family: FontFamily,
    font_weight: FontWeight,
    z_index: i32,
}

impl BoundField {
    /// All bound fields, in template order.
    pub fn all() -> &'static [BoundField] {
        &[
            BoundField::Title,
            BoundField::Description,
            BoundField::DateTime,
            BoundField::Location,
            BoundField::DressCode,
            BoundField::Notes,
            BoundField::Contact,
        ]
    }

    /// The reserved element id.
    pub fn id(&self) -> &'static str {
        match self {
            BoundField::Title => "title",
            BoundField::Description => "description",
            BoundField::DateTime => "datetime",
            BoundField::Location => "location",
            BoundField::DressCode => "dresscode",
            BoundField::Notes => "notes",
            BoundField::Contact => "contact",
        }
    }

    /// Look up the bound field for an element id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.id() == id)
    }

    /// Content this field displays for `event`, with placeholders for
    /// empty values.
    pub fn content(&self, event: &EventData) -> String {
        match self {
            BoundField::Title => or_placeholder(&event.title, "EVENT TITLE"),
            BoundField::Description => or_placeholder(&event.description, "Event Description"),
            BoundField::DateTime => format_event_date_time(&event.date, &event.time),
            BoundField::Location => or_placeholder(&event.location, "Event Location"),
            BoundField::DressCode if event.dress_code.is_empty() => String::new(),
            BoundField::DressCode => format!("Dress Code: {}", event.dress_code),
            BoundField::Notes => event.notes.clone(),
            BoundField::Contact => format!(
                "POC: {}\n{}\n{}",
                or_placeholder(&event.contact_name, "Contact Name"),
                or_placeholder(&event.contact_email, "email@mail.mil"),
                or_placeholder(&event.contact_phone, "(555) 123-4567"),
            ),
        }
    }

    /// Text color of this field's template element.
    fn color<'a>(&self, palette: &'a CustomColors) -> &'a str {
        match self {
            BoundField::Title | BoundField::DateTime | BoundField::Location => &palette.primary,
            BoundField::Description | BoundField::Contact => MUTED_TEXT,
            BoundField::DressCode | BoundField::Notes => FAINT_TEXT,
        }
    }

    fn slot(&self) -> Slot {
        let (y, width, height, font_size, z_index) = match self {
            BoundField::Title => (5.0, 350.0, 50.0, 28.0, 10),
            BoundField::Description => (15.0, 320.0, 40.0, 14.0, 9),
            BoundField::DateTime => (25.0, 300.0, 30.0, 16.0, 8),
            BoundField::Location => (35.0, 280.0, 25.0, 14.0, 7),
            BoundField::DressCode => (45.0, 250.0, 25.0, 13.0, 6),
            BoundField::Notes => (55.0, 320.0, 40.0, 12.0, 5),
            BoundField::Contact => (75.0, 280.0, 60.0, 12.0, 4),
        };
        let font_family = match self {
            BoundField::Title => FontFamily::Georgia,
            _ => FontFamily::Arial,
        };
        let font_weight = match self {
            BoundField::Title => FontWeight::Bold,
            BoundField::DateTime => FontWeight::SemiBold,
            _ => FontWeight::Normal,
        };
        Slot {
            y,
            size: Size::new(width, height),
            font_size,
            font_family,
            font_weight,
            z_index,
        }
    }

    /// Build this field's template element.
    pub fn element(&self, event: &EventData, palette: &CustomColors) -> DesignElement {
        let slot = self.slot();
        DesignElement {
            id: self.id().to_string(),
            kind: ElementKind::Text {
                content: self.content(event),
            },
            position: Point::new(TEMPLATE_X, slot.y),
            size: slot.size,
            style: ElementStyle::text(
                slot.font_size,
                slot.font_family,
                self.color(palette),
                slot.font_weight,
            ),
            z_index: slot.z_index,
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Build the default template: one text element per [`BoundField`], in
/// template order, colored from `palette`.
pub fn synthesize_default_elements(event: &EventData, palette: &CustomColors) -> Vec<DesignElement> {
    BoundField::all()
        .iter()
        .map(|field| field.element(event, palette))
        .collect()
}

/// The plain white background a freshly seeded design starts with.
pub fn seeded_background() -> Background {
    Background {
        kind: BackgroundKind::Solid,
        value: WHITE.to_string(),
        gradient_direction: DEFAULT_GRADIENT_DIRECTION,
        gradient_colors: vec![WHITE.to_string(), WHITE.to_string()],
    }
}

/// Seed `doc` with the default template and a white background.
///
/// Replaces the element list wholesale; callers only seed empty designs.
pub fn seed_document(doc: &DesignDocument, event: &EventData) -> DesignDocument {
    let elements = synthesize_default_elements(event, &doc.custom_colors);
    log::debug!("Seeding design with {} template elements", elements.len());
    DesignDocument {
        elements,
        background: seeded_background(),
        ..doc.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TextAlign;

    fn full_event() -> EventData {
        EventData {
            title: "Change of Command".into(),
            description: "Please join us".into(),
            date: "2025-07-04".into(),
            time: "14:30".into(),
            location: "Parade Field".into(),
            contact_name: "Capt. Smith".into(),
            contact_email: "smith@mail.mil".into(),
            contact_phone: "555-0100".into(),
            dress_code: "Service Dress".into(),
            notes: "Reception to follow".into(),
        }
    }

    #[test]
    fn test_template_ids_and_order() {
        let elements = synthesize_default_elements(&EventData::default(), &CustomColors::default());
        let ids: Vec<_> = elements.iter().map(|el| el.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["title", "description", "datetime", "location", "dresscode", "notes", "contact"]
        );
    }

    #[test]
    fn test_placeholders() {
        let elements = synthesize_default_elements(&EventData::default(), &CustomColors::default());
        let content = |id: &str| {
            elements
                .iter()
                .find(|el| el.id == id)
                .and_then(|el| el.content())
                .map(str::to_string)
        };
        assert_eq!(content("title").as_deref(), Some("EVENT TITLE"));
        assert_eq!(content("description").as_deref(), Some("Event Description"));
        assert_eq!(content("datetime").as_deref(), Some(""));
        assert_eq!(content("location").as_deref(), Some("Event Location"));
        assert_eq!(content("dresscode").as_deref(), Some(""));
        assert_eq!(content("notes").as_deref(), Some(""));
        assert_eq!(
            content("contact").as_deref(),
            Some("POC: Contact Name\nemail@mail.mil\n(555) 123-4567")
        );
    }

    #[test]
    fn test_event_values() {
        let event = full_event();
        assert_eq!(BoundField::Title.content(&event), "Change of Command");
        assert_eq!(BoundField::DateTime.content(&event), "Friday, July 4, 2025 at 2:30 PM");
        assert_eq!(BoundField::DressCode.content(&event), "Dress Code: Service Dress");
        assert_eq!(BoundField::Notes.content(&event), "Reception to follow");
        assert_eq!(
            BoundField::Contact.content(&event),
            "POC: Capt. Smith\nsmith@mail.mil\n555-0100"
        );
    }

    #[test]
    fn test_title_geometry_and_style() {
        let palette = CustomColors {
            primary: "#0a0a0a".into(),
            ..CustomColors::default()
        };
        let title = BoundField::Title.element(&EventData::default(), &palette);
        assert_eq!(title.position, Point::new(50.0, 5.0));
        assert_eq!(title.size, Size::new(350.0, 50.0));
        assert_eq!(title.z_index, 10);
        assert_eq!(title.style.font_size, Some(28.0));
        assert_eq!(title.style.font_family, Some(FontFamily::Georgia));
        assert_eq!(title.style.font_weight, Some(FontWeight::Bold));
        assert_eq!(title.style.color.as_deref(), Some("#0a0a0a"));
        assert_eq!(title.style.text_align, Some(TextAlign::Center));
        assert_eq!(title.style.padding, Some(8.0));
    }

    #[test]
    fn test_secondary_colors() {
        let palette = CustomColors::default();
        let event = EventData::default();
        assert_eq!(
            BoundField::Description.element(&event, &palette).style.color.as_deref(),
            Some(MUTED_TEXT)
        );
        assert_eq!(
            BoundField::Notes.element(&event, &palette).style.color.as_deref(),
            Some(FAINT_TEXT)
        );
        assert_eq!(
            BoundField::DateTime.element(&event, &palette).style.font_weight,
            Some(FontWeight::SemiBold)
        );
    }

    #[test]
    fn test_from_id() {
        assert_eq!(BoundField::from_id("dresscode"), Some(BoundField::DressCode));
        assert_eq!(BoundField::from_id("text-123"), None);
        for field in BoundField::all() {
            assert_eq!(BoundField::from_id(field.id()), Some(*field));
        }
    }

    #[test]
    fn test_seed_document_resets_background() {
        let doc = DesignDocument::new().with_background(&crate::document::BackgroundPatch {
            kind: Some(BackgroundKind::Gradient),
            gradient_colors: Some(vec!["#000".into(), "#111".into(), "#222".into()]),
            ..Default::default()
        });
        let seeded = seed_document(&doc, &full_event());
        assert_eq!(seeded.len(), 7);
        assert_eq!(seeded.background, seeded_background());
        assert_eq!(seeded.custom_colors, doc.custom_colors);
        assert_eq!(seeded.border, doc.border);
    }
}
