//! Pushing changed event details into bound template elements.

use super::synthesis::BoundField;
use crate::document::DesignDocument;
use crate::element::{DesignElement, ElementId, ElementKind};
use crate::event::EventData;

/// Fresh content for `element` if it is a bound text element whose stored
/// content differs from what `event` now produces.
fn refreshed_content(element: &DesignElement, event: &EventData) -> Option<String> {
    let field = BoundField::from_id(&element.id)?;
    let ElementKind::Text { content } = &element.kind else {
        return None;
    };
    let fresh = field.content(event);
    (fresh != *content).then_some(fresh)
}

/// Ids of bound elements whose content is out of date for `event`.
pub fn stale_bound_elements(doc: &DesignDocument, event: &EventData) -> Vec<ElementId> {
    doc.elements
        .iter()
        .filter(|el| refreshed_content(el, event).is_some())
        .map(|el| el.id.clone())
        .collect()
}

/// Replace the content of every stale bound element with the content
/// `event` produces. Position, size and style are left alone.
///
/// Bound elements carry no record of manual edits, so hand-edited content on
/// a bound element is overwritten too. Returns an equal document when nothing
/// is stale.
pub fn reconcile_bound_elements(doc: &DesignDocument, event: &EventData) -> DesignDocument {
    let mut updated = 0usize;
    let reconciled = doc.map_elements(|el| match refreshed_content(el, event) {
        Some(content) => {
            updated += 1;
            DesignElement {
                kind: ElementKind::Text { content },
                ..el.clone()
            }
        }
        None => el.clone(),
    });
    if updated > 0 {
        log::debug!("Reconciled {} bound elements with event data", updated);
    }
    reconciled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CustomColors;
    use crate::element::{ElementPatch, create_image_element, default_text_element};
    use crate::layout::synthesize_default_elements;
    use kurbo::Point;

    fn seeded(event: &EventData) -> DesignDocument {
        DesignDocument::new().with_elements(synthesize_default_elements(event, &CustomColors::default()))
    }

    #[test]
    fn test_up_to_date_is_unchanged() {
        let event = EventData::titled("Dining In");
        let doc = seeded(&event);
        assert!(stale_bound_elements(&doc, &event).is_empty());
        assert_eq!(reconcile_bound_elements(&doc, &event), doc);
    }

    #[test]
    fn test_title_change_propagates_content_only() {
        let doc = seeded(&EventData::default());
        let moved = doc.with_element(
            "title",
            &ElementPatch::new().with_position(Point::new(12.0, 40.0)),
        );
        let event = EventData::titled("Change of Command");
        assert_eq!(stale_bound_elements(&moved, &event), vec!["title".to_string()]);

        let reconciled = reconcile_bound_elements(&moved, &event);
        let title = reconciled.element("title").unwrap();
        assert_eq!(title.content(), Some("Change of Command"));
        assert_eq!(title.position, Point::new(12.0, 40.0));
        assert_eq!(title.style, moved.element("title").unwrap().style);
    }

    #[test]
    fn test_manual_edit_is_overwritten() {
        let doc = seeded(&EventData::titled("Old Title"))
            .with_element("title", &ElementPatch::new().with_content("Custom Headline"));
        let reconciled = reconcile_bound_elements(&doc, &EventData::titled("New Title"));
        assert_eq!(reconciled.element("title").unwrap().content(), Some("New Title"));
    }

    #[test]
    fn test_unbound_elements_untouched() {
        let free = default_text_element("#000000", 11);
        let free_id = free.id.clone();
        let mut logo = create_image_element("data:image/png;base64,aGk=", Point::ZERO, None, 12);
        logo.id = "title".to_string();
        let doc = DesignDocument::new().append_element(free).append_element(logo.clone());

        let reconciled = reconcile_bound_elements(&doc, &EventData::titled("Anything"));
        assert_eq!(reconciled.element(&free_id).unwrap().content(), Some("New Text"));
        assert_eq!(reconciled.element("title"), Some(&logo));
        assert_eq!(reconciled, doc);
    }

    #[test]
    fn test_idempotent() {
        let doc = seeded(&EventData::default());
        let event = EventData {
            location: "Hangar 3".into(),
            dress_code: "Mess Dress".into(),
            ..EventData::default()
        };
        let once = reconcile_bound_elements(&doc, &event);
        assert_eq!(reconcile_bound_elements(&once, &event), once);
        assert_eq!(once.element("dresscode").unwrap().content(), Some("Dress Code: Mess Dress"));
    }
}
