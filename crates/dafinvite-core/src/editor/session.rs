//! Interactive editing state for one invitation design.

use super::color::ColorTarget;
use super::history::History;
use crate::config::EditorConfig;
use crate::document::{BackgroundPatch, BorderPatch, CustomColorsPatch, DesignDocument};
use crate::element::{
    DEFAULT_INSERT_POSITION, DesignElement, ElementId, ElementPatch, ElementStyle, create_image_element,
    default_text_element,
};
use crate::event::EventData;
use crate::layout::{self, DragState};
use crate::storage::{BoxFuture, Storage, StorageError, StorageResult};
use kurbo::{Point, Rect, Size};

/// Editing session over a design document.
///
/// Holds the current document together with the transient state the
/// designer needs: selection, the active drag, the open color picker and
/// undo history. Every committed edit is one undo step; a whole drag from
/// pointer-down to pointer-up is one step.
#[derive(Debug, Clone)]
pub struct EditorSession {
    document: DesignDocument,
    event: EventData,
    selected: Option<ElementId>,
    drag: Option<DragState>,
    /// Document as it was when the active drag started.
    drag_snapshot: Option<DesignDocument>,
    initialized: bool,
    color_target: Option<ColorTarget>,
    history: History,
    config: EditorConfig,
}

impl EditorSession {
    /// Create a session without seeding. Call [`EditorSession::initialize`]
    /// before the first render.
    pub fn new(event: EventData, document: DesignDocument) -> Self {
        Self::with_config(event, document, EditorConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(event: EventData, document: DesignDocument, config: EditorConfig) -> Self {
        Self {
            document,
            event,
            selected: None,
            drag: None,
            drag_snapshot: None,
            initialized: false,
            color_target: None,
            history: History::new(config.history_depth),
            config,
        }
    }

    /// Create and initialize a session.
    pub fn open(event: EventData, document: DesignDocument) -> Self {
        let mut session = Self::new(event, document);
        session.initialize();
        session
    }

    /// Load the stored design for `event_id` and open a session on it.
    /// An event with no stored design starts from an empty document.
    pub async fn open_from_storage(
        storage: &dyn Storage,
        event_id: &str,
        event: EventData,
    ) -> StorageResult<Self> {
        let document = match storage.load(event_id).await {
            Ok(document) => document,
            Err(StorageError::NotFound(_)) => DesignDocument::new(),
            Err(e) => return Err(e),
        };
        Ok(Self::open(event, document))
    }

    /// Seed the default template if this is the first initialization and the
    /// design has no elements. Later calls do nothing, even if the design
    /// has since been emptied. Returns whether seeding happened.
    ///
    /// Seeding is not an undo step.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        if !self.document.is_empty() {
            return false;
        }
        self.document = layout::seed_document(&self.document, &self.event);
        true
    }

    pub fn document(&self) -> &DesignDocument {
        &self.document
    }

    pub fn event(&self) -> &EventData {
        &self.event
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replace the event details and push them into bound elements.
    ///
    /// Reconciliation follows the event data rather than the user, so it is
    /// not recorded as an undo step.
    pub fn set_event_data(&mut self, event: EventData) {
        self.event = event;
        self.document = layout::reconcile_bound_elements(&self.document, &self.event);
    }

    /// Replace the current document with `next`, recording an undo step if
    /// anything changed. Returns whether it changed.
    fn commit(&mut self, next: DesignDocument) -> bool {
        if next == self.document {
            return false;
        }
        let previous = std::mem::replace(&mut self.document, next);
        self.history.record(previous);
        true
    }

    // --- Elements ---

    /// Add a "New Text" element in the palette's primary color on top of
    /// the others. Returns its id.
    pub fn add_text(&mut self) -> ElementId {
        let element = default_text_element(&self.document.custom_colors.primary, self.document.next_z_index());
        self.append(element)
    }

    /// Add an uploaded image on top of the others. Returns its id.
    pub fn add_image(&mut self, image_data: impl Into<String>) -> ElementId {
        let element = create_image_element(
            image_data,
            DEFAULT_INSERT_POSITION,
            None,
            self.document.next_z_index(),
        );
        self.append(element)
    }

    fn append(&mut self, element: DesignElement) -> ElementId {
        let id = element.id.clone();
        let next = self.document.append_element(element);
        self.commit(next);
        id
    }

    /// Shallow-merge `patch` into an element. A patched position is clamped
    /// onto the canvas and a patched size kept at the minimum element size.
    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> bool {
        let limits = &self.config.limits;
        let patch = ElementPatch {
            position: patch
                .position
                .map(|p| layout::clamp_position(p, limits.position_min, limits.position_max)),
            size: patch.size.map(|s| {
                Size::new(
                    s.width.max(limits.min_element_size),
                    s.height.max(limits.min_element_size),
                )
            }),
            ..patch.clone()
        };
        let next = self.document.with_element(id, &patch);
        self.commit(next)
    }

    /// Delete an element. Clears the selection and ends the drag if they
    /// referred to it.
    pub fn delete_element(&mut self, id: &str) -> bool {
        if self.dragged_element_id() == Some(id) {
            self.pointer_up();
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        let next = self.document.without_element(id);
        self.commit(next)
    }

    /// Move an element to a percentage position.
    pub fn move_element(&mut self, id: &str, position: Point) -> bool {
        let next = layout::move_element_with(&self.document, id, position, &self.config.limits);
        self.commit(next)
    }

    /// Resize an element.
    pub fn resize_element(&mut self, id: &str, size: Size) -> bool {
        let next = layout::resize_element_with(&self.document, id, size, &self.config.limits);
        self.commit(next)
    }

    /// Merge style fields into an element.
    pub fn restyle_element(&mut self, id: &str, patch: &ElementStyle) -> bool {
        let next = layout::restyle_element(&self.document, id, patch);
        self.commit(next)
    }

    pub fn bring_to_front(&mut self, id: &str) -> bool {
        let next = layout::bring_to_front(&self.document, id);
        self.commit(next)
    }

    pub fn send_to_back(&mut self, id: &str) -> bool {
        let next = layout::send_to_back(&self.document, id);
        self.commit(next)
    }

    pub fn center_all(&mut self) -> bool {
        let next = layout::center_all_with(&self.document, &self.config.limits);
        self.commit(next)
    }

    pub fn snap_to_fit(&mut self) -> bool {
        let next = layout::snap_to_fit_with(&self.document, &self.config.limits);
        self.commit(next)
    }

    // --- Card decoration ---

    pub fn set_background(&mut self, patch: &BackgroundPatch) -> bool {
        let next = self.document.with_background(patch);
        self.commit(next)
    }

    /// Append a white gradient stop.
    pub fn add_gradient_stop(&mut self) -> bool {
        let patch = BackgroundPatch {
            gradient_colors: Some(self.document.background.gradient_colors_with_added_stop()),
            ..BackgroundPatch::default()
        };
        self.set_background(&patch)
    }

    /// Drop the uploaded background image.
    pub fn remove_background_image(&mut self) -> bool {
        let next = DesignDocument {
            background: self.document.background.without_image(),
            ..self.document.clone()
        };
        self.commit(next)
    }

    pub fn set_border(&mut self, patch: &BorderPatch) -> bool {
        let next = self.document.with_border(patch);
        self.commit(next)
    }

    pub fn set_custom_colors(&mut self, patch: &CustomColorsPatch) -> bool {
        let next = self.document.with_custom_colors(patch);
        self.commit(next)
    }

    // --- Selection ---

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_element(&self) -> Option<&DesignElement> {
        self.selected.as_deref().and_then(|id| self.document.element(id))
    }

    /// Select an element. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.document.contains(id) {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// A click on the canvas outside any element.
    pub fn click_background(&mut self) {
        self.selected = None;
    }

    // --- Pointer gestures ---

    /// Whether a drag is in progress. The UI shows a move cursor and
    /// suppresses text selection while this is true.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragged_element_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.element_id.as_str())
    }

    /// Pointer pressed on element `id`: select it and start dragging.
    /// Any earlier drag is ended first. Returns false for unknown ids.
    pub fn pointer_down(&mut self, id: &str, pointer: Point, canvas: Rect) -> bool {
        self.pointer_up();
        let Some(element) = self.document.element(id) else {
            return false;
        };
        let drag = DragState::begin(element, pointer, canvas);
        log::debug!("Drag start on {} with offset {:?}", id, drag.offset);
        self.drag = Some(drag);
        self.drag_snapshot = Some(self.document.clone());
        self.selected = Some(id.to_string());
        true
    }

    /// Pointer pressed somewhere on the canvas: drag the topmost element
    /// under it, or clear the selection if there is none.
    pub fn pointer_down_at(&mut self, pointer: Point, canvas: Rect) -> bool {
        let hit = layout::element_at(&self.document, canvas, pointer).map(|el| el.id.clone());
        match hit {
            Some(id) => self.pointer_down(&id, pointer, canvas),
            None => {
                self.pointer_up();
                self.click_background();
                false
            }
        }
    }

    /// Pointer moved. Moves the dragged element, if any.
    pub fn pointer_move(&mut self, pointer: Point, canvas: Rect) {
        if let Some(drag) = &self.drag {
            self.document = drag.apply_with(&self.document, pointer, canvas, &self.config.limits);
        }
    }

    /// Pointer released: end the drag, recording it as one undo step if the
    /// element moved.
    pub fn pointer_up(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let Some(snapshot) = self.drag_snapshot.take() {
            if snapshot != self.document {
                self.history.record(snapshot);
            }
        }
        log::debug!("Drag end on {}", drag.element_id);
    }

    // --- Color pickers ---

    /// The color picker currently open, if any.
    pub fn color_target(&self) -> Option<&ColorTarget> {
        self.color_target.as_ref()
    }

    pub fn open_color_picker(&mut self, target: ColorTarget) {
        self.color_target = Some(target);
    }

    pub fn close_color_picker(&mut self) {
        self.color_target = None;
    }

    /// Current color at `target`, white if unset.
    pub fn color_for(&self, target: &ColorTarget) -> String {
        target.color_in(&self.document)
    }

    /// Set the color at `target`.
    pub fn apply_color(&mut self, target: &ColorTarget, color: &str) -> bool {
        let next = target.apply(&self.document, color);
        self.commit(next)
    }

    // --- History ---

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the last edit. Ends any active drag first.
    pub fn undo(&mut self) -> bool {
        self.pointer_up();
        match self.history.undo(&self.document) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit.
    pub fn redo(&mut self) -> bool {
        self.pointer_up();
        match self.history.redo(&self.document) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, document: DesignDocument) {
        self.document = document;
        if let Some(id) = &self.selected {
            if !self.document.contains(id) {
                self.selected = None;
            }
        }
    }

    // --- Persistence ---

    /// Hand the current design to `storage` under `event_id`.
    pub fn save<'a>(&self, storage: &'a dyn Storage, event_id: &str) -> BoxFuture<'a, StorageResult<()>> {
        storage.save(event_id, &self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutLimits;
    use crate::document::{BackgroundKind, BorderStyle, PaletteSlot};
    use crate::editor::ElementColorField;
    use crate::element::TextAlign;
    use crate::storage::{MemoryStorage, block_on};

    fn canvas() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 600.0)
    }

    fn seeded() -> EditorSession {
        EditorSession::open(EventData::titled("Change of Command"), DesignDocument::new())
    }

    #[test]
    fn test_open_seeds_empty_design() {
        let session = seeded();
        assert!(session.is_initialized());
        assert_eq!(session.document().len(), 7);
        assert_eq!(
            session.document().element("title").unwrap().content(),
            Some("Change of Command")
        );
        assert!(!session.can_undo());
    }

    #[test]
    fn test_open_keeps_existing_design() {
        let existing = DesignDocument::new().append_element(default_text_element("#000000", 1));
        let session = EditorSession::open(EventData::default(), existing.clone());
        assert!(session.is_initialized());
        assert_eq!(session.document(), &existing);
    }

    #[test]
    fn test_seeding_is_one_shot() {
        let mut session = seeded();
        let ids: Vec<String> = session.document().element_ids().cloned().collect();
        for id in &ids {
            session.delete_element(id);
        }
        assert!(session.document().is_empty());
        assert!(!session.initialize());
        assert!(session.document().is_empty());
    }

    #[test]
    fn test_set_event_data_reconciles() {
        let mut session = seeded();
        session.set_event_data(EventData {
            title: "Dining In".into(),
            location: "Officers' Club".into(),
            ..EventData::default()
        });
        let doc = session.document();
        assert_eq!(doc.element("title").unwrap().content(), Some("Dining In"));
        assert_eq!(doc.element("location").unwrap().content(), Some("Officers' Club"));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_add_text_uses_palette_and_z() {
        let mut session = seeded();
        session.set_custom_colors(&CustomColorsPatch::slot(PaletteSlot::Primary, "#333333"));
        let id = session.add_text();
        let el = session.document().element(&id).unwrap();
        assert_eq!(el.style.color.as_deref(), Some("#333333"));
        assert_eq!(el.z_index, 11);
        assert_eq!(el.content(), Some("New Text"));
    }

    #[test]
    fn test_add_image() {
        let mut session = EditorSession::open(EventData::default(), DesignDocument::new());
        let id = session.add_image("data:image/png;base64,aGk=");
        let el = session.document().element(&id).unwrap();
        assert!(el.is_image());
        assert_eq!(el.position, DEFAULT_INSERT_POSITION);
        assert_eq!(el.z_index, 11);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut session = seeded();
        assert!(session.select("notes"));
        assert!(session.delete_element("notes"));
        assert_eq!(session.selected(), None);

        assert!(session.select("title"));
        session.delete_element("location");
        assert_eq!(session.selected(), Some("title"));
    }

    #[test]
    fn test_select_unknown_and_background_click() {
        let mut session = seeded();
        assert!(session.select("title"));
        assert!(!session.select("ghost"));
        assert_eq!(session.selected(), Some("title"));
        session.click_background();
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_missing_id_edits_do_not_record() {
        let mut session = seeded();
        assert!(!session.update_element("ghost", &ElementPatch::new().with_content("x")));
        assert!(!session.delete_element("ghost"));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_update_element_clamps_geometry() {
        let mut session = seeded();
        let patch = ElementPatch::new()
            .with_position(Point::new(-40.0, 250.0))
            .with_size(Size::new(0.0, -5.0));
        assert!(session.update_element("title", &patch));

        let title = session.document().element("title").unwrap();
        assert_eq!(title.position, Point::new(0.0, 100.0));
        assert_eq!(title.size, Size::new(1.0, 1.0));
        assert_eq!(title.content(), Some("Change of Command"));
    }

    #[test]
    fn test_update_element_leaves_unpatched_geometry() {
        let mut session = seeded();
        let before = session.document().element("title").unwrap().clone();
        session.update_element("title", &ElementPatch::new().with_content("Welcome"));

        let title = session.document().element("title").unwrap();
        assert_eq!(title.position, before.position);
        assert_eq!(title.size, before.size);
    }

    #[test]
    fn test_drag_is_single_undo_step() {
        let mut session = seeded();
        let before = session.document().clone();
        // title sits at 50%/5% = (200, 30)
        assert!(session.pointer_down("title", Point::new(210.0, 40.0), canvas()));
        assert!(session.is_dragging());
        assert_eq!(session.selected(), Some("title"));

        session.pointer_move(Point::new(150.0, 100.0), canvas());
        session.pointer_move(Point::new(110.0, 160.0), canvas());
        let pos = session.document().element("title").unwrap().position;
        assert!((pos.x - 25.0).abs() < 1e-9);
        assert!((pos.y - 25.0).abs() < 1e-9);

        session.pointer_up();
        assert!(!session.is_dragging());
        assert!(session.undo());
        assert_eq!(session.document(), &before);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_drag_clamped() {
        let mut session = seeded();
        session.pointer_down("contact", Point::new(210.0, 460.0), canvas());
        session.pointer_move(Point::new(5000.0, 5000.0), canvas());
        session.pointer_up();
        assert_eq!(
            session.document().element("contact").unwrap().position,
            Point::new(85.0, 85.0)
        );
    }

    #[test]
    fn test_click_without_move_records_nothing() {
        let mut session = seeded();
        session.pointer_down("title", Point::new(210.0, 40.0), canvas());
        session.pointer_up();
        assert!(!session.can_undo());
    }

    #[test]
    fn test_new_drag_ends_previous() {
        let mut session = seeded();
        session.pointer_down("title", Point::new(210.0, 40.0), canvas());
        session.pointer_move(Point::new(220.0, 40.0), canvas());
        session.pointer_down("location", Point::new(210.0, 220.0), canvas());
        assert_eq!(session.dragged_element_id(), Some("location"));
        assert!(session.can_undo());
    }

    #[test]
    fn test_pointer_down_at_hit_tests() {
        let mut session = seeded();
        assert!(session.pointer_down_at(Point::new(210.0, 40.0), canvas()));
        assert_eq!(session.dragged_element_id(), Some("title"));
        session.pointer_up();

        assert!(!session.pointer_down_at(Point::new(5.0, 590.0), canvas()));
        assert_eq!(session.selected(), None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_delete_dragged_element_ends_drag() {
        let mut session = seeded();
        session.pointer_down("title", Point::new(210.0, 40.0), canvas());
        session.delete_element("title");
        assert!(!session.is_dragging());
        assert!(!session.document().contains("title"));
    }

    #[test]
    fn test_bulk_operations() {
        let mut session = seeded();
        session.move_element("title", Point::new(3.0, 99.0));
        assert!(session.snap_to_fit());
        assert_eq!(session.document().element("title").unwrap().position, Point::new(5.0, 85.0));
        assert!(session.center_all());
        for el in &session.document().elements {
            assert_eq!(el.position.x, 50.0);
            assert_eq!(el.style.text_align, Some(TextAlign::Center));
        }
    }

    #[test]
    fn test_config_limits_apply() {
        let config = EditorConfig {
            limits: LayoutLimits {
                center_x: 40.0,
                ..LayoutLimits::default()
            },
            history_depth: 2,
        };
        let mut session = EditorSession::with_config(EventData::default(), DesignDocument::new(), config);
        session.initialize();
        session.center_all();
        assert_eq!(session.document().element("title").unwrap().position.x, 40.0);

        session.add_text();
        session.add_text();
        assert!(session.undo());
        assert!(session.undo());
        assert!(!session.undo());
    }

    #[test]
    fn test_undo_redo_and_selection() {
        let mut session = seeded();
        let id = session.add_text();
        session.select(&id);
        assert!(session.undo());
        assert!(!session.document().contains(&id));
        assert_eq!(session.selected(), None);
        assert!(session.redo());
        assert!(session.document().contains(&id));
        assert!(!session.redo());
    }

    #[test]
    fn test_color_targets() {
        let mut session = seeded();
        let target = ColorTarget::Element {
            id: "title".into(),
            field: ElementColorField::Text,
        };
        session.open_color_picker(target.clone());
        assert_eq!(session.color_target(), Some(&target));
        assert!(session.apply_color(&target, "#aa0000"));
        assert_eq!(session.color_for(&target), "#aa0000");
        session.close_color_picker();
        assert!(session.color_target().is_none());

        assert_eq!(session.color_for(&ColorTarget::BorderSecondary), "#ffffff");
    }

    #[test]
    fn test_background_and_border_edits() {
        let mut session = seeded();
        session.set_background(&BackgroundPatch {
            kind: Some(BackgroundKind::Image),
            value: Some("data:image/png;base64,aGk=".into()),
            ..BackgroundPatch::default()
        });
        assert!(session.document().background.has_image());
        assert!(session.remove_background_image());
        assert_eq!(session.document().background.value, "#ffffff");

        assert!(session.add_gradient_stop());
        assert_eq!(session.document().background.gradient_colors.len(), 3);

        session.set_border(&BorderPatch {
            enabled: Some(true),
            width: Some(99),
            style: Some(BorderStyle::Dashed),
            ..BorderPatch::default()
        });
        assert_eq!(session.document().border.width, 20);
    }

    #[test]
    fn test_save_and_reopen() {
        let storage = MemoryStorage::new();
        let mut session = seeded();
        session.update_element("notes", &ElementPatch::new().with_content("Bring a guest"));
        block_on(session.save(&storage, "event-7")).unwrap();

        let reopened = block_on(EditorSession::open_from_storage(
            &storage,
            "event-7",
            EventData::titled("Change of Command"),
        ))
        .unwrap();
        assert_eq!(reopened.document(), session.document());

        let fresh = block_on(EditorSession::open_from_storage(&storage, "event-8", EventData::default())).unwrap();
        assert_eq!(fresh.document().len(), 7);
    }
}
