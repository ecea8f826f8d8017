//! DafInvite Core Library
//!
//! Platform-agnostic design model and editing operations for the
//! event-invitation designer.

pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod event;
pub mod layout;
pub mod storage;

pub use config::{ConfigError, EditorConfig, LayoutLimits};
pub use document::{
    Background, BackgroundKind, BackgroundPatch, Border, BorderPatch, BorderStyle, CustomColors,
    CustomColorsPatch, DesignDocument, PaletteSlot,
};
pub use editor::{ColorTarget, EditorSession, ElementColorField, History};
pub use element::{
    DesignElement, ElementId, ElementKind, ElementPatch, ElementStyle, FontFamily, FontWeight, TextAlign,
    create_image_element, create_text_element,
};
pub use event::EventData;
pub use layout::{
    BoundField, DragState, center_all, format_event_date_time, reconcile_bound_elements, snap_to_fit,
    synthesize_default_elements,
};
pub use storage::{MemoryStorage, Storage, StorageError, StorageResult};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
