//! Layout engine: template synthesis, event-data reconciliation and the
//! geometric operations the editor applies to a design.
//!
//! Every function here is total. Operations on unknown element ids return an
//! equal document rather than an error.

mod bounds;
mod datetime;
mod drag;
mod ops;
mod reconcile;
mod synthesis;

pub use bounds::{center_all, center_all_with, clamp_position, snap_to_fit, snap_to_fit_with};
pub use datetime::format_event_date_time;
pub use drag::{DragState, percent_to_pixels};
pub use ops::{
    bring_to_front, element_at, element_rect, move_element, move_element_with, resize_element,
    resize_element_with, restyle_element, send_to_back,
};
pub use reconcile::{reconcile_bound_elements, stale_bound_elements};
pub use synthesis::{BoundField, seed_document, seeded_background, synthesize_default_elements};
