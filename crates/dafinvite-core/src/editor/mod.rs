//! Editor session: turns user gestures into layout operations.

mod color;
mod history;
mod session;

pub use color::{ColorTarget, ElementColorField};
pub use history::History;
pub use session::EditorSession;
