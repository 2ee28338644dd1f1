//! UI-Komponenten: Editor-Ansicht, Input-Handling und Status-Zeile.

pub mod editor_view;
pub mod input;
mod keyboard;
pub mod status;

pub use editor_view::{EditorView, FrameOutcome};
pub use input::InputState;
pub use status::{render_status_bar, StatusLine};
