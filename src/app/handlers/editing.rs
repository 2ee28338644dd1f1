//! Handler für Kurven-Editing: Node anhängen und Kurve leeren.

use crate::app::state::Interaction;
use crate::app::AppState;

/// Hängt einen neuen Node an der übergebenen Render-Position an.
pub fn append_node(state: &mut AppState, pos: glam::Vec2) {
    let handle_offset = state.options.handle_offset;
    state.session.curve.append(pos, handle_offset);
}

/// Verwirft alle Nodes und erzwingt `Idle`.
pub fn clear_curve(state: &mut AppState) {
    let removed = state.session.curve.node_count();
    state.session.curve.clear();
    state.session.interaction = Interaction::Idle;
    log::info!("Kurve geleert ({} Nodes entfernt)", removed);
}
