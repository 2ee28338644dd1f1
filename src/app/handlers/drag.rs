//! Handler für den Drag-Lifecycle eines einzelnen Nodes.

use crate::app::state::Interaction;
use crate::app::AppState;
use glam::Vec2;

/// Startet einen Drag (Idle → Dragging) und merkt sich die Zeigerposition.
pub fn begin(state: &mut AppState, node_index: usize, pos: Vec2) {
    if node_index >= state.session.curve.node_count() {
        log::warn!("Drag-Start abgewiesen: Node {} existiert nicht", node_index);
        return;
    }
    state.session.interaction = Interaction::Dragging {
        node_index,
        last_pointer: pos,
    };
    log::debug!("Drag von Node {} gestartet", node_index);
}

/// Verschiebt den gezogenen Node um die Differenz zur letzten Zeigerposition.
pub fn update(state: &mut AppState, pos: Vec2) {
    let Interaction::Dragging {
        node_index,
        last_pointer,
    } = state.session.interaction
    else {
        return;
    };

    if node_index >= state.session.curve.node_count() {
        log::warn!("Drag abgebrochen: Node {} existiert nicht mehr", node_index);
        state.session.interaction = Interaction::Idle;
        return;
    }

    state
        .session
        .curve
        .translate_node(node_index, pos - last_pointer);
    state.session.interaction = Interaction::Dragging {
        node_index,
        last_pointer: pos,
    };
}

/// Beendet einen Drag (Dragging → Idle).
pub fn end(state: &mut AppState) {
    if let Some(node_index) = state.session.interaction.dragged_node() {
        log::debug!("Drag von Node {} beendet", node_index);
    }
    state.session.interaction = Interaction::Idle;
}
