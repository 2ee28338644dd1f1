//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fallen die Entscheidungen des Interaktions-Automaten (Idle/Dragging);
//! die Handler führen die Übergänge nur noch aus.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let session = &state.session;
    let dragging = session.interaction.is_dragging();

    match intent {
        AppIntent::PointerPressed { pos } => {
            let mut commands = Vec::with_capacity(2);
            // Verlorenes Release: alten Drag zuerst beenden
            if dragging {
                commands.push(AppCommand::EndDrag);
            }

            if !session
                .curve
                .is_slot_occupied(pos, state.options.hit_box_radius)
            {
                commands.push(AppCommand::AppendNode { pos });
            } else if let Some(node_index) = session.curve.find_closest_node(pos) {
                commands.push(AppCommand::BeginDrag { node_index, pos });
            }
            commands
        }
        AppIntent::PointerMoved { pos } if dragging => vec![AppCommand::DragTo { pos }],
        AppIntent::PointerMoved { .. } => Vec::new(),
        AppIntent::PointerReleased if dragging => vec![AppCommand::EndDrag],
        AppIntent::PointerReleased => Vec::new(),
        AppIntent::ResetRequested => vec![AppCommand::ClearCurve],
        AppIntent::OptionsReloadRequested => vec![AppCommand::ReloadOptions],
        AppIntent::OptionsSaveRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
