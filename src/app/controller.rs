//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::AppendNode { pos } => handlers::editing::append_node(state, pos),
            AppCommand::ClearCurve => handlers::editing::clear_curve(state),

            // === Drag ===
            AppCommand::BeginDrag { node_index, pos } => {
                handlers::drag::begin(state, node_index, pos)
            }
            AppCommand::DragTo { pos } => handlers::drag::update(state, pos),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ReloadOptions => handlers::view::reload_options(state)?,
            AppCommand::SaveOptions => handlers::view::save_options(state)?,
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        // Nur erfolgreich ausgeführte Commands landen im Verlauf
        state.command_log.record(&command);
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
