//! Zeichenbereich und Status-Zeile eines Frames.
//!
//! Reihenfolge pro Frame: Input sammeln, Intents anwenden, Szene zeichnen,
//! Status-Zeile aus dem neuen Zustand rendern.

use super::input::InputState;
use super::status::{render_status_bar, StatusLine};
use crate::app::{AppController, AppState};
use crate::render::Renderer;

/// Ergebnis eines Frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Es wurden Intents erzeugt (Repaint nötig)
    pub had_input: bool,
    /// Angezeigte Status-Zeile
    pub status: StatusLine,
}

/// Bündelt Controller, Renderer und Input-Zustand des Editors.
#[derive(Default)]
pub struct EditorView {
    controller: AppController,
    renderer: Renderer,
    input: InputState,
}

impl EditorView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeigt den Editor im verfügbaren Platz von `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> FrameOutcome {
        let status_height = ui.spacing().interact_size.y + ui.spacing().item_spacing.y;
        let canvas_size = egui::vec2(
            ui.available_width(),
            (ui.available_height() - status_height).max(0.0),
        );
        let (rect, response) = ui.allocate_exact_size(canvas_size, egui::Sense::click_and_drag());

        let events = self.input.collect_viewport_events(ui, &response);
        let had_input = !events.is_empty();
        for event in events {
            if let Err(e) = self.controller.handle_intent(state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }

        let scene = self.controller.build_render_scene(state);
        self.renderer.render_scene(ui.painter(), rect, &scene);

        let status = StatusLine::from_state(state);
        render_status_bar(ui, &status);

        FrameOutcome { had_input, status }
    }
}
