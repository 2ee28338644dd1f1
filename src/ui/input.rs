//! Viewport-Input-Handling: Maus- und Tastatur-Events → AppIntent.
//!
//! Liefert Zeigerpositionen in Render-Koordinaten (Ursprung unten links).

use super::keyboard;
use crate::app::AppIntent;
use crate::core::screen_to_render;

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Primäre Taste wurde im Zeichenbereich gedrückt und ist noch nicht losgelassen
    pressed_in_viewport: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pressed_in_viewport: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge innerhalb eines Frames: Tasten, Press, Move, Release.
    /// Bewegungen werden nur zwischen einem Press im Zeichenbereich und dem
    /// zugehörigen Release gemeldet, auch wenn der Zeiger den Bereich verlässt.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = keyboard::collect_keyboard_intents(ui);

        let (pressed, released, press_origin, latest_pos, delta) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        if pressed {
            if let Some(origin) = press_origin.filter(|p| rect.contains(*p)) {
                self.pressed_in_viewport = true;
                events.push(AppIntent::PointerPressed {
                    pos: screen_pos_to_render(origin, rect),
                });
            }
        }

        if self.pressed_in_viewport && delta != egui::Vec2::ZERO {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    pos: screen_pos_to_render(pos, rect),
                });
            }
        }

        if released && self.pressed_in_viewport {
            self.pressed_in_viewport = false;
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}

/// Rechnet eine absolute egui-Position in Render-Koordinaten des Zeichenbereichs um.
pub(crate) fn screen_pos_to_render(pointer_pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    let local = pointer_pos - rect.min;
    screen_to_render(glam::Vec2::new(local.x, local.y), rect.height())
}
