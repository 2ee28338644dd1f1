//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_e_pressed, key_f5_pressed, key_s_pressed, key_q_pressed) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::E),
                i.key_pressed(egui::Key::F5),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Q),
            )
        });

    // E = Kurve leeren
    if key_e_pressed && !modifiers.command {
        events.push(AppIntent::ResetRequested);
    }

    if key_f5_pressed {
        events.push(AppIntent::OptionsReloadRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::OptionsSaveRequested);
    }

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
