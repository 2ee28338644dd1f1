//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Lädt die Optionen neu aus `state.options_path`.
///
/// Fehlt die Datei, gelten die Standardwerte. Ist sie fehlerhaft, bleiben die
/// aktuellen Optionen unverändert und der Fehler wird weitergereicht.
pub fn reload_options(state: &mut AppState) -> anyhow::Result<()> {
    if !state.options_path.exists() {
        log::info!(
            "Keine Optionen-Datei unter {}, verwende Standardwerte",
            state.options_path.display()
        );
        state.options = EditorOptions::default();
        return Ok(());
    }

    state.options = EditorOptions::read_from_file(&state.options_path)?;
    log::info!("Optionen neu geladen aus: {}", state.options_path.display());
    Ok(())
}

/// Schreibt die aktuellen Optionen nach `state.options_path`.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
