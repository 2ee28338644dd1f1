use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Alle Positionen liegen in Render-Koordinaten (Ursprung unten links).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste im Zeichenbereich gedrückt
    PointerPressed { pos: Vec2 },
    /// Mauszeiger bewegt
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Kurve komplett verwerfen (Taste E)
    ResetRequested,
    /// Optionen-Datei neu einlesen (Taste F5)
    OptionsReloadRequested,
    /// Aktuelle Optionen in die Optionen-Datei schreiben (Strg+S)
    OptionsSaveRequested,
    /// Anwendung beenden
    ExitRequested,
}
