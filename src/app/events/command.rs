use glam::Vec2;

/// Mutierende Operationen auf dem `AppState`.
/// Entstehen ausschließlich aus dem Intent→Command-Mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Node an Position anhängen
    AppendNode { pos: Vec2 },
    /// Drag eines Nodes beginnen (Idle → Dragging)
    BeginDrag { node_index: usize, pos: Vec2 },
    /// Gezogenen Node zur neuen Zeigerposition nachführen
    DragTo { pos: Vec2 },
    /// Drag beenden (Dragging → Idle)
    EndDrag,
    /// Kurve leeren und Interaktion zurücksetzen
    ClearCurve,
    /// Optionen aus der TOML-Datei neu laden
    ReloadOptions,
    /// Optionen als TOML-Datei speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzbezeichnung für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::AppendNode { .. } => "Node angehängt",
            AppCommand::BeginDrag { .. } | AppCommand::DragTo { .. } => "Node verschoben",
            AppCommand::EndDrag => "Drag beendet",
            AppCommand::ClearCurve => "Kurve geleert",
            AppCommand::ReloadOptions => "Optionen neu geladen",
            AppCommand::SaveOptions => "Optionen gespeichert",
            AppCommand::RequestExit => "Beenden",
        }
    }
}
