//! Status-Zeile unter dem Zeichenbereich.

use crate::app::AppState;

/// Inhalt der Status-Zeile, abgeleitet nach dem Verarbeiten der Frame-Events.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub node_count: usize,
    pub segment_count: usize,
    /// Index des gerade gezogenen Nodes
    pub dragged_node: Option<usize>,
    /// Bezeichnung des zuletzt ausgeführten Commands
    pub last_action: Option<&'static str>,
}

impl StatusLine {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            node_count: state.node_count(),
            segment_count: state.segment_count(),
            dragged_node: state.session.interaction.dragged_node(),
            last_action: state.command_log.last().map(|command| command.label()),
        }
    }
}

/// Rendert die Status-Zeile in den verbleibenden Platz von `ui`.
pub fn render_status_bar(ui: &mut egui::Ui, status: &StatusLine) {
    ui.horizontal(|ui| {
        ui.add_space(4.0);
        ui.label(format!("Nodes: {} | Segmente: {}", status.node_count, status.segment_count));

        ui.separator();

        match status.dragged_node {
            Some(node_index) => ui.label(format!("Verschiebe Node {}", node_index)),
            None => ui.label("Bereit"),
        };

        if let Some(action) = status.last_action {
            ui.separator();
            ui.label(format!("Zuletzt: {}", action));
        }

        ui.separator();

        ui.label("Klick: Node setzen | Ziehen: verschieben | E: leeren | Strg+S: speichern");
    });
}
