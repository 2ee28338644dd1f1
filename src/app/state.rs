//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::Curve;
use crate::shared::EditorOptions;
use glam::Vec2;
use std::path::PathBuf;

/// Zustand der Zeiger-Interaktion (endlicher Automat).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Ein Node wird gezogen
    Dragging {
        /// Index des gezogenen Nodes
        node_index: usize,
        /// Letzte bekannte Zeigerposition
        last_pointer: Vec2,
    },
}

impl Interaction {
    /// Index des gezogenen Nodes, falls ein Drag aktiv ist.
    pub fn dragged_node(&self) -> Option<usize> {
        match *self {
            Interaction::Dragging { node_index, .. } => Some(node_index),
            Interaction::Idle => None,
        }
    }

    /// Gibt `true` zurück, wenn gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }
}

/// Editor-Sitzung: besitzt die Kurve und den transienten Drag-Zustand.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Die bearbeitete Kurve
    pub curve: Curve,
    /// Aktueller Interaktionszustand
    pub interaction: Interaction,
}

impl EditorSession {
    /// Erstellt eine leere Sitzung im Zustand `Idle`.
    pub fn new() -> Self {
        Self {
            curve: Curve::new(),
            interaction: Interaction::Idle,
        }
    }
}

/// Gesamter Anwendungszustand
pub struct AppState {
    /// Kurve + Interaktion
    pub session: EditorSession,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ziel von F5 (neu laden) und Strg+S (speichern)
    pub options_path: PathBuf,
    /// Verlauf der ausgeführten Commands (Status-Bar zeigt den letzten)
    pub command_log: CommandLog,
    /// Anwendung soll sich beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Zustand mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            session: EditorSession::new(),
            options,
            options_path: EditorOptions::config_path(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl der Nodes der aktuellen Kurve
    pub fn node_count(&self) -> usize {
        self.session.curve.node_count()
    }

    /// Anzahl der Segmente der aktuellen Kurve
    pub fn segment_count(&self) -> usize {
        self.session.curve.segment_count()
    }
}
