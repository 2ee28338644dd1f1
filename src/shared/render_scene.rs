//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::curve_geometry::{HandleOverlay, NodeMarker};
use super::options::EditorOptions;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame (Render-Koordinaten, Ursprung unten links).
///
/// Zeichenreihenfolge: Kurve, Nodes, Steuerpunkte.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Ein Linienzug pro Segment
    pub curve_strips: Vec<Vec<Vec2>>,
    /// Ein Quadrat pro Node
    pub node_markers: Vec<NodeMarker>,
    /// Aktive Steuerpunkte mit Verbindungslinien
    pub handles: HandleOverlay,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}
