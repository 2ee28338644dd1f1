//! Zeichen-Geometrie für Kurve, Nodes und Steuerpunkte.
//!
//! Layer-neutral: erzeugt reine Primitive in Render-Koordinaten (Ursprung unten links),
//! die `app` in die `RenderScene` legt und `render` zeichnet.

use crate::core::Curve;
use glam::Vec2;

/// Quadratischer Marker um einen Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeMarker {
    /// Mittelpunkt (Anker)
    pub center: Vec2,
    /// Halbe Kantenlänge
    pub half_size: f32,
}

impl NodeMarker {
    /// Untere linke Ecke
    pub fn min(&self) -> Vec2 {
        self.center - Vec2::splat(self.half_size)
    }

    /// Obere rechte Ecke
    pub fn max(&self) -> Vec2 {
        self.center + Vec2::splat(self.half_size)
    }
}

/// Steuerpunkt-Overlay: Punkt-Marker plus gestrichelte Verbindung zum Anker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandleOverlay {
    /// Positionen aller aktiven Steuerpunkte
    pub points: Vec<Vec2>,
    /// Linien [Anker, Steuerpunkt] je aktivem Steuerpunkt
    pub connectors: Vec<[Vec2; 2]>,
}

/// Eine Linienzug-Liste pro Segment, je `steps + 1` Abtastpunkte.
pub fn render_curve(curve: &Curve, steps: usize) -> Vec<Vec<Vec2>> {
    curve.segments().map(|segment| segment.sample(steps)).collect()
}

/// Ein quadratischer Marker pro Node.
pub fn render_nodes(curve: &Curve, half_size: f32) -> Vec<NodeMarker> {
    curve
        .nodes()
        .iter()
        .map(|node| NodeMarker {
            center: node.anchor,
            half_size,
        })
        .collect()
}

/// Punkt-Marker und Verbindungslinien für alle aktiven Steuerpunkte.
pub fn render_handles(curve: &Curve) -> HandleOverlay {
    let mut overlay = HandleOverlay::default();
    for node in curve.nodes() {
        for handle in node.active_handles() {
            overlay.points.push(handle);
            overlay.connectors.push([node.anchor, handle]);
        }
    }
    overlay
}
