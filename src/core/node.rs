//! Kurven-Node: Ankerpunkt plus zwei Bézier-Steuerpunkte.

use glam::Vec2;

/// Steuerpunkt eines Nodes.
///
/// Ein ruhender Steuerpunkt behält seine Position (er wird beim Verschieben
/// des Nodes mitgeführt), wird aber weder gezeichnet noch mit dem Anker verbunden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Handle {
    /// Noch nicht an einem Segment beteiligt
    Dormant(Vec2),
    /// Wird gezeichnet und mit dem Anker verbunden
    Active(Vec2),
}

impl Handle {
    /// Position des Steuerpunkts, unabhängig vom Aktivitätszustand.
    pub fn position(&self) -> Vec2 {
        match *self {
            Handle::Dormant(p) | Handle::Active(p) => p,
        }
    }

    /// Gibt `true` zurück, wenn der Steuerpunkt aktiv ist.
    pub fn is_active(&self) -> bool {
        matches!(self, Handle::Active(_))
    }

    /// Position nur für aktive Steuerpunkte.
    pub fn active_position(&self) -> Option<Vec2> {
        match *self {
            Handle::Active(p) => Some(p),
            Handle::Dormant(_) => None,
        }
    }

    /// Aktiviert den Steuerpunkt an seiner aktuellen Position.
    pub fn activate(&mut self) {
        *self = Handle::Active(self.position());
    }

    /// Verschiebt den Steuerpunkt, der Aktivitätszustand bleibt erhalten.
    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Handle::Dormant(p) | Handle::Active(p) => *p += offset,
        }
    }
}

/// Einzelner Node der Kurve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveNode {
    /// Ankerpunkt, durch den die Kurve verläuft
    pub anchor: Vec2,
    /// Eingehender Steuerpunkt (P2 des Segments, das in diesem Node endet)
    pub handle1: Handle,
    /// Ausgehender Steuerpunkt (P1 des Segments, das in diesem Node beginnt)
    pub handle2: Handle,
}

impl CurveNode {
    /// Erstellt einen Node mit vertikal versetzten Steuerpunkten.
    ///
    /// handle1 liegt `handle_offset` oberhalb und ist sofort aktiv,
    /// handle2 liegt `handle_offset` unterhalb und ruht, bis ein Nachfolger existiert.
    pub fn new(anchor: Vec2, handle_offset: f32) -> Self {
        Self {
            anchor,
            handle1: Handle::Active(anchor + Vec2::new(0.0, handle_offset)),
            handle2: Handle::Dormant(anchor - Vec2::new(0.0, handle_offset)),
        }
    }

    /// Verschiebt Anker und beide Steuerpunkte um denselben Offset.
    pub fn translate(&mut self, offset: Vec2) {
        self.anchor += offset;
        self.handle1.translate(offset);
        self.handle2.translate(offset);
    }

    /// Aktive Steuerpunkte in der Reihenfolge handle1, handle2.
    pub fn active_handles(&self) -> impl Iterator<Item = Vec2> {
        self.handle1
            .active_position()
            .into_iter()
            .chain(self.handle2.active_position())
    }
}
