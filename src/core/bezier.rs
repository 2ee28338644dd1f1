//! Kubische Bézier-Auswertung und Segment-Abtastung.

use glam::Vec2;

/// Standard-Auflösung eines Segments: 200 Schritte = 201 Abtastpunkte.
pub const SEGMENT_SAMPLE_STEPS: usize = 200;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Für t außerhalb von [0, 1] wird ungeprüft extrapoliert.
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Ein Kurvensegment zwischen zwei benachbarten Ankern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Start-Anker
    pub p0: Vec2,
    /// Ausgehender Steuerpunkt des Start-Nodes
    pub p1: Vec2,
    /// Eingehender Steuerpunkt des End-Nodes
    pub p2: Vec2,
    /// End-Anker
    pub p3: Vec2,
}

impl CubicSegment {
    /// Evaluiert das Segment bei Parameter `t`.
    pub fn eval(&self, t: f32) -> Vec2 {
        cubic_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// Gleichmäßig im Parameterraum verteilte Punkte (`steps + 1` Stück, inkl. Endpunkte).
    pub fn sample(&self, steps: usize) -> Vec<Vec2> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|j| self.eval(j as f32 / steps as f32))
            .collect()
    }
}
