//! Die Kurve: geordnete Node-Folge mit Hit-Tests und Mutationen.

use super::{CubicSegment, CurveNode};
use glam::Vec2;

/// Halbe Kantenlänge der Hit-Box um einen Anker (Standardwert).
pub const DEFAULT_HIT_BOX_RADIUS: f32 = 10.0;
/// Vertikaler Abstand neuer Steuerpunkte zum Anker (Standardwert).
pub const DEFAULT_HANDLE_OFFSET: f32 = 50.0;

/// Stückweise kubische Bézier-Kurve.
///
/// Einfügereihenfolge = Durchlaufreihenfolge. Bei N Nodes existieren N-1 Segmente.
/// Der ausgehende Steuerpunkt (handle2) ist genau bei allen Nodes außer dem letzten aktiv.
#[derive(Debug, Clone, Default)]
pub struct Curve {
    nodes: Vec<CurveNode>,
}

impl Curve {
    /// Erstellt eine leere Kurve
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Hängt einen neuen Node an und gibt seinen Index zurück.
    ///
    /// Der bisher letzte Node bekommt dabei seinen ausgehenden Steuerpunkt aktiviert,
    /// da er jetzt ein Segment beginnt.
    pub fn append(&mut self, anchor: Vec2, handle_offset: f32) -> usize {
        if let Some(previous) = self.nodes.last_mut() {
            previous.handle2.activate();
        }
        self.nodes.push(CurveNode::new(anchor, handle_offset));
        let index = self.nodes.len() - 1;
        log::debug!("Node {} angehängt bei ({:.1}, {:.1})", index, anchor.x, anchor.y);
        index
    }

    /// Verschiebt Anker und Steuerpunkte eines Nodes.
    ///
    /// Ein ungültiger Index ist eine verletzte Vorbedingung: der Aufruf wird
    /// abgewiesen (`false`), die Kurve bleibt unverändert.
    pub fn translate_node(&mut self, index: usize, offset: Vec2) -> bool {
        debug_assert!(
            index < self.nodes.len(),
            "translate_node mit ungültigem Index {index}"
        );
        let Some(node) = self.nodes.get_mut(index) else {
            return false;
        };
        node.translate(offset);
        true
    }

    /// Entfernt alle Nodes
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Index des Nodes mit minimalem euklidischem Abstand zum Punkt.
    ///
    /// `None` bei leerer Kurve. Bei Gleichstand gewinnt der kleinere Index.
    pub fn find_closest_node(&self, point: Vec2) -> Option<usize> {
        let mut closest: Option<(usize, f32)> = None;
        for (index, node) in self.nodes.iter().enumerate() {
            let distance = node.anchor.distance(point);
            let is_closer = match closest {
                Some((_, best)) => distance < best,
                None => true,
            };
            if is_closer {
                closest = Some((index, distance));
            }
        }
        closest.map(|(index, _)| index)
    }

    /// Prüft, ob der Punkt in der achsparallelen Box (halbe Kantenlänge `radius`)
    /// um irgendeinen Anker liegt.
    ///
    /// Liefert bewusst nicht den getroffenen Node; dafür `find_closest_node`.
    pub fn is_slot_occupied(&self, point: Vec2, radius: f32) -> bool {
        self.nodes.iter().any(|node| {
            let delta = (point - node.anchor).abs();
            delta.x <= radius && delta.y <= radius
        })
    }

    /// Anzahl der Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Segmente (N-1, bzw. 0 bei leerer Kurve)
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Gibt `true` zurück, wenn die Kurve keine Nodes hat.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read-only Sicht auf alle Nodes in Durchlaufreihenfolge.
    pub fn nodes(&self) -> &[CurveNode] {
        &self.nodes
    }

    /// Iterator über alle Segmente: (anchor[i], handle2[i], handle1[i+1], anchor[i+1]).
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        self.nodes.windows(2).map(|pair| CubicSegment {
            p0: pair[0].anchor,
            p1: pair[0].handle2.position(),
            p2: pair[1].handle1.position(),
            p3: pair[1].anchor,
        })
    }
}
