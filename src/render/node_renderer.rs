//! Zeichnet die Anker als gefüllte Quadrate.

use super::types::{color32, RenderContext};
use crate::shared::RenderScene;

/// Quadrat-Renderer für Nodes.
#[derive(Default)]
pub(crate) struct NodeRenderer {
    shapes: Vec<egui::Shape>,
}

impl NodeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderContext, scene: &RenderScene) {
        let color = color32(scene.options.node_color);

        self.shapes.clear();
        for marker in &scene.node_markers {
            // Y wird gespiegelt: from_two_pos sortiert die Ecken selbst
            let rect = egui::Rect::from_two_pos(
                ctx.to_screen(marker.min()),
                ctx.to_screen(marker.max()),
            );
            self.shapes.push(egui::Shape::rect_filled(rect, egui::CornerRadius::ZERO, color));
        }

        ctx.painter.extend(self.shapes.drain(..));
    }
}
