//! Zeichnet die abgetasteten Bézier-Segmente als Linienzüge.

use super::types::{color32, RenderContext};
use crate::shared::RenderScene;

/// Linienzug-Renderer für die Kurvensegmente.
#[derive(Default)]
pub(crate) struct CurveRenderer {
    shapes: Vec<egui::Shape>,
}

impl CurveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ein Linienzug pro Segment, Farbe und Breite aus den Optionen.
    pub fn render(&mut self, ctx: &RenderContext, scene: &RenderScene) {
        let stroke = egui::Stroke::new(
            scene.options.curve_line_width,
            color32(scene.options.curve_color),
        );

        self.shapes.clear();
        for strip in &scene.curve_strips {
            if strip.len() < 2 {
                continue;
            }
            let points: Vec<egui::Pos2> = strip.iter().map(|&p| ctx.to_screen(p)).collect();
            self.shapes.push(egui::Shape::line(points, stroke));
        }

        ctx.painter.extend(self.shapes.drain(..));
    }
}
