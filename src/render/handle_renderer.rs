//! Zeichnet aktive Steuerpunkte und ihre gestrichelten Verbindungen zum Anker.

use super::types::{color32, RenderContext};
use crate::shared::RenderScene;

/// Renderer für Steuerpunkt-Marker und Verbindungslinien.
#[derive(Default)]
pub(crate) struct HandleRenderer {
    shapes: Vec<egui::Shape>,
}

impl HandleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Erst die Punkt-Marker, dann die Striche darüber.
    pub fn render(&mut self, ctx: &RenderContext, scene: &RenderScene) {
        let options = &scene.options;
        let handle_color = color32(options.handle_color);
        let radius = options.handle_point_size * 0.5;
        let connector_stroke = egui::Stroke::new(1.0, color32(options.connector_color));

        self.shapes.clear();
        for &point in &scene.handles.points {
            self.shapes.push(egui::Shape::circle_filled(
                ctx.to_screen(point),
                radius,
                handle_color,
            ));
        }

        for &[anchor, handle] in &scene.handles.connectors {
            self.shapes.extend(egui::Shape::dashed_line(
                &[ctx.to_screen(anchor), ctx.to_screen(handle)],
                connector_stroke,
                options.connector_dash_length,
                options.connector_gap_length,
            ));
        }

        ctx.painter.extend(self.shapes.drain(..));
    }
}
