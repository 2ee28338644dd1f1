//! Gemeinsamer Render-Kontext für alle Sub-Renderer.

use crate::core::render_to_screen;
use glam::Vec2;

/// Bündelt Painter und Zeichenbereich eines Frames.
pub(crate) struct RenderContext<'a> {
    pub painter: &'a egui::Painter,
    pub rect: egui::Rect,
}

impl RenderContext<'_> {
    /// Render-Koordinate → absolute egui-Position im Zeichenbereich.
    pub fn to_screen(&self, render_pos: Vec2) -> egui::Pos2 {
        let local = render_to_screen(render_pos, self.rect.height());
        egui::pos2(self.rect.min.x + local.x, self.rect.min.y + local.y)
    }
}

/// RGBA-Farbe aus den Optionen (0.0–1.0, nicht vormultipliziert) → egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
