//! Zeichnen der Render-Szene mit dem egui-Painter.

mod curve_renderer;
mod handle_renderer;
mod node_renderer;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use handle_renderer::HandleRenderer;
pub(crate) use node_renderer::NodeRenderer;
use types::{color32, RenderContext};

/// Haupt-Renderer für Kurve, Nodes und Steuerpunkte.
///
/// Die Sub-Renderer halten nur ihre Shape-Puffer; die Geometrie kommt
/// fertig abgetastet aus der `RenderScene`.
pub struct Renderer {
    curve_renderer: CurveRenderer,
    node_renderer: NodeRenderer,
    handle_renderer: HandleRenderer,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self {
            curve_renderer: CurveRenderer::new(),
            node_renderer: NodeRenderer::new(),
            handle_renderer: HandleRenderer::new(),
        }
    }

    /// Rendert die komplette Szene in `rect`
    /// (Reihenfolge: Hintergrund, Kurve, Nodes, Steuerpunkte).
    pub fn render_scene(&mut self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            color32(scene.options.background_color),
        );

        let ctx = RenderContext { painter, rect };

        self.curve_renderer.render(&ctx, scene);
        self.node_renderer.render(&ctx, scene);
        self.handle_renderer.render(&ctx, scene);
    }
}
