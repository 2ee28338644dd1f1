//! Umrechnung zwischen Screen-Koordinaten (Ursprung oben links) und
//! Render-Koordinaten (Ursprung unten links, Y nach oben).

use glam::Vec2;

/// Screen → Render: `render_y = viewport_height - screen_y`.
pub fn screen_to_render(screen_pos: Vec2, viewport_height: f32) -> Vec2 {
    Vec2::new(screen_pos.x, viewport_height - screen_pos.y)
}

/// Render → Screen (die Spiegelung ist ihre eigene Umkehrung).
pub fn render_to_screen(render_pos: Vec2, viewport_height: f32) -> Vec2 {
    Vec2::new(render_pos.x, viewport_height - render_pos.y)
}
