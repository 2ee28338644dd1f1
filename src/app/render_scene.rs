//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{render_curve, render_handles, render_nodes, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.session.curve;
    let options = &state.options;

    RenderScene {
        curve_strips: render_curve(curve, options.curve_samples),
        node_markers: render_nodes(curve, options.node_half_size),
        handles: render_handles(curve),
        options: options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_reflects_curve_and_options() {
        let mut state = AppState::new();
        state.options.curve_samples = 10;
        state.options.node_half_size = 3.0;
        for x in [10.0, 110.0, 210.0] {
            state.session.curve.append(Vec2::new(x, 10.0), 50.0);
        }

        let scene = build(&state);

        assert_eq!(scene.curve_strips.len(), 2);
        assert!(scene.curve_strips.iter().all(|s| s.len() == 11));
        assert_eq!(scene.node_markers.len(), 3);
        assert_eq!(scene.node_markers[0].half_size, 3.0);
        assert_eq!(scene.handles.points.len(), 5);
    }

    #[test]
    fn empty_state_builds_empty_scene() {
        let scene = build(&AppState::new());
        assert!(scene.node_markers.is_empty());
        assert!(scene.curve_strips.is_empty());
        assert!(scene.handles.points.is_empty());
    }
}
