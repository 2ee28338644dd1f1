//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod curve_geometry;
pub mod launch;
pub mod options;
mod render_scene;

pub use curve_geometry::{render_curve, render_handles, render_nodes, HandleOverlay, NodeMarker};
pub use launch::{LaunchConfig, LaunchError};
pub use options::EditorOptions;
pub use render_scene::RenderScene;
