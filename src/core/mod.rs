//! Core-Domänentypen: Kurve, Nodes, Steuerpunkte und Bézier-Auswertung.

pub mod bezier;
pub mod curve;
pub mod node;
pub mod projection;

pub use bezier::{cubic_bezier, CubicSegment, SEGMENT_SAMPLE_STEPS};
pub use curve::{Curve, DEFAULT_HANDLE_OFFSET, DEFAULT_HIT_BOX_RADIUS};
pub use node::{CurveNode, Handle};
pub use projection::{render_to_screen, screen_to_render};
