//! Bezier Spline Tool Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorSession, Interaction};
pub use core::{cubic_bezier, CubicSegment, Curve, CurveNode, Handle};
pub use shared::{EditorOptions, LaunchConfig, LaunchError, RenderScene};
