//! Zentrale Konfiguration für das Bezier Spline Tool.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DEFAULT_HANDLE_OFFSET, DEFAULT_HIT_BOX_RADIUS, SEGMENT_SAMPLE_STEPS};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Obergrenze für `curve_samples` aus der Optionen-Datei.
pub const MAX_CURVE_SAMPLES: usize = 10_000;

// ── Node-Rendering ─────────────────────────────────────────────────

/// Halbe Kantenlänge des Node-Quadrats in Pixeln.
pub const NODE_HALF_SIZE: f32 = 5.0;
/// Farbe der Node-Quadrate (RGBA: Rot).
pub const NODE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Steuerpunkte ────────────────────────────────────────────────────

/// Durchmesser der Steuerpunkt-Marker in Pixeln.
pub const HANDLE_POINT_SIZE: f32 = 10.0;
/// Farbe der Steuerpunkt-Marker (RGBA: Rot).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der gestrichelten Anker→Steuerpunkt-Linien (RGBA: Weiß).
pub const CONNECTOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Strichlänge der Verbindungslinien in Pixeln.
pub const CONNECTOR_DASH_LENGTH: f32 = 4.0;
/// Lückenlänge der Verbindungslinien in Pixeln.
pub const CONNECTOR_GAP_LENGTH: f32 = 4.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Linienstärke der Kurve in Pixeln.
pub const CURVE_LINE_WIDTH: f32 = 2.0;
/// Farbe der Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Hintergrundfarbe des Zeichenbereichs (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_spline_tool.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Parameter-Schritte pro Segment (Abtastpunkte = Schritte + 1)
    pub curve_samples: usize,
    /// Linienstärke der Kurve
    pub curve_line_width: f32,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],

    // ── Nodes ───────────────────────────────────────────────────
    /// Halbe Kantenlänge der Hit-Box für „Slot belegt“
    pub hit_box_radius: f32,
    /// Vertikaler Abstand neuer Steuerpunkte zum Anker
    pub handle_offset: f32,
    /// Halbe Kantenlänge des Node-Quadrats
    pub node_half_size: f32,
    /// Farbe der Node-Quadrate
    pub node_color: [f32; 4],

    // ── Steuerpunkte ─────────────────────────────────────────────
    /// Durchmesser der Steuerpunkt-Marker
    pub handle_point_size: f32,
    /// Farbe der Steuerpunkt-Marker
    pub handle_color: [f32; 4],
    /// Farbe der gestrichelten Verbindungslinien
    pub connector_color: [f32; 4],
    /// Strichlänge der Verbindungslinien
    pub connector_dash_length: f32,
    /// Lückenlänge der Verbindungslinien
    pub connector_gap_length: f32,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrundfarbe des Zeichenbereichs
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_samples: SEGMENT_SAMPLE_STEPS,
            curve_line_width: CURVE_LINE_WIDTH,
            curve_color: CURVE_COLOR,

            hit_box_radius: DEFAULT_HIT_BOX_RADIUS,
            handle_offset: DEFAULT_HANDLE_OFFSET,
            node_half_size: NODE_HALF_SIZE,
            node_color: NODE_COLOR,

            handle_point_size: HANDLE_POINT_SIZE,
            handle_color: HANDLE_COLOR,
            connector_color: CONNECTOR_COLOR,
            connector_dash_length: CONNECTOR_DASH_LENGTH,
            connector_gap_length: CONNECTOR_GAP_LENGTH,

            background_color: BACKGROUND_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
            return Self::default();
        }
        match Self::read_from_file(path) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("{:#}, verwende Standardwerte", e);
                Self::default()
            }
        }
    }

    /// Liest Optionen aus einer TOML-Datei und reicht Fehler weiter.
    pub fn read_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.clamped())
    }

    /// Begrenzt Werte, die aus der Datei unbrauchbar groß oder klein kommen können.
    fn clamped(mut self) -> Self {
        let samples = self.curve_samples.clamp(1, MAX_CURVE_SAMPLES);
        if samples != self.curve_samples {
            log::warn!(
                "curve_samples = {} außerhalb von 1..={}, verwende {}",
                self.curve_samples,
                MAX_CURVE_SAMPLES,
                samples
            );
            self.curve_samples = samples;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("bezier_spline_tool"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("bezier_spline_tool.toml")
    }
}
