//! Bezier Spline Tool.
//!
//! Nodes per Klick setzen, per Drag verschieben, E leert die Kurve.
//! Aufeinanderfolgende Nodes werden mit kubischen Bézier-Segmenten verbunden.

use bezier_spline_tool::{ui, AppState, EditorOptions, LaunchConfig};
use eframe::egui;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("Bezier-Spline-Tool");

    let launch = match LaunchConfig::from_args(args.iter().skip(1)) {
        Ok(launch) => launch,
        Err(e) => {
            log::error!("Ungültige Startparameter: {}", e);
            eprintln!("{}", LaunchConfig::usage(program));
            return ExitCode::FAILURE;
        }
    };

    match AppRunner::run(launch) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fenster konnte nicht gestartet werden: {}", e);
            ExitCode::FAILURE
        }
    }
}

struct AppRunner;

impl AppRunner {
    fn run(launch: LaunchConfig) -> Result<(), eframe::Error> {
        log::info!(
            "Bezier Spline Tool v{} startet ({}x{})...",
            env!("CARGO_PKG_VERSION"),
            launch.width,
            launch.height
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(launch.inner_size())
                .with_title("Bezier Spline Tool"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Spline Tool",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    view: ui::EditorView,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            view: ui::EditorView::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let panel_fill = ctx.style().visuals.panel_fill;
        let outcome = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(panel_fill))
            .show(ctx, |ui| self.view.show(ui, &mut self.state))
            .inner;

        if outcome.had_input || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
