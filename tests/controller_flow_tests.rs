use bezier_spline_tool::shared::options::MAX_CURVE_SAMPLES;
use bezier_spline_tool::{AppCommand, AppController, AppIntent, AppState, EditorOptions, Interaction};
use glam::Vec2;
use std::path::PathBuf;

fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                pos: Vec2::new(x, y),
            },
        )
        .expect("PointerPressed sollte funktionieren");
}

fn move_to(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerMoved {
                pos: Vec2::new(x, y),
            },
        )
        .expect("PointerMoved sollte funktionieren");
}

fn release(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    press(controller, state, x, y);
    release(controller, state);
}

#[test]
fn test_clicks_on_free_space_append_nodes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 110.0, 10.0);
    click(&mut controller, &mut state, 210.0, 10.0);

    assert_eq!(state.node_count(), 3);
    assert_eq!(state.segment_count(), 2);
    assert_eq!(state.session.interaction, Interaction::Idle);

    let nodes = state.session.curve.nodes();
    assert!(nodes[0].handle2.is_active());
    assert!(nodes[1].handle2.is_active());
    assert!(!nodes[2].handle2.is_active());
}

#[test]
fn test_press_on_node_starts_drag_instead_of_append() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 100.0, 100.0);
    press(&mut controller, &mut state, 105.0, 108.0);

    assert_eq!(state.node_count(), 1);
    assert_eq!(
        state.session.interaction,
        Interaction::Dragging {
            node_index: 0,
            last_pointer: Vec2::new(105.0, 108.0)
        }
    );

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::BeginDrag { node_index: 0, .. } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_drag_moves_node_and_handles_by_pointer_delta() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 110.0, 10.0);
    let before = state.session.curve.nodes().to_vec();

    press(&mut controller, &mut state, 112.0, 12.0);
    move_to(&mut controller, &mut state, 120.0, 30.0);
    move_to(&mut controller, &mut state, 132.0, 2.0);
    release(&mut controller, &mut state);

    let total = Vec2::new(20.0, -10.0);
    let after = state.session.curve.nodes();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].anchor, before[1].anchor + total);
    assert_eq!(
        after[1].handle1.position(),
        before[1].handle1.position() + total
    );
    assert_eq!(
        after[1].handle2.position(),
        before[1].handle2.position() + total
    );
    assert_eq!(state.session.interaction, Interaction::Idle);
}

#[test]
fn test_moves_after_release_do_not_move_nodes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 50.0, 50.0);
    press(&mut controller, &mut state, 50.0, 50.0);
    release(&mut controller, &mut state);
    move_to(&mut controller, &mut state, 400.0, 400.0);

    assert_eq!(state.session.curve.nodes()[0].anchor, Vec2::new(50.0, 50.0));
}

#[test]
fn test_press_between_two_close_nodes_drags_the_closer_one() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 100.0, 100.0);
    // Außerhalb der Box des ersten Nodes, damit ein zweiter entsteht
    click(&mut controller, &mut state, 115.0, 100.0);
    assert_eq!(state.node_count(), 2);

    press(&mut controller, &mut state, 109.0, 100.0);
    assert_eq!(state.session.interaction.dragged_node(), Some(1));
}

#[test]
fn test_reset_clears_curve_and_forces_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for i in 0..5 {
        click(&mut controller, &mut state, 40.0 * i as f32, 0.0);
    }
    press(&mut controller, &mut state, 0.0, 0.0);
    assert!(state.session.interaction.is_dragging());

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte funktionieren");

    assert_eq!(state.node_count(), 0);
    assert_eq!(state.segment_count(), 0);
    assert_eq!(state.session.interaction, Interaction::Idle);

    // Nach dem Leeren verhält sich die Kurve wie neu
    move_to(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 0.0, 0.0);
    assert_eq!(state.node_count(), 1);
    assert!(!state.session.curve.nodes()[0].handle2.is_active());
}

#[test]
fn test_render_scene_follows_edits() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 110.0, 10.0);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.curve_strips.len(), 1);
    assert_eq!(scene.curve_strips[0].len(), 201);
    assert_eq!(scene.curve_strips[0][0], Vec2::new(10.0, 10.0));
    assert_eq!(scene.node_markers.len(), 2);
    assert_eq!(scene.handles.points.len(), 3);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(state.command_log.last(), Some(&AppCommand::RequestExit));
}

#[test]
fn test_oversized_sample_count_from_options_is_bounded() {
    let mut controller = AppController::new();
    let options = EditorOptions::from_toml_str("curve_samples = 1000000000")
        .expect("Optionen sollten parsen");
    let mut state = AppState::with_options(options);

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 110.0, 10.0);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.curve_strips.len(), 1);
    assert_eq!(scene.curve_strips[0].len(), MAX_CURVE_SAMPLES + 1);
}

#[test]
fn test_command_log_keeps_edits_when_nothing_else_happens() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 10.0);
    // Bewegungen ohne Drag erzeugen keine Commands
    for i in 0..2000 {
        move_to(&mut controller, &mut state, i as f32, 0.0);
    }

    assert_eq!(state.command_log.len(), 1);
    assert_eq!(
        state.command_log.last(),
        Some(&AppCommand::AppendNode {
            pos: Vec2::new(10.0, 10.0)
        })
    );
}

fn temp_options_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "bezier_spline_tool_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn test_save_then_reload_options_through_controller() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = temp_options_path("roundtrip");
    state.options.node_half_size = 7.0;

    controller
        .handle_intent(&mut state, AppIntent::OptionsSaveRequested)
        .expect("Speichern sollte funktionieren");

    state.options.node_half_size = 1.0;
    controller
        .handle_intent(&mut state, AppIntent::OptionsReloadRequested)
        .expect("Neu laden sollte funktionieren");
    let _ = std::fs::remove_file(&state.options_path);

    assert_eq!(state.options.node_half_size, 7.0);
    assert_eq!(state.command_log.last(), Some(&AppCommand::ReloadOptions));
}

#[test]
fn test_reload_of_malformed_options_fails_and_keeps_current_values() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = temp_options_path("kaputt");
    state.options.hit_box_radius = 3.0;
    std::fs::write(&state.options_path, "hit_box_radius = [").expect("Testdatei schreiben");

    let result = controller.handle_intent(&mut state, AppIntent::OptionsReloadRequested);
    let _ = std::fs::remove_file(&state.options_path);

    assert!(result.is_err());
    assert_eq!(state.options.hit_box_radius, 3.0);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_reload_without_options_file_restores_defaults() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = temp_options_path("fehlt");
    state.options.curve_samples = 5;

    controller
        .handle_intent(&mut state, AppIntent::OptionsReloadRequested)
        .expect("Fehlende Datei ist kein Fehler");

    assert_eq!(state.options, EditorOptions::default());
}
