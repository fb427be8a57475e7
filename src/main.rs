//! rayplay entry point
//!
//! There is no windowing backend in this crate, so the binary runs a short
//! scripted session of both demos headless: it ticks the ray scene through a
//! handful of input frames (paced by the frame-rate cap) and logs the HUD,
//! then generates and validates a Sudoku board.

use glam::Vec2;

use rayplay::consts::WINDOW_WIDTH;
use rayplay::scene::Scene;
use rayplay::sim::{FrameInput, RayScene, tick};
use rayplay::sudoku::{Board, BoardCommand, Direction};
use rayplay::time::{FpsCounter, FrameClock, pace};
use rayplay::{Settings, hud, render};

fn main() {
    env_logger::init();
    log::info!("rayplay starting (headless)");

    run_ray_demo();
    run_sudoku_demo();
}

fn run_ray_demo() {
    let mut state = RayScene::new();
    let mut settings = Settings::load();
    let mut clock = FrameClock::new();
    let mut fps = FpsCounter::new();
    let mut scene = Scene::new();

    // A small scripted session: idle frames, drag the circle toward the
    // light, shrink it, then toggle the shadow rays off.
    let script = [
        FrameInput::default(),
        FrameInput {
            move_circle: Some(Vec2::new(400.0, 200.0)),
            ..Default::default()
        },
        FrameInput {
            shrink_radius: true,
            ..Default::default()
        },
        FrameInput {
            toggle_shadow: true,
            ..Default::default()
        },
        FrameInput::default(),
    ];

    for input in &script {
        let frame = clock.tick();
        tick(&mut state, &mut settings, input);

        scene.clear();
        state.emit(&settings, &mut scene);
        hud::emit(&state, &settings, fps.fps(), WINDOW_WIDTH, &mut scene);
        let vertices = render::tessellate(&scene);

        fps.record(frame.now);
        log::info!(
            "frame {}: rays={} (light={}, shadow={}), {} draw cmds, {} vertices",
            frame.frame_index,
            state.total_rays(),
            state.light_rays,
            state.shadow_rays,
            scene.cmds().len(),
            vertices.len(),
        );

        pace(frame.now, &settings.fps_cap);
    }

    for line in hud::lines(&state, &settings, fps.fps()) {
        log::info!("hud: {}", line.text());
    }
}

fn run_sudoku_demo() {
    let mut board = Board::new(Vec2::new(50.0, 50.0));
    board.generate(42);

    let report = board.validate();
    log::info!("generated board valid: {}", report.is_valid());
    board.apply(BoardCommand::Reset);

    // Break one cell and validate again
    board.apply(BoardCommand::Move(Direction::Down));
    let old = board.cell(0, 0).value;
    board.apply(BoardCommand::SetValue(if old == 9 { 1 } else { old + 1 }));
    let report = board.validate();
    log::info!(
        "after edit valid: {} (bad rows: {})",
        report.is_valid(),
        report.rows_ok.iter().filter(|&&ok| !ok).count()
    );

    let mut scene = Scene::new();
    board.emit(&mut scene);
    log::info!("board scene: {} draw cmds", scene.cmds().len());
}
