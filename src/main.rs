//! Goal Dash entry point
//!
//! Loads the config, opens the window and runs the frame loop.

use goal_dash::Config;
use goal_dash::platform;
use goal_dash::renderer::{self, Hud, ViewTransform, palette};
use goal_dash::sim::{GameEvent, GameState, tick};

use glam::Vec2;
use macroquad::window::{clear_background, next_frame};

const TITLE: &str = "Goal Dash";

/// Frame loop. Returns only on startup failure; window close ends the process.
async fn run(config: Config) -> anyhow::Result<()> {
    let hud = Hud::load(&config.settings).await?;

    let viewport = Vec2::new(
        config.settings.window_width as f32,
        config.settings.window_height as f32,
    );
    let mut state = GameState::new(config.tuning, viewport);
    log::info!(
        "Stage ready: {} tiles, goal at x={}",
        state.stage.tiles().len(),
        state.stage.goal_x
    );

    loop {
        let input = platform::poll_tick_input();
        tick(&mut state, &input, platform::frame_dt());

        for event in state.drain_events() {
            match event {
                GameEvent::FellIntoHole => log::info!("Fell into a hole at x={:.0}", state.player.pos.x),
                GameEvent::ReachedGoal => log::info!("Goal reached on frame {}", state.frame),
                GameEvent::Restarted => log::info!("Restarted"),
                GameEvent::Jumped | GameEvent::Landed { .. } => log::trace!("{:?}", event),
            }
        }

        let screen = platform::screen_size();
        clear_background(palette::BACKGROUND);
        let view = ViewTransform::new(&state.camera, state.viewport, screen);
        renderer::draw_world(&state, &view);
        renderer::draw_overlay(&hud, state.phase, screen);

        next_frame().await;
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Goal Dash starting...");

    let config = Config::load();
    let conf = platform::window_conf(TITLE, &config.settings);

    macroquad::Window::from_config(conf, async move {
        if let Err(e) = run(config).await {
            log::error!("Fatal: {:#}", e);
            std::process::exit(1);
        }
    });
}
