//! Four-direction movement demo
//!
//! WASD moves an orange circle 5 px per frame.

use goal_dash::platform;
use goal_dash::renderer::{ViewTransform, draw_wanderer, palette};
use goal_dash::settings::Settings;
use goal_dash::sim::Wanderer;

use macroquad::window::{clear_background, next_frame};

async fn run() {
    let mut wanderer = Wanderer::default();
    let view = ViewTransform::identity();

    loop {
        wanderer.step(&platform::poll_move_input());

        clear_background(palette::BACKGROUND);
        draw_wanderer(&wanderer, &view);

        next_frame().await;
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Move demo starting...");

    let conf = platform::window_conf("Move Demo", &Settings::default());
    macroquad::Window::from_config(conf, run());
}
