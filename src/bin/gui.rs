//! Window runner.
//!
//! Held keys are polled on the key-repeat clock and gravity runs on the update
//! clock; the scene is redrawn every frame.

use std::time::Instant;

use clap::Parser;
use macroquad::color::BLACK;
use macroquad::input::{is_key_down, is_key_pressed, KeyCode};
use macroquad::window::{clear_background, next_frame, screen_height, screen_width, Conf};

use bytetris::config::Args;
use bytetris::core::{draw_scene, GameState};
use bytetris::gui::{held_actions, PixelCanvas, WINDOW_HEIGHT, WINDOW_WIDTH};
use bytetris::input::Ticker;

fn window_conf() -> Conf {
    Conf {
        window_title: "bytetris".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    let mut seed = args.seed();
    let mut game = GameState::new(seed);
    let mut canvas = PixelCanvas::default();

    let start = Instant::now();
    let mut key_clock = Ticker::from_millis(args.key_repeat_ms, start);
    let mut update_clock = Ticker::from_millis(args.update_ms, start);

    loop {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }
        if game.game_over() && is_key_pressed(KeyCode::R) {
            seed = seed.wrapping_add(1);
            game = GameState::new(seed);
            update_clock.reset(Instant::now());
        }

        let now = Instant::now();
        if key_clock.ready(now) {
            for action in held_actions(is_key_down) {
                game.apply_action(action);
            }
        }
        if update_clock.ready(now) {
            game.tick();
        }

        clear_background(BLACK);
        canvas.begin(screen_width(), screen_height());
        draw_scene(&mut canvas, &game.snapshot());
        canvas.present();

        next_frame().await;
    }

    eprintln!("bytetris-gui: seed {seed} (replay with --seed {seed})");
}
