//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `bytetris-term`.
//! Keys are handled as they arrive; gravity and redraws run on the loop tick.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use bytetris::config::Args;
use bytetris::core::GameState;
use bytetris::input::{drain_pending, handle_key_event, should_quit, wants_restart, Ticker};
use bytetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    let mut seed = args.seed();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, &mut seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    eprintln!("bytetris: seed {seed} (replay with --seed {seed})");
    result
}

fn run(term: &mut TerminalRenderer, args: &Args, seed: &mut u32) -> Result<()> {
    let mut game = GameState::new(*seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let mut loop_clock = Ticker::from_millis(args.loop_ms, start);
    let mut update_clock = Ticker::from_millis(args.update_ms, start);

    loop {
        // Input with timeout until the next loop tick.
        if event::poll(loop_clock.remaining(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.game_over() {
                        if wants_restart(key) {
                            *seed = seed.wrapping_add(1);
                            game = GameState::new(*seed);
                            update_clock.reset(Instant::now());
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if !loop_clock.ready(now) {
            continue;
        }

        if update_clock.ready(now) && game.tick() {
            // Keys held for the piece that just locked must not steer the next one.
            drain_pending()?;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
