use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bytetris::core::pieces::derive_rotations;
use bytetris::core::{Board, GameState};
use bytetris::term::{FrameBuffer, GameView, Viewport};
use bytetris::types::GameAction;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::from_rows(&[
                "##########",
                "##########",
                "##########",
                "##########",
            ]);
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(state.spawn());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            if !state.move_right() {
                while state.move_left() {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.apply_action(GameAction::RotateCw));
        })
    });
}

fn bench_derive_rotations(c: &mut Criterion) {
    c.bench_function("derive_rotations", |b| b.iter(|| black_box(derive_rotations())));
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_scene", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_derive_rotations,
    bench_render
);
criterion_main!(benches);
