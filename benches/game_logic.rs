use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, Board, Catalog, GameConfig, GameSession, Position};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, FRAME_MS};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameSession::with_seed(GameConfig::default(), 12345).unwrap();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.tick(black_box(FRAME_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut rows = vec![vec![0u8; 10]; 20];
    for row in rows.iter_mut().skip(16) {
        row.fill(5);
    }
    let rows: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
    let full = Board::from_rows(&rows).unwrap();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(board.clear_completed_lines());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::default();
    let shape = Catalog::standard().get(4).unwrap().clone();

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&board), &shape, black_box(Position::new(3, 10))))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut game = GameSession::with_seed(GameConfig::default(), 12345).unwrap();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.apply_action(GameAction::Rotate);
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = GameSession::with_seed(GameConfig::default(), 12345).unwrap();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.apply_action(GameAction::HardDrop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = GameSession::with_seed(GameConfig::default(), 12345).unwrap();
    let mut snap = game.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_try_rotate,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
