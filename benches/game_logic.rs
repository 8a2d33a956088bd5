use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{get_shape, Board, GameConfig, GameState, PieceGenerator};
use classic_tetris::types::{Phase, PieceKind};

fn started() -> GameState {
    let mut state = GameState::new(GameConfig::default(), 12345);
    state.start();
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.phase() == Phase::Over {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Board::new(10, 20);
    for y in 16..20 {
        for x in 0..10 {
            full.set(x, y, PieceKind::I.tag());
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(&full).clear_lines())
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.phase() == Phase::Over {
                state.restart();
            }
            state.hard_drop();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });

    let t = get_shape(PieceKind::T);
    c.bench_function("shape_rotated", |b| b.iter(|| black_box(&t).rotated()));
}

fn bench_piece_draw(c: &mut Criterion) {
    let mut generator = PieceGenerator::new(12345, 10);

    c.bench_function("draw_piece", |b| b.iter(|| generator.draw()));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_rotate,
    bench_piece_draw
);
criterion_main!(benches);
