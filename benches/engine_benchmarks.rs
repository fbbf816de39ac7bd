//! Benchmarks for move generation and move execution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use atomic_chess::board::{Board, BoardBuilder, Color, PieceKind, Square};
use atomic_chess::Game;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn open_middlegame() -> Board {
    BoardBuilder::starting_position()
        .clear(sq("e2"))
        .clear(sq("d7"))
        .clear(sq("g1"))
        .clear(sq("b8"))
        .piece(sq("e4"), Color::White, PieceKind::Pawn)
        .moved(sq("e4"))
        .piece(sq("d5"), Color::Black, PieceKind::Pawn)
        .moved(sq("d5"))
        .piece(sq("f3"), Color::White, PieceKind::Knight)
        .piece(sq("c6"), Color::Black, PieceKind::Knight)
        .build()
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves(Color::White)))
    });

    let middlegame = open_middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves(Color::White)))
    });

    group.bench_function("destinations_d1", |b| {
        b.iter(|| black_box(middlegame.destinations(black_box(sq("d1")))))
    });

    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");

    for plies in [10usize, 40, 200] {
        group.bench_with_input(BenchmarkId::new("random", plies), &plies, |b, &plies| {
            b.iter(|| {
                let mut game = Game::new();
                let mut rng = StdRng::seed_from_u64(0x5eed);
                for _ in 0..plies {
                    let Some(&(from, to)) = game.legal_moves().choose(&mut rng) else {
                        break;
                    };
                    let _ = game.play(from, to);
                }
                black_box(game.state())
            })
        });
    }

    group.finish();
}

fn bench_try_move(c: &mut Criterion) {
    c.bench_function("try_move_rejected", |b| {
        let mut game = Game::new();
        b.iter(|| black_box(game.try_move(black_box("e2"), black_box("e5")).is_err()))
    });
}

criterion_group!(benches, bench_movegen, bench_playout, bench_try_move);
criterion_main!(benches);
