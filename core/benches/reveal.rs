use criterion::{Criterion, criterion_group, criterion_main};
use minesweep_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

fn generate(c: &mut Criterion) {
    let config = BoardConfig::new(200, 200, 8000).unwrap();
    let mut seed = 0;
    c.bench_function("generate 200x200", |b| {
        b.iter(|| {
            seed += 1;
            black_box(RandomBoardGenerator::new(seed).generate(config).unwrap())
        })
    });
}

fn flood_fill(c: &mut Criterion) {
    // a lone corner mine leaves one huge zero region
    let board = Board::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    c.bench_function("flood fill 255x255", |b| {
        b.iter_batched(
            || Game::from_board(board.clone(), SmallRng::seed_from_u64(0)),
            |mut game| black_box(game.reveal((0, 0)).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
