use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use snake_autopilot::{
    snakegame::{config::BoardConfig, models::GameState},
    strategies::{BreadthFirst, Greedy, Strategy},
};

/// A game some way in, so the body has grown a little.
fn make_game() -> GameState {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = GameState::new(BoardConfig::default(), &mut rng)
        .expect("default board is valid");
    while game.score() < 10 && !game.is_over() {
        let direction = BreadthFirst.get_movement(&game);
        game.step(direction, &mut rng);
    }
    game
}

fn bench_controllers(c: &mut Criterion) {
    let game = make_game();

    c.bench_function("bfs", |b| {
        b.iter(|| BreadthFirst.get_movement(black_box(&game)));
    });
    c.bench_function("greedy", |b| {
        b.iter(|| Greedy.get_movement(black_box(&game)));
    });
}

criterion_group!(benches, bench_controllers);
criterion_main!(benches);
