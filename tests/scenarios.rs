use rand::{rngs::StdRng, SeedableRng};
use snake_autopilot::{
    gymnasium::{Gymnasium, GymnasiumOptions, Unobserved},
    snakegame::{
        config::BoardConfig,
        models::{GameState, Status},
        types::{Coord, Direction},
    },
    strategies::{BreadthFirst, Controller, Greedy, Strategy},
};

fn board(
    cells: &[(i64, i64)],
    direction: Direction,
    food: (i64, i64),
) -> GameState {
    GameState::from_parts(
        BoardConfig::cells(5, 5).unwrap(),
        cells.iter().copied().map(Coord::from),
        direction,
        food.into(),
    )
    .unwrap()
}

#[test]
fn bfs_eats_food_two_cells_ahead() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut state =
        board(&[(2, 2), (1, 2), (0, 2)], Direction::Right, (4, 2));

    let mut moves = Vec::new();
    while state.score() == 0 {
        let direction = BreadthFirst.get_movement(&state);
        moves.push(direction);
        assert!(!state.step(direction, &mut rng).game_over);
    }

    assert_eq!(moves, vec![Direction::Right, Direction::Right]);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().len(), 4);
}

#[test]
fn both_controllers_keep_course_when_walled_in() {
    // the head at (2,2) has body on all four sides
    let walled_in = [
        (2, 2),
        (2, 3),
        (1, 3),
        (1, 2),
        (1, 1),
        (2, 1),
        (3, 1),
        (3, 2),
        (3, 3),
    ];

    for controller in [Controller::Bfs, Controller::Greedy] {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = board(&walled_in, Direction::Up, (0, 0));
        let strategy = controller.strategy();

        let direction = strategy.get_movement(&state);
        assert_eq!(direction, Direction::Up, "{controller} changed course");

        let outcome = state.step(direction, &mut rng);
        assert!(outcome.game_over);
        assert_eq!(outcome.score, 0);
        assert_eq!(state.status(), Status::Dead);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let options = || GymnasiumOptions {
        num_games: 10,
        board:     BoardConfig::new(200, 200, 20).unwrap(),
        max_ticks: Some(10_000),
        ..GymnasiumOptions::default()
    };

    let run = |strategy: &dyn Strategy| {
        Gymnasium::new(options())
            .run(
                strategy,
                &mut StdRng::seed_from_u64(1234),
                &mut Unobserved,
            )
            .unwrap()
    };

    for strategy in [&BreadthFirst as &dyn Strategy, &Greedy] {
        let first = run(strategy);
        let second = run(strategy);
        assert_eq!(
            first.scores().collect::<Vec<_>>(),
            second.scores().collect::<Vec<_>>()
        );
        assert_eq!(first.records.len(), 10);
    }
}

#[test]
fn bfs_always_reaches_the_first_food() {
    let summary = Gymnasium::new(GymnasiumOptions {
        num_games: 3,
        board:     BoardConfig::new(200, 200, 20).unwrap(),
        max_ticks: Some(10_000),
        ..GymnasiumOptions::default()
    })
    .run(&BreadthFirst, &mut StdRng::seed_from_u64(7), &mut Unobserved)
    .unwrap();

    // the opening food is always reachable, so every game scores
    assert!(summary.records.iter().all(|record| record.score > 0));
    assert!(summary.mean_score() >= 1.0);
}
