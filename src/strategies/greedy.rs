use std::collections::HashSet;

use itertools::Itertools;
use log::debug;

use super::Strategy;
use crate::snakegame::{
    models::GameState,
    types::{Coord, Direction},
    utils::manhattan_distance,
};

/// Candidate order. Decides between equally close neighbours when the current
/// direction is not one of them.
const CANDIDATES: [Direction; 4] =
    [Direction::Down, Direction::Up, Direction::Left, Direction::Right];

/// Moves to whichever neighbour is closest to the food, looking no further
/// than one cell ahead.
pub struct Greedy;

impl Strategy for Greedy {
    fn get_movement(&self, game_state: &GameState) -> Direction {
        let current = game_state.direction();
        let body: HashSet<_> = game_state.body().collect();
        let proposed =
            greedy(current, game_state.head(), game_state.food(), &body);

        guard_reversal(current, proposed)
    }
}

/// Picks the direction whose neighbour of `head` is nearest to `food` by
/// manhattan distance, skipping neighbours that are part of `body`.
///
/// Ties go to `current` if it is among them, otherwise to the first in
/// [`CANDIDATES`] order. Walls are not considered. If every neighbour is body,
/// `current` is returned.
#[must_use]
pub fn greedy(
    current: Direction,
    head: Coord,
    food: Coord,
    body: &HashSet<Coord>,
) -> Direction {
    let distance = |d: Direction| manhattan_distance(head.neighbour(d), food);

    let candidates = CANDIDATES
        .iter()
        .copied()
        .filter(|d| !body.contains(&head.neighbour(*d)))
        .collect_vec();

    let Some(&first) = candidates.first() else {
        debug!("boxed in at {head}, carrying on {current}");
        return current;
    };

    let mut choice = if candidates.contains(&current) {
        current
    } else {
        first
    };

    for &candidate in &candidates {
        let (d, best) = (distance(candidate), distance(choice));
        if d < best || (d == best && candidate == current) {
            choice = candidate;
        }
    }

    choice
}

/// Overrides a request to turn straight back on the current direction.
#[must_use]
pub fn guard_reversal(current: Direction, proposed: Direction) -> Direction {
    if proposed == current.opposite() {
        debug!("ignoring reversal from {current} to {proposed}");
        current
    } else {
        proposed
    }
}
