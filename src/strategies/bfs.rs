use std::collections::{HashMap, HashSet, VecDeque};

use log::{trace, warn};

use super::Strategy;
use crate::snakegame::{
    models::GameState,
    types::{Coord, Direction},
};

/// Breadth-first search from the head to the food, one step at a time.
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn get_movement(&self, game_state: &GameState) -> Direction {
        let current = game_state.direction();

        let Some(path) = shortest_path(game_state) else {
            warn!(
                "no path from {} to food at {}, carrying on {current}",
                game_state.head(),
                game_state.food()
            );
            return current;
        };

        // only empty when the head is already on the food
        path.first().copied().unwrap_or(current)
    }
}

/// Finds a shortest route from the head to the food that stays on the board
/// and off the body. Neighbours are expanded in [`Direction::iter`] order,
/// which settles ties between routes of equal length.
///
/// Returns `None` when the body walls the food off.
#[must_use]
pub fn shortest_path(game_state: &GameState) -> Option<Vec<Direction>> {
    let board = game_state.config();
    let start = game_state.head();
    let goal = game_state.food();
    let blocked: HashSet<_> = game_state.body().collect();

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut came_from: HashMap<Coord, (Coord, Direction)> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            trace!("reached {goal} after visiting {} cells", visited.len());
            return Some(trace_back(&came_from, start, goal));
        }

        for direction in Direction::iter().copied() {
            let next = current.neighbour(direction);
            if board.contains(next)
                && !blocked.contains(&next)
                && visited.insert(next)
            {
                came_from.insert(next, (current, direction));
                queue.push_back(next);
            }
        }
    }

    trace!("search exhausted after visiting {} cells", visited.len());
    None
}

fn trace_back(
    came_from: &HashMap<Coord, (Coord, Direction)>,
    start: Coord,
    goal: Coord,
) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut cell = goal;
    while cell != start {
        let Some(&(previous, direction)) = came_from.get(&cell) else {
            break;
        };
        path.push(direction);
        cell = previous;
    }
    path.reverse();
    path
}
