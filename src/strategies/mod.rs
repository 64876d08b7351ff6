pub mod bfs;
pub mod greedy;

use std::fmt;

use clap::ValueEnum;

pub use self::{bfs::BreadthFirst, greedy::Greedy};

use crate::snakegame::{models::GameState, types::Direction};

pub trait Strategy {
    /// Picks the next move. A strategy that finds nothing better keeps the
    /// current direction, even if that walks the snake into a wall.
    fn get_movement(&self, game_state: &GameState) -> Direction;
}

/// The strategies a run can be driven by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Controller {
    /// Shortest path to the food, recomputed every tick.
    Bfs,
    /// Step to whichever neighbour is closest to the food.
    Greedy,
}

impl Controller {
    #[must_use]
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Self::Bfs => Box::new(BreadthFirst),
            Self::Greedy => Box::new(Greedy),
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bfs => "bfs",
                Self::Greedy => "greedy",
            }
        )
    }
}
