use std::{
    collections::{HashSet, VecDeque},
    fmt,
};

use color_eyre::{
    eyre::{ensure, eyre},
    Result,
};
use itertools::Itertools;
use log::debug;
use rand::{seq::IndexedRandom, Rng};

use crate::snakegame::{
    config::{BoardConfig, INITIAL_LENGTH},
    types::{Coord, Direction, Tile},
};

/// Random draws made before falling back to picking from the free cells.
const FOOD_PLACEMENT_ATTEMPTS: usize = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Alive,
    /// Hit a wall or its own body.
    Dead,
    /// Covers every cell, so there is nowhere left to put food.
    Filled,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub game_over: bool,
    pub score:     u64,
}

/// One game of snake. Mutated only through [`GameState::step`].
#[derive(Clone, Debug)]
pub struct GameState {
    config:        BoardConfig,
    snake:         VecDeque<Coord>,
    food:          Coord,
    direction:     Direction,
    score:         u64,
    status:        Status,
    ticks:         u64,
    score_history: Vec<u64>,
}

impl GameState {
    /// Starts a game with a three cell snake in the middle of the board,
    /// heading right, and food somewhere else.
    ///
    /// # Errors
    ///
    /// Fails if food cannot be placed on the board.
    pub fn new(config: BoardConfig, rng: &mut impl Rng) -> Result<Self> {
        let head = Coord::new(config.columns() / 2, config.rows() / 2);
        let snake: VecDeque<_> = (0..INITIAL_LENGTH)
            .map(|i| Coord::new(head.x - i, head.y))
            .collect();
        let food = sample_free_cell(&config, &snake, rng)?;

        Ok(Self::assemble(config, snake, Direction::Right, food))
    }

    /// Builds a game from a known position. `snake` is head first.
    ///
    /// # Errors
    ///
    /// Fails if the snake is empty, leaves the board or overlaps itself, or
    /// if the food is off the board or on the snake.
    pub fn from_parts(
        config: BoardConfig,
        snake: impl IntoIterator<Item = Coord>,
        direction: Direction,
        food: Coord,
    ) -> Result<Self> {
        let snake: VecDeque<_> = snake.into_iter().collect();

        ensure!(!snake.is_empty(), "a snake needs at least one cell");
        if let Some(cell) = snake.iter().find(|c| !config.contains(**c)) {
            return Err(eyre!("snake cell {cell} is off the board"));
        }
        ensure!(
            snake.iter().all_unique(),
            "snake overlaps itself: {}",
            snake.iter().join(" ")
        );
        ensure!(config.contains(food), "food {food} is off the board");
        ensure!(!snake.contains(&food), "food {food} is on the snake");

        Ok(Self::assemble(config, snake, direction, food))
    }

    fn assemble(
        config: BoardConfig,
        snake: VecDeque<Coord>,
        direction: Direction,
        food: Coord,
    ) -> Self {
        Self {
            config,
            snake,
            food,
            direction,
            score: 0,
            status: Status::Alive,
            ticks: 0,
            score_history: Vec::new(),
        }
    }

    /// Advances the snake one cell in `direction`.
    ///
    /// A move off the board or into the body ends the game. The fatal head
    /// stays on the snake so it can be inspected, and nothing else changes.
    /// The tail cell being vacated this tick does not count as body. Once the
    /// game is over, further calls change nothing.
    pub fn step(
        &mut self,
        direction: Direction,
        rng: &mut impl Rng,
    ) -> StepOutcome {
        if self.status != Status::Alive {
            return self.outcome();
        }

        self.direction = direction;
        let head = self.head().neighbour(direction);
        let vacating = self.snake.len() - 1;
        let collided = !self.config.contains(head)
            || self.snake.iter().take(vacating).any(|c| *c == head);

        self.snake.push_front(head);
        self.ticks += 1;

        if collided {
            debug!("moving {direction} into {head} ends the game");
            self.status = Status::Dead;
            return self.outcome();
        }

        if head == self.food {
            self.score += 1;
            if let Err(e) = self.place_food(rng) {
                debug!("{e}");
                self.status = Status::Filled;
            }
        } else {
            self.snake.pop_back();
        }

        self.score_history.push(self.score);
        self.outcome()
    }

    /// Moves the food to a uniformly random cell not covered by the snake.
    ///
    /// # Errors
    ///
    /// Fails if the snake covers the whole board. The food is left where it
    /// was in that case.
    pub fn place_food(&mut self, rng: &mut impl Rng) -> Result<Coord> {
        self.food = sample_free_cell(&self.config, &self.snake, rng)?;
        debug!("food placed at {}", self.food);
        Ok(self.food)
    }

    const fn outcome(&self) -> StepOutcome {
        StepOutcome {
            game_over: !matches!(self.status, Status::Alive),
            score:     self.score,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Every snake cell, head first.
    #[must_use]
    pub const fn snake(&self) -> &VecDeque<Coord> {
        &self.snake
    }

    #[must_use]
    pub fn head(&self) -> Coord {
        self.snake[0]
    }

    /// Snake cells after the head.
    pub fn body(&self) -> impl Iterator<Item = Coord> + '_ {
        self.snake.iter().skip(1).copied()
    }

    #[must_use]
    pub const fn food(&self) -> Coord {
        self.food
    }

    /// The direction of the most recent move.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, Status::Alive)
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Score after each surviving tick.
    #[must_use]
    pub fn score_history(&self) -> &[u64] {
        &self.score_history
    }

    /// Occupancy snapshot indexed as `tiles[x][y]`.
    #[must_use]
    pub fn tiles(&self) -> Vec<Vec<Tile>> {
        (0..self.config.columns())
            .map(|x| {
                (0..self.config.rows())
                    .map(|y| self.tile_at(Coord::new(x, y)))
                    .collect()
            })
            .collect()
    }

    fn tile_at(&self, coord: Coord) -> Tile {
        if self.snake.contains(&coord) {
            Tile::Snake
        } else if self.food == coord {
            Tile::Food
        } else {
            Tile::Empty
        }
    }
}

fn sample_free_cell(
    config: &BoardConfig,
    snake: &VecDeque<Coord>,
    rng: &mut impl Rng,
) -> Result<Coord> {
    let occupied: HashSet<_> = snake.iter().copied().collect();
    let area = usize::try_from(config.area()).unwrap_or(usize::MAX);
    ensure!(
        occupied.len() < area,
        "no free cell left for food on a {}x{} board",
        config.columns(),
        config.rows()
    );

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let candidate = Coord::new(
            rng.random_range(0..config.columns()),
            rng.random_range(0..config.rows()),
        );
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }

    // crowded board, draw from what is left instead
    let free = (0..config.rows())
        .cartesian_product(0..config.columns())
        .map(|(y, x)| Coord::new(x, y))
        .filter(|c| !occupied.contains(c))
        .collect_vec();

    free.choose(rng)
        .copied()
        .ok_or_else(|| eyre!("no free cell left for food"))
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head();
        for y in 0..self.config.rows() {
            for x in 0..self.config.columns() {
                let c = Coord::new(x, y);
                let glyph = if c == head {
                    '@'
                } else {
                    match self.tile_at(c) {
                        Tile::Snake => '#',
                        Tile::Food => '*',
                        Tile::Empty => '.',
                    }
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "Score: {}", self.score)
    }
}
