use std::{fmt, thread, time::Duration};

use color_eyre::Result;
use log::{debug, info, warn};
use rand::Rng;

use crate::{
    snakegame::{
        config::BoardConfig,
        models::{GameState, Status},
    },
    strategies::Strategy,
};

pub struct GymnasiumOptions {
    pub num_games:  u64,
    pub board:      BoardConfig,
    /// Pause between ticks. Pacing only, has no effect on outcomes.
    pub tick_delay: Option<Duration>,
    /// Ends a game that runs for this many ticks.
    pub max_ticks:  Option<u64>,
}

impl Default for GymnasiumOptions {
    fn default() -> Self {
        Self {
            num_games:  10,
            board:      BoardConfig::default(),
            tick_delay: None,
            max_ticks:  None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number.
    pub game:   u64,
    pub score:  u64,
    pub ticks:  u64,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub records: Vec<GameRecord>,
}

impl RunSummary {
    pub fn scores(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.records.iter().map(|record| (record.game, record.score))
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: u64 =
            self.records.iter().map(|record| record.score).sum();
        total as f64 / self.records.len() as f64
    }

    /// The highest scoring game, earliest first on ties.
    #[must_use]
    pub fn best(&self) -> Option<&GameRecord> {
        self.records
            .iter()
            .rev()
            .max_by_key(|record| record.score)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Average Score: {:.2}", self.mean_score())
    }
}

/// Hooks for whatever wants to watch a run, such as a renderer or a chart.
pub trait Observer {
    fn on_tick(&mut self, _game: u64, _state: &GameState) {}

    fn on_game_over(&mut self, _record: &GameRecord) {}
}

/// Watches nothing.
pub struct Unobserved;

impl Observer for Unobserved {}

/// Plays games back to back with one strategy and one source of randomness.
pub struct Gymnasium {
    options: GymnasiumOptions,
}

impl Gymnasium {
    #[must_use]
    pub const fn new(options: GymnasiumOptions) -> Self {
        Self { options }
    }

    /// # Errors
    ///
    /// Fails only if a game cannot be set up on the configured board.
    pub fn run(
        &self,
        strategy: &dyn Strategy,
        rng: &mut impl Rng,
        observer: &mut dyn Observer,
    ) -> Result<RunSummary> {
        info!(
            "running {} games on a {}x{} board",
            self.options.num_games,
            self.options.board.columns(),
            self.options.board.rows()
        );

        let mut summary = RunSummary::default();

        for game in 1..=self.options.num_games {
            let record = self.play(game, strategy, rng, observer)?;
            info!(
                "game {} finished {:?} after {} ticks with {} points",
                record.game, record.status, record.ticks, record.score
            );
            observer.on_game_over(&record);
            summary.records.push(record);
        }

        info!("average score {:.2}", summary.mean_score());

        Ok(summary)
    }

    fn play(
        &self,
        game: u64,
        strategy: &dyn Strategy,
        rng: &mut impl Rng,
        observer: &mut dyn Observer,
    ) -> Result<GameRecord> {
        let mut state = GameState::new(self.options.board, rng)?;
        observer.on_tick(game, &state);

        loop {
            if let Some(limit) = self.options.max_ticks {
                if state.ticks() >= limit {
                    warn!("game {game} hit the {limit} tick limit");
                    break;
                }
            }

            let direction = strategy.get_movement(&state);
            debug!(
                "tick {}: {} moves {direction}",
                state.ticks(),
                state.head()
            );

            let outcome = state.step(direction, rng);
            observer.on_tick(game, &state);

            if outcome.game_over {
                break;
            }

            if let Some(delay) = self.options.tick_delay {
                thread::sleep(delay);
            }
        }

        Ok(GameRecord {
            game,
            score: state.score(),
            ticks: state.ticks(),
            status: state.status(),
        })
    }
}
