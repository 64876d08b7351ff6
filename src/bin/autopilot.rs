use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use snake_autopilot::{
    gymnasium::{GameRecord, Gymnasium, GymnasiumOptions, Observer},
    snakegame::{config::BoardConfig, models::GameState},
    strategies::Controller,
};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lets a controller play snake on its own and reports how it scores.
#[derive(Parser, Debug)]
#[command(name = "autopilot", version)]
struct Args {
    /// Which controller drives the snake.
    #[arg(long, value_enum, default_value_t = Controller::Bfs)]
    controller: Controller,

    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: u64,

    /// Board width in pixels.
    #[arg(long, default_value_t = 640)]
    width: i64,

    /// Board height in pixels.
    #[arg(long, default_value_t = 480)]
    height: i64,

    /// Size of one cell in pixels.
    #[arg(long, default_value_t = 20)]
    block_size: i64,

    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds to wait between ticks.
    #[arg(long)]
    tick_delay_ms: Option<u64>,

    /// Give up on a game after this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Draw the board after every tick.
    #[arg(long)]
    render: bool,
}

/// Prints results as they come in, and the board too if asked.
struct Console {
    render: bool,
}

impl Observer for Console {
    fn on_tick(&mut self, game: u64, state: &GameState) {
        if self.render {
            println!("\nGame {game}, tick {}\n{state}", state.ticks());
        }
    }

    fn on_game_over(&mut self, record: &GameRecord) {
        println!("Game {}: Score = {}", record.game, record.score);
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running {NAME} {VERSION} in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running {NAME} {VERSION} in release mode");

    let args = Args::parse();

    let options = GymnasiumOptions {
        num_games:  args.games,
        board:      BoardConfig::new(args.width, args.height, args.block_size)?,
        tick_delay: args.tick_delay_ms.map(Duration::from_millis),
        max_ticks:  args.max_ticks,
    };

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("using {} with seed {seed}", args.controller);
    let mut rng = StdRng::seed_from_u64(seed);

    let strategy = args.controller.strategy();
    let summary = Gymnasium::new(options).run(
        strategy.as_ref(),
        &mut rng,
        &mut Console {
            render: args.render,
        },
    )?;

    println!("{summary}");
    if let Some(best) = summary.best() {
        println!("Best: game {} with {} points", best.game, best.score);
    }

    Ok(())
}
