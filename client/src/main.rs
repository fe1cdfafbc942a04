mod config;
mod game_loop;

use std::io;

use clap::{Parser, ValueEnum};
use connectn_engine::config::Validate;
use connectn_engine::four_in_a_row::{ComputerStrategy, FourInARow, PlayerColor, SessionRng};
use connectn_engine::{log, logger};

use config::{Config, FirstPlayerMode, get_config_manager};
use game_loop::{GameEnd, Turn, run_game};

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Red,
    Blue,
}

impl From<ColorArg> for PlayerColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Red => PlayerColor::Red,
            ColorArg::Blue => PlayerColor::Blue,
        }
    }
}

#[derive(Parser)]
#[command(name = "connectn", about = "Four in a row on a 6x6 board against the computer")]
struct Args {
    /// Config file; defaults to connectn_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,
    /// Seed for this game only; not saved
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    computer_color: Option<ColorArg>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    random_bot: bool,
    #[arg(long)]
    computer_first: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("ConnectN".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = get_config_manager(args.config.as_deref());
    let mut config: Config = manager.get_config()?;

    if let Some(color) = args.computer_color {
        let color = PlayerColor::from(color);
        config.engine.computer_color = color;
        config.engine.player_color = color.opponent();
    }
    if let Some(name) = args.name {
        config.player_name = name;
    }
    if args.random_bot {
        config.engine.strategy = ComputerStrategy::Random;
    }
    if args.computer_first {
        config.first_player = FirstPlayerMode::Computer;
    }
    config.validate()?;

    let mut engine_settings = config.engine.clone();
    if args.seed.is_some() {
        engine_settings.seed = args.seed;
    }
    let mut game = FourInARow::from_settings(engine_settings)?;

    let first = match config.first_player {
        FirstPlayerMode::Player => Turn::Player,
        FirstPlayerMode::Computer => Turn::Computer,
        FirstPlayerMode::Random => {
            if SessionRng::new(game.seed()).random_bool() {
                Turn::Player
            } else {
                Turn::Computer
            }
        }
    };

    log!(
        "Starting game: {} as {:?}, computer as {:?} ({:?}), seed {}",
        config.player_name,
        game.player_color(),
        game.computer_color(),
        game.settings().strategy,
        game.seed()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let end = run_game(&mut game, first, &config.player_name, &mut input, &mut output)?;

    if let GameEnd::Finished(outcome) = end {
        config.scoreboard.record(outcome, game.player_color());
        println!(
            "Games: {}  Wins: {}  Losses: {}  Ties: {}",
            config.scoreboard.games_played(),
            config.scoreboard.wins,
            config.scoreboard.losses,
            config.scoreboard.ties
        );
    }

    manager.set_config(&config)?;
    log!("Saved settings for {}", config.player_name);

    Ok(())
}
