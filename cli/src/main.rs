mod config;
mod play;
mod simulate;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::{GameState, Mode, log, logger};

use config::{CONFIG_FILE, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe", about = "N x N tic-tac-toe against a friend or a minimax opponent")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Board dimension, overrides the config file
    #[arg(long)]
    size: Option<usize>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    save_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive game on the terminal
    Play,
    /// Random opponent against the machine, prints the tally
    Simulate {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Human,
    Machine,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Human => Mode::HumanVsHuman,
            ModeArg::Machine => Mode::HumanVsMachine,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);
    let config = config_manager
        .get_config()?
        .with_overrides(args.size, args.mode.map(Mode::from))?;
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config.display());
    }

    log!(
        "Board {}x{}, {}",
        config.game.size,
        config.game.size,
        config.game.mode
    );

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let state = GameState::with_settings(&config.game)?;
            let final_state = play::run(state, io::stdin().lock(), &mut io::stdout())?;
            log!("Session ended: {}", final_state.status_line());
        }
        Command::Simulate { games, seed } => {
            let games = games.unwrap_or(config.simulation.games);
            let seed = seed.or(config.simulation.seed).unwrap_or_else(rand::random);
            if config.game.size > 3 {
                log!("Full-depth search on {0}x{0} may take a very long time", config.game.size);
            }
            log!("Simulating {} games with seed {}", games, seed);
            let report = simulate::run(config.game.size, games, seed)?;
            println!("{}", report);
        }
    }

    Ok(())
}
