mod config;
mod runner;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, TicTacToeSession};
use common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use runner::run_terminal_game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium or hard; anything else plays easy
    #[arg(long)]
    difficulty: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer answers
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(ref name) = self.difficulty {
            config.game.difficulty = Difficulty::from_name(name);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.game.thinking_delay_ms = delay_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(&args.config);
    let config = args.apply_to(config_manager.get_config()?);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config.display());
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let session = TicTacToeSession::create("local", &config.to_session_settings(), rng)?;
    run_terminal_game(session).await?;

    log!("Bye");
    Ok(())
}
