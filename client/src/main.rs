mod config;
mod input;
mod offline;
mod ui;

use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use tictactoe_core::config::Validate;
use tictactoe_core::{log, logger};

use config::load_config;
use offline::{GameSettings, run_tictactoe_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a perfect-play computer")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Log search statistics and ignored moves.
    #[arg(long)]
    verbose: bool,
    /// Overrides `bot_delay_ms` from the config file.
    #[arg(long)]
    bot_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = load_config(args.config)?;
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.bot_delay_ms = bot_delay_ms;
        config.validate()?;
    }
    log!(
        "Computer reply delay {} ms, move scores {}",
        config.bot_delay_ms,
        if config.show_move_scores { "shown" } else { "hidden" }
    );

    let settings = GameSettings::from(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    run_tictactoe_game(&mut lines, &mut stdout, &settings).await?;

    Ok(())
}
