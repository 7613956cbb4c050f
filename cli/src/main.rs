mod command;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::{YamlConfigSerializer, load_configuration};
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::{GameController, SessionRng, log};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// YAML settings record; defaults are used when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also log search diagnostics
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Engine".to_string())
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    let content = match &args.settings {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    let (_, config) = load_configuration(&YamlConfigSerializer::new(), content.as_deref())?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let controller = GameController::new(config, rng);
    runner::run(controller).await?;

    Ok(())
}
