mod config;
mod driver;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::config::load_yaml_config;
use snake_engine::{HighScoreStore, RoundEngine, RoundRng, log, logger, warn};
use tokio::sync::mpsc;

use config::AppConfig;
use driver::DriverCommand;
use render::TextPresenter;

#[derive(Parser)]
#[command(name = "snake")]
struct Args {
    /// Path to the YAML config file; defaults to snake_config.yaml next
    /// to the binary.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed for every round; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let config = match load_yaml_config::<AppConfig>(&config_path)? {
        Some(config) => config,
        None => {
            log!(
                "No config at {}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    };

    let store = HighScoreStore::new(&config.high_score_path);
    let mut high_score = match store.load() {
        Ok(Some(score)) => score,
        Ok(None) => 0,
        Err(e) => {
            warn!("Failed to load high score, starting from 0: {}", e);
            0
        }
    };
    log!("High score: {}", high_score);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _stdin_task = input::spawn_stdin_reader(tx.clone());

    let quit_tx = tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = quit_tx.send(DriverCommand::Quit);
        }
    });

    let presenter = TextPresenter;
    loop {
        let rng = match args.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_random(),
        };
        let engine = RoundEngine::start(config.round_settings(), rng)?;

        let outcome = driver::run_round(engine, &mut rx, &presenter).await;

        if let Some(end) = outcome.end {
            if end.score > high_score {
                high_score = end.score;
                log!("New high score: {}", high_score);
                if let Err(e) = store.save(high_score) {
                    warn!("Failed to save high score: {}", e);
                }
            } else {
                log!("High score: {}", high_score);
            }
        }

        if outcome.quit {
            break;
        }
    }

    if let Err(e) = store.save(high_score) {
        warn!("Failed to save high score: {}", e);
    }

    Ok(())
}
