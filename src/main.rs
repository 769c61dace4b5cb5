//! Othello GUI and self-play driver
//!
//! Plays Othello against the engine or another player in a window, or runs
//! engine-versus-engine games on the terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello::ui::OthelloApp;
use othello::{AIEngine, AppConfig, Game};

/// Othello against a fixed-depth minimax engine
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "othello.toml")]
    config: PathBuf,

    /// Override the engine search depth
    #[arg(short, long)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the game window (default)
    Play,

    /// Let the engine play itself and print the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
        config.validate()?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_gui(config),
        Command::Selfplay { games } => run_selfplay(&config, games),
    }
}

fn run_gui(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(depth = config.search.depth, mode = ?config.game.mode, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, &config)))),
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

/// Engine against itself, same settings on both sides
fn run_selfplay(config: &AppConfig, games: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = AIEngine::with_config(config.search.depth, config.search.strategy);

    for n in 1..=games {
        let mut game = Game::new(config.game.first_side.pick());

        while let Some(side) = game.side_to_move() {
            match engine.get_move(game.board(), side) {
                Some(mv) => {
                    game.play(mv.pos.x as i32, mv.pos.y as i32)?;
                }
                None => game.pass()?,
            }
        }

        let score = game.score();
        let headline = game.result().map_or("Game Over.".to_string(), |r| r.to_string());
        println!("{}", game.board());
        println!(
            "Game {n}: {headline} (White {}, Black {}, {} moves)",
            score.white,
            score.black,
            game.moves_played()
        );
    }

    Ok(())
}
