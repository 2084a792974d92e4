use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::agents::{Agent, AnnoyingAgent, AnnoyingAgentV2, RandomAgent, VerticalAgent};
use connect_four::config::AppConfig;
use connect_four::game::{GameOutcome, Player};
use connect_four::tournament::Tournament;

/// Run a tournament between the built-in Connect Four agents.
#[derive(Parser)]
#[command(name = "tourney", about = "Play Connect Four games between built-in agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tourney.toml")]
    config: PathBuf,

    /// Override number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed for reproducible pairings and games
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of every game
    #[arg(long)]
    boards: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(games) = cli.games {
        config.tournament.games = games;
    }
    if let Some(seed) = cli.seed {
        config.tournament.seed = Some(seed);
    }
    if cli.boards {
        config.tournament.show_boards = true;
    }
    config.validate()?;

    let pool: Vec<Box<dyn Agent>> = vec![
        Box::new(RandomAgent::new()),
        Box::new(AnnoyingAgent),
        Box::new(AnnoyingAgentV2),
        Box::new(VerticalAgent::new()),
    ];
    let mut tournament = Tournament::new(pool, &config.tournament);
    let names = tournament.agent_names();

    for _ in 0..config.tournament.games {
        let summary = tournament.play_game();
        let (a, b) = summary.pairing;
        match summary.outcome {
            GameOutcome::Winner(p) | GameOutcome::Forfeit(p) => {
                let winner = if p == Player::A { a } else { b };
                println!("{} vs {}: {} won!", names[a], names[b], names[winner]);
            }
            GameOutcome::Draw => println!("{} vs {}: draw!", names[a], names[b]),
        }
        if config.tournament.show_boards {
            println!("{}", summary.final_grid);
            println!("moves: {:?}", summary.moves);
        }
    }

    println!();
    println!("{:<12} {:>8} {:>10} {:>12}", "agent", "played", "win rate", "recent rate");
    for standing in tournament.standings() {
        println!(
            "{:<12} {:>8} {:>9.1}% {:>11.1}%",
            standing.name,
            standing.played,
            standing.win_rate() * 100.0,
            standing.recent_win_rate() * 100.0,
        );
    }

    Ok(())
}
