//! Terminal frontend for Martian Dice.

mod commands;
mod display;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "martian-dice",
    about = "Martian Dice: abduct earthlings and outgun their tanks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the terminal
    Play {
        /// Number of players (asked interactively when omitted)
        #[arg(short, long)]
        players: Option<usize>,

        /// RNG seed for reproducible dice (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Score that wins the game
        #[arg(short, long, default_value = "25")]
        target: u32,
    },

    /// Print the rules and exit
    Rules,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            players,
            seed,
            target,
        } => commands::play::run(players, seed, target),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
