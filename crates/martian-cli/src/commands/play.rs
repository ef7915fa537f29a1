use std::io::{self, BufRead, Write};

use colored::Colorize;

use martian_core::{Command, Game, GameConfig, MartianError, TurnStep};

use crate::display;

pub fn run(players: Option<usize>, seed: Option<u64>, target: u32) -> Result<(), String> {
    display::print_rules();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let players = match players {
        Some(n) => n,
        None => ask_player_count(&mut reader)?,
    };
    let config = GameConfig::default()
        .with_players(players)
        .with_target_score(target)
        .with_seed(seed.unwrap_or_else(rand::random::<u64>));
    println!("Starting game with {} players.\n", config.players);

    let mut game = Game::new(config);

    loop {
        display::print_turn_header(&game);

        let summary = match play_turn(&mut game, &mut reader)? {
            TurnStep::TurnOver(summary) => summary,
            TurnStep::Quit => {
                println!();
                display::print_standings(&game);
                println!("Goodbye after {} finished turns!", game.turns_played());
                break;
            }
            TurnStep::Continue => continue,
        };

        if !game.round().can_make_move() {
            display::print_round(game.round());
            display::print_no_moves();
        }
        display::print_summary(&summary);
        display::print_standings(&game);

        println!("Press Enter to continue.");
        let more_input = read_line(&mut reader)?.is_some();

        if summary.won {
            display::print_winner(&summary, game.config().target_score);
            break;
        }
        if !more_input {
            break;
        }
        game.next_player();
    }

    Ok(())
}

/// Run the current player's turn until it is over or someone quits.
fn play_turn(game: &mut Game, reader: &mut impl BufRead) -> Result<TurnStep, String> {
    let mut step = game.start_turn().map_err(|e| e.to_string())?;

    while game.turn_in_progress() {
        display::print_round(game.round());
        display::print_prompt(game.round());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(input) = read_line(reader)? else {
            // End of input quits the game.
            return game.apply(Command::Quit).map_err(|e| e.to_string());
        };
        println!();

        match game.process(&input) {
            Ok(next) => step = next,
            Err(MartianError::BadCommand(_)) => display::print_usage(),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(step)
}

fn ask_player_count(reader: &mut impl BufRead) -> Result<usize, String> {
    print!("How many players?\n> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    match read_line(reader)?.and_then(|line| line.trim().parse::<usize>().ok()) {
        Some(n) if n > 0 => Ok(n),
        _ => {
            println!("{}", "??? Defaulting to 1 player.".yellow());
            Ok(1)
        }
    }
}

/// Read one line, or `None` at end of input.
fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        Err(e) => Err(e.to_string()),
    }
}
