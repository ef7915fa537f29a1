//! Everything the game prints.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use martian_core::{Command, CreatureKind, Game, Round, RoundOutcome, TurnSummary};

pub fn print_rules() {
    println!("{}", "Martian Dice".bold());
    println!("============");
    println!("Abduct humans, cows and chicken! You get 1 point for each kind you abduct.");
    println!("Bonus points for abducting all three in one turn.");
    println!("You can only capture each kind once in a turn.");
    println!("You must end your turn with more death rays than enemy tanks.");
    println!("Type Q to quit at any time.");
    println!(
        "Abbreviations: T = Enemy Tank, D = Death Ray, C = Cow, I = Chicken, H = Human."
    );
    println!();
}

pub fn print_turn_header(game: &Game) {
    let seat = game.current_player();
    let score = game.players()[seat].score;
    println!(
        "\n{}",
        format!("==== Player {}'s turn (total score: {score}) ====", seat + 1).bold()
    );
}

/// Tallies for the round so far, then the dice.
pub fn print_round(round: &Round) {
    let tanks = round.kept_tanks();
    let rays = round.kept_deathrays();
    let rays_label = if rays < tanks {
        format!("{rays} (WARNING)").yellow().to_string()
    } else {
        rays.to_string()
    };
    println!(
        "Tanks: {tanks} | Death Rays: {rays_label} | Humans: {} | Cows: {} | Chickens: {}",
        round.kept(CreatureKind::Human),
        round.kept(CreatureKind::Cow),
        round.kept(CreatureKind::Chicken),
    );
    println!("{}\n", round.pool());
}

pub fn print_prompt(round: &Round) {
    print!("Keep/abduct: ");
    for (kind, unlocked) in round.keepable() {
        print!(" {} ({unlocked}) ", Command::Keep(kind).token());
    }
    print!(" {} (end turn)\n> ", Command::EndTurn.token());
}

pub fn print_usage() {
    println!("{}", "Did not understand.".yellow());
    println!("(Q to quit)");
    println!();
}

pub fn print_no_moves() {
    println!("\nCan't make any more moves. End of round.\n");
}

pub fn print_summary(summary: &TurnSummary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
    println!();
}

/// Turn result as printed lines. Dice counts are reported apart from the
/// points, which go by kinds abducted.
fn summary_lines(summary: &TurnSummary) -> Vec<String> {
    let mut lines = Vec::new();
    match summary.outcome {
        RoundOutcome::Defeated { tanks, deathrays } => {
            lines.push(
                format!(
                    "The {tanks} tanks easily shot down your {deathrays} death rays! No points for you."
                )
                .red()
                .to_string(),
            );
        }
        RoundOutcome::Scored(score) => {
            if score.score > 0 {
                lines.push(format!(
                    "Abducted this turn: {} humans, {} cows, {} chickens.",
                    summary.humans, summary.cows, summary.chickens
                ));
                lines.push(format!(
                    "That is {} of 3 kinds, 1 point per kind.",
                    score.score
                ));
            } else {
                lines.push("You failed to abduct any creatures! 0 points.".to_string());
            }
            if score.bonus > 0 {
                lines.push(format!(
                    "Got {} bonus points for abducting all kinds!",
                    score.bonus
                ));
            }
            lines.push(format!(
                "You scored {} points! Adding to your total, now {}",
                summary.points, summary.total
            ));
        }
    }
    lines
}

pub fn print_standings(game: &Game) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Score"]);
    for (seat, player) in game.players().iter().enumerate() {
        table.add_row(vec![format!("Player {}", seat + 1), player.score.to_string()]);
    }
    println!("{table}");
    println!();
}

pub fn print_winner(summary: &TurnSummary, target: u32) {
    println!(
        "{}",
        format!(
            "Player {} reached score {target} and won!",
            summary.player + 1
        )
        .green()
        .bold()
    );
}
