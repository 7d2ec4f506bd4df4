//! Console front end for the duel.
//!
//! Renders the position, parses moves typed as `*5` or `/2`, and lets the
//! machine seat answer with minimax. All game logic stays behind the
//! session; this file only shuffles text.

use std::io::{self, BufRead, Write};

use numduel::core::{Move, Player};
use numduel::search::{MinimaxSearch, SearchConfig};
use numduel::session::Session;

const CEILING: u64 = 100;
const DEPTH_BUDGET: u8 = 8;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Who moves first?");
    println!("1 - you");
    println!("2 - the machine");
    print!("Your choice (1 or 2): ");
    io::stdout().flush()?;

    let first_mover = match lines.next() {
        Some(line) => {
            if line?.trim() == "2" {
                Player::Two
            } else {
                Player::One
            }
        }
        None => return Ok(()),
    };

    let search = MinimaxSearch::new(SearchConfig::default().with_depth_budget(DEPTH_BUDGET));
    let mut session = Session::new(CEILING, first_mover, search);

    while !session.is_over() {
        let state = session.state();
        println!();
        println!("Current number: {}", state.current_number());
        let chain: Vec<String> = state.history().iter().map(u64::to_string).collect();
        println!("Chain: {}", chain.join(" -> "));

        if session.machine_to_move() {
            println!("Machine is thinking...");
            match session.play_machine() {
                Some(mv) => {
                    println!("Machine plays {} -> {}", mv, session.state().current_number());
                }
                None => println!("Machine cannot move."),
            }
            continue;
        }

        println!("Available moves:");
        for mv in state.legal_moves() {
            if let Some(result) = mv.result(state.current_number()) {
                println!("  {mv} -> {result}");
            }
        }

        print!("Your move (e.g. *5 or /2): ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let mv: Move = match line.trim().parse() {
            Ok(mv) => mv,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        if let Err(err) = session.play_human(mv) {
            println!("{err}");
        }
    }

    if let Some(winner) = session.winner() {
        println!();
        println!("Game over! {winner} wins.");
    }

    Ok(())
}
