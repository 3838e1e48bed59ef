//! Bygaetter -- a Danish city guessing game engine speaking the BGI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! so any front end (terminal, GUI, test harness) can drive a game.

use std::io::{self, BufRead};

use bygaetter::engine::Engine;
use bygaetter::protocol::parser::{parse_command, Command};

/// Runs the main BGI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Bgi => {
                engine.handle_bgi(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewRound => {
                engine.handle_newround(&mut out);
            }
            Command::Guess { city } => {
                engine.handle_guess(city, &mut out);
            }
            Command::State => {
                engine.handle_state(&mut out);
            }
            Command::Stats => {
                engine.handle_stats(&mut out);
            }
            Command::Closest => {
                engine.handle_closest(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
