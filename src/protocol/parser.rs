//! BGI command parser.
//!
//! Parses incoming BGI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::catalog::City;

/// A parsed front-end-to-engine BGI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the BGI protocol handshake.
    Bgi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a fresh round with a new random secret city.
    NewRound,

    /// Submit one guess: `guess <city>`.
    Guess { city: City },

    /// Report the session snapshot as one JSON line.
    State,

    /// Report the cumulative win/round tally.
    Stats,

    /// Report the closest guess distance so far.
    Closest,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
/// An unknown or empty guess is rejected here, so invalid selections never
/// reach the session.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "bgi" => Some(Command::Bgi),
        "isready" => Some(Command::IsReady),
        "newround" => Some(Command::NewRound),
        "state" => Some(Command::State),
        "stats" => Some(Command::Stats),
        "closest" => Some(Command::Closest),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "guess" => parse_guess(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `guess <city>` against the catalog.
fn parse_guess(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed guess: expected 'guess <city>'");
        return None;
    }
    let name = tokens[1..].join(" ");
    match City::from_name(&name) {
        Some(city) => Some(Command::Guess { city }),
        None => {
            eprintln!("unknown city: '{}'", name);
            None
        }
    }
}
