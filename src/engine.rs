//! Engine state management.
//!
//! Holds the current session, the cumulative tally, engine options, and
//! the RNG that picks secret cities. One `handle_*` method per protocol
//! command, each writing its report lines to a generic writer.

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::catalog::City;
use crate::protocol::report;
use crate::session::{GameSession, GameStats};
use crate::silhouette;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    session: Option<GameSession>,
    stats: GameStats,
    options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no round in progress.
    pub fn new() -> Self {
        Engine {
            session: None,
            stats: GameStats::default(),
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine with a deterministic RNG, for reproducible rounds.
    pub fn with_seed(seed: u64) -> Self {
        Engine {
            session: None,
            stats: GameStats::default(),
            options: HashMap::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The current session, if a round has been started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The cumulative win/round tally.
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Sets an engine option. `Seed` reseeds the RNG immediately.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        if name == "Seed" {
            match value.as_deref().and_then(|v| v.parse::<u64>().ok()) {
                Some(seed) => self.rng = SmallRng::seed_from_u64(seed),
                None => eprintln!("setoption Seed: expected an integer value"),
            }
        }
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Whether the skyline clue is emitted on round start (option `Clue`,
    /// default true).
    fn clue_enabled(&self) -> bool {
        self.options.get("Clue").map(String::as_str) != Some("false")
    }

    /// Handles the BGI handshake: writes id, options, protocol_version,
    /// and bgiok.
    pub fn handle_bgi<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name bygaetter").unwrap();
        writeln!(out, "id author bygaetter").unwrap();
        writeln!(out, "option name Seed type spin default 0 min 0 max 4294967295").unwrap();
        writeln!(out, "option name Clue type check default true").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "bgiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles `newround`: replaces any existing session with a fresh one
    /// and emits the round header and skyline clue.
    ///
    /// An abandoned in-progress round does not touch the tally; only
    /// terminal rounds count.
    pub fn handle_newround<W: Write>(&mut self, out: &mut W) {
        let session = GameSession::start(&mut self.rng);
        writeln!(out, "roundstart").unwrap();
        if self.clue_enabled() {
            for row in silhouette::skyline(session.secret()) {
                writeln!(out, "clue {}", row).unwrap();
            }
        }
        writeln!(out, "{}", report::progress_line(&session)).unwrap();
        out.flush().unwrap();
        self.session = Some(session);
    }

    /// Handles `guess <city>`: scores the guess and, on the terminal
    /// guess, reports the outcome, the revealed secret, the closest
    /// distance, and the updated tally.
    ///
    /// A guess with no round in progress or after the round is over is a
    /// guarded no-op; nothing is written to stdout.
    pub fn handle_guess<W: Write>(&mut self, city: City, out: &mut W) {
        let session = match &mut self.session {
            Some(s) => s,
            None => {
                eprintln!("guess: no round in progress");
                return;
            }
        };

        let guess = match session.submit_guess(city, &mut self.stats) {
            Some(g) => *g,
            None => {
                eprintln!("guess: the round is over; start a new round");
                return;
            }
        };

        writeln!(out, "{}", report::result_line(&guess)).unwrap();
        writeln!(out, "{}", report::progress_line(session)).unwrap();

        if session.is_over() {
            let outcome = if session.won() { "won" } else { "lost" };
            writeln!(out, "gameover {}", outcome).unwrap();
            writeln!(out, "secret {}", session.secret()).unwrap();
            writeln!(out, "{}", report::closest_line(Some(session))).unwrap();
            writeln!(out, "{}", report::stats_line(&self.stats)).unwrap();
        }
        out.flush().unwrap();
    }

    /// Handles `state`: one JSON snapshot line.
    pub fn handle_state<W: Write>(&self, out: &mut W) {
        writeln!(out, "state {}", report::state_json(self.session(), &self.stats)).unwrap();
        out.flush().unwrap();
    }

    /// Handles `stats`.
    pub fn handle_stats<W: Write>(&self, out: &mut W) {
        writeln!(out, "{}", report::stats_line(&self.stats)).unwrap();
        out.flush().unwrap();
    }

    /// Handles `closest`.
    pub fn handle_closest<W: Write>(&self, out: &mut W) {
        writeln!(out, "{}", report::closest_line(self.session())).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{City, ALL_CITIES};

    fn output_of(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn new_engine_has_no_session() {
        let engine = Engine::new();
        assert!(engine.session().is_none());
        assert_eq!(engine.stats(), GameStats::default());
    }

    #[test]
    fn handle_bgi_outputs_handshake() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_bgi(&mut output);

        let output_str = output_of(output);
        assert!(output_str.contains("id name bygaetter"));
        assert!(output_str.contains("option name Seed"));
        assert!(output_str.contains("protocol_version 1"));
        assert!(output_str.contains("bgiok"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_isready(&mut output);
        assert_eq!(output_of(output).trim(), "readyok");
    }

    #[test]
    fn newround_emits_clue_and_progress() {
        let mut engine = Engine::with_seed(1);
        let mut output = Vec::new();
        engine.handle_newround(&mut output);

        let output_str = output_of(output);
        assert!(output_str.starts_with("roundstart\n"));
        assert!(output_str.contains("clue "));
        assert!(output_str.contains("guesses 0/10"));
        assert!(engine.session().is_some());
    }

    #[test]
    fn clue_option_suppresses_skyline() {
        let mut engine = Engine::with_seed(1);
        engine.set_option("Clue".to_string(), Some("false".to_string()));

        let mut output = Vec::new();
        engine.handle_newround(&mut output);
        assert!(!output_of(output).contains("clue "));
    }

    #[test]
    fn guess_without_round_writes_nothing() {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_guess(City::Aarhus, &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn guessing_every_city_wins_exactly_once() {
        let mut engine = Engine::with_seed(99);
        let mut output = Vec::new();
        engine.handle_newround(&mut output);

        // One of the five must be the secret; post-win guesses are no-ops.
        for city in ALL_CITIES {
            engine.handle_guess(city, &mut output);
        }

        let output_str = output_of(output);
        assert_eq!(output_str.matches("gameover won").count(), 1);
        assert_eq!(output_str.matches("secret ").count(), 1);
        assert!(output_str.contains("stats wins 1 rounds 1"));
        assert!(engine.session().unwrap().is_over());
        assert_eq!(engine.stats(), GameStats { rounds_played: 1, rounds_won: 1 });
    }

    #[test]
    fn result_line_reports_distance_and_direction() {
        let mut engine = Engine::with_seed(3);
        let mut output = Vec::new();
        engine.handle_newround(&mut output);
        output.clear();

        engine.handle_guess(City::Odense, &mut output);
        let output_str = output_of(output);
        assert!(output_str.contains("result Odense "), "{}", output_str);
        assert!(output_str.contains("guesses 1/10"), "{}", output_str);
    }

    #[test]
    fn state_snapshot_hides_secret_until_over() {
        let mut engine = Engine::with_seed(5);
        let mut output = Vec::new();
        engine.handle_newround(&mut output);
        output.clear();

        engine.handle_state(&mut output);
        let output_str = output_of(output);
        assert!(output_str.starts_with("state {"));
        assert!(output_str.contains("\"secret\":null"));
    }

    #[test]
    fn abandoned_round_does_not_count() {
        let mut engine = Engine::with_seed(8);
        let mut output = Vec::new();
        engine.handle_newround(&mut output);
        engine.handle_guess(City::Odense, &mut output);

        // The guess may have won; only a terminal round touches the tally.
        let finished = engine.session().unwrap().is_over();
        engine.handle_newround(&mut output);

        let expected = if finished {
            GameStats { rounds_played: 1, rounds_won: 1 }
        } else {
            GameStats::default()
        };
        assert_eq!(engine.stats(), expected);
        assert!(engine.session().unwrap().guesses().is_empty());
    }

    #[test]
    fn seed_option_reseeds_rng() {
        let mut a = Engine::new();
        let mut b = Engine::new();
        a.set_option("Seed".to_string(), Some("42".to_string()));
        b.set_option("Seed".to_string(), Some("42".to_string()));

        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        a.handle_newround(&mut out_a);
        b.handle_newround(&mut out_b);
        assert_eq!(
            a.session().unwrap().secret(),
            b.session().unwrap().secret()
        );
    }

    #[test]
    fn closest_without_round_is_none() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_closest(&mut output);
        assert_eq!(output_of(output).trim(), "closest none");
    }
}
