//! BGI response formatting.
//!
//! Plain-text report lines for guess results and queries, and the JSON
//! `state` snapshot a front end renders from. The snapshot never carries
//! the secret city while the round is in progress.

use serde::Serialize;

use crate::session::{GameSession, GameStats, Guess, MAX_GUESSES};

/// Formats one scored guess as a `result` line.
///
/// Distance is reported to one decimal, direction as the Danish name,
/// matching the original game's display.
pub fn result_line(guess: &Guess) -> String {
    format!(
        "result {} {:.1} {}",
        guess.city,
        guess.distance_km,
        guess.direction.danish()
    )
}

/// Formats the `guesses <n>/<max>` progress line.
pub fn progress_line(session: &GameSession) -> String {
    format!("guesses {}/{}", session.guesses().len(), MAX_GUESSES)
}

/// Formats the cumulative tally as a `stats` line.
pub fn stats_line(stats: &GameStats) -> String {
    format!("stats wins {} rounds {}", stats.rounds_won, stats.rounds_played)
}

/// Formats the closest-guess query response.
pub fn closest_line(session: Option<&GameSession>) -> String {
    match session.and_then(GameSession::closest_distance) {
        Some(km) => format!("closest {:.1}", km),
        None => "closest none".to_string(),
    }
}

/// Serializable snapshot of the session and tally.
#[derive(Serialize)]
struct StateReport<'a> {
    over: bool,
    won: bool,
    guess_count: usize,
    max_guesses: usize,
    closest_km: Option<f64>,
    /// The secret city's name; null until the round is over.
    secret: Option<&'a str>,
    guesses: &'a [Guess],
    stats: &'a GameStats,
}

/// Serializes the current session and tally as one JSON line.
///
/// With no round in progress, reports an empty, not-over session.
pub fn state_json(session: Option<&GameSession>, stats: &GameStats) -> String {
    let report = match session {
        Some(s) => StateReport {
            over: s.is_over(),
            won: s.won(),
            guess_count: s.guesses().len(),
            max_guesses: MAX_GUESSES,
            closest_km: s.closest_distance(),
            secret: s.is_over().then(|| s.secret().name()),
            guesses: s.guesses(),
            stats,
        },
        None => StateReport {
            over: false,
            won: false,
            guess_count: 0,
            max_guesses: MAX_GUESSES,
            closest_km: None,
            secret: None,
            guesses: &[],
            stats,
        },
    };
    serde_json::to_string(&report).unwrap()
}
