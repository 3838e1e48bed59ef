//! Round state machine and cumulative statistics.
//!
//! A `GameSession` owns one round: the secret city, the ordered guess
//! history, and the in-progress/over state. Sessions are mutated only
//! through `submit_guess`; a new round is a new session. `GameStats`
//! outlives sessions and tallies wins across rounds.

use rand::Rng;
use serde::Serialize;

use crate::catalog::{City, ALL_CITIES, CITY_COUNT};
use crate::geo::{self, CompassDirection};

/// The maximum number of guesses in one round.
pub const MAX_GUESSES: usize = 10;

/// One scored guess: distance to the secret and the direction from the
/// guessed city toward it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guess {
    pub city: City,
    pub distance_km: f64,
    pub direction: CompassDirection,
}

/// Whether the round is still accepting guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Over,
}

/// Win/round tally for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub rounds_played: u32,
    pub rounds_won: u32,
}

/// One round of the guessing game.
pub struct GameSession {
    secret: City,
    guesses: Vec<Guess>,
    state: RoundState,
}

impl GameSession {
    /// Starts a round with a uniformly random secret city.
    pub fn start<R: Rng>(rng: &mut R) -> GameSession {
        GameSession::with_secret(ALL_CITIES[rng.gen_range(0..CITY_COUNT)])
    }

    /// Starts a round with a fixed secret city.
    ///
    /// Used for scripted rounds and tests; `start` delegates here.
    pub fn with_secret(secret: City) -> GameSession {
        #[cfg(feature = "trace-secret")]
        eprintln!("trace-secret: the secret city is {}", secret);

        GameSession {
            secret,
            guesses: Vec::new(),
            state: RoundState::InProgress,
        }
    }

    /// Submits one guess and returns the scored result.
    ///
    /// A no-op returning `None` once the round is over. The direction
    /// points from the guessed city toward the secret. The round ends on
    /// a correct guess or when the tenth guess lands; `stats` is updated
    /// exactly once, at that transition.
    pub fn submit_guess(&mut self, city: City, stats: &mut GameStats) -> Option<&Guess> {
        if self.state == RoundState::Over {
            return None;
        }

        let distance_km = geo::distance_km(self.secret.coordinate(), city.coordinate());
        let direction = geo::bearing_label(city.coordinate(), self.secret.coordinate());
        self.guesses.push(Guess {
            city,
            distance_km,
            direction,
        });

        let correct = city == self.secret;
        if correct || self.guesses.len() >= MAX_GUESSES {
            self.state = RoundState::Over;
            stats.rounds_played += 1;
            if correct {
                stats.rounds_won += 1;
            }
        }

        self.guesses.last()
    }

    /// The smallest guess distance so far, or `None` before the first guess.
    pub fn closest_distance(&self) -> Option<f64> {
        self.guesses
            .iter()
            .map(|g| g.distance_km)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// The secret city. Only meaningful to reveal once the round is over.
    pub fn secret(&self) -> City {
        self.secret
    }

    /// The ordered guess history.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// True once the round has ended.
    pub fn is_over(&self) -> bool {
        self.state == RoundState::Over
    }

    /// True if the round ended with a correct guess.
    pub fn won(&self) -> bool {
        self.guesses.last().is_some_and(|g| g.city == self.secret)
    }
}
