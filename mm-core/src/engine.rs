//! Game engine: the single place that advances a game.
//!
//! Two phases, `Playing` and `Won`. The secret is drawn once at game start
//! and is immutable for the game's duration; each guess is scored fresh and
//! discarded.

use crate::chance::ChanceMode;
use crate::code::{Code, CODE_LEN};
use crate::scoring::{score, Score};
use thiserror::Error;

/// Game phase. `Won` is terminal; no further guesses are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// State of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    secret: Code,
    phase: Phase,
    rounds_played: u32,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &Code {
        &self.secret
    }
}

/// Mutable transition context: chance mode + (future) per-game bookkeeping.
pub struct TurnContext {
    pub chance: ChanceMode,
}

impl TurnContext {
    pub fn new_entropy() -> Self {
        Self {
            chance: ChanceMode::Entropy,
        }
    }

    pub fn new_seeded(seed: u64) -> Self {
        Self {
            chance: ChanceMode::seeded(seed),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("game is already won; no further guesses accepted")]
    GameOver,
}

/// What one round produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub score: Score,
    pub won: bool,
    /// The secret code, revealed only on the winning round.
    pub revealed: Option<Code>,
}

/// Start a new game: draw the secret, phase `Playing`.
pub fn new_game(ctx: &mut TurnContext) -> GameState {
    GameState {
        secret: ctx.chance.draw_code(),
        phase: Phase::Playing,
        rounds_played: 0,
    }
}

/// Score one guess against the secret and advance the game.
///
/// All CODE_LEN pegs exact means the guess equals the secret: the game
/// transitions to `Won` and the report carries the revealed code.
pub fn apply_guess(state: &mut GameState, guess: Code) -> Result<RoundReport, ApplyError> {
    if state.phase == Phase::Won {
        return Err(ApplyError::GameOver);
    }

    let s = score(&state.secret, &guess);
    state.rounds_played += 1;

    let won = s.exact as usize == CODE_LEN;
    if won {
        state.phase = Phase::Won;
    }

    Ok(RoundReport {
        score: s,
        won,
        revealed: won.then_some(state.secret),
    })
}
