//! Guess scoring.
//!
//! The two counts partition matched pegs: a peg counted as an exact match is
//! never also counted as a color-only match. Duplicate colors follow multiset
//! semantics (three Reds in the code against two in the guess contribute 2).

use crate::code::{Code, CODE_LEN};
use crate::color::NUM_COLORS;

/// Result of scoring one guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Pegs with the right color in the right position.
    pub exact: u8,
    /// Pegs with the right color in the wrong position, excluding exacts.
    pub color_only: u8,
}

/// Count positions where `guess` matches `code` exactly.
pub fn exact_matches(code: &Code, guess: &Code) -> u8 {
    code.iter()
        .zip(guess.iter())
        .filter(|(c, g)| c == g)
        .count() as u8
}

/// Count right-color-wrong-position pegs.
///
/// Multiset intersection of the two codes' color tallies, minus the exact
/// matches on the same pair. The intersection always contains the exact
/// matches as a subset, so the subtraction cannot underflow.
pub fn color_matches(code: &Code, guess: &Code) -> u8 {
    let code_tally = incidences(code);
    let guess_tally = incidences(guess);

    let mut right_colors = 0u8;
    for i in 0..NUM_COLORS {
        right_colors += code_tally[i].min(guess_tally[i]);
    }
    right_colors - exact_matches(code, guess)
}

/// Score a guess, computing both counts from the same (code, guess) pair.
pub fn score(code: &Code, guess: &Code) -> Score {
    let exact = exact_matches(code, guess);
    let color_only = color_matches(code, guess);
    debug_assert!((exact + color_only) as usize <= CODE_LEN);
    Score { exact, color_only }
}

/// Per-color occurrence counts, indexed by color ordinal.
fn incidences(code: &Code) -> [u8; NUM_COLORS] {
    let mut tally = [0u8; NUM_COLORS];
    for color in code {
        tally[color.index()] += 1;
    }
    tally
}
