//! Code representation, formatting, and strict guess parsing.

use crate::color::Color;
use thiserror::Error;

/// Number of pegs in a code. Both the secret and every guess have this length.
pub const CODE_LEN: usize = 4;

/// An ordered sequence of pegs. Plain array; `Copy`, immutable by value.
pub type Code = [Color; CODE_LEN];

/// Render a code as space-separated color names, e.g. "Red Blue Blue Green".
pub fn format_code(code: &Code) -> String {
    let mut out = String::new();
    for (i, color) in code.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(color.name());
    }
    out
}

/// Render a code as its 4-initial token, e.g. "RBBG". Used in transcripts.
pub fn code_token(code: &Code) -> String {
    code.iter().map(|c| c.initial()).collect()
}

/// Guess parsing errors. Validation happens here, at the input boundary;
/// the scorer assumes well-formed codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCodeError {
    #[error("guess must be exactly {CODE_LEN} characters, got {got}")]
    WrongLength { got: usize },
    #[error("unrecognized color '{ch}' at position {pos} (expected one of R O Y G B P)")]
    UnknownColor { ch: char, pos: usize },
}

/// Parse a guess token like "RBYG" into a [`Code`].
///
/// Surrounding whitespace is trimmed. Lowercase initials are accepted only
/// when `accept_lowercase` is set; otherwise 'r' is an unknown color.
pub fn parse_code(input: &str, accept_lowercase: bool) -> Result<Code, ParseCodeError> {
    let token = input.trim();
    let n = token.chars().count();
    if n != CODE_LEN {
        return Err(ParseCodeError::WrongLength { got: n });
    }

    let mut code = [Color::Red; CODE_LEN];
    for (pos, ch) in token.chars().enumerate() {
        let lookup = if accept_lowercase {
            ch.to_ascii_uppercase()
        } else {
            ch
        };
        code[pos] =
            Color::from_initial(lookup).ok_or(ParseCodeError::UnknownColor { ch, pos })?;
    }
    Ok(code)
}
