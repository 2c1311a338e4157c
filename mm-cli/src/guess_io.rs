//! Guess input glue: one line in, one parse attempt out.
//!
//! Kept separate from the loop in main so the read/parse behavior is
//! testable without a terminal.

use mm_core::{parse_code, Code, ParseCodeError};
use std::io::{self, BufRead};

/// Result of reading one guess line.
#[derive(Debug)]
pub enum GuessInput {
    Code(Code),
    /// Line read but not a valid guess; caller should report and re-prompt.
    Invalid(ParseCodeError),
    /// Input stream closed.
    Eof,
}

/// Read one line and try to parse it as a guess.
pub fn next_guess<R: BufRead>(
    input: &mut R,
    accept_lowercase: bool,
) -> io::Result<GuessInput> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Ok(GuessInput::Eof);
    }
    match parse_code(&line, accept_lowercase) {
        Ok(code) => Ok(GuessInput::Code(code)),
        Err(e) => Ok(GuessInput::Invalid(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::Color::{Blue, Green, Red, Yellow};
    use std::io::Cursor;

    #[test]
    fn reads_codes_until_eof() {
        let mut input = Cursor::new("RBYG\nrbyg\n");
        match next_guess(&mut input, true).unwrap() {
            GuessInput::Code(code) => assert_eq!(code, [Red, Blue, Yellow, Green]),
            other => panic!("expected code, got {:?}", other),
        }
        assert!(matches!(
            next_guess(&mut input, true).unwrap(),
            GuessInput::Code(_)
        ));
        assert!(matches!(
            next_guess(&mut input, true).unwrap(),
            GuessInput::Eof
        ));
    }

    #[test]
    fn invalid_line_is_reported_not_fatal() {
        let mut input = Cursor::new("RBX\nRBYG\n");
        assert!(matches!(
            next_guess(&mut input, true).unwrap(),
            GuessInput::Invalid(ParseCodeError::WrongLength { got: 3 })
        ));
        assert!(matches!(
            next_guess(&mut input, true).unwrap(),
            GuessInput::Code(_)
        ));
    }

    #[test]
    fn lowercase_rejected_when_case_sensitive() {
        let mut input = Cursor::new("rbyg\n");
        assert!(matches!(
            next_guess(&mut input, false).unwrap(),
            GuessInput::Invalid(ParseCodeError::UnknownColor { ch: 'r', pos: 0 })
        ));
    }
}
