use crate::code::{code_token, format_code, parse_code, ParseCodeError};
use crate::color::Color::{Blue, Green, Purple, Red, Yellow};

#[test]
fn parse_uppercase_token() {
    let code = parse_code("RBYG", false).unwrap();
    assert_eq!(code, [Red, Blue, Yellow, Green]);
}

#[test]
fn parse_trims_surrounding_whitespace() {
    let code = parse_code("  RBYP\n", false).unwrap();
    assert_eq!(code, [Red, Blue, Yellow, Purple]);
}

#[test]
fn lowercase_accepted_only_when_configured() {
    assert_eq!(
        parse_code("rbyg", true).unwrap(),
        parse_code("RBYG", true).unwrap()
    );
    assert_eq!(
        parse_code("rbyg", false).unwrap_err(),
        ParseCodeError::UnknownColor { ch: 'r', pos: 0 }
    );
}

#[test]
fn wrong_length_rejected() {
    assert_eq!(
        parse_code("RBY", false).unwrap_err(),
        ParseCodeError::WrongLength { got: 3 }
    );
    assert_eq!(
        parse_code("RBYGP", false).unwrap_err(),
        ParseCodeError::WrongLength { got: 5 }
    );
    assert_eq!(
        parse_code("", false).unwrap_err(),
        ParseCodeError::WrongLength { got: 0 }
    );
}

#[test]
fn unknown_color_reports_position() {
    assert_eq!(
        parse_code("RBXG", false).unwrap_err(),
        ParseCodeError::UnknownColor { ch: 'X', pos: 2 }
    );
}

#[test]
fn format_and_token_round_trip() {
    let code = [Red, Blue, Blue, Green];
    assert_eq!(format_code(&code), "Red Blue Blue Green");
    assert_eq!(code_token(&code), "RBBG");
    assert_eq!(parse_code(&code_token(&code), false).unwrap(), code);
}
