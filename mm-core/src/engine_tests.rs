use crate::code::{Code, CODE_LEN};
use crate::color::{Color, NUM_COLORS};
use crate::engine::{apply_guess, new_game, ApplyError, Phase, TurnContext};

/// A guess guaranteed to differ from `secret`: first peg shifted one ordinal.
fn wrong_guess(secret: &Code) -> Code {
    let mut guess = *secret;
    guess[0] = Color::from_index((secret[0].index() + 1) % NUM_COLORS);
    guess
}

#[test]
fn new_game_starts_playing() {
    let mut ctx = TurnContext::new_seeded(99);
    let state = new_game(&mut ctx);
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.rounds_played(), 0);
}

#[test]
fn same_seed_same_secret() {
    let mut ctx1 = TurnContext::new_seeded(555);
    let mut ctx2 = TurnContext::new_seeded(555);
    assert_eq!(new_game(&mut ctx1), new_game(&mut ctx2));
}

#[test]
fn wrong_guess_stays_playing_and_hides_secret() {
    let mut ctx = TurnContext::new_seeded(11);
    let mut state = new_game(&mut ctx);
    let guess = wrong_guess(state.secret());

    let report = apply_guess(&mut state, guess).unwrap();
    assert!(!report.won);
    assert!(report.revealed.is_none());
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.rounds_played(), 1);
}

#[test]
fn winning_guess_transitions_to_won_and_reveals() {
    let mut ctx = TurnContext::new_seeded(321);
    let mut state = new_game(&mut ctx);
    let secret = *state.secret();

    let report = apply_guess(&mut state, secret).unwrap();
    assert!(report.won);
    assert_eq!(report.score.exact as usize, CODE_LEN);
    assert_eq!(report.score.color_only, 0);
    assert_eq!(report.revealed, Some(secret));
    assert_eq!(state.phase(), Phase::Won);
}

#[test]
fn no_guesses_accepted_after_win() {
    let mut ctx = TurnContext::new_seeded(8);
    let mut state = new_game(&mut ctx);
    let secret = *state.secret();

    apply_guess(&mut state, secret).unwrap();
    let err = apply_guess(&mut state, secret).unwrap_err();
    assert!(matches!(err, ApplyError::GameOver));
    assert_eq!(state.rounds_played(), 1);
}

#[test]
fn rounds_accumulate_across_wrong_guesses() {
    let mut ctx = TurnContext::new_seeded(60);
    let mut state = new_game(&mut ctx);
    let guess = wrong_guess(state.secret());

    for round in 1..=5u32 {
        let report = apply_guess(&mut state, guess).unwrap();
        assert!(!report.won);
        assert_eq!(state.rounds_played(), round);
    }
}
