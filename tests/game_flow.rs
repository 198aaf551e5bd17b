// Integration tests for the full game pipeline:
// word list loading, bank construction, session rules, and the play loop.

use std::io::Cursor;
use wordle_game::commands::{PlayOutcome, run_play};
use wordle_game::core::LetterStatus;
use wordle_game::session::{GameSession, GameStatus, GuessError};
use wordle_game::words::{WORD_LENGTH, WordBank, WordSource, loader};

#[test]
fn scripted_game_against_single_word_bank() {
    // A one-word bank makes the random secret deterministic
    let bank = WordBank::new(vec!["APPLE".to_string()]).unwrap();

    let input = "grape\napple\n";
    let outcome = run_play(&bank, 6, Cursor::new(input)).unwrap();

    // GRAPE is not in this bank, so it costs nothing; APPLE wins on the
    // first consumed attempt
    assert_eq!(outcome, PlayOutcome::Won(1));
}

#[test]
fn quitting_mid_game_abandons() {
    let bank = WordBank::new(vec!["APPLE".to_string()]).unwrap();

    let outcome = run_play(&bank, 6, Cursor::new("quit\n")).unwrap();

    assert_eq!(outcome, PlayOutcome::Abandoned);
}

#[test]
fn session_loss_with_valid_wrong_guesses() {
    let bank = WordBank::new(vec!["APPLE".to_string(), "GRAPE".to_string()]).unwrap();
    let mut session = GameSession::with_attempts(&bank, 1);

    // Whichever word was picked, guess the other one
    let wrong = if session.secret_word() == "APPLE" {
        "GRAPE"
    } else {
        "APPLE"
    };
    session.submit_guess(wrong).unwrap();

    assert!(!session.is_solved());
    assert!(session.should_end_game());
    assert_eq!(session.status(), GameStatus::Lost);
}

#[test]
fn embedded_dictionary_end_to_end() {
    let bank = WordBank::embedded();
    let mut session = GameSession::new(&bank);

    let secret = session.secret_word().to_string();
    assert_eq!(secret.chars().count(), WORD_LENGTH);
    assert!(secret.chars().all(|c| c.is_ascii_uppercase()));
    assert!(bank.is_valid_word(&secret));

    let guess = session.submit_guess(&secret).unwrap();
    assert!(
        guess
            .letters()
            .iter()
            .all(|eval| eval.status() == LetterStatus::Correct)
    );
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn custom_word_file_to_finished_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_game_custom_bank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "lemon").unwrap();
        writeln!(file, "toolong").unwrap();
        writeln!(file, "abc").unwrap();
    }

    let words = loader::load_from_file(&path).unwrap();
    assert_eq!(words, ["APPLE", "GRAPE", "LEMON"]);

    let bank = WordBank::new(words).unwrap();
    let mut session = GameSession::new(&bank);

    // At most three guesses are needed to hit the random secret
    for word in ["APPLE", "GRAPE", "LEMON"] {
        session.submit_guess(word).unwrap();
        if session.is_solved() {
            break;
        }
    }

    assert!(session.is_solved());
    assert_eq!(session.status(), GameStatus::Won);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn submission_errors_surface_through_the_bank() {
    let bank = WordBank::new(vec!["APPLE".to_string()]).unwrap();
    let mut session = GameSession::with_attempts(&bank, 1);

    assert_eq!(
        session.submit_guess("AB").unwrap_err(),
        GuessError::InvalidLength {
            expected: 5,
            actual: 2
        }
    );
    assert_eq!(
        session.submit_guess("ZZZZZ").unwrap_err(),
        GuessError::NotAWord("ZZZZZ".to_string())
    );

    session.submit_guess("APPLE").unwrap();
    assert_eq!(
        session.submit_guess("APPLE").unwrap_err(),
        GuessError::AttemptsExhausted { max_attempts: 1 }
    );
}

#[test]
fn bank_membership_is_case_insensitive_in_play() {
    let bank = WordBank::new(vec!["apple".to_string()]).unwrap();

    // Lowercase input, lowercase bank entry; both normalize to uppercase
    let outcome = run_play(&bank, 6, Cursor::new("apple\n")).unwrap();

    assert_eq!(outcome, PlayOutcome::Won(1));
}
