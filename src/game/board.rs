//! Game board state machine
//!
//! Holds the answer, the submitted guesses and the text being typed, and
//! moves the game from `InProgress` to `Won` or `Lost`.

use super::answer::{AnswerWarning, validate_answer};
use super::status::GameStatus;
use crate::core::{
    Feedback, FeedbackRule, GuessInput, LetterFeedback, MAX_GUESSES, WORD_LENGTH, Word,
};
use crate::dictionary::WordValidator;
use std::fmt;

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// One of the six rows of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSlot<'a> {
    /// A recorded guess, with feedback
    Submitted(&'a GuessRecord),
    /// The live input row; never carries feedback
    InProgress(&'a str),
    Empty,
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooShort(usize),
    UnknownWord(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Not enough letters ({len}/{WORD_LENGTH})")
            }
            Self::UnknownWord(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

/// Result of pressing Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game is already over
    Ignored,
    /// Nothing was recorded and the input was left as is
    Rejected(RejectReason),
    Accepted {
        feedback: Feedback,
        status: GameStatus,
    },
}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct GameBoard<V> {
    validator: V,
    answer: String,
    answer_word: Option<Word>,
    rule: FeedbackRule,
    guesses: Vec<GuessRecord>,
    input: GuessInput,
    status: GameStatus,
    warnings: Vec<AnswerWarning>,
}

impl<V: WordValidator> GameBoard<V> {
    /// Start a game with the default positional feedback rule
    ///
    /// The answer is checked against `validator`; problems are logged and
    /// kept in [`GameBoard::warnings`] but the game proceeds regardless.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::dictionary::Dictionary;
    /// use wordle_board::game::{GameBoard, GameStatus};
    ///
    /// let mut board = GameBoard::new("TESTS", Dictionary::embedded());
    /// board.type_text("tests");
    /// board.submit();
    /// assert_eq!(board.status(), GameStatus::Won);
    /// ```
    pub fn new(answer: &str, validator: V) -> Self {
        Self::with_rule(answer, validator, FeedbackRule::default())
    }

    pub fn with_rule(answer: &str, validator: V, rule: FeedbackRule) -> Self {
        let mut board = Self {
            validator,
            answer: String::new(),
            answer_word: None,
            rule,
            guesses: Vec::with_capacity(MAX_GUESSES),
            input: GuessInput::new(),
            status: GameStatus::InProgress,
            warnings: Vec::new(),
        };
        board.reset(answer);
        board
    }

    /// Throw away the current game and start over with a new answer
    pub fn reset(&mut self, answer: &str) {
        self.warnings = validate_answer(answer, &self.validator);
        self.answer = answer.to_uppercase();
        self.answer_word = Word::new(answer).ok();
        self.guesses.clear();
        self.input.clear();
        self.status = GameStatus::InProgress;
        tracing::debug!(warnings = self.warnings.len(), "new game started");
    }

    /// Type text into the input; non-letters are dropped
    ///
    /// Returns false if the game is over and the input is disabled.
    pub fn type_text(&mut self, raw: &str) -> bool {
        if !self.input_enabled() {
            return false;
        }
        self.input.push_str(raw);
        true
    }

    /// Type a single key; returns false if nothing was added
    pub fn type_char(&mut self, c: char) -> bool {
        self.input_enabled() && self.input.push_char(c)
    }

    pub fn backspace(&mut self) -> bool {
        self.input_enabled() && self.input.pop().is_some()
    }

    /// Drop everything typed so far
    pub fn clear_input(&mut self) -> bool {
        if !self.input_enabled() {
            return false;
        }
        self.input.clear();
        true
    }

    /// Submit the current input as a guess
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_terminal() {
            return SubmitOutcome::Ignored;
        }

        let candidate = self.input.candidate();
        if candidate.len() < WORD_LENGTH {
            tracing::debug!(input = candidate, "guess rejected: too short");
            return SubmitOutcome::Rejected(RejectReason::TooShort(candidate.len()));
        }

        let word = match Word::new(candidate) {
            Ok(word) if self.validator.is_valid_word(word.text()) => word,
            _ => {
                tracing::debug!(input = candidate, "guess rejected: unknown word");
                return SubmitOutcome::Rejected(RejectReason::UnknownWord(candidate.to_string()));
            }
        };

        let feedback = self.score(&word);
        let won = word.text() == self.answer;
        self.guesses.push(GuessRecord { word, feedback });
        self.input.clear();

        self.status = if won {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if self.status.is_terminal() {
            tracing::info!(
                status = %self.status,
                guesses = self.guesses.len(),
                "game over"
            );
        }

        SubmitOutcome::Accepted {
            feedback,
            status: self.status,
        }
    }

    fn score(&self, guess: &Word) -> Feedback {
        match &self.answer_word {
            Some(answer) => Feedback::calculate(guess, answer, self.rule),
            None => Feedback::against_text(guess, &self.answer),
        }
    }
}

impl<V> GameBoard<V> {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Victory or defeat message, if the game has ended
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }

    /// The answer, uppercased
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        self.input.text()
    }

    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !self.status.is_terminal()
    }

    #[must_use]
    pub fn rule(&self) -> FeedbackRule {
        self.rule
    }

    /// Problems found with the answer when the game started
    #[must_use]
    pub fn warnings(&self) -> &[AnswerWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Always exactly six rows
    #[must_use]
    pub fn slots(&self) -> Vec<GuessSlot<'_>> {
        let mut slots: Vec<GuessSlot<'_>> =
            self.guesses.iter().map(GuessSlot::Submitted).collect();

        if self.input_enabled() && slots.len() < MAX_GUESSES {
            slots.push(GuessSlot::InProgress(self.input.text()));
        }

        slots.resize(MAX_GUESSES, GuessSlot::Empty);
        slots
    }

    /// Best feedback seen so far for each letter A-Z
    #[must_use]
    pub fn letter_states(&self) -> [Option<LetterFeedback>; 26] {
        let mut states = [None; 26];
        for record in &self.guesses {
            for (&letter, &feedback) in record.word.letters().iter().zip(record.feedback.letters())
            {
                let state = &mut states[usize::from(letter - b'A')];
                if state.is_none_or(|seen| feedback > seen) {
                    *state = Some(feedback);
                }
            }
        }
        states
    }

    /// Plain-text rendering of the board and any end-of-game message
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for slot in self.slots() {
            match slot {
                GuessSlot::Submitted(record) => {
                    out.push_str(record.word.text());
                    out.push(' ');
                    out.push_str(&record.feedback.to_emoji());
                }
                GuessSlot::InProgress(text) => {
                    let shown: String = text.chars().take(WORD_LENGTH).collect();
                    out.push_str(&format!("{shown:_<width$}", width = WORD_LENGTH));
                }
                GuessSlot::Empty => out.push_str(&"_".repeat(WORD_LENGTH)),
            }
            out.push('\n');
        }

        if let Some(message) = self.message() {
            out.push_str(message);
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, WORDS};
    use crate::game::{DEFEAT_MESSAGE, VICTORY_MESSAGE};
    use proptest::prelude::*;

    const WORD_OF_THE_DAY: &str = "TESTS";

    fn board() -> GameBoard<Dictionary> {
        GameBoard::new(WORD_OF_THE_DAY, Dictionary::embedded())
    }

    fn player_submits_guess<V: WordValidator>(board: &mut GameBoard<V>, guess: &str) -> SubmitOutcome {
        board.type_text(guess);
        board.submit()
    }

    #[test]
    fn victory_message_after_guessing_the_answer() {
        let mut board = board();
        player_submits_guess(&mut board, WORD_OF_THE_DAY);

        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.render_text().contains(VICTORY_MESSAGE));
        assert!(!board.render_text().contains(DEFEAT_MESSAGE));
    }

    #[test]
    fn no_end_of_game_message_before_any_guess() {
        let board = board();
        let text = board.render_text();
        assert!(!text.contains(VICTORY_MESSAGE));
        assert!(!text.contains(DEFEAT_MESSAGE));
        assert_eq!(board.message(), None);
    }

    #[test]
    fn defeat_only_after_sixth_wrong_guess() {
        let mut board = board();
        for (i, guess) in ["WRONG", "CRANE", "SLATE", "ABORT", "RIVER"].iter().enumerate() {
            player_submits_guess(&mut board, guess);
            assert_eq!(board.status(), GameStatus::InProgress, "after guess {}", i + 1);
            assert!(!board.render_text().contains(DEFEAT_MESSAGE));
        }

        player_submits_guess(&mut board, "TIGER");
        assert_eq!(board.status(), GameStatus::Lost);
        assert!(board.render_text().contains(DEFEAT_MESSAGE));
        assert_eq!(board.remaining_guesses(), 0);
    }

    #[test]
    fn winning_on_the_last_guess_is_a_win() {
        let mut board = board();
        for guess in ["WRONG", "CRANE", "SLATE", "ABORT", "RIVER"] {
            player_submits_guess(&mut board, guess);
        }
        player_submits_guess(&mut board, "tests");
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn lowercase_guess_wins() {
        let mut board = board();
        let outcome = player_submits_guess(&mut board, "tests");
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                feedback: Feedback::SOLVED,
                status: GameStatus::Won
            }
        );
    }

    #[test]
    fn over_length_guess_matches_on_first_five_letters() {
        let mut board = board();
        player_submits_guess(&mut board, "TESTSXYZ");
        assert_eq!(board.status(), GameStatus::Won);
        assert_eq!(board.guesses()[0].word.text(), "TESTS");
    }

    #[test]
    fn non_letters_are_filtered_while_typing() {
        let mut board = board();
        board.type_text("H33}T");
        assert_eq!(board.input(), "HT");
    }

    #[test]
    fn unknown_word_is_rejected_and_input_kept() {
        let mut board = board();
        let outcome = player_submits_guess(&mut board, "QWERT");

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(RejectReason::UnknownWord("QWERT".to_string()))
        );
        assert_eq!(board.status(), GameStatus::InProgress);
        assert!(board.guesses().is_empty());
        assert_eq!(board.input(), "QWERT");
    }

    #[test]
    fn short_guess_is_rejected() {
        let mut board = board();
        let outcome = player_submits_guess(&mut board, "TEST");
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::TooShort(4)));
        assert!(board.guesses().is_empty());
    }

    #[test]
    fn accepted_guess_clears_input() {
        let mut board = board();
        player_submits_guess(&mut board, "WRONG");
        assert_eq!(board.input(), "");
        assert_eq!(board.guesses().len(), 1);
    }

    #[test]
    fn no_input_accepted_after_game_over() {
        let mut board = board();
        player_submits_guess(&mut board, WORD_OF_THE_DAY);

        assert!(!board.input_enabled());
        assert!(!board.type_text("CRANE"));
        assert!(!board.type_char('C'));
        assert!(!board.backspace());
        assert_eq!(board.input(), "");
        assert_eq!(board.submit(), SubmitOutcome::Ignored);
        assert_eq!(board.guesses().len(), 1);
    }

    #[test]
    fn always_six_slots() {
        let mut board = board();
        assert_eq!(board.slots().len(), MAX_GUESSES);

        board.type_text("CRA");
        let slots = board.slots();
        assert_eq!(slots.len(), MAX_GUESSES);
        assert_eq!(slots[0], GuessSlot::InProgress("CRA"));
        assert_eq!(slots[1], GuessSlot::Empty);

        board.type_text("NE");
        board.submit();
        let slots = board.slots();
        assert_eq!(slots.len(), MAX_GUESSES);
        assert!(matches!(slots[0], GuessSlot::Submitted(_)));
        assert_eq!(slots[1], GuessSlot::InProgress(""));
    }

    #[test]
    fn finished_board_has_no_input_row() {
        let mut board = board();
        player_submits_guess(&mut board, WORD_OF_THE_DAY);
        let slots = board.slots();
        assert_eq!(slots.len(), MAX_GUESSES);
        assert!(slots[1..].iter().all(|s| *s == GuessSlot::Empty));
    }

    #[test]
    fn feedback_only_on_submitted_rows() {
        let mut board = board();
        board.type_text("STATE");
        assert!(!board.render_text().contains('🟩'));

        board.submit();
        let first_row = board.render_text().lines().next().unwrap().to_string();
        assert_eq!(first_row, "STATE 🟨🟨⬜🟩🟨");
    }

    #[test]
    fn malformed_answer_still_plays() {
        let mut board = GameBoard::new("TEST", Dictionary::embedded());
        assert!(board.warnings().contains(&AnswerWarning::WrongLength(4)));

        for guess in ["TESTS", "WRONG", "CRANE", "SLATE", "ABORT", "RIVER"] {
            player_submits_guess(&mut board, guess);
        }
        assert_eq!(board.status(), GameStatus::Lost);
    }

    #[test]
    fn lowercase_answer_is_stored_uppercase() {
        let mut board = GameBoard::new("tests", Dictionary::embedded());
        assert_eq!(board.warnings(), &[AnswerWarning::NotUppercase]);
        assert_eq!(board.answer(), "TESTS");
        player_submits_guess(&mut board, "TESTS");
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn closure_validator() {
        let mut board = GameBoard::new("TESTS", |w: &str| {
            ["tests", "wrong"].iter().any(|v| v.eq_ignore_ascii_case(w))
        });
        assert_eq!(
            player_submits_guess(&mut board, "CRANE"),
            SubmitOutcome::Rejected(RejectReason::UnknownWord("CRANE".to_string()))
        );
        let mut board = GameBoard::new("TESTS", |w: &str| w.eq_ignore_ascii_case("wrong"));
        assert!(board.warnings().contains(&AnswerWarning::NotInDictionary));
        player_submits_guess(&mut board, "WRONG");
        assert_eq!(board.guesses().len(), 1);
    }

    #[test]
    fn budgeted_rule_is_used() {
        let mut board =
            GameBoard::with_rule("FLOOR", Dictionary::embedded(), FeedbackRule::Budgeted);
        assert_eq!(board.rule(), FeedbackRule::Budgeted);
        player_submits_guess(&mut board, "ROBOT");
        assert_eq!(board.guesses()[0].feedback.to_string(), "YY-G-");
    }

    #[test]
    fn letter_states_keep_best_feedback() {
        let mut board = board();
        player_submits_guess(&mut board, "STATE");
        let states = board.letter_states();
        assert_eq!(states[usize::from(b'T' - b'A')], Some(LetterFeedback::Correct));
        assert_eq!(states[usize::from(b'S' - b'A')], Some(LetterFeedback::Almost));
        assert_eq!(states[usize::from(b'A' - b'A')], Some(LetterFeedback::Incorrect));
        assert_eq!(states[usize::from(b'Z' - b'A')], None);
    }

    #[test]
    fn reset_starts_a_new_game() {
        let mut board = board();
        player_submits_guess(&mut board, WORD_OF_THE_DAY);
        board.reset("CRANE");
        assert_eq!(board.status(), GameStatus::InProgress);
        assert!(board.guesses().is_empty());
        assert!(board.input_enabled());
        assert_eq!(board.answer(), "CRANE");
    }

    proptest! {
        #[test]
        fn guessing_the_answer_wins_in_one(answer in proptest::sample::select(WORDS)) {
            let mut board = GameBoard::new(&answer.to_uppercase(), Dictionary::embedded());
            player_submits_guess(&mut board, answer);
            prop_assert_eq!(board.status(), GameStatus::Won);
            prop_assert_eq!(board.guesses().len(), 1);
        }

        #[test]
        fn six_wrong_guesses_lose_only_at_the_end(
            words in proptest::sample::subsequence(WORDS, MAX_GUESSES + 1)
        ) {
            let mut board = GameBoard::new(&words[0].to_uppercase(), Dictionary::embedded());
            for (i, guess) in words[1..].iter().enumerate() {
                prop_assert_eq!(board.status(), GameStatus::InProgress);
                player_submits_guess(&mut board, guess);
                prop_assert_eq!(board.guesses().len(), i + 1);
            }
            prop_assert_eq!(board.status(), GameStatus::Lost);
        }

        #[test]
        fn unknown_words_change_nothing(raw in "[A-Z]{5}") {
            let dictionary = Dictionary::embedded();
            prop_assume!(!dictionary.is_valid_word(&raw));
            let mut board = GameBoard::new(WORD_OF_THE_DAY, dictionary);
            let outcome = player_submits_guess(&mut board, &raw);
            prop_assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
            prop_assert_eq!(board.status(), GameStatus::InProgress);
            prop_assert!(board.guesses().is_empty());
        }

        #[test]
        fn typed_input_keeps_only_letters(raw in "\\PC{0,12}") {
            let mut board = board();
            board.type_text(&raw);
            prop_assert!(board.input().chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
