use crate::bank::QuestionBank;
use crate::error::{Error, Result};
use crate::question::Question;
use log::{debug, warn};
use rand::Rng;
use std::fmt;

/// One playthrough: the questions picked for it, which one is on screen, and
/// the tally so far.
///
/// `score` and `answered_count` only move when a question receives its first
/// answer. Navigating back to a question and answering it again changes the
/// recorded answer but never the tally.
#[derive(Debug, Clone)]
pub struct QuizState {
    selected: Vec<Question>,
    cursor: usize,
    score: usize,
    answered_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub answered: usize,
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your score: {}\nQuestions answered: {}",
            self.score, self.answered
        )
    }
}

impl QuizState {
    pub const DEFAULT_SIZE: usize = 3;

    /// Starts a session with `size` questions drawn from `bank`.
    pub fn new<R: Rng + ?Sized>(bank: &QuestionBank, size: usize, rng: &mut R) -> Result<Self> {
        debug!("[Setup] Drawing {} of {} questions.", size, bank.len());
        Self::from_questions(bank.sample(size, rng)?)
    }

    /// Starts a session over exactly these questions, in this order.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::InvalidArgument(
                "a quiz needs at least one question".to_owned(),
            ));
        }

        Ok(Self {
            selected: questions.iter().map(Question::fresh_copy).collect(),
            cursor: 0,
            score: 0,
            answered_count: 0,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.selected[self.cursor]
    }

    pub fn current_question_text(&self) -> &str {
        self.current_question().text()
    }

    pub fn is_current_answered(&self) -> bool {
        self.current_question().is_answered()
    }

    pub fn is_current_correct(&self) -> Result<bool> {
        self.current_question().is_correctly_answered()
    }

    /// Answers the question under the cursor and moves on to the next one.
    ///
    /// Returns whether `value` was correct. Only the first answer to a
    /// question counts towards the score; later answers are recorded but
    /// scored as nothing. The cursor stays put on the last question.
    pub fn answer(&mut self, value: bool) -> Result<bool> {
        if self.is_game_over() {
            warn!("[Quiz] Answer submitted after the game ended.");
            return Err(Error::InvalidState(
                "cannot answer questions when the game is over",
            ));
        }

        let cursor = self.cursor;
        let question = &mut self.selected[cursor];
        let first_answer = !question.is_answered();
        let correct = question.answer(value);

        if first_answer {
            self.answered_count += 1;
            if correct {
                self.score += 1;
            }
        }
        debug!(
            "[Quiz] Q{} answered {} ({}, first: {}); score {}/{}",
            cursor + 1,
            value,
            if correct { "correct" } else { "wrong" },
            first_answer,
            self.score,
            self.answered_count
        );

        self.advance();
        Ok(correct)
    }

    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 >= self.selected.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.answered_count >= self.selected.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.selected
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            score: self.score,
            answered: self.answered_count,
        }
    }
}
