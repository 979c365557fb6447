use crate::error::{Error, Result};

/// A true/false question. Bank entries are templates; a session works on
/// fresh copies and records its answers on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: bool,
    given: Option<bool>,
}

impl Question {
    pub fn new(text: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            text: text.into(),
            correct_answer,
            given: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    pub fn is_answered(&self) -> bool {
        self.given.is_some()
    }

    /// Records `value` and returns whether it was the correct answer.
    /// Answering again overwrites the previous answer.
    pub fn answer(&mut self, value: bool) -> bool {
        self.given = Some(value);
        value == self.correct_answer
    }

    pub fn given_answer(&self) -> Result<bool> {
        self.given
            .ok_or(Error::InvalidState("cannot get answer from unanswered question"))
    }

    pub fn is_correctly_answered(&self) -> Result<bool> {
        Ok(self.given_answer()? == self.correct_answer)
    }

    /// Same text and correct answer, no answer state.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.text.clone(), self.correct_answer)
    }
}
