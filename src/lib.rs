//! ○×クイズ (Marubatsu): a true/false quiz.
//!
//! A [`QuestionBank`] is built once and lent to every [`QuizState`], which
//! draws its own copies of a few questions and tracks one playthrough.

pub mod bank;
pub mod error;
pub mod question;
pub mod state;

pub use bank::QuestionBank;
pub use error::{Error, Result};
pub use question::Question;
pub use state::{QuizState, ScoreSummary};
