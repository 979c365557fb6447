use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The caller broke the call contract, e.g. asked for the correctness of an
    /// unanswered question or answered after the game was over.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("malformed bank entry #{index}: question text is blank")]
    MalformedEntry { index: usize },
    #[error("cannot read question bank")]
    BankRead(#[from] io::Error),
    #[error("cannot parse question bank: {0}")]
    BankParse(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
