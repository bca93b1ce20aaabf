//! Error taxonomy for every engine operation.
//!
//! Every failure maps onto one of three kinds: something required was missing, something
//! being created already exists, or an argument was unusable. A failed operation leaves all
//! registries untouched.

use thiserror::Error;

use crate::ids::{BoardId, PlayerId, QuestionId, QuizId};

/// Coarse classification of a [`TriviaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArgument,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Quiz not found: {0}")]
    QuizNotFound(QuizId),

    #[error("Question {question} not found in quiz {quiz}")]
    QuestionNotFound { quiz: QuizId, question: QuestionId },

    /// The quiz exists but has nothing to ask.
    #[error("Quiz {0} has no questions")]
    EmptyQuiz(QuizId),

    #[error("Leaderboard not found: {0}")]
    BoardNotFound(BoardId),

    #[error("Player {player} is not on leaderboard {board}")]
    NotOnBoard { board: BoardId, player: PlayerId },

    #[error("Quiz already exists: {0}")]
    QuizExists(QuizId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TriviaError {
    /// Get the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::QuizNotFound(_)
            | TriviaError::QuestionNotFound { .. }
            | TriviaError::EmptyQuiz(_)
            | TriviaError::BoardNotFound(_)
            | TriviaError::NotOnBoard { .. } => ErrorKind::NotFound,
            TriviaError::QuizExists(_) => ErrorKind::AlreadyExists,
            TriviaError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;

/// Errors raised while loading a [`crate::TriviaConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while loading a custom [`crate::QuestionBank`].
#[derive(Error, Debug)]
pub enum BankError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category '{0}' must contain at least one entry")]
    EmptyCategory(String),

    #[error("Invalid bank entry in '{category}': {reason}")]
    InvalidEntry { category: String, reason: String },
}
