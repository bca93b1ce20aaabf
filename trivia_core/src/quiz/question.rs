//! Questions owned by a quiz.

use serde::{Deserialize, Serialize};
use trivia_rules::QuestionId;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    /// Check an answer token against the correct option.
    ///
    /// The token is read as an option index. Anything that does not parse as a
    /// non-negative integer is simply wrong.
    pub fn is_correct(&self, token: &str) -> bool {
        parse_option_index(token) == Some(self.correct_index)
    }

    /// Get the text of the correct option, if the index points at one.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// Parse an answer token into an option index.
pub fn parse_option_index(token: &str) -> Option<usize> {
    token.trim().parse::<usize>().ok()
}
