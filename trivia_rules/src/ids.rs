//! Identifier newtypes shared by every registry.
//!
//! All identifiers are opaque owned strings. Players and boards come from collaborating
//! subsystems, so nothing here inspects their contents beyond rejecting blanks.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use uuid::Uuid;

use crate::error::{Result, TriviaError};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw identifier, rejecting empty or blank values.
            pub fn parse(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                ensure_identifier($kind, &value)?;
                Ok(Self(value))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Globally unique quiz identifier.
    QuizId,
    "quiz id"
);

string_id!(
    /// Question identifier, scoped to one quiz. Uniqueness is not enforced.
    QuestionId,
    "question id"
);

string_id!(
    /// Opaque player identifier from the player subsystem.
    PlayerId,
    "player id"
);

string_id!(
    /// Leaderboard identifier.
    BoardId,
    "board id"
);

string_id!(
    /// Achievement identifier.
    AchievementId,
    "achievement id"
);

impl QuizId {
    /// Create a fresh random quiz ID.
    pub fn random() -> Self {
        Self(format!("quiz-{}", Uuid::new_v4()))
    }
}

/// Reject empty or whitespace-only identifiers.
pub fn ensure_identifier(kind: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TriviaError::InvalidArgument(format!("{kind} must not be empty")));
    }
    Ok(())
}
