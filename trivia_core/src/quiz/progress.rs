//! Per-player progress through a quiz.

use serde::{Deserialize, Serialize};

/// Progress of one player through one quiz.
///
/// A single-state machine: `cursor` only ever moves forward, one step per answer, and
/// wraps over the question list through [`PlayerProgress::position`]. There is no
/// terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub cursor: u64,
    pub score: u32,
}

impl PlayerProgress {
    /// Create progress at cursor zero with no score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the current question in a quiz with `question_count` questions.
    pub fn position(&self, question_count: usize) -> Option<usize> {
        if question_count == 0 {
            return None;
        }
        Some((self.cursor % question_count as u64) as usize)
    }

    /// Record an answer and advance.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.cursor += 1;
    }

    /// Return to cursor zero with no score.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wraps() {
        let mut progress = PlayerProgress::new();
        assert_eq!(progress.position(3), Some(0));

        for _ in 0..4 {
            progress.record(false);
        }
        assert_eq!(progress.cursor, 4);
        assert_eq!(progress.position(3), Some(1));
        assert_eq!(progress.position(0), None);
    }

    #[test]
    fn test_record_and_reset() {
        let mut progress = PlayerProgress::new();
        progress.record(true);
        progress.record(false);
        progress.record(true);

        assert_eq!(progress.score, 2);
        assert_eq!(progress.cursor, 3);

        progress.reset();
        assert_eq!(progress, PlayerProgress::default());
    }
}
