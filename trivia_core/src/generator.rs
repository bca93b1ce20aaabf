//! Procedural question generation from the curated bank.
//!
//! A topic resolves to a category by exact name, the category is filtered by difficulty,
//! and one entry is drawn uniformly at random. The draw is reproducible when the
//! generator is seeded.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use trivia_rules::{
    Category, Difficulty, QuestionBank, QuestionId, Result, TriviaConfig, TriviaError,
    MAX_DIFFICULTY, MIN_DIFFICULTY,
};

use crate::quiz::QuizEngine;

/// What a generate call appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub id: QuestionId,
    /// Category the question was drawn from, after any fallback.
    pub category: Category,
    pub difficulty: Difficulty,
}

/// Draws questions from a [`QuestionBank`] into quizzes.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    bank: QuestionBank,
    rng: ChaCha8Rng,
    min_difficulty: u8,
    max_difficulty: u8,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(QuestionBank::builtin(), &TriviaConfig::default())
    }
}

impl QuestionGenerator {
    /// Create a generator over `bank`, seeded from the config or from entropy.
    pub fn new(bank: QuestionBank, config: &TriviaConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            bank,
            rng,
            min_difficulty: config.min_difficulty,
            max_difficulty: config.max_difficulty,
        }
    }

    /// Built-in bank with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            bank: QuestionBank::builtin(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            min_difficulty: MIN_DIFFICULTY,
            max_difficulty: MAX_DIFFICULTY,
        }
    }

    /// Get the bank questions are drawn from.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Append one bank question to `quiz_id`.
    ///
    /// Unknown or missing topics use `general`. If the category has nothing at the
    /// requested difficulty, the whole `general` category is used instead.
    pub fn generate(
        &mut self,
        quizzes: &mut QuizEngine,
        quiz_id: &str,
        topic: Option<&str>,
        difficulty: i32,
    ) -> Result<GeneratedQuestion> {
        let count = quizzes.question_count(quiz_id)?;
        let difficulty =
            Difficulty::clamped_within(difficulty, self.min_difficulty, self.max_difficulty);

        let requested = match topic.map(|t| (t, Category::from_name(t))) {
            Some((_, Some(category))) => category,
            Some((name, None)) => {
                tracing::warn!(topic = name, "Unknown topic, using general");
                Category::General
            }
            None => Category::General,
        };

        let pool = self.bank.eligible(requested, difficulty);
        if pool.is_fallback(requested) {
            tracing::warn!(
                category = %requested,
                %difficulty,
                "No eligible entries, falling back to general"
            );
        }

        let source = pool.source;
        let entry = pool
            .entries
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| {
                TriviaError::InvalidArgument("question bank has no general entries".into())
            })?;

        let question_id = format!("gen-{}-{}-{}", requested, difficulty, count);
        let id = quizzes.add_question(
            quiz_id,
            &question_id,
            &entry.text,
            entry.options.iter().map(String::as_str),
            entry.correct_index,
        )?;

        tracing::debug!(
            quiz = quiz_id,
            question = %id,
            category = %source,
            %difficulty,
            "Generated question"
        );
        Ok(GeneratedQuestion {
            id,
            category: source,
            difficulty,
        })
    }
}
