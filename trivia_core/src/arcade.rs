//! The application root: one quiz engine, one score engine, one question generator.

use trivia_rules::{QuestionBank, Result, TriviaConfig};

use crate::generator::{GeneratedQuestion, QuestionGenerator};
use crate::quiz::QuizEngine;
use crate::score::ScoreEngine;

/// Owns every registry. Callers hold one `Arcade` and pass it by reference.
#[derive(Debug, Clone)]
pub struct Arcade {
    config: TriviaConfig,
    pub quizzes: QuizEngine,
    pub scores: ScoreEngine,
    pub generator: QuestionGenerator,
}

impl Default for Arcade {
    fn default() -> Self {
        Self::new(TriviaConfig::default())
    }
}

impl Arcade {
    /// Create an arcade over the built-in question bank.
    pub fn new(config: TriviaConfig) -> Self {
        Self::with_bank(config, QuestionBank::builtin())
    }

    /// Create an arcade over a custom question bank.
    pub fn with_bank(config: TriviaConfig, bank: QuestionBank) -> Self {
        tracing::info!(
            window = config.matchmaking_window,
            board = %config.default_board,
            seeded = config.rng_seed.is_some(),
            entries = bank.len(),
            "Arcade ready"
        );
        Self {
            quizzes: QuizEngine::new(),
            scores: ScoreEngine::new(&config),
            generator: QuestionGenerator::new(bank, &config),
            config,
        }
    }

    /// Get the configuration this arcade was built with.
    pub fn config(&self) -> &TriviaConfig {
        &self.config
    }

    /// Append a procedurally chosen question to one of this arcade's quizzes.
    pub fn generate(
        &mut self,
        quiz_id: &str,
        topic: Option<&str>,
        difficulty: i32,
    ) -> Result<GeneratedQuestion> {
        self.generator
            .generate(&mut self.quizzes, quiz_id, topic, difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_rules::Category;

    #[test]
    fn test_arcade_wires_config() {
        let config = TriviaConfig {
            matchmaking_window: 5,
            default_board: "weekly".into(),
            ..TriviaConfig::default().with_seed(1)
        };
        let mut arcade = Arcade::new(config);

        assert_eq!(arcade.scores.matchmaking_window(), 5);
        assert_eq!(arcade.scores.default_board().as_str(), "weekly");

        arcade.scores.update("p1", 1).unwrap();
        arcade.scores.leaderboard(None).unwrap();
        assert!(arcade.scores.board("weekly").is_some());
    }

    #[test]
    fn test_generate_through_arcade() {
        let mut arcade = Arcade::new(TriviaConfig::default().with_seed(99));
        arcade.quizzes.create_quiz("daily").unwrap();

        let generated = arcade.generate("daily", Some("history"), 2).unwrap();
        assert_eq!(generated.category, Category::History);
        assert_eq!(arcade.quizzes.question_count("daily").unwrap(), 1);
    }

    #[test]
    fn test_custom_bank() {
        let bank = QuestionBank::from_json(
            r#"{"general": [{"text": "Only question", "options": ["a","b","c","d"], "correct_index": 3, "min_difficulty": 1}]}"#,
        )
        .unwrap();
        let mut arcade = Arcade::with_bank(TriviaConfig::default().with_seed(0), bank);
        arcade.quizzes.create_quiz("custom").unwrap();

        arcade.generate("custom", Some("math"), 3).unwrap();
        assert_eq!(arcade.quizzes.ask("custom", "p1").unwrap(), "Only question");
        assert!(arcade.quizzes.answer("custom", "p1", "3").unwrap().correct);
    }
}
