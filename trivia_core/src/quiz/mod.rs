//! Quiz engine - quizzes, their questions, and per-player progress.
//!
//! Each quiz asks its questions in insertion order and cycles forever. A player's
//! progress is created the first time the player touches the quiz and lives until the
//! quiz is removed.

mod progress;
mod question;

pub use progress::*;
pub use question::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trivia_rules::{ensure_identifier, PlayerId, QuestionId, QuizId, Result, TriviaError};

/// Result of a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Cursor after the answer was recorded.
    pub cursor: u64,
}

/// A quiz with its questions and player progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    questions: Vec<Question>,
    progress: HashMap<PlayerId, PlayerProgress>,
}

impl Quiz {
    fn new(id: QuizId) -> Self {
        Self {
            id,
            questions: Vec::new(),
            progress: HashMap::new(),
        }
    }

    /// Questions in asking order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a player's progress, if the player has touched this quiz.
    pub fn progress(&self, player_id: &str) -> Option<&PlayerProgress> {
        self.progress.get(player_id)
    }

    fn progress_mut(&mut self, player_id: &str) -> &mut PlayerProgress {
        self.progress.entry(PlayerId::from(player_id)).or_default()
    }

    /// The question a player with `progress` would be asked next.
    fn question_at(&self, progress: &PlayerProgress) -> Option<&Question> {
        progress
            .position(self.questions.len())
            .and_then(|idx| self.questions.get(idx))
    }
}

/// Registry of all quizzes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizEngine {
    quizzes: HashMap<QuizId, Quiz>,
}

impl QuizEngine {
    /// Create an empty quiz registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty quiz.
    pub fn create_quiz(&mut self, quiz_id: &str) -> Result<QuizId> {
        ensure_identifier("quiz id", quiz_id)?;
        if self.quizzes.contains_key(quiz_id) {
            return Err(TriviaError::QuizExists(QuizId::from(quiz_id)));
        }

        let id = QuizId::from(quiz_id);
        self.quizzes.insert(id.clone(), Quiz::new(id.clone()));
        tracing::debug!(quiz = %id, "Created quiz");
        Ok(id)
    }

    /// Create an empty quiz under a fresh random ID.
    pub fn create_anonymous_quiz(&mut self) -> QuizId {
        let mut id = QuizId::random();
        while self.quizzes.contains_key(&id) {
            id = QuizId::random();
        }
        self.quizzes.insert(id.clone(), Quiz::new(id.clone()));
        tracing::debug!(quiz = %id, "Created anonymous quiz");
        id
    }

    /// Remove a quiz along with its questions and all player progress.
    pub fn remove_quiz(&mut self, quiz_id: &str) -> Result<Quiz> {
        let quiz = self
            .quizzes
            .remove(quiz_id)
            .ok_or_else(|| TriviaError::QuizNotFound(QuizId::from(quiz_id)))?;
        tracing::debug!(
            quiz = %quiz.id,
            questions = quiz.questions.len(),
            players = quiz.progress.len(),
            "Removed quiz"
        );
        Ok(quiz)
    }

    /// Append a question to a quiz.
    ///
    /// Question IDs are not checked for uniqueness within the quiz. `remove_question`
    /// always takes the first match. `correct_index` is stored as given; an index past
    /// the last option can never be answered correctly.
    pub fn add_question<S: Into<String>>(
        &mut self,
        quiz_id: &str,
        question_id: &str,
        text: &str,
        options: impl IntoIterator<Item = S>,
        correct_index: usize,
    ) -> Result<QuestionId> {
        ensure_identifier("question id", question_id)?;
        let quiz = self.quiz_mut(quiz_id)?;

        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(TriviaError::InvalidArgument(
                "a question needs at least one option".into(),
            ));
        }

        let id = QuestionId::from(question_id);
        quiz.questions.push(Question {
            id: id.clone(),
            text: text.to_string(),
            options,
            correct_index,
        });
        tracing::debug!(quiz = %quiz.id, question = %id, "Added question");
        Ok(id)
    }

    /// Remove the first question with a matching ID, keeping the rest in order.
    pub fn remove_question(&mut self, quiz_id: &str, question_id: &str) -> Result<Question> {
        let quiz = self.quiz_mut(quiz_id)?;
        let idx = quiz
            .questions
            .iter()
            .position(|q| q.id.as_str() == question_id)
            .ok_or_else(|| TriviaError::QuestionNotFound {
                quiz: quiz.id.clone(),
                question: QuestionId::from(question_id),
            })?;

        let removed = quiz.questions.remove(idx);
        tracing::debug!(quiz = %quiz.id, question = %removed.id, "Removed question");
        Ok(removed)
    }

    /// Text of the question the player is currently on.
    pub fn ask(&mut self, quiz_id: &str, player_id: &str) -> Result<&str> {
        ensure_identifier("player id", player_id)?;
        let quiz = self.quiz_mut(quiz_id)?;
        if quiz.questions.is_empty() {
            return Err(TriviaError::EmptyQuiz(quiz.id.clone()));
        }

        let progress = *quiz.progress_mut(player_id);
        let question = quiz
            .question_at(&progress)
            .ok_or_else(|| TriviaError::EmptyQuiz(quiz.id.clone()))?;
        Ok(question.text.as_str())
    }

    /// Score an answer against the player's current question and advance the cursor.
    ///
    /// The question is derived from the cursor at call time, not from any earlier `ask`.
    /// Unparseable tokens count as wrong; the cursor advances either way.
    pub fn answer(&mut self, quiz_id: &str, player_id: &str, token: &str) -> Result<AnswerOutcome> {
        ensure_identifier("player id", player_id)?;
        let quiz = self.quiz_mut(quiz_id)?;
        if quiz.questions.is_empty() {
            return Err(TriviaError::EmptyQuiz(quiz.id.clone()));
        }

        let current = quiz.progress.get(player_id).copied().unwrap_or_default();
        let question = quiz
            .question_at(&current)
            .ok_or_else(|| TriviaError::EmptyQuiz(quiz.id.clone()))?;

        if parse_option_index(token).is_none() {
            tracing::warn!(quiz = %quiz.id, player = player_id, token, "Malformed answer token");
        }
        let correct = question.is_correct(token);
        let question_id = question.id.clone();

        let progress = quiz.progress_mut(player_id);
        progress.record(correct);
        let cursor = progress.cursor;

        tracing::debug!(
            quiz = %quiz.id,
            player = player_id,
            question = %question_id,
            correct,
            cursor,
            "Recorded answer"
        );
        Ok(AnswerOutcome { correct, cursor })
    }

    /// The player's score in this quiz.
    pub fn score(&mut self, quiz_id: &str, player_id: &str) -> Result<u32> {
        ensure_identifier("player id", player_id)?;
        let quiz = self.quiz_mut(quiz_id)?;
        Ok(quiz.progress_mut(player_id).score)
    }

    /// Reset the player's score and cursor to zero.
    pub fn reset(&mut self, quiz_id: &str, player_id: &str) -> Result<()> {
        ensure_identifier("player id", player_id)?;
        let quiz = self.quiz_mut(quiz_id)?;
        quiz.progress_mut(player_id).reset();
        tracing::debug!(quiz = %quiz.id, player = player_id, "Reset progress");
        Ok(())
    }

    /// The question `ask` would present, without recording any progress.
    pub fn current_question(&self, quiz_id: &str, player_id: &str) -> Result<&Question> {
        let quiz = self.quiz(quiz_id)?;
        let progress = quiz.progress(player_id).copied().unwrap_or_default();
        quiz.question_at(&progress)
            .ok_or_else(|| TriviaError::EmptyQuiz(quiz.id.clone()))
    }

    /// Get a quiz by ID.
    pub fn quiz(&self, quiz_id: &str) -> Result<&Quiz> {
        self.quizzes
            .get(quiz_id)
            .ok_or_else(|| TriviaError::QuizNotFound(QuizId::from(quiz_id)))
    }

    fn quiz_mut(&mut self, quiz_id: &str) -> Result<&mut Quiz> {
        self.quizzes
            .get_mut(quiz_id)
            .ok_or_else(|| TriviaError::QuizNotFound(QuizId::from(quiz_id)))
    }

    /// Get the number of questions in a quiz.
    pub fn question_count(&self, quiz_id: &str) -> Result<usize> {
        Ok(self.quiz(quiz_id)?.questions.len())
    }

    /// Check if a quiz exists.
    pub fn contains_quiz(&self, quiz_id: &str) -> bool {
        self.quizzes.contains_key(quiz_id)
    }

    /// All quiz IDs, sorted.
    pub fn quiz_ids(&self) -> Vec<&QuizId> {
        let mut ids: Vec<_> = self.quizzes.keys().collect();
        ids.sort();
        ids
    }

    /// Players with recorded progress in a quiz, sorted.
    pub fn players(&self, quiz_id: &str) -> Result<Vec<&PlayerId>> {
        let mut players: Vec<_> = self.quiz(quiz_id)?.progress.keys().collect();
        players.sort();
        Ok(players)
    }

    /// Get the number of quizzes.
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    /// Check if no quizzes exist.
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}
