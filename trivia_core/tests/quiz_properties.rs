//! Property tests: round-robin asking, cursor advance, and score monotonicity.

use proptest::prelude::*;
use trivia_core::QuizEngine;

fn quiz_with(count: usize) -> QuizEngine {
    let mut engine = QuizEngine::new();
    engine.create_quiz("props").unwrap();
    for i in 0..count {
        engine
            .add_question(
                "props",
                &format!("q{i}"),
                &format!("Question {i}"),
                ["0", "1", "2", "3"],
                i % 4,
            )
            .unwrap();
    }
    engine
}

fn answer_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (0usize..6).prop_map(|i| i.to_string()),
        "[a-z]{0,4}",
        Just("-1".to_string()),
    ]
}

proptest! {
    #[test]
    fn ask_visits_questions_round_robin(count in 1usize..8, tokens in prop::collection::vec(answer_token(), 0..40)) {
        let mut engine = quiz_with(count);

        for (k, token) in tokens.iter().enumerate() {
            let asked = engine.ask("props", "p1").unwrap().to_string();
            prop_assert_eq!(asked, format!("Question {}", k % count));
            engine.answer("props", "p1", token).unwrap();
        }
        let expected = format!("Question {}", tokens.len() % count);
        prop_assert_eq!(engine.ask("props", "p1").unwrap(), expected.as_str());
    }

    #[test]
    fn answer_always_advances_by_one(count in 1usize..8, tokens in prop::collection::vec(answer_token(), 1..40)) {
        let mut engine = quiz_with(count);

        for (k, token) in tokens.iter().enumerate() {
            let outcome = engine.answer("props", "p1", token).unwrap();
            prop_assert_eq!(outcome.cursor, k as u64 + 1);
        }
    }

    #[test]
    fn score_counts_correct_answers(count in 1usize..8, answers in 0usize..40) {
        let mut engine = quiz_with(count);
        let mut last = 0;

        for k in 0..answers {
            let correct_index = (k % count) % 4;
            engine.answer("props", "p1", &correct_index.to_string()).unwrap();
            let score = engine.score("props", "p1").unwrap();
            prop_assert_eq!(score, last + 1);
            last = score;
        }

        engine.reset("props", "p1").unwrap();
        prop_assert_eq!(engine.score("props", "p1").unwrap(), 0);
    }
}
