//! Scripted demo session.
//!
//! Usage: `trivia_demo [config.toml]`. Set `RUST_LOG` to adjust log output.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use trivia_core::Arcade;
use trivia_rules::TriviaConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trivia_core=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TriviaConfig::load(Path::new(&path))?,
        None => TriviaConfig::default(),
    };
    let mut arcade = Arcade::new(config);

    let quiz = arcade.quizzes.create_quiz("demo")?;
    for topic in ["math", "science", "history", "programming"] {
        arcade.generate(quiz.as_str(), Some(topic), 3)?;
    }

    for player in ["ada", "grace", "linus"] {
        for _ in 0..4 {
            let question = arcade.quizzes.current_question(quiz.as_str(), player)?.clone();
            println!("[{player}] {}", question.text);
            for (i, option) in question.options.iter().enumerate() {
                println!("    {i}) {option}");
            }

            // Each player guesses a fixed option so the run is reproducible.
            let guess = player.len() % question.options.len();
            let outcome = arcade.quizzes.answer(quiz.as_str(), player, &guess.to_string())?;
            println!("    -> {guess}: {}", if outcome.correct { "correct" } else { "wrong" });
        }

        let points = arcade.quizzes.score(quiz.as_str(), player)?;
        arcade.scores.update(player, i64::from(points) * 100)?;
        if points == 4 {
            arcade.scores.add_achievement(player, "perfect-round")?;
        }
    }

    println!("\nLeaderboard:");
    for (position, standing) in arcade.scores.standings(None)?.iter().enumerate() {
        println!("  {}. {} ({})", position + 1, standing.player, standing.score);
    }

    Ok(())
}
