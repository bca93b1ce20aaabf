//! # Trivia Core
//!
//! The engines of the trivia arcade. This crate builds on `trivia_rules` and owns all
//! mutable game state.
//!
//! ## Core Components
//!
//! - **quiz**: Quizzes, their ordered questions and per-player progress
//! - **generator**: Procedural question selection from the curated bank
//! - **score**: Cross-session scores, achievements, leaderboards and matchmaking
//! - **arcade**: The application root owning one of each engine
//!
//! ## Design Philosophy
//!
//! - **Owned registries**: No global state; the caller owns an `Arcade` and passes it by reference
//! - **Single writer**: Mutations take `&mut self`, so access is serialized by the borrow checker
//! - **Atomic failures**: Every check runs before any state is touched

pub mod arcade;
pub mod generator;
pub mod quiz;
pub mod score;

pub use arcade::*;
pub use generator::*;
pub use quiz::*;
pub use score::*;
