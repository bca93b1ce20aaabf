//! # Trivia Rules
//!
//! The rules crate - identifiers, error taxonomy, configuration and the curated question bank.
//! This crate holds no mutable engine state; the engines live in `trivia_core`.

pub mod bank;
pub mod config;
pub mod error;
pub mod ids;

pub use bank::*;
pub use config::*;
pub use error::*;
pub use ids::*;
