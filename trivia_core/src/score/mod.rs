//! Score engine - cross-session scores, achievements, leaderboards and matchmaking.
//!
//! Player records are upserted: any operation naming an unknown player creates a
//! zero-score record for it, reads included. Use [`ScoreEngine::peek`] for a read
//! that never creates.

mod leaderboard;

pub use leaderboard::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use trivia_rules::{
    ensure_identifier, AchievementId, BoardId, PlayerId, Result, TriviaConfig, TriviaError,
};

/// A player's running score and unlocked achievements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub id: PlayerId,
    /// No floor; deductions may take it below zero.
    pub score: i64,
    pub achievements: BTreeSet<AchievementId>,
}

impl PlayerScore {
    /// Create a zero-score record with no achievements.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            achievements: BTreeSet::new(),
        }
    }
}

/// Registry of player scores and leaderboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEngine {
    players: HashMap<PlayerId, PlayerScore>,
    boards: HashMap<BoardId, Leaderboard>,
    matchmaking_window: i64,
    default_board: BoardId,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(&TriviaConfig::default())
    }
}

impl ScoreEngine {
    /// Create an empty engine using the window and default board from `config`.
    pub fn new(config: &TriviaConfig) -> Self {
        Self {
            players: HashMap::new(),
            boards: HashMap::new(),
            matchmaking_window: config.matchmaking_window,
            default_board: BoardId::from(config.default_board.as_str()),
        }
    }

    /// Maximum score distance for matchmaking.
    pub fn matchmaking_window(&self) -> i64 {
        self.matchmaking_window
    }

    /// Board used when a query names none.
    pub fn default_board(&self) -> &BoardId {
        &self.default_board
    }

    fn player_mut(&mut self, player_id: &str) -> Result<&mut PlayerScore> {
        ensure_identifier("player id", player_id)?;
        if !self.players.contains_key(player_id) {
            tracing::debug!(player = player_id, "Registered player");
        }
        Ok(self
            .players
            .entry(PlayerId::from(player_id))
            .or_insert_with_key(|id| PlayerScore::new(id.clone())))
    }

    /// Add `points` (possibly negative) to a player's score. Returns the new score.
    pub fn update(&mut self, player_id: &str, points: i64) -> Result<i64> {
        let player = self.player_mut(player_id)?;
        player.score = player.score.saturating_add(points);
        tracing::debug!(player = player_id, points, score = player.score, "Updated score");
        Ok(player.score)
    }

    /// Current score, creating the player at zero if unseen.
    pub fn get(&mut self, player_id: &str) -> Result<i64> {
        Ok(self.player_mut(player_id)?.score)
    }

    /// Current score without creating a record.
    pub fn peek(&self, player_id: &str) -> Option<i64> {
        self.players.get(player_id).map(|p| p.score)
    }

    /// Set a player's score back to zero. Achievements are kept.
    pub fn reset(&mut self, player_id: &str) -> Result<()> {
        self.player_mut(player_id)?.score = 0;
        tracing::debug!(player = player_id, "Reset score");
        Ok(())
    }

    /// Get a player's record without creating it.
    pub fn player(&self, player_id: &str) -> Option<&PlayerScore> {
        self.players.get(player_id)
    }

    /// Get the number of known players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Grant an achievement. Returns `false` if the player already had it.
    pub fn add_achievement(&mut self, player_id: &str, achievement_id: &str) -> Result<bool> {
        ensure_identifier("achievement id", achievement_id)?;
        let player = self.player_mut(player_id)?;
        let added = player.achievements.insert(AchievementId::from(achievement_id));
        if added {
            tracing::debug!(player = player_id, achievement = achievement_id, "Unlocked achievement");
        }
        Ok(added)
    }

    /// Check whether a player holds an achievement, creating the player if unseen.
    pub fn has_achievement(&mut self, player_id: &str, achievement_id: &str) -> Result<bool> {
        ensure_identifier("achievement id", achievement_id)?;
        Ok(self
            .player_mut(player_id)?
            .achievements
            .contains(achievement_id))
    }

    /// Achievements of a known player, sorted. Empty for unknown players.
    pub fn achievements(&self, player_id: &str) -> Vec<&AchievementId> {
        self.players
            .get(player_id)
            .map(|p| p.achievements.iter().collect())
            .unwrap_or_default()
    }

    /// Validate a board name, falling back to the default board.
    fn board_key(&self, board_id: Option<&str>) -> Result<BoardId> {
        match board_id {
            Some(id) => {
                ensure_identifier("board id", id)?;
                Ok(BoardId::from(id))
            }
            None => Ok(self.default_board.clone()),
        }
    }

    /// Members a query on `board_id` would see, without creating or seeding anything.
    fn member_view(&self, board_id: &BoardId) -> Vec<PlayerId> {
        match self.boards.get(board_id) {
            Some(board) if !board.is_empty() => board.members.iter().cloned().collect(),
            _ => self.players.keys().cloned().collect(),
        }
    }

    /// Create a board if needed and seed it with every known player while it is empty.
    fn persist_board(&mut self, board_id: &BoardId) {
        let board = self
            .boards
            .entry(board_id.clone())
            .or_insert_with_key(|id| Leaderboard::new(id.clone()));

        // The seed is a snapshot; players registered later are not added.
        if board.is_empty() && !self.players.is_empty() {
            board.members.extend(self.players.keys().cloned());
            tracing::debug!(board = %board.id, members = board.len(), "Populated leaderboard");
        }
    }

    fn ranked(&self, members: Vec<PlayerId>) -> Vec<Standing> {
        let mut rows: Vec<Standing> = members
            .into_iter()
            .map(|player| {
                let score = self.players.get(&player).map_or(0, |p| p.score);
                Standing { player, score }
            })
            .collect();
        rows.sort_by(standing_order);
        rows
    }

    /// Members of a board with their scores, best first.
    ///
    /// `None` selects the default board. Equal scores are ordered by ascending player ID.
    pub fn standings(&mut self, board_id: Option<&str>) -> Result<Vec<Standing>> {
        let key = self.board_key(board_id)?;
        self.persist_board(&key);
        Ok(self.ranked(self.member_view(&key)))
    }

    /// Player IDs of a board, best first.
    pub fn leaderboard(&mut self, board_id: Option<&str>) -> Result<Vec<PlayerId>> {
        Ok(self
            .standings(board_id)?
            .into_iter()
            .map(|s| s.player)
            .collect())
    }

    /// 1-based position of a player on a board.
    ///
    /// The board is only created or seeded once the player is found on it.
    pub fn rank(&mut self, board_id: Option<&str>, player_id: &str) -> Result<usize> {
        ensure_identifier("player id", player_id)?;
        let key = self.board_key(board_id)?;

        let position = self
            .ranked(self.member_view(&key))
            .iter()
            .position(|s| s.player.as_str() == player_id)
            .ok_or_else(|| TriviaError::NotOnBoard {
                board: key.clone(),
                player: PlayerId::from(player_id),
            })?;

        self.persist_board(&key);
        Ok(position + 1)
    }

    /// Add a player to a board explicitly, creating both if needed.
    ///
    /// A board with explicit members is no longer seeded from the player table.
    pub fn join_board(&mut self, board_id: &str, player_id: &str) -> Result<bool> {
        ensure_identifier("board id", board_id)?;
        self.player_mut(player_id)?;

        let board = self
            .boards
            .entry(BoardId::from(board_id))
            .or_insert_with_key(|id| Leaderboard::new(id.clone()));
        let joined = board.members.insert(PlayerId::from(player_id));
        tracing::debug!(board = board_id, player = player_id, joined, "Joined leaderboard");
        Ok(joined)
    }

    /// Remove a player from a board.
    ///
    /// Emptying a board re-enables seeding on its next query.
    pub fn leave_board(&mut self, board_id: &str, player_id: &str) -> Result<()> {
        let board = self
            .boards
            .get_mut(board_id)
            .ok_or_else(|| TriviaError::BoardNotFound(BoardId::from(board_id)))?;
        if !board.members.remove(player_id) {
            return Err(TriviaError::NotOnBoard {
                board: board.id.clone(),
                player: PlayerId::from(player_id),
            });
        }
        tracing::debug!(board = board_id, player = player_id, "Left leaderboard");
        Ok(())
    }

    /// Get a board by ID without creating it.
    pub fn board(&self, board_id: &str) -> Option<&Leaderboard> {
        self.boards.get(board_id)
    }

    /// Other players whose score is within the matchmaking window of this player's.
    ///
    /// Closest scores come first, then ascending player ID.
    pub fn matchmaking(&mut self, player_id: &str) -> Result<Vec<PlayerId>> {
        let own = self.player_mut(player_id)?.score;
        let window = self.matchmaking_window.unsigned_abs();

        let mut matches: Vec<(u64, &PlayerId)> = self
            .players
            .values()
            .filter(|p| p.id.as_str() != player_id)
            .map(|p| (p.score.abs_diff(own), &p.id))
            .filter(|(distance, _)| *distance <= window)
            .collect();
        matches.sort();

        tracing::debug!(player = player_id, matches = matches.len(), "Matchmaking");
        Ok(matches.into_iter().map(|(_, id)| id.clone()).collect())
    }
}
