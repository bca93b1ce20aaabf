//! Leaderboards and ranking order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use trivia_rules::{BoardId, PlayerId};

/// A named set of players ranked together.
///
/// Members are held by ID only; the score records live in the score engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub id: BoardId,
    pub members: BTreeSet<PlayerId>,
}

impl Leaderboard {
    /// Create a board with no members.
    pub fn new(id: BoardId) -> Self {
        Self {
            id,
            members: BTreeSet::new(),
        }
    }

    /// Check if a player is a member.
    pub fn contains(&self, player_id: &str) -> bool {
        self.members.contains(player_id)
    }

    /// Get the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the board has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub score: i64,
}

/// Leaderboard order: higher score first, ties by ascending player ID.
pub fn standing_order(a: &Standing, b: &Standing) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.player.cmp(&b.player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(player: &str, score: i64) -> Standing {
        Standing {
            player: PlayerId::from(player),
            score,
        }
    }

    #[test]
    fn test_standing_order() {
        let mut rows = vec![
            standing("a", 50),
            standing("c", 80),
            standing("d", 10),
            standing("b", 80),
        ];
        rows.sort_by(standing_order);

        let order: Vec<_> = rows.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(order, ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_membership() {
        let mut board = Leaderboard::new(BoardId::from("weekly"));
        assert!(board.is_empty());

        board.members.insert(PlayerId::from("p1"));
        board.members.insert(PlayerId::from("p1"));
        assert_eq!(board.len(), 1);
        assert!(board.contains("p1"));
        assert!(!board.contains("p2"));
    }
}
