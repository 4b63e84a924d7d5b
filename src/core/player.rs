//! Player identification and the player entity.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Ids are indices
//! into the roster held by the turn manager and stay stable for the session.
//!
//! ## Player
//!
//! The per-player record: name, board position, score, finished flag.
//! Mutation goes through guarded methods so the entity's invariants hold:
//! the score only ever grows, and `finished` is set exactly once until a
//! full game reset.

use serde::{Deserialize, Serialize};

use super::square::Square;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use ladder_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player in the race.
///
/// Created on join at [`Square::FIRST`] with zero score. The turn manager
/// owns the roster; other components receive references or return effect
/// descriptions for the manager to apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: Square,
    score: u32,
    finished: bool,
}

impl Player {
    /// Create a player at the starting square.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Square::FIRST,
            score: 0,
            finished: false,
        }
    }

    /// The player's stable identifier.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current board position.
    #[must_use]
    pub fn position(&self) -> Square {
        self.position
    }

    /// Current score. Monotonically non-decreasing between resets.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Has this player reached the winning square?
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Move the token to a new square.
    pub(crate) fn set_position(&mut self, square: Square) {
        self.position = square;
    }

    /// Add points to the score.
    pub(crate) fn award(&mut self, points: u32) {
        if points > 0 {
            self.score += points;
            log::info!("{} earned {} points (total {})", self.name, points, self.score);
        }
    }

    /// Mark the player as finished. Idempotent; only a reset clears it.
    pub(crate) fn mark_finished(&mut self) {
        self.finished = true;
    }

    /// Restore the join state: back to square 1, zero score, not finished.
    pub(crate) fn reset(&mut self) {
        self.position = Square::FIRST;
        self.score = 0;
        self.finished = false;
    }
}
