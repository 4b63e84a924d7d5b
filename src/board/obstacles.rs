//! Special squares and their effects.
//!
//! ## Obstacles
//!
//! Three variants occupy board squares:
//!
//! - `Shortcut`: a climb from `entry` to a higher `exit`, taken on a
//!   correct quiz answer.
//! - `Setback`: a fall from `entry` to a lower `exit`, avoided on a
//!   correct quiz answer.
//! - `Gate`: a quiz-only square with no reposition effect.
//!
//! The table is static configuration, immutable for the match; malformed or
//! duplicate entries are caught when it is built, never at runtime.
//!
//! ## Effect rules
//!
//! Every obstacle consults the quiz gate first; [`Obstacle::resolve`] then
//! turns the answer into an [`EffectResult`]. Points formulas reward longer
//! climbs and narrower escapes. The gate question's own points are awarded
//! separately, on top of the effect's.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Square;
use crate::quiz::QuizKind;

/// A special square and its jump data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    /// Climb from `entry` to `exit` (`entry < exit`) on a correct answer.
    Shortcut { entry: Square, exit: Square },
    /// Fall from `entry` to `exit` (`entry > exit`) unless answered correctly.
    Setback { entry: Square, exit: Square },
    /// Quiz-only square; never repositions.
    Gate { position: Square },
}

impl Obstacle {
    /// The square a token must land on to trigger this obstacle.
    #[must_use]
    pub fn entry(&self) -> Square {
        match *self {
            Obstacle::Shortcut { entry, .. } | Obstacle::Setback { entry, .. } => entry,
            Obstacle::Gate { position } => position,
        }
    }

    /// Which quiz kind gates this obstacle.
    #[must_use]
    pub fn quiz_kind(&self) -> QuizKind {
        match self {
            Obstacle::Shortcut { .. } => QuizKind::Shortcut,
            Obstacle::Setback { .. } => QuizKind::Setback,
            Obstacle::Gate { .. } => QuizKind::Gate,
        }
    }

    /// Turn a quiz answer into the obstacle's effect.
    ///
    /// Always produces a result; `new_position: None` means the token stays
    /// where it is.
    #[must_use]
    pub fn resolve(&self, correct: bool) -> EffectResult {
        match *self {
            Obstacle::Shortcut { entry, exit } => {
                if correct {
                    EffectResult {
                        new_position: Some(exit),
                        points_awarded: 20 + u32::from(exit.distance(entry)),
                    }
                } else {
                    EffectResult::stay(0)
                }
            }
            Obstacle::Setback { entry, exit } => {
                if correct {
                    EffectResult::stay(15 + 2 * u32::from(entry.distance(exit)))
                } else {
                    EffectResult {
                        new_position: Some(exit),
                        points_awarded: 0,
                    }
                }
            }
            Obstacle::Gate { .. } => EffectResult::stay(if correct { 25 } else { 0 }),
        }
    }
}

/// Output of resolving an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResult {
    /// Where the token moves, or `None` to stay at the entry square.
    pub new_position: Option<Square>,
    /// Points earned by the effect (exclusive of the quiz question's own).
    pub points_awarded: u32,
}

impl EffectResult {
    /// An effect that leaves the token in place.
    #[must_use]
    pub const fn stay(points_awarded: u32) -> Self {
        Self {
            new_position: None,
            points_awarded,
        }
    }
}

/// A malformed obstacle table. Static-configuration errors, caught at load.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A shortcut whose exit does not lie above its entry.
    #[error("shortcut {entry} -> {exit} must climb")]
    ShortcutMustClimb { entry: Square, exit: Square },

    /// A setback whose exit does not lie below its entry.
    #[error("setback {entry} -> {exit} must fall")]
    SetbackMustFall { entry: Square, exit: Square },

    /// Two obstacles share an entry square.
    #[error("{0} is the entry of more than one obstacle")]
    DuplicateEntry(Square),

    /// An obstacle touches the winning square, which is never
    /// obstacle-checked and never a jump target.
    #[error("{0} is on the winning square")]
    OnWinningSquare(Square),
}

/// Static lookup of special squares, keyed by entry square.
///
/// Each board square is the entry of at most one obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Obstacle>", into = "Vec<Obstacle>")]
pub struct ObstacleTable {
    entries: Vec<Obstacle>,
    by_entry: FxHashMap<Square, usize>,
}

impl ObstacleTable {
    /// Build a table, validating every entry.
    pub fn new(entries: Vec<Obstacle>) -> Result<Self, BoardError> {
        let mut by_entry = FxHashMap::default();

        for (index, obstacle) in entries.iter().enumerate() {
            match *obstacle {
                Obstacle::Shortcut { entry, exit } => {
                    if entry >= exit {
                        return Err(BoardError::ShortcutMustClimb { entry, exit });
                    }
                    if exit.is_last() {
                        return Err(BoardError::OnWinningSquare(exit));
                    }
                }
                Obstacle::Setback { entry, exit } => {
                    if entry <= exit {
                        return Err(BoardError::SetbackMustFall { entry, exit });
                    }
                }
                Obstacle::Gate { .. } => {}
            }

            let entry = obstacle.entry();
            if entry.is_last() {
                return Err(BoardError::OnWinningSquare(entry));
            }
            if by_entry.insert(entry, index).is_some() {
                return Err(BoardError::DuplicateEntry(entry));
            }
        }

        Ok(Self { entries, by_entry })
    }

    /// The standard 100-square layout: 5 shortcuts, 5 setbacks, 5 gates.
    #[must_use]
    pub fn standard() -> Self {
        const SHORTCUTS: [(u8, u8); 5] = [(8, 27), (16, 47), (22, 59), (50, 91), (79, 98)];
        const SETBACKS: [(u8, u8); 5] = [(60, 38), (97, 37), (86, 65), (89, 67), (68, 49)];
        const GATES: [u8; 5] = [24, 33, 56, 83, 94];

        let sq = |v: u8| Square::new(v).expect("standard layout square in range");

        let mut entries = Vec::with_capacity(15);
        entries.extend(SHORTCUTS.map(|(entry, exit)| Obstacle::Shortcut {
            entry: sq(entry),
            exit: sq(exit),
        }));
        entries.extend(SETBACKS.map(|(entry, exit)| Obstacle::Setback {
            entry: sq(entry),
            exit: sq(exit),
        }));
        entries.extend(GATES.map(|position| Obstacle::Gate { position: sq(position) }));

        Self::new(entries).expect("standard layout is valid")
    }

    /// The obstacle whose entry is `square`, if any.
    #[must_use]
    pub fn lookup(&self, square: Square) -> Option<&Obstacle> {
        self.by_entry.get(&square).map(|&index| &self.entries[index])
    }

    /// All obstacles, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.entries.iter()
    }

    /// Shortcut (entry, exit) pairs, for board decoration.
    pub fn shortcuts(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.entries.iter().filter_map(|o| match *o {
            Obstacle::Shortcut { entry, exit } => Some((entry, exit)),
            _ => None,
        })
    }

    /// Setback (entry, exit) pairs, for board decoration.
    pub fn setbacks(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.entries.iter().filter_map(|o| match *o {
            Obstacle::Setback { entry, exit } => Some((entry, exit)),
            _ => None,
        })
    }

    /// Gate squares, for board decoration.
    pub fn gates(&self) -> impl Iterator<Item = Square> + '_ {
        self.entries.iter().filter_map(|o| match *o {
            Obstacle::Gate { position } => Some(position),
            _ => None,
        })
    }

    /// Is `square` the entry or exit of any obstacle? (UI highlighting.)
    #[must_use]
    pub fn is_special(&self, square: Square) -> bool {
        self.entries.iter().any(|o| match *o {
            Obstacle::Shortcut { entry, exit } | Obstacle::Setback { entry, exit } => {
                entry == square || exit == square
            }
            Obstacle::Gate { position } => position == square,
        })
    }
}

impl TryFrom<Vec<Obstacle>> for ObstacleTable {
    type Error = BoardError;

    fn try_from(entries: Vec<Obstacle>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<ObstacleTable> for Vec<Obstacle> {
    fn from(table: ObstacleTable) -> Self {
        table.entries
    }
}
