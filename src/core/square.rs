//! Board position newtype.
//!
//! A [`Square`] is a 1-based board coordinate on the fixed 100-square race
//! track. The invariant `1..=100` is enforced at construction ([`Square::new`])
//! and again on deserialization, so an out-of-range value can never exist.
//! [`Square::FIRST`] is the starting square and [`Square::LAST`] is the winning
//! square.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of squares on the board. The track is fixed at 100.
pub const BOARD_SQUARES: u8 = 100;

/// A board position, guaranteed to lie in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// The starting square (1).
    pub const FIRST: Square = Square(1);

    /// The winning square (`BOARD_SQUARES`).
    pub const LAST: Square = Square(BOARD_SQUARES);

    /// Construct a square, rejecting values outside `1..=100`.
    pub fn new(value: u8) -> Result<Square, SquareError> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&value) {
            Ok(Square(value))
        } else {
            Err(SquareError::OutOfRange(value))
        }
    }

    /// The underlying 1-based value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Is this the winning square?
    pub fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    /// Number of squares between `self` and `other` (absolute).
    pub fn distance(self, other: Square) -> u8 {
        if self.0 >= other.0 {
            self.0 - other.0
        } else {
            other.0 - self.0
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(value: u8) -> Result<Square, SquareError> {
        Square::new(value)
    }
}

/// A square value outside the valid `1..=100` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SquareError {
    /// The value is not in `1..=100`.
    #[error("square {0} is out of range (must be 1..=100)")]
    OutOfRange(u8),
}
