//! Core engine types: squares, players, dice, configuration.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine composes. Nothing here knows about obstacles, quizzes, or turns.

pub mod config;
pub mod dice;
pub mod player;
pub mod square;

pub use config::{AnimationConfig, MatchConfig};
pub use dice::DiceRng;
pub use player::{Player, PlayerId};
pub use square::{Square, SquareError, BOARD_SQUARES};
