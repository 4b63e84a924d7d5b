//! Turn progression: the roll-driven state machine composing movement,
//! obstacles, the quiz gate, and finish tracking.

pub mod manager;

pub use manager::{MatchSnapshot, Phase, TurnManager};
