//! Board data: special squares, effect rules, co-location layout.
//!
//! The obstacle table is static, validated configuration; layout is a pure
//! function of current positions. Neither holds runtime game state.

pub mod layout;
pub mod obstacles;

pub use layout::{assign_slots, players_by_square, slot_position, SlotAssignment, SlotPosition};
pub use obstacles::{BoardError, EffectResult, Obstacle, ObstacleTable};
