//! The animation capability the engine consumes.
//!
//! The core never renders; it issues presentation requests through this
//! trait and is resumed by the matching completion entry points on the turn
//! manager (`step_complete`, `reposition_complete`). Implementations decide
//! pacing using [`crate::core::AnimationConfig`].

use crate::board::SlotAssignment;
use crate::core::{PlayerId, Square};

/// Presentation requests, injected into the turn manager at construction.
pub trait Presenter {
    /// Animate one square-to-square step (`to` is adjacent to `from`).
    /// Signal completion via `TurnManager::step_complete`.
    fn move_step(&mut self, player: PlayerId, from: Square, to: Square);

    /// Animate a direct obstacle reposition (not stepwise).
    /// Signal completion via `TurnManager::reposition_complete`.
    fn move_direct(&mut self, player: PlayerId, to: Square);

    /// Display the drawn die value; `extra_turn` reports whether another
    /// roll is granted.
    fn show_roll(&mut self, player: PlayerId, value: u8, extra_turn: bool);

    /// Apply co-location slots after a completed movement.
    fn restack(&mut self, slots: &[SlotAssignment]);
}
