//! Square-by-square movement resolution.
//!
//! ## Path planning
//!
//! [`plan`] turns (position, die value) into a [`MovePath`]: the ordered
//! squares a token visits. A target past the winning square bounces: the
//! token climbs to 100, then descends by the overshoot (never below 1).
//! Landing exactly on 100 is the finish trigger; the winning square is
//! never obstacle-checked.
//!
//! ## Driving
//!
//! [`MoveDrive`] walks a path one square at a time through the presenter,
//! committing the player's position only after each step's completion
//! signal. The old callback-chained animation becomes an explicit sequence
//! the turn manager awaits in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerId, Square, BOARD_SQUARES};

use super::presenter::Presenter;

/// The ordered squares a move visits, with its landing classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePath {
    start: Square,
    steps: SmallVec<[Square; 12]>,
    bounced: bool,
}

impl MovePath {
    /// The square the move starts from.
    #[must_use]
    pub fn start(&self) -> Square {
        self.start
    }

    /// Every square visited, in order.
    #[must_use]
    pub fn steps(&self) -> &[Square] {
        &self.steps
    }

    /// The square the move ends on.
    #[must_use]
    pub fn landing(&self) -> Square {
        self.steps.last().copied().unwrap_or(self.start)
    }

    /// Did the move reflect off the winning square?
    #[must_use]
    pub fn bounced(&self) -> bool {
        self.bounced
    }

    /// Does the move end the race? Only an exact landing on 100 finishes;
    /// a bounce passes through 100 without winning.
    #[must_use]
    pub fn is_finish(&self) -> bool {
        self.landing().is_last()
    }
}

/// Plan the path for a die value from the current position.
///
/// `target = from + die`. Within the board the path ascends to the target;
/// past it, the overshoot reflects: climb to 100, then descend to
/// `max(100 - overshoot, 1)`.
///
/// A zero die value is a contract violation: logged, and the resulting
/// path stays in place.
#[must_use]
pub fn plan(from: Square, die: u8) -> MovePath {
    let mut steps: SmallVec<[Square; 12]> = SmallVec::new();

    if die == 0 {
        log::error!("rejecting zero die value from {}", from);
        return MovePath { start: from, steps, bounced: false };
    }

    let target = u16::from(from.get()) + u16::from(die);
    let board = u16::from(BOARD_SQUARES);

    let climb_top = target.min(board) as u8;
    for value in (from.get() + 1)..=climb_top {
        if let Ok(square) = Square::new(value) {
            steps.push(square);
        }
    }

    let bounced = target > board;
    if bounced {
        let overshoot = (target - board) as u8;
        let floor = BOARD_SQUARES.saturating_sub(overshoot).max(1);
        for value in (floor..BOARD_SQUARES).rev() {
            if let Ok(square) = Square::new(value) {
                steps.push(square);
            }
        }
    }

    MovePath { start: from, steps, bounced }
}

/// Progress report from the drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveStatus {
    /// A step is animating; await `step_complete`.
    InFlight,
    /// The token has arrived on its landing square.
    Arrived(Square),
}

/// Walks a [`MovePath`] through the presenter, one step per completion
/// signal.
#[derive(Clone, Debug)]
pub struct MoveDrive {
    player: PlayerId,
    path: MovePath,
    cursor: usize,
}

impl MoveDrive {
    /// Create a drive for a player's planned path.
    #[must_use]
    pub fn new(player: PlayerId, path: MovePath) -> Self {
        Self { player, path, cursor: 0 }
    }

    /// The path being driven.
    #[must_use]
    pub fn path(&self) -> &MovePath {
        &self.path
    }

    /// Issue the first step. An empty path arrives immediately.
    pub fn begin(&mut self, presenter: &mut dyn Presenter) -> DriveStatus {
        match self.path.steps.first() {
            Some(&first) => {
                presenter.move_step(self.player, self.path.start, first);
                DriveStatus::InFlight
            }
            None => DriveStatus::Arrived(self.path.start),
        }
    }

    /// A step's animation finished: commit the player's position and issue
    /// the next step, if any.
    pub fn step_complete(
        &mut self,
        player: &mut Player,
        presenter: &mut dyn Presenter,
    ) -> DriveStatus {
        let Some(&reached) = self.path.steps.get(self.cursor) else {
            log::warn!("step completion after arrival for {}", self.player);
            return DriveStatus::Arrived(self.path.landing());
        };

        player.set_position(reached);
        self.cursor += 1;

        match self.path.steps.get(self.cursor) {
            Some(&next) => {
                presenter.move_step(self.player, reached, next);
                DriveStatus::InFlight
            }
            None => DriveStatus::Arrived(reached),
        }
    }
}
