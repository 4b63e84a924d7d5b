//! Co-location layout for tokens sharing a square.
//!
//! When several tokens occupy one square, each is assigned a fixed offset
//! slot so they stay visually distinguishable. Assignment is a pure function
//! of the roster's current positions: players are grouped by square in
//! roster insertion order (not arrival order), and each gets the slot
//! matching its index within the group. The turn manager recomputes this
//! after every completed movement; nothing is stored.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerId, Square};

/// Where in the square a token sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotPosition {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One player's slot within its co-location group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub player: PlayerId,
    pub square: Square,
    /// Index within the group, in roster order.
    pub slot: u8,
    /// Number of players sharing the square.
    pub group_size: u8,
    /// The fixed offset position for this slot.
    pub position: SlotPosition,
}

/// Group players by their current square, preserving roster order within
/// each group.
#[must_use]
pub fn players_by_square(roster: &[Player]) -> FxHashMap<Square, SmallVec<[PlayerId; 4]>> {
    let mut groups: FxHashMap<Square, SmallVec<[PlayerId; 4]>> = FxHashMap::default();
    for player in roster {
        groups.entry(player.position()).or_default().push(player.id());
    }
    groups
}

/// Assign every player its slot, in roster order.
#[must_use]
pub fn assign_slots(roster: &[Player]) -> Vec<SlotAssignment> {
    let mut totals: FxHashMap<Square, u8> = FxHashMap::default();
    for player in roster {
        *totals.entry(player.position()).or_default() += 1;
    }

    let mut taken: FxHashMap<Square, u8> = FxHashMap::default();
    roster
        .iter()
        .map(|player| {
            let square = player.position();
            let slot = taken.entry(square).or_default();
            let assignment = SlotAssignment {
                player: player.id(),
                square,
                slot: *slot,
                group_size: totals[&square],
                position: slot_position(totals[&square], *slot),
            };
            *slot += 1;
            assignment
        })
        .collect()
}

/// The fixed offset position for slot `index` in a group of `group_size`.
///
/// A lone token sits centered; pairs take the top corners; a third token
/// takes the bottom-right; four or more fill all corners, with any overflow
/// stacked on the bottom-right.
#[must_use]
pub fn slot_position(group_size: u8, index: u8) -> SlotPosition {
    match group_size {
        0 | 1 => SlotPosition::Center,
        2 => match index {
            0 => SlotPosition::TopLeft,
            _ => SlotPosition::TopRight,
        },
        3 => match index {
            0 => SlotPosition::TopLeft,
            1 => SlotPosition::TopRight,
            _ => SlotPosition::BottomRight,
        },
        _ => match index {
            0 => SlotPosition::TopLeft,
            1 => SlotPosition::TopRight,
            2 => SlotPosition::BottomLeft,
            _ => SlotPosition::BottomRight,
        },
    }
}
