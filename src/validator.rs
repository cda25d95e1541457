/*
validator.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegate.

Mazegate is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegate is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegate. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Replay a player's moves against a maze.
//!
//! The validator never fails: a rejected submission is a [`ValidationResult`] with `valid` set to
//! `false`, a message for the player, and the [`Failure`] cause.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::maze::grid::Grid;
use crate::maze::portals::PortalTable;
use crate::maze::position::{Direction, Position};
use crate::rules::{self, Blocked, DoorRule, Inventory, Layout};

/// Move submitted by the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Action token: `up`, `down`, `left`, or `right`.
    pub action: String,

    /// Submission time, in milliseconds.
    /// Only used by the caller to compute the completion time.
    pub timestamp: i64,
}

impl Move {
    pub fn new(action: &str, timestamp: i64) -> Self {
        Self {
            action: action.to_string(),
            timestamp,
        }
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        Self::new(direction.token(), 0)
    }
}

/// Reason why a submission is rejected.
///
/// Step numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The move list is empty.
    NoMoves,

    /// The action token is not a direction.
    UnknownAction { step: usize, action: String },

    /// The move leads outside the grid, into a wall, or into a locked door.
    Blocked { step: usize, reason: Blocked },

    /// All the moves have been played without reaching the goal.
    GoalNotReached { position: Position, goal: Position },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::NoMoves => write!(f, "Invalid submission: no moves provided"),
            Failure::UnknownAction { step, action } => {
                write!(f, "Invalid move '{action}' at step {step}")
            }
            Failure::Blocked { step, reason } => {
                write!(f, "Invalid move at step {step}: {reason}")
            }
            Failure::GoalNotReached { position, goal } => write!(
                f,
                "Did not reach the goal. Final position: {position}, Goal: {goal}"
            ),
        }
    }
}

/// Outcome of a validation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the moves lead to the goal.
    pub valid: bool,

    /// Message for the player.
    pub message: String,

    /// Number of moves played before reaching the goal or being rejected.
    pub moves_used: usize,

    /// Rejection cause, None when the submission is valid.
    #[serde(skip)]
    pub failure: Option<Failure>,
}

impl ValidationResult {
    fn solved(moves_used: usize, total_moves: usize) -> Self {
        Self {
            valid: true,
            message: format!("Congratulations! Maze completed in {total_moves} moves!"),
            moves_used,
            failure: None,
        }
    }

    fn rejected(failure: Failure, moves_used: usize) -> Self {
        debug!("Submission rejected: {failure}");
        Self {
            valid: false,
            message: failure.to_string(),
            moves_used,
            failure: Some(failure),
        }
    }
}

/// Replay the moves from `start` and report whether `end` is reached.
///
/// For each move:
///
/// 1. The action token is decoded. An unknown token stops the replay.
/// 2. The move goes through [`rules::advance`] with [`DoorRule::KeyPerEntry`]: leaving the grid,
///    hitting a wall, or stepping onto a door without a key stops the replay. Every door entry
///    consumes a key, even on a door that was crossed before.
/// 3. Landing on a paired portal moves the player to its partner. The teleport does not count as
///    a move and does not trigger the destination cell.
/// 4. Reaching `end` (possibly through a portal) validates the submission. The remaining moves
///    are not played, but the message reports the length of the whole list.
pub fn validate_solution(
    grid: &Grid,
    start: Position,
    end: Position,
    portals: &PortalTable,
    moves: &[Move],
) -> ValidationResult {
    if moves.is_empty() {
        return ValidationResult::rejected(Failure::NoMoves, 0);
    }

    let layout: Layout = Layout::from_grid(grid);
    let mut position: Position = start;
    let mut inventory: Inventory = layout.empty_inventory();

    for (i, m) in moves.iter().enumerate() {
        let step: usize = i + 1;
        let Some(direction) = Direction::from_token(&m.action) else {
            return ValidationResult::rejected(
                Failure::UnknownAction {
                    step,
                    action: m.action.clone(),
                },
                step,
            );
        };

        (position, inventory) = match rules::advance(
            grid,
            &layout,
            DoorRule::KeyPerEntry,
            position,
            direction,
            &inventory,
        )
        {
            Ok(next) => next,
            Err(reason) => {
                return ValidationResult::rejected(Failure::Blocked { step, reason }, step);
            }
        };

        if grid.get(position).is_some_and(|cell| cell.is_portal())
            && let Some(destination) = portals.partner(position)
        {
            debug!("Step {step}: portal {position} -> {destination}");
            position = destination;
        }

        if position == end {
            return ValidationResult::solved(step, moves.len());
        }
    }

    ValidationResult::rejected(
        Failure::GoalNotReached {
            position,
            goal: end,
        },
        moves.len(),
    )
}
