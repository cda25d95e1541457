/*
attempt.rs

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

//! Evaluate a player's submission for the scoreboard.

use serde::Serialize;

use crate::puzzle::PuzzleDefinition;
use crate::validator::Move;

/// Result of a submission, as recorded by the catalogue.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub is_valid: bool,
    pub message: String,

    /// Time between the first and the last move, in milliseconds.
    /// Only set for valid submissions whose timestamps do not overflow.
    pub completion_time: Option<i64>,

    /// Number of submitted moves.
    pub total_moves: usize,
}

impl AttemptOutcome {
    /// Validate the moves and compute the completion time.
    pub fn evaluate(puzzle: &PuzzleDefinition, moves: &[Move]) -> Self {
        let result = puzzle.validate(moves);
        let completion_time: Option<i64> = match (result.valid, moves.first(), moves.last()) {
            (true, Some(first), Some(last)) => last.timestamp.checked_sub(first.timestamp),
            _ => None,
        };
        Self {
            is_valid: result.valid,
            message: result.message,
            completion_time,
            total_moves: moves.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::grid::Grid;
    use crate::maze::portals::PortalTable;
    use crate::maze::position::Position;

    fn corridor() -> PuzzleDefinition {
        PuzzleDefinition {
            name: "Corridor".to_string(),
            description: String::new(),
            grid: Grid::parse("S . E").expect("valid grid"),
            start_pos: Position::new(0, 0),
            end_pos: Position::new(0, 2),
            portal_pairs: PortalTable::new(),
        }
    }

    #[test]
    fn valid_attempt_has_a_completion_time() {
        let moves = [Move::new("right", 1000), Move::new("right", 3500)];
        let outcome = AttemptOutcome::evaluate(&corridor(), &moves);
        assert!(outcome.is_valid);
        assert_eq!(outcome.completion_time, Some(2500));
        assert_eq!(outcome.total_moves, 2);
    }

    #[test]
    fn invalid_attempt_has_no_completion_time() {
        let moves = [Move::new("right", 1000), Move::new("up", 2000)];
        let outcome = AttemptOutcome::evaluate(&corridor(), &moves);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.completion_time, None);
        assert_eq!(outcome.total_moves, 2);

        let outcome = AttemptOutcome::evaluate(&corridor(), &[]);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.completion_time, None);
        assert_eq!(outcome.total_moves, 0);
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let moves = [Move::new("right", i64::MAX), Move::new("right", i64::MIN)];
        let outcome = AttemptOutcome::evaluate(&corridor(), &moves);
        assert!(outcome.is_valid);
        assert_eq!(outcome.completion_time, None);

        let moves = [Move::new("right", -20), Move::new("right", i64::MAX - 10)];
        let outcome = AttemptOutcome::evaluate(&corridor(), &moves);
        assert_eq!(outcome.completion_time, None);
    }
}
