/*
puzzle.rs

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

//! Puzzle definition, as stored in the catalogue.

use serde::{Deserialize, Serialize};

use crate::maze::cell::Cell;
use crate::maze::classify::{MazeInfo, classify_grid};
use crate::maze::grid::{Grid, GridError};
use crate::maze::portals::PortalTable;
use crate::maze::position::Position;
use crate::solver;
use crate::validator::{self, Move, ValidationResult};

/// Complete description of a maze puzzle.
///
/// A definition is created once by the generator and never modified afterward.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub name: String,
    pub description: String,
    pub grid: Grid,
    pub start_pos: Position,
    pub end_pos: Position,

    /// Portal pairs. Older definitions do not have the field, in which case the pairs are
    /// derived from the grid when the definition is loaded (see [`PuzzleDefinition::check`]).
    #[serde(default)]
    pub portal_pairs: PortalTable,
}

impl PuzzleDefinition {
    /// Verify the integrity of the definition.
    ///
    /// If the definition has portals but no portal pairs, then the pairs are derived from the
    /// grid.
    ///
    /// # Errors
    ///
    /// The method returns an error if the start or the end position is outside the grid or on a
    /// wall, if they are the same cell, or if a portal pair references a position outside the
    /// grid.
    pub fn check(&mut self) -> Result<(), GridError> {
        for pos in [self.start_pos, self.end_pos] {
            match self.grid.get(pos) {
                None => return Err(GridError::OutOfBounds(pos)),
                Some(Cell::Wall) => return Err(GridError::BlockedEndpoint(pos)),
                Some(_) => (),
            }
        }
        if self.start_pos == self.end_pos {
            return Err(GridError::StartIsEnd(self.start_pos));
        }
        if self.portal_pairs.is_empty() {
            self.portal_pairs = PortalTable::from_grid(&self.grid);
        }
        for (_, pair) in self.portal_pairs.iter() {
            if let Some(pos) = pair.iter().find(|p| !self.grid.contains(**p)) {
                return Err(GridError::OutOfBounds(*pos));
            }
        }
        Ok(())
    }

    /// Classify the cells of the puzzle grid.
    pub fn info(&self) -> MazeInfo {
        classify_grid(&self.grid)
    }

    /// Difficulty rating reported in the catalogue: one point per 25 cells.
    pub fn difficulty_rating(&self) -> usize {
        self.grid.rows() * self.grid.cols() / 25
    }

    /// Whether the puzzle can be completed, according to the key and door rules.
    pub fn is_solvable(&self) -> bool {
        let info: MazeInfo = self.info();
        solver::is_solvable(
            &self.grid,
            self.start_pos,
            self.end_pos,
            &info.keys,
            &info.doors,
        )
    }

    /// Replay the player's moves against the puzzle.
    pub fn validate(&self, moves: &[Move]) -> ValidationResult {
        validator::validate_solution(
            &self.grid,
            self.start_pos,
            self.end_pos,
            &self.portal_pairs,
            moves,
        )
    }
}
