/*
classify.rs

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

//! Single-pass classification of the cells of a grid.

use serde::Serialize;

use super::cell::Cell;
use super::grid::Grid;
use super::position::Position;

/// Facts derived from a grid.
///
/// All the position lists are in row-major order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MazeInfo {
    /// Number of rows and columns.
    pub dimensions: (usize, usize),
    pub keys: Vec<Position>,
    pub doors: Vec<Position>,
    pub portals: Vec<Position>,
    pub walls: Vec<Position>,
    pub total_keys: usize,
    pub total_doors: usize,
}

/// Classify every cell of the grid.
pub fn classify_grid(grid: &Grid) -> MazeInfo {
    let mut info: MazeInfo = MazeInfo {
        dimensions: (grid.rows(), grid.cols()),
        ..MazeInfo::default()
    };

    for (pos, cell) in grid.iter() {
        match cell {
            Cell::Key => info.keys.push(pos),
            Cell::Door => info.doors.push(pos),
            Cell::Portal(_) => info.portals.push(pos),
            Cell::Wall => info.walls.push(pos),
            Cell::Empty | Cell::Start | Cell::End => (),
        }
    }
    info.total_keys = info.keys.len();
    info.total_doors = info.doors.len();
    info
}
