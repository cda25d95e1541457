/*
grid.rs

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

//! Rectangular matrix of cells.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::cell::Cell;
use super::position::Position;

/// Type of errors for malformed grids and puzzle definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its first row has no cells.
    Empty,

    /// A row does not have the same number of cells as the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The tag is not part of the cell alphabet.
    UnknownTag(String),

    /// A position that must be inside the grid is not.
    OutOfBounds(Position),

    /// The start and the end positions are the same cell.
    StartIsEnd(Position),

    /// The start or the end position is a wall.
    BlockedEndpoint(Position),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "the grid is empty"),
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells instead of {expected}"),
            GridError::UnknownTag(tag) => write!(f, "unknown cell tag '{tag}'"),
            GridError::OutOfBounds(pos) => write!(f, "position {pos} is outside the grid"),
            GridError::StartIsEnd(pos) => write!(f, "start and end are both at {pos}"),
            GridError::BlockedEndpoint(pos) => write!(f, "position {pos} is a wall"),
        }
    }
}

impl Error for GridError {}

/// Maze grid.
///
/// The cells are stored row by row. All the rows have the same length, and the grid has at least
/// one row and one column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with all its cells set to the given value.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        })
    }

    /// Create a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid is empty or if the rows do not all have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols: usize = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let num_rows: usize = rows.len();
        let mut cells: Vec<Cell> = Vec::with_capacity(num_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: num_rows,
            cols,
            cells,
        })
    }

    /// Parse an "ASCII art" representation of a grid, such as:
    ///
    /// ```text
    /// S . K
    /// # # D
    /// P1 . E
    /// ```
    ///
    /// One row per line, cell tags separated by whitespace. Blank lines are ignored.
    pub fn parse(source: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<Cell>> = source
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(str::parse::<Cell>)
                    .collect::<Result<Vec<Cell>, GridError>>()
            })
            .collect::<Result<Vec<Vec<Cell>>, GridError>>()?;
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Return the cell at the given position, or None when the position is outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Set a cell. Positions outside the grid are ignored.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            self.cells[pos.row * self.cols + pos.col] = cell;
        }
    }

    /// Iterate over all the cells in row-major order, with their position.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Position::new(i / self.cols, i % self.cols), *cell))
    }

    /// Return the grid as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(Cell::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_rows_and_columns() {
        let grid = Grid::parse(
            "
            S . K
            # # D
            P1 . E
            ",
        )
        .expect("valid grid");
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Position::new(0, 2)), Some(Cell::Key));
        assert_eq!(grid.get(Position::new(2, 0)), Some(Cell::Portal(Some(1))));
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
    }

    #[test]
    fn ragged_and_empty_grids_are_rejected() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("S . .\n. E"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse("S ? E"),
            Err(GridError::UnknownTag("?".to_string()))
        );
        assert_eq!(Grid::filled(0, 4, Cell::Empty), Err(GridError::Empty));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let source = "S # K\n. P2 D\nP2 . E\n";
        let grid = Grid::parse(source).expect("valid grid");
        assert_eq!(grid.to_string(), source);
    }

    #[test]
    fn json_uses_nested_rows() {
        let grid = Grid::parse("S . E").expect("valid grid");
        let json = serde_json::to_string(&grid).expect("serialize");
        assert_eq!(json, r#"[["S",".","E"]]"#);
        assert!(serde_json::from_str::<Grid>(r#"[["S"],["E","."]]"#).is_err());
    }
}
