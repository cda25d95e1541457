/*
lib.rs

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

//! Maze puzzles made of walls, keys, doors, and portals.
//!
//! The crate generates random puzzles that are guaranteed to be solvable, checks whether a
//! grid can be completed, and replays the moves submitted by a player.
//!
//! ```
//! use mazegate::{Difficulty, Move, generate_puzzle};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let puzzle = generate_puzzle(Difficulty::Easy, "Morning maze", &mut rng);
//! assert!(puzzle.is_solvable());
//!
//! let result = puzzle.validate(&[Move::new("up", 0)]);
//! assert!(!result.valid);
//! ```

pub mod attempt;
pub mod config;
pub mod generator;
pub mod maze;
pub mod puzzle;
pub mod rules;
pub mod saver;
pub mod solver;
pub mod validator;

pub use attempt::AttemptOutcome;
pub use generator::difficulty::{Difficulty, DifficultyError, TierConfig};
pub use generator::random_maze::{MazeGenerator, generate_puzzle, generate_puzzle_by_name};
pub use maze::cell::Cell;
pub use maze::classify::{MazeInfo, classify_grid};
pub use maze::grid::{Grid, GridError};
pub use maze::portals::PortalTable;
pub use maze::position::{Direction, Position};
pub use puzzle::PuzzleDefinition;
pub use rules::DoorRule;
pub use solver::{has_basic_path, is_solvable};
pub use validator::{Failure, Move, ValidationResult, validate_solution};
