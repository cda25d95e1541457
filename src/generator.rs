/*
generator.rs

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

//! Generate random maze puzzles.
//!
//! A [`difficulty::Difficulty`] level selects a [`difficulty::TierConfig`]: the grid size, the
//! wall density, and the number of keys, doors, and portals.
//!
//! To create a puzzle, create a [`random_maze::MazeGenerator`] object and use its
//! [`random_maze::MazeGenerator::generate`] method, or call [`random_maze::generate_puzzle`].
//! The generator draws random mazes and keeps the first one that
//! [`crate::solver::is_solvable`] accepts, and that the move validator can also complete
//! without portals.
//! If no random maze is valid after [`random_maze::MAX_ATTEMPTS`] attempts, then the
//! hand-made puzzle from [`fallback`] is returned instead.
//!
//! The random number generator is provided by the caller. Use a seeded
//! [`rand::rngs::StdRng`] to get reproducible puzzles.

pub mod difficulty;
pub mod fallback;
pub mod random_maze;
