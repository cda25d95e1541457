/*
maze.rs

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

//! Maze grid model.
//!
//! A [`grid::Grid`] is a rectangular matrix of [`cell::Cell`] tags.
//! Grids are usually built from their JSON form (an array of rows of tags) or from an
//! "ASCII art" representation with [`grid::Grid::parse`].
//!
//! The grid carries no rules.
//! Movement rules live in [`crate::rules`], and are shared by the solvability search
//! ([`crate::solver`]) and the move validator ([`crate::validator`]).
//!
//! Portal pairing is described by a [`portals::PortalTable`], which is usually stored with the
//! puzzle, but can also be derived from the grid with [`portals::PortalTable::from_grid`].

pub mod cell;
pub mod classify;
pub mod grid;
pub mod portals;
pub mod position;
