/*
random_maze.rs

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

//! Generate a random maze.

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use crate::maze::cell::Cell;
use crate::maze::grid::{Grid, GridError};
use crate::maze::portals::PortalTable;
use crate::maze::position::Position;
use crate::puzzle::PuzzleDefinition;
use crate::rules::DoorRule;
use crate::solver::{self, PortalPolicy};

use super::difficulty::{Difficulty, DifficultyError, TierConfig};
use super::fallback;

/// Number of random mazes to try before using the fallback puzzle.
pub const MAX_ATTEMPTS: usize = 100;

/// Reasons why a random maze is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The walls cut every path from the start to the end.
    NoPath,

    /// Not enough free cells left for the keys, doors, and portals.
    NotEnoughRoom,

    /// The keys and doors make the maze impossible to complete.
    Unsolvable,

    /// The move validator would not accept any sequence that avoids the portals.
    Unplayable,

    /// The grid cannot be built. Retrying does not help.
    Grid(GridError),
}

impl From<GridError> for AttemptError {
    fn from(error: GridError) -> Self {
        AttemptError::Grid(error)
    }
}

/// Number of discarded mazes, per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rejections {
    pub no_path: usize,
    pub not_enough_room: usize,
    pub unsolvable: usize,
    pub unplayable: usize,
}

/// [`MazeGenerator`] object.
pub struct MazeGenerator {
    /// Difficulty level of the generated puzzles.
    pub difficulty: Difficulty,

    /// Number of attempts it took to generate the last puzzle.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,

    /// Whether the last puzzle is the fallback puzzle.
    pub used_fallback: bool,

    /// Discarded mazes for the last puzzle.
    pub rejections: Rejections,

    /// Time when the generation started. Used to compute the [`MazeGenerator::duration`].
    start: Instant,
}

impl MazeGenerator {
    /// Create the object.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            attempts: 0,
            duration: 0.0,
            used_fallback: false,
            rejections: Rejections::default(),
            start: Instant::now(),
        }
    }

    /// Generate a puzzle.
    ///
    /// Random mazes are drawn until one can be completed, up to [`MAX_ATTEMPTS`] times.
    /// After that, the fallback puzzle for the difficulty level is returned, so the method always
    /// returns a puzzle.
    pub fn generate<R: Rng + ?Sized>(&mut self, name: &str, rng: &mut R) -> PuzzleDefinition {
        self.attempts = 0;
        self.duration = 0.0;
        self.used_fallback = false;
        self.rejections = Rejections::default();
        self.start = Instant::now();

        let config: &TierConfig = self.difficulty.config();
        let mut puzzle: Option<PuzzleDefinition> = None;

        while self.attempts < MAX_ATTEMPTS {
            self.attempts += 1;
            match self.attempt(config, name, rng) {
                Ok(p) => {
                    puzzle = Some(p);
                    break;
                }
                Err(AttemptError::NoPath) => self.rejections.no_path += 1,
                Err(AttemptError::NotEnoughRoom) => self.rejections.not_enough_room += 1,
                Err(AttemptError::Unsolvable) => self.rejections.unsolvable += 1,
                Err(AttemptError::Unplayable) => self.rejections.unplayable += 1,
                Err(AttemptError::Grid(e)) => {
                    warn!("Cannot build a {} grid: {e}", self.difficulty);
                    break;
                }
            }
        }

        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Attempts = {}  Duration = {}  Rejections = {:?}",
            self.attempts, self.duration, self.rejections
        );

        match puzzle {
            Some(p) => p,
            None => {
                info!(
                    "No valid {} maze after {} attempts: using the fallback puzzle",
                    self.difficulty, self.attempts
                );
                self.used_fallback = true;
                fallback::fallback_puzzle(self.difficulty)
            }
        }
    }

    /// Draw one random maze and verify it.
    fn attempt<R: Rng + ?Sized>(
        &self,
        config: &TierConfig,
        name: &str,
        rng: &mut R,
    ) -> Result<PuzzleDefinition, AttemptError> {
        let size: usize = config.size;
        let start: Position = Position::new(0, 0);
        let end: Position = Position::new(size - 1, size - 1);

        let mut grid: Grid = Grid::filled(size, size, Cell::Empty)?;
        grid.set(start, Cell::Start);
        grid.set(end, Cell::End);

        // Walls are the first cells of a random permutation of the other cells
        let mut cells: Vec<Position> = grid
            .iter()
            .map(|(pos, _)| pos)
            .filter(|pos| *pos != start && *pos != end)
            .collect();
        cells.shuffle(rng);
        let num_walls: usize = config.num_walls().min(cells.len());
        let free: Vec<Position> = cells.split_off(num_walls);
        for pos in &cells {
            grid.set(*pos, Cell::Wall);
        }

        if !solver::has_basic_path(&grid, start, end) {
            debug!("  Discarded: no path");
            return Err(AttemptError::NoPath);
        }
        if free.len() < config.num_items() {
            debug!("  Discarded: {} free cells left", free.len());
            return Err(AttemptError::NotEnoughRoom);
        }

        // The free cells are still in random order: take the keys, then the doors, then the
        // portals from the front
        let mut remaining = free.into_iter();
        let keys: Vec<Position> = remaining.by_ref().take(config.keys).collect();
        let doors: Vec<Position> = remaining.by_ref().take(config.doors).collect();
        let portals: Vec<Position> = remaining.take(config.portals).collect();

        for pos in &keys {
            grid.set(*pos, Cell::Key);
        }
        for pos in &doors {
            grid.set(*pos, Cell::Door);
        }
        let mut portal_pairs: PortalTable = PortalTable::new();
        for (id, pair) in (1..).zip(portals.chunks_exact(2)) {
            grid.set(pair[0], Cell::Portal(Some(id)));
            grid.set(pair[1], Cell::Portal(Some(id)));
            portal_pairs.insert(id, pair[0], pair[1]);
        }

        if !solver::is_solvable(&grid, start, end, &keys, &doors) {
            debug!("  Discarded: not solvable");
            return Err(AttemptError::Unsolvable);
        }
        // The search above lets opened doors stay open and walks over portals. The player pays
        // a key for every door entry, and a portal whose partner is walled in traps them.
        let playable = solver::solve(
            &grid,
            start,
            end,
            &keys,
            &doors,
            PortalPolicy::Avoid,
            DoorRule::KeyPerEntry,
        );
        if playable.is_none() {
            debug!("  Discarded: not playable");
            return Err(AttemptError::Unplayable);
        }

        Ok(PuzzleDefinition {
            name: name.to_string(),
            description: config.description.to_string(),
            grid,
            start_pos: start,
            end_pos: end,
            portal_pairs,
        })
    }
}

/// Generate a puzzle for the difficulty level.
///
/// Always returns a puzzle: the fallback puzzle is used when no random maze is valid.
pub fn generate_puzzle<R: Rng + ?Sized>(
    difficulty: Difficulty,
    name: &str,
    rng: &mut R,
) -> PuzzleDefinition {
    MazeGenerator::new(difficulty).generate(name, rng)
}

/// Generate a puzzle for the difficulty level given by name (`easy`, `medium`, or `hard`).
///
/// # Errors
///
/// An unknown difficulty is rejected before any maze is drawn.
pub fn generate_puzzle_by_name<R: Rng + ?Sized>(
    difficulty: &str,
    name: &str,
    rng: &mut R,
) -> Result<PuzzleDefinition, DifficultyError> {
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(generate_puzzle(difficulty, name, rng))
}
