/*
fallback.rs

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

//! Hand-made puzzles, one per difficulty level.
//!
//! They are used when the random generator does not find a valid maze in time.
//! Every fallback maze can be completed without stepping on a portal or entering a door twice.

use crate::maze::grid::Grid;
use crate::maze::portals::PortalTable;
use crate::maze::position::Position;
use crate::puzzle::PuzzleDefinition;

use super::difficulty::Difficulty;

/// Fallback puzzle source.
struct FallbackSource {
    name: &'static str,
    description: &'static str,
    matrix: &'static str,
}

const EASY: FallbackSource = FallbackSource {
    name: "Simple Path",
    description: "A straightforward maze to get you started!",
    matrix: "
        S . . . K
        # . # # .
        . . . # D
        # . # . .
        . . . . E
    ",
};

const MEDIUM: FallbackSource = FallbackSource {
    name: "Portal Adventure",
    description: "Use portals and collect keys to reach the exit!",
    matrix: "
        S  #  K  #  .
        .  .  .  #  P1
        #  .  #  #  .
        P1 .  .  #  D
        .  #  K  D  E
    ",
};

const HARD: FallbackSource = FallbackSource {
    name: "Ultimate Challenge",
    description: "A complex maze with multiple keys, doors, and portals!",
    matrix: "
        S  .  K  #  .  #  K
        #  .  .  .  .  #  .
        .  #  #  D  #  .  P1
        K  .  .  .  .  .  D
        .  #  P1 .  P2 #  .
        .  .  #  D  #  .  P2
        .  .  .  .  .  .  E
    ",
};

/// Return the fallback puzzle for the difficulty level.
///
/// The start is the top left corner and the end the bottom right corner.
pub fn fallback_puzzle(difficulty: Difficulty) -> PuzzleDefinition {
    let source: &FallbackSource = match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    };
    let grid: Grid = Grid::parse(source.matrix).expect("Invalid fallback puzzle");
    let portal_pairs: PortalTable = PortalTable::from_grid(&grid);
    let end_pos: Position = Position::new(grid.rows() - 1, grid.cols() - 1);

    PuzzleDefinition {
        name: source.name.to_string(),
        description: source.description.to_string(),
        grid,
        start_pos: Position::new(0, 0),
        end_pos,
        portal_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DoorRule;
    use crate::solver::{self, PortalPolicy};
    use crate::validator::Move;

    #[test]
    fn fallbacks_match_their_level() {
        for d in Difficulty::all() {
            let mut p = fallback_puzzle(d);
            p.check().expect("valid fallback");
            let info = p.info();
            let config = d.config();
            assert!(info.dimensions.0 <= config.size && info.dimensions.1 <= config.size);
            assert_eq!(info.portals.len(), config.portals, "{d}");
            assert_eq!(p.portal_pairs.len() * 2, config.portals, "{d}");
        }
    }

    #[test]
    fn fallbacks_are_playable_without_portals() {
        for d in Difficulty::all() {
            let p = fallback_puzzle(d);
            let info = p.info();
            assert!(p.is_solvable(), "{d}");
            let moves = solver::solve(
                &p.grid,
                p.start_pos,
                p.end_pos,
                &info.keys,
                &info.doors,
                PortalPolicy::Avoid,
                DoorRule::KeyPerEntry,
            )
            .expect("solvable without portals");
            let replay: Vec<Move> = moves.into_iter().map(Move::from).collect();
            assert!(p.validate(&replay).valid, "{d}");
        }
    }
}
