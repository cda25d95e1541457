/*
properties.rs

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

//! Properties that hold for any grid.

use mazegate::rules::DoorRule;
use mazegate::{
    Cell, Grid, Move, PortalTable, Position, classify_grid, has_basic_path, is_solvable,
    solver::{self, PortalPolicy},
    validate_solution,
};
use proptest::prelude::*;

/// Grid of up to 5x5 cells with the start in the top left corner and the end in the bottom
/// right corner.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    let cell = prop_oneof![
        6 => Just(Cell::Empty),
        3 => Just(Cell::Wall),
        1 => Just(Cell::Key),
        1 => Just(Cell::Door),
        1 => Just(Cell::Portal(Some(1))),
    ];
    (1usize..=5, 2usize..=5)
        .prop_flat_map(move |(rows, cols)| {
            prop::collection::vec(cell.clone(), rows * cols).prop_map(move |cells| {
                let mut matrix: Vec<Vec<Cell>> =
                    cells.chunks(cols).map(|row| row.to_vec()).collect();
                matrix[0][0] = Cell::Start;
                matrix[rows - 1][cols - 1] = Cell::End;
                matrix
            })
        })
        .prop_map(|matrix| Grid::from_rows(matrix).expect("rectangular grid"))
}

fn corners(grid: &Grid) -> (Position, Position) {
    (
        Position::new(0, 0),
        Position::new(grid.rows() - 1, grid.cols() - 1),
    )
}

fn move_strategy() -> impl Strategy<Value = Vec<Move>> {
    let token = prop::sample::select(vec!["up", "down", "left", "right", "jump"]);
    prop::collection::vec((token, 0i64..100_000), 0..30).prop_map(|list| {
        list.into_iter()
            .map(|(action, timestamp)| Move::new(action, timestamp))
            .collect()
    })
}

proptest! {
    #[test]
    fn no_basic_path_means_not_solvable(grid in grid_strategy()) {
        let (start, end) = corners(&grid);
        let info = classify_grid(&grid);
        if !has_basic_path(&grid, start, end) {
            prop_assert!(!is_solvable(&grid, start, end, &info.keys, &info.doors));
        }
    }

    #[test]
    fn validation_is_idempotent(grid in grid_strategy(), moves in move_strategy()) {
        let (start, end) = corners(&grid);
        let portals = PortalTable::from_grid(&grid);
        let first = validate_solution(&grid, start, end, &portals, &moves);
        let second = validate_solution(&grid, start, end, &portals, &moves);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn playable_solutions_replay_through_the_validator(grid in grid_strategy()) {
        let (start, end) = corners(&grid);
        let info = classify_grid(&grid);
        let solution = solver::solve(
            &grid,
            start,
            end,
            &info.keys,
            &info.doors,
            PortalPolicy::Avoid,
            DoorRule::KeyPerEntry,
        );
        if let Some(directions) = solution {
            prop_assert!(is_solvable(&grid, start, end, &info.keys, &info.doors));
            let replay: Vec<Move> = directions.into_iter().map(Move::from).collect();
            let portals = PortalTable::from_grid(&grid);
            let result = validate_solution(&grid, start, end, &portals, &replay);
            prop_assert!(result.valid, "{}\n{}", result.message, grid);
            prop_assert_eq!(result.moves_used, replay.len());
        }
    }
}
