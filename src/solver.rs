/*
solver.rs

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

//! Reachability checks.
//!
//! Two breadth-first searches over the 4-connected grid:
//!
//! * [`has_basic_path`] only avoids walls. Doors, keys, and portals are floor.
//!   The generator uses it to discard hopeless grids before running the expensive search.
//! * [`is_solvable`] explores `(position, keys collected, doors opened)` states and applies the
//!   rules from [`crate::rules::advance`]. An opened door stays open for the rest of a branch.
//!   Portals are floor for this search: they never teleport.
//! * [`solve`] runs the same search and returns the moves. It can also follow the door rule of
//!   the move validator, where every door entry costs a key, and keep away from portals. A
//!   sequence found that way is accepted by the validator as is.
//!
//! The number of states is bounded by `rows * cols * 2^keys * 2^doors`.

use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::grid::Grid;
use crate::maze::position::{Direction, Position};
use crate::rules::{self, DoorRule, Inventory, Layout};

/// Search state for [`solve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SolverState {
    pos: Position,
    inventory: Inventory,
}

/// Whether `end` can be reached from `start` by only avoiding walls.
pub fn has_basic_path(grid: &Grid, start: Position, end: Position) -> bool {
    if !grid.contains(start) {
        return false;
    }
    let mut visited: HashSet<Position> = HashSet::with_capacity(grid.rows() * grid.cols());
    let mut queue: VecDeque<Position> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if pos == end {
            return true;
        }
        for direction in Direction::ALL {
            let Some(next) = pos.step(direction) else {
                continue;
            };
            match grid.get(next) {
                Some(cell) if !cell.is_wall() => {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
                _ => (),
            }
        }
    }
    false
}

/// How [`solve`] treats portal cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PortalPolicy {
    /// Portals are floor cells. They never teleport.
    Floor,

    /// Portals are never stepped on.
    Avoid,
}

/// Whether `end` can be reached from `start` while following the key and door rules.
///
/// Only the key cells listed in `keys` can be collected. Every door cell of the grid needs a key.
/// The search stops as soon as `end` is reached, whatever the number of keys left.
pub fn is_solvable(
    grid: &Grid,
    start: Position,
    end: Position,
    keys: &[Position],
    doors: &[Position],
) -> bool {
    solve(
        grid,
        start,
        end,
        keys,
        doors,
        PortalPolicy::Floor,
        DoorRule::StayOpen,
    )
    .is_some()
}

/// Return one of the shortest move sequences from `start` to `end`, or None if the maze cannot
/// be solved.
///
/// With [`PortalPolicy::Floor`] and [`DoorRule::StayOpen`], the rules are the ones of
/// [`is_solvable`]. With [`PortalPolicy::Avoid`] and [`DoorRule::KeyPerEntry`], the returned
/// sequence never lands on a portal and pays for every door entry, so the move validator replays
/// it exactly as searched.
pub fn solve(
    grid: &Grid,
    start: Position,
    end: Position,
    keys: &[Position],
    doors: &[Position],
    portals: PortalPolicy,
    door_rule: DoorRule,
) -> Option<Vec<Direction>> {
    if !grid.contains(start) {
        return None;
    }
    let layout: Layout = Layout::new(grid, keys, doors);
    let initial: SolverState = SolverState {
        pos: start,
        inventory: layout.empty_inventory(),
    };

    // Every visited state but the initial one records the state it comes from
    let mut parents: HashMap<SolverState, (SolverState, Direction)> = HashMap::new();
    let mut visited: HashSet<SolverState> = HashSet::new();
    let mut queue: VecDeque<SolverState> = VecDeque::new();
    visited.insert(initial.clone());
    queue.push_back(initial);

    while let Some(state) = queue.pop_front() {
        if state.pos == end {
            debug!("Solvable: {} states explored", visited.len());
            return Some(backtrack(&parents, state));
        }
        for direction in Direction::ALL {
            let Ok((pos, inventory)) =
                rules::advance(grid, &layout, door_rule, state.pos, direction, &state.inventory)
            else {
                continue;
            };
            if portals == PortalPolicy::Avoid && grid.get(pos).is_some_and(|c| c.is_portal()) {
                continue;
            }
            let next: SolverState = SolverState { pos, inventory };
            if !visited.contains(&next) {
                visited.insert(next.clone());
                parents.insert(next.clone(), (state.clone(), direction));
                queue.push_back(next);
            }
        }
    }
    debug!(
        "Not solvable: {} states explored ({} keys, {} doors)",
        visited.len(),
        layout.num_keys(),
        layout.num_doors()
    );
    None
}

/// Rebuild the moves that lead to the given state.
fn backtrack(
    parents: &HashMap<SolverState, (SolverState, Direction)>,
    mut state: SolverState,
) -> Vec<Direction> {
    let mut moves: Vec<Direction> = Vec::new();
    while let Some((previous, direction)) = parents.get(&state) {
        moves.push(*direction);
        state = previous.clone();
    }
    moves.reverse();
    moves
}
