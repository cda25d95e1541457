/*
rules.rs

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

//! Movement rules.
//!
//! [`advance`] is the only place where the effect of entering a cell is decided.
//! The solvability search and the move validator both go through it. They differ on doors only,
//! which is selected with a [`DoorRule`].
//!
//! The player carries an [`Inventory`]:
//!
//! * Key cells are collected once. Walking on the same key cell again does not give a second key.
//! * Keys are interchangeable, so the number of keys in hand is the number of collected keys minus
//!   the number of keys spent on doors.
//! * With [`DoorRule::StayOpen`], a door consumes one key the first time it is crossed and stays
//!   open afterward. With [`DoorRule::KeyPerEntry`], every entry onto a door consumes a key.
//!
//! Portals are not handled here. The validator applies the teleport after the move, and the
//! solvability search treats portals as floor.

use std::collections::HashMap;
use std::fmt;

use crate::maze::cell::Cell;
use crate::maze::grid::Grid;
use crate::maze::position::{Direction, Position};

/// Fixed-size set of small indexes.
///
/// All the sets built for the same [`Layout`] have the same number of words, so equality and
/// hashing are consistent between states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(64)],
        }
    }

    fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / 64)
            .is_some_and(|w| w & (1u64 << (index % 64)) != 0)
    }

    fn insert(&mut self, index: usize) {
        if let Some(w) = self.words.get_mut(index / 64) {
            *w |= 1u64 << (index % 64);
        }
    }

    fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Index of the key and door cells of a grid.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    keys: HashMap<Position, usize>,
    doors: HashMap<Position, usize>,
}

impl Layout {
    /// Create a layout from explicit lists of key and door positions.
    ///
    /// Key cells that are not in the list are plain floor.
    /// Door cells of the grid are always doors, whether they are in the list or not.
    pub fn new(grid: &Grid, keys: &[Position], doors: &[Position]) -> Self {
        let mut layout: Layout = Layout::default();
        for pos in keys {
            let next: usize = layout.keys.len();
            layout.keys.entry(*pos).or_insert(next);
        }
        let grid_doors = grid
            .iter()
            .filter(|(_, cell)| *cell == Cell::Door)
            .map(|(pos, _)| pos);
        for pos in doors.iter().copied().chain(grid_doors) {
            let next: usize = layout.doors.len();
            layout.doors.entry(pos).or_insert(next);
        }
        layout
    }

    /// Create a layout with all the key and door cells of the grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let keys: Vec<Position> = grid
            .iter()
            .filter(|(_, cell)| *cell == Cell::Key)
            .map(|(pos, _)| pos)
            .collect();
        Self::new(grid, &keys, &[])
    }

    /// Return an empty inventory sized for this layout.
    pub fn empty_inventory(&self) -> Inventory {
        Inventory {
            collected: BitSet::with_capacity(self.keys.len()),
            opened: BitSet::with_capacity(self.doors.len()),
            spent: 0,
        }
    }

    pub fn num_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn num_doors(&self) -> usize {
        self.doors.len()
    }
}

/// How doors behave once a key has been used on them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DoorRule {
    /// A door costs a key the first time only. Used by the solvability search.
    #[default]
    StayOpen,

    /// Every entry onto a door costs a key. Used by the move validator.
    KeyPerEntry,
}

/// Keys collected and doors opened by the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inventory {
    collected: BitSet,
    opened: BitSet,
    spent: usize,
}

impl Inventory {
    /// Number of keys in hand.
    pub fn keys_held(&self) -> usize {
        self.collected.len().saturating_sub(self.spent)
    }

    /// Number of keys used on doors.
    pub fn keys_spent(&self) -> usize {
        self.spent
    }

    /// Number of key cells visited.
    pub fn keys_collected(&self) -> usize {
        self.collected.len()
    }

    /// Number of distinct doors opened.
    pub fn doors_opened(&self) -> usize {
        self.opened.len()
    }
}

/// Reason why a move is refused.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Blocked {
    OutOfBounds,
    Wall,
    LockedDoor,
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Blocked::OutOfBounds => write!(f, "position out of bounds"),
            Blocked::Wall => write!(f, "cannot move through walls"),
            Blocked::LockedDoor => write!(f, "need a key to pass through door"),
        }
    }
}

/// Move one cell from `from` in the given direction.
///
/// Return the new position and the updated inventory, or the reason why the move is refused.
/// The provided inventory is not modified, which lets the search branch from the same state.
pub fn advance(
    grid: &Grid,
    layout: &Layout,
    door_rule: DoorRule,
    from: Position,
    direction: Direction,
    inventory: &Inventory,
) -> Result<(Position, Inventory), Blocked> {
    let to: Position = from.step(direction).ok_or(Blocked::OutOfBounds)?;
    let cell: Cell = grid.get(to).ok_or(Blocked::OutOfBounds)?;

    match cell {
        Cell::Wall => Err(Blocked::Wall),
        Cell::Door => {
            let Some(&door) = layout.doors.get(&to) else {
                return Ok((to, inventory.clone()));
            };
            if door_rule == DoorRule::StayOpen && inventory.opened.contains(door) {
                return Ok((to, inventory.clone()));
            }
            if inventory.keys_held() == 0 {
                return Err(Blocked::LockedDoor);
            }
            let mut next: Inventory = inventory.clone();
            next.opened.insert(door);
            next.spent += 1;
            Ok((to, next))
        }
        Cell::Key => match layout.keys.get(&to) {
            Some(&key) if !inventory.collected.contains(key) => {
                let mut next: Inventory = inventory.clone();
                next.collected.insert(key);
                Ok((to, next))
            }
            _ => Ok((to, inventory.clone())),
        },
        Cell::Empty | Cell::Start | Cell::End | Cell::Portal(_) => Ok((to, inventory.clone())),
    }
}
