/*
portals.rs

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

//! Portal pairing.
//!
//! A [`PortalTable`] maps a pair identifier to the two positions of the pair.
//! Serialized in JSON as an object such as `{"1": [[0, 2], [2, 0]]}`.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cell::Cell;
use super::grid::Grid;
use super::position::Position;

/// Table of the portal pairs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PortalTable {
    pairs: BTreeMap<u32, [Position; 2]>,
}

impl PortalTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            pairs: BTreeMap::new(),
        }
    }

    /// Add or replace a pair.
    pub fn insert(&mut self, id: u32, first: Position, second: Position) {
        self.pairs.insert(id, [first, second]);
    }

    /// Build the table from the portal cells of a grid.
    ///
    /// Numbered portals (`P1`, `P2`, ...) are paired by identifier.
    /// Unnumbered portals (`P`) are paired two by two in row-major order, and receive identifiers
    /// that follow the highest numbered one.
    /// A group that does not have exactly two cells stays unpaired.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut numbered: BTreeMap<u32, Vec<Position>> = BTreeMap::new();
        let mut legacy: Vec<Position> = Vec::new();

        for (pos, cell) in grid.iter() {
            match cell {
                Cell::Portal(Some(id)) => numbered.entry(id).or_default().push(pos),
                Cell::Portal(None) => legacy.push(pos),
                _ => (),
            }
        }

        let mut table: PortalTable = PortalTable::new();
        for (id, positions) in &numbered {
            if let [first, second] = positions.as_slice() {
                table.insert(*id, *first, *second);
            } else {
                warn!(
                    "Portal {id} has {} cells instead of 2: left unpaired",
                    positions.len()
                );
            }
        }

        let mut next_id: u32 = numbered.keys().next_back().map_or(1, |id| id + 1);
        let mut chunks = legacy.chunks_exact(2);
        for pair in chunks.by_ref() {
            table.insert(next_id, pair[0], pair[1]);
            next_id += 1;
        }
        if let [orphan] = chunks.remainder() {
            warn!("Portal at {orphan} has no partner: left unpaired");
        }
        table
    }

    /// Return the partner of the portal at the given position.
    pub fn partner(&self, pos: Position) -> Option<Position> {
        self.pairs.values().find_map(|[first, second]| {
            if *first == pos {
                Some(*second)
            } else if *second == pos {
                Some(*first)
            } else {
                None
            }
        })
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no pair.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, [Position; 2])> + '_ {
        self.pairs.iter().map(|(id, pair)| (*id, *pair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_portals_pair_by_id() {
        let grid = Grid::parse(
            "
            S P2 P1
            # # #
            P1 P2 E
            ",
        )
        .expect("valid grid");
        let table = PortalTable::from_grid(&grid);
        assert_eq!(table.len(), 2);
        assert_eq!(table.partner(Position::new(0, 2)), Some(Position::new(2, 0)));
        assert_eq!(table.partner(Position::new(2, 0)), Some(Position::new(0, 2)));
        assert_eq!(table.partner(Position::new(0, 1)), Some(Position::new(2, 1)));
        assert_eq!(table.partner(Position::new(0, 0)), None);
    }

    #[test]
    fn legacy_portals_pair_in_scan_order() {
        let grid = Grid::parse(
            "
            S P . P
            P . P1 E
            P1 . . P
            ",
        )
        .expect("valid grid");
        let table = PortalTable::from_grid(&grid);
        // P1 keeps its id, the unnumbered ones get 2 and 3
        assert_eq!(table.len(), 3);
        assert_eq!(table.partner(Position::new(1, 2)), Some(Position::new(2, 0)));
        assert_eq!(table.partner(Position::new(0, 1)), Some(Position::new(0, 3)));
        assert_eq!(table.partner(Position::new(1, 0)), Some(Position::new(2, 3)));
        let ids: Vec<u32> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn unmatched_numbered_portal_is_left_out() {
        let grid = Grid::parse("S P4 . P4 P4 E").expect("valid grid");
        assert!(PortalTable::from_grid(&grid).is_empty());
    }

    #[test]
    fn json_matches_portal_pairs_format() {
        let table: PortalTable =
            serde_json::from_str(r#"{"1": [[0, 2], [2, 0]]}"#).expect("deserialize");
        assert_eq!(table.partner(Position::new(0, 2)), Some(Position::new(2, 0)));
        let json = serde_json::to_string(&table).expect("serialize");
        assert_eq!(json, r#"{"1":[[0,2],[2,0]]}"#);
    }
}
