/*
cell.rs

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

//! Cell tags of a maze grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::grid::GridError;

/// Tag prefix shared by all the portal variants (`P`, `P1`, `P2`, ...).
pub const PORTAL_MARKER: &str = "P";

/// Representation of a maze cell.
///
/// - `Empty` is a floor cell (`.`).
/// - `Wall` cannot be crossed (`#`).
/// - `Start` and `End` are floor cells marking the player start and the goal (`S`, `E`).
/// - `Key` can be collected by walking on it (`K`).
/// - `Door` requires a key the first time it is crossed (`D`).
/// - `Portal` teleports the player to its partner (`P`, or `P<n>` with a pairing ID).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Key,
    Door,
    Portal(Option<u32>),
}

impl Cell {
    /// Whether the cell blocks the player.
    pub fn is_wall(&self) -> bool {
        *self == Cell::Wall
    }

    /// Whether the cell is a portal, numbered or not.
    pub fn is_portal(&self) -> bool {
        matches!(self, Cell::Portal(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Wall => write!(f, "#"),
            Cell::Start => write!(f, "S"),
            Cell::End => write!(f, "E"),
            Cell::Key => write!(f, "K"),
            Cell::Door => write!(f, "D"),
            Cell::Portal(None) => write!(f, "{PORTAL_MARKER}"),
            Cell::Portal(Some(id)) => write!(f, "{PORTAL_MARKER}{id}"),
        }
    }
}

impl FromStr for Cell {
    type Err = GridError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "." => Ok(Cell::Empty),
            "#" => Ok(Cell::Wall),
            "S" => Ok(Cell::Start),
            "E" => Ok(Cell::End),
            "K" => Ok(Cell::Key),
            "D" => Ok(Cell::Door),
            _ => {
                // Portals are matched on their prefix so that numbered variants are accepted
                let Some(suffix) = tag.strip_prefix(PORTAL_MARKER) else {
                    return Err(GridError::UnknownTag(tag.to_string()));
                };
                if suffix.is_empty() {
                    return Ok(Cell::Portal(None));
                }
                suffix
                    .parse::<u32>()
                    .map(|id| Cell::Portal(Some(id)))
                    .map_err(|_| GridError::UnknownTag(tag.to_string()))
            }
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = GridError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tags_need_an_exact_match() {
        assert_eq!("#".parse::<Cell>(), Ok(Cell::Wall));
        assert_eq!("D".parse::<Cell>(), Ok(Cell::Door));
        assert_eq!("K".parse::<Cell>(), Ok(Cell::Key));
        assert!("KK".parse::<Cell>().is_err());
        assert!("x".parse::<Cell>().is_err());
    }

    #[test]
    fn portal_tags_match_on_prefix() {
        assert_eq!("P".parse::<Cell>(), Ok(Cell::Portal(None)));
        assert_eq!("P1".parse::<Cell>(), Ok(Cell::Portal(Some(1))));
        assert_eq!("P12".parse::<Cell>(), Ok(Cell::Portal(Some(12))));
        assert_eq!(
            "Pz".parse::<Cell>(),
            Err(GridError::UnknownTag("Pz".to_string()))
        );
    }

    #[test]
    fn cells_serialize_as_their_tag() {
        let json = serde_json::to_string(&vec![Cell::Start, Cell::Portal(Some(3)), Cell::Wall])
            .expect("serialize");
        assert_eq!(json, r##"["S","P3","#"]"##);

        let cells: Vec<Cell> = serde_json::from_str(r#"[".","P","E"]"#).expect("deserialize");
        assert_eq!(cells, vec![Cell::Empty, Cell::Portal(None), Cell::End]);

        assert!(serde_json::from_str::<Cell>(r#""?""#).is_err());
    }
}
