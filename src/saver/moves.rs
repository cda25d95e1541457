/*
moves.rs

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

//! Read the moves submitted by a player.
//!
//! The file is a JSON array of moves, such as
//! `[{"action": "right", "timestamp": 1000}, {"action": "down", "timestamp": 1500}]`.
//! A plain array of action tokens (`["right", "down"]`) is also accepted. In that case the moves
//! are given timestamps one second apart.

use log::debug;
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::validator::Move;

/// Accepted move list formats.
#[derive(Deserialize)]
#[serde(untagged)]
enum MoveList {
    Timed(Vec<Move>),
    Tokens(Vec<String>),
}

impl From<MoveList> for Vec<Move> {
    fn from(list: MoveList) -> Self {
        match list {
            MoveList::Timed(moves) => moves,
            MoveList::Tokens(tokens) => (0..)
                .zip(tokens)
                .map(|(i, action)| Move {
                    action,
                    timestamp: i * 1000,
                })
                .collect(),
        }
    }
}

/// Parse a move list from a reader.
pub fn read_moves<R: Read>(reader: R) -> Result<Vec<Move>, Box<dyn Error>> {
    let list: MoveList = serde_json::from_reader(reader)?;
    let moves: Vec<Move> = list.into();
    debug!("{} moves read", moves.len());
    Ok(moves)
}

/// Load a move list from a file.
pub fn load_moves(path: &Path) -> Result<Vec<Move>, Box<dyn Error>> {
    let file: File = File::open(path)?;
    read_moves(BufReader::new(file))
}
