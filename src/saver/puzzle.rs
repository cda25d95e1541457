/*
puzzle.rs

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

//! Save and restore puzzle definitions.
//!
//! The saved object is a serialization of the [`PuzzleDefinition`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::puzzle::PuzzleDefinition;

/// Object to save and restore a puzzle definition.
pub struct SaverPuzzle {
    /// Path to the puzzle file.
    save_file: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`PuzzleDefinition`] object from the puzzle file.
    ///
    /// The definition is verified with [`PuzzleDefinition::check`] before being returned.
    /// Return None if the puzzle file does not exist.
    pub fn get_puzzle(&self) -> Result<Option<PuzzleDefinition>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let mut puzzle: PuzzleDefinition = serde_json::from_reader(reader)?;
        puzzle.check()?;
        Ok(Some(puzzle))
    }

    /// Save the provided [`PuzzleDefinition`] object.
    pub fn save_puzzle(&self, puzzle: &PuzzleDefinition) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }
}
