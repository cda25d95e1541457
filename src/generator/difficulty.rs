/*
difficulty.rs

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

//! Difficulty levels and their generation parameters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

/// Type of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    /// The name is not a difficulty level.
    Unknown(String),
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DifficultyError::Unknown(name) => write!(
                f,
                "unknown difficulty '{name}': must be 'easy', 'medium', or 'hard'"
            ),
        }
    }
}

impl Error for DifficultyError {}

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Generation parameters of a difficulty level.
#[derive(Debug, Clone, PartialEq)]
pub struct TierConfig {
    /// Number of rows and columns of the square grid.
    pub size: usize,

    /// Fraction of the cells that become walls.
    pub wall_density: f64,

    pub keys: usize,
    pub doors: usize,

    /// Number of portal cells. Always even, portals come in pairs.
    pub portals: usize,

    /// Description given to the generated puzzles.
    pub description: &'static str,
}

impl TierConfig {
    /// Number of walls to place: `floor(size² × density)`.
    pub fn num_walls(&self) -> usize {
        ((self.size * self.size) as f64 * self.wall_density).floor() as usize
    }

    /// Number of cells needed for the keys, doors, and portals.
    pub fn num_items(&self) -> usize {
        self.keys + self.doors + self.portals
    }
}

const EASY: TierConfig = TierConfig {
    size: 5,
    wall_density: 0.3,
    keys: 1,
    doors: 1,
    portals: 0,
    description: "A gentle introduction to maze solving. Find the key and reach the exit!",
};

const MEDIUM: TierConfig = TierConfig {
    size: 6,
    wall_density: 0.35,
    keys: 2,
    doors: 2,
    portals: 2,
    description: "Navigate portals and collect keys to unlock your path to freedom!",
};

const HARD: TierConfig = TierConfig {
    size: 7,
    wall_density: 0.4,
    keys: 3,
    doors: 3,
    portals: 4,
    description: "A complex maze with multiple keys, doors, and portals. Master the challenge!",
};

impl Difficulty {
    /// Iterate over all the difficulty levels, from the easiest.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (0u8..).map_while(Difficulty::from_repr)
    }

    /// Return the generation parameters.
    pub fn config(&self) -> &'static TierConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Parse a difficulty name. The case is ignored.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyError::Unknown(name.to_string())),
        }
    }
}
