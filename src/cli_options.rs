/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers creating puzzles for the catalogue.
//!
//! # Examples
//!
//! List the difficulty levels:
//!
//! ```
//! $ mazegate --ls
//! easy    5x5  walls=7  keys=1  doors=1  portals=0
//! medium  6x6  walls=12  keys=2  doors=2  portals=2
//! hard    7x7  walls=19  keys=3  doors=3  portals=4
//! ```
//!
//! Generate three hard puzzles and save them in `hard-1.json`, `hard-2.json`, and
//! `hard-3.json`:
//!
//! ```
//! $ mazegate -g -f hard -c 3 -o hard.json --summary
//! ```
//!
//! Replay a player's moves against a saved puzzle:
//!
//! ```
//! $ mazegate --validate hard-1.json --moves moves.json
//! ```

use clap::{CommandFactory, Parser};
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::env;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mazegate::attempt::AttemptOutcome;
use mazegate::config::COPYRIGHT_NOTICE;
use mazegate::generator::difficulty::Difficulty;
use mazegate::generator::random_maze::{MAX_ATTEMPTS, MazeGenerator};
use mazegate::puzzle::PuzzleDefinition;
use mazegate::saver::moves;
use mazegate::saver::puzzle::SaverPuzzle;
use mazegate::validator::Move;

/// Build and check Mazegate puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the difficulty levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Generate random puzzles
    #[arg(short, long, default_value_t = false, group = "action")]
    generate: bool,

    /// Difficulty level for the generated puzzles
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium, requires = "generate")]
    difficulty: Difficulty,

    /// Name given to the generated puzzles
    #[arg(short, long, default_value = "Random maze", requires = "generate")]
    name: String,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Seed for the random generator, for reproducible puzzles
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Save the puzzles in this file instead of printing them. With several puzzles, their
    /// number is appended to the file name.
    #[arg(short, long, requires = "generate")]
    output: Option<PathBuf>,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Puzzle file to replay the moves against
    #[arg(long, value_name = "PUZZLE", group = "action")]
    validate: Option<PathBuf>,

    /// JSON file with the moves. The standard input is read if omitted
    #[arg(short, long, value_name = "FILE", requires = "validate")]
    moves: Option<PathBuf>,

    /// Describe the content of a puzzle file
    #[arg(short, long, value_name = "PUZZLE", group = "action")]
    info: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> ExitCode {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the action selected by the options.
fn run(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
    if args.ls {
        list_levels();
        return Ok(ExitCode::SUCCESS);
    }
    if args.generate {
        return generate(args);
    }
    if let Some(puzzle_file) = &args.validate {
        return validate(puzzle_file, args.moves.as_deref());
    }
    if let Some(puzzle_file) = &args.info {
        return info(puzzle_file);
    }
    Args::command().print_help()?;
    Ok(ExitCode::from(2))
}

/// Print the generation parameters of every difficulty level.
fn list_levels() {
    for d in Difficulty::all() {
        let c = d.config();
        println!(
            "{:<7} {}x{}  walls={}  keys={}  doors={}  portals={}",
            d.to_string().to_lowercase(),
            c.size,
            c.size,
            c.num_walls(),
            c.keys,
            c.doors,
            c.portals
        );
    }
}

/// Return the file for the puzzle number `i` (starting at 1) when `count` puzzles are saved.
fn numbered_file(output: &Path, i: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return output.to_path_buf();
    }
    let stem: String = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match output.extension() {
        Some(ext) => output.with_file_name(format!("{stem}-{i}.{}", ext.to_string_lossy())),
        None => output.with_file_name(format!("{stem}-{i}")),
    }
}

/// Generate the requested puzzles.
fn generate(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };
    let mut generator: MazeGenerator = MazeGenerator::new(args.difficulty);

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut fallbacks: usize = 0;
    let mut no_path: usize = 0;
    let mut not_enough_room: usize = 0;
    let mut unsolvable: usize = 0;
    let mut unplayable: usize = 0;

    for i in 1..=args.count {
        debug!("Puzzle {i}");

        let puzzle: PuzzleDefinition = generator.generate(&args.name, rng.as_mut());
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        attempts += generator.attempts;
        if generator.used_fallback {
            fallbacks += 1;
        }
        no_path += generator.rejections.no_path;
        not_enough_room += generator.rejections.not_enough_room;
        unsolvable += generator.rejections.unsolvable;
        unplayable += generator.rejections.unplayable;

        match &args.output {
            Some(output) => {
                let path: PathBuf = numbered_file(output, i, args.count);
                SaverPuzzle::new(path.clone()).save_puzzle(&puzzle)?;
                println!("{}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&puzzle)?),
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {} (max {MAX_ATTEMPTS})
         fallbacks = {}
 rejected: no path = {}
   rejected: items = {}
 rejected: locked  = {}
 rejected: play    = {}",
            total,
            total / args.count as f32,
            max,
            attempts / args.count,
            fallbacks,
            no_path,
            not_enough_room,
            unsolvable,
            unplayable
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Read a puzzle file. A missing file is an error here.
fn load_puzzle(puzzle_file: &Path) -> Result<PuzzleDefinition, Box<dyn Error>> {
    SaverPuzzle::new(puzzle_file.to_path_buf())
        .get_puzzle()?
        .ok_or_else(|| format!("{}: no such file", puzzle_file.display()).into())
}

/// Replay the moves against the puzzle and print the outcome.
///
/// The exit code is 1 when the moves do not solve the puzzle.
fn validate(puzzle_file: &Path, moves_file: Option<&Path>) -> Result<ExitCode, Box<dyn Error>> {
    let puzzle: PuzzleDefinition = load_puzzle(puzzle_file)?;
    let moves: Vec<Move> = match moves_file {
        Some(path) => moves::load_moves(path)?,
        None => moves::read_moves(io::stdin().lock())?,
    };

    let outcome: AttemptOutcome = AttemptOutcome::evaluate(&puzzle, &moves);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    if outcome.is_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print the content of a puzzle file.
fn info(puzzle_file: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let puzzle: PuzzleDefinition = load_puzzle(puzzle_file)?;

    println!("{}: {}", puzzle.name, puzzle.description);
    print!("{}", puzzle.grid);
    println!("start = {}  end = {}", puzzle.start_pos, puzzle.end_pos);
    for (id, [first, second]) in puzzle.portal_pairs.iter() {
        println!("portal {id}: {first} <-> {second}");
    }
    println!("rating = {}", puzzle.difficulty_rating());
    println!("solvable = {}", puzzle.is_solvable());
    println!("{}", serde_json::to_string_pretty(&puzzle.info())?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_files() {
        let out = PathBuf::from("/tmp/hard.json");
        assert_eq!(numbered_file(&out, 1, 1), out);
        assert_eq!(numbered_file(&out, 2, 3), PathBuf::from("/tmp/hard-2.json"));
        assert_eq!(
            numbered_file(Path::new("maze"), 3, 3),
            PathBuf::from("maze-3")
        );
    }

    #[test]
    fn arguments() {
        Args::command().debug_assert();
        let args = Args::parse_from(["mazegate", "-g", "-f", "hard", "--seed", "4"]);
        assert!(args.generate);
        assert_eq!(args.difficulty, Difficulty::Hard);
        assert_eq!(args.seed, Some(4));
        assert_eq!(args.count, 1);
        assert!(Args::try_parse_from(["mazegate", "--moves", "m.json"]).is_err());
    }
}
