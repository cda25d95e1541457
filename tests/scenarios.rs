/*
scenarios.rs

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

//! Puzzles played through the public API.

use mazegate::{
    Difficulty, DifficultyError, Failure, Grid, MazeGenerator, Move, PortalTable, Position,
    PuzzleDefinition, classify_grid, generate_puzzle, generate_puzzle_by_name, has_basic_path,
    is_solvable, validate_solution,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn moves(tokens: &[&str]) -> Vec<Move> {
    (0..)
        .zip(tokens)
        .map(|(i, token)| Move::new(token, 1000 + i * 250))
        .collect()
}

fn play(source: &str, start: Position, end: Position, tokens: &[&str]) -> (bool, String) {
    let grid = Grid::parse(source).expect("valid grid");
    let portals = PortalTable::from_grid(&grid);
    let result = validate_solution(&grid, start, end, &portals, &moves(tokens));
    (result.valid, result.message)
}

#[test]
fn single_row_without_obstacles() {
    let (valid, message) = play(
        "S . E",
        Position::new(0, 0),
        Position::new(0, 2),
        &["right", "right"],
    );
    assert!(valid);
    assert!(message.contains("Congratulations"));
    assert!(message.contains("2 moves"));
}

#[test]
fn wall_in_the_way() {
    let (valid, message) = play("S # E", Position::new(0, 0), Position::new(0, 2), &["right"]);
    assert!(!valid);
    assert!(message.contains("cannot move through walls"));
    assert!(message.starts_with("Invalid move at step 1"));
}

#[test]
fn key_then_door() {
    let (valid, _) = play(
        "S K D E",
        Position::new(0, 0),
        Position::new(0, 3),
        &["right", "right", "right"],
    );
    assert!(valid);

    let (valid, message) = play(
        "S D K E",
        Position::new(0, 0),
        Position::new(0, 3),
        &["right", "right", "right"],
    );
    assert!(!valid);
    assert!(message.contains("need a key to pass through door"));
}

#[test]
fn stepping_back_onto_an_opened_door_without_a_key() {
    let (valid, message) = play(
        "S K D . E",
        Position::new(0, 0),
        Position::new(0, 4),
        &["right", "right", "right", "left", "right", "right"],
    );
    assert!(!valid);
    assert_eq!(
        message,
        "Invalid move at step 4: need a key to pass through door"
    );
}

#[test]
fn success_message_counts_the_whole_list() {
    let (valid, message) = play(
        "S E .",
        Position::new(0, 0),
        Position::new(0, 1),
        &["right", "right", "left"],
    );
    assert!(valid);
    assert_eq!(message, "Congratulations! Maze completed in 3 moves!");
}

#[test]
fn unknown_direction_after_the_key() {
    let (valid, message) = play(
        "S K D E",
        Position::new(0, 0),
        Position::new(0, 3),
        &["right", "right", "north"],
    );
    assert!(!valid);
    assert_eq!(message, "Invalid move 'north' at step 3");
}

#[test]
fn portal_across_a_wall_row() {
    let (valid, message) = play(
        "S . P1\n# # #\nP1 . E",
        Position::new(0, 0),
        Position::new(2, 2),
        &["right", "right", "right", "right"],
    );
    assert!(valid, "{message}");
}

#[test]
fn no_moves() {
    for source in ["S . E", "S # E", "S K D E"] {
        let grid = Grid::parse(source).expect("valid grid");
        let end = Position::new(0, grid.cols() - 1);
        let result = validate_solution(&grid, Position::new(0, 0), end, &PortalTable::new(), &[]);
        assert!(!result.valid);
        assert_eq!(result.message, "Invalid submission: no moves provided");
        assert_eq!(result.failure, Some(Failure::NoMoves));
    }
}

#[test]
fn missing_the_goal() {
    let (valid, message) = play(
        "S . .\n. . E",
        Position::new(0, 0),
        Position::new(1, 2),
        &["right", "down"],
    );
    assert!(!valid);
    assert_eq!(
        message,
        "Did not reach the goal. Final position: (1, 1), Goal: (1, 2)"
    );
}

#[test]
fn reachability_versus_solvability() {
    let grid = Grid::parse("S D E\n# # #").expect("valid grid");
    let info = classify_grid(&grid);
    let (start, end) = (Position::new(0, 0), Position::new(0, 2));
    assert!(has_basic_path(&grid, start, end));
    assert!(!is_solvable(&grid, start, end, &info.keys, &info.doors));
}

#[test]
fn easy_puzzles_are_always_solvable() {
    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = generate_puzzle(Difficulty::Easy, "Easy", &mut rng);
        let info = classify_grid(&puzzle.grid);
        assert!(
            is_solvable(
                &puzzle.grid,
                puzzle.start_pos,
                puzzle.end_pos,
                &info.keys,
                &info.doors
            ),
            "seed {seed}:\n{}",
            puzzle.grid
        );
    }
}

#[test]
fn unknown_tier_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate_puzzle_by_name("impossible", "Nope", &mut rng),
        Err(DifficultyError::Unknown("impossible".to_string()))
    );
}

#[test]
fn generator_statistics() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut generator = MazeGenerator::new(Difficulty::Medium);
    let puzzle = generator.generate("Stats", &mut rng);
    let r = generator.rejections;
    let rejected = r.no_path + r.not_enough_room + r.unsolvable + r.unplayable;
    if generator.used_fallback {
        assert_eq!(rejected, generator.attempts);
    } else {
        assert_eq!(rejected + 1, generator.attempts);
        assert_eq!(puzzle.name, "Stats");
    }
    assert!(puzzle.is_solvable());
}

#[test]
fn puzzle_json_exchange() {
    let mut rng = StdRng::seed_from_u64(5);
    let puzzle = generate_puzzle(Difficulty::Hard, "Exchange", &mut rng);
    let json = serde_json::to_value(&puzzle).expect("serialize");
    assert_eq!(json["start_pos"], serde_json::json!([0, 0]));
    assert_eq!(json["grid"][0][0], "S");
    assert!(json["portal_pairs"].is_object());

    let mut back: PuzzleDefinition = serde_json::from_value(json).expect("deserialize");
    back.check().expect("valid definition");
    assert_eq!(back, puzzle);
}
