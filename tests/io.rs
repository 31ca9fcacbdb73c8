//! Validates the arrangement encoding contract, board rendering, and CLI
//! argument handling

use clap::Parser;
use hexmatch::PuzzleError;
use hexmatch::algorithm::solver::solve;
use hexmatch::io::cli::Cli;
use hexmatch::io::render::{encode, render_arrangement, render_board};
use hexmatch::spatial::board::{Board, Placed, Slot};
use hexmatch::spatial::tile::{Tile, TileSet};
use std::time::Duration;

fn tile(borders: [u8; 6]) -> Tile {
    Tile::new(borders).unwrap()
}

fn solvable_set() -> TileSet {
    TileSet::new([
        tile([1, 2, 3, 4, 5, 6]),
        tile([3, 4, 5, 1, 2, 6]),
        tile([1, 3, 4, 6, 2, 5]),
        tile([6, 1, 2, 4, 5, 3]),
        tile([4, 5, 2, 6, 1, 3]),
        tile([1, 5, 3, 2, 4, 6]),
        tile([3, 2, 6, 1, 4, 5]),
    ])
}

#[test]
fn test_encoding_is_exact_and_reproducible() {
    let arrangement = solve(&solvable_set()).unwrap();

    // Per slot in visiting order: tile id digit, then six border digits
    let expected = concat!(
        "0123456", // center
        "1345126", // north
        "2134625", // northeast
        "3612453", // southeast
        "4452613", // south
        "5153246", // southwest
        "6326145", // northwest
    );
    assert_eq!(encode(&arrangement), expected);
    assert_eq!(encode(&arrangement), encode(&arrangement));
}

#[test]
fn test_render_draws_every_placed_tile() {
    let arrangement = solve(&solvable_set()).unwrap();
    let rendered = render_arrangement(&arrangement);

    assert_eq!(rendered.lines().count(), 15);
    assert!(rendered.contains('/'));
    assert!(rendered.contains('\\'));
    assert!(rendered.contains('_'));

    // No placeholder letters may survive substitution
    for placeholder in ['a', 'b', 'c', 'd', 'e', 'f', 'i'] {
        assert!(!rendered.contains(placeholder));
    }
}

#[test]
fn test_render_of_empty_board_is_blank() {
    let rendered = render_board(&Board::new());
    assert_eq!(rendered.lines().count(), 15);
    assert!(rendered.chars().all(|c| c == '\n'));
}

#[test]
fn test_partial_board_renders_only_filled_slots() {
    let tiles = solvable_set();
    let mut board = Board::new();
    board.place(Slot::Center, Placed::new(0, 0, *tiles.tile(0).unwrap()));

    let rendered = render_board(&board);
    assert!(rendered.contains('/'));
    // Exactly one hexagon means exactly one tile id digit zero
    assert_eq!(rendered.matches('0').count(), 1);
}

#[test]
fn test_cli_defaults_and_parsing() {
    let defaults = Cli::try_parse_from(["hexmatch"]).unwrap();
    assert!((defaults.frame_time - 1.0).abs() < f64::EPSILON);
    assert_eq!(defaults.seed, 42);
    assert!(!defaults.animate);
    assert!(!defaults.quiet);

    let parsed =
        Cli::try_parse_from(["hexmatch", "0.5", "--seed", "7", "--animate", "--quiet"]).unwrap();
    assert!((parsed.frame_time - 0.5).abs() < f64::EPSILON);
    assert_eq!(parsed.seed, 7);
    assert!(parsed.animate);
    assert!(parsed.quiet);
    assert!(!parsed.should_show_progress());
}

#[test]
fn test_frame_time_validation() {
    let valid = Cli::try_parse_from(["hexmatch", "0.5"]).unwrap();
    assert_eq!(valid.frame_duration().unwrap(), Duration::from_millis(500));

    let too_long = Cli::try_parse_from(["hexmatch", "9.0"]).unwrap();
    let err = too_long.frame_duration().unwrap_err();
    assert!(matches!(
        err,
        PuzzleError::InvalidParameter {
            parameter: "frame_time",
            ..
        }
    ));

    let negative = Cli::try_parse_from(["hexmatch", "--", "-1.0"]).unwrap();
    assert!(negative.frame_duration().is_err());
}
