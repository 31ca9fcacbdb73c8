//! Validates tile rotation behavior, construction preconditions, and board
//! backtracking discipline

use hexmatch::PuzzleError;
use hexmatch::spatial::board::{Board, Placed, Slot};
use hexmatch::spatial::tile::{Tile, TileSet};

fn tile(borders: [u8; 6]) -> Tile {
    Tile::new(borders).unwrap()
}

#[test]
fn test_rotation_shifts_left_by_one() {
    let rotated = tile([1, 2, 3, 4, 5, 6]).rotated();
    assert_eq!(rotated.borders(), [2, 3, 4, 5, 6, 1]);
}

#[test]
fn test_rotation_is_cyclic_of_order_six() {
    let original = tile([4, 2, 6, 1, 3, 5]);

    let mut spun = original;
    for turn in 1..=6 {
        spun = spun.rotated();
        if turn < 6 {
            assert_ne!(spun, original, "returned early after {turn} turns");
        }
    }
    assert_eq!(spun, original);
}

#[test]
fn test_oriented_matches_repeated_rotation() {
    let original = tile([2, 5, 1, 6, 4, 3]);

    let mut spun = original;
    for rotation in 0..6 {
        assert_eq!(original.oriented(rotation), spun);
        spun = spun.rotated();
    }

    // Rotation counts wrap modulo six
    assert_eq!(original.oriented(6), original);
    assert_eq!(original.oriented(7), original.rotated());
}

#[test]
fn test_border_lookup_wraps() {
    let sample = tile([1, 2, 3, 4, 5, 6]);
    assert_eq!(sample.border(0), 1);
    assert_eq!(sample.border(5), 6);
    assert_eq!(sample.border(6), 1);
}

#[test]
fn test_rotation_equivalence() {
    let original = tile([1, 3, 5, 2, 4, 6]);
    let spun_twice = original.rotated().rotated();
    let reordered = tile([1, 3, 5, 2, 6, 4]);

    assert!(spun_twice.is_rotation_of(&original));
    assert!(original.is_rotation_of(&spun_twice));
    assert!(original.is_rotation_of(&original));
    assert!(!reordered.is_rotation_of(&original));
}

#[test]
fn test_tile_rejects_out_of_range_borders() {
    let too_small = Tile::new([0, 2, 3, 4, 5, 6]).unwrap_err();
    assert!(matches!(
        too_small,
        PuzzleError::BorderOutOfRange { edge: 0, value: 0 }
    ));

    let too_large = Tile::new([1, 2, 3, 4, 5, 7]).unwrap_err();
    assert!(matches!(
        too_large,
        PuzzleError::BorderOutOfRange { edge: 5, value: 7 }
    ));
}

#[test]
fn test_tile_rejects_wrong_border_count() {
    let err = Tile::from_slice(&[1, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        PuzzleError::InvalidBorderCount {
            expected: 6,
            actual: 3
        }
    ));

    assert!(Tile::from_slice(&[1, 2, 3, 4, 5, 6]).is_ok());
}

#[test]
fn test_tile_set_rejects_wrong_tile_count() {
    let short = vec![tile([1, 2, 3, 4, 5, 6]); 6];
    let err = TileSet::from_tiles(short).unwrap_err();
    assert!(matches!(
        err,
        PuzzleError::InvalidTileCount {
            expected: 7,
            actual: 6
        }
    ));

    let full = vec![tile([1, 2, 3, 4, 5, 6]); 7];
    assert!(TileSet::from_tiles(full).is_ok());
}

#[test]
fn test_board_clears_without_leaking_state() {
    let mut board = Board::new();
    let placed = Placed::new(3, 2, tile([1, 2, 3, 4, 5, 6]));

    board.place(Slot::North, placed);
    assert!(board.contains_tile(3));
    assert_eq!(board.border(Slot::North, 0), Some(3));

    board.clear(Slot::North);
    assert!(!board.contains_tile(3));
    assert_eq!(board.placement(Slot::North), None);
    assert_eq!(board.border(Slot::North, 0), None);
}

#[test]
fn test_placed_carries_oriented_borders() {
    let placed = Placed::new(0, 1, tile([1, 2, 3, 4, 5, 6]));
    assert_eq!(placed.oriented().borders(), [2, 3, 4, 5, 6, 1]);
    assert_eq!(placed.border(0), 2);
    assert_eq!(placed.rotation, 1);
}

#[test]
fn test_arrangement_requires_full_board() {
    let mut board = Board::new();
    assert!(board.arrangement().is_none());

    for (id, &slot) in Slot::VISITING_ORDER.iter().enumerate() {
        board.place(slot, Placed::new(id, 0, tile([1, 2, 3, 4, 5, 6])));
    }

    let arrangement = board.arrangement().unwrap();
    let slots: Vec<Slot> = arrangement
        .placements()
        .iter()
        .map(|(slot, _)| *slot)
        .collect();
    assert_eq!(slots, Slot::VISITING_ORDER);

    let ids: Vec<usize> = arrangement
        .placements()
        .iter()
        .map(|(_, placed)| placed.tile)
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
}
