//! Backtracking search over the seven board slots
//!
//! Slots are filled in the fixed visiting order. At each depth every tile not
//! yet on the board is tried: the tile is spun through its orientations until
//! one satisfies the depth's touching-edge contacts, the short-circuit and
//! duplicate-border predicates prune hopeless branches, and success
//! propagates back up through return values, so a found arrangement unwinds
//! the whole search immediately.
//!
//! Because every tile carries six pairwise-distinct borders, at most one
//! orientation can satisfy a contact involving a fixed neighbor edge, so the
//! first fitting orientation is the only one worth descending into. The
//! center tile is placed unrotated; spinning it only reproduces whole-board
//! rotations the slot enumeration already covers.

use crate::algorithm::constraints;
use crate::spatial::board::{Arrangement, Board, Placed, SLOT_COUNT, Slot};
use crate::spatial::tile::{EDGE_COUNT, Tile, TileSet};

/// Whether the tile set admits any valid arrangement
pub fn is_solvable(tiles: &TileSet) -> bool {
    solve(tiles).is_some()
}

/// Search for a valid arrangement of the tile set
///
/// Returns the first arrangement found, with each placement carrying the
/// orientation that satisfies every adjacency contact, or `None` when the
/// search space is exhausted. The set itself is never modified, so repeated
/// calls return the same result.
pub fn solve(tiles: &TileSet) -> Option<Arrangement> {
    solve_traced(tiles, |_| {})
}

/// Search for a valid arrangement, reporting every tentative placement
///
/// The observer sees the board after each tentative placement (including each
/// rotation attempt), which is enough to replay the search visually. Solving
/// behavior is otherwise identical to [`solve`].
pub fn solve_traced<F>(tiles: &TileSet, observer: F) -> Option<Arrangement>
where
    F: FnMut(&Board),
{
    let mut search = Search {
        tiles,
        board: Board::new(),
        observer,
    };
    let found = search.descend(0);
    found.then(|| search.board.arrangement()).flatten()
}

struct Search<'a, F> {
    tiles: &'a TileSet,
    board: Board,
    observer: F,
}

impl<F: FnMut(&Board)> Search<'_, F> {
    /// Try every unplaced tile at the slot for this depth
    ///
    /// Returns true once the board holds a complete valid arrangement; the
    /// board is left fully populated in that case. On false the slot is
    /// empty again and no sibling branch sees stale state.
    fn descend(&mut self, depth: usize) -> bool {
        let Some(&slot) = Slot::VISITING_ORDER.get(depth) else {
            return false;
        };

        for (id, &tile) in self.tiles.tiles().iter().enumerate() {
            if self.board.contains_tile(id) {
                continue;
            }

            if !self.place_fitting(slot, depth, id, tile) {
                continue;
            }

            if !constraints::creates_duplicate(&self.board, depth) {
                if depth + 1 == SLOT_COUNT {
                    return true;
                }
                if self.descend(depth + 1) {
                    return true;
                }
            }

            self.board.clear(slot);
        }

        false
    }

    /// Place the tile in the first orientation that fits this slot
    ///
    /// The center accepts any tile unrotated. Outer slots spin the tile until
    /// its contacts match, abandoning it early when the short-circuit
    /// predicate proves no orientation can work. On success the placement is
    /// left on the board; on failure the slot is cleared.
    fn place_fitting(&mut self, slot: Slot, depth: usize, id: usize, tile: Tile) -> bool {
        if depth == 0 {
            self.board.place(slot, Placed::new(id, 0, tile));
            (self.observer)(&self.board);
            return true;
        }

        for rotation in 0..EDGE_COUNT as u8 {
            self.board.place(slot, Placed::new(id, rotation, tile));
            (self.observer)(&self.board);
            if constraints::fits(&self.board, depth) {
                return true;
            }
            if constraints::can_short_circuit(&self.board, depth) {
                break;
            }
        }

        self.board.clear(slot);
        false
    }
}
