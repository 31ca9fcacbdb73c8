//! Hexagonal tile primitives and the cyclic rotation engine
//!
//! A tile carries one border number per edge. Two tiles placed side by side
//! fit only when the touching edges carry equal numbers, so the solver spins
//! tiles through their six orientations looking for agreement. Rotation here
//! is pure: rotating never touches the original tile, which keeps backtracking
//! undo down to dropping a placement.

use crate::io::configuration::{BORDER_MAX, BORDER_MIN};
use crate::io::error::{PuzzleError, Result};

/// Number of edges (and border numbers) per hexagonal tile
pub const EDGE_COUNT: usize = 6;

/// Number of tiles in a puzzle instance (one per board slot)
pub const TILE_COUNT: usize = 7;

/// A hexagonal puzzle piece with one border number per edge
///
/// Edges are indexed 0..6 clockwise from the top edge. Border numbers are
/// validated into `BORDER_MIN..=BORDER_MAX` at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    borders: [u8; EDGE_COUNT],
}

impl Tile {
    /// Create a tile from six border numbers
    ///
    /// # Errors
    ///
    /// Returns `BorderOutOfRange` if any border number falls outside
    /// `BORDER_MIN..=BORDER_MAX`.
    pub fn new(borders: [u8; EDGE_COUNT]) -> Result<Self> {
        for (edge, &value) in borders.iter().enumerate() {
            if !(BORDER_MIN..=BORDER_MAX).contains(&value) {
                return Err(PuzzleError::BorderOutOfRange { edge, value });
            }
        }
        Ok(Self { borders })
    }

    /// Create a tile from a slice of border numbers
    ///
    /// # Errors
    ///
    /// Returns `InvalidBorderCount` if the slice does not hold exactly six
    /// values, or `BorderOutOfRange` for values outside the valid range.
    pub fn from_slice(values: &[u8]) -> Result<Self> {
        let borders: [u8; EDGE_COUNT] =
            values
                .try_into()
                .map_err(|_| PuzzleError::InvalidBorderCount {
                    expected: EDGE_COUNT,
                    actual: values.len(),
                })?;
        Self::new(borders)
    }

    /// The six border numbers in edge order
    pub const fn borders(&self) -> [u8; EDGE_COUNT] {
        self.borders
    }

    /// The border number on one edge (edge indices wrap modulo six)
    pub const fn border(&self, edge: usize) -> u8 {
        let [top, upper_right, lower_right, bottom, lower_left, upper_left] = self.borders;
        match edge % EDGE_COUNT {
            0 => top,
            1 => upper_right,
            2 => lower_right,
            3 => bottom,
            4 => lower_left,
            _ => upper_left,
        }
    }

    /// The tile turned by one edge: `rotated[i] == self[(i + 1) % 6]`
    ///
    /// Six applications return the original sequence (rotation forms a cyclic
    /// group of order six).
    pub const fn rotated(self) -> Self {
        let [a, b, c, d, e, f] = self.borders;
        Self {
            borders: [b, c, d, e, f, a],
        }
    }

    /// The tile turned by `rotation` edges (taken modulo six)
    pub const fn oriented(self, rotation: u8) -> Self {
        let mut tile = self;
        let mut remaining = rotation % (EDGE_COUNT as u8);
        while remaining > 0 {
            tile = tile.rotated();
            remaining -= 1;
        }
        tile
    }

    /// Whether some orientation of `self` has the same border sequence as `other`
    ///
    /// This is the equivalence the generator enforces between distinct tiles:
    /// two tiles related by rotation are the same physical piece.
    pub fn is_rotation_of(&self, other: &Self) -> bool {
        let mut candidate = *self;
        (0..EDGE_COUNT).any(|_| {
            candidate = candidate.rotated();
            candidate == *other
        })
    }
}

/// The seven tiles of one puzzle instance, indexed by tile id 0..7
///
/// Tile ids are stable for the lifetime of the instance. The set is never
/// mutated by the solver; orientations live on board placements instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    tiles: [Tile; TILE_COUNT],
}

impl TileSet {
    /// Create a set directly from seven tiles
    pub const fn new(tiles: [Tile; TILE_COUNT]) -> Self {
        Self { tiles }
    }

    /// Create a set from a vector of tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileCount` if the vector does not hold exactly seven
    /// tiles.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        let actual = tiles.len();
        let tiles: [Tile; TILE_COUNT] = tiles
            .try_into()
            .map_err(|_| PuzzleError::InvalidTileCount {
                expected: TILE_COUNT,
                actual,
            })?;
        Ok(Self::new(tiles))
    }

    /// The tile with the given id, if the id is in range
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// All tiles in id order
    pub const fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }
}
