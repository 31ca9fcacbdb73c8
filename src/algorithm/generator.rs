//! Random tile-set generation with a rotation-uniqueness guarantee
//!
//! Each tile receives the six border values in random order, so borders are
//! pairwise distinct by construction. A candidate whose border sequence is a
//! rotation of an earlier tile's sequence would be the same physical piece
//! twice; such candidates are discarded and redrawn. Regeneration is bounded
//! rather than open-ended so a misconfigured value range surfaces as an error
//! instead of a hang.

use crate::io::configuration::{BORDER_MIN, MAX_TILE_REGENERATIONS};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::tile::{EDGE_COUNT, TILE_COUNT, Tile, TileSet};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a random seven-tile puzzle instance
///
/// Every tile holds the values `BORDER_MIN..=BORDER_MAX` in uniformly random
/// order, and no tile's border sequence is a cyclic rotation of another's.
///
/// # Errors
///
/// Returns `GenerationExhausted` if a tile cannot be made rotation-unique
/// within `MAX_TILE_REGENERATIONS` redraws. With six distinct border values
/// there are 120 rotation classes for 7 tiles, so in practice the cap is
/// never approached.
pub fn generate<R: Rng>(rng: &mut R) -> Result<TileSet> {
    let mut tiles: Vec<Tile> = Vec::with_capacity(TILE_COUNT);

    while tiles.len() < TILE_COUNT {
        tiles.push(unique_tile(rng, &tiles)?);
    }

    TileSet::from_tiles(tiles)
}

/// Draw tiles until one is rotation-distinct from everything drawn so far
fn unique_tile<R: Rng>(rng: &mut R, earlier: &[Tile]) -> Result<Tile> {
    for _ in 0..MAX_TILE_REGENERATIONS {
        let candidate = random_tile(rng)?;
        if !earlier.iter().any(|tile| candidate.is_rotation_of(tile)) {
            return Ok(candidate);
        }
    }

    Err(PuzzleError::GenerationExhausted {
        attempts: MAX_TILE_REGENERATIONS,
    })
}

/// A single tile with the full border value range in random order
fn random_tile<R: Rng>(rng: &mut R) -> Result<Tile> {
    let mut borders: [u8; EDGE_COUNT] = std::array::from_fn(|i| BORDER_MIN + i as u8);
    borders.shuffle(rng);
    Tile::new(borders)
}
