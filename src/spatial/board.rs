//! Board slots, placements, and the arrangement result type
//!
//! The board is the solver's only mutable state: seven slots, each either
//! empty or holding a tile in a specific orientation. Slots are visited in a
//! fixed order (center first, then the six neighbors clockwise from north),
//! and during a search the filled slots always form a contiguous prefix of
//! that order.

use crate::spatial::tile::{TILE_COUNT, Tile};

/// Number of board slots (center plus six neighbors)
pub const SLOT_COUNT: usize = TILE_COUNT;

/// One of the seven fixed board positions
///
/// Declaration order is the solver's visiting order. The center touches all
/// six outer slots; consecutive outer slots touch each other, closing the
/// ring at northwest–north.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Middle of the board, adjacent to every outer slot
    Center,
    /// Outer slot above the center
    North,
    /// Outer slot up and to the right
    NorthEast,
    /// Outer slot down and to the right
    SouthEast,
    /// Outer slot below the center
    South,
    /// Outer slot down and to the left
    SouthWest,
    /// Outer slot up and to the left
    NorthWest,
}

impl Slot {
    /// All slots in the solver's visiting order
    pub const VISITING_ORDER: [Self; SLOT_COUNT] = [
        Self::Center,
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Position of this slot in the visiting order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name for user-facing output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::NorthWest => "northwest",
        }
    }
}

/// A tile committed to a slot in a specific orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placed {
    /// Id of the placed tile within its set
    pub tile: usize,
    /// Number of clockwise rotations applied to the tile's base sequence
    pub rotation: u8,
    oriented: Tile,
}

impl Placed {
    /// Place a tile by id, recording the oriented border sequence
    pub const fn new(tile: usize, rotation: u8, base: Tile) -> Self {
        Self {
            tile,
            rotation,
            oriented: base.oriented(rotation),
        }
    }

    /// The border number on one edge of the tile as placed
    pub const fn border(&self, edge: usize) -> u8 {
        self.oriented.border(edge)
    }

    /// The tile in its placed orientation
    pub const fn oriented(&self) -> Tile {
        self.oriented
    }
}

/// Mutable slot-to-placement mapping owned by the solver during a search
#[derive(Clone, Debug, Default)]
pub struct Board {
    slots: [Option<Placed>; SLOT_COUNT],
}

impl Board {
    /// An empty board
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    /// Put a placement into a slot, replacing any previous occupant
    pub fn place(&mut self, slot: Slot, placed: Placed) {
        if let Some(cell) = self.slots.get_mut(slot.index()) {
            *cell = Some(placed);
        }
    }

    /// Empty a slot (backtracking undo)
    pub fn clear(&mut self, slot: Slot) {
        if let Some(cell) = self.slots.get_mut(slot.index()) {
            *cell = None;
        }
    }

    /// The placement occupying a slot, if any
    pub fn placement(&self, slot: Slot) -> Option<&Placed> {
        self.slots.get(slot.index()).and_then(Option::as_ref)
    }

    /// The border number on one edge of the tile in a slot, if the slot is filled
    pub fn border(&self, slot: Slot, edge: usize) -> Option<u8> {
        self.placement(slot).map(|placed| placed.border(edge))
    }

    /// Whether the tile with the given id occupies any slot
    pub fn contains_tile(&self, tile: usize) -> bool {
        self.slots.iter().flatten().any(|placed| placed.tile == tile)
    }

    /// Filled slots with their placements, in visiting order
    pub fn placements(&self) -> impl Iterator<Item = (Slot, &Placed)> {
        Slot::VISITING_ORDER
            .iter()
            .filter_map(|&slot| self.placement(slot).map(|placed| (slot, placed)))
    }

    /// Snapshot the board as a complete arrangement
    ///
    /// Returns `None` unless every slot is filled.
    pub fn arrangement(&self) -> Option<Arrangement> {
        let mut placements = Vec::with_capacity(SLOT_COUNT);
        for slot in Slot::VISITING_ORDER {
            placements.push((slot, *self.placement(slot)?));
        }
        Some(Arrangement { placements })
    }
}

/// A complete valid assignment of all seven tiles to all seven slots
///
/// Produced by the solver on success; placements are in visiting order and
/// carry the orientations that satisfy every adjacency constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement {
    placements: Vec<(Slot, Placed)>,
}

impl Arrangement {
    /// The placements in visiting order
    pub fn placements(&self) -> &[(Slot, Placed)] {
        &self.placements
    }

    /// The placement at one slot
    pub fn placement(&self, slot: Slot) -> Option<&Placed> {
        self.placements
            .iter()
            .find(|(occupied, _)| *occupied == slot)
            .map(|(_, placed)| placed)
    }
}
