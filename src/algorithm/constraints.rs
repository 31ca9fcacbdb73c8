//! Adjacency tables and the three pruning predicates
//!
//! The hex layout fixes which edge of which slot touches which edge of its
//! neighbor. Those contacts are encoded here as constant pair tables indexed
//! by visiting depth (how far the solver has descended), and the three
//! predicates the solver consults are thin evaluations over those tables:
//!
//! - [`fits`]: every touching pair introduced by the newest placement matches.
//! - [`can_short_circuit`]: of two required pairs, exactly one matches, so no
//!   further rotation of the newest tile can ever satisfy both.
//! - [`creates_duplicate`]: accepting the newest placement would require two
//!   distinct edges of some future neighbor to carry equal numbers, which a
//!   tile with pairwise-distinct borders can never do.

use crate::spatial::board::{Board, SLOT_COUNT, Slot};

/// One edge of one board slot
pub type EdgeRef = (Slot, usize);

/// Two edges required to carry equal border numbers
pub type EdgePair = (EdgeRef, EdgeRef);

const NO_PAIRS: &[EdgePair] = &[];

/// Touching-edge pairs that must match when the slot at each visiting depth
/// is placed
///
/// Depth 0 is the center, which has no placed neighbor yet. Depth 6 closes
/// the ring, so three contacts must hold at once.
const FIT_PAIRS: [&[EdgePair]; SLOT_COUNT] = [
    NO_PAIRS,
    &[((Slot::North, 3), (Slot::Center, 0))],
    &[
        ((Slot::Center, 1), (Slot::NorthEast, 4)),
        ((Slot::North, 2), (Slot::NorthEast, 5)),
    ],
    &[
        ((Slot::SouthEast, 5), (Slot::Center, 2)),
        ((Slot::NorthEast, 3), (Slot::SouthEast, 0)),
    ],
    &[
        ((Slot::South, 0), (Slot::Center, 3)),
        ((Slot::South, 1), (Slot::SouthEast, 4)),
    ],
    &[
        ((Slot::SouthWest, 1), (Slot::Center, 4)),
        ((Slot::SouthWest, 2), (Slot::South, 5)),
    ],
    &[
        ((Slot::NorthWest, 2), (Slot::Center, 5)),
        ((Slot::SouthWest, 0), (Slot::NorthWest, 3)),
        ((Slot::North, 4), (Slot::NorthWest, 1)),
    ],
];

/// The two contacts examined for the rotation short-circuit at each depth
///
/// Depths 0 and 1 place at most one contact, so rotation always runs its
/// course there. Depth 6 has three contacts but only the center and ring
/// pairs take part in the short-circuit.
const SHORT_CIRCUIT_PAIRS: [&[EdgePair]; SLOT_COUNT] = [
    NO_PAIRS,
    NO_PAIRS,
    &[
        ((Slot::Center, 1), (Slot::NorthEast, 4)),
        ((Slot::North, 2), (Slot::NorthEast, 5)),
    ],
    &[
        ((Slot::SouthEast, 5), (Slot::Center, 2)),
        ((Slot::NorthEast, 3), (Slot::SouthEast, 0)),
    ],
    &[
        ((Slot::South, 0), (Slot::Center, 3)),
        ((Slot::South, 1), (Slot::SouthEast, 4)),
    ],
    &[
        ((Slot::SouthWest, 1), (Slot::Center, 4)),
        ((Slot::SouthWest, 2), (Slot::South, 5)),
    ],
    &[
        ((Slot::NorthWest, 2), (Slot::Center, 5)),
        ((Slot::SouthWest, 0), (Slot::NorthWest, 3)),
    ],
];

/// Edge pairs that must stay distinct after the slot at each depth is placed
///
/// Each pair is a corner of the hexagon where a still-unplaced neighbor will
/// touch both edges; if the two edges already agree, no tile with distinct
/// borders can complete that corner. The depth 5 entry checks all three
/// corner combinations left by the closing northwest slot.
const DUPLICATE_PAIRS: [&[EdgePair]; SLOT_COUNT] = [
    NO_PAIRS,
    &[
        ((Slot::North, 2), (Slot::Center, 1)),
        ((Slot::North, 4), (Slot::Center, 5)),
    ],
    &[((Slot::Center, 2), (Slot::NorthEast, 3))],
    &[((Slot::SouthEast, 4), (Slot::Center, 3))],
    &[((Slot::South, 5), (Slot::Center, 4))],
    &[
        ((Slot::SouthWest, 0), (Slot::Center, 5)),
        ((Slot::North, 4), (Slot::Center, 5)),
        ((Slot::North, 4), (Slot::SouthWest, 0)),
    ],
    NO_PAIRS,
];

fn pair_matches(board: &Board, pair: &EdgePair) -> bool {
    let ((slot_a, edge_a), (slot_b, edge_b)) = *pair;
    match (board.border(slot_a, edge_a), board.border(slot_b, edge_b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Whether the newest placement satisfies every touching-edge contact at this
/// depth
pub fn fits(board: &Board, depth: usize) -> bool {
    FIT_PAIRS
        .get(depth)
        .is_some_and(|pairs| pairs.iter().all(|pair| pair_matches(board, pair)))
}

/// Whether rotation of the newest tile can be abandoned early
///
/// True when exactly one of the depth's two examined contacts matches: the
/// matched contact pins the tile's orientation, so every further rotation
/// breaks it while the other contact stays unsatisfied.
pub fn can_short_circuit(board: &Board, depth: usize) -> bool {
    let pairs = SHORT_CIRCUIT_PAIRS.get(depth).copied().unwrap_or(NO_PAIRS);
    if let [first, second] = pairs {
        pair_matches(board, first) != pair_matches(board, second)
    } else {
        false
    }
}

/// Whether accepting the newest placement leaves an unfillable corner
///
/// True when any of the depth's corner pairs already carry equal numbers.
pub fn creates_duplicate(board: &Board, depth: usize) -> bool {
    DUPLICATE_PAIRS
        .get(depth)
        .copied()
        .unwrap_or(NO_PAIRS)
        .iter()
        .any(|pair| pair_matches(board, pair))
}
