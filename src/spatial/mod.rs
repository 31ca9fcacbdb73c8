/// Board slots, placements, and the arrangement result type
pub mod board;
/// Hexagonal tile primitives and the cyclic rotation engine
pub mod tile;
