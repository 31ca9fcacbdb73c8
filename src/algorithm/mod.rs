/// Adjacency tables and the three pruning predicates
pub mod constraints;
/// Random tile-set generation with a rotation-uniqueness guarantee
pub mod generator;
/// Backtracking search over the seven board slots
pub mod solver;
