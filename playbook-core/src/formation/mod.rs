//! Formations: shape classification, the standard formation generator and team-size
//! reconciliation.

/// Standard formation generator.
pub mod generator;
/// Team-size reconciliation.
pub mod reconcile;
/// Formation shapes and defender offset tables.
pub mod shape;
/// Validated team sizes.
pub mod team;
