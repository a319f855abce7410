//! Field geometry: standard dimensions and the logical-to-pixel mapper.

/// Logical units to pixels.
pub mod mapper;
/// Built-in field standards.
pub mod standards;
