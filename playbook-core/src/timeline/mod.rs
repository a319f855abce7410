//! Committed frames, the uncommitted edit buffer and the editor that ties them together.

/// Uncommitted edits to the active frame.
pub mod buffer;
/// Editing facade over a frame sequence.
pub mod editor;
/// Ordered, non-empty list of committed frames.
pub mod sequence;
