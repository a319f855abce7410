//! Persisted playbook documents.
//!
//! Documents are validated on the raw JSON value before typed decoding so that every problem is
//! reported with its JSON path, and a rejected document never reaches the editor.

/// Typed document model and file IO.
pub mod model;
/// Built-in formation documents.
pub mod presets;
/// Structural validation of raw JSON documents.
pub mod validate;
