//! Time-based playback of a frame sequence.
//!
//! The engine is pull-based: the host reports elapsed time and gets back interpolated, ephemeral
//! frames. Nothing here touches the committed sequence.

/// Easing curves and the interpolation contract.
pub mod ease;
/// Playback state machine and segment sampling.
pub mod engine;
/// Event observers and the offline frame exporter.
pub mod observer;
