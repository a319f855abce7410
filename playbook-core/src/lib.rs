//! Playbook is a frame engine for tactical ultimate-frisbee plays.
//!
//! A play is an ordered list of frames, each a snapshot of where the disc and the players stand.
//! The crate covers everything between the user's drag gestures and the pixels a host draws:
//!
//! - Edit frames through a [`Playbook`]: positions go to an edit buffer and reach the committed
//!   frame only on commit.
//! - Change team sizes with [`reconcile`], keeping everything the user already placed.
//! - Play a sequence back with [`PlaybackEngine`], which interpolates positions over time and
//!   reports events to a [`PlaybackObserver`].
//! - Map logical field units to pixels with [`compute_transform`].
//! - Load and save [`PlaybookDocument`]s, validated before they reach the editor.
//!
//! The core is single-threaded and holds no timers: hosts own the clock and drive playback by
//! reporting elapsed time.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Persisted documents, validation and built-in presets.
pub mod document;
/// Field standards and coordinate mapping.
pub mod field;
/// Formation generation and team-size reconciliation.
pub mod formation;
/// Time-based playback.
pub mod playback;
/// Frame sequence, edit buffer and editor.
pub mod timeline;

pub use crate::foundation::core::{Entity, EntityKind, Frame, Point, Vec2, parse_slot, slot_id};
pub use crate::foundation::error::{PlaybookError, PlaybookResult};

pub use crate::document::model::{DOCUMENT_VERSION, PlaybookDocument, file_stem_for};
pub use crate::document::presets::{PRESET_NAMES, preset};
pub use crate::document::validate::{DocumentIssue, DocumentIssues, validate_document_value};
pub use crate::field::mapper::{
    ContainerSize, FitMode, ViewportOpts, ViewportTransform, compute_scale, compute_transform,
    project_point, to_logical, to_pixels, unproject_point,
};
pub use crate::field::standards::{DEFAULT_STANDARD, FieldDimensions, FieldStandard, LengthUnit};
pub use crate::formation::reconcile::{Reconciliation, reconcile};
pub use crate::formation::shape::FormationShape;
pub use crate::formation::team::TeamCounts;
pub use crate::playback::ease::{Ease, Lerp};
pub use crate::playback::engine::{
    PlaybackEngine, PlaybackOpts, PlaybackState, PlaybackStep, sample_segment,
};
pub use crate::playback::observer::{InMemoryRecorder, PlaybackObserver, export_frames};
pub use crate::timeline::buffer::EditBuffer;
pub use crate::timeline::editor::Playbook;
pub use crate::timeline::sequence::FrameSequence;
