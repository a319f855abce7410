use std::time::Duration;

use crate::foundation::core::Frame;
use crate::foundation::error::{PlaybookError, PlaybookResult};
use crate::playback::engine::{PlaybackEngine, PlaybackOpts};
use crate::timeline::sequence::FrameSequence;

/// Receiver of playback events.
///
/// Ordering contract: `on_start` once per run, then `on_advance` for each emitted frame in time
/// order, then `on_finished` once if the run reaches the end. A stopped run ends without
/// `on_finished`.
pub trait PlaybackObserver {
    /// Playback began over `frame_count` committed frames.
    fn on_start(&mut self, frame_count: usize) -> PlaybookResult<()>;
    /// A frame was emitted.
    fn on_advance(&mut self, frame: &Frame) -> PlaybookResult<()>;
    /// Playback reached the end; the host should select `target_index`.
    fn on_finished(&mut self, target_index: usize) -> PlaybookResult<()>;
}

/// Recorder that keeps every emitted frame in memory.
///
/// Recording starts on `on_start` and stops on `on_finished`.
#[derive(Debug, Default)]
pub struct InMemoryRecorder {
    recording: bool,
    frames: Vec<Frame>,
    finished: Option<usize>,
}

impl InMemoryRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` between `on_start` and `on_finished`.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Captured frames in emission order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Target index reported by `on_finished`, if the run completed.
    pub fn finished(&self) -> Option<usize> {
        self.finished
    }

    /// Consume the recorder, returning captured frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl PlaybackObserver for InMemoryRecorder {
    fn on_start(&mut self, _frame_count: usize) -> PlaybookResult<()> {
        self.recording = true;
        self.frames.clear();
        self.finished = None;
        Ok(())
    }

    fn on_advance(&mut self, frame: &Frame) -> PlaybookResult<()> {
        if self.recording {
            self.frames.push(frame.clone());
        }
        Ok(())
    }

    fn on_finished(&mut self, target_index: usize) -> PlaybookResult<()> {
        self.recording = false;
        self.finished = Some(target_index);
        Ok(())
    }
}

/// Play `sequence` offline at a fixed step of `1 / fps` seconds, reporting every frame to
/// `observer`. Returns the number of frames emitted.
///
/// Frames are sampled at `i / fps` for `i = 0, 1, ...` until playback finishes; the final
/// emission is the last frame verbatim.
#[tracing::instrument(skip(sequence, observer), fields(frames = sequence.len()))]
pub fn export_frames(
    sequence: &FrameSequence,
    opts: PlaybackOpts,
    fps: u32,
    observer: &mut dyn PlaybackObserver,
) -> PlaybookResult<usize> {
    if fps == 0 {
        return Err(PlaybookError::validation("export fps must be non-zero"));
    }
    let mut engine = PlaybackEngine::new(opts)?;
    let started = engine.start_with(sequence, observer)?;
    let mut emitted = usize::from(started.frame().is_some());
    let mut i: u64 = 0;
    while engine.is_playing() {
        let nanos = u128::from(i) * 1_000_000_000 / u128::from(fps);
        let nanos = u64::try_from(nanos)
            .map_err(|_| PlaybookError::bounds("export ran past the representable time range"))?;
        let step = engine.tick_with(Duration::from_nanos(nanos), observer)?;
        emitted += usize::from(step.frame().is_some());
        i += 1;
    }
    tracing::debug!(emitted, "export finished");
    Ok(emitted)
}

#[cfg(test)]
#[path = "../../tests/unit/playback/observer.rs"]
mod tests;
