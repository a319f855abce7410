use std::time::{Duration, Instant};

use crate::foundation::core::{Entity, Frame, Point};
use crate::foundation::error::{PlaybookError, PlaybookResult};
use crate::playback::ease::{Ease, Lerp};
use crate::playback::observer::PlaybackObserver;
use crate::timeline::sequence::FrameSequence;

/// Default time spent moving from one frame to the next.
pub const DEFAULT_SEGMENT_DURATION: Duration = Duration::from_millis(1000);

/// Playback timing options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackOpts {
    /// Time spent on each segment `frame[i] -> frame[i + 1]`. Must be non-zero.
    pub segment_duration: Duration,
    /// Curve applied to progress within a segment.
    pub ease: Ease,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            segment_duration: DEFAULT_SEGMENT_DURATION,
            ease: Ease::Linear,
        }
    }
}

impl PlaybackOpts {
    /// Reject a zero segment duration.
    pub fn validate(&self) -> PlaybookResult<()> {
        if self.segment_duration.is_zero() {
            return Err(PlaybookError::validation(
                "playback segment duration must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Whether the engine is currently animating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not playing; `tick` returns [`PlaybackStep::Idle`].
    #[default]
    Stopped,
    /// Animating a snapshot of the sequence.
    Playing,
}

/// Outcome of [`PlaybackEngine::start`] or [`PlaybackEngine::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackStep {
    /// Nothing to do: the engine is stopped.
    Idle,
    /// Playback began; frames follow on subsequent ticks.
    Started,
    /// Interpolated frame for the reported time.
    Frame(Frame),
    /// Playback ran past the last frame. `frame` is the last frame verbatim and the host should
    /// make `target_index` its active frame. The engine is stopped afterwards.
    Finished {
        /// Last frame of the played sequence.
        frame: Frame,
        /// Index the host should select.
        target_index: usize,
    },
}

impl PlaybackStep {
    /// Frame carried by this step, if any.
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Frame(f) | Self::Finished { frame: f, .. } => Some(f),
            Self::Idle | Self::Started => None,
        }
    }

    /// `true` for [`PlaybackStep::Finished`].
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// Interpolate every entity of `a` toward the entity with the same id in `b`.
///
/// Entities missing from `b` hold their position. Entities only in `b` are not emitted. At
/// `progress == 0` the result equals `a` exactly.
pub fn sample_segment(a: &Frame, b: &Frame, progress: f64, ease: Ease) -> Frame {
    let t = ease.apply(progress);
    a.iter()
        .map(|from| match b.get(&from.id) {
            Some(to) => {
                let mut e = from.clone();
                e.set_pos(<Point as Lerp>::lerp(&from.pos(), &to.pos(), t));
                e
            }
            None => from.clone(),
        })
        .collect::<Vec<Entity>>()
        .into()
}

/// One playback session over a snapshot of committed frames.
///
/// The engine owns no timer. Hosts drive it with [`PlaybackEngine::tick`] (elapsed time since
/// start) or [`PlaybackEngine::tick_at`] (host clock readings). Output depends only on the
/// elapsed time reported.
#[derive(Clone, Debug, Default)]
pub struct PlaybackEngine {
    opts: PlaybackOpts,
    state: PlaybackState,
    frames: Vec<Frame>,
    anchor: Option<Instant>,
}

impl PlaybackEngine {
    /// Engine with validated options.
    pub fn new(opts: PlaybackOpts) -> PlaybookResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            ..Self::default()
        })
    }

    /// Timing options.
    pub fn opts(&self) -> &PlaybackOpts {
        &self.opts
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// `true` while playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Number of frames in the playing snapshot (zero when stopped).
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total play time of the snapshot: `(n - 1) * segment_duration`.
    pub fn total_duration(&self) -> Duration {
        let segments = u32::try_from(self.frames.len().saturating_sub(1)).unwrap_or(u32::MAX);
        self.opts.segment_duration.saturating_mul(segments)
    }

    /// Snapshot the committed frames and begin playing from the first one.
    ///
    /// With fewer than two frames there is nothing to animate: playback finishes at once on the
    /// last frame. Starting while already playing restarts the clock.
    pub fn start(&mut self, sequence: &FrameSequence) -> PlaybackStep {
        self.anchor = None;
        if sequence.len() < 2 {
            self.halt();
            tracing::debug!(frames = sequence.len(), "playback finished immediately");
            return PlaybackStep::Finished {
                frame: sequence.frames()[sequence.last_index()].clone(),
                target_index: sequence.last_index(),
            };
        }
        self.frames = sequence.frames().to_vec();
        self.state = PlaybackState::Playing;
        tracing::debug!(frames = self.frames.len(), "playback started");
        PlaybackStep::Started
    }

    /// Advance to `elapsed` time since start.
    pub fn tick(&mut self, elapsed: Duration) -> PlaybackStep {
        if self.state != PlaybackState::Playing {
            return PlaybackStep::Idle;
        }
        let last = self.frames.len() - 1;
        let d = self.opts.segment_duration.as_nanos();
        let e = elapsed.as_nanos();
        let end = d * last as u128;

        if e > end {
            let frame = self.frames[last].clone();
            self.halt();
            tracing::debug!(target_index = last, "playback finished");
            return PlaybackStep::Finished {
                frame,
                target_index: last,
            };
        }
        if e == end {
            return PlaybackStep::Frame(self.frames[last].clone());
        }

        let segment = (e / d) as usize;
        let progress = (e % d) as f64 / d as f64;
        PlaybackStep::Frame(sample_segment(
            &self.frames[segment],
            &self.frames[segment + 1],
            progress,
            self.opts.ease,
        ))
    }

    /// Advance using a host clock reading. The first reading after [`PlaybackEngine::start`]
    /// anchors the clock at zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> PlaybackStep {
        if self.state != PlaybackState::Playing {
            return PlaybackStep::Idle;
        }
        let anchor = *self.anchor.get_or_insert(now);
        self.tick(now.saturating_duration_since(anchor))
    }

    /// Halt playback. The snapshot and clock are dropped; the sequence is never touched.
    pub fn stop(&mut self) {
        if self.is_playing() {
            tracing::debug!("playback stopped");
        }
        self.halt();
    }

    /// [`PlaybackEngine::start`], reporting events to `observer`.
    pub fn start_with(
        &mut self,
        sequence: &FrameSequence,
        observer: &mut dyn PlaybackObserver,
    ) -> PlaybookResult<PlaybackStep> {
        let step = self.start(sequence);
        observer.on_start(sequence.len())?;
        notify(&step, observer)?;
        Ok(step)
    }

    /// [`PlaybackEngine::tick`], reporting events to `observer`.
    pub fn tick_with(
        &mut self,
        elapsed: Duration,
        observer: &mut dyn PlaybackObserver,
    ) -> PlaybookResult<PlaybackStep> {
        let step = self.tick(elapsed);
        notify(&step, observer)?;
        Ok(step)
    }

    fn halt(&mut self) {
        self.state = PlaybackState::Stopped;
        self.frames.clear();
        self.anchor = None;
    }
}

fn notify(step: &PlaybackStep, observer: &mut dyn PlaybackObserver) -> PlaybookResult<()> {
    match step {
        PlaybackStep::Idle | PlaybackStep::Started => Ok(()),
        PlaybackStep::Frame(frame) => observer.on_advance(frame),
        PlaybackStep::Finished {
            frame,
            target_index,
        } => {
            observer.on_advance(frame)?;
            observer.on_finished(*target_index)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/engine.rs"]
mod tests;
