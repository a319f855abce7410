use crate::foundation::core::Frame;
use crate::foundation::error::{PlaybookError, PlaybookResult};

/// Ordered list of committed frames plus the active frame index.
///
/// Always holds at least one frame, and `current_index < len`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    current: usize,
}

impl FrameSequence {
    /// Build a sequence positioned on the first frame. Rejects an empty list.
    pub fn new(frames: Vec<Frame>) -> PlaybookResult<Self> {
        if frames.is_empty() {
            return Err(PlaybookError::validation(
                "a frame sequence needs at least one frame",
            ));
        }
        Ok(Self { frames, current: 0 })
    }

    /// Sequence holding a single frame.
    pub fn single(frame: Frame) -> Self {
        Self {
            frames: vec![frame],
            current: 0,
        }
    }

    /// Committed frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames (never zero).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the active frame.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the last frame.
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Active committed frame.
    pub fn current(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// Frame at `index`.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Move to `index`. Out-of-range indices are ignored and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.frames.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Overwrite the active frame.
    pub fn replace_current(&mut self, frame: Frame) {
        self.frames[self.current] = frame;
    }

    /// Append a copy of the last frame and make it active.
    pub fn push_copy_of_last(&mut self) {
        let copy = self.frames[self.last_index()].clone();
        self.frames.push(copy);
        self.current = self.last_index();
    }

    /// Insert `frame` right after the active frame and make it active.
    pub fn insert_after_current(&mut self, frame: Frame) {
        self.frames.insert(self.current + 1, frame);
        self.current += 1;
    }

    /// Remove the active frame.
    ///
    /// The index stays where it is so the following frame slides into view, except when the
    /// removed frame was the last one, in which case the index steps back. Removing the only
    /// frame is rejected.
    pub fn remove_current(&mut self) -> PlaybookResult<Frame> {
        if self.frames.len() == 1 {
            return Err(PlaybookError::bounds("cannot delete the only frame"));
        }
        let was_last = self.current == self.last_index();
        let removed = self.frames.remove(self.current);
        if was_last {
            self.current = self.current.saturating_sub(1);
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
