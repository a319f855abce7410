use crate::foundation::core::Frame;

/// Pending edits to the active frame.
///
/// `Dirty` always owns its own copy of the entities; it never shares storage with the committed
/// frame it was created from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditBuffer {
    /// No pending edits.
    #[default]
    Clean,
    /// Full entity set of the active frame including unsaved changes.
    Dirty(Frame),
}

impl EditBuffer {
    /// `true` while edits are pending.
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty(_))
    }

    /// Buffered frame, if dirty.
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Clean => None,
            Self::Dirty(f) => Some(f),
        }
    }

    /// Buffered frame, creating it as a copy of `committed` when clean.
    pub fn get_or_init(&mut self, committed: &Frame) -> &mut Frame {
        if let Self::Clean = self {
            *self = Self::Dirty(committed.clone());
        }
        match self {
            Self::Dirty(f) => f,
            Self::Clean => unreachable!("buffer initialized above"),
        }
    }

    /// Replace the buffered frame wholesale.
    pub fn replace(&mut self, frame: Frame) {
        *self = Self::Dirty(frame);
    }

    /// Take the buffered frame, leaving the buffer clean.
    pub fn take(&mut self) -> Option<Frame> {
        match std::mem::take(self) {
            Self::Clean => None,
            Self::Dirty(f) => Some(f),
        }
    }

    /// Drop pending edits.
    pub fn clear(&mut self) {
        *self = Self::Clean;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/buffer.rs"]
mod tests;
