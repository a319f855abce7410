use crate::document::model::PlaybookDocument;
use crate::field::standards::{DEFAULT_STANDARD, FieldStandard};
use crate::formation::generator::formation;
use crate::formation::reconcile::{Reconciliation, reconcile};
use crate::formation::shape::FormationShape;
use crate::formation::team::TeamCounts;
use crate::foundation::core::{Frame, Point};
use crate::foundation::error::{PlaybookError, PlaybookResult};
use crate::timeline::buffer::EditBuffer;
use crate::timeline::sequence::FrameSequence;

/// Editing state of one playbook: committed frames, the pending edit buffer, the selected
/// entity and the formation tag.
///
/// Commands run synchronously and either apply fully or leave the state untouched. `add_frame`
/// refuses to run while edits are pending; the other structural commands (`duplicate_frame`,
/// `delete_frame`, `clear_all_frames`) expect a clean buffer, and hosts that want that enforced
/// call [`Playbook::require_clean`] first.
#[derive(Clone, Debug)]
pub struct Playbook {
    sequence: FrameSequence,
    buffer: EditBuffer,
    selection: Option<String>,
    formation: Option<FormationShape>,
    field: FieldStandard,
}

impl Default for Playbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Playbook {
    /// Fresh playbook on the default field holding the initial formation.
    pub fn new() -> Self {
        Self::with_field(DEFAULT_STANDARD)
    }

    /// Fresh playbook on `field`.
    pub fn with_field(field: FieldStandard) -> Self {
        Self {
            sequence: FrameSequence::single(default_frame(&field)),
            buffer: EditBuffer::Clean,
            selection: None,
            formation: None,
            field,
        }
    }

    /// Playbook holding the frames of `doc`.
    pub fn from_document(doc: PlaybookDocument) -> PlaybookResult<Self> {
        let mut pb = Self::new();
        pb.load_document(doc)?;
        Ok(pb)
    }

    /// Committed frames.
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// Committed frames as a slice.
    pub fn frames(&self) -> &[Frame] {
        self.sequence.frames()
    }

    /// Number of committed frames.
    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    /// Index of the active frame.
    pub fn current_index(&self) -> usize {
        self.sequence.current_index()
    }

    /// Active committed frame, ignoring pending edits.
    pub fn current_frame(&self) -> &Frame {
        self.sequence.current()
    }

    /// Pending edit state.
    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// `true` while edits are pending.
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// What the host should draw for the active frame: pending edits if any, else the committed
    /// frame.
    pub fn items_to_render(&self) -> &Frame {
        self.buffer.frame().unwrap_or_else(|| self.sequence.current())
    }

    /// Committed frame before the active one, drawn as a ghost while editing.
    pub fn previous_frame(&self) -> Option<&Frame> {
        let i = self.sequence.current_index();
        i.checked_sub(1).and_then(|p| self.sequence.get(p))
    }

    /// Selected entity id.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select an entity, or clear the selection with `None`.
    pub fn select_entity(&mut self, id: Option<&str>) {
        self.selection = id.map(str::to_owned);
    }

    /// Explicit formation tag, if any.
    pub fn formation_tag(&self) -> Option<FormationShape> {
        self.formation
    }

    /// Set or clear the explicit formation tag.
    pub fn set_formation_tag(&mut self, shape: Option<FormationShape>) {
        self.formation = shape;
    }

    /// Field standard generated positions are laid out on.
    pub fn field(&self) -> &FieldStandard {
        &self.field
    }

    /// Fail with [`PlaybookError::StateConflict`] while edits are pending.
    pub fn require_clean(&self) -> PlaybookResult<()> {
        if self.buffer.is_dirty() {
            return Err(PlaybookError::state_conflict(
                "save or discard pending changes first",
            ));
        }
        Ok(())
    }

    /// Move entity `id` in the edit buffer, creating the buffer from the committed frame on the
    /// first edit. Returns `false` (and changes nothing) when the id is not in the active frame.
    pub fn update_position(&mut self, id: &str, x: f64, y: f64) -> bool {
        if !self.items_to_render().contains(id) {
            return false;
        }
        self.buffer
            .get_or_init(self.sequence.current())
            .set_position(id, Point::new(x, y))
    }

    /// Write pending edits into the active frame. Returns `false` when there was nothing to save.
    pub fn commit(&mut self) -> bool {
        match self.buffer.take() {
            Some(frame) => {
                self.sequence.replace_current(frame);
                tracing::debug!(frame = self.sequence.current_index(), "committed edits");
                true
            }
            None => false,
        }
    }

    /// Drop pending edits.
    pub fn discard(&mut self) {
        if self.buffer.is_dirty() {
            tracing::debug!(frame = self.sequence.current_index(), "discarded edits");
        }
        self.buffer.clear();
    }

    /// Put the selected entity back where the committed frame has it.
    ///
    /// Only acts while edits are pending and `id` is the selected entity.
    pub fn reset_entity(&mut self, id: &str) -> bool {
        if self.selection.as_deref() != Some(id) {
            return false;
        }
        let Some(saved) = self.sequence.current().position(id) else {
            return false;
        };
        match &mut self.buffer {
            EditBuffer::Dirty(frame) => frame.set_position(id, saved),
            EditBuffer::Clean => false,
        }
    }

    /// Append a copy of the last committed frame and make it active.
    ///
    /// Rejected with [`PlaybookError::StateConflict`] while edits are pending, since they belong
    /// to the frame being left.
    pub fn add_frame(&mut self) -> PlaybookResult<()> {
        if let Err(err) = self.require_clean() {
            tracing::warn!("add_frame rejected: pending edits");
            return Err(err);
        }
        self.sequence.push_copy_of_last();
        tracing::debug!(frames = self.sequence.len(), "added frame");
        Ok(())
    }

    /// Insert a copy of the active frame (including pending edits) after it and make the copy
    /// active. Pending edits move to the copy; the source frame keeps its committed state.
    pub fn duplicate_frame(&mut self) {
        let copy = self
            .buffer
            .take()
            .unwrap_or_else(|| self.sequence.current().clone());
        self.sequence.insert_after_current(copy);
        tracing::debug!(
            frame = self.sequence.current_index(),
            frames = self.sequence.len(),
            "duplicated frame"
        );
    }

    /// Remove the active frame. Rejected with [`PlaybookError::Bounds`] when it is the only one.
    pub fn delete_frame(&mut self) -> PlaybookResult<()> {
        self.sequence.remove_current()?;
        self.buffer.clear();
        tracing::debug!(
            frame = self.sequence.current_index(),
            frames = self.sequence.len(),
            "deleted frame"
        );
        Ok(())
    }

    /// Start over from a single default formation.
    pub fn clear_all_frames(&mut self) {
        self.sequence = FrameSequence::single(default_frame(&self.field));
        self.buffer.clear();
        self.selection = None;
        self.formation = None;
        tracing::debug!("cleared all frames");
    }

    /// Make frame `index` active. Out-of-range indices are ignored. Moving to another frame drops
    /// pending edits.
    pub fn select_frame(&mut self, index: usize) -> bool {
        let from = self.sequence.current_index();
        if !self.sequence.select(index) {
            return false;
        }
        if index != from {
            self.buffer.clear();
        }
        true
    }

    /// Step to the next frame, stopping at the last.
    pub fn next_frame(&mut self) -> bool {
        let i = self.sequence.current_index();
        i + 1 < self.sequence.len() && self.select_frame(i + 1)
    }

    /// Step to the previous frame, stopping at the first.
    pub fn prev_frame(&mut self) -> bool {
        let i = self.sequence.current_index();
        i > 0 && self.select_frame(i - 1)
    }

    /// Team sizes shown by the active frame (pending edits included).
    pub fn team_counts(&self) -> TeamCounts {
        TeamCounts::from_frame(self.items_to_render())
    }

    /// Reconcile the active frame for new team sizes. The result goes into the edit buffer; the
    /// committed frame changes only on [`Playbook::commit`].
    pub fn apply_team_counts(&mut self, counts: TeamCounts) -> Reconciliation {
        let result = reconcile(
            self.items_to_render(),
            counts,
            self.formation,
            &self.field.dimensions,
        );
        self.buffer.replace(result.frame.clone());
        result
    }

    /// Replace all frames with those of `doc`, positioned on the first frame.
    ///
    /// The document is validated first; on error nothing changes.
    pub fn load_document(&mut self, doc: PlaybookDocument) -> PlaybookResult<()> {
        doc.validate()?;
        let sequence = FrameSequence::new(doc.frames)?;
        tracing::debug!(name = %doc.name, frames = sequence.len(), "loaded playbook");
        self.sequence = sequence;
        self.buffer.clear();
        self.formation = doc.formation;
        Ok(())
    }

    /// Parse, validate and load a JSON document. On error nothing changes.
    pub fn load_json(&mut self, json: &str) -> PlaybookResult<()> {
        let doc = PlaybookDocument::from_json_str(json)?;
        self.load_document(doc)
    }

    /// Committed frames as a document. Pending edits are not included.
    pub fn to_document(&self, name: impl Into<String>) -> PlaybookDocument {
        let mut doc = PlaybookDocument::new(name, self.sequence.frames().to_vec());
        doc.formation = self.formation;
        doc
    }

    /// Apply the end of a playback run: make the reported target frame active.
    pub fn finish_playback(&mut self, target_index: usize) -> bool {
        self.select_frame(target_index)
    }
}

fn default_frame(field: &FieldStandard) -> Frame {
    formation(
        FormationShape::Vertical,
        &field.dimensions,
        TeamCounts::default(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/editor.rs"]
mod tests;
