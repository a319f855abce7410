/// Convenience result type used across the playbook engine.
pub type PlaybookResult<T> = Result<T, PlaybookError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every operation that returns an error leaves the editor, its frame sequence and its edit
/// buffer exactly as they were before the call.
#[derive(thiserror::Error, Debug)]
pub enum PlaybookError {
    /// Malformed persisted document or out-of-range user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame index out of range, or an attempt to remove the last remaining frame.
    #[error("bounds error: {0}")]
    Bounds(String),

    /// Structural mutation requested while the edit buffer holds unsaved changes.
    #[error("state conflict: {0}")]
    StateConflict(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlaybookError {
    /// Build a [`PlaybookError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlaybookError::Bounds`] value.
    pub fn bounds(msg: impl Into<String>) -> Self {
        Self::Bounds(msg.into())
    }

    /// Build a [`PlaybookError::StateConflict`] value.
    pub fn state_conflict(msg: impl Into<String>) -> Self {
        Self::StateConflict(msg.into())
    }

    /// Build a [`PlaybookError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
