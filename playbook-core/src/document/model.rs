use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::document::validate::validate_document_value;
use crate::formation::shape::FormationShape;
use crate::foundation::core::Frame;
use crate::foundation::error::{PlaybookError, PlaybookResult};

/// Version string written by [`PlaybookDocument::new`].
pub const DOCUMENT_VERSION: &str = "1.0";

/// The persisted form of a playbook: a named, ordered list of frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaybookDocument {
    /// Document format version; must be non-empty.
    pub version: String,
    /// Play name.
    #[serde(default)]
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit formation tag. Older documents omit it and rely on geometric classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<FormationShape>,
    /// Frames in playback order.
    pub frames: Vec<Frame>,
}

impl PlaybookDocument {
    /// Build a current-version document.
    pub fn new(name: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            name: name.into(),
            description: None,
            formation: None,
            frames,
        }
    }

    /// Validate and decode a raw JSON value.
    #[tracing::instrument(skip(value))]
    pub fn from_value(value: serde_json::Value) -> PlaybookResult<Self> {
        if let Err(issues) = validate_document_value(&value) {
            tracing::warn!(issues = issues.issues.len(), "rejected playbook document");
            return Err(PlaybookError::validation(format!(
                "invalid playbook document:\n{issues}"
            )));
        }
        let doc: Self = serde_json::from_value(value)
            .map_err(|e| PlaybookError::validation(format!("decode playbook document: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse, validate and decode a JSON string.
    pub fn from_json_str(s: &str) -> PlaybookResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| PlaybookError::serde(format!("parse playbook JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse, validate and decode JSON from a reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PlaybookResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| PlaybookError::serde(format!("parse playbook JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse, validate and decode a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PlaybookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open playbook JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Invariants of a decoded document beyond its JSON shape.
    pub fn validate(&self) -> PlaybookResult<()> {
        if self.version.is_empty() {
            return Err(PlaybookError::validation("version must be non-empty"));
        }
        if self.frames.is_empty() {
            return Err(PlaybookError::validation(
                "a playbook needs at least one frame",
            ));
        }
        for (fi, frame) in self.frames.iter().enumerate() {
            let mut seen = HashSet::new();
            for e in frame {
                if !seen.insert(e.id.as_str()) {
                    return Err(PlaybookError::validation(format!(
                        "frame {fi} contains duplicate entity id '{}'",
                        e.id
                    )));
                }
                if !e.x.is_finite() || !e.y.is_finite() {
                    return Err(PlaybookError::validation(format!(
                        "frame {fi} entity '{}' has a non-finite position",
                        e.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> PlaybookResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlaybookError::serde(format!("serialize playbook: {e}")))
    }

    /// Write pretty-printed JSON to `path`, creating parent directories.
    pub fn write_path(&self, path: impl AsRef<Path>) -> PlaybookResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("write playbook JSON '{}'", path.display()))?;
        Ok(())
    }
}

/// File stem for a play name: ASCII alphanumerics kept, everything else becomes `_`, lowercased.
pub fn file_stem_for(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
