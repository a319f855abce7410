use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathElem {
    Field(&'static str),
    Index(usize),
}

/// One structural problem in a document, located by JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIssue {
    path: Vec<PathElem>,
    message: String,
}

impl DocumentIssue {
    fn at(path: &[PathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// JSON path of the offending value, e.g. `$.frames[0][2].x`.
    pub fn path(&self) -> String {
        format_path(&self.path)
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Every structural problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIssues {
    /// Problems in document order.
    pub issues: Vec<DocumentIssue>,
}

impl fmt::Display for DocumentIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DocumentIssues {}

/// Check the shape of a raw document.
///
/// A document is accepted when `version` is a non-empty string and `frames` is an array of
/// arrays whose items are objects with a string `id`, a string `type` and numeric `x` and `y`.
pub fn validate_document_value(doc: &Value) -> Result<(), DocumentIssues> {
    let mut issues = Vec::new();

    let Some(obj) = doc.as_object() else {
        issues.push(DocumentIssue::at(&[], "document must be a JSON object"));
        return Err(DocumentIssues { issues });
    };

    let version_path = [PathElem::Field("version")];
    match obj.get("version") {
        Some(Value::String(s)) if !s.is_empty() => {}
        Some(Value::String(_)) => {
            issues.push(DocumentIssue::at(&version_path, "version must be non-empty"))
        }
        Some(_) => issues.push(DocumentIssue::at(&version_path, "version must be a string")),
        None => issues.push(DocumentIssue::at(&version_path, "version is required")),
    }

    let frames_path = vec![PathElem::Field("frames")];
    match obj.get("frames") {
        Some(Value::Array(frames)) => {
            for (fi, frame) in frames.iter().enumerate() {
                let mut path = frames_path.clone();
                path.push(PathElem::Index(fi));
                validate_frame(frame, &mut path, &mut issues);
            }
        }
        Some(_) => issues.push(DocumentIssue::at(&frames_path, "frames must be an array")),
        None => issues.push(DocumentIssue::at(&frames_path, "frames is required")),
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(DocumentIssues { issues })
    }
}

fn validate_frame(frame: &Value, path: &mut Vec<PathElem>, issues: &mut Vec<DocumentIssue>) {
    let Some(items) = frame.as_array() else {
        issues.push(DocumentIssue::at(path, "frame must be an array of entities"));
        return;
    };
    for (ii, item) in items.iter().enumerate() {
        path.push(PathElem::Index(ii));
        validate_item(item, path, issues);
        path.pop();
    }
}

fn validate_item(item: &Value, path: &mut Vec<PathElem>, issues: &mut Vec<DocumentIssue>) {
    let Some(obj) = item.as_object() else {
        issues.push(DocumentIssue::at(path, "entity must be an object"));
        return;
    };
    for (field, expect_string) in [("id", true), ("type", true), ("x", false), ("y", false)] {
        let ok = match obj.get(field) {
            Some(Value::String(_)) => expect_string,
            Some(Value::Number(_)) => !expect_string,
            _ => false,
        };
        if !ok {
            path.push(PathElem::Field(field));
            let kind = if expect_string { "a string" } else { "a number" };
            issues.push(DocumentIssue::at(path, format!("{field} must be {kind}")));
            path.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/validate.rs"]
mod tests;
