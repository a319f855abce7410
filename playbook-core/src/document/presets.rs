use crate::document::model::PlaybookDocument;
use crate::field::standards::DEFAULT_STANDARD;
use crate::formation::generator::formation;
use crate::formation::shape::FormationShape;
use crate::formation::team::{MAX_DEFENSE, MAX_OFFENSE, TeamCounts};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 2] = ["vertical_stack", "horizontal_stack"];

/// Seven-on-seven vertical stack on the default field.
pub fn vertical_stack() -> PlaybookDocument {
    shape_preset("Vertical Stack", FormationShape::Vertical)
}

/// Seven-on-seven horizontal stack on the default field.
pub fn horizontal_stack() -> PlaybookDocument {
    shape_preset("Horizontal Stack", FormationShape::Horizontal)
}

/// Look up a built-in preset by name.
pub fn preset(name: &str) -> Option<PlaybookDocument> {
    match name {
        "vertical_stack" => Some(vertical_stack()),
        "horizontal_stack" => Some(horizontal_stack()),
        _ => None,
    }
}

fn shape_preset(name: &str, shape: FormationShape) -> PlaybookDocument {
    let counts = TeamCounts::new(MAX_OFFENSE, MAX_DEFENSE).unwrap_or_default();
    let mut doc = PlaybookDocument::new(
        name,
        vec![formation(shape, &DEFAULT_STANDARD.dimensions, counts)],
    );
    doc.formation = Some(shape);
    doc
}

#[cfg(test)]
#[path = "../../tests/unit/document/presets.rs"]
mod tests;
