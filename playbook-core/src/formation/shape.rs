use crate::foundation::core::{EntityKind, Frame, Vec2, slot_id};

/// Marker radius in logical units.
pub const PLAYER_RADIUS: f64 = 1.75;
/// Marker diameter in logical units.
pub const PLAYER_DIAMETER: f64 = 2.0 * PLAYER_RADIUS;
/// Maximum x distance between offense slots 4 and 5 for a frame to read as a horizontal stack.
pub const SHAPE_TOLERANCE: f64 = 0.5;

/// Offensive formation family, used to place fabricated defenders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationShape {
    /// Handlers behind the disc, cutters lined up along the field.
    #[default]
    Vertical,
    /// Three handlers across the field, cutters in a line across the width.
    Horizontal,
}

/// Defensive assignment implied by a slot number within a formation shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefenseRole {
    /// Marker on the vertical-stack handler.
    Handler,
    /// Defender on the vertical-stack dump.
    Dump,
    /// Defender on a vertical-stack cutter.
    Stack,
    /// Marker on the horizontal-stack center handler.
    CenterHandler,
    /// Defender on a horizontal-stack wing handler.
    WingHandler,
    /// Defender on a horizontal-stack cutter.
    Cutter,
}

impl DefenseRole {
    /// Offset from the matched offense player to the defender.
    pub fn offset(self) -> Vec2 {
        match self {
            Self::Handler => Vec2::new(PLAYER_RADIUS, -PLAYER_DIAMETER),
            Self::Dump => Vec2::new(PLAYER_DIAMETER, -PLAYER_RADIUS),
            Self::Stack => Vec2::new(-PLAYER_RADIUS, PLAYER_RADIUS),
            Self::CenterHandler => Vec2::new(PLAYER_RADIUS, -PLAYER_RADIUS),
            Self::WingHandler => Vec2::new(PLAYER_DIAMETER, 0.0),
            Self::Cutter => Vec2::new(-PLAYER_DIAMETER, 0.0),
        }
    }
}

impl FormationShape {
    /// Geometric fallback for frames without an explicit shape tag.
    ///
    /// Offense slots 4 and 5 sharing an x coordinate (within [`SHAPE_TOLERANCE`]) means the
    /// cutters stand in a line across the field. Frames missing either slot read as vertical.
    pub fn classify(frame: &Frame) -> Self {
        let x4 = frame.get(&slot_id(EntityKind::Offense, 4)).map(|e| e.x);
        let x5 = frame.get(&slot_id(EntityKind::Offense, 5)).map(|e| e.x);
        match (x4, x5) {
            (Some(a), Some(b)) if (a - b).abs() < SHAPE_TOLERANCE => Self::Horizontal,
            _ => Self::Vertical,
        }
    }

    /// Defensive role for a 1-based slot.
    pub fn role(self, slot: u8) -> DefenseRole {
        match (self, slot) {
            (Self::Vertical, 0 | 1) => DefenseRole::Handler,
            (Self::Vertical, 2) => DefenseRole::Dump,
            (Self::Vertical, _) => DefenseRole::Stack,
            (Self::Horizontal, 0 | 1) => DefenseRole::CenterHandler,
            (Self::Horizontal, 2 | 3) => DefenseRole::WingHandler,
            (Self::Horizontal, _) => DefenseRole::Cutter,
        }
    }

    /// Offset from offense slot `slot` to its defender.
    pub fn defense_offset(self, slot: u8) -> Vec2 {
        self.role(slot).offset()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/formation/shape.rs"]
mod tests;
