use crate::foundation::core::{EntityKind, Frame, parse_slot};
use crate::foundation::error::{PlaybookError, PlaybookResult};

/// Most offense players a frame can hold.
pub const MAX_OFFENSE: u8 = 7;
/// Most defense players a frame can hold.
pub const MAX_DEFENSE: u8 = 7;
/// Most players on the field in total.
pub const MAX_PLAYERS: u8 = 14;

/// Requested team sizes: `offense ∈ [1, 7]`, `defense ∈ [0, 7]`, sum `≤ 14`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TeamCounts {
    offense: u8,
    defense: u8,
}

impl TeamCounts {
    /// Validate and build team sizes.
    pub fn new(offense: u8, defense: u8) -> PlaybookResult<Self> {
        if !(1..=MAX_OFFENSE).contains(&offense) {
            return Err(PlaybookError::validation(format!(
                "offense count must be in 1..={MAX_OFFENSE}, got {offense}"
            )));
        }
        if defense > MAX_DEFENSE {
            return Err(PlaybookError::validation(format!(
                "defense count must be in 0..={MAX_DEFENSE}, got {defense}"
            )));
        }
        if offense + defense > MAX_PLAYERS {
            return Err(PlaybookError::validation(format!(
                "at most {MAX_PLAYERS} players may be on the field"
            )));
        }
        Ok(Self { offense, defense })
    }

    /// Offense player count.
    pub fn offense(self) -> u8 {
        self.offense
    }

    /// Defense player count.
    pub fn defense(self) -> u8 {
        self.defense
    }

    /// Counts implied by a frame: the highest contiguous run of slots `1..=n` present for each
    /// side, clamped into the valid range.
    pub fn from_frame(frame: &Frame) -> Self {
        let run = |kind: EntityKind, max: u8| -> u8 {
            let mut n = 0;
            while n < max
                && frame
                    .iter()
                    .any(|e| e.kind == kind && parse_slot(&e.id) == Some((kind, n + 1)))
            {
                n += 1;
            }
            n
        };
        let offense = run(EntityKind::Offense, MAX_OFFENSE).max(1);
        let defense = run(EntityKind::Defense, MAX_DEFENSE);
        Self { offense, defense }
    }

    /// Add `delta` offense players, clamped to `[1, 7]`. `None` when the total would exceed 14.
    pub fn step_offense(self, delta: i8) -> Option<Self> {
        let offense = (i16::from(self.offense) + i16::from(delta)).clamp(1, MAX_OFFENSE.into());
        Self::new(offense as u8, self.defense).ok()
    }

    /// Add `delta` defense players, clamped to `[0, 7]`. `None` when the total would exceed 14.
    pub fn step_defense(self, delta: i8) -> Option<Self> {
        let defense = (i16::from(self.defense) + i16::from(delta)).clamp(0, MAX_DEFENSE.into());
        Self::new(self.offense, defense as u8).ok()
    }

    /// Remove the defense, or field one defender per offense player when there is none.
    pub fn toggle_defense(self) -> Self {
        if self.defense > 0 {
            Self {
                offense: self.offense,
                defense: 0,
            }
        } else {
            Self {
                offense: self.offense,
                defense: self.offense.min(MAX_DEFENSE),
            }
        }
    }
}

impl Default for TeamCounts {
    fn default() -> Self {
        Self {
            offense: MAX_OFFENSE,
            defense: 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/formation/team.rs"]
mod tests;
