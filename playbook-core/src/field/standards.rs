use crate::foundation::error::{PlaybookError, PlaybookResult};

/// Length unit a field standard is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Imperial yards.
    Yards,
    /// Metric meters.
    Meters,
}

/// Logical dimensions of a field, in the standard's [`LengthUnit`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDimensions {
    /// Total length including both endzones.
    pub length: f64,
    /// Sideline-to-sideline width.
    pub width: f64,
    /// Depth of one endzone.
    pub endzone_length: f64,
    /// Distance of the brick mark from the goal line.
    pub brick_mark: f64,
}

impl FieldDimensions {
    /// Validate that every dimension is finite and positive and the endzones fit the field.
    pub fn validate(&self) -> PlaybookResult<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("endzoneLength", self.endzone_length),
            ("brickMark", self.brick_mark),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlaybookError::validation(format!(
                    "field {name} must be finite and > 0"
                )));
            }
        }
        if self.endzone_length * 2.0 >= self.length {
            return Err(PlaybookError::validation(
                "field endzones must be shorter than the field",
            ));
        }
        Ok(())
    }

    /// Length of the central zone between the goal lines.
    pub fn central_zone_length(&self) -> f64 {
        self.length - 2.0 * self.endzone_length
    }

    /// X coordinate of the brick mark in front of the left endzone.
    pub fn brick_x(&self) -> f64 {
        self.endzone_length + self.brick_mark
    }

    /// Y coordinate of the field's long axis.
    pub fn center_y(&self) -> f64 {
        self.width / 2.0
    }
}

/// A named, read-only set of field dimensions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FieldStandard {
    /// Short identifier (`WFDF`, `USAU`, `AUDL`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit the dimensions are measured in.
    pub unit: LengthUnit,
    /// Field dimensions.
    pub dimensions: FieldDimensions,
}

/// World Flying Disc Federation field, the default.
pub const WFDF: FieldStandard = FieldStandard {
    id: "WFDF",
    name: "WFDF (International)",
    unit: LengthUnit::Meters,
    dimensions: FieldDimensions {
        length: 100.0,
        width: 37.0,
        endzone_length: 18.0,
        brick_mark: 18.0,
    },
};

/// USA Ultimate field.
pub const USAU: FieldStandard = FieldStandard {
    id: "USAU",
    name: "USA Ultimate",
    unit: LengthUnit::Yards,
    dimensions: FieldDimensions {
        length: 110.0,
        width: 40.0,
        endzone_length: 20.0,
        brick_mark: 20.0,
    },
};

/// Professional league field (53 1/3 yards wide).
pub const AUDL: FieldStandard = FieldStandard {
    id: "AUDL",
    name: "UFA (Pro)",
    unit: LengthUnit::Yards,
    dimensions: FieldDimensions {
        length: 120.0,
        width: 53.33,
        endzone_length: 20.0,
        brick_mark: 20.0,
    },
};

/// All built-in standards.
pub const FIELD_STANDARDS: [FieldStandard; 3] = [WFDF, USAU, AUDL];

/// Standard used when nothing else is configured.
pub const DEFAULT_STANDARD: FieldStandard = WFDF;

impl FieldStandard {
    /// Look up a built-in standard by id, ignoring ASCII case.
    pub fn by_id(id: &str) -> Option<&'static FieldStandard> {
        FIELD_STANDARDS
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(id.trim()))
    }
}

impl Default for FieldStandard {
    fn default() -> Self {
        DEFAULT_STANDARD
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/standards.rs"]
mod tests;
