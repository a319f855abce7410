//! Standard formation generator.
//!
//! Positions are derived from the field dimensions: the disc sits just in front of the brick
//! mark of the left endzone and the offense attacks toward the right.

use crate::field::standards::{DEFAULT_STANDARD, FieldDimensions};
use crate::formation::shape::FormationShape;
use crate::formation::team::TeamCounts;
use crate::foundation::core::{Entity, EntityKind, Frame, Point, Vec2, slot_id};

/// Id of the single disc entity in generated formations.
pub const DISC_ID: &str = "disc";

const DISC_OFFSET: Vec2 = Vec2::new(1.875, 0.625);
const DUMP_OFFSET: Vec2 = Vec2::new(-7.5, 10.0);
const STACK_DEPTH: f64 = 17.5;
const STACK_SPACING: f64 = 6.25;
const WING_OFFSET: Vec2 = Vec2::new(-2.0, 10.0);
const CUTTER_LINE_DEPTH: f64 = 20.0;

/// Where the disc starts.
pub fn disc_position(dims: &FieldDimensions) -> Point {
    Point::new(dims.brick_x(), dims.center_y()) + DISC_OFFSET
}

/// Position of offense slot `slot` (1-based) in a formation of the given shape.
pub fn offense_position(shape: FormationShape, dims: &FieldDimensions, slot: u8) -> Point {
    let handler = Point::new(dims.brick_x(), dims.center_y());
    match (shape, slot) {
        (_, 0 | 1) => handler,
        (FormationShape::Vertical, 2) => handler + DUMP_OFFSET,
        (FormationShape::Vertical, n) => Point::new(
            handler.x + STACK_DEPTH + f64::from(n - 3) * STACK_SPACING,
            handler.y,
        ),
        (FormationShape::Horizontal, 2) => {
            handler + Vec2::new(WING_OFFSET.x, -WING_OFFSET.y)
        }
        (FormationShape::Horizontal, 3) => handler + WING_OFFSET,
        (FormationShape::Horizontal, n) => {
            // Four cutters spread evenly across the width, centered on the disc.
            let spacing = dims.width / 5.0;
            let lane = f64::from(n - 4) - 1.5;
            Point::new(handler.x + CUTTER_LINE_DEPTH, handler.y + lane * spacing)
        }
    }
}

/// Default defender position for slot `slot`: the matched offense position plus the role
/// offset of the same shape.
pub fn defense_position(shape: FormationShape, dims: &FieldDimensions, slot: u8) -> Point {
    offense_position(shape, dims, slot) + shape.defense_offset(slot)
}

/// The disc entity at its starting position.
pub fn disc_entity(dims: &FieldDimensions) -> Entity {
    let p = disc_position(dims);
    Entity::new(DISC_ID, EntityKind::Disc, p.x, p.y).with_label("")
}

/// Player entity for `kind`/`slot` at `p`, labelled with its slot number.
pub fn player_entity(kind: EntityKind, slot: u8, p: Point) -> Entity {
    Entity::new(slot_id(kind, slot), kind, p.x, p.y).with_label(slot.to_string())
}

/// Full formation of the given shape with the requested team sizes.
pub fn formation(shape: FormationShape, dims: &FieldDimensions, counts: TeamCounts) -> Frame {
    let mut entities = Vec::with_capacity(1 + usize::from(counts.offense() + counts.defense()));
    entities.push(disc_entity(dims));
    for slot in 1..=counts.offense() {
        entities.push(player_entity(
            EntityKind::Offense,
            slot,
            offense_position(shape, dims, slot),
        ));
    }
    for slot in 1..=counts.defense() {
        entities.push(player_entity(
            EntityKind::Defense,
            slot,
            defense_position(shape, dims, slot),
        ));
    }
    Frame::new(entities)
}

/// The formation a fresh playbook starts from: a seven-player vertical stack on the default
/// field, without defense.
pub fn initial_formation() -> Frame {
    formation(
        FormationShape::Vertical,
        &DEFAULT_STANDARD.dimensions,
        TeamCounts::default(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/formation/generator.rs"]
mod tests;
