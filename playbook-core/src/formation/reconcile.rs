//! Team-size reconciliation.
//!
//! Rebuilds a frame's entity set for new team sizes while keeping every entity the user has
//! already placed. Only missing slots are fabricated, so reconciling an already reconciled frame
//! with the same counts returns it unchanged.

use crate::field::standards::FieldDimensions;
use crate::formation::generator::{
    defense_position, disc_entity, offense_position, player_entity,
};
use crate::formation::shape::FormationShape;
use crate::formation::team::TeamCounts;
use crate::foundation::core::{Entity, EntityKind, Frame, slot_id};

/// Result of [`reconcile`].
#[derive(Clone, Debug, PartialEq)]
pub struct Reconciliation {
    /// Replacement entity set: disc, offense `1..=n`, defense `1..=m`.
    pub frame: Frame,
    /// Shape used to place fabricated defenders.
    pub shape: FormationShape,
    /// Ids of entities that did not exist in the source frame.
    pub fabricated: Vec<String>,
    /// Ids of source entities left out of the result.
    pub dropped: Vec<String>,
}

/// Recompute `source` for `counts`.
///
/// `shape` is the frame's explicit formation tag; when `None` the shape is classified from the
/// offense positions (see [`FormationShape::classify`]).
pub fn reconcile(
    source: &Frame,
    counts: TeamCounts,
    shape: Option<FormationShape>,
    dims: &FieldDimensions,
) -> Reconciliation {
    let mut fabricated = Vec::new();
    let mut entities: Vec<Entity> =
        Vec::with_capacity(1 + usize::from(counts.offense() + counts.defense()));

    match source.first_of(EntityKind::Disc) {
        Some(disc) => entities.push(disc.clone()),
        None => {
            let disc = disc_entity(dims);
            fabricated.push(disc.id.clone());
            entities.push(disc);
        }
    }

    for slot in 1..=counts.offense() {
        let id = slot_id(EntityKind::Offense, slot);
        match source.get(&id) {
            Some(e) => entities.push(e.clone()),
            None => {
                let p = offense_position(FormationShape::Vertical, dims, slot);
                entities.push(player_entity(EntityKind::Offense, slot, p));
                fabricated.push(id);
            }
        }
    }

    let offense = Frame::new(entities.clone());
    let shape = shape.unwrap_or_else(|| FormationShape::classify(&offense));

    for slot in 1..=counts.defense() {
        let id = slot_id(EntityKind::Defense, slot);
        if let Some(e) = source.get(&id) {
            entities.push(e.clone());
            continue;
        }
        let p = match offense.position(&slot_id(EntityKind::Offense, slot)) {
            Some(o) => o + shape.defense_offset(slot),
            None => defense_position(FormationShape::Vertical, dims, slot),
        };
        entities.push(player_entity(EntityKind::Defense, slot, p));
        fabricated.push(id);
    }

    let frame = Frame::new(entities);
    let dropped: Vec<String> = source
        .iter()
        .filter(|e| !frame.contains(&e.id))
        .map(|e| e.id.clone())
        .collect();

    tracing::debug!(
        offense = counts.offense(),
        defense = counts.defense(),
        ?shape,
        fabricated = fabricated.len(),
        dropped = dropped.len(),
        "reconciled team sizes"
    );

    Reconciliation {
        frame,
        shape,
        fabricated,
        dropped,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/formation/reconcile.rs"]
mod tests;
