use super::*;
use crate::field::standards::WFDF;
use crate::formation::generator::{DISC_ID, formation, initial_formation};
use crate::foundation::core::{Point, Vec2};

fn counts(o: u8, d: u8) -> TeamCounts {
    TeamCounts::new(o, d).unwrap()
}

fn player(kind: EntityKind, slot: u8, x: f64, y: f64) -> Entity {
    Entity::new(slot_id(kind, slot), kind, x, y)
}

#[test]
fn unchanged_counts_are_idempotent() {
    let dims = WFDF.dimensions;
    let first = reconcile(&initial_formation(), counts(7, 4), None, &dims);
    let second = reconcile(&first.frame, counts(7, 4), None, &dims);
    assert_eq!(first.frame, second.frame);
    assert!(second.fabricated.is_empty());
    assert!(second.dropped.is_empty());
}

#[test]
fn existing_positions_survive_and_extra_slots_drop() {
    let dims = WFDF.dimensions;
    let mut src = initial_formation().into_entities();
    src.push(player(EntityKind::Defense, 1, 1.0, 2.0));
    src.push(player(EntityKind::Defense, 2, 3.0, 4.0));
    let src = Frame::new(src);

    let r = reconcile(&src, counts(3, 1), None, &dims);
    assert_eq!(r.frame.len(), 1 + 3 + 1);
    for id in ["offense-1", "offense-2", "offense-3", DISC_ID, "defense-1"] {
        assert_eq!(r.frame.get(id), src.get(id), "{id}");
    }
    let mut dropped = r.dropped.clone();
    dropped.sort();
    assert_eq!(
        dropped,
        ["defense-2", "offense-4", "offense-5", "offense-6", "offense-7"]
    );
}

#[test]
fn missing_disc_is_fabricated_and_extras_removed() {
    let dims = WFDF.dimensions;
    let src = Frame::new(vec![
        player(EntityKind::Offense, 1, 30.0, 10.0),
        Entity::new("disc-a", EntityKind::Disc, 1.0, 1.0),
        Entity::new("disc-b", EntityKind::Disc, 2.0, 2.0),
    ]);
    let r = reconcile(&src, counts(1, 0), None, &dims);
    assert_eq!(r.frame.count(EntityKind::Disc), 1);
    assert_eq!(r.frame.entities()[0].id, "disc-a");
    assert_eq!(r.dropped, ["disc-b"]);

    let bare = Frame::new(vec![player(EntityKind::Offense, 1, 30.0, 10.0)]);
    let r = reconcile(&bare, counts(1, 0), None, &dims);
    assert_eq!(r.frame.entities()[0].id, DISC_ID);
    assert!(r.fabricated.iter().any(|id| id == DISC_ID));
}

#[test]
fn new_defender_follows_detected_vertical_shape() {
    let dims = WFDF.dimensions;
    let src = initial_formation();
    let r = reconcile(&src, counts(7, 3), None, &dims);
    assert_eq!(r.shape, FormationShape::Vertical);
    let o2 = src.position("offense-2").unwrap();
    let d2 = r.frame.position("defense-2").unwrap();
    assert_eq!(d2 - o2, Vec2::new(3.5, -1.75));
}

#[test]
fn new_defender_follows_detected_horizontal_shape() {
    let dims = WFDF.dimensions;
    let src = formation(FormationShape::Horizontal, &dims, counts(7, 0));
    let r = reconcile(&src, counts(7, 5), None, &dims);
    assert_eq!(r.shape, FormationShape::Horizontal);
    let o5 = src.position("offense-5").unwrap();
    let d5 = r.frame.position("defense-5").unwrap();
    assert_eq!(d5 - o5, Vec2::new(-3.5, 0.0));
}

#[test]
fn explicit_shape_overrides_geometry() {
    let dims = WFDF.dimensions;
    let src = initial_formation();
    let r = reconcile(&src, counts(7, 1), Some(FormationShape::Horizontal), &dims);
    assert_eq!(r.shape, FormationShape::Horizontal);
    let o1 = src.position("offense-1").unwrap();
    let d1 = r.frame.position("defense-1").unwrap();
    assert_eq!(d1 - o1, Vec2::new(1.75, -1.75));
}

#[test]
fn defender_without_matching_offense_uses_default_position() {
    let dims = WFDF.dimensions;
    let src = Frame::new(vec![player(EntityKind::Offense, 1, 30.0, 10.0)]);
    let r = reconcile(&src, counts(1, 3), None, &dims);
    assert_eq!(
        r.frame.position("defense-3").unwrap(),
        defense_position(FormationShape::Vertical, &dims, 3)
    );
    assert_eq!(
        r.frame.position("defense-1").unwrap(),
        Point::new(30.0 + 1.75, 10.0 - 3.5)
    );
}

#[test]
fn output_is_ordered_disc_offense_defense() {
    let dims = WFDF.dimensions;
    let r = reconcile(&initial_formation(), counts(2, 2), None, &dims);
    let ids: Vec<_> = r.frame.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        [DISC_ID, "offense-1", "offense-2", "defense-1", "defense-2"]
    );
}
