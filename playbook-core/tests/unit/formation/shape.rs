use super::*;
use crate::foundation::core::Entity;

fn offense(slot: u8, x: f64, y: f64) -> Entity {
    Entity::new(slot_id(EntityKind::Offense, slot), EntityKind::Offense, x, y)
}

#[test]
fn aligned_cutters_read_as_horizontal() {
    let f = Frame::new(vec![offense(4, 56.0, 7.4), offense(5, 56.2, 14.8)]);
    assert_eq!(FormationShape::classify(&f), FormationShape::Horizontal);
}

#[test]
fn spread_cutters_read_as_vertical() {
    let f = Frame::new(vec![offense(4, 59.75, 18.5), offense(5, 66.0, 18.5)]);
    assert_eq!(FormationShape::classify(&f), FormationShape::Vertical);
}

#[test]
fn missing_slots_default_to_vertical() {
    let f = Frame::new(vec![offense(4, 10.0, 0.0)]);
    assert_eq!(FormationShape::classify(&f), FormationShape::Vertical);
    assert_eq!(
        FormationShape::classify(&Frame::default()),
        FormationShape::Vertical
    );
}

#[test]
fn roles_follow_slot_tables() {
    use DefenseRole::*;
    let v: Vec<_> = (1..=7).map(|s| FormationShape::Vertical.role(s)).collect();
    assert_eq!(v, [Handler, Dump, Stack, Stack, Stack, Stack, Stack]);
    let h: Vec<_> = (1..=7).map(|s| FormationShape::Horizontal.role(s)).collect();
    assert_eq!(
        h,
        [
            CenterHandler,
            WingHandler,
            WingHandler,
            Cutter,
            Cutter,
            Cutter,
            Cutter
        ]
    );
}

#[test]
fn offsets_are_distinct_per_role() {
    let offsets = [
        DefenseRole::Handler.offset(),
        DefenseRole::Dump.offset(),
        DefenseRole::Stack.offset(),
        DefenseRole::CenterHandler.offset(),
        DefenseRole::WingHandler.offset(),
        DefenseRole::Cutter.offset(),
    ];
    for (i, a) in offsets.iter().enumerate() {
        for b in &offsets[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
