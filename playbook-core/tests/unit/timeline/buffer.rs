use super::*;
use crate::foundation::core::{Entity, EntityKind, Point};

fn committed() -> Frame {
    Frame::new(vec![Entity::new("disc", EntityKind::Disc, 1.0, 1.0)])
}

#[test]
fn first_access_copies_committed_frame() {
    let base = committed();
    let mut buf = EditBuffer::default();
    assert!(!buf.is_dirty());

    buf.get_or_init(&base)
        .set_position("disc", Point::new(9.0, 9.0));
    assert!(buf.is_dirty());
    assert_eq!(base.position("disc"), Some(Point::new(1.0, 1.0)));
    assert_eq!(
        buf.frame().unwrap().position("disc"),
        Some(Point::new(9.0, 9.0))
    );
}

#[test]
fn later_access_keeps_pending_edits() {
    let base = committed();
    let mut buf = EditBuffer::default();
    buf.get_or_init(&base)
        .set_position("disc", Point::new(2.0, 2.0));
    buf.get_or_init(&base);
    assert_eq!(
        buf.frame().unwrap().position("disc"),
        Some(Point::new(2.0, 2.0))
    );
}

#[test]
fn take_and_clear_leave_buffer_clean() {
    let mut buf = EditBuffer::Dirty(committed());
    assert_eq!(buf.take(), Some(committed()));
    assert_eq!(buf, EditBuffer::Clean);
    assert_eq!(buf.take(), None);

    buf.replace(committed());
    buf.clear();
    assert!(!buf.is_dirty());
}
