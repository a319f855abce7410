use super::*;
use crate::foundation::core::EntityKind;

fn frame(disc: (f64, f64), off1: (f64, f64)) -> Frame {
    Frame::new(vec![
        Entity::new("disc", EntityKind::Disc, disc.0, disc.1),
        Entity::new("offense-1", EntityKind::Offense, off1.0, off1.1),
    ])
}

fn scenario_a() -> FrameSequence {
    FrameSequence::new(vec![frame((10.0, 5.0), (8.0, 4.0)), frame((12.0, 5.0), (8.0, 4.0))])
        .unwrap()
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn playing(seq: &FrameSequence) -> PlaybackEngine {
    let mut e = PlaybackEngine::default();
    assert_eq!(e.start(seq), PlaybackStep::Started);
    e
}

#[test]
fn two_frame_play_interpolates_then_finishes() {
    let seq = scenario_a();
    let mut e = playing(&seq);

    let mid = e.tick(ms(500));
    let mid = mid.frame().unwrap();
    assert_eq!(mid.position("disc"), Some(Point::new(11.0, 5.0)));
    assert_eq!(mid.position("offense-1"), Some(Point::new(8.0, 4.0)));

    assert_eq!(e.tick(ms(1000)), PlaybackStep::Frame(seq.frames()[1].clone()));
    assert!(e.is_playing());

    assert_eq!(
        e.tick(ms(1200)),
        PlaybackStep::Finished {
            frame: seq.frames()[1].clone(),
            target_index: 1,
        }
    );
    assert_eq!(e.state(), PlaybackState::Stopped);
    assert_eq!(e.tick(ms(1300)), PlaybackStep::Idle);
}

#[test]
fn segment_start_reproduces_source_frame() {
    let seq = FrameSequence::new(vec![
        frame((0.0, 0.0), (3.0, 3.0)),
        frame((7.3, 1.1), (2.9, 8.4)),
        frame((1.0, 2.0), (5.0, 6.0)),
    ])
    .unwrap();
    let mut e = playing(&seq);
    assert_eq!(e.tick(ms(0)).frame(), Some(&seq.frames()[0]));
    assert_eq!(e.tick(ms(1000)).frame(), Some(&seq.frames()[1]));

    let near_end = e.tick(Duration::from_nanos(1_999_999_999));
    let near = near_end.frame().unwrap().position("disc").unwrap();
    assert!((near.x - 1.0).abs() < 1e-6);
    assert!((near.y - 2.0).abs() < 1e-6);
}

#[test]
fn entities_missing_from_next_frame_hold() {
    let a = frame((0.0, 0.0), (4.0, 4.0));
    let b = Frame::new(vec![Entity::new("disc", EntityKind::Disc, 10.0, 0.0)]);
    let out = sample_segment(&a, &b, 0.5, Ease::Linear);
    assert_eq!(out.position("disc"), Some(Point::new(5.0, 0.0)));
    assert_eq!(out.position("offense-1"), Some(Point::new(4.0, 4.0)));
    assert_eq!(out.len(), 2);
}

#[test]
fn entities_only_in_next_frame_are_not_emitted() {
    let a = Frame::new(vec![Entity::new("disc", EntityKind::Disc, 0.0, 0.0)]);
    let b = frame((10.0, 0.0), (4.0, 4.0));
    let out = sample_segment(&a, &b, 0.5, Ease::Linear);
    assert!(!out.contains("offense-1"));
}

#[test]
fn ease_shapes_progress() {
    let a = frame((0.0, 0.0), (0.0, 0.0));
    let b = frame((10.0, 0.0), (0.0, 0.0));
    let out = sample_segment(&a, &b, 0.5, Ease::InQuad);
    assert_eq!(out.position("disc"), Some(Point::new(2.5, 0.0)));
}

#[test]
fn fewer_than_two_frames_finish_immediately() {
    let seq = FrameSequence::single(frame((1.0, 1.0), (2.0, 2.0)));
    let mut e = PlaybackEngine::default();
    assert_eq!(
        e.start(&seq),
        PlaybackStep::Finished {
            frame: seq.frames()[0].clone(),
            target_index: 0,
        }
    );
    assert!(!e.is_playing());
    assert_eq!(e.tick(ms(10)), PlaybackStep::Idle);
}

#[test]
fn restart_resets_clock() {
    let seq = scenario_a();
    let mut e = playing(&seq);
    let t0 = Instant::now();
    e.tick_at(t0);
    e.tick_at(t0 + ms(700));

    assert_eq!(e.start(&seq), PlaybackStep::Started);
    let t1 = t0 + ms(900);
    assert_eq!(e.tick_at(t1).frame(), Some(&seq.frames()[0]));
    let half = e.tick_at(t1 + ms(500));
    assert_eq!(half.frame().unwrap().position("disc"), Some(Point::new(11.0, 5.0)));
}

#[test]
fn tick_at_anchors_on_first_reading() {
    let seq = scenario_a();
    let mut e = playing(&seq);
    let t0 = Instant::now();
    assert_eq!(e.tick_at(t0).frame(), Some(&seq.frames()[0]));
    assert!(e.tick_at(t0 + ms(1001)).is_finished());
}

#[test]
fn stop_halts_without_finishing() {
    let seq = scenario_a();
    let before = seq.clone();
    let mut e = playing(&seq);
    e.tick(ms(300));
    e.stop();
    assert_eq!(e.state(), PlaybackState::Stopped);
    assert_eq!(e.frame_count(), 0);
    assert_eq!(e.tick(ms(400)), PlaybackStep::Idle);
    assert_eq!(seq, before);
}

#[test]
fn zero_segment_duration_is_rejected() {
    let opts = PlaybackOpts {
        segment_duration: Duration::ZERO,
        ..PlaybackOpts::default()
    };
    assert!(PlaybackEngine::new(opts).is_err());
}

#[test]
fn total_duration_covers_all_segments() {
    let seq = FrameSequence::new(vec![
        frame((0.0, 0.0), (0.0, 0.0)),
        frame((1.0, 0.0), (0.0, 0.0)),
        frame((2.0, 0.0), (0.0, 0.0)),
    ])
    .unwrap();
    let mut e = PlaybackEngine::new(PlaybackOpts {
        segment_duration: ms(250),
        ease: Ease::Linear,
    })
    .unwrap();
    e.start(&seq);
    assert_eq!(e.total_duration(), ms(500));
    assert_eq!(
        e.tick(ms(375)).frame().unwrap().position("disc"),
        Some(Point::new(1.5, 0.0))
    );
}
