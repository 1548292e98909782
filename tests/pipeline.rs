// Full per-frame passes through the Tracker against a recording sink:
// detection, trail persistence, the command zones, and paint output.

mod common;

use common::{dark_frame, light, TestSink};
use laser_cast::{Flow, Point, Tracker, TrackerConfig};

const CAM_W: usize = 640;
const CAM_H: usize = 480;

fn tracker() -> Tracker {
    Tracker::new(TrackerConfig::default())
}

fn sink() -> TestSink {
    TestSink::new(800, 600)
}

#[test]
fn isolated_dot_becomes_one_scaled_trail_point() {
    let mut frame = dark_frame(CAM_W, CAM_H);
    light(&mut frame, 320, 240);

    let mut tracker = tracker();
    let mut sink = sink();
    assert_eq!(tracker.step(&frame, &mut sink).expect("step"), Flow::Continue);

    // One bright pixel -> one trail point at the scaled location, painted cyan.
    assert_eq!(tracker.trail().points(), &[Point::new(400, 300)]);
    assert_eq!(sink.painted.len(), 1);
    let (p, color) = sink.painted[0];
    assert_eq!(p, Point::new(400, 300));
    assert_eq!(color, TrackerConfig::default().trail_color);
    assert_eq!(sink.passes_ended, 1);
}

#[test]
fn empty_frames_keep_painting_the_old_trail() {
    let mut dot = dark_frame(CAM_W, CAM_H);
    light(&mut dot, 320, 240);
    let empty = dark_frame(CAM_W, CAM_H);

    let mut tracker = tracker();
    let mut sink = sink();
    tracker.step(&dot, &mut sink).expect("detect");
    sink.forget_painted();

    assert_eq!(tracker.step(&empty, &mut sink).expect("idle"), Flow::Continue);

    // Nothing detected, but the previous drawing is repainted unchanged.
    assert_eq!(tracker.trail().len(), 1);
    assert_eq!(sink.painted.len(), 1);
    assert_eq!(sink.painted[0].0, Point::new(400, 300));
    assert_eq!(sink.refreshes, 0);
}

#[test]
fn fresh_tracker_paints_nothing_on_an_empty_frame() {
    let empty = dark_frame(CAM_W, CAM_H);

    let mut tracker = tracker();
    let mut sink = sink();
    assert_eq!(tracker.step(&empty, &mut sink).expect("idle"), Flow::Continue);

    assert!(tracker.trail().is_empty());
    assert!(sink.painted.is_empty());
    assert_eq!(sink.passes_ended, 1); // the paint pass still runs, as a no-op
}

#[test]
fn redetecting_the_same_dot_appends_duplicates() {
    let mut dot = dark_frame(CAM_W, CAM_H);
    light(&mut dot, 320, 240);

    let mut tracker = tracker();
    let mut sink = sink();
    tracker.step(&dot, &mut sink).expect("first");
    tracker.step(&dot, &mut sink).expect("second");

    assert_eq!(
        tracker.trail().points(),
        &[Point::new(400, 300), Point::new(400, 300)]
    );
}

#[test]
fn clear_command_wipes_the_trail_and_refreshes() {
    let mut dot = dark_frame(CAM_W, CAM_H);
    light(&mut dot, 320, 240);
    let mut clear = dark_frame(CAM_W, CAM_H);
    light(&mut clear, 10, 10); // inside the top-left command square

    let mut tracker = tracker();
    let mut sink = sink();
    tracker.step(&dot, &mut sink).expect("draw");
    sink.forget_painted();

    assert_eq!(tracker.step(&clear, &mut sink).expect("clear"), Flow::Continue);

    assert!(tracker.trail().is_empty());
    assert_eq!(sink.refreshes, 1);
    assert!(sink.painted.is_empty()); // the paint pass had nothing left
}

#[test]
fn close_command_clears_refreshes_and_shuts_down() {
    let mut dot = dark_frame(CAM_W, CAM_H);
    light(&mut dot, 320, 240);
    let mut close = dark_frame(CAM_W, CAM_H);
    light(&mut close, 620, 10); // inside the top-right command band

    let mut tracker = tracker();
    let mut sink = sink();
    tracker.step(&dot, &mut sink).expect("draw");
    sink.forget_painted();
    let passes_before = sink.passes_ended;

    assert_eq!(tracker.step(&close, &mut sink).expect("close"), Flow::Shutdown);

    assert!(tracker.trail().is_empty());
    assert_eq!(sink.refreshes, 1);
    assert!(sink.painted.is_empty());
    assert_eq!(sink.passes_ended, passes_before); // shutdown skips the paint pass
}

#[test]
fn wide_blob_contributes_many_points_in_one_frame() {
    let mut frame = dark_frame(CAM_W, CAM_H);
    for x in 200..=208 {
        for y in 100..=104 {
            light(&mut frame, x, y);
        }
    }

    let mut tracker = tracker();
    let mut sink = sink();
    tracker.step(&frame, &mut sink).expect("step");

    // Every bright pixel inside the grown box lands in the trail.
    assert_eq!(tracker.trail().len(), 9 * 5);
    assert_eq!(sink.painted.len(), 9 * 5);
}
