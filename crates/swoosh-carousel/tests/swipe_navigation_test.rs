//! End-to-end swipe navigation: touch input through release, index
//! selection and the frame-driven settle.

use std::time::Duration;
use swoosh_carousel::{CarouselConfig, CarouselEvent, Size};
use swoosh_testing::robot_assertions::{
    assert_approx_eq, assert_converges_monotonically, assert_event_order, assert_settles_within,
    count_index_changes,
};
use swoosh_testing::CarouselRobot;

fn three_cards() -> CarouselRobot {
    CarouselRobot::with_cards(3, 100.0, 100.0)
}

#[test]
fn left_swipe_past_half_a_card_advances() {
    let mut robot = three_cards();
    robot.swipe((300.0, 100.0), (150.0, 100.0), 10);

    let released_at = robot.engine().offset();
    assert_approx_eq(released_at, -150.0, 1e-3, "offset follows the finger");
    assert_eq!(robot.engine().index(), 1);

    let offsets = robot.wait_for_idle();
    assert_converges_monotonically(released_at, &offsets, -100.0, "settle onto card 1");
    let snap = robot.engine().config().snap;
    assert_settles_within(&offsets, snap.max_frames(released_at + 100.0), "settle");
    assert!(!robot.engine().is_settling());
}

#[test]
fn consecutive_swipes_walk_cards_and_clamp() {
    let mut robot = three_cards();
    for expected in [1, 2, 2] {
        robot.swipe((300.0, 100.0), (150.0, 100.0), 10);
        robot.wait_for_idle();
        assert_eq!(robot.engine().index(), expected);
        assert_eq!(robot.engine().offset(), -100.0 * expected as f32);
    }
    for expected in [1, 0, 0] {
        robot.swipe((150.0, 100.0), (300.0, 100.0), 10);
        robot.wait_for_idle();
        assert_eq!(robot.engine().index(), expected);
        assert_eq!(robot.engine().offset(), -100.0 * expected as f32);
    }
    assert_eq!(count_index_changes(&robot.events()), 4);
}

#[test]
fn uneven_card_widths_set_resting_offsets() {
    let sizes = [
        Size::new(120.0, 100.0),
        Size::new(80.0, 100.0),
        Size::new(200.0, 100.0),
    ];
    let mut robot = CarouselRobot::new(&CarouselConfig::default(), &sizes);

    robot.swipe((300.0, 100.0), (150.0, 100.0), 10);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), -120.0);

    robot.swipe((300.0, 100.0), (150.0, 100.0), 10);
    robot.wait_for_idle();
    assert_eq!(robot.engine().index(), 2);
    assert_eq!(robot.engine().offset(), -200.0);

    robot.swipe((150.0, 100.0), (300.0, 100.0), 10);
    robot.wait_for_idle();
    assert_eq!(robot.engine().index(), 1);
    assert_eq!(robot.engine().offset(), -120.0);
}

#[test]
fn slow_drag_past_half_advances_without_momentum() {
    let mut robot = three_cards();
    robot.press(300.0, 100.0);
    robot.drag_to(230.0, 100.0, 7);
    // Pause, then creep: the release carries almost no speed.
    robot.advance_time(Duration::from_secs(1));
    robot.move_to(229.9, 100.0);
    robot.release();

    assert_eq!(robot.engine().index(), 1);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), -100.0);
}

#[test]
fn slow_drag_short_of_half_springs_back() {
    let mut robot = three_cards();
    robot.press(300.0, 100.0);
    robot.drag_to(260.0, 100.0, 4);
    robot.advance_time(Duration::from_secs(1));
    robot.move_to(259.9, 100.0);
    robot.release();

    assert_eq!(robot.engine().index(), 0);
    let released_at = robot.engine().offset();
    let offsets = robot.wait_for_idle();
    assert_converges_monotonically(released_at, &offsets, 0.0, "spring back");
    assert_eq!(count_index_changes(&robot.events()), 0);
}

#[test]
fn holding_still_before_lifting_cancels_the_flick() {
    let mut robot = three_cards();
    let pointer = robot.press(300.0, 100.0);
    robot.drag_to(270.0, 100.0, 2);
    assert_approx_eq(robot.engine().offset(), -30.0, 1e-3, "offset before hold");

    robot.advance_time(Duration::from_secs(2));
    assert_eq!(robot.active_pointer(), Some(pointer));
    robot.release();
    assert_eq!(robot.active_pointer(), None);

    assert_eq!(robot.engine().index(), 0);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), 0.0);
}

#[test]
fn flick_survives_slow_frame_rate() {
    let mut robot = three_cards().with_frame_interval(Duration::from_millis(50));
    robot.press(300.0, 100.0);
    robot.drag_to(270.0, 100.0, 2);
    robot.release();

    assert_eq!(robot.engine().index(), 1);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), -100.0);
}

#[test]
fn short_fast_flick_advances() {
    let mut robot = three_cards();
    robot.press(300.0, 100.0);
    robot.drag_to(280.0, 100.0, 2);
    robot.release();

    assert_eq!(robot.engine().index(), 1);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), -100.0);
}

#[test]
fn touch_during_settle_freezes_offset() {
    let mut robot = three_cards();
    robot.swipe((300.0, 100.0), (150.0, 100.0), 10);
    robot.advance_frame();
    robot.advance_frame();
    let caught_at = robot.engine().offset();

    robot.press(50.0, 100.0);
    assert!(!robot.engine().is_settling());
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.engine().offset(), caught_at);

    robot.drag_to(200.0, 100.0, 10);
    robot.release();
    assert_eq!(robot.engine().index(), 0);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), 0.0);
}

#[test]
fn lifecycle_events_arrive_in_order() {
    let mut robot = three_cards();
    let pointer = robot.swipe((300.0, 100.0), (150.0, 100.0), 10);
    robot.wait_for_idle();

    assert_event_order(
        &robot.events(),
        &[
            CarouselEvent::GestureStarted { pointer },
            CarouselEvent::AxisLocked { pointer },
            CarouselEvent::AxisReleased { pointer },
            CarouselEvent::IndexChanged {
                previous: 0,
                current: 1,
            },
            CarouselEvent::Settled {
                index: 1,
                offset: -100.0,
            },
        ],
        "swipe lifecycle",
    );
}

#[test]
fn go_to_animates_onto_card() {
    let mut robot = three_cards();
    robot.engine().go_to(2);
    let offsets = robot.wait_for_idle();

    assert_converges_monotonically(0.0, &offsets, -200.0, "programmatic navigation");
    let snap = robot.engine().config().snap;
    assert_settles_within(&offsets, snap.max_frames(200.0), "programmatic navigation");
}

#[test]
fn removing_cards_moves_back_into_range() {
    let mut robot = three_cards();
    robot.engine().go_to(2);
    robot.wait_for_idle();

    robot.engine().set_num_cards(2);
    assert_eq!(robot.engine().index(), 1);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), -100.0);
}

#[test]
fn late_measurement_moves_resting_card() {
    let mut robot = CarouselRobot::new(&CarouselConfig::default(), &[]);
    robot.engine().set_num_cards(2);
    robot.engine().go_to(1);
    robot.wait_for_idle();
    // Nothing measured yet: every card is zero wide.
    assert_eq!(robot.engine().offset(), 0.0);

    robot.engine().report_size(0, 90.0, 100.0);
    robot.engine().report_size(1, 90.0, 100.0);
    let offsets = robot.wait_for_idle();
    assert_converges_monotonically(0.0, &offsets, -90.0, "re-measure");
}
