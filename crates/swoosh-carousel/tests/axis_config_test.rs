//! Swipe and move axis configuration, observed through full gestures.

use swoosh_carousel::{CarouselConfig, CarouselEvent, Size, UnlockedMotion, Vector2};
use swoosh_testing::CarouselRobot;

fn square_cards(config: &CarouselConfig) -> CarouselRobot {
    CarouselRobot::new(config, &[Size::new(100.0, 100.0); 3])
}

#[test]
fn vertical_carousel_advances_on_upward_swipe() {
    let config = CarouselConfig::new().with_swipe_axis("y-");
    let mut robot = CarouselRobot::new(&config, &[Size::new(300.0, 200.0); 3]);
    robot.swipe((100.0, 400.0), (100.0, 250.0), 10);
    robot.wait_for_idle();

    assert_eq!(robot.engine().index(), 1);
    assert_eq!(robot.engine().offset(), -200.0);
    assert_eq!(robot.engine().frame().translation, Vector2::new(0.0, -200.0));
}

#[test]
fn reversed_axis_advances_on_rightward_swipe() {
    let config = CarouselConfig::new().with_swipe_axis("x+");
    let mut robot = square_cards(&config);

    robot.swipe((100.0, 100.0), (250.0, 100.0), 10);
    robot.wait_for_idle();
    assert_eq!(robot.engine().index(), 1);
    assert_eq!(robot.engine().frame().translation, Vector2::new(100.0, 0.0));

    robot.swipe((100.0, 100.0), (250.0, 100.0), 10);
    robot.swipe((250.0, 100.0), (100.0, 100.0), 10);
    robot.wait_for_idle();
    assert_eq!(robot.engine().index(), 1);
}

#[test]
fn move_axis_redirects_rendering_only() {
    let config = CarouselConfig::new()
        .with_swipe_axis("x-")
        .with_move_axis("y-");
    let mut robot = square_cards(&config);
    robot.swipe((300.0, 100.0), (150.0, 100.0), 10);
    robot.wait_for_idle();

    assert_eq!(robot.engine().offset(), -100.0);
    assert_eq!(robot.engine().frame().translation, Vector2::new(0.0, -100.0));
}

#[test]
fn unknown_token_keeps_default_axis() {
    let config = CarouselConfig::new().with_swipe_axis("sideways");
    let robot = square_cards(&config);
    assert_eq!(robot.engine().swipe_axis(), Vector2::NEGATIVE_X);
    assert_eq!(robot.engine().move_axis(), Vector2::NEGATIVE_X);
}

#[test]
fn explicit_vector_axis_is_used_as_given() {
    let config = CarouselConfig::new().with_swipe_axis((0.0, 1.0));
    let mut robot = square_cards(&config);
    robot.swipe((50.0, 100.0), (50.0, 250.0), 10);
    robot.wait_for_idle();
    assert_eq!(robot.engine().index(), 1);
}

#[test]
fn cross_axis_scroll_is_left_to_the_page() {
    let mut robot = square_cards(&CarouselConfig::default());
    robot.swipe((100.0, 100.0), (110.0, 400.0), 10);
    robot.wait_for_idle();

    assert_eq!(robot.engine().index(), 0);
    assert_eq!(robot.engine().offset(), 0.0);
    assert!(!robot
        .events()
        .iter()
        .any(|event| matches!(event, CarouselEvent::AxisLocked { .. })));
}

#[test]
fn free_pan_follows_finger_before_lock() {
    let config = CarouselConfig::new().with_unlocked_motion(UnlockedMotion::FreePan);
    let mut robot = square_cards(&config);
    robot.press(100.0, 100.0);
    robot.move_to(95.0, 130.0);
    assert!(!robot.engine().is_axis_locked());
    assert_eq!(robot.engine().offset(), -5.0);

    robot.release();
    assert_eq!(robot.engine().index(), 0);
    robot.wait_for_idle();
    assert_eq!(robot.engine().offset(), 0.0);
}
