use approx::assert_relative_eq;

use arcade_shooter::movement::{fall_speed, MovementPolicy};

#[test]
fn policy_selected_by_level() {
    assert_eq!(MovementPolicy::for_level(1), MovementPolicy::None);
    assert_eq!(
        MovementPolicy::for_level(2),
        MovementPolicy::ZigZag { rate: 0.1, amplitude: 5.0 }
    );
    assert_eq!(MovementPolicy::for_level(3), MovementPolicy::Homing { speed: 2.0 });
    assert_eq!(
        MovementPolicy::for_level(4),
        MovementPolicy::FastZigZag { rate: 0.2, amplitude: 6.0 }
    );
    assert_eq!(MovementPolicy::for_level(17), MovementPolicy::for_level(4));
}

#[test]
fn level_one_falls_straight() {
    let policy = MovementPolicy::for_level(1);
    let mut phase = 0.0;
    for _ in 0..10 {
        assert_eq!(policy.displacement(&mut phase, 100.0, Some(500.0)), 0.0);
    }
    assert_eq!(phase, 0.0);
}

#[test]
fn zigzag_sequence_from_zero_phase() {
    let policy = MovementPolicy::for_level(2);
    let mut phase = 0.0;
    let dx: Vec<f64> = (0..3)
        .map(|_| policy.displacement(&mut phase, 0.0, None))
        .collect();
    assert_relative_eq!(dx[0], 0.1f64.sin() * 5.0, epsilon = 1e-12);
    assert_relative_eq!(dx[1], 0.2f64.sin() * 5.0, epsilon = 1e-12);
    assert_relative_eq!(dx[2], 0.3f64.sin() * 5.0, epsilon = 1e-12);
    assert_relative_eq!(phase, 0.3, epsilon = 1e-12);
}

#[test]
fn fast_zigzag_sequence_from_zero_phase() {
    let policy = MovementPolicy::for_level(5);
    let mut phase = 0.0;
    let first = policy.displacement(&mut phase, 0.0, None);
    let second = policy.displacement(&mut phase, 0.0, None);
    assert_relative_eq!(first, 0.2f64.sin() * 6.0, epsilon = 1e-12);
    assert_relative_eq!(second, 0.4f64.sin() * 6.0, epsilon = 1e-12);
}

#[test]
fn homing_steps_toward_player() {
    let policy = MovementPolicy::for_level(3);
    let mut phase = 0.0;
    assert_eq!(policy.displacement(&mut phase, 100.0, Some(400.0)), 2.0);
    assert_eq!(policy.displacement(&mut phase, 400.0, Some(100.0)), -2.0);
    assert_eq!(phase, 0.0);
}

#[test]
fn homing_holds_when_aligned_or_no_player() {
    let policy = MovementPolicy::for_level(3);
    let mut phase = 0.0;
    assert_eq!(policy.displacement(&mut phase, 250.0, Some(250.0)), 0.0);
    assert_eq!(policy.displacement(&mut phase, 250.0, None), 0.0);
}

#[test]
fn fall_speed_grows_with_level() {
    assert_eq!(fall_speed(3.0, 1), 4.0);
    assert_eq!(fall_speed(3.0, 2), 5.0);
    assert_eq!(fall_speed(3.0, 7), 10.0);
}
