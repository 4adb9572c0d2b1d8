use std::f64::consts::FRAC_PI_2;

use hub_shot_calculator::ballistics::simulate;

#[test]
fn trajectory_is_ground_clipped_and_bounded() {
    let plot = simulate(-3.0, 0.5, 8.0, 60.0_f64.to_radians());

    assert_eq!(plot.xs.len(), plot.ys.len());
    assert!(!plot.xs.is_empty());
    assert!(plot.xs.len() <= 100);
    for &y in &plot.ys {
        assert!(y >= 0.0, "sample below ground: {y}");
    }
}

#[test]
fn trajectory_starts_at_the_launch_point() {
    let plot = simulate(-3.0, 0.5, 8.0, 60.0_f64.to_radians());
    assert!((plot.xs[0] + 3.0).abs() < 1e-12);
    assert!((plot.ys[0] - 0.5).abs() < 1e-12);
}

#[test]
fn low_flat_shot_is_truncated_by_the_ground() {
    // A slow, low shot from the floor falls below ground well inside the
    // two-second window, so fewer than the full 100 samples survive.
    let plot = simulate(-3.0, 0.0, 2.0, 10.0_f64.to_radians());
    assert!(plot.xs.len() < 100);
    assert!(!plot.xs.is_empty());
}

#[test]
fn vertical_shot_renders_nothing() {
    let plot = simulate(-3.0, 0.5, 8.0, FRAC_PI_2);
    assert!(plot.xs.is_empty());
    assert!(plot.ys.is_empty());
}

#[test]
fn zero_speed_shot_renders_nothing() {
    let plot = simulate(-3.0, 0.5, 0.0, 60.0_f64.to_radians());
    assert!(plot.xs.is_empty());
    assert!(plot.ys.is_empty());
}
