use std::f64::consts::FRAC_PI_2;

use hub_shot_calculator::ballistics::{PositionBudget, position_budget, speed_budget};
use hub_shot_calculator::config::GoalConfig;

#[test]
fn speed_budget_brackets_a_known_band() {
    let goal = GoalConfig::default();
    let band = speed_budget(&goal, -3.0, 0.5, 60.0_f64.to_radians());

    assert!(!band.is_inverted());
    assert!(
        (band.v_min_m_s - 6.377).abs() < 0.01,
        "v_min = {}",
        band.v_min_m_s
    );
    assert!(
        (band.v_max_m_s - 7.086).abs() < 0.01,
        "v_max = {}",
        band.v_max_m_s
    );
}

#[test]
fn infeasible_angle_floors_the_speed_budget_at_zero() {
    let goal = GoalConfig::default();
    // A shallow angle from far out cannot arc up into the opening; the
    // squared requirement goes negative and the endpoints floor at zero,
    // meaning "infeasible", not "zero speed required".
    let band = speed_budget(&goal, -6.0, 0.5, 5.0_f64.to_radians());
    assert_eq!(band.v_min_m_s, 0.0);
    assert_eq!(band.v_max_m_s, 0.0);
}

#[test]
fn speed_budget_is_defined_at_vertical() {
    let goal = GoalConfig::default();
    let band = speed_budget(&goal, -3.0, 0.5, FRAC_PI_2);
    assert!(!band.v_min_m_s.is_nan());
    assert!(!band.v_max_m_s.is_nan());
    assert!(band.v_min_m_s >= 0.0 && band.v_max_m_s >= 0.0);
}

#[test]
fn position_budget_matches_hand_computed_window() {
    let goal = GoalConfig::default();
    let angle = 60.0_f64.to_radians();
    let window = position_budget(&goal, -3.0, 0.5, 8.0, angle);

    // Descending crossing time for v=8 at 60°.
    let vy = 8.0 * angle.sin();
    let vx = 8.0 * angle.cos();
    let t = (vy + (vy * vy - 2.0 * 9.81 * (goal.rim_height_m - 0.5)).sqrt()) / 9.81;

    let expected_min = -goal.half_width_m() - vx * t;
    let expected_max = goal.far_bound_m() - vx * t;
    assert!((window.x_valid_min_m - expected_min).abs() < 1e-9);
    assert!((window.x_valid_max_m - expected_max).abs() < 1e-9);
}

#[test]
fn position_budget_is_all_zero_when_rim_height_is_unreachable() {
    let goal = GoalConfig::default();
    let window = position_budget(&goal, -3.0, 0.5, 3.0, 60.0_f64.to_radians());
    assert_eq!(window, PositionBudget::default());
    assert_eq!(
        (
            window.margin_left_m,
            window.margin_right_m,
            window.x_valid_min_m,
            window.x_valid_max_m
        ),
        (0.0, 0.0, 0.0, 0.0)
    );
}

#[test]
fn ghost_window_clamps_margins_to_zero() {
    // Known ambiguity: when the launch point sits outside the valid
    // window entirely, the clamped margins are indistinguishable from a
    // boundary-tight shot. Kept for client compatibility. The golden shot
    // (v=8 at 60° from x=-3) overshoots, so its window lies wholly to the
    // left of the launch point and the right margin clamps to zero.
    let goal = GoalConfig::default();
    let window = position_budget(&goal, -3.0, 0.5, 8.0, 60.0_f64.to_radians());

    assert!(window.x_valid_max_m < -3.0, "premise: ghost window");
    assert_eq!(window.margin_right_m, 0.0);
    assert!(window.margin_left_m > 0.0);
}

#[test]
fn margins_are_never_negative() {
    let goal = GoalConfig::default();
    for v in [4.0, 6.0, 8.0, 10.0] {
        for angle_deg in [30.0f64, 45.0, 60.0, 75.0] {
            let window = position_budget(&goal, -3.0, 0.5, v, angle_deg.to_radians());
            assert!(window.margin_left_m >= 0.0);
            assert!(window.margin_right_m >= 0.0);
        }
    }
}
