//! Speed and position slack around a nominal shot.

use shot_config::GoalConfig;
use shot_core::constants::G;

use crate::speed::SpeedCurve;

/// Feasible launch-speed interval at a fixed angle.
///
/// `v_min_m_s > v_max_m_s` (an inverted band) is valid data signalling an
/// infeasible angle; an endpoint of 0 means "infeasible / no speed needed",
/// not that a zero-speed launch would score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBudget {
    pub v_min_m_s: f64,
    pub v_max_m_s: f64,
}

impl SpeedBudget {
    /// True when the band is inverted and no speed can land the shot.
    pub fn is_inverted(&self) -> bool {
        self.v_min_m_s > self.v_max_m_s
    }
}

/// Allowable horizontal launch window at a fixed speed and angle.
///
/// Margins are clamped at zero: a launch point outside the valid window
/// reports the same zero margin as one exactly on its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionBudget {
    pub margin_left_m: f64,
    pub margin_right_m: f64,
    pub x_valid_min_m: f64,
    pub x_valid_max_m: f64,
}

/// Speed interval that lands the shot inside the opening at `angle_rad`.
///
/// The minimum clears the near rim edge; the maximum just reaches the far
/// edge pulled in by the cargo radius.
pub fn speed_budget(goal: &GoalConfig, x0_m: f64, y0_m: f64, angle_rad: f64) -> SpeedBudget {
    let near = SpeedCurve::new((x0_m, y0_m), (-goal.half_width_m(), goal.rim_height_m));
    let far = SpeedCurve::new((x0_m, y0_m), (goal.far_bound_m(), goal.rim_height_m));

    SpeedBudget {
        v_min_m_s: clamped_speed(near.evaluate_squared(angle_rad)),
        v_max_m_s: clamped_speed(far.evaluate_squared(angle_rad)),
    }
}

// NaN and ±inf squared speeds map to the -1 sentinel, and the square-root
// input is floored at zero afterwards.
fn clamped_speed(squared: f64) -> f64 {
    let squared = if squared.is_finite() { squared } else { -1.0 };
    squared.max(0.0).sqrt()
}

/// Horizontal launch window that lands the shot at the current speed and
/// angle, with margins relative to the actual launch point.
///
/// Uses the descending root of the rim-height quadratic,
/// `t = (v_y + √(v_y² − 2g·Δy)) / g`. A shot that cannot reach rim height
/// returns the all-zero budget rather than failing.
pub fn position_budget(
    goal: &GoalConfig,
    x0_m: f64,
    y0_m: f64,
    speed_m_s: f64,
    angle_rad: f64,
) -> PositionBudget {
    let vx = speed_m_s * angle_rad.cos();
    let vy = speed_m_s * angle_rad.sin();
    let dy = goal.rim_height_m - y0_m;

    let disc = vy * vy - 2.0 * G * dy;
    if disc < 0.0 {
        return PositionBudget::default();
    }

    let t = (vy + disc.sqrt()) / G;

    let x_valid_min = -goal.half_width_m() - vx * t;
    let x_valid_max = goal.far_bound_m() - vx * t;

    PositionBudget {
        margin_left_m: (x0_m - x_valid_min).max(0.0),
        margin_right_m: (x_valid_max - x0_m).max(0.0),
        x_valid_min_m: x_valid_min,
        x_valid_max_m: x_valid_max,
    }
}
