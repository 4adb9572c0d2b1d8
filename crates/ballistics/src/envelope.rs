//! Angle/speed feasibility envelope for a fixed launch position.

use shot_config::GoalConfig;
use shot_core::sampling::linspace;

use crate::quadrature;
use crate::speed::SpeedCurve;

const SAMPLE_COUNT: usize = 50;
const AREA_TOLERANCE: f64 = 1e-8;
/// Below this horizontal offset the intersection formula degenerates.
const DEGENERATE_OFFSET_M: f64 = 1e-4;

/// Feasible launch-speed band across the angular sweep from one position.
///
/// `angles_deg` is in degrees (plotting contract); `lower_speeds` tracks the
/// near-edge requirement and `upper_speeds` the far-edge requirement, both
/// clamped at zero for geometrically infeasible angles. A degenerate band
/// (no feasible angle range) has empty sample vectors and zero area — a
/// normal "no feasible shot from here" value.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub area: f64,
    pub lower_bound_deg: f64,
    pub upper_bound_deg: f64,
    pub angles_deg: Vec<f64>,
    pub lower_speeds: Vec<f64>,
    pub upper_speeds: Vec<f64>,
    pub converged: bool,
}

/// Compute the envelope of feasible (angle, speed) pairs from `(x_m, y_m)`.
///
/// The sweep runs from the angle where the near-edge requirement overtakes
/// the far-edge one (closed-form intersection, floored at 5°) up to a fixed
/// 85° ceiling; near-horizontal and near-vertical shots are excluded as
/// numerically unstable and physically impractical.
pub fn compute_envelope(goal: &GoalConfig, x_m: f64, y_m: f64) -> Envelope {
    let far = SpeedCurve::new((x_m, y_m), (goal.half_width_m(), goal.rim_height_m));
    let near = SpeedCurve::new((x_m, y_m), (-goal.half_width_m(), goal.rim_height_m));

    let ceiling = 85.0_f64.to_radians();
    let dy = goal.rim_height_m - y_m;
    let dx_far = goal.half_width_m() - x_m;
    let dx_near = -goal.half_width_m() - x_m;

    let mut intersection = ceiling;
    if dx_far.abs() > DEGENERATE_OFFSET_M && dx_near.abs() > DEGENERATE_OFFSET_M {
        intersection = (dy * (1.0 / dx_far + 1.0 / dx_near)).atan();
    }

    let lower = intersection.max(5.0_f64.to_radians());
    let upper = ceiling;

    if lower >= upper {
        return Envelope {
            area: 0.0,
            lower_bound_deg: lower.to_degrees(),
            upper_bound_deg: upper.to_degrees(),
            angles_deg: Vec::new(),
            lower_speeds: Vec::new(),
            upper_speeds: Vec::new(),
            converged: true,
        };
    }

    let band = |angle: f64| far.evaluate(angle) - near.evaluate(angle);
    let quad = quadrature::integrate(&band, lower, upper, AREA_TOLERANCE);
    let area = if quad.converged {
        quad.value
    } else {
        log::warn!(
            "envelope area integral did not converge at x={x_m:.3} y={y_m:.3}; reporting zero area"
        );
        0.0
    };

    let angles_deg = linspace(lower.to_degrees(), upper.to_degrees(), SAMPLE_COUNT);
    let lower_speeds = angles_deg
        .iter()
        .map(|deg| near.evaluate(deg.to_radians()))
        .collect();
    let upper_speeds = angles_deg
        .iter()
        .map(|deg| far.evaluate(deg.to_radians()))
        .collect();

    Envelope {
        area,
        lower_bound_deg: lower.to_degrees(),
        upper_bound_deg: upper.to_degrees(),
        angles_deg,
        lower_speeds,
        upper_speeds,
        converged: quad.converged,
    }
}
