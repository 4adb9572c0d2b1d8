//! Closed-form launch-speed relation for a fixed start and target point.

use shot_core::constants::G;

/// Required launch speed, squared, to pass through a target point as a
/// function of launch angle.
///
/// Derived from drag-free projectile motion solved for speed at a fixed
/// angle and displacement:
///
/// ```text
/// v² = (0.5·g / (y0 − y1 + Δx·tan θ)) · (Δx / cos θ)²
/// ```
///
/// The denominator goes singular or negative for angles that cannot
/// geometrically reach the target, so `evaluate_squared` may return
/// negative, NaN, or infinite values; callers apply their clamping or
/// sentinel policy before taking a square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCurve {
    start_x_m: f64,
    start_y_m: f64,
    target_x_m: f64,
    target_y_m: f64,
}

impl SpeedCurve {
    /// Build the curve for a `(start, target)` pair of field points.
    pub fn new(start: (f64, f64), target: (f64, f64)) -> Self {
        Self {
            start_x_m: start.0,
            start_y_m: start.1,
            target_x_m: target.0,
            target_y_m: target.1,
        }
    }

    /// Squared speed required at `angle_rad`; may be negative or non-finite.
    pub fn evaluate_squared(&self, angle_rad: f64) -> f64 {
        let dx = self.target_x_m - self.start_x_m;
        let vertical = self.start_y_m - self.target_y_m + dx * angle_rad.tan();
        let horizontal = dx / angle_rad.cos();
        0.5 * G / vertical * horizontal * horizontal
    }

    /// Clamped speed: negative or non-finite squared values map to 0.
    ///
    /// A result of 0 reads "no feasible speed at this angle", never an error.
    pub fn evaluate(&self, angle_rad: f64) -> f64 {
        let squared = self.evaluate_squared(angle_rad);
        if !squared.is_finite() || squared < 0.0 {
            return 0.0;
        }
        squared.sqrt()
    }
}
