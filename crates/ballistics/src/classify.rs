//! Outcome classification for a fully-specified shot.

use std::fmt;

use shot_config::GoalConfig;
use shot_core::constants::G;

/// Where a shot ends up relative to the goal opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Make,
    Short,
    Long,
    Miss,
}

impl Outcome {
    /// Lowercase wire name used in reports and datasets.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Make => "make",
            Outcome::Short => "short",
            Outcome::Long => "long",
            Outcome::Miss => "miss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a shot by solving for the times the flight path crosses rim
/// height, `0.5·g·t² − v_y·t + (H − y0) = 0`.
///
/// Only a descending crossing (vertical velocity strictly negative) can
/// score; ascending crossings on the way up are ignored so a shot that
/// pierces the rim plane twice is judged where it comes down. Roots are
/// examined in ascending time order. The landing window is
/// `[−W/2, W/2 − r]`: the far bound is pulled in by the cargo radius, the
/// near bound intentionally is not.
pub fn classify(goal: &GoalConfig, x0_m: f64, y0_m: f64, speed_m_s: f64, angle_rad: f64) -> Outcome {
    let vx = speed_m_s * angle_rad.cos();
    let vy = speed_m_s * angle_rad.sin();

    let a = 0.5 * G;
    let b = -vy;
    let c = goal.rim_height_m - y0_m;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Outcome::Miss;
    }

    let sqrt_disc = disc.sqrt();
    let roots = [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)];

    for t in roots {
        if t <= 0.0 {
            continue;
        }
        let vy_at_rim = vy - G * t;
        if vy_at_rim >= 0.0 {
            continue;
        }

        let x_at_rim = x0_m + vx * t;
        return if x_at_rim < -goal.half_width_m() {
            Outcome::Short
        } else if x_at_rim > goal.far_bound_m() {
            Outcome::Long
        } else {
            Outcome::Make
        };
    }

    Outcome::Miss
}
