//! Forward trajectory sampling for plotting.

use shot_core::constants::G;
use shot_core::sampling::linspace;

const FLIGHT_WINDOW_S: f64 = 2.0;
const SAMPLE_COUNT: usize = 100;

/// Ground-clipped position samples of a simulated shot; `xs` and `ys` have
/// equal length.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Sample the flight path over a fixed two-second window at 100 uniform
/// time steps, dropping samples below ground level.
///
/// A shot with zero horizontal velocity returns an empty trajectory; a
/// degenerate vertical line is not worth rendering. This is a plotting aid
/// and plays no part in classification.
pub fn simulate(x0_m: f64, y0_m: f64, speed_m_s: f64, angle_rad: f64) -> Trajectory {
    let vx = speed_m_s * angle_rad.cos();
    let vy = speed_m_s * angle_rad.sin();

    // cos(90°) is not exactly zero in floats; anything below a picometre
    // per second of horizontal drift counts as a vertical shot.
    if vx.abs() < 1e-12 {
        return Trajectory::default();
    }

    let mut xs = Vec::with_capacity(SAMPLE_COUNT);
    let mut ys = Vec::with_capacity(SAMPLE_COUNT);
    for t in linspace(0.0, FLIGHT_WINDOW_S, SAMPLE_COUNT) {
        let y = y0_m + vy * t - 0.5 * G * t * t;
        if y < 0.0 {
            continue;
        }
        xs.push(x0_m + vx * t);
        ys.push(y);
    }

    Trajectory { xs, ys }
}
