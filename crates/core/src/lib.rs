//! Core constants and shared numeric primitives for the Hub Shot Calculator workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Gravitational acceleration at the field surface (m/s²).
    pub const G: f64 = 9.81;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }

    /// Convert metres to millimetres.
    #[inline]
    pub fn m_to_mm(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert millimetres to metres.
    #[inline]
    pub fn mm_to_m(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Uniform sampling helpers shared by the solvers and the survey grid.
pub mod sampling {
    /// `count` values evenly spaced over `[start, stop]`, both endpoints included.
    ///
    /// A count of 0 yields an empty vector; a count of 1 yields `[start]`.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (count - 1) as f64;
                (0..count).map(|i| start + step * i as f64).collect()
            }
        }
    }

    /// Values from `start` (inclusive) to `stop` (exclusive) in increments of `step`.
    ///
    /// A non-positive step yields an empty vector. The index-scaled form keeps
    /// long ranges free of accumulated rounding drift.
    pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
        if step <= 0.0 || stop <= start {
            return Vec::new();
        }
        let count = ((stop - start) / step).ceil() as usize;
        (0..count)
            .map(|i| start + step * i as f64)
            .filter(|v| *v < stop)
            .collect()
    }
}
