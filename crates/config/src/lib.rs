//! Configuration models and loaders for the Hub Shot Calculator.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Goal opening geometry parsed from a goal manifest.
///
/// All dimensions are metres. The launch plane is the vertical plane through
/// the launch point and the goal centre; the rim spans
/// `[-rim_width_m / 2, rim_width_m / 2]` at height `rim_height_m`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GoalConfig {
    #[serde(default)]
    pub name: String,
    pub rim_width_m: f64,
    pub rim_height_m: f64,
    pub cargo_radius_m: f64,
}

impl GoalConfig {
    /// Half the rim opening width.
    pub fn half_width_m(&self) -> f64 {
        self.rim_width_m / 2.0
    }

    /// Far landing bound: the far rim edge pulled in by the cargo radius.
    ///
    /// Clearance is asymmetric: only the leading edge of the cargo has to
    /// clear the far rim, so the near bound stays at the bare rim edge.
    pub fn far_bound_m(&self) -> f64 {
        self.half_width_m() - self.cargo_radius_m
    }

    /// Check the geometric invariants the solvers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rim_width_m > 2.0 * self.cargo_radius_m) {
            return Err(ConfigError::NarrowOpening {
                rim_width_m: self.rim_width_m,
                cargo_diameter_m: 2.0 * self.cargo_radius_m,
            });
        }
        if self.rim_height_m <= 0.0 {
            return Err(ConfigError::InvalidDimension("rim_height_m"));
        }
        if self.cargo_radius_m < 0.0 {
            return Err(ConfigError::InvalidDimension("cargo_radius_m"));
        }
        Ok(())
    }
}

impl Default for GoalConfig {
    /// Built-in geometry: 41 in rim opening, 72 in rim height, 5.91 in cargo.
    fn default() -> Self {
        Self {
            name: "FRC 2026 REBUILT upper hub".to_string(),
            rim_width_m: 1.0414,
            rim_height_m: 1.8288,
            cargo_radius_m: 0.150114 / 2.0,
        }
    }
}

/// Survey grid over launch positions, arange-style (stop is exclusive).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    pub x_start_m: f64,
    pub x_stop_m: f64,
    pub x_step_m: f64,
    pub y_start_m: f64,
    pub y_stop_m: f64,
    pub y_step_m: f64,
}

impl GridConfig {
    /// Check that both axes describe non-empty forward ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_step_m <= 0.0 || self.x_stop_m <= self.x_start_m {
            return Err(ConfigError::InvalidDimension("x axis"));
        }
        if self.y_step_m <= 0.0 || self.y_stop_m <= self.y_start_m {
            return Err(ConfigError::InvalidDimension("y axis"));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    /// Launch positions in front of the goal: x in [-6, -1) m, y in [0.2, 1.25) m.
    fn default() -> Self {
        Self {
            x_start_m: -6.0,
            x_stop_m: -1.0,
            x_step_m: 0.1,
            y_start_m: 0.2,
            y_stop_m: 1.25,
            y_step_m: 0.1,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("rim opening ({rim_width_m} m) must exceed the cargo diameter ({cargo_diameter_m} m)")]
    NarrowOpening {
        rim_width_m: f64,
        cargo_diameter_m: f64,
    },
    #[error("configuration dimension out of range: {0}")]
    InvalidDimension(&'static str),
}

/// Load and validate a goal geometry manifest (TOML or YAML by extension).
pub fn load_goal<P: AsRef<Path>>(path: P) -> Result<GoalConfig, ConfigError> {
    let goal: GoalConfig = load_record(path)?;
    goal.validate()?;
    Ok(goal)
}

/// Load and validate a survey grid manifest (TOML or YAML by extension).
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<GridConfig, ConfigError> {
    let grid: GridConfig = load_record(path)?;
    grid.validate()?;
    Ok(grid)
}

fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
