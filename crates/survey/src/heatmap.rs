//! Heatmap grid generation over launch positions.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use shot_ballistics::envelope::compute_envelope;
use shot_config::{GoalConfig, GridConfig};
use shot_core::sampling::arange;

use crate::cache::EnvelopeCache;

pub const HEATMAP_DATASET_VERSION: u32 = 1;

/// One surveyed launch position.
///
/// `score` is the envelope area weighted by the angular width of the goal
/// opening as seen from the launch distance, `atan2(W, |x|)`: positions
/// close to the goal get credit for the wider apparent target.
#[derive(Debug, Clone)]
pub struct HeatmapCell {
    pub x_index: usize,
    pub y_index: usize,
    pub x_m: f64,
    pub y_m: f64,
    pub area: f64,
    pub score: f64,
    pub converged: bool,
}

/// Serialized survey artifact consumed by the plotting binary and the
/// visualization client. `z` is row-major, `z[y_index][x_index]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapDataset {
    pub version: u32,
    pub generated_utc: String,
    pub rim_width_m: f64,
    pub rim_height_m: f64,
    pub cargo_radius_m: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub best_score: Option<f64>,
    pub best_x_m: Option<f64>,
    pub best_y_m: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sweep the grid and score every launch position.
///
/// Envelopes are fetched through the cache, so repeated surveys over
/// overlapping grids only pay for new positions.
pub fn generate(goal: &GoalConfig, grid: &GridConfig, cache: &EnvelopeCache) -> Vec<HeatmapCell> {
    let xs = arange(grid.x_start_m, grid.x_stop_m, grid.x_step_m);
    let ys = arange(grid.y_start_m, grid.y_stop_m, grid.y_step_m);

    let mut cells = Vec::with_capacity(xs.len() * ys.len());
    for (x_index, &x) in xs.iter().enumerate() {
        for (y_index, &y) in ys.iter().enumerate() {
            let envelope = cache.get_or_compute(x, y, || compute_envelope(goal, x, y));
            let score = envelope.area * goal.rim_width_m.atan2(x.abs());
            cells.push(HeatmapCell {
                x_index,
                y_index,
                x_m: x,
                y_m: y,
                area: envelope.area,
                score,
                converged: envelope.converged,
            });
        }
    }
    cells
}

/// Assemble the serialized dataset from surveyed cells, stamped with the
/// generation time.
pub fn compute_dataset(
    goal: &GoalConfig,
    grid: &GridConfig,
    cells: &[HeatmapCell],
) -> HeatmapDataset {
    let xs = arange(grid.x_start_m, grid.x_stop_m, grid.x_step_m);
    let ys = arange(grid.y_start_m, grid.y_stop_m, grid.y_step_m);

    let mut z = vec![vec![f64::NAN; xs.len()]; ys.len()];
    let mut best: Option<&HeatmapCell> = None;
    for cell in cells {
        if cell.y_index < z.len() && cell.x_index < xs.len() {
            z[cell.y_index][cell.x_index] = cell.score;
        }
        let better = match best {
            Some(current) => cell.score > current.score,
            None => cell.score.is_finite(),
        };
        if better {
            best = Some(cell);
        }
    }

    HeatmapDataset {
        version: HEATMAP_DATASET_VERSION,
        generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        rim_width_m: goal.rim_width_m,
        rim_height_m: goal.rim_height_m,
        cargo_radius_m: goal.cargo_radius_m,
        x: xs,
        y: ys,
        z,
        best_score: best.map(|c| c.score),
        best_x_m: best.map(|c| c.x_m),
        best_y_m: best.map(|c| c.y_m),
    }
}

/// Write the dataset as pretty JSON, creating parent directories as needed.
pub fn save_dataset(path: &Path, dataset: &HeatmapDataset) -> Result<(), SurveyError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dataset)?;
    Ok(())
}

/// Read a dataset previously written by [`save_dataset`].
pub fn load_dataset(path: &Path) -> Result<HeatmapDataset, SurveyError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset = serde_json::from_reader(reader)?;
    Ok(dataset)
}
