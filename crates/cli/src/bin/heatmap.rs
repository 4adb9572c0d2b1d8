use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use hub_shot_calculator::config::{self, GoalConfig, GridConfig};
use hub_shot_calculator::export::heatmap as export_heatmap;
use hub_shot_calculator::survey::{self, EnvelopeCache};

/// Survey a grid of launch positions and export the feasibility heatmap.
#[derive(Parser, Debug)]
#[command(author, version, about = "Heatmap CSV/JSON generator over launch positions")]
struct Cli {
    /// Goal geometry manifest (TOML or YAML; defaults to the built-in goal)
    #[arg(long)]
    goal: Option<PathBuf>,

    /// Survey grid manifest (TOML or YAML; defaults to the built-in grid)
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/heatmap.csv")]
    output: PathBuf,

    /// Optional JSON dataset sidecar for the visualization client
    #[arg(long)]
    dataset: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let goal = match &cli.goal {
        Some(path) => config::load_goal(path)?,
        None => GoalConfig::default(),
    };
    let grid = match &cli.grid {
        Some(path) => config::load_grid(path)?,
        None => GridConfig::default(),
    };

    let cache = EnvelopeCache::with_default_capacity();
    let cells = survey::generate(&goal, &grid, &cache);
    let dataset = survey::compute_dataset(&goal, &grid, &cells);

    let mut writer = export_heatmap::writer_for_path(&cli.output)?;
    export_heatmap::write_header(writer.as_mut())?;
    for cell in &cells {
        let record = export_heatmap::Record {
            x_m: cell.x_m,
            y_m: cell.y_m,
            area: cell.area,
            score: cell.score,
            converged: cell.converged,
            rim_width_m: goal.rim_width_m,
            rim_height_m: goal.rim_height_m,
            cargo_radius_m: goal.cargo_radius_m,
            generated_utc: &dataset.generated_utc,
        };
        record.write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if let Some(path) = &cli.dataset {
        survey::save_dataset(path, &dataset)?;
    }

    let stats = cache.stats();
    eprintln!(
        "surveyed {} positions ({} x {}); cache hits {} misses {}",
        cells.len(),
        dataset.x.len(),
        dataset.y.len(),
        stats.hits,
        stats.misses
    );
    if let (Some(score), Some(x), Some(y)) = (dataset.best_score, dataset.best_x_m, dataset.best_y_m)
    {
        eprintln!("best position : ({x:.2}, {y:.2}) with score {score:.4}");
    }

    Ok(())
}
