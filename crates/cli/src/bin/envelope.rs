use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use hub_shot_calculator::ballistics::compute_envelope;
use hub_shot_calculator::config::{self, GoalConfig};
use hub_shot_calculator::export::envelope as export_envelope;

/// Generate the feasible (angle, speed) envelope for one launch position.
#[derive(Parser, Debug)]
#[command(author, version, about = "Envelope CSV generator for a fixed launch position")]
struct Cli {
    /// Launch x position in metres (negative is in front of the goal)
    #[arg(long, allow_negative_numbers = true, default_value_t = -3.0)]
    x: f64,

    /// Launch height in metres
    #[arg(long, default_value_t = 0.5)]
    y: f64,

    /// Goal geometry manifest (TOML or YAML; defaults to the built-in goal)
    #[arg(long)]
    goal: Option<PathBuf>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/envelope.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !(cli.x.is_finite() && cli.y.is_finite()) {
        return Err(anyhow!("launch position must be finite"));
    }

    let goal = match &cli.goal {
        Some(path) => config::load_goal(path)?,
        None => GoalConfig::default(),
    };

    let envelope = compute_envelope(&goal, cli.x, cli.y);

    eprintln!(
        "envelope at ({:.2}, {:.2}): {} samples, angles {:.1}°..{:.1}°, area {:.4}{}",
        cli.x,
        cli.y,
        envelope.angles_deg.len(),
        envelope.lower_bound_deg,
        envelope.upper_bound_deg,
        envelope.area,
        if envelope.converged {
            ""
        } else {
            " (integration did not converge)"
        }
    );

    let mut writer = export_envelope::writer_for_path(&cli.output)?;
    export_envelope::write_header(writer.as_mut())?;
    for i in 0..envelope.angles_deg.len() {
        let record = export_envelope::Record {
            angle_deg: envelope.angles_deg[i],
            v_near_m_s: envelope.lower_speeds[i],
            v_far_m_s: envelope.upper_speeds[i],
            x_m: cli.x,
            y_m: cli.y,
            area: envelope.area,
        };
        record.write_to(writer.as_mut())?;
    }
    writer.flush()?;

    Ok(())
}
