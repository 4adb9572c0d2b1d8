use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use hub_shot_calculator::ballistics::{classify, position_budget, simulate, speed_budget};
use hub_shot_calculator::config::{self, GoalConfig};
use hub_shot_calculator::export::shot as export_shot;

/// Evaluate a single shot against the goal opening.
#[derive(Parser, Debug)]
#[command(author, version, about = "Classify a shot and report its speed/position budgets")]
struct Cli {
    /// Launch x position in metres (negative is in front of the goal)
    #[arg(long, allow_negative_numbers = true, default_value_t = -3.0)]
    x: f64,

    /// Launch height in metres
    #[arg(long, default_value_t = 0.5)]
    y: f64,

    /// Launch speed in m/s
    #[arg(long, default_value_t = 8.0)]
    speed: f64,

    /// Launch angle in degrees above horizontal
    #[arg(long, default_value_t = 60.0)]
    angle_deg: f64,

    /// Goal geometry manifest (TOML or YAML; defaults to the built-in goal)
    #[arg(long)]
    goal: Option<PathBuf>,

    /// Write a JSON shot report for the visualization client
    #[arg(long)]
    report: Option<PathBuf>,

    /// Include trajectory samples in the report
    #[arg(long, default_value_t = false)]
    with_trajectory: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !(cli.x.is_finite() && cli.y.is_finite() && cli.speed.is_finite() && cli.angle_deg.is_finite())
    {
        return Err(anyhow!("shot parameters must be finite numbers"));
    }
    if cli.speed < 0.0 {
        return Err(anyhow!("launch speed cannot be negative"));
    }

    let goal = load_goal(cli.goal.as_deref())?;
    let angle_rad = cli.angle_deg.to_radians();

    let outcome = classify(&goal, cli.x, cli.y, cli.speed, angle_rad);
    let speed_band = speed_budget(&goal, cli.x, cli.y, angle_rad);
    let window = position_budget(&goal, cli.x, cli.y, cli.speed, angle_rad);

    println!("=== Shot Evaluation ===");
    println!("Goal           : {}", goal.name);
    println!(
        "Launch         : x = {:.3} m, y = {:.3} m, v = {:.3} m/s, angle = {:.1}°",
        cli.x, cli.y, cli.speed, cli.angle_deg
    );
    println!("Outcome        : {}", outcome);
    if speed_band.is_inverted() {
        println!(
            "Speed budget   : infeasible at this angle (band inverted: {:.3} > {:.3} m/s)",
            speed_band.v_min_m_s, speed_band.v_max_m_s
        );
    } else {
        println!(
            "Speed budget   : {:.3} .. {:.3} m/s",
            speed_band.v_min_m_s, speed_band.v_max_m_s
        );
    }
    println!(
        "Position budget: -{:.3} m / +{:.3} m (valid x = {:.3} .. {:.3} m)",
        window.margin_left_m, window.margin_right_m, window.x_valid_min_m, window.x_valid_max_m
    );

    if let Some(report_path) = &cli.report {
        let trajectory = cli.with_trajectory.then(|| {
            let samples = simulate(cli.x, cli.y, cli.speed, angle_rad);
            export_shot::TrajectoryReport {
                xs: samples.xs,
                ys: samples.ys,
            }
        });

        let report = export_shot::ShotReport {
            x_m: cli.x,
            y_m: cli.y,
            speed_m_s: cli.speed,
            angle_deg: cli.angle_deg,
            outcome: outcome.as_str(),
            speed_budget: export_shot::SpeedBudgetReport {
                v_min_m_s: speed_band.v_min_m_s,
                v_max_m_s: speed_band.v_max_m_s,
            },
            position_budget: export_shot::PositionBudgetReport {
                margin_left_m: window.margin_left_m,
                margin_right_m: window.margin_right_m,
                x_valid_min_m: window.x_valid_min_m,
                x_valid_max_m: window.x_valid_max_m,
            },
            trajectory,
        };
        export_shot::write_report(report_path, &report)?;
        println!("Report written : {}", report_path.display());
    }

    Ok(())
}

fn load_goal(path: Option<&std::path::Path>) -> anyhow::Result<GoalConfig> {
    match path {
        Some(path) => Ok(config::load_goal(path)?),
        None => Ok(GoalConfig::default()),
    }
}
