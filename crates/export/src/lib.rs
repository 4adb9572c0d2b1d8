//! Export helpers for CSV and JSON artifacts.

pub mod envelope {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "angle_deg,v_near_m_s,v_far_m_s,x_m,y_m,area";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard envelope CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the envelope exporter: one sampled angle with its
    /// near/far speed requirements plus the position/area metadata shared by
    /// every row of the sweep.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub angle_deg: f64,
        pub v_near_m_s: f64,
        pub v_far_m_s: f64,
        pub x_m: f64,
        pub y_m: f64,
        pub area: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6},{:.6},{:.6},{:.3},{:.3},{:.6}",
                self.angle_deg, self.v_near_m_s, self.v_far_m_s, self.x_m, self.y_m, self.area,
            )
        }
    }
}

pub mod heatmap {
    use std::io::{self, Write};

    pub use super::envelope::writer_for_path;

    const HEADER: &str =
        "x_m,y_m,area,score,converged,rim_width_m,rim_height_m,cargo_radius_m,generated_utc";

    /// Write the standard heatmap CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the survey exporter; consumed by `heatmap_plot`.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub x_m: f64,
        pub y_m: f64,
        pub area: f64,
        pub score: f64,
        pub converged: bool,
        pub rim_width_m: f64,
        pub rim_height_m: f64,
        pub cargo_radius_m: f64,
        pub generated_utc: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{:.3},{:.6},{:.6},{},{:.4},{:.4},{:.6},{}",
                self.x_m,
                self.y_m,
                self.area,
                self.score,
                if self.converged { "true" } else { "false" },
                self.rim_width_m,
                self.rim_height_m,
                self.cargo_radius_m,
                self.generated_utc,
            )
        }
    }
}

pub mod shot {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Speed slack at the evaluated angle.
    #[derive(Debug, Clone, Serialize)]
    pub struct SpeedBudgetReport {
        pub v_min_m_s: f64,
        pub v_max_m_s: f64,
    }

    /// Horizontal-position slack at the evaluated speed and angle.
    #[derive(Debug, Clone, Serialize)]
    pub struct PositionBudgetReport {
        pub margin_left_m: f64,
        pub margin_right_m: f64,
        pub x_valid_min_m: f64,
        pub x_valid_max_m: f64,
    }

    /// Ground-clipped trajectory samples for rendering.
    #[derive(Debug, Clone, Serialize)]
    pub struct TrajectoryReport {
        pub xs: Vec<f64>,
        pub ys: Vec<f64>,
    }

    /// JSON payload describing one evaluated shot; the document a
    /// visualization client consumes.
    #[derive(Debug, Clone, Serialize)]
    pub struct ShotReport {
        pub x_m: f64,
        pub y_m: f64,
        pub speed_m_s: f64,
        pub angle_deg: f64,
        pub outcome: &'static str,
        pub speed_budget: SpeedBudgetReport,
        pub position_budget: PositionBudgetReport,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub trajectory: Option<TrajectoryReport>,
    }

    /// Write the report as pretty JSON, creating parent directories as needed.
    pub fn write_report(path: &Path, report: &ShotReport) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, report)?;
        Ok(())
    }
}
