use chrono::DateTime;
use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a launch-position feasibility heatmap from survey CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/heatmap.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Debug, Clone)]
struct Cell {
    x_m: f64,
    y_m: f64,
    score: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (cells, mut x_vals, mut y_vals, generated_utc) = read_cells(&cli.input)?;

    if cells.is_empty() {
        return Err(anyhow::anyhow!("No survey cells in the provided CSV"));
    }

    x_vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    x_vals.dedup();
    y_vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    y_vals.dedup();

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = *x_vals.first().expect("x range");
    let x_max = *x_vals.last().expect("x range");
    let y_min = *y_vals.first().expect("y range");
    let y_max = *y_vals.last().expect("y range");

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let legend_width = 140i32;
    let (plot_area, legend_area) =
        root.split_horizontally((cli.width as i32 - legend_width).max(200));

    let grid = build_grid(&cells, &x_vals, &y_vals);
    let mut min_score = f64::INFINITY;
    let mut max_score = f64::NEG_INFINITY;
    let mut best_pos: Option<(usize, usize)> = None;
    for (y_idx, row) in grid.iter().enumerate() {
        for (x_idx, &v) in row.iter().enumerate() {
            if v.is_finite() {
                if v > max_score {
                    max_score = v;
                    best_pos = Some((x_idx, y_idx));
                }
                if v < min_score {
                    min_score = v;
                }
            }
        }
    }

    let (best_x_idx, best_y_idx) =
        best_pos.ok_or_else(|| anyhow::anyhow!("No finite scores in the provided CSV"))?;
    if !min_score.is_finite() {
        min_score = max_score;
    }
    if (max_score - min_score).abs() < f64::EPSILON {
        max_score = min_score + 1.0;
    }

    let caption = match generated_date(&generated_utc) {
        Some(date) => format!("Shot feasibility heatmap ({date})"),
        None => "Shot feasibility heatmap".to_string(),
    };

    {
        let mut chart = ChartBuilder::on(&plot_area)
            .margin(20)
            .caption(caption, caption_font)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Launch x (m)")
            .y_desc("Launch height (m)")
            .label_style(label_font.clone())
            .x_labels(6)
            .y_labels(6)
            .x_label_formatter(&|v| format!("{v:.1}"))
            .y_label_formatter(&|v| format!("{v:.2}"))
            .draw()?;

        for (y_idx, row) in grid.iter().enumerate() {
            let (y0, y1) = cell_bounds(&y_vals, y_idx);
            for (x_idx, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    continue;
                }
                let (x0, x1) = cell_bounds(&x_vals, x_idx);
                let t = (value - min_score) / (max_score - min_score);
                let color = jet_color(t);
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(x0, y0), (x1, y1)],
                    color.filled(),
                )))?;
            }
        }

        let x = x_vals[best_x_idx];
        let y = y_vals[best_y_idx];
        let marker_color = RGBColor(210, 100, 20);
        let cross_half_width = (x_max - x_min) * 0.02;
        let cross_half_height = (y_max - y_min) * 0.02;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - cross_half_width, y), (x + cross_half_width, y)],
            ShapeStyle::from(&marker_color).stroke_width(3),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, y - cross_half_height), (x, y + cross_half_height)],
            ShapeStyle::from(&marker_color).stroke_width(3),
        )))?;
        let text = format!("best {:.3}", max_score);
        let text_pos = (x + 0.02 * (x_max - x_min), y + 0.02 * (y_max - y_min));
        chart.draw_series(std::iter::once(Text::new(
            text,
            text_pos,
            label_font.clone().color(&marker_color),
        )))?;
    }

    {
        let mut chart = ChartBuilder::on(&legend_area)
            .margin_left(20)
            .margin_right(20)
            .margin_top(30)
            .margin_bottom(30)
            .x_label_area_size(0)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..1.0, min_score..max_score)?;

        for i in 0..300 {
            let t0 = i as f64 / 300.0;
            let t1 = (i + 1) as f64 / 300.0;
            let v0 = min_score + (max_score - min_score) * t0;
            let v1 = min_score + (max_score - min_score) * t1;
            let color = jet_color(t0);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, v0), (1.0, v1)],
                color.filled(),
            )))?;
        }

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(0)
            .y_labels(6)
            .y_desc("Weighted envelope area")
            .y_label_style(label_font.clone())
            .axis_desc_style(label_font.clone())
            .y_label_formatter(&|v| format!("{v:.3}"))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_cells(path: &str) -> anyhow::Result<(Vec<Cell>, Vec<f64>, Vec<f64>, Option<String>)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let x_idx = column_index(&headers, "x_m")?;
    let y_idx = column_index(&headers, "y_m")?;
    let score_idx = column_index(&headers, "score")?;
    let generated_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("generated_utc"));

    let mut cells = Vec::new();
    let mut x_vals = Vec::new();
    let mut y_vals = Vec::new();
    let mut generated_utc: Option<String> = None;
    for rec in rdr.records() {
        let r = rec?;
        let x_m: f64 = r.get(x_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let y_m: f64 = r.get(y_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let score: f64 = r.get(score_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if generated_utc.is_none() {
            generated_utc = generated_idx
                .and_then(|idx| r.get(idx))
                .map(|s| s.to_string());
        }
        if x_m.is_finite() && y_m.is_finite() && score.is_finite() {
            x_vals.push(x_m);
            y_vals.push(y_m);
            cells.push(Cell { x_m, y_m, score });
        }
    }
    Ok((cells, x_vals, y_vals, generated_utc))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
}

fn generated_date(stamp: &Option<String>) -> Option<String> {
    let stamp = stamp.as_deref()?;
    let parsed = DateTime::parse_from_rfc3339(stamp).ok()?;
    Some(parsed.format("%Y-%m-%d").to_string())
}

fn build_grid(cells: &[Cell], x_vals: &[f64], y_vals: &[f64]) -> Vec<Vec<f64>> {
    let mut grid = vec![vec![f64::NAN; x_vals.len()]; y_vals.len()];
    for cell in cells {
        let x_idx = nearest_index(x_vals, cell.x_m);
        let y_idx = nearest_index(y_vals, cell.y_m);
        grid[y_idx][x_idx] = cell.score;
    }
    grid
}

fn nearest_index(coords: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &c) in coords.iter().enumerate() {
        let dist = (c - value).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn cell_bounds(coords: &[f64], idx: usize) -> (f64, f64) {
    let value = coords[idx];
    let before = if idx > 0 {
        0.5 * (value - coords[idx - 1])
    } else if coords.len() > 1 {
        0.5 * (coords[1] - value)
    } else {
        0.5
    };
    let after = if idx + 1 < coords.len() {
        0.5 * (coords[idx + 1] - value)
    } else {
        before
    };
    (value - before, value + after)
}

fn jet_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
