use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn heatmap_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("heatmap.csv");
    let png_path = dir.path().join("heatmap.png");

    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(
        file,
        "x_m,y_m,area,score,converged,rim_width_m,rim_height_m,cargo_radius_m,generated_utc"
    )
    .unwrap();
    for xi in 0..4 {
        for yi in 0..3 {
            let x = -5.0 + xi as f64 * 0.5;
            let y = 0.3 + yi as f64 * 0.2;
            let area = 1.0 + xi as f64 * 0.2 + yi as f64 * 0.1;
            writeln!(
                file,
                "{x:.3},{y:.3},{area:.6},{:.6},true,1.0414,1.8288,0.075057,2026-08-07T00:00:00Z",
                area * 0.3,
            )
            .unwrap();
        }
    }

    Command::cargo_bin("heatmap_plot")
        .expect("heatmap_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "400",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}
