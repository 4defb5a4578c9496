// File: crates/perfplot/tests/end_to_end.rs
// Purpose: Drive the compiled binary and the library pipeline against real files.

use std::path::{Path, PathBuf};
use std::process::Command;

use perfplot::{build_chart, run, LabelMode, PlotConfig};

fn write_csv(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perfplot"))
}

fn headless_config(mode: LabelMode) -> PlotConfig {
    let mut config = PlotConfig::new(mode);
    config.render.draw_labels = false;
    config
}

#[test]
fn pipeline_builds_one_series_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "run_var1.csv", "m0,result\n16,2.0\n32,4.0\n");
    let b = write_csv(dir.path(), "run_var22.csv", "m0,result\n16,1.0\n32,8.0\n");
    let c = write_csv(dir.path(), "baseline.csv", "m0,result\n16,0.5\n32,0.7\n");

    let chart = build_chart("t", &[&a, &b, &c], &headless_config(LabelMode::VarPattern)).unwrap();
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["var1", "var22", c.as_str()]);
    assert_eq!(chart.y_axis.max, 12.0);
}

#[test]
fn pipeline_writes_image() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "a.csv", "m0,result\n16,0.2\n32,0.4\n64,0.3\n");
    let out = dir.path().join("chart.png");

    run("t", &out, &[a], &headless_config(LabelMode::Filename)).unwrap();
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn binary_renders_png() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "a.csv", "m0,result\n100,1.5\n200,3.0\n");
    let b = write_csv(dir.path(), "b.csv", "m0,result\n100,2.5\n200,2.0\n");
    let out = dir.path().join("out.png");

    let status = bin().args(["Title", out.to_str().unwrap(), &a, &b]).status().unwrap();
    assert!(status.success());
    assert!(std::fs::read(&out).unwrap().starts_with(&[137, 80, 78, 71]));
}

#[test]
fn binary_too_few_arguments_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let out: PathBuf = dir.path().join("out.png");

    let output = bin().args(["Only a title"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: "), "stdout was {stdout:?}");
    assert!(stdout.contains("chart_title output.png file0.csv"));

    let output = bin().args(["Title", out.to_str().unwrap()]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn binary_missing_result_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_csv(dir.path(), "good.csv", "m0,result\n1,2\n");
    let bad = write_csv(dir.path(), "bad.csv", "m0,gflops\n1,2\n");
    let out = dir.path().join("out.png");

    let output = bin().args(["Title", out.to_str().unwrap(), &good, &bad]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required column `result`"), "stderr was {stderr:?}");
    assert!(!out.exists());
}

#[test]
fn binary_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    let missing = dir.path().join("missing.csv");

    let status = bin().args(["Title", out.to_str().unwrap(), missing.to_str().unwrap()]).status().unwrap();
    assert!(!status.success());
    assert!(!out.exists());
}

#[test]
fn binary_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(dir.path(), "a.csv", "m0,result\n1,2\n");
    let out = dir.path().join("out.bmp");

    let status = bin().args(["Title", out.to_str().unwrap(), &a]).status().unwrap();
    assert!(!status.success());
    assert!(!out.exists());
}
