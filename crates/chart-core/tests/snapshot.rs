// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic multi-series chart with a compact legend to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, checks canvas size, background and series strokes, and asks for a bless run.

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{Axis, Chart, LegendStyle, RenderOptions, Series, Theme};

fn near(px: &image::Rgba<u8>, c: skia_safe::Color) -> bool {
    let want = [c.r(), c.g(), c.b()];
    px.0[..3].iter().zip(want).all(|(&a, b)| a.abs_diff(b) <= 8)
}

/// Properties that hold for the snapshot chart whether or not a golden file exists.
fn assert_chart_structure(img: &image::RgbaImage) {
    assert_eq!(img.dimensions(), (WIDTH as u32, HEIGHT as u32));
    let theme = Theme::light();
    assert!(near(img.get_pixel(0, 0), theme.background), "corner is not the background");
    for i in 0..2 {
        let color = theme.series_color(i);
        assert!(img.pixels().any(|p| near(p, color)), "series {i} stroke not found");
    }
}

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 3.0);
    chart.legend = Some(LegendStyle::compact());
    chart.add_series(Series::with_data(
        "var1",
        vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)],
    ));
    chart.add_series(Series::with_data("var2", vec![(0.0, 0.5), (2.0, 2.0), (4.0, 1.8)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_two_series_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("two_series.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    assert_chart_structure(&got_img);

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_repeatable_without_text() {
    assert_eq!(render_bytes(), render_bytes());
}
