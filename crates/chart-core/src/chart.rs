// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless raster rendering pipeline using Skia CPU surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;
use crate::format::ImageFormat;
use crate::grid::{decimals_for, format_tick, nice_step, ticks};
use crate::legend::{self, LegendStyle};
use crate::series::Series;
use crate::text::{estimate_width, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, PX_PER_POINT, WIDTH};
use crate::Axis;

/// Target tick intervals per axis.
const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;
const TICK_LEN: f32 = 5.0;
const TICK_FONT_PT: f32 = 10.0;
const LABEL_FONT_PT: f32 = 10.0;
const TITLE_FONT_PT: f32 = 12.0;
const LINE_WIDTH: f32 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// `None` hides the legend.
    pub legend: Option<LegendStyle>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: Some(LegendStyle::default()),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit the x axis to the data, padding each side by `margin` times the extent.
    /// A single distinct x value gets a unit-wide window around it.
    /// Leaves the axis untouched when no series has finite x data.
    pub fn autoscale_x(&mut self, margin: f64) {
        let range = self
            .series
            .iter()
            .filter_map(Series::x_range)
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)));
        let Some((lo, hi)) = range else { return };
        let span = hi - lo;
        if span < 1e-9 {
            self.x_axis.set_range(lo - 0.5, hi + 0.5);
        } else {
            self.x_axis.set_range(lo - span * margin, hi + span * margin);
        }
    }

    /// Render to an RGBA8 (unpremultiplied) buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.rasterize(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((px, opts.width, opts.height, stride))
    }

    /// Render and encode in memory.
    pub fn render_to_bytes(&self, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(format.to_skia())
            .ok_or(RenderError::Encode(format.name()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        self.render_to_bytes(opts, ImageFormat::Png)
    }

    /// Render to `path`, picking the format from its extension.
    /// The image is fully encoded before the file is touched, so a failed
    /// render never leaves a partial file behind. Existing files are overwritten.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<ImageFormat, RenderError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = self.render_to_bytes(opts, format)?;
        std::fs::write(path, bytes).map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
        Ok(format)
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let frame = PlotFrame { rect: plot_rect(opts), x: &self.x_axis, y: &self.y_axis };
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(frame.rect, &bg);

        let x_ticks = ticks(self.x_axis.min, self.x_axis.max, X_TICKS);
        let y_ticks = ticks(self.y_axis.min, self.y_axis.max, Y_TICKS);
        draw_grid(canvas, &frame, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(frame.rect, skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &frame, s, theme.series_color(i));
        }
        canvas.restore();

        draw_spines(canvas, &frame, theme);
        let tick_label_w = draw_ticks(canvas, &frame, &x_ticks, &y_ticks, theme, shaper.as_ref());

        if let Some(shaper) = &shaper {
            draw_titles(canvas, &frame, &self.title, tick_label_w, theme, shaper);
        }
        if let Some(style) = &self.legend {
            draw_legend(canvas, &frame, style, &self.series, theme, shaper.as_ref());
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Plot area with the data-to-pixel mapping of both axes.
struct PlotFrame<'a> {
    rect: skia::Rect,
    x: &'a Axis,
    y: &'a Axis,
}

impl PlotFrame<'_> {
    fn sx(&self, x: f64) -> f32 {
        self.rect.left + ((x - self.x.min) / self.x.span()) as f32 * self.rect.width()
    }

    fn sy(&self, y: f64) -> f32 {
        self.rect.bottom - ((y - self.y.min) / self.y.span()) as f32 * self.rect.height()
    }
}

fn plot_rect(opts: &RenderOptions) -> skia::Rect {
    let l = opts.insets.left as f32;
    let t = opts.insets.top as f32;
    let r = (opts.width as f32 - opts.insets.right as f32).max(l + 1.0);
    let b = (opts.height as f32 - opts.insets.bottom as f32).max(t + 1.0);
    skia::Rect::from_ltrb(l, t, r, b)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, frame: &PlotFrame, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let r = frame.rect;
    for &x in x_ticks {
        let px = frame.sx(x);
        canvas.draw_line((px, r.top), (px, r.bottom), &paint);
    }
    for &y in y_ticks {
        let py = frame.sy(y);
        canvas.draw_line((r.left, py), (r.right, py), &paint);
    }
}

fn draw_spines(canvas: &skia::Canvas, frame: &PlotFrame, theme: &Theme) {
    canvas.draw_rect(frame.rect, &stroke_paint(theme.axis_line, 1.0));
}

/// Tick marks on the bottom and left spines, plus their labels when a shaper
/// is given. Returns the widest y tick label in pixels.
fn draw_ticks(
    canvas: &skia::Canvas,
    frame: &PlotFrame,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) -> f32 {
    let paint = stroke_paint(theme.axis_line, 1.0);
    let r = frame.rect;
    let size = TICK_FONT_PT * PX_PER_POINT;

    let x_dec = decimals_for(nice_step(frame.x.max - frame.x.min, X_TICKS));
    for &x in x_ticks {
        let px = frame.sx(x);
        canvas.draw_line((px, r.bottom), (px, r.bottom + TICK_LEN), &paint);
        if let Some(shaper) = shaper {
            let text = format_tick(x, x_dec);
            shaper.draw_centered(canvas, &text, px, r.bottom + TICK_LEN + 2.0 + size, size, theme.tick, true);
        }
    }

    let y_dec = decimals_for(nice_step(frame.y.max - frame.y.min, Y_TICKS));
    let mut widest = 0.0f32;
    for &y in y_ticks {
        let py = frame.sy(y);
        canvas.draw_line((r.left - TICK_LEN, py), (r.left, py), &paint);
        if let Some(shaper) = shaper {
            let text = format_tick(y, y_dec);
            widest = widest.max(shaper.measure_width(&text, size, true));
            shaper.draw_right(canvas, &text, r.left - TICK_LEN - 3.0, py + size * 0.35, size, theme.tick, true);
        }
    }
    widest
}

fn draw_titles(
    canvas: &skia::Canvas,
    frame: &PlotFrame,
    title: &str,
    tick_label_w: f32,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let r = frame.rect;
    let tick_px = TICK_FONT_PT * PX_PER_POINT;
    let label_px = LABEL_FONT_PT * PX_PER_POINT;
    let title_px = TITLE_FONT_PT * PX_PER_POINT;

    if !frame.x.label.is_empty() {
        let y = r.bottom + TICK_LEN + 2.0 + tick_px + 8.0 + label_px;
        shaper.draw_centered(canvas, &frame.x.label, r.center_x(), y, label_px, theme.axis_label, false);
    }
    if !frame.y.label.is_empty() {
        // glyphs extend to the left of the baseline once rotated
        let x = (r.left - TICK_LEN - 3.0 - tick_label_w - 8.0).max(label_px + 2.0);
        shaper.draw_vertical(canvas, &frame.y.label, x, r.center_y(), label_px, theme.axis_label);
    }
    if !title.is_empty() {
        shaper.draw_centered(canvas, title, r.center_x(), r.top - 12.0, title_px, theme.title, false);
    }
}

fn draw_line_series(canvas: &skia::Canvas, frame: &PlotFrame, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Non-finite points break the line instead of being joined across.
    let mut path = skia::PathBuilder::new();
    let mut pen_down = false;
    for &(x, y) in data {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = (frame.sx(x), frame.sy(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let mut stroke = stroke_paint(color, LINE_WIDTH);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path.detach(), &stroke);
}

fn draw_legend(
    canvas: &skia::Canvas,
    frame: &PlotFrame,
    style: &LegendStyle,
    series: &[Series],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    let measure = |text: &str, size: f32| match shaper {
        Some(shaper) => shaper.measure_width(text, size, false),
        None => estimate_width(text, size),
    };
    let Some(layout) = legend::layout(style, &labels, frame.rect, measure) else { return };

    let radius = layout.font_px * 0.2;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    canvas.draw_round_rect(layout.frame, radius, radius, &fill);
    canvas.draw_round_rect(layout.frame, radius, radius, &stroke_paint(theme.legend_border, 1.0));

    for (i, (entry, label)) in layout.entries.iter().zip(&labels).enumerate() {
        let (a, b) = entry.handle;
        canvas.draw_line(a, b, &stroke_paint(theme.series_color(i), LINE_WIDTH));
        if let Some(shaper) = shaper {
            let o = entry.text_origin;
            shaper.draw_left(canvas, label, o.x, o.y, layout.font_px, theme.axis_label, false);
        }
    }
}
