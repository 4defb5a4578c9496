// File: crates/chart-core/src/legend.rs
// Summary: Legend style and layout (upper-right corner of the plot area).
// Notes:
// - Spacing and paddings are expressed in units of the legend font size,
//   the same convention matplotlib uses, so presets translate one-to-one.

use skia_safe as skia;

use crate::types::PX_PER_POINT;

/// Padding between the frame and its content.
const BORDER_PAD: f32 = 0.4;
/// Length of the line sample drawn next to each label.
const HANDLE_LENGTH: f32 = 2.0;
/// Gap between the line sample and the label text.
const HANDLE_TEXT_PAD: f32 = 0.8;
/// Gap between the frame and the plot border.
const AXES_PAD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendStyle {
    /// Vertical gap between entries, in font-size units.
    pub label_spacing: f32,
    /// Label font size in points.
    pub font_size: f32,
}

impl LegendStyle {
    pub const fn new(label_spacing: f32, font_size: f32) -> Self {
        Self { label_spacing, font_size }
    }

    /// Tighter legend for many short labels.
    pub const fn compact() -> Self {
        Self::new(0.25, 8.0)
    }

    /// Font size converted to pixels.
    pub fn font_px(&self) -> f32 {
        self.font_size.max(1.0) * PX_PER_POINT
    }
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self::new(0.5, 10.0)
    }
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// Start and end of the line sample.
    pub handle: (skia::Point, skia::Point),
    /// Left end of the text baseline.
    pub text_origin: skia::Point,
}

#[derive(Clone, Debug)]
pub struct LegendLayout {
    pub frame: skia::Rect,
    pub font_px: f32,
    pub entries: Vec<LegendEntry>,
}

/// Lay out one entry per label, top to bottom in the given order.
/// `measure(text, font_px)` returns the rendered text width in pixels.
/// Returns `None` when there is nothing to show.
pub fn layout<F>(style: &LegendStyle, labels: &[&str], plot: skia::Rect, measure: F) -> Option<LegendLayout>
where
    F: Fn(&str, f32) -> f32,
{
    if labels.is_empty() { return None; }

    let fp = style.font_px();
    let spacing = style.label_spacing.max(0.0) * fp;
    let n = labels.len() as f32;

    let text_w = labels.iter().map(|l| measure(l, fp)).fold(0.0f32, f32::max);
    let width = 2.0 * BORDER_PAD * fp + (HANDLE_LENGTH + HANDLE_TEXT_PAD) * fp + text_w;
    let height = 2.0 * BORDER_PAD * fp + n * fp + (n - 1.0) * spacing;

    let right = plot.right - AXES_PAD * fp;
    let top = plot.top + AXES_PAD * fp;
    let frame = skia::Rect::from_ltrb(right - width, top, right, top + height);

    let x0 = frame.left + BORDER_PAD * fp;
    let entries = (0..labels.len())
        .map(|i| {
            let cy = frame.top + BORDER_PAD * fp + i as f32 * (fp + spacing) + fp * 0.5;
            LegendEntry {
                handle: (skia::Point::new(x0, cy), skia::Point::new(x0 + HANDLE_LENGTH * fp, cy)),
                text_origin: skia::Point::new(x0 + (HANDLE_LENGTH + HANDLE_TEXT_PAD) * fp, cy + fp * 0.35),
            }
        })
        .collect();

    Some(LegendLayout { frame, font_px: fp, entries })
}
