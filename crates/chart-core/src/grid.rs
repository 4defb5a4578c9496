// File: crates/chart-core/src/grid.rs
// Summary: Nice-number tick layout and tick label formatting.

/// Step between ticks so that roughly `target` intervals cover `span`.
/// Steps are 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]`, aligned on multiples of a nice step.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) { return Vec::new(); }
    if max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil();
    let last = (max / step + 1e-9).floor();
    let count = (last - first).max(0.0) as usize;
    (0..=count).map(|i| (first + i as f64) * step).collect()
}

/// Number of decimals needed to print multiples of `step` exactly.
pub fn decimals_for(step: f64) -> usize {
    let mut d = 0usize;
    while d < 10 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 { break; }
        d += 1;
    }
    d
}

pub fn format_tick(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    // "-0" and "-0.00" read badly on an axis
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}
