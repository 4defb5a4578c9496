// File: crates/chart-core/src/series.rs
// Summary: Labeled XY line series.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    /// Pair up x and y columns point by point.
    /// Contract: callers pass equal-length columns; extra trailing values are dropped.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        debug_assert_eq!(xs.len(), ys.len(), "x and y columns differ in length");
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self { label: label.into(), data_xy: data }
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Largest finite y value, if any.
    pub fn y_max(&self) -> Option<f64> {
        self.data_xy
            .iter()
            .map(|&(_, y)| y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| Some(acc.map_or(y, |m: f64| m.max(y))))
    }

    /// (min, max) over finite x values, if any.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(x, _) in &self.data_xy {
            if x.is_finite() {
                lo = lo.min(x);
                hi = hi.max(x);
            }
        }
        if lo <= hi { Some((lo, hi)) } else { None }
    }
}
