// File: crates/perfplot/src/loader.rs
// Summary: Loads benchmark CSV files into `m0` (size) and `result` (GFLOP/s) columns.

use std::io;

use thiserror::Error;

/// Problem-size column, plotted on X.
pub const X_COLUMN: &str = "m0";
/// Measured-performance column, plotted on Y.
pub const Y_COLUMN: &str = "result";

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {path}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: malformed CSV")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: String, column: &'static str },
    #[error("{path}: line {line}: `{value}` in column `{column}` is not a number")]
    NotNumeric {
        path: String,
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("{path}: no data rows")]
    Empty { path: String },
}

/// One file's worth of benchmark results; columns have equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    pub m0: Vec<f64>,
    pub result: Vec<f64>,
}

impl SeriesData {
    pub fn len(&self) -> usize { self.m0.len() }

    pub fn is_empty(&self) -> bool { self.m0.is_empty() }
}

/// Load the CSV at `path`.
pub fn load_series(path: &str) -> Result<SeriesData, DataLoadError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| DataLoadError::Open { path: path.to_string(), source })?;
    read_records(rdr, path)
}

/// Read CSV data from any reader; `source_name` is used in error messages.
pub fn read_series<R: io::Read>(reader: R, source_name: &str) -> Result<SeriesData, DataLoadError> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    read_records(rdr, source_name)
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>, path: &str) -> Result<SeriesData, DataLoadError> {
    let csv_err = |source| DataLoadError::Csv { path: path.to_string(), source };

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let idx = |column: &'static str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DataLoadError::MissingColumn { path: path.to_string(), column })
    };
    let i_x = idx(X_COLUMN)?;
    let i_y = idx(Y_COLUMN)?;

    let mut out = SeriesData::default();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        let line = rec.position().map_or(0, csv::Position::line);
        let parse = |i: usize, column: &'static str| -> Result<f64, DataLoadError> {
            let raw = rec.get(i).unwrap_or("");
            raw.trim().parse::<f64>().map_err(|_| DataLoadError::NotNumeric {
                path: path.to_string(),
                line,
                column,
                value: raw.to_string(),
            })
        };
        out.m0.push(parse(i_x, X_COLUMN)?);
        out.result.push(parse(i_y, Y_COLUMN)?);
    }

    if out.is_empty() {
        return Err(DataLoadError::Empty { path: path.to_string() });
    }
    Ok(out)
}
