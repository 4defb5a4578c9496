// File: crates/perfplot/src/label.rs
// Summary: Legend label resolution from input file paths.

use regex::Regex;

use crate::config::LabelMode;

/// Variant tag embedded in benchmark output names, e.g. `run_var12_trial3.csv`.
pub const VAR_PATTERN: &str = r"var\d+";

#[derive(Clone, Debug)]
pub struct LabelResolver {
    pattern: Option<Regex>,
}

impl LabelResolver {
    pub fn new(mode: LabelMode) -> Result<Self, regex::Error> {
        let pattern = match mode {
            LabelMode::Filename => None,
            LabelMode::VarPattern => Some(Regex::new(VAR_PATTERN)?),
        };
        Ok(Self { pattern })
    }

    /// Label for `path`; falls back to the path itself when no tag is found.
    pub fn resolve<'a>(&self, path: &'a str) -> &'a str {
        self.pattern
            .as_ref()
            .and_then(|re| re.find(path))
            .map_or(path, |m| m.as_str())
    }
}
