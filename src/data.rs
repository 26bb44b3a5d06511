use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, warn};

use crate::gaussian::Gaussian;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat the file as a sample (n - 1 denominator) rather than a population.
    pub is_sample: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { is_sample: true }
    }
}

/// Reads one number per line. Blank lines are skipped.
pub fn load_data<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("line {line_no}: failed to read data"))?;
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        if field.contains(',') {
            bail!("line {line_no}: expected one value, found {field:?}");
        }
        let value: f64 = field
            .parse()
            .with_context(|| format!("line {line_no}: {field:?} is not a number"))?;
        values.push(value);
    }
    Ok(values)
}

pub fn read_data_file<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let values = load_data(file).with_context(|| format!("in {}", path.display()))?;
    if values.is_empty() {
        warn!("{} contains no values", path.display());
    }
    debug!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

impl Gaussian {
    /// Loads `path` into `observations` and re-estimates mean and standard deviation.
    pub fn read_data_file<P: AsRef<Path>>(&mut self, path: P, options: LoadOptions) -> Result<()> {
        let values = read_data_file(path)?;
        self.load_and_estimate(values, options.is_sample)?;
        Ok(())
    }
}
