use std::io::Write;
use std::path::Path;

use anyhow::{ensure, Context};
use log::debug;

use crate::error::{GaussianError, Result};

/// Number of density samples drawn over the observed range.
pub const DEFAULT_SAMPLES: usize = 50;
/// Number of histogram bins.
pub const DEFAULT_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` bin boundaries in ascending order.
    pub edges: Vec<f64>,
    /// Per-bin density; `sum(density * width) == 1`.
    pub densities: Vec<f64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.densities.len()
    }

    /// `(left, right, density)` for every bin.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(w, d)| (w[0], w[1], *d))
    }
}

/// Equal-width density histogram of `observations`.
///
/// Bins are half open except the last, which includes the maximum. When every
/// value is equal the range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(observations: &[f64], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(GaussianError::InvalidArgument(
            "histogram needs at least one bin".to_string(),
        ));
    }
    if observations.is_empty() {
        return Err(GaussianError::EmptyInput);
    }
    if let Some(x) = observations.iter().find(|x| !x.is_finite()) {
        return Err(GaussianError::InvalidArgument(format!(
            "observation {x} is not finite"
        )));
    }

    let mut lo = observations.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = observations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &x in observations {
        let i = (((x - lo) / width) as usize).min(bins - 1);
        counts[i] += 1;
    }

    let scale = 1.0 / (observations.len() as f64 * width);
    let densities = counts.iter().map(|&c| c as f64 * scale).collect();
    Ok(Histogram { edges, densities })
}

pub fn write_pdf_csv<W: Write>(writer: W, xs: &[f64], ys: &[f64]) -> anyhow::Result<()> {
    ensure!(
        xs.len() == ys.len(),
        "x and y lengths differ: {} != {}",
        xs.len(),
        ys.len()
    );
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["x", "pdf"])?;
    for (x, y) in xs.iter().zip(ys) {
        wtr.write_record(&[x.to_string(), y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_histogram_csv<W: Write>(writer: W, hist: &Histogram) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["left", "right", "density"])?;
    for (left, right, density) in hist.iter() {
        wtr.write_record(&[left.to_string(), right.to_string(), density.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_pdf_csv<P: AsRef<Path>>(path: P, xs: &[f64], ys: &[f64]) -> anyhow::Result<()> {
    let file = create(path.as_ref())?;
    write_pdf_csv(file, xs, ys).with_context(|| format!("writing {}", path.as_ref().display()))?;
    debug!("wrote {} pdf samples to {}", xs.len(), path.as_ref().display());
    Ok(())
}

pub fn save_histogram_csv<P: AsRef<Path>>(path: P, hist: &Histogram) -> anyhow::Result<()> {
    let file = create(path.as_ref())?;
    write_histogram_csv(file, hist)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    debug!("wrote {} histogram bins to {}", hist.bins(), path.as_ref().display());
    Ok(())
}

fn create(path: &Path) -> anyhow::Result<std::fs::File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    std::fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
