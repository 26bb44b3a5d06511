use std::f64::consts::PI;
use std::fmt;

use crate::error::{GaussianError, Result};

/// Normal distribution backed by an optional sample of observations.
///
/// `mean` and `std_dev` are only rewritten by the `estimate_*` methods; changing
/// `observations` does not refresh them.
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {
    pub mean: f64,
    pub std_dev: f64,
    pub observations: Vec<f64>,
}

impl Gaussian {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            observations: Vec::new(),
        }
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Arithmetic mean of `observations`. Overwrites `mean`.
    pub fn estimate_mean(&mut self) -> Result<f64> {
        let n = self.checked_len()?;
        let sum: f64 = self.observations.iter().sum();
        self.mean = sum / n as f64;
        Ok(self.mean)
    }

    /// Standard deviation of `observations` around the stored `mean`.
    ///
    /// `is_sample` selects the Bessel-corrected estimator (n - 1). The mean is
    /// not recomputed here, call [`Gaussian::estimate_mean`] first.
    pub fn estimate_std_dev(&mut self, is_sample: bool) -> Result<f64> {
        let n = self.checked_len()?;
        let denom = if is_sample { n - 1 } else { n };
        if denom == 0 {
            return Err(GaussianError::DivisionByZero(
                "sample standard deviation needs at least two observations",
            ));
        }
        let sum_sq: f64 = self
            .observations
            .iter()
            .map(|x| (x - self.mean).powi(2))
            .sum();
        self.std_dev = (sum_sq / denom as f64).sqrt();
        Ok(self.std_dev)
    }

    /// Replaces `observations` and re-estimates mean, then standard deviation.
    pub fn load_and_estimate(&mut self, observations: Vec<f64>, is_sample: bool) -> Result<()> {
        self.observations = observations;
        // 平均が先
        self.estimate_mean()?;
        self.estimate_std_dev(is_sample)?;
        Ok(())
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(GaussianError::InvalidArgument(format!(
                "evaluation point {x} is not finite"
            )));
        }
        if self.std_dev == 0.0 {
            return Err(GaussianError::DivisionByZero("standard deviation is zero"));
        }
        if !(self.std_dev.is_finite() && self.std_dev > 0.0) {
            return Err(GaussianError::InvalidArgument(format!(
                "standard deviation {} must be positive and finite",
                self.std_dev
            )));
        }
        let z = (x - self.mean) / self.std_dev;
        let numerator = (-0.5 * z * z).exp();
        let denominator = self.std_dev * (2.0 * PI).sqrt();
        Ok(numerator / denominator)
    }

    /// Samples the density at `n` evenly spaced points over the observed range.
    ///
    /// Returns `(xs, ys)` with `xs[i] = min + i * (max - min) / n`. The upper
    /// bound itself is not included.
    pub fn pdf_samples(&self, n: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        if n == 0 {
            return Err(GaussianError::InvalidArgument(
                "number of sample points must be positive".to_string(),
            ));
        }
        self.checked_len()?;
        let min = self.observations.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .observations
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let step = (max - min) / n as f64;

        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        for i in 0..n {
            let x = min + step * i as f64;
            ys.push(self.pdf(x)?);
            xs.push(x);
        }
        Ok((xs, ys))
    }

    /// Distribution of the sum of two independent normal variables.
    ///
    /// Independence is assumed, not checked. The result carries no observations.
    pub fn combine(&self, other: &Gaussian) -> Gaussian {
        Gaussian::new(
            self.mean + other.mean,
            (self.variance() + other.variance()).sqrt(),
        )
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    // 観測値の数 (空や非有限値はエラー)
    fn checked_len(&self) -> Result<usize> {
        if self.observations.is_empty() {
            return Err(GaussianError::EmptyInput);
        }
        if let Some((i, x)) = self
            .observations
            .iter()
            .enumerate()
            .find(|(_, x)| !x.is_finite())
        {
            return Err(GaussianError::InvalidArgument(format!(
                "observation {i} is not finite: {x}"
            )));
        }
        Ok(self.observations.len())
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean {}, standard deviation {}", self.mean, self.std_dev)
    }
}

impl core::ops::Add for Gaussian {
    type Output = Gaussian;

    fn add(self, rhs: Gaussian) -> Gaussian {
        self.combine(&rhs)
    }
}

impl<'a> core::ops::Add<&'a Gaussian> for &'a Gaussian {
    type Output = Gaussian;

    fn add(self, rhs: &'a Gaussian) -> Gaussian {
        self.combine(rhs)
    }
}
