//! Ordinary least-squares fit of `y` on `x`.
//!
//! Follows the usual two-sided t-test on the slope with `n - 2` degrees of
//! freedom.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::data::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_value: f64,
    pub r_squared: f64,
    pub p_value: f64,
    pub std_err: f64,
    pub intercept_stderr: f64,
    pub n: usize,
}

impl RegressionResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

pub fn linregress(x: &[f64], y: &[f64]) -> Result<RegressionResult> {
    if x.len() != y.len() {
        bail!("x and y length mismatch: {} != {}", x.len(), y.len());
    }
    let n = x.len();
    if n < 3 {
        bail!("linear regression needs at least 3 points, got {}", n);
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        bail!("non-finite value in regression input");
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 {
        bail!("cannot fit a line when all x values are identical");
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let r_value = if syy == 0.0 {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };
    let r_squared = r_value * r_value;

    let df = nf - 2.0;
    let residual = (1.0 - r_value) * (1.0 + r_value);
    let p_value = if residual <= 0.0 {
        0.0
    } else {
        let t = r_value * (df / residual).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df)?;
        (2.0 * dist.sf(t.abs())).min(1.0)
    };

    let std_err = ((1.0 - r_squared) * syy / sxx / df).sqrt();
    let intercept_stderr = std_err * (sxx / nf + x_mean * x_mean).sqrt();

    Ok(RegressionResult {
        slope,
        intercept,
        r_value,
        r_squared,
        p_value,
        std_err,
        intercept_stderr,
        n,
    })
}

/// Regression of log10(time gained) on log10(APOBEC rate).
pub fn compute_regression(samples: &[Sample]) -> Result<RegressionResult> {
    let (log_rate, log_time) = log_series(samples);
    linregress(&log_rate, &log_time)
}

pub fn log_series(samples: &[Sample]) -> (Vec<f64>, Vec<f64>) {
    samples
        .iter()
        .map(|s| (s.apobec_rate_average.log10(), s.time_gained.log10()))
        .unzip()
}

/// Fit evaluated back in linear space at each sample's own x, in sample order.
pub fn fitted_line(samples: &[Sample], regression: &RegressionResult) -> Vec<(f64, f64)> {
    samples
        .iter()
        .map(|s| {
            let x = s.apobec_rate_average;
            (x, 10f64.powf(regression.predict(x.log10())))
        })
        .collect()
}
