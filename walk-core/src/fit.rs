//! Ordinary least-squares fits for scaling laws.
//!
//! Each fit is a straight line in transformed coordinates:
//!
//! | model         | fitted line               |
//! |---------------|---------------------------|
//! | linear        | `y = a + b·x`             |
//! | exponential   | `ln y = a + b·x`          |
//! | power law     | `ln y = a + b·ln x`       |
//!
//! `r_squared` is the coefficient of determination of that line, measured
//! in the same transformed coordinates.

use crate::error::{WalkError, WalkResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Model {
    Linear,
    Exponential,
    PowerLaw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub model: Model,
    pub intercept: f64,
    pub slope: f64,
    pub r_squared: f64,
}

impl Fit {
    /// Evaluates the fitted model at `x`, back in original coordinates.
    pub fn predict(&self, x: f64) -> f64 {
        match self.model {
            Model::Linear => self.intercept + self.slope * x,
            Model::Exponential => (self.intercept + self.slope * x).exp(),
            Model::PowerLaw => self.intercept.exp() * x.powf(self.slope),
        }
    }
}

fn least_squares(model: Model, xs: &[f64], ys: &[f64]) -> WalkResult<Fit> {
    if xs.len() != ys.len() {
        return Err(WalkError::Fit(format!(
            "length mismatch: {} x values, {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(WalkError::Fit("need at least two points".into()));
    }

    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(WalkError::Fit("x values have zero variance".into()));
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let ss_res = syy - slope * sxy;
    // A constant y is fitted exactly.
    let r_squared = if syy == 0.0 { 1.0 } else { 1.0 - ss_res / syy };

    Ok(Fit {
        model,
        intercept,
        slope,
        r_squared,
    })
}

fn log_all(values: &[f64], what: &str) -> WalkResult<Vec<f64>> {
    values
        .iter()
        .map(|&v| {
            if v > 0.0 {
                Ok(v.ln())
            } else {
                Err(WalkError::Fit(format!("{what} must be positive, got {v}")))
            }
        })
        .collect()
}

/// Fits `y = a + b·x`.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> WalkResult<Fit> {
    least_squares(Model::Linear, xs, ys)
}

/// Fits `y = exp(a + b·x)`; every `y` must be positive.
pub fn fit_exponential(xs: &[f64], ys: &[f64]) -> WalkResult<Fit> {
    let log_y = log_all(ys, "y")?;
    least_squares(Model::Exponential, xs, &log_y)
}

/// Fits `y = exp(a)·x^b`; every `x` and `y` must be positive.
pub fn fit_power_law(xs: &[f64], ys: &[f64]) -> WalkResult<Fit> {
    let log_x = log_all(xs, "x")?;
    let log_y = log_all(ys, "y")?;
    least_squares(Model::PowerLaw, &log_x, &log_y)
}
