//! Simple linear regression by ordinary least squares.
//!
//! Fits `y = β₀ + β₁x + ε` in closed form:
//!
//! ```text
//! β₁ = SS_xy / SS_xx
//! β₀ = ȳ − β₁x̄
//! R² = 1 − SS_res / SS_yy      (= SS_xy² / (SS_xx · SS_yy))
//! SE(β₁) = √(SS_res / (n − 2) / SS_xx)
//! SE(β₀) = SE(β₁) · √(1/n + x̄² / SS_xx)
//! t = β₁ / SE(β₁),  p = P(|T_{n−2}| ≥ |t|)
//! ```
//!
//! Degenerate inputs that still have a defined slope get fixed values
//! instead of NaN:
//! - constant `y`: slope 0, R² 0, p-value 1
//! - two rows: no residual degrees of freedom, standard errors 0, p-value 1
//! - exact fit with non-zero slope and three or more rows: p-value 0
//!
//! Values whose sums of squares overflow or underflow an f64 are rejected
//! with [`FitError::OutOfRange`] rather than fitted to NaN.

use crate::data::filter::complete_pairs;
use crate::data::model::Dataset;
use crate::error::FitError;
use crate::stats::StudentT;

use super::interpret::{Direction, Significance};

/// Minimum complete rows for a line through the data.
pub const MIN_OBSERVATIONS: usize = 2;

/// A fitted simple linear model for one (independent, dependent) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    pub x_name: String,
    pub y_name: String,
    pub intercept: f64,
    pub slope: f64,
    /// Coefficient of determination, always within `[0, 1]`.
    pub r_squared: f64,
    /// Two-sided p-value for H₀: slope = 0.
    pub p_value: f64,
    pub n_observations: usize,
    /// Residual degrees of freedom, `n − 2`.
    pub df_resid: usize,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
    /// `slope / slope_stderr`; ±∞ for an exact fit, 0 when undefined.
    pub t_statistic: f64,
    /// Sum of squared residuals.
    pub ss_resid: f64,
    pub x_mean: f64,
    pub x_min: f64,
    pub x_max: f64,
    /// Complete-case observations in dataset row order.
    pub points: Vec<(f64, f64)>,
    /// Model predictions at each observation's x.
    pub fitted_values: Vec<f64>,
}

/// Where a prediction input sits relative to the fitted x range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    BelowObserved,
    AboveObserved,
}

/// A point prediction plus a flag when the input lies outside the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub x: f64,
    pub value: f64,
    pub extrapolation: Option<Extrapolation>,
}

impl FittedModel {
    /// `β₀ + β₁ · x_new`. Any finite input is accepted.
    pub fn predict(&self, x_new: f64) -> f64 {
        self.intercept + self.slope * x_new
    }

    /// Like [`predict`](Self::predict) but reports when `x_new` is outside
    /// the observed `[x_min, x_max]`.
    pub fn predict_checked(&self, x_new: f64) -> Prediction {
        let extrapolation = if x_new < self.x_min {
            Some(Extrapolation::BelowObserved)
        } else if x_new > self.x_max {
            Some(Extrapolation::AboveObserved)
        } else {
            None
        };
        Prediction {
            x: x_new,
            value: self.predict(x_new),
            extrapolation,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::of_slope(self.slope)
    }

    pub fn significance(&self) -> Significance {
        Significance::of_p_value(self.p_value)
    }
}

/// Fit `y` on `x` using the rows of `dataset` where both are numeric.
///
/// The dataset is only read. Unknown column names behave like columns with
/// no data and report [`FitError::InsufficientData`].
pub fn fit_pair(dataset: &Dataset, x: &str, y: &str) -> Result<FittedModel, FitError> {
    fit_points(x, y, complete_pairs(dataset, x, y))
}

/// Fit a line through complete `(x, y)` observations.
pub fn fit_points(
    x_name: &str,
    y_name: &str,
    points: Vec<(f64, f64)>,
) -> Result<FittedModel, FitError> {
    let n = points.len();
    if n < MIN_OBSERVATIONS {
        return Err(FitError::InsufficientData {
            x: x_name.to_string(),
            y: y_name.to_string(),
            rows: n,
        });
    }

    let (x0, y0) = points[0];
    if points.iter().all(|&(xi, _)| xi == x0) {
        return Err(FitError::ZeroVariance {
            x: x_name.to_string(),
            y: y_name.to_string(),
        });
    }

    let n_f = n as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n_f;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n_f;

    let (mut ss_xx, mut ss_xy, mut ss_yy) = (0.0, 0.0, 0.0);
    for &(xi, yi) in &points {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_xx += dx * dx;
        ss_xy += dx * dy;
        ss_yy += dy * dy;
    }

    let out_of_range = || FitError::OutOfRange {
        x: x_name.to_string(),
        y: y_name.to_string(),
    };
    if !(ss_xx.is_finite() && ss_xy.is_finite() && ss_yy.is_finite()) {
        return Err(out_of_range());
    }

    // Neither variable is constant here, so a zero sum of squares is underflow.
    let y_constant = points.iter().all(|&(_, yi)| yi == y0);
    if ss_xx <= 0.0 || (!y_constant && ss_yy <= 0.0) {
        return Err(out_of_range());
    }

    let (slope, intercept) = if y_constant {
        (0.0, y0)
    } else {
        let slope = ss_xy / ss_xx;
        (slope, mean_y - slope * mean_x)
    };

    let fitted_values: Vec<f64> = points.iter().map(|&(xi, _)| intercept + slope * xi).collect();
    let ss_resid: f64 = points
        .iter()
        .zip(&fitted_values)
        .map(|(&(_, yi), &fi)| (yi - fi) * (yi - fi))
        .sum();
    if !(slope.is_finite() && intercept.is_finite() && ss_resid.is_finite()) {
        return Err(out_of_range());
    }

    let r_squared = if y_constant {
        0.0
    } else {
        (1.0 - ss_resid / ss_yy).clamp(0.0, 1.0)
    };

    let df_resid = n - MIN_OBSERVATIONS;
    let (slope_stderr, intercept_stderr, t_statistic, p_value) =
        slope_inference(slope, ss_resid, ss_xx, mean_x, n, df_resid);

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);

    log::debug!(
        "OLS {y_name} ~ {x_name}: n={n} slope={slope:.6} intercept={intercept:.6} r2={r_squared:.6} p={p_value:.6}"
    );

    Ok(FittedModel {
        x_name: x_name.to_string(),
        y_name: y_name.to_string(),
        intercept,
        slope,
        r_squared,
        p_value,
        n_observations: n,
        df_resid,
        slope_stderr,
        intercept_stderr,
        t_statistic,
        ss_resid,
        x_mean: mean_x,
        x_min,
        x_max,
        points,
        fitted_values,
    })
}

/// Standard errors, t statistic and two-sided p-value for the slope.
fn slope_inference(
    slope: f64,
    ss_resid: f64,
    ss_xx: f64,
    mean_x: f64,
    n: usize,
    df_resid: usize,
) -> (f64, f64, f64, f64) {
    if df_resid == 0 {
        return (0.0, 0.0, 0.0, 1.0);
    }

    let mse = ss_resid / df_resid as f64;
    let se = (mse / ss_xx).sqrt();
    let se_intercept = se * (1.0 / n as f64 + mean_x * mean_x / ss_xx).sqrt();

    if se == 0.0 {
        return if slope == 0.0 {
            (0.0, 0.0, 0.0, 1.0)
        } else {
            (0.0, 0.0, slope.signum() * f64::INFINITY, 0.0)
        };
    }

    let t = slope / se;
    let p = match StudentT::new(df_resid as f64) {
        Ok(dist) => dist.two_sided_p(t),
        Err(_) => 1.0,
    };
    (se, se_intercept, t, p)
}
