//! Plain-language reading of a fitted model.

use std::fmt;

use crate::stats::StudentT;

use super::regression::FittedModel;

/// Fixed cut-off for calling a slope significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Which way the response moves as the regressor grows.
///
/// A slope of exactly zero reads as [`Direction::Increases`]. That is a
/// labelling rule inherited from the original dashboard wording, not a
/// statistical claim; significance is what says whether there is an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increases,
    Decreases,
}

impl Direction {
    pub fn of_slope(slope: f64) -> Self {
        if slope < 0.0 {
            Direction::Decreases
        } else {
            Direction::Increases
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Increases => "increases",
            Direction::Decreases => "decreases",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    Significant,
    NotSignificant,
}

impl Significance {
    /// `p < 0.05` is significant.
    pub fn of_p_value(p: f64) -> Self {
        if p < SIGNIFICANCE_LEVEL {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }

    pub fn is_significant(self) -> bool {
        self == Significance::Significant
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Significance::Significant => "statistically significant",
            Significance::NotSignificant => "not statistically significant",
        })
    }
}

/// The three interpretation lines shown next to each scatter plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub effect: String,
    pub fit: String,
    pub significance: String,
}

impl Interpretation {
    pub fn of(model: &FittedModel) -> Self {
        let effect = format!(
            "For every 1 unit increase in {}, {} {} by about {:.2} units.",
            model.x_name,
            model.y_name,
            model.direction(),
            model.slope.abs()
        );
        let fit = format!(
            "R² = {:.2} (explains {:.1}% variation in {})",
            model.r_squared,
            model.r_squared * 100.0,
            model.y_name
        );
        let significance = format!(
            "P-value = {:.4} → {}",
            model.p_value,
            capitalize(&model.significance().to_string())
        );
        Interpretation {
            effect,
            fit,
            significance,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Full summary report
// ---------------------------------------------------------------------------

const RULE_WIDTH: usize = 78;

/// Text report in the layout of a classic OLS results table.
///
/// Rendered with `Display`; columns that need residual degrees of freedom
/// print `-` for a two-row fit.
pub struct RegressionSummary<'a>(pub &'a FittedModel);

impl RegressionSummary<'_> {
    fn adjusted_r_squared(&self) -> Option<f64> {
        let m = self.0;
        (m.df_resid > 0).then(|| {
            let n = m.n_observations as f64;
            1.0 - (1.0 - m.r_squared) * (n - 1.0) / m.df_resid as f64
        })
    }

    fn coefficient_row(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        coef: f64,
        stderr: f64,
        t: f64,
        p: f64,
        t_crit: Option<f64>,
    ) -> fmt::Result {
        write!(f, "{label:<10}{coef:>12.4}")?;
        match t_crit {
            Some(tc) => writeln!(
                f,
                "{stderr:>11.3}{t:>11.3}{p:>11.3}{lo:>11.3}{hi:>11.3}",
                lo = coef - tc * stderr,
                hi = coef + tc * stderr
            ),
            None => writeln!(f, "{:>11}{:>11}{:>11}{:>11}{:>11}", "-", "-", "-", "-", "-"),
        }
    }
}

impl fmt::Display for RegressionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{:^width$}", "OLS Regression Results", width = RULE_WIDTH)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Dep. Variable:       {}", m.y_name)?;
        writeln!(f, "Regressor:           {}", m.x_name)?;
        writeln!(f, "No. Observations:    {}", m.n_observations)?;
        writeln!(f, "Df Residuals:        {}", m.df_resid)?;
        writeln!(f, "R-squared:           {:.3}", m.r_squared)?;
        match self.adjusted_r_squared() {
            Some(adj) => writeln!(f, "Adj. R-squared:      {adj:.3}")?,
            None => writeln!(f, "Adj. R-squared:      -")?,
        }
        if m.df_resid > 0 {
            writeln!(f, "F-statistic:         {:.4}", m.t_statistic * m.t_statistic)?;
            writeln!(f, "Prob (F-statistic):  {:.4e}", m.p_value)?;
        } else {
            writeln!(f, "F-statistic:         -")?;
            writeln!(f, "Prob (F-statistic):  -")?;
        }
        writeln!(f, "{heavy}")?;
        writeln!(
            f,
            "{:<10}{:>12}{:>11}{:>11}{:>11}{:>11}{:>11}",
            "", "coef", "std err", "t", "P>|t|", "[0.025", "0.975]"
        )?;
        writeln!(f, "{light}")?;

        let dist = (m.df_resid > 0)
            .then(|| StudentT::new(m.df_resid as f64).ok())
            .flatten();
        let t_crit = dist.and_then(|d| d.ppf(1.0 - SIGNIFICANCE_LEVEL / 2.0).ok());

        let (t0, p0) = match dist {
            Some(d) if m.intercept_stderr > 0.0 => {
                let t0 = m.intercept / m.intercept_stderr;
                (t0, d.two_sided_p(t0))
            }
            _ => (0.0, 1.0),
        };

        Self::coefficient_row(f, "const", m.intercept, m.intercept_stderr, t0, p0, t_crit)?;
        Self::coefficient_row(
            f,
            "x",
            m.slope,
            m.slope_stderr,
            m.t_statistic,
            m.p_value,
            t_crit,
        )?;
        writeln!(f, "{heavy}")?;
        write!(f, "x = {}", m.x_name)
    }
}
