//! Student's t distribution.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::StatsError;

/// Standard Student's t distribution with ν degrees of freedom.
///
/// Tail probabilities come from `statrs`, which evaluates them through the
/// regularized incomplete beta function:
///
/// ```text
/// P(|T| > t) = I_{ν/(ν+t²)}(ν/2, 1/2)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    nu: f64,
    dist: StudentsT,
}

impl StudentT {
    /// Create a t distribution. `nu` must be positive and finite.
    pub fn new(nu: f64) -> Result<Self, StatsError> {
        if !(nu > 0.0) {
            return Err(StatsError::InvalidParameter {
                name: "nu",
                value: nu,
                reason: "degrees of freedom must be positive",
            });
        }
        if !nu.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "nu",
                value: nu,
                reason: "must be finite",
            });
        }
        let dist = StudentsT::new(0.0, 1.0, nu).map_err(|_| StatsError::InvalidParameter {
            name: "nu",
            value: nu,
            reason: "rejected by the t distribution",
        })?;
        Ok(Self { nu, dist })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.nu
    }

    /// Two-sided tail probability `P(|T| >= |t|)`.
    pub fn two_sided_p(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t == 0.0 {
            return 1.0;
        }
        if t.is_infinite() {
            return 0.0;
        }
        (2.0 * self.dist.sf(t.abs())).clamp(0.0, 1.0)
    }

    pub fn cdf(&self, t: f64) -> f64 {
        if t == 0.0 {
            return 0.5;
        }
        self.dist.cdf(t)
    }

    /// Survival function `P(T > t)`.
    pub fn sf(&self, t: f64) -> f64 {
        if t == 0.0 {
            return 0.5;
        }
        self.dist.sf(t)
    }

    /// Quantile function. Probabilities outside `[0, 1]` are an error.
    pub fn ppf(&self, p: f64) -> Result<f64, StatsError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        if p == 0.5 {
            return Ok(0.0);
        }
        Ok(self.dist.inverse_cdf(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_t_creation() {
        let t = StudentT::new(10.0).unwrap();
        assert!((t.df() - 10.0).abs() < 1e-10);

        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-1.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
        assert!(StudentT::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_two_sided_p_reference() {
        let t = StudentT::new(10.0).unwrap();
        assert!((t.two_sided_p(2.0) - 0.073_388_034_770_739_91).abs() < 1e-10);
        assert_eq!(t.two_sided_p(-2.0), t.two_sided_p(2.0));
        assert_eq!(t.two_sided_p(0.0), 1.0);
        assert_eq!(t.two_sided_p(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_cdf_sf_symmetry() {
        let t = StudentT::new(4.0).unwrap();
        assert_eq!(t.cdf(0.0), 0.5);
        for &x in &[0.3, 1.0, 2.5] {
            assert!((t.cdf(x) + t.cdf(-x) - 1.0).abs() < 1e-12);
            assert!((t.sf(x) - t.cdf(-x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ppf_critical_values() {
        let t10 = StudentT::new(10.0).unwrap();
        assert!((t10.ppf(0.975).unwrap() - 2.228_138_851_986).abs() < 1e-7);
        assert!((t10.ppf(0.025).unwrap() + 2.228_138_851_986).abs() < 1e-7);

        let t3 = StudentT::new(3.0).unwrap();
        assert!((t3.ppf(0.975).unwrap() - 3.182_446_305_284).abs() < 1e-7);

        assert!(t10.ppf(1.5).is_err());
        assert_eq!(t10.ppf(0.5).unwrap(), 0.0);
    }
}
