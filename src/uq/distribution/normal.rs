use statrs::distribution::{ContinuousCDF, Normal as StatrsNormal};

use super::DistributionError;

/// Normal distribution with the given mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
    inner: StatrsNormal,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if `mean` is not finite or `std_dev` is not finite and positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        let invalid = || {
            DistributionError::InvalidParameters(format!(
                "Normal requires finite mean and std_dev > 0, got mean={mean}, std_dev={std_dev}"
            ))
        };
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(invalid());
        }
        let inner = StatrsNormal::new(mean, std_dev).map_err(|_| invalid())?;
        Ok(Self {
            mean,
            std_dev,
            inner,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        self.inner.cdf(x)
    }

    /// Inverse CDF. Infinite at `u = 0` and `u = 1`, NaN outside `[0, 1]`.
    pub fn quantile(&self, u: f64) -> f64 {
        if u == 0.0 {
            f64::NEG_INFINITY
        } else if u == 1.0 {
            f64::INFINITY
        } else if u > 0.0 && u < 1.0 {
            self.inner.inverse_cdf(u)
        } else {
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_quantiles() {
        let z = Normal::new(0.0, 1.0).unwrap();
        assert_relative_eq!(z.quantile(0.5), 0.0, epsilon = 1e-9);
        assert_relative_eq!(z.quantile(0.975), 1.959_963_984_540_054, epsilon = 1e-12);
        assert_relative_eq!(z.quantile(0.01), -2.326_347_874_040_841, epsilon = 1e-12);
        assert_eq!(z.quantile(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn cdf_inverts_quantile() {
        let d = Normal::new(20.0, 2.0).unwrap();
        for u in [0.001, 0.1, 0.5, 0.8, 0.999] {
            assert_relative_eq!(d.cdf(d.quantile(u)), u, epsilon = 1e-12);
        }
    }

    #[test]
    fn quantile_outside_unit_interval_is_nan() {
        let z = Normal::new(0.0, 1.0).unwrap();
        assert_eq!(z.quantile(1.0), f64::INFINITY);
        assert!(z.quantile(-0.1).is_nan());
        assert!(z.quantile(1.5).is_nan());
        assert!(z.quantile(f64::NAN).is_nan());
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(f64::INFINITY, 1.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
    }
}
