use super::DistributionError;

/// Continuous uniform distribution on `[lower, upper]`.
///
/// # Example
///
/// ```
/// use twine_uq::uq::Uniform;
///
/// let t_env = Uniform::new(15.0, 25.0).unwrap();
/// assert_eq!(t_env.mean(), 20.0);
/// assert_eq!(t_env.quantile(0.25), 17.5);
/// assert!(Uniform::new(25.0, 15.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    /// Creates a uniform distribution on `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `lower >= upper` or either bound is not finite.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(DistributionError::InvalidParameters(format!(
                "Uniform requires lower < upper, got lower={lower}, upper={upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn mean(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    pub fn variance(&self) -> f64 {
        let width = self.upper - self.lower;
        width * width / 12.0
    }

    /// CDF, clamped to `[0, 1]` outside the support.
    pub fn cdf(&self, x: f64) -> f64 {
        ((x - self.lower) / (self.upper - self.lower)).clamp(0.0, 1.0)
    }

    /// Inverse CDF for `u` in `[0, 1]`.
    pub fn quantile(&self, u: f64) -> f64 {
        self.lower + u * (self.upper - self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn moments() {
        let alpha = Uniform::new(0.5, 1.5).unwrap();
        assert_relative_eq!(alpha.mean(), 1.0);
        assert_relative_eq!(alpha.variance(), 1.0 / 12.0);
    }

    #[test]
    fn cdf_and_quantile_agree() {
        let d = Uniform::new(0.025, 0.075).unwrap();
        assert_relative_eq!(d.cdf(d.quantile(0.3)), 0.3, epsilon = 1e-12);
        assert_eq!(d.cdf(0.0), 0.0);
        assert_eq!(d.cdf(1.0), 1.0);
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }
}
