//! Summary statistics over samples.
//!
//! Every function returns `None` for inputs too short to define the
//! statistic, or for slices of unequal length where two are compared.
//! Percentiles use linear interpolation between order statistics (the R-7
//! rule, also the default of NumPy).

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance with Bessel's correction.
pub fn variance(data: &[f64]) -> Option<f64> {
    covariance(data, data)
}

/// Sample covariance with Bessel's correction.
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let sum: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    Some(sum / (x.len() - 1) as f64)
}

/// Pearson correlation coefficient.
///
/// Returns `None` if either sample has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let sxy = covariance(x, y)?;
    let sx = variance(x)?;
    let sy = variance(y)?;
    if sx == 0.0 || sy == 0.0 {
        return None;
    }
    Some(sxy / (sx * sy).sqrt())
}

/// Percentile `q` in `[0, 100]`.
///
/// ```
/// use twine_uq::uq::statistics::percentile;
///
/// let data = [4.0, 1.0, 3.0, 2.0, 5.0];
/// assert_eq!(percentile(&data, 50.0), Some(3.0));
/// assert!((percentile(&data, 5.0).unwrap() - 1.2).abs() < 1e-12);
/// ```
pub fn percentile(data: &[f64], q: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=100.0).contains(&q) || data.iter().any(|v| v.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted_percentile(&sorted, q))
}

/// Percentile of already sorted, non-empty data.
pub(crate) fn sorted_percentile(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q / 100.0;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn mean_and_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&v).unwrap(), 5.0);
        assert_relative_eq!(variance(&v).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert_eq!(mean(&[]), None);
        assert_eq!(variance(&[1.0]), None);
    }

    #[test]
    fn percentiles_interpolate() {
        let v: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(percentile(&v, 0.0).unwrap(), 1.0);
        assert_relative_eq!(percentile(&v, 100.0).unwrap(), 10.0);
        assert_relative_eq!(percentile(&v, 5.0).unwrap(), 1.45, epsilon = 1e-12);
        assert_relative_eq!(percentile(&v, 95.0).unwrap(), 9.55, epsilon = 1e-12);
        assert_eq!(percentile(&v, 101.0), None);
        assert_eq!(percentile(&[1.0, f64::NAN], 50.0), None);
    }

    #[test]
    fn correlation_signs() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(correlation(&x, &up).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(correlation(&x, &down).unwrap(), -1.0, epsilon = 1e-12);
        assert_eq!(correlation(&x, &[1.0; 4]), None);
        assert_eq!(covariance(&x, &up[..3]), None);
    }
}
