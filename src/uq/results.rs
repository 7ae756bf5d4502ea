use super::{Labels, Method};

/// Per-time-step statistics of a model output.
///
/// Sobol indices are indexed `[parameter][time step]` with parameters in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Expected output at each time step.
    pub mean: Vec<f64>,

    /// Output variance at each time step.
    pub variance: Vec<f64>,

    /// 5th percentile of the output at each time step.
    pub percentile_5: Vec<f64>,

    /// 95th percentile of the output at each time step.
    pub percentile_95: Vec<f64>,

    /// First-order Sobol indices: the variance share of each parameter alone.
    pub sobol_first: Vec<Vec<f64>>,

    /// Total Sobol indices: each parameter's share including all interactions.
    pub sobol_total: Vec<Vec<f64>>,

    /// Time average of each parameter's first-order index.
    pub sobol_first_average: Vec<f64>,

    /// Time average of each parameter's total index.
    pub sobol_total_average: Vec<f64>,
}

/// Per-step estimates from one propagation method.
pub(super) struct Estimates {
    pub mean: Vec<f64>,
    pub variance: Vec<f64>,
    pub percentile_5: Vec<f64>,
    pub percentile_95: Vec<f64>,
    pub sobol_first: Vec<Vec<f64>>,
    pub sobol_total: Vec<Vec<f64>>,
}

impl From<Estimates> for Statistics {
    fn from(e: Estimates) -> Self {
        let sobol_first_average = e.sobol_first.iter().map(|s| time_average(s)).collect();
        let sobol_total_average = e.sobol_total.iter().map(|s| time_average(s)).collect();
        Self {
            mean: e.mean,
            variance: e.variance,
            percentile_5: e.percentile_5,
            percentile_95: e.percentile_95,
            sobol_first: e.sobol_first,
            sobol_total: e.sobol_total,
            sobol_first_average,
            sobol_total_average,
        }
    }
}

fn time_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns `true` when `variance` is indistinguishable from zero at the scale of `mean`.
///
/// Sobol indices are reported as zero at such steps.
pub(super) fn is_degenerate(variance: f64, mean: f64) -> bool {
    variance <= 1e-14 * (1.0 + mean * mean)
}

/// Everything a quantification run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct UqData {
    /// Axis labels of the quantified model.
    pub labels: Labels,

    /// Time axis shared by every evaluation.
    pub time: Vec<f64>,

    /// Parameter names in insertion order.
    pub parameter_names: Vec<String>,

    /// Propagation method that produced the statistics.
    pub method: Method,

    /// Seed the run was started from.
    pub seed: u64,

    /// Physical parameter values of every model evaluation, in evaluation order.
    pub samples: Vec<Vec<f64>>,

    /// Per-time-step output statistics.
    pub statistics: Statistics,
}

impl UqData {
    /// Position of the named parameter in `parameter_names` and the Sobol tables.
    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameter_names.iter().position(|n| n == name)
    }

    /// Sampled values of the named parameter.
    pub fn parameter_samples(&self, name: &str) -> Option<Vec<f64>> {
        let i = self.parameter_index(name)?;
        Some(self.samples.iter().map(|x| x[i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_time() {
        let stats = Statistics::from(Estimates {
            mean: vec![1.0, 2.0],
            variance: vec![0.0, 1.0],
            percentile_5: vec![1.0, 1.0],
            percentile_95: vec![1.0, 3.0],
            sobol_first: vec![vec![0.0, 0.8], vec![0.0, 0.1]],
            sobol_total: vec![vec![0.0, 0.9], vec![0.0, 0.2]],
        });
        assert_eq!(stats.sobol_first_average, vec![0.4, 0.05]);
        assert_eq!(stats.sobol_total_average, vec![0.45, 0.1]);
    }

    #[test]
    fn zero_variance_detection() {
        assert!(is_degenerate(0.0, 95.0));
        assert!(is_degenerate(1e-20, 95.0));
        assert!(!is_degenerate(1e-3, 95.0));
    }
}
