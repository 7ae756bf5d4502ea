//! Polynomial chaos expansion by point collocation.
//!
//! Each time step of the model output is approximated as
//!
//! ```text
//! y_t(u) ≈ Σ_k c_{k,t} Φ_k(u)
//! ```
//!
//! where `Φ_k` is the orthonormal basis from [`polynomial`](super::polynomial)
//! and `u` lives in the independent unit cube. Coefficients are fitted by
//! least squares to model runs at collocation nodes. Because the basis is
//! orthonormal, the mean, the variance and the Sobol indices follow directly
//! from the coefficients.

use std::error::Error as StdError;

use nalgebra::DMatrix;
use rand::Rng;
use twine_core::Model;

use super::{
    CollocationRule, Evaluation, ParameterSample, QuantifyConfig, UqError,
    evaluator::Evaluator,
    polynomial::{Basis, term_count},
    results::{Estimates, is_degenerate},
    sampling,
    statistics::sorted_percentile,
};

/// Singular values below this are treated as zero in the least-squares solve.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// A fitted expansion with one coefficient column per time step.
#[derive(Debug, Clone)]
pub(super) struct Expansion {
    basis: Basis,
    coefficients: DMatrix<f64>,
}

impl Expansion {
    /// Fits an expansion to `outputs[node][step]` observed at `nodes`.
    pub(super) fn fit(
        basis: Basis,
        nodes: &[Vec<f64>],
        outputs: &[Vec<f64>],
    ) -> Result<Self, UqError> {
        let steps = outputs.first().map_or(0, Vec::len);
        let design = design_matrix(&basis, nodes);
        let observed = DMatrix::from_fn(nodes.len(), steps, |r, c| outputs[r][c]);

        let coefficients = design
            .svd(true, true)
            .solve(&observed, SINGULAR_TOLERANCE)
            .map_err(|e| UqError::LeastSquares(e.to_string()))?;

        Ok(Self {
            basis,
            coefficients,
        })
    }

    pub(super) fn mean(&self) -> Vec<f64> {
        self.coefficients.row(0).iter().copied().collect()
    }

    pub(super) fn variance(&self) -> Vec<f64> {
        self.coefficients
            .column_iter()
            .map(|c| c.iter().skip(1).map(|v| v * v).sum())
            .collect()
    }

    /// First-order and total Sobol indices, indexed `[parameter][step]`.
    pub(super) fn sobol(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let dim = self.basis.dim();
        let steps = self.coefficients.ncols();
        let mut first = vec![vec![0.0; steps]; dim];
        let mut total = vec![vec![0.0; steps]; dim];

        let mean = self.mean();
        let variance = self.variance();

        for step in 0..steps {
            if is_degenerate(variance[step], mean[step]) {
                continue;
            }
            for (k, alpha) in self.basis.indices().iter().enumerate().skip(1) {
                let share = self.coefficients[(k, step)].powi(2) / variance[step];
                let active: Vec<usize> = (0..dim).filter(|&i| alpha[i] > 0).collect();
                for &i in &active {
                    total[i][step] += share;
                }
                if let [only] = active[..] {
                    first[only][step] += share;
                }
            }
        }

        (first, total)
    }

    /// Evaluates the surrogate at each point, returning `[point][step]`.
    pub(super) fn predict(&self, points: &[Vec<f64>]) -> DMatrix<f64> {
        design_matrix(&self.basis, points) * &self.coefficients
    }
}

fn design_matrix(basis: &Basis, points: &[Vec<f64>]) -> DMatrix<f64> {
    let rows: Vec<Vec<f64>> = points.iter().map(|u| basis.evaluate(u)).collect();
    DMatrix::from_fn(points.len(), basis.len(), |r, c| rows[r][c])
}

/// Propagates uncertainty through the model with a fitted expansion.
pub(super) fn quantify<M, R>(
    evaluator: &mut Evaluator<'_, M>,
    config: &QuantifyConfig,
    rng: &mut R,
) -> Result<Estimates, UqError>
where
    M: Model<Input = ParameterSample, Output = Evaluation>,
    M::Error: StdError + Send + Sync + 'static,
    R: Rng + ?Sized,
{
    let dim = evaluator.dim();
    let order = config.polynomial_order.get();
    let terms = term_count(dim, order);
    let nodes = config.nr_collocation_nodes.unwrap_or(2 * terms + 2);
    if nodes < terms {
        return Err(UqError::TooFewNodes { nodes, terms });
    }

    let points = match config.collocation_rule {
        CollocationRule::Hammersley => sampling::hammersley(nodes, dim),
        CollocationRule::Random => sampling::random(nodes, dim, rng),
    };
    tracing::debug!(nodes, terms, order, rule = ?config.collocation_rule, "collocation nodes");

    let outputs = evaluator.evaluate_all(&points)?;
    let expansion = Expansion::fit(Basis::total_degree(dim, order), &points, &outputs)?;
    tracing::debug!(steps = expansion.coefficients.ncols(), "fitted expansion");

    let samples = config.nr_pc_mc_samples.get();
    let surrogate = expansion.predict(&sampling::random(samples, dim, rng));
    tracing::debug!(samples, "sampled surrogate for percentiles");

    let (percentile_5, percentile_95) = surrogate
        .column_iter()
        .map(|column| {
            let mut sorted: Vec<f64> = column.iter().copied().collect();
            sorted.sort_by(f64::total_cmp);
            (sorted_percentile(&sorted, 5.0), sorted_percentile(&sorted, 95.0))
        })
        .unzip();

    let (sobol_first, sobol_total) = expansion.sobol();

    Ok(Estimates {
        mean: expansion.mean(),
        variance: expansion.variance(),
        percentile_5,
        percentile_95,
        sobol_first,
        sobol_total,
    })
}
