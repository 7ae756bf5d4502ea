//! Monte Carlo propagation with Saltelli sampling.
//!
//! Two independent sample matrices `A` and `B` of `N` rows are drawn in the
//! unit cube. For each parameter `i`, `AB_i` is `A` with column `i` taken
//! from `B`. The model runs `(d + 2) * N` times and the Sobol indices use the
//! estimators of Saltelli et al. (2010):
//!
//! ```text
//! S_i  = mean(f(B) · (f(AB_i) - f(A))) / V
//! ST_i = mean((f(A) - f(AB_i))²) / (2V)
//! ```

use std::error::Error as StdError;

use rand::Rng;
use twine_core::Model;

use super::{
    Evaluation, ParameterSample, QuantifyConfig, UqError,
    evaluator::Evaluator,
    results::{Estimates, is_degenerate},
    sampling, statistics,
};

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
    let n = config.nr_mc_samples.get();

    let a = sampling::random(n, dim, rng);
    let b = sampling::random(n, dim, rng);
    tracing::debug!(n, dim, evaluations = (dim + 2) * n, "drew Saltelli matrices");

    let f_a = evaluator.evaluate_all(&a)?;
    let f_b = evaluator.evaluate_all(&b)?;
    let steps = f_a.first().map_or(0, Vec::len);

    let by_step = |outputs: &[Vec<f64>], step: usize| -> Vec<f64> {
        outputs.iter().map(|row| row[step]).collect()
    };

    let mut mean = Vec::with_capacity(steps);
    let mut variance = Vec::with_capacity(steps);
    let mut percentile_5 = Vec::with_capacity(steps);
    let mut percentile_95 = Vec::with_capacity(steps);

    for step in 0..steps {
        let mut column = by_step(&f_a, step);
        mean.push(statistics::mean(&column).unwrap_or(f64::NAN));

        let mut pooled = column.clone();
        pooled.extend(f_b.iter().map(|row| row[step]));
        variance.push(statistics::variance(&pooled).unwrap_or(0.0));

        column.sort_by(f64::total_cmp);
        percentile_5.push(statistics::sorted_percentile(&column, 5.0));
        percentile_95.push(statistics::sorted_percentile(&column, 95.0));
    }

    let mut sobol_first = vec![vec![0.0; steps]; dim];
    let mut sobol_total = vec![vec![0.0; steps]; dim];

    for i in 0..dim {
        let ab: Vec<Vec<f64>> = a
            .iter()
            .zip(&b)
            .map(|(row_a, row_b)| {
                let mut row = row_a.clone();
                row[i] = row_b[i];
                row
            })
            .collect();
        let f_ab = evaluator.evaluate_all(&ab)?;

        for step in 0..steps {
            if is_degenerate(variance[step], mean[step]) {
                continue;
            }
            let mut first = 0.0;
            let mut total = 0.0;
            for ((ya, yb), yab) in f_a.iter().zip(&f_b).zip(&f_ab) {
                first += yb[step] * (yab[step] - ya[step]);
                total += (ya[step] - yab[step]).powi(2);
            }
            sobol_first[i][step] = first / n as f64 / variance[step];
            sobol_total[i][step] = total / (2.0 * n as f64) / variance[step];
        }
    }

    Ok(Estimates {
        mean,
        variance,
        percentile_5,
        percentile_95,
        sobol_first,
        sobol_total,
    })
}
