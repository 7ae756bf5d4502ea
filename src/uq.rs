//! Uncertainty quantification for models with time-series output.
//!
//! Uncertain inputs are described by named [`Parameters`], possibly dependent
//! on each other. [`UncertaintyQuantification`] propagates them through a
//! [`Labeled`] model with either polynomial chaos or Monte Carlo and reports
//! per-time-step [`Statistics`] in a [`UqData`].
//!
//! All sampling works in the independent unit cube; the Rosenblatt transform
//! maps each point to dependent physical values before the model sees it.
//! Every random draw of a run comes from a single generator seeded with
//! [`QuantifyConfig::seed`], so identical inputs give identical results.
//!
//! ```no_run
//! use twine_uq::models::thermal::cooling::coffee_cup_dependent;
//! use twine_uq::uq::{QuantifyConfig, UncertaintyQuantification};
//!
//! let (model, parameters) = coffee_cup_dependent().unwrap();
//! let data = UncertaintyQuantification::new(model, parameters)
//!     .quantify(&QuantifyConfig::default())
//!     .unwrap();
//!
//! println!("mean at t = 200 min: {:.2}", data.statistics.mean[149]);
//! ```

mod config;
mod distribution;
mod error;
mod evaluator;
mod model;
mod monte_carlo;
mod parameters;
mod pce;
mod polynomial;
mod results;
mod sampling;
pub mod statistics;

pub use config::{CollocationRule, Method, QuantifyConfig};
pub use distribution::{Distribution, DistributionError, Marginal, Normal, Operation, Uniform};
pub use error::UqError;
pub use model::{Evaluation, Labeled, Labels, ParameterSample};
pub use parameters::{ParameterError, Parameters};
pub use polynomial::{Basis, term_count};
pub use results::{Statistics, UqData};

use std::error::Error as StdError;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twine_core::Model;

use evaluator::Evaluator;

/// A labeled model paired with the uncertain parameters to propagate through it.
#[derive(Debug, Clone)]
pub struct UncertaintyQuantification<M> {
    model: Labeled<M>,
    parameters: Parameters,
}

impl<M> UncertaintyQuantification<M>
where
    M: Model<Input = ParameterSample, Output = Evaluation>,
    M::Error: StdError + Send + Sync + 'static,
{
    pub fn new(model: Labeled<M>, parameters: Parameters) -> Self {
        Self { model, parameters }
    }

    pub fn model(&self) -> &Labeled<M> {
        &self.model
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Propagates the parameter uncertainty through the model.
    ///
    /// # Errors
    ///
    /// Returns [`UqError`] if there are no parameters, a sample cannot be
    /// transformed, the model fails or returns inconsistent or non-finite
    /// output, or the expansion cannot be fitted.
    pub fn quantify(&self, config: &QuantifyConfig) -> Result<UqData, UqError> {
        if self.parameters.is_empty() {
            return Err(UqError::NoParameters);
        }

        tracing::info!(
            method = %config.method,
            seed = config.seed,
            parameters = self.parameters.len(),
            "starting uncertainty quantification"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut evaluator = Evaluator::new(&self.model, &self.parameters);

        let estimates = match config.method {
            Method::PolynomialChaos => pce::quantify(&mut evaluator, config, &mut rng)?,
            Method::MonteCarlo => monte_carlo::quantify(&mut evaluator, config, &mut rng)?,
        };
        let statistics = Statistics::from(estimates);

        let flat = statistics
            .variance
            .iter()
            .zip(&statistics.mean)
            .filter(|&(&v, &m)| results::is_degenerate(v, m))
            .count();
        if flat > 0 {
            tracing::warn!(steps = flat, "zero output variance; Sobol indices set to zero");
        }

        let evaluations = evaluator.count();
        let (time, samples) = evaluator.finish();
        tracing::info!(evaluations, steps = time.len(), "finished uncertainty quantification");

        Ok(UqData {
            labels: self.model.labels().clone(),
            time,
            parameter_names: self.parameters.names().map(String::from).collect(),
            method: config.method,
            seed: config.seed,
            samples,
            statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use crate::support::constraint::StrictlyPositive;

    /// `y(t) = a + t·b` on three time points.
    struct Linear;

    impl Model for Linear {
        type Input = ParameterSample;
        type Output = Evaluation;
        type Error = Infallible;

        fn call(&self, input: &ParameterSample) -> Result<Evaluation, Infallible> {
            let a = input.get("a").unwrap_or_default();
            let b = input.get("b").unwrap_or_default();
            let time = vec![0.0, 1.0, 2.0];
            let values = time.iter().map(|t| a + t * b).collect();
            Ok(Evaluation { time, values })
        }
    }

    fn problem() -> UncertaintyQuantification<Linear> {
        let parameters = Parameters::new([
            ("a", Uniform::new(0.0, 1.0).unwrap().into()),
            ("b", Uniform::new(0.0, 1.0).unwrap().into()),
        ])
        .unwrap();
        UncertaintyQuantification::new(Labeled::new(Linear, Labels::new("t", "y")), parameters)
    }

    fn small(method: Method) -> QuantifyConfig {
        QuantifyConfig {
            nr_pc_mc_samples: StrictlyPositive::new(2000).unwrap(),
            nr_mc_samples: StrictlyPositive::new(2000).unwrap(),
            ..QuantifyConfig::with_method(method)
        }
    }

    #[test]
    fn polynomial_chaos_on_linear_model() {
        let data = problem().quantify(&small(Method::PolynomialChaos)).unwrap();
        let stats = &data.statistics;

        assert_eq!(data.time, vec![0.0, 1.0, 2.0]);
        assert_eq!(data.parameter_names, ["a", "b"]);
        assert_eq!(data.labels.y, "y");

        // At t = 2: mean 1.5, variance (1 + 4) / 12.
        assert_relative_eq!(stats.mean[2], 1.5, epsilon = 1e-10);
        assert_relative_eq!(stats.variance[2], 5.0 / 12.0, epsilon = 1e-10);
        assert_relative_eq!(stats.sobol_first[0][2], 0.2, epsilon = 1e-10);
        assert_relative_eq!(stats.sobol_first[1][2], 0.8, epsilon = 1e-10);

        // At t = 0 only `a` matters.
        assert_relative_eq!(stats.sobol_total[0][0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(stats.sobol_total[1][0], 0.0, epsilon = 1e-10);

        assert!(stats.percentile_5[2] < stats.mean[2]);
        assert!(stats.percentile_95[2] > stats.mean[2]);
    }

    #[test]
    fn monte_carlo_on_linear_model() {
        let data = problem().quantify(&small(Method::MonteCarlo)).unwrap();
        let stats = &data.statistics;

        assert_eq!(data.samples.len(), 4 * 2000);
        assert_relative_eq!(stats.mean[2], 1.5, epsilon = 0.05);
        assert_relative_eq!(stats.variance[2], 5.0 / 12.0, epsilon = 0.05);
        assert_relative_eq!(stats.sobol_total[1][2], 0.8, epsilon = 0.1);
        assert_relative_eq!(stats.sobol_first[0][2], 0.2, epsilon = 0.1);
    }

    #[test]
    fn same_seed_same_result() {
        let config = small(Method::MonteCarlo);
        let first = problem().quantify(&config).unwrap();
        let second = problem().quantify(&config).unwrap();
        assert_eq!(first, second);

        let other = problem()
            .quantify(&QuantifyConfig { seed: 11, ..config })
            .unwrap();
        assert_ne!(first.samples, other.samples);
    }

    #[test]
    fn default_polynomial_chaos_is_reproducible() {
        let config = QuantifyConfig::default();
        let first = problem().quantify(&config).unwrap();
        let second = problem().quantify(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.method, Method::PolynomialChaos);
    }

    #[test]
    fn random_collocation_depends_only_on_seed() {
        let config = QuantifyConfig {
            collocation_rule: CollocationRule::Random,
            ..small(Method::PolynomialChaos)
        };
        let first = problem().quantify(&config).unwrap();
        let second = problem().quantify(&config).unwrap();
        assert_eq!(first, second);

        let other = problem()
            .quantify(&QuantifyConfig { seed: 11, ..config })
            .unwrap();
        assert_ne!(first.samples, other.samples);
        assert_relative_eq!(other.statistics.mean[2], 1.5, epsilon = 1e-10);
    }

    #[test]
    fn requires_parameters() {
        let empty = UncertaintyQuantification::new(
            Labeled::new(Linear, Labels::new("t", "y")),
            Parameters::new(Vec::<(String, Distribution)>::new()).unwrap(),
        );
        assert!(matches!(
            empty.quantify(&QuantifyConfig::default()),
            Err(UqError::NoParameters)
        ));
    }

    #[test]
    fn too_few_collocation_nodes() {
        let config = QuantifyConfig {
            nr_collocation_nodes: Some(3),
            ..QuantifyConfig::default()
        };
        assert!(matches!(
            problem().quantify(&config),
            Err(UqError::TooFewNodes { nodes: 3, terms: 15 })
        ));
    }
}
