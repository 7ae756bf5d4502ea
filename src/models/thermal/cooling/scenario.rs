//! The coffee cup as an uncertainty quantification problem.

use twine_core::Model;

use crate::{
    support::ode::OdeConfig,
    uq::{Evaluation, Labeled, Labels, ParameterError, ParameterSample, Parameters, Uniform},
};

use super::core::{CoolingError, Known, TimeGrid, solve};

/// Parameter names read by [`CoffeeCupUq`].
const ALPHA: &str = "alpha";
const KAPPA_HAT: &str = "kappa_hat";
const T_ENV: &str = "T_env";

/// The coffee cup model over named parameter samples.
///
/// Reads `alpha`, `kappa_hat` (per minute) and `T_env` (°C) from the sample
/// and returns the temperature at every grid time.
#[derive(Debug, Clone, Default)]
pub struct CoffeeCupUq {
    pub grid: TimeGrid,
    pub ode: OdeConfig,
}

impl Model for CoffeeCupUq {
    type Input = ParameterSample;
    type Output = Evaluation;
    type Error = CoolingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let get = |name: &str| {
            input
                .get(name)
                .ok_or_else(|| CoolingError::MissingParameter(name.to_string()))
        };
        let known = Known::new(get(ALPHA)?, get(KAPPA_HAT)?, get(T_ENV)?);

        let results = solve(&known, &self.grid, &self.ode)?;
        Ok(Evaluation {
            time: results.time,
            values: results.temperature,
        })
    }
}

/// The reference coffee cup problem with a dependent heat transfer rate.
///
/// - `alpha ~ U(0.5, 1.5)`
/// - `kappa_hat ~ U(0.025, 0.075) / alpha` per minute
/// - `T_env ~ U(15, 25)` °C
///
/// Parameters are declared in that order, which fixes the column order of
/// samples and Sobol indices.
///
/// The model is labeled `Time (min)` and `Temperature (C)`.
///
/// # Errors
///
/// Returns [`ParameterError`] if the parameter set cannot be built.
pub fn coffee_cup_dependent() -> Result<(Labeled<CoffeeCupUq>, Parameters), ParameterError> {
    let model = Labeled::new(
        CoffeeCupUq::default(),
        Labels::new("Time (min)", "Temperature (C)"),
    );

    let parameters = Parameters::new([
        (ALPHA, uniform(ALPHA, 0.5, 1.5)?.into()),
        (KAPPA_HAT, uniform(KAPPA_HAT, 0.025, 0.075)?.divided_by(ALPHA)),
        (T_ENV, uniform(T_ENV, 15.0, 25.0)?.into()),
    ])?;

    Ok((model, parameters))
}

fn uniform(name: &str, lower: f64, upper: f64) -> Result<Uniform, ParameterError> {
    Uniform::new(lower, upper).map_err(|source| ParameterError::Distribution {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn reads_named_parameters() {
        let sample: ParameterSample = [(ALPHA, 1.0), (KAPPA_HAT, 0.05), (T_ENV, 20.0)]
            .into_iter()
            .collect();
        let out = CoffeeCupUq::default().call(&sample).unwrap();

        assert_eq!(out.time.len(), 150);
        assert_eq!(out.values.len(), 150);
        assert_abs_diff_eq!(out.values[0], 95.0, epsilon = 1e-3);
    }

    #[test]
    fn missing_parameter() {
        let sample: ParameterSample = [(ALPHA, 1.0), (KAPPA_HAT, 0.05)].into_iter().collect();
        let err = CoffeeCupUq::default().call(&sample).unwrap_err();
        assert!(matches!(err, CoolingError::MissingParameter(ref name) if name == "T_env"));
    }

    #[test]
    fn reference_problem() {
        let (model, parameters) = coffee_cup_dependent().unwrap();

        assert_eq!(model.labels().x, "Time (min)");
        assert_eq!(model.labels().y, "Temperature (C)");
        assert_eq!(
            parameters.names().collect::<Vec<_>>(),
            ["alpha", "kappa_hat", "T_env"]
        );
        assert_eq!(parameters.get("kappa_hat").and_then(|d| d.parent()), Some("alpha"));
    }
}
