//! Iterative solve for the time a target temperature is reached.
//!
//! Bisection varies the elapsed time until the integrated temperature matches
//! the target. The closed form is not used, so the same approach works for
//! any cooling law the core grows to support.

mod config;
mod error;
mod problem;

pub use config::CrossingConfig;
pub use error::CrossingError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::ode::OdeConfig;

use super::Known;

use problem::{CrossingProblem, TemperatureAtTime};

/// Earliest time, in minutes, at which the temperature reaches `target` (°C).
///
/// A target equal to the initial temperature is reached at time zero.
///
/// # Errors
///
/// Returns [`CrossingError`] if the target is unreachable, is not reached
/// within `config.horizon`, the model fails, or the solver does not converge.
pub fn time_to_temperature(
    known: &Known,
    target: f64,
    config: &CrossingConfig,
    ode: &OdeConfig,
) -> Result<f64, CrossingError> {
    if target == known.t_initial {
        return Ok(0.0);
    }

    let lower = known.t_env.min(known.t_initial);
    let upper = known.t_env.max(known.t_initial);
    if !(known.rate() > 0.0 && target > lower && target < upper) {
        return Err(CrossingError::Unreachable {
            target,
            initial: known.t_initial,
            ambient: known.t_env,
        });
    }

    let model = TemperatureAtTime::new(known, ode);
    let target_temp = ThermodynamicTemperature::new::<degree_celsius>(target);

    let at_horizon = model.call(&config.horizon)?;
    let cooling = known.t_initial > known.t_env;
    let passed = if cooling {
        at_horizon.temperature <= target_temp
    } else {
        at_horizon.temperature >= target_temp
    };
    if !passed {
        return Err(CrossingError::NotReached {
            horizon: config.horizon,
            temperature: at_horizon.temperature,
        });
    }

    tracing::debug!(target, horizon = config.horizon.get::<minute>(), "solving crossing time");

    let problem = CrossingProblem::new(target_temp);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, config.horizon.get::<minute>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed integration has no residual to bracket with.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(CrossingError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.time.get::<minute>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::Time;

    fn closed_form(known: &Known, target: f64) -> f64 {
        ((known.t_initial - known.t_env) / (target - known.t_env)).ln() / known.rate()
    }

    #[test]
    fn drinking_temperature() {
        let known = Known::new(1.0, 0.05, 20.0);
        let t = time_to_temperature(&known, 60.0, &CrossingConfig::default(), &OdeConfig::default())
            .expect("crossing should be found");

        assert_relative_eq!(t, closed_form(&known, 60.0), epsilon = 1e-4);
    }

    #[test]
    fn warming_cup() {
        let known = Known::new(1.0, 0.05, 120.0);
        let t = time_to_temperature(&known, 110.0, &CrossingConfig::default(), &OdeConfig::default())
            .expect("crossing should be found");

        assert_relative_eq!(t, closed_form(&known, 110.0), epsilon = 1e-4);
    }

    #[test]
    fn initial_temperature_is_reached_immediately() {
        let known = Known::new(1.0, 0.05, 20.0);
        let t = time_to_temperature(&known, 95.0, &CrossingConfig::default(), &OdeConfig::default())
            .unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn ambient_is_unreachable() {
        let known = Known::new(1.0, 0.05, 20.0);
        for target in [20.0, 10.0, 100.0] {
            let err = time_to_temperature(&known, target, &CrossingConfig::default(), &OdeConfig::default())
                .unwrap_err();
            assert!(matches!(err, CrossingError::Unreachable { .. }), "target {target}");
        }
    }

    #[test]
    fn short_horizon_is_reported() {
        let known = Known::new(1.0, 0.05, 20.0);
        let config = CrossingConfig {
            horizon: Time::new::<minute>(5.0),
            ..CrossingConfig::default()
        };
        let err = time_to_temperature(&known, 30.0, &config, &OdeConfig::default()).unwrap_err();

        match err {
            CrossingError::NotReached { temperature, .. } => {
                assert!(temperature.get::<degree_celsius>() > 30.0);
            }
            other => panic!("Expected NotReached, got: {other:?}"),
        }
    }
}
