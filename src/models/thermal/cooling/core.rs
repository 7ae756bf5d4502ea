//! Newton's law of cooling for a lumped cup of coffee.
//!
//! The temperature `T` of the cup relaxes toward the ambient temperature
//! `T_env` at a rate set by the combined constant `alpha * kappa_hat`:
//!
//! ```text
//! dT/dt = -alpha * kappa_hat * (T - T_env),    T(0) = 95 °C
//! ```
//!
//! The equation has the closed form
//! `T(t) = T_env + (T(0) - T_env) * exp(-alpha * kappa_hat * t)`, which
//! [`analytical_temperature`] evaluates. [`solve`] integrates the equation
//! numerically so the model keeps the shape of a general ODE-based model.
//!
//! Times are in minutes and temperatures in degrees Celsius throughout.

mod error;
mod known;
mod results;
mod time_grid;
mod time_to_temperature;

pub use error::CoolingError;
pub use known::Known;
pub use results::Results;
pub use time_grid::TimeGrid;
pub use time_to_temperature::{CrossingConfig, CrossingError, time_to_temperature};

use crate::support::ode::{OdeConfig, integrate};

/// Temperature of freshly poured coffee, in degrees Celsius.
pub const INITIAL_TEMPERATURE: f64 = 95.0;

/// Integrates the cooling equation over `grid`.
///
/// No range checks are made on the inputs. Non-finite inputs or a diverging
/// solution are reported by the integrator.
///
/// # Errors
///
/// Returns [`CoolingError::Integration`] if the ODE solver fails.
pub fn solve(known: &Known, grid: &TimeGrid, config: &OdeConfig) -> Result<Results, CoolingError> {
    let states = integrate(known.rhs(), [known.t_initial], grid.times(), config)?;

    Ok(Results {
        time: grid.times().to_vec(),
        temperature: states.into_iter().map(|[t]| t).collect(),
    })
}

/// Closed-form temperature at time `t`.
pub fn analytical_temperature(known: &Known, t: f64) -> f64 {
    known.t_env + (known.t_initial - known.t_env) * (-known.rate() * t).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn reference() -> Known {
        Known::new(1.0, 0.05, 20.0)
    }

    #[test]
    fn output_has_one_temperature_per_time() {
        let results = solve(&reference(), &TimeGrid::default(), &OdeConfig::default()).unwrap();
        assert_eq!(results.time.len(), 150);
        assert_eq!(results.temperature.len(), 150);
    }

    #[test]
    fn starts_at_initial_temperature() {
        let results = solve(&reference(), &TimeGrid::default(), &OdeConfig::default()).unwrap();
        assert_abs_diff_eq!(results.temperature[0], 95.0, epsilon = 1e-3);
    }

    #[test]
    fn matches_reference_points() {
        let known = reference();
        let grid = TimeGrid::linspace(0.0, 200.0, 11).unwrap();
        let results = solve(&known, &grid, &OdeConfig::default()).unwrap();

        // t = 20 min is the second grid point.
        assert_relative_eq!(results.time[1], 20.0);
        assert_abs_diff_eq!(results.temperature[1], 20.0 + 75.0 * (-1.0_f64).exp(), epsilon = 0.5);
        assert_abs_diff_eq!(results.temperature[1], 47.59, epsilon = 0.01);
        assert_abs_diff_eq!(results.last_temperature().unwrap(), 20.0, epsilon = 1e-2);
    }

    #[test]
    fn matches_closed_form_on_default_grid() {
        let known = Known::new(0.8, 0.06, 18.0);
        let results = solve(&known, &TimeGrid::default(), &OdeConfig::default()).unwrap();

        for (t, temperature) in results.time.iter().zip(&results.temperature) {
            assert_abs_diff_eq!(*temperature, analytical_temperature(&known, *t), epsilon = 1e-5);
        }
    }

    #[test]
    fn warms_when_ambient_is_hotter() {
        let known = Known::new(1.0, 0.05, 120.0);
        let results = solve(&known, &TimeGrid::default(), &OdeConfig::default()).unwrap();

        assert!(results.temperature.windows(2).all(|w| w[1] >= w[0] - 1e-9));
        assert!(results.last_temperature().unwrap() <= 120.0 + 1e-6);
    }

    #[test]
    fn non_finite_input_fails() {
        let known = Known::new(f64::NAN, 0.05, 20.0);
        let err = solve(&known, &TimeGrid::default(), &OdeConfig::default()).unwrap_err();
        assert!(matches!(err, CoolingError::Integration(_)));
    }

    proptest! {
        #[test]
        fn approaches_ambient_monotonically(
            alpha in 0.5_f64..1.5,
            kappa_hat in 0.0167_f64..0.15,
            t_env in 15.0_f64..25.0,
        ) {
            let known = Known::new(alpha, kappa_hat, t_env);
            let results = solve(&known, &TimeGrid::default(), &OdeConfig::default()).unwrap();

            prop_assert_eq!(results.temperature.len(), 150);
            prop_assert!((results.temperature[0] - 95.0).abs() < 1e-3);
            for w in results.temperature.windows(2) {
                prop_assert!(w[1] <= w[0] + 1e-9);
                prop_assert!(w[1] >= t_env - 1e-9);
            }
        }
    }
}
