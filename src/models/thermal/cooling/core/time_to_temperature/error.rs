use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature, Time};

use crate::models::thermal::cooling::core::CoolingError;

/// Errors that can occur while solving for the time a target temperature is reached.
#[derive(Debug, Error)]
pub enum CrossingError {
    /// The target does not lie between the initial and ambient temperatures,
    /// or the cup does not relax toward ambient at all.
    #[error("target {target} °C is unreachable from {initial} °C with ambient {ambient} °C")]
    Unreachable {
        /// Requested temperature, in degrees Celsius.
        target: f64,

        /// Initial temperature, in degrees Celsius.
        initial: f64,

        /// Ambient temperature, in degrees Celsius.
        ambient: f64,
    },

    /// The target is reached only after the search horizon.
    #[error("target not reached within {horizon:?}")]
    NotReached {
        /// Search horizon from the configuration.
        horizon: Time,

        /// Temperature at the horizon.
        temperature: ThermodynamicTemperature,
    },

    /// Evaluating the cooling model failed.
    #[error("cooling solve failed")]
    Cooling(#[from] CoolingError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
