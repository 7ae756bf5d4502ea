use thiserror::Error;

use crate::support::ode::OdeError;

/// Errors that can occur while evaluating the cooling model.
#[derive(Debug, Error)]
pub enum CoolingError {
    /// The ODE integration failed.
    #[error("integration failed")]
    Integration(#[from] OdeError),

    /// The requested output grid is empty or not increasing.
    #[error("invalid time grid: {points} points over [{start}, {end}]")]
    InvalidTimeGrid {
        /// First time, in minutes.
        start: f64,

        /// Last time, in minutes.
        end: f64,

        /// Requested number of points.
        points: usize,
    },

    /// A parameter sample did not contain a value the model needs.
    #[error("missing parameter `{0}`")]
    MissingParameter(String),
}
