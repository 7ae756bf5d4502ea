use std::error::Error as StdError;

use thiserror::Error;

use super::{ParameterError, ParameterSample};

/// Errors that can occur while quantifying uncertainty.
#[derive(Debug, Error)]
pub enum UqError {
    /// The parameter set could not be transformed.
    #[error("parameter transform failed")]
    Parameters(#[from] ParameterError),

    /// There are no uncertain parameters to propagate.
    #[error("no uncertain parameters")]
    NoParameters,

    /// The wrapped model failed for a sample.
    #[error("model evaluation failed for {sample:?}")]
    Model {
        /// Parameter values passed to the model.
        sample: ParameterSample,

        /// Error returned by the model.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// An evaluation's output length differs from the first evaluation's.
    #[error("model output has {found} points, expected {expected}")]
    InconsistentOutput {
        /// Length of the first evaluation's time axis.
        expected: usize,

        /// Length of the offending output.
        found: usize,
    },

    /// An evaluation produced a NaN or infinite value.
    #[error("model output is not finite for {sample:?}")]
    NonFiniteOutput {
        /// Parameter values passed to the model.
        sample: ParameterSample,
    },

    /// The collocation node count cannot determine every coefficient.
    #[error("{nodes} collocation nodes cannot fit {terms} polynomial terms")]
    TooFewNodes {
        /// Requested number of nodes.
        nodes: usize,

        /// Number of terms in the polynomial basis.
        terms: usize,
    },

    /// The least-squares fit of the expansion failed.
    #[error("least-squares fit failed: {0}")]
    LeastSquares(String),
}
