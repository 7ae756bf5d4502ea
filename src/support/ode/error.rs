use thiserror::Error;

/// Errors that can occur while integrating an initial value problem.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OdeError {
    /// Output times were empty, not finite, or not strictly increasing.
    #[error("output times must be finite and strictly increasing")]
    InvalidTimes,

    /// The state or its derivative became `NaN` or infinite.
    #[error("non-finite state at t={t}")]
    NonFiniteState {
        /// Time at which the non-finite value was detected.
        t: f64,
    },

    /// The step size shrank below the floating point resolution of `t`.
    #[error("step size underflow at t={t}")]
    StepSizeUnderflow {
        /// Time at which the step could not be reduced further.
        t: f64,
    },

    /// Too many steps were attempted between two output times, even after
    /// switching to the stiff method.
    #[error("more than {max_steps} steps needed at t={t}")]
    MaxStepsExceeded {
        /// Time reached before giving up.
        t: f64,

        /// Step limit from the solver configuration.
        max_steps: usize,
    },
}
