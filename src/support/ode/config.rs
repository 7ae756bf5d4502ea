use crate::support::constraint::{Constrained, StrictlyPositive};

/// Tolerance and step-limit settings for [`integrate`](super::integrate).
#[derive(Debug, Clone, Copy)]
pub struct OdeConfig {
    /// Relative tolerance applied to each state component.
    pub rtol: Constrained<f64, StrictlyPositive>,

    /// Absolute tolerance applied to each state component.
    pub atol: Constrained<f64, StrictlyPositive>,

    /// Maximum number of attempted steps between two consecutive output times.
    pub max_steps: usize,

    /// First trial step size.
    ///
    /// When `None`, the step is estimated from the initial state and slope.
    pub initial_step: Option<Constrained<f64, StrictlyPositive>>,
}

impl Default for OdeConfig {
    /// Tolerances and step limit of the classic LSODA driver.
    fn default() -> Self {
        Self {
            rtol: Constrained::new_unchecked(1.490_12e-8),
            atol: Constrained::new_unchecked(1.490_12e-8),
            max_steps: 500,
            initial_step: None,
        }
    }
}
