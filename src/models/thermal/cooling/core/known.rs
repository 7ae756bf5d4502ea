/// Known inputs for a cooling solve.
///
/// Time is in minutes and temperatures are in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Known {
    /// Heat transfer coefficient modifier (dimensionless).
    pub alpha: f64,

    /// Heat transfer rate constant, per minute.
    pub kappa_hat: f64,

    /// Ambient temperature.
    pub t_env: f64,

    /// Temperature at time zero.
    pub t_initial: f64,
}

impl Known {
    /// Creates inputs starting from [`INITIAL_TEMPERATURE`](super::INITIAL_TEMPERATURE).
    pub fn new(alpha: f64, kappa_hat: f64, t_env: f64) -> Self {
        Self {
            alpha,
            kappa_hat,
            t_env,
            t_initial: super::INITIAL_TEMPERATURE,
        }
    }

    /// Combined cooling rate constant `alpha * kappa_hat`, per minute.
    pub fn rate(&self) -> f64 {
        self.alpha * self.kappa_hat
    }

    /// Right-hand side of Newton's law of cooling, `dT/dt = -alpha * kappa_hat * (T - T_env)`.
    pub(super) fn rhs(&self) -> impl Fn(f64, &[f64; 1]) -> [f64; 1] + use<> {
        let rate = self.rate();
        let t_env = self.t_env;
        move |_t, temperature| [-rate * (temperature[0] - t_env)]
    }
}
