use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, Time},
    temperature_interval::kelvin as delta_kelvin,
    time::minute,
};

/// Solver configuration for finding when a target temperature is reached.
#[derive(Debug, Clone, Copy)]
pub struct CrossingConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the time search variable.
    pub time_tol: Time,

    /// Absolute tolerance for the temperature residual (achieved - target).
    pub temperature_tol: TemperatureInterval,

    /// Latest time searched.
    pub horizon: Time,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            time_tol: Time::new::<minute>(1e-9),
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            horizon: Time::new::<minute>(200.0),
        }
    }
}

impl CrossingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.time_tol.get::<minute>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
