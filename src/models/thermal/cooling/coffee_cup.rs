use twine_core::Model;
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::ode::OdeConfig;

use super::core::{
    CoolingError, CrossingConfig, CrossingError, Known, TimeGrid, solve, time_to_temperature,
};

/// Inputs to the coffee cup model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingInput {
    /// Heat transfer coefficient modifier (dimensionless).
    pub alpha: f64,

    /// Heat transfer rate constant, per minute.
    pub kappa_hat: f64,

    /// Ambient temperature.
    pub t_env: ThermodynamicTemperature,
}

impl CoolingInput {
    fn known(&self) -> Known {
        Known::new(self.alpha, self.kappa_hat, self.t_env.get::<degree_celsius>())
    }
}

/// Temperature history of the cup.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingResults {
    pub time: Vec<Time>,
    pub temperature: Vec<ThermodynamicTemperature>,
}

/// A cup of coffee poured at 95 °C and left to cool.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_uq::models::thermal::cooling::{CoffeeCup, CoolingInput};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let cup = CoffeeCup::default();
/// let results = cup
///     .call(&CoolingInput {
///         alpha: 1.0,
///         kappa_hat: 0.05,
///         t_env: ThermodynamicTemperature::new::<degree_celsius>(20.0),
///     })
///     .unwrap();
///
/// assert_eq!(results.temperature.len(), 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoffeeCup {
    /// Output times.
    pub grid: TimeGrid,

    /// Integrator settings.
    pub ode: OdeConfig,
}

impl CoffeeCup {
    /// Time at which the cup reaches `target`.
    ///
    /// # Errors
    ///
    /// See [`CrossingError`].
    pub fn time_to_temperature(
        &self,
        input: &CoolingInput,
        target: ThermodynamicTemperature,
        config: &CrossingConfig,
    ) -> Result<Time, CrossingError> {
        let minutes = time_to_temperature(
            &input.known(),
            target.get::<degree_celsius>(),
            config,
            &self.ode,
        )?;
        Ok(Time::new::<minute>(minutes))
    }
}

impl Model for CoffeeCup {
    type Input = CoolingInput;
    type Output = CoolingResults;
    type Error = CoolingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = solve(&input.known(), &self.grid, &self.ode)?;

        Ok(CoolingResults {
            time: results.time.into_iter().map(Time::new::<minute>).collect(),
            temperature: results
                .temperature
                .into_iter()
                .map(ThermodynamicTemperature::new::<degree_celsius>)
                .collect(),
        })
    }
}

/// Evaluates the cooling model on the default grid.
///
/// Takes `alpha`, `kappa_hat` (per minute) and the ambient temperature in °C,
/// and returns the 150 output times in minutes with the temperature at each.
///
/// # Errors
///
/// Returns [`CoolingError::Integration`] if the solver fails, which includes
/// non-finite inputs.
pub fn coffee_cup(
    alpha: f64,
    kappa_hat: f64,
    t_env: f64,
) -> Result<(Vec<f64>, Vec<f64>), CoolingError> {
    let results = solve(
        &Known::new(alpha, kappa_hat, t_env),
        &TimeGrid::default(),
        &OdeConfig::default(),
    )?;
    Ok((results.time, results.temperature))
}
