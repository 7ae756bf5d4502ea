//! Problem formulation for the crossing-time search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::{
    models::thermal::cooling::core::{CoolingError, Known},
    support::{
        ode::{OdeConfig, integrate},
        units::TemperatureDifference,
    },
};

/// Temperature of the cup at one instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct Snapshot {
    pub(super) time: Time,
    pub(super) temperature: ThermodynamicTemperature,
}

/// Model adapter exposing elapsed time as the sole input variable.
pub(super) struct TemperatureAtTime<'a> {
    known: &'a Known,
    ode: &'a OdeConfig,
}

impl<'a> TemperatureAtTime<'a> {
    pub(super) fn new(known: &'a Known, ode: &'a OdeConfig) -> Self {
        Self { known, ode }
    }
}

impl Model for TemperatureAtTime<'_> {
    type Input = Time;
    type Output = Snapshot;
    type Error = CoolingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let t = input.get::<minute>();
        let times = if t > 0.0 { vec![0.0, t] } else { vec![0.0] };

        let states = integrate(self.known.rhs(), [self.known.t_initial], &times, self.ode)?;
        let temperature = states.last().map_or(self.known.t_initial, |[t]| *t);

        Ok(Snapshot {
            time: *input,
            temperature: ThermodynamicTemperature::new::<degree_celsius>(temperature),
        })
    }
}

/// Equation problem for the crossing time.
///
/// Computes the residual as `achieved_temperature - target`.
pub(super) struct CrossingProblem {
    target: ThermodynamicTemperature,
}

impl CrossingProblem {
    pub(super) fn new(target: ThermodynamicTemperature) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for CrossingProblem {
    type Input = Time;
    type Output = Snapshot;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Time::new::<minute>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output
            .temperature
            .minus(self.target)
            .get::<delta_kelvin>()])
    }
}
