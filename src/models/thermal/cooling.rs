//! Cooling of a cup of coffee.
//!
//! This module provides [`twine_core::Model`] implementations for Newton's law
//! of cooling. The computational core is in the internal `core` module, which
//! works in plain minutes and degrees Celsius:
//!
//! - [`CoffeeCup`] takes and returns `uom` quantities.
//! - [`CoffeeCupUq`] takes a [`ParameterSample`](crate::uq::ParameterSample)
//!   and returns an [`Evaluation`](crate::uq::Evaluation), for use with
//!   [`UncertaintyQuantification`](crate::uq::UncertaintyQuantification).
//! - [`coffee_cup`] is the plain-number form of the same model.
//!
//! [`coffee_cup_dependent`] builds the reference uncertainty problem, where the
//! heat transfer rate depends on the coefficient modifier.

pub(crate) mod core;

mod coffee_cup;
mod scenario;

pub use self::core::{
    CoolingError, CrossingConfig, CrossingError, INITIAL_TEMPERATURE, Known, Results, TimeGrid,
    analytical_temperature, solve,
};
pub use coffee_cup::{CoffeeCup, CoolingInput, CoolingResults, coffee_cup};
pub use scenario::{CoffeeCupUq, coffee_cup_dependent};
