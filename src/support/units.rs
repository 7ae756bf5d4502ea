//! Extensions to [`uom`].
//!
//! Temperatures at the public model boundary are [`uom`] quantities. Subtracting
//! two absolute temperatures in [`uom`] does not yield a temperature interval,
//! so this module provides [`TemperatureDifference`]:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::degree_celsius as delta_celsius;
//! use twine_uq::support::units::TemperatureDifference;
//!
//! let coffee = ThermodynamicTemperature::new::<degree_celsius>(95.0);
//! let room = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let excess = coffee.minus(room);
//! assert!((excess.get::<delta_celsius>() - 75.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
