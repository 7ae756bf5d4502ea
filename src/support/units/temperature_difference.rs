use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracts two [`ThermodynamicTemperature`] values (absolute temperatures)
/// and returns a [`TemperatureInterval`] (temperature difference).
///
/// See [#380](https://github.com/iliekturtles/uom/issues/380) for why [`uom`]
/// needs this.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn excess_over_ambient() {
        let coffee = ThermodynamicTemperature::new::<degree_celsius>(95.0);
        let room = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert_relative_eq!(coffee.minus(room).get::<delta_celsius>(), 75.0, epsilon = 1e-9);
        assert_relative_eq!(room.minus(coffee).get::<delta_celsius>(), -75.0, epsilon = 1e-9);
    }

    #[test]
    fn mixed_scales() {
        // 25 °C and 77 °F are the same temperature.
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(
            t_in_f.minus(t_in_c).get::<delta_celsius>(),
            0.0,
            epsilon = 1e-12
        );
    }
}
