//! Uncertainty quantification of a cooling cup of coffee.
//!
//! Runs the reference problem with polynomial chaos and Monte Carlo and
//! prints the mean temperature band and the Sobol indices of each parameter.
//!
//! ```sh
//! cargo run --release --example coffee_cup
//! ```

use std::error::Error;

use twine_core::Model;
use twine_uq::{
    models::thermal::cooling::{CoffeeCup, CoolingInput, CrossingConfig, coffee_cup_dependent},
    uq::{Method, QuantifyConfig, UncertaintyQuantification, UqData},
};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius, time::minute};

fn main() -> Result<(), Box<dyn Error>> {
    let (model, parameters) = coffee_cup_dependent()?;
    let uq = UncertaintyQuantification::new(model, parameters);

    for method in [Method::PolynomialChaos, Method::MonteCarlo] {
        let data = uq.quantify(&QuantifyConfig::with_method(method))?;
        report(&data);
    }

    let cup = CoffeeCup::default();
    let input = CoolingInput {
        alpha: 1.0,
        kappa_hat: 0.05,
        t_env: ThermodynamicTemperature::new::<degree_celsius>(20.0),
    };
    let results = cup.call(&input)?;
    let drinkable = cup.time_to_temperature(
        &input,
        ThermodynamicTemperature::new::<degree_celsius>(60.0),
        &CrossingConfig::default(),
    )?;

    println!("Nominal cup:");
    println!(
        "  T(200 min) = {:.3} °C",
        results.temperature[results.temperature.len() - 1].get::<degree_celsius>()
    );
    println!("  reaches 60 °C after {:.2} min", drinkable.get::<minute>());

    Ok(())
}

fn report(data: &UqData) {
    let stats = &data.statistics;
    println!("{} (seed {}, {} model runs)", data.method, data.seed, data.samples.len());
    println!("  {:>10}  {:>8}  {:>8}  {:>8}", data.labels.x, "mean", "p5", "p95");
    for step in (0..data.time.len()).step_by(30) {
        println!(
            "  {:>10.1}  {:>8.2}  {:>8.2}  {:>8.2}",
            data.time[step], stats.mean[step], stats.percentile_5[step], stats.percentile_95[step]
        );
    }
    println!("  Sobol indices (time averaged):");
    for (i, name) in data.parameter_names.iter().enumerate() {
        println!(
            "    {name:>10}: first {:.3}, total {:.3}",
            stats.sobol_first_average[i], stats.sobol_total_average[i]
        );
    }
}
