//! # Twine UQ
//!
//! Uncertainty quantification for [Twine](https://github.com/isentropic-dev/twine)
//! models, with Newton's law of cooling for a cup of coffee as the worked
//! domain.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`uq`]: Dependent parameter distributions, polynomial chaos and Monte
//!   Carlo propagation, and per-time-step statistics.
//! - [`support`]: Supporting utilities used by models and the UQ driver.
//!
//! ## Quick start
//!
//! ```no_run
//! use twine_uq::models::thermal::cooling::coffee_cup_dependent;
//! use twine_uq::uq::{QuantifyConfig, UncertaintyQuantification};
//!
//! let (model, parameters) = coffee_cup_dependent().unwrap();
//! let data = UncertaintyQuantification::new(model, parameters)
//!     .quantify(&QuantifyConfig::default())
//!     .unwrap();
//!
//! for (name, s) in data.parameter_names.iter().zip(&data.statistics.sobol_total_average) {
//!     println!("{name}: {s:.3}");
//! }
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Utility code starts inside a model's
//! internal `core` module and moves to [`support`] once a second model or the
//! UQ driver needs it.
//!
//! The library emits [`tracing`] events and never installs a subscriber.

pub mod models;
pub mod support;
pub mod uq;
