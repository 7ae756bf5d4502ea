//! Supporting utilities used by models and the UQ driver.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod ode;
pub mod units;
