//! Thermal systems models.

pub mod cooling;
