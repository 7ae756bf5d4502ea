//! Public Twine models.
//!
//! Models are organized into domain-specific submodules (e.g., `thermal`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module itself
//! is an implementation detail; a model re-exports only the core items its
//! callers need.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the model-specific core API. A single `core` may be exposed through
//! multiple adapters, e.g. one with typed physical quantities and one that
//! speaks [`ParameterSample`](crate::uq::ParameterSample) for the UQ driver.

pub mod thermal;
