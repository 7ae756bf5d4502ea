use std::fmt;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Propagation method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Polynomial chaos expansion fitted by point collocation.
    #[default]
    PolynomialChaos,

    /// Monte Carlo with Saltelli sampling.
    MonteCarlo,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PolynomialChaos => "polynomial chaos",
            Self::MonteCarlo => "Monte Carlo",
        })
    }
}

/// Placement of polynomial chaos collocation nodes in the unit cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollocationRule {
    /// Deterministic low-discrepancy Hammersley points.
    #[default]
    Hammersley,

    /// Seeded pseudo-random points.
    Random,
}

/// Settings for [`UncertaintyQuantification::quantify`](super::UncertaintyQuantification::quantify).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantifyConfig {
    /// Propagation method.
    pub method: Method,

    /// Seed for every random draw of a run.
    pub seed: u64,

    /// Maximum total degree of the polynomial chaos expansion.
    pub polynomial_order: Constrained<usize, StrictlyPositive>,

    /// Collocation node count.
    ///
    /// When `None`, twice the number of expansion terms plus two.
    pub nr_collocation_nodes: Option<usize>,

    /// Placement of the collocation nodes. Ignored by Monte Carlo.
    pub collocation_rule: CollocationRule,

    /// Surrogate evaluations used for polynomial chaos percentiles.
    pub nr_pc_mc_samples: Constrained<usize, StrictlyPositive>,

    /// Base sample count `N` for Monte Carlo; the model runs `(d + 2) * N` times.
    pub nr_mc_samples: Constrained<usize, StrictlyPositive>,
}

impl Default for QuantifyConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            seed: 10,
            polynomial_order: Constrained::new_unchecked(4),
            nr_collocation_nodes: None,
            collocation_rule: CollocationRule::default(),
            nr_pc_mc_samples: Constrained::new_unchecked(10_000),
            nr_mc_samples: Constrained::new_unchecked(10_000),
        }
    }
}

impl QuantifyConfig {
    /// Default settings with the given method.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}
