//! Probability distributions for uncertain parameters.
//!
//! A parameter is either drawn from an independent [`Marginal`] or
//! [`Derived`](Distribution::Derived) from another parameter's value through
//! an arithmetic [`Operation`]. Derived parameters make the joint
//! distribution dependent; [`Parameters`](super::Parameters) resolves the
//! dependency graph and applies the Rosenblatt transform.
//!
//! ```
//! use twine_uq::uq::{Distribution, Uniform};
//!
//! // kappa_hat = U(0.025, 0.075) / alpha
//! let kappa_hat = Uniform::new(0.025, 0.075).unwrap().divided_by("alpha");
//! assert_eq!(kappa_hat.parent(), Some("alpha"));
//! ```

mod normal;
mod uniform;

pub use normal::Normal;
pub use uniform::Uniform;

use std::fmt;

use thiserror::Error;

/// Errors from constructing or evaluating a distribution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),

    /// A multiplicative operation met a zero-valued parent.
    #[error("cannot {op} by a zero-valued parent")]
    DegenerateParent {
        /// Operation that degenerated.
        op: Operation,
    },

    /// A derived distribution was evaluated without its parent's value.
    #[error("no value given for parent `{0}`")]
    MissingParent(String),
}

/// An independent univariate distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marginal {
    Uniform(Uniform),
    Normal(Normal),
}

impl Marginal {
    pub fn mean(&self) -> f64 {
        match self {
            Self::Uniform(d) => d.mean(),
            Self::Normal(d) => d.mean(),
        }
    }

    pub fn variance(&self) -> f64 {
        match self {
            Self::Uniform(d) => d.variance(),
            Self::Normal(d) => d.variance(),
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Uniform(d) => d.cdf(x),
            Self::Normal(d) => d.cdf(x),
        }
    }

    pub fn quantile(&self, u: f64) -> f64 {
        match self {
            Self::Uniform(d) => d.quantile(u),
            Self::Normal(d) => d.quantile(u),
        }
    }
}

impl From<Uniform> for Marginal {
    fn from(d: Uniform) -> Self {
        Self::Uniform(d)
    }
}

impl From<Normal> for Marginal {
    fn from(d: Normal) -> Self {
        Self::Normal(d)
    }
}

/// Arithmetic relation between a derived parameter and its parent.
///
/// A derived value is `base <op> parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        };
        f.write_str(verb)
    }
}

impl Operation {
    /// Quantile of `base <op> parent` given the parent's value.
    fn quantile(self, base: &Marginal, u: f64, parent: f64) -> Result<f64, DistributionError> {
        match self {
            Self::Add => Ok(base.quantile(u) + parent),
            Self::Subtract => Ok(base.quantile(u) - parent),
            Self::Multiply | Self::Divide => {
                let scale = self.scale(parent)?;
                // A negative scale reverses the order of outcomes.
                let u = if scale > 0.0 { u } else { 1.0 - u };
                Ok(base.quantile(u) * scale)
            }
        }
    }

    /// CDF of `base <op> parent` given the parent's value.
    fn cdf(self, base: &Marginal, x: f64, parent: f64) -> Result<f64, DistributionError> {
        match self {
            Self::Add => Ok(base.cdf(x - parent)),
            Self::Subtract => Ok(base.cdf(x + parent)),
            Self::Multiply | Self::Divide => {
                let scale = self.scale(parent)?;
                let p = base.cdf(x / scale);
                Ok(if scale > 0.0 { p } else { 1.0 - p })
            }
        }
    }

    /// Factor applied to the base value for multiplicative operations.
    fn scale(self, parent: f64) -> Result<f64, DistributionError> {
        if parent == 0.0 {
            return Err(DistributionError::DegenerateParent { op: self });
        }
        Ok(match self {
            Self::Divide => 1.0 / parent,
            _ => parent,
        })
    }
}

/// Distribution of one named parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Drawn independently of all other parameters.
    Independent(Marginal),

    /// Defined as `base <op> parent`, where `parent` names another parameter.
    Derived {
        base: Marginal,
        op: Operation,
        parent: String,
    },
}

impl Distribution {
    /// Returns the name of the parameter this one depends on, if any.
    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Independent(_) => None,
            Self::Derived { parent, .. } => Some(parent),
        }
    }

    /// Conditional quantile given the parent's value.
    ///
    /// # Errors
    ///
    /// Fails for a derived distribution without `parent_value`, or when a
    /// multiplicative operation meets a zero parent.
    pub fn quantile(&self, u: f64, parent_value: Option<f64>) -> Result<f64, DistributionError> {
        match self {
            Self::Independent(m) => Ok(m.quantile(u)),
            Self::Derived { base, op, parent } => {
                let value = parent_value.ok_or_else(|| DistributionError::MissingParent(parent.clone()))?;
                op.quantile(base, u, value)
            }
        }
    }

    /// Conditional CDF given the parent's value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`quantile`](Self::quantile).
    pub fn cdf(&self, x: f64, parent_value: Option<f64>) -> Result<f64, DistributionError> {
        match self {
            Self::Independent(m) => Ok(m.cdf(x)),
            Self::Derived { base, op, parent } => {
                let value = parent_value.ok_or_else(|| DistributionError::MissingParent(parent.clone()))?;
                op.cdf(base, x, value)
            }
        }
    }
}

impl From<Marginal> for Distribution {
    fn from(marginal: Marginal) -> Self {
        Self::Independent(marginal)
    }
}

impl From<Uniform> for Distribution {
    fn from(d: Uniform) -> Self {
        Self::Independent(d.into())
    }
}

impl From<Normal> for Distribution {
    fn from(d: Normal) -> Self {
        Self::Independent(d.into())
    }
}

macro_rules! derive_ops {
    ($ty:ty) => {
        impl $ty {
            /// Distribution of `self + parent`.
            pub fn plus(self, parent: impl Into<String>) -> Distribution {
                derived(self, Operation::Add, parent)
            }

            /// Distribution of `self - parent`.
            pub fn minus(self, parent: impl Into<String>) -> Distribution {
                derived(self, Operation::Subtract, parent)
            }

            /// Distribution of `self * parent`.
            pub fn times(self, parent: impl Into<String>) -> Distribution {
                derived(self, Operation::Multiply, parent)
            }

            /// Distribution of `self / parent`.
            pub fn divided_by(self, parent: impl Into<String>) -> Distribution {
                derived(self, Operation::Divide, parent)
            }
        }
    };
}

derive_ops!(Marginal);
derive_ops!(Uniform);
derive_ops!(Normal);

fn derived(base: impl Into<Marginal>, op: Operation, parent: impl Into<String>) -> Distribution {
    Distribution::Derived {
        base: base.into(),
        op,
        parent: parent.into(),
    }
}
