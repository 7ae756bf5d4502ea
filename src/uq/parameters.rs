//! Named uncertain parameters and the Rosenblatt transform.
//!
//! [`Parameters`] keeps the caller's insertion order for reporting, and a
//! dependency order (parents before children) for evaluation. The Rosenblatt
//! transform maps a point `u` in the independent unit cube to physical values
//! by taking conditional quantiles in dependency order:
//!
//! ```text
//! x_1 = F_1⁻¹(u_1)
//! x_2 = F_{2|1}⁻¹(u_2 | x_1)
//! ...
//! ```
//!
//! Polynomial chaos and Monte Carlo both work in the unit cube, where the
//! inputs are independent, and only the model sees dependent values.

use rand::Rng;
use thiserror::Error;

use super::{Distribution, DistributionError, ParameterSample};

/// Errors from building or transforming a parameter set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A distribution could not be evaluated.
    #[error("parameter `{name}`")]
    Distribution {
        /// Name of the parameter being evaluated.
        name: String,

        /// Underlying distribution error.
        #[source]
        source: DistributionError,
    },

    /// Two parameters share a name.
    #[error("duplicate parameter `{0}`")]
    Duplicate(String),

    /// A derived parameter names a parent that does not exist.
    #[error("parameter `{parameter}` depends on unknown parameter `{parent}`")]
    UnknownParent {
        /// The derived parameter.
        parameter: String,

        /// The missing parent.
        parent: String,
    },

    /// The dependency graph has a cycle.
    #[error("circular dependency among parameters {0:?}")]
    Cycle(Vec<String>),

    /// A point had the wrong number of coordinates.
    #[error("expected {expected} values, got {found}")]
    DimensionMismatch {
        /// Number of parameters.
        expected: usize,

        /// Length of the provided point.
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    distribution: Distribution,
    parent: Option<usize>,
}

/// An ordered set of named parameters with possibly dependent distributions.
///
/// # Example
///
/// ```
/// use twine_uq::uq::{Parameters, Uniform};
///
/// let alpha = Uniform::new(0.5, 1.5).unwrap();
/// let parameters = Parameters::new([
///     ("alpha", alpha.into()),
///     ("kappa_hat", Uniform::new(0.025, 0.075).unwrap().divided_by("alpha")),
///     ("T_env", Uniform::new(15.0, 25.0).unwrap().into()),
/// ])
/// .unwrap();
///
/// let x = parameters.transform(&[0.5, 0.5, 0.5]).unwrap();
/// assert_eq!(x[0], 1.0);
/// assert!((x[1] - 0.05).abs() < 1e-15);
/// assert_eq!(x[2], 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    entries: Vec<Entry>,
    order: Vec<usize>,
}

impl Parameters {
    /// Builds a parameter set and resolves its dependency graph.
    ///
    /// Parents may be declared after the parameters that depend on them.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] for duplicate names, unknown parents, or cycles
    /// (including a parameter that depends on itself).
    pub fn new<I, S>(parameters: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (S, Distribution)>,
        S: Into<String>,
    {
        let mut entries: Vec<Entry> = Vec::new();
        for (name, distribution) in parameters {
            let name = name.into();
            if entries.iter().any(|e| e.name == name) {
                return Err(ParameterError::Duplicate(name));
            }
            entries.push(Entry {
                name,
                distribution,
                parent: None,
            });
        }

        for i in 0..entries.len() {
            let Some(parent) = entries[i].distribution.parent() else {
                continue;
            };
            let index = entries.iter().position(|e| e.name == parent).ok_or_else(|| {
                ParameterError::UnknownParent {
                    parameter: entries[i].name.clone(),
                    parent: parent.to_string(),
                }
            })?;
            entries[i].parent = Some(index);
        }

        let order = dependency_order(&entries)?;
        Ok(Self { entries, order })
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Returns the distribution of the named parameter.
    pub fn get(&self, name: &str) -> Option<&Distribution> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.distribution)
    }

    /// Returns `true` if any parameter depends on another.
    pub fn is_dependent(&self) -> bool {
        self.entries.iter().any(|e| e.parent.is_some())
    }

    /// Maps a point in the unit cube to physical parameter values.
    ///
    /// Both `u` and the result are in insertion order. Coordinates are clamped
    /// into `[ε, 1 - ε]` so unbounded marginals stay finite.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `u` has the wrong length or a derived
    /// distribution degenerates.
    pub fn transform(&self, u: &[f64]) -> Result<Vec<f64>, ParameterError> {
        self.check_len(u.len())?;

        let mut x = vec![f64::NAN; self.len()];
        for &i in &self.order {
            let entry = &self.entries[i];
            let parent_value = entry.parent.map(|p| x[p]);
            let ui = u[i].clamp(f64::EPSILON, 1.0 - f64::EPSILON);
            x[i] = entry
                .distribution
                .quantile(ui, parent_value)
                .map_err(|source| ParameterError::Distribution {
                    name: entry.name.clone(),
                    source,
                })?;
        }
        Ok(x)
    }

    /// Maps physical parameter values back to the unit cube.
    ///
    /// # Errors
    ///
    /// Same conditions as [`transform`](Self::transform).
    pub fn inverse_transform(&self, x: &[f64]) -> Result<Vec<f64>, ParameterError> {
        self.check_len(x.len())?;

        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let parent_value = entry.parent.map(|p| x[p]);
                entry
                    .distribution
                    .cdf(x[i], parent_value)
                    .map_err(|source| ParameterError::Distribution {
                        name: entry.name.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Draws `n` joint samples of physical parameter values.
    ///
    /// # Errors
    ///
    /// Same conditions as [`transform`](Self::transform).
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<f64>>, ParameterError> {
        (0..n)
            .map(|_| {
                let u: Vec<f64> = (0..self.len()).map(|_| rng.r#gen::<f64>()).collect();
                self.transform(&u)
            })
            .collect()
    }

    /// Pairs physical values with parameter names.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::DimensionMismatch`] if `x` has the wrong length.
    pub fn to_sample(&self, x: &[f64]) -> Result<ParameterSample, ParameterError> {
        self.check_len(x.len())?;
        Ok(self
            .entries
            .iter()
            .zip(x)
            .map(|(e, &v)| (e.name.clone(), v))
            .collect())
    }

    fn check_len(&self, found: usize) -> Result<(), ParameterError> {
        if found != self.len() {
            return Err(ParameterError::DimensionMismatch {
                expected: self.len(),
                found,
            });
        }
        Ok(())
    }
}

/// Orders entries so every parent precedes its children.
///
/// Ties keep insertion order.
fn dependency_order(entries: &[Entry]) -> Result<Vec<usize>, ParameterError> {
    let mut placed = vec![false; entries.len()];
    let mut order = Vec::with_capacity(entries.len());

    while order.len() < entries.len() {
        let ready: Vec<usize> = (0..entries.len())
            .filter(|&i| !placed[i] && entries[i].parent.is_none_or(|p| placed[p]))
            .collect();

        if ready.is_empty() {
            let stuck = (0..entries.len())
                .filter(|&i| !placed[i])
                .map(|i| entries[i].name.clone())
                .collect();
            return Err(ParameterError::Cycle(stuck));
        }

        for i in ready {
            placed[i] = true;
            order.push(i);
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::uq::{Normal, Uniform, statistics};

    fn coffee() -> Parameters {
        Parameters::new([
            ("alpha", Uniform::new(0.5, 1.5).unwrap().into()),
            (
                "kappa_hat",
                Uniform::new(0.025, 0.075).unwrap().divided_by("alpha"),
            ),
            ("T_env", Uniform::new(15.0, 25.0).unwrap().into()),
        ])
        .unwrap()
    }

    #[test]
    fn names_keep_insertion_order() {
        let p = coffee();
        assert_eq!(p.names().collect::<Vec<_>>(), ["alpha", "kappa_hat", "T_env"]);
        assert!(p.is_dependent());
    }

    #[test]
    fn parent_declared_later() {
        let p = Parameters::new([
            ("kappa_hat", Uniform::new(0.025, 0.075).unwrap().divided_by("alpha")),
            ("alpha", Uniform::new(0.5, 1.5).unwrap().into()),
        ])
        .unwrap();

        let x = p.transform(&[0.5, 1.0]).unwrap();
        assert_relative_eq!(x[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(x[0], 0.05 / 1.5, epsilon = 1e-12);
    }

    #[test]
    fn inverse_transform_recovers_unit_point() {
        let p = coffee();
        let u = [0.2, 0.7, 0.9];
        let x = p.transform(&u).unwrap();
        let back = p.inverse_transform(&x).unwrap();
        for (a, b) in u.iter().zip(&back) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn normal_parameters_round_trip_exactly() {
        let p = Parameters::new([
            ("T_env", Normal::new(20.0, 2.0).unwrap().into()),
            ("offset", Normal::new(0.0, 0.5).unwrap().plus("T_env")),
        ])
        .unwrap();

        for u in [[0.9, 0.999], [0.001, 0.5], [0.3, 0.1]] {
            let back = p.inverse_transform(&p.transform(&u).unwrap()).unwrap();
            assert_relative_eq!(back[0], u[0], epsilon = 1e-12);
            assert_relative_eq!(back[1], u[1], epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_bad_graphs() {
        let u = || Uniform::new(0.0, 1.0).unwrap();

        assert_eq!(
            Parameters::new([("a", u().into()), ("a", u().into())]).unwrap_err(),
            ParameterError::Duplicate("a".into())
        );
        assert!(matches!(
            Parameters::new([("a", u().divided_by("b"))]).unwrap_err(),
            ParameterError::UnknownParent { .. }
        ));
        assert!(matches!(
            Parameters::new([("a", u().plus("a"))]).unwrap_err(),
            ParameterError::Cycle(_)
        ));
        assert_eq!(
            Parameters::new([("a", u().plus("b")), ("b", u().plus("a"))]).unwrap_err(),
            ParameterError::Cycle(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn wrong_dimension() {
        assert_eq!(
            coffee().transform(&[0.5]).unwrap_err(),
            ParameterError::DimensionMismatch {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn degenerate_parent_is_reported() {
        let p = Parameters::new([
            ("x", Uniform::new(-1.0, 1.0).unwrap().into()),
            ("y", Uniform::new(1.0, 2.0).unwrap().divided_by("x")),
        ])
        .unwrap();

        let err = p.transform(&[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, ParameterError::Distribution { ref name, .. } if name == "y"));
    }

    #[test]
    fn dependent_samples_are_correlated() {
        let p = coffee();
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let samples = p.sample(2000, &mut rng).unwrap();

        let alpha: Vec<f64> = samples.iter().map(|x| x[0]).collect();
        let kappa_hat: Vec<f64> = samples.iter().map(|x| x[1]).collect();
        let t_env: Vec<f64> = samples.iter().map(|x| x[2]).collect();

        let dependent = statistics::correlation(&alpha, &kappa_hat).unwrap();
        let independent = statistics::correlation(&alpha, &t_env).unwrap();

        assert!(dependent < -0.4, "corr(alpha, kappa_hat) = {dependent}");
        assert!(independent.abs() < 0.1, "corr(alpha, T_env) = {independent}");
        assert!(
            samples
                .iter()
                .all(|x| (0.025..=0.075).contains(&(x[0] * x[1]))),
        );
    }

    #[test]
    fn same_seed_same_samples() {
        let p = coffee();
        let a = p.sample(10, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
        let b = p.sample(10, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
    }
}
