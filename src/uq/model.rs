//! The interface between uncertainty quantification and a model.
//!
//! The driver hands a model one [`ParameterSample`] per evaluation and expects
//! an [`Evaluation`] back. Any [`Model`] with those input and output types can
//! be wrapped in [`Labeled`] and quantified.

use twine_core::Model;

/// Named parameter values for one model evaluation, in parameter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSample(Vec<(String, f64)>);

impl ParameterSample {
    /// Returns the value of the named parameter.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|&(_, v)| v)
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ParameterSample {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }
}

/// Model output: one value per point of a time axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Output times, identical for every evaluation of a model.
    pub time: Vec<f64>,

    /// Output value at each time.
    pub values: Vec<f64>,
}

/// Axis labels for a model's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label of the time axis.
    pub x: String,

    /// Label of the output axis.
    pub y: String,
}

impl Labels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A model with axis labels attached.
///
/// Calls are delegated to the inner model unchanged.
#[derive(Debug, Clone)]
pub struct Labeled<M> {
    model: M,
    labels: Labels,
}

impl<M> Labeled<M> {
    pub fn new(model: M, labels: Labels) -> Self {
        Self { model, labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn inner(&self) -> &M {
        &self.model
    }
}

impl<M: Model> Model for Labeled<M> {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.model.call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl Model for Doubler {
        type Input = ParameterSample;
        type Output = Evaluation;
        type Error = Infallible;

        fn call(&self, input: &ParameterSample) -> Result<Evaluation, Infallible> {
            let x = input.get("x").unwrap_or_default();
            Ok(Evaluation {
                time: vec![0.0, 1.0],
                values: vec![x, 2.0 * x],
            })
        }
    }

    #[test]
    fn sample_lookup() {
        let sample: ParameterSample = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert_eq!(sample.get("b"), Some(2.0));
        assert_eq!(sample.get("c"), None);
        assert_eq!(sample.iter().map(|(n, _)| n).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn labeled_delegates() {
        let model = Labeled::new(Doubler, Labels::new("Time (min)", "Value"));
        let sample: ParameterSample = [("x", 3.0)].into_iter().collect();

        let out = model.call(&sample).unwrap();
        assert_eq!(out.values, vec![3.0, 6.0]);
        assert_eq!(model.labels().x, "Time (min)");
    }
}
