use std::error::Error as StdError;

use twine_core::Model;

use super::{Evaluation, ParameterSample, Parameters, UqError};

/// Runs a model at points of the unit cube and checks what comes back.
///
/// Every accepted evaluation is recorded so the run can report the physical
/// parameter values it used.
pub(super) struct Evaluator<'a, M> {
    model: &'a M,
    parameters: &'a Parameters,
    time: Option<Vec<f64>>,
    samples: Vec<Vec<f64>>,
}

impl<'a, M> Evaluator<'a, M>
where
    M: Model<Input = ParameterSample, Output = Evaluation>,
    M::Error: StdError + Send + Sync + 'static,
{
    pub(super) fn new(model: &'a M, parameters: &'a Parameters) -> Self {
        Self {
            model,
            parameters,
            time: None,
            samples: Vec::new(),
        }
    }

    pub(super) fn dim(&self) -> usize {
        self.parameters.len()
    }

    /// Evaluates the model at the Rosenblatt image of `u`.
    pub(super) fn evaluate(&mut self, u: &[f64]) -> Result<Vec<f64>, UqError> {
        let x = self.parameters.transform(u)?;
        let sample = self.parameters.to_sample(&x)?;

        let output = match self.model.call(&sample) {
            Ok(output) => output,
            Err(source) => {
                return Err(UqError::Model {
                    sample,
                    source: Box::new(source),
                });
            }
        };

        let expected = self.time.as_ref().map_or(output.time.len(), Vec::len);
        for found in [output.time.len(), output.values.len()] {
            if found != expected {
                return Err(UqError::InconsistentOutput { expected, found });
            }
        }
        if !output.values.iter().all(|v| v.is_finite()) {
            return Err(UqError::NonFiniteOutput { sample });
        }

        if self.time.is_none() {
            self.time = Some(output.time);
        }
        self.samples.push(x);
        Ok(output.values)
    }

    /// Evaluates every point, returning outputs in the same order.
    pub(super) fn evaluate_all(&mut self, points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, UqError> {
        points.iter().map(|u| self.evaluate(u)).collect()
    }

    /// Number of evaluations so far.
    pub(super) fn count(&self) -> usize {
        self.samples.len()
    }

    /// Returns the time axis and the recorded physical samples.
    pub(super) fn finish(self) -> (Vec<f64>, Vec<Vec<f64>>) {
        (self.time.unwrap_or_default(), self.samples)
    }
}
