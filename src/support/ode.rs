//! Adaptive integration of initial value problems.
//!
//! [`integrate`] solves `y' = f(t, y)` for a fixed-size state `[f64; N]` and
//! reports the solution at caller-chosen output times. Steps are controlled by
//! an embedded Dormand–Prince 5(4) error estimate, and the solver lands exactly
//! on every output time rather than interpolating between steps. Stiff
//! problems fall back to a Rosenbrock 2(3) method.
//!
//! The right-hand side is any `Fn(f64, &[f64; N]) -> [f64; N]`, so model
//! parameters are captured by a closure instead of being threaded through the
//! solver:
//!
//! ```
//! use twine_uq::support::ode::{OdeConfig, integrate};
//!
//! let rate = 0.05;
//! let times = [0.0, 10.0, 20.0];
//! let ys = integrate(|_t, y: &[f64; 1]| [-rate * y[0]], [1.0], &times, &OdeConfig::default())
//!     .unwrap();
//!
//! assert!((ys[2][0] - (-1.0_f64).exp()).abs() < 1e-7);
//! ```

mod config;
mod dormand_prince;
mod error;
mod rosenbrock;

pub use config::OdeConfig;
pub use error::OdeError;

/// Step growth never exceeds this factor.
const MAX_FACTOR: f64 = 5.0;

/// Step shrinkage never exceeds this factor.
const MIN_FACTOR: f64 = 0.2;

const SAFETY: f64 = 0.9;

/// Integrates `y' = rhs(t, y)` from `times[0]` and returns the state at every output time.
///
/// The first returned state is `y0` itself.
///
/// Integration starts with the explicit Dormand–Prince pair. If an output
/// interval exhausts `config.max_steps` explicit steps, the problem is treated
/// as stiff and the rest of the run uses the linearly implicit Rosenbrock
/// method, with a fresh step budget for the interval.
///
/// # Errors
///
/// Returns an [`OdeError`] if `times` is empty or not strictly increasing, if the
/// state becomes non-finite, if the step size underflows, or if the stiff
/// method also needs more than `config.max_steps` steps between two output times.
pub fn integrate<F, const N: usize>(
    rhs: F,
    y0: [f64; N],
    times: &[f64],
    config: &OdeConfig,
) -> Result<Vec<[f64; N]>, OdeError>
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    check_times(times)?;

    let rtol = config.rtol.get();
    let atol = config.atol.get();

    let mut t = times[0];
    let mut y = y0;
    let mut slope = rhs(t, &y);
    if !all_finite(&y) || !all_finite(&slope) {
        return Err(OdeError::NonFiniteState { t });
    }

    let span = times[times.len() - 1] - t;
    let mut h = match config.initial_step {
        Some(step) => step.get(),
        None => initial_step(&y, &slope, rtol, atol, span),
    };

    let mut method = Method::Explicit;
    let mut states = Vec::with_capacity(times.len());
    states.push(y);

    for &t_out in &times[1..] {
        let mut attempts = 0;

        while t < t_out {
            if attempts == config.max_steps {
                if method == Method::Stiff {
                    return Err(OdeError::MaxStepsExceeded {
                        t,
                        max_steps: config.max_steps,
                    });
                }
                tracing::debug!(t, h, "explicit step budget exhausted, switching to Rosenbrock");
                method = Method::Stiff;
                attempts = 0;
            }
            attempts += 1;

            let remaining = t_out - t;
            let lands = h >= remaining;
            let h_try = if lands { remaining } else { h };

            let trial = match method {
                Method::Explicit => Some(dormand_prince::step(&rhs, t, &y, &slope, h_try)),
                Method::Stiff => rosenbrock::step(&rhs, t, &y, &slope, h_try),
            };
            let accepted = trial.and_then(|trial| {
                let err = error_norm(&y, &trial.y, &trial.error, rtol, atol);
                (err.is_finite() && all_finite(&trial.slope)).then_some((trial, err))
            });

            let Some((trial, err)) = accepted else {
                if h_try <= min_step(t) {
                    return Err(OdeError::NonFiniteState { t });
                }
                h = h_try * MIN_FACTOR;
                continue;
            };

            if err <= 1.0 {
                t = if lands { t_out } else { t + h_try };
                y = trial.y;
                slope = trial.slope;

                let grown = h_try * method.step_factor(err, MAX_FACTOR);
                h = if lands { h.max(grown) } else { grown };
            } else {
                tracing::trace!(t, h = h_try, err, "rejected step");
                h = h_try * method.step_factor(err, 1.0);
                if h <= min_step(t) {
                    return Err(OdeError::StepSizeUnderflow { t });
                }
            }
        }

        states.push(y);
    }

    Ok(states)
}

/// Result of one trial step.
struct Step<const N: usize> {
    /// Solution at `t + h`.
    y: [f64; N],

    /// Derivative at `(t + h, y)`.
    slope: [f64; N],

    /// Local error estimate.
    error: [f64; N],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Explicit,
    Stiff,
}

impl Method {
    /// Step size multiplier for a given error norm, capped at `max_factor`.
    fn step_factor(self, err: f64, max_factor: f64) -> f64 {
        if err == 0.0 {
            return max_factor;
        }
        // Local error scales as h^5 for Dormand–Prince and h^3 for Rosenbrock.
        let exponent = match self {
            Self::Explicit => -0.2,
            Self::Stiff => -1.0 / 3.0,
        };
        (SAFETY * err.powf(exponent)).clamp(MIN_FACTOR, max_factor)
    }
}

fn check_times(times: &[f64]) -> Result<(), OdeError> {
    if times.is_empty() || !times.iter().all(|t| t.is_finite()) {
        return Err(OdeError::InvalidTimes);
    }
    if times.windows(2).any(|w| w[1] <= w[0]) {
        return Err(OdeError::InvalidTimes);
    }
    Ok(())
}

fn all_finite<const N: usize>(values: &[f64; N]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Scaled RMS norm of the local error estimate.
fn error_norm<const N: usize>(
    y: &[f64; N],
    y_new: &[f64; N],
    error: &[f64; N],
    rtol: f64,
    atol: f64,
) -> f64 {
    if N == 0 {
        return 0.0;
    }
    let sum: f64 = (0..N)
        .map(|i| {
            let scale = atol + rtol * y[i].abs().max(y_new[i].abs());
            (error[i] / scale).powi(2)
        })
        .sum();
    (sum / N as f64).sqrt()
}

fn min_step(t: f64) -> f64 {
    16.0 * f64::EPSILON * t.abs().max(1.0)
}

/// Estimates a first trial step from the scaled state and slope magnitudes.
fn initial_step<const N: usize>(
    y: &[f64; N],
    slope: &[f64; N],
    rtol: f64,
    atol: f64,
    span: f64,
) -> f64 {
    let scaled = |v: &[f64; N]| -> f64 {
        if N == 0 {
            return 0.0;
        }
        let sum: f64 = (0..N)
            .map(|i| (v[i] / (atol + rtol * y[i].abs())).powi(2))
            .sum();
        (sum / N as f64).sqrt()
    };

    let d0 = scaled(y);
    let d1 = scaled(slope);
    let h = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    };

    if span > 0.0 { h.min(span) } else { h }
}
