//! Linearly implicit Rosenbrock 2(3) pair of Shampine and Reichelt (1997).
//!
//! Each step solves three linear systems with the same matrix
//! `W = I - h·d·J`, where `J` is a finite-difference Jacobian of the
//! right-hand side. The method is L-stable, so step sizes are limited by
//! accuracy rather than by the fastest decay rate.

use std::{array, f64::consts::SQRT_2};

use nalgebra::{DMatrix, DVector};

use super::Step;

const D: f64 = 1.0 / (2.0 + SQRT_2);
const E32: f64 = 6.0 + SQRT_2;

/// Takes one step of size `h` from `(t, y)`, where `f0 = rhs(t, y)`.
///
/// Returns `None` if the iteration matrix is singular.
pub(super) fn step<F, const N: usize>(
    rhs: &F,
    t: f64,
    y: &[f64; N],
    f0: &[f64; N],
    h: f64,
) -> Option<Step<N>>
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    let (jacobian, dfdt) = linearize(rhs, t, y, f0);
    let lu = (DMatrix::identity(N, N) - jacobian * (h * D)).lu();
    let solve = |b: [f64; N]| -> Option<[f64; N]> {
        let x = lu.solve(&DVector::from_column_slice(&b))?;
        let mut out = [0.0; N];
        out.copy_from_slice(x.as_slice());
        Some(out)
    };

    let k1 = solve(array::from_fn(|i| f0[i] + h * D * dfdt[i]))?;

    let f1 = rhs(t + 0.5 * h, &array::from_fn(|i| y[i] + 0.5 * h * k1[i]));
    let s = solve(array::from_fn(|i| f1[i] - k1[i]))?;
    let k2: [f64; N] = array::from_fn(|i| s[i] + k1[i]);

    let y_new: [f64; N] = array::from_fn(|i| y[i] + h * k2[i]);
    let f2 = rhs(t + h, &y_new);

    let k3 = solve(array::from_fn(|i| {
        f2[i] - E32 * (k2[i] - f1[i]) - 2.0 * (k1[i] - f0[i]) + h * D * dfdt[i]
    }))?;

    Some(Step {
        y: y_new,
        slope: f2,
        error: array::from_fn(|i| h / 6.0 * (k1[i] - 2.0 * k2[i] + k3[i])),
    })
}

/// Forward-difference Jacobian `∂f/∂y` and time derivative `∂f/∂t`.
fn linearize<F, const N: usize>(
    rhs: &F,
    t: f64,
    y: &[f64; N],
    f0: &[f64; N],
) -> (DMatrix<f64>, [f64; N])
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    let sqrt_eps = f64::EPSILON.sqrt();

    let mut jacobian = DMatrix::zeros(N, N);
    for j in 0..N {
        let delta = sqrt_eps * y[j].abs().max(1.0);
        let mut shifted = *y;
        shifted[j] += delta;
        let f = rhs(t, &shifted);
        for i in 0..N {
            jacobian[(i, j)] = (f[i] - f0[i]) / delta;
        }
    }

    let dt = sqrt_eps * t.abs().max(1.0);
    let f = rhs(t + dt, y);
    let dfdt = array::from_fn(|i| (f[i] - f0[i]) / dt);

    (jacobian, dfdt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn third_order_local_error() {
        let rhs = |_t: f64, y: &[f64; 1]| [y[0]];
        let h = 0.01;
        let trial = step(&rhs, 0.0, &[1.0], &[1.0], h).unwrap();

        let local_error = trial.y[0] - h.exp();
        assert!(local_error.abs() < 1e-7);
        assert_relative_eq!(trial.error[0], -local_error, max_relative = 0.05);
        assert_relative_eq!(trial.slope[0], trial.y[0]);
    }

    #[test]
    fn stiff_decay_is_damped_with_a_large_step() {
        let rhs = |_t: f64, y: &[f64; 1]| [-1e6 * (y[0] - 1.0)];
        let y = [1.001];
        let trial = step(&rhs, 0.0, &y, &rhs(0.0, &y), 1.0).unwrap();
        assert!((trial.y[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn jacobian_of_linear_system() {
        let rhs = |t: f64, y: &[f64; 2]| [2.0 * y[0] - y[1], 3.0 * y[1] + t];
        let y = [1.0, 2.0];
        let (jacobian, dfdt) = linearize(&rhs, 0.5, &y, &rhs(0.5, &y));

        assert_relative_eq!(jacobian[(0, 0)], 2.0, epsilon = 1e-6);
        assert_relative_eq!(jacobian[(0, 1)], -1.0, epsilon = 1e-6);
        assert_relative_eq!(jacobian[(1, 0)], 0.0, epsilon = 1e-6);
        assert_relative_eq!(jacobian[(1, 1)], 3.0, epsilon = 1e-6);
        assert_relative_eq!(dfdt[1], 1.0, epsilon = 1e-6);
    }
}
