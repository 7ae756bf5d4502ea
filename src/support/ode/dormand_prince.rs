//! Dormand–Prince 5(4) embedded Runge–Kutta pair.
//!
//! Coefficients from Hairer, Nørsett & Wanner, *Solving Ordinary Differential
//! Equations I*, Table 5.2. The last stage is evaluated at the new state, so
//! it doubles as the first stage of the next step (FSAL).

use super::Step;

const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order weights (also the seventh stage row).
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Fifth-order minus fourth-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339_200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

/// Advances `y` from `t` by `h`, given the slope `k1` at `(t, y)`.
pub(super) fn step<F, const N: usize>(
    rhs: &F,
    t: f64,
    y: &[f64; N],
    k1: &[f64; N],
    h: f64,
) -> Step<N>
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    let stage = |weights: &[(f64, &[f64; N])]| -> [f64; N] {
        let mut out = *y;
        for (w, k) in weights {
            for (o, ki) in out.iter_mut().zip(k.iter()) {
                *o += h * w * ki;
            }
        }
        out
    };

    let k2 = rhs(t + C2 * h, &stage(&[(A21, k1)]));
    let k3 = rhs(t + C3 * h, &stage(&[(A31, k1), (A32, &k2)]));
    let k4 = rhs(t + C4 * h, &stage(&[(A41, k1), (A42, &k2), (A43, &k3)]));
    let k5 = rhs(
        t + C5 * h,
        &stage(&[(A51, k1), (A52, &k2), (A53, &k3), (A54, &k4)]),
    );
    let k6 = rhs(
        t + h,
        &stage(&[(A61, k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)]),
    );
    let y_new = stage(&[(B1, k1), (B3, &k3), (B4, &k4), (B5, &k5), (B6, &k6)]);
    let k7 = rhs(t + h, &y_new);

    let mut error = [0.0; N];
    for (i, e) in error.iter_mut().enumerate() {
        *e = h
            * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k7[i]);
    }

    Step {
        y: y_new,
        slope: k7,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn weights_are_consistent() {
        assert_relative_eq!(B1 + B3 + B4 + B5 + B6, 1.0, epsilon = 1e-15);
        assert_relative_eq!(E1 + E3 + E4 + E5 + E6 + E7, 0.0, epsilon = 1e-15);
        assert_relative_eq!(A61 + A62 + A63 + A64 + A65, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn exact_for_quartic_polynomials() {
        // y' = 4t³ has the exact solution y = t⁴; a fifth-order step is exact.
        let rhs = |t: f64, _y: &[f64; 1]| [4.0 * t.powi(3)];
        let k1 = rhs(0.5, &[0.0625]);
        let result = step(&rhs, 0.5, &[0.0625], &k1, 0.5);

        assert_relative_eq!(result.y[0], 1.0, epsilon = 1e-14);
        assert_relative_eq!(result.slope[0], 4.0, epsilon = 1e-14);
    }
}
