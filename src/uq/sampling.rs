//! Point sets in the unit hypercube.

use rand::Rng;

/// `n` Hammersley points in `dim` dimensions.
///
/// The first coordinate is the midpoint sequence `(i + 0.5) / n`; the others
/// are radical inverses of `i + 1` in successive prime bases, which keeps
/// every coordinate strictly inside `(0, 1)`.
pub(super) fn hammersley(n: usize, dim: usize) -> Vec<Vec<f64>> {
    let bases = primes(dim.saturating_sub(1));
    (0..n)
        .map(|i| {
            let mut point = Vec::with_capacity(dim);
            if dim > 0 {
                point.push((i as f64 + 0.5) / n as f64);
            }
            point.extend(bases.iter().map(|&b| radical_inverse(i + 1, b)));
            point
        })
        .collect()
}

/// `n` independent uniform points in `dim` dimensions.
pub(super) fn random<R: Rng + ?Sized>(n: usize, dim: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..dim).map(|_| rng.r#gen::<f64>()).collect())
        .collect()
}

/// Van der Corput radical inverse of `i` in `base`.
fn radical_inverse(mut i: usize, base: usize) -> f64 {
    let inv_base = 1.0 / base as f64;
    let mut scale = inv_base;
    let mut value = 0.0;
    while i > 0 {
        value += (i % base) as f64 * scale;
        i /= base;
        scale *= inv_base;
    }
    value
}

/// The first `count` primes.
fn primes(count: usize) -> Vec<usize> {
    let mut found: Vec<usize> = Vec::with_capacity(count);
    let mut candidate = 2;
    while found.len() < count {
        if found.iter().take_while(|&&p| p * p <= candidate).all(|&p| candidate % p != 0) {
            found.push(candidate);
        }
        candidate += 1;
    }
    found
}
