//! Orthonormal polynomial basis on the unit hypercube.
//!
//! One-dimensional factors are shifted Legendre polynomials scaled to unit
//! norm under the uniform measure on `[0, 1]`:
//!
//! ```text
//! φ_n(u) = sqrt(2n + 1) · P_n(2u - 1),    ∫₀¹ φ_m φ_n du = δ_mn
//! ```
//!
//! Multivariate terms are tensor products indexed by a multi-index, so the
//! whole basis is orthonormal in the Rosenblatt space where the inputs are
//! independent uniforms.

/// A total-degree polynomial basis in `dim` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basis {
    dim: usize,
    order: usize,
    indices: Vec<Vec<usize>>,
}

impl Basis {
    /// Builds all multi-indices with total degree at most `order`.
    ///
    /// Terms are sorted by total degree, then in reverse lexicographic order
    /// within a degree, so the constant term is first and the linear terms
    /// follow in variable order.
    pub fn total_degree(dim: usize, order: usize) -> Self {
        let mut indices = Vec::with_capacity(term_count(dim, order));
        for degree in 0..=order {
            let mut current = vec![0; dim];
            push_compositions(degree, 0, &mut current, &mut indices);
        }
        Self {
            dim,
            order,
            indices,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Multi-indices in basis order.
    pub fn indices(&self) -> &[Vec<usize>] {
        &self.indices
    }

    /// Evaluates every basis term at `u`.
    pub fn evaluate(&self, u: &[f64]) -> Vec<f64> {
        let tables: Vec<Vec<f64>> = u.iter().map(|&ui| legendre(self.order, ui)).collect();
        self.indices
            .iter()
            .map(|alpha| {
                alpha
                    .iter()
                    .zip(&tables)
                    .map(|(&a, table)| table[a])
                    .product()
            })
            .collect()
    }
}

/// Number of multi-indices of total degree at most `order` in `dim` variables.
///
/// Equals the binomial coefficient `C(dim + order, dim)`.
pub fn term_count(dim: usize, order: usize) -> usize {
    // Multiplicative form stays exact: every partial product is a binomial.
    (1..=dim).fold(1, |acc, k| acc * (order + k) / k)
}

/// Orthonormal shifted Legendre values `φ_0(u) ..= φ_order(u)`.
fn legendre(order: usize, u: f64) -> Vec<f64> {
    let x = 2.0 * u - 1.0;
    let mut p = Vec::with_capacity(order + 1);
    p.push(1.0);
    if order >= 1 {
        p.push(x);
    }
    for n in 1..order {
        let n_f = n as f64;
        let next = ((2.0 * n_f + 1.0) * x * p[n] - n_f * p[n - 1]) / (n_f + 1.0);
        p.push(next);
    }
    p.iter()
        .enumerate()
        .map(|(n, value)| value * ((2 * n + 1) as f64).sqrt())
        .collect()
}

/// Appends every way to split `remaining` over `current[position..]`.
fn push_compositions(
    remaining: usize,
    position: usize,
    current: &mut [usize],
    out: &mut Vec<Vec<usize>>,
) {
    if position + 1 >= current.len() {
        if let Some(last) = current.len().checked_sub(1) {
            current[last] = remaining;
            out.push(current.to_vec());
            current[last] = 0;
        } else if remaining == 0 {
            out.push(Vec::new());
        }
        return;
    }
    for value in (0..=remaining).rev() {
        current[position] = value;
        push_compositions(remaining - value, position + 1, current, out);
    }
    current[position] = 0;
}
