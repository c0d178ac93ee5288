//! Root systems in their standard ambient Euclidean coordinates.
//!
//! Conventions follow Bourbaki: for `A_n` the ambient space is `R^{n+1}`
//! with `α_i = e_i - e_{i+1}`; for `B_n`, `C_n`, `D_n` it is `R^n` and the
//! last simple roots are `e_n`, `2e_n`, `e_{n-1} + e_n` respectively; `G2`
//! lives in the plane `x + y + z = 0` of `R^3`.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::Zero;

use super::cartan::{CartanType, Family};
use crate::algebra::{fraction, integer, to_i64, Rational};
use crate::error::{Error, Result};

/// A positive root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    /// Ambient coordinates.
    pub coordinates: Vec<Rational>,
    /// Coefficients in the basis of simple roots.
    pub expansion: Vec<i64>,
}

impl Root {
    /// Sum of the simple-root coefficients.
    #[must_use]
    pub fn height(&self) -> i64 {
        self.expansion.iter().sum()
    }
}

/// The root datum of a simple Lie algebra of classical type or `G2`.
#[derive(Clone, Debug)]
pub struct RootSystem {
    cartan_type: CartanType,
    ambient_dimension: usize,
    simple_roots: Vec<Vec<Rational>>,
    fundamental_weights: Vec<Vec<Rational>>,
    cartan_matrix: Vec<Vec<i64>>,
    positive_roots: Vec<Root>,
}

/// Standard inner product.
#[must_use]
pub fn dot(a: &[Rational], b: &[Rational]) -> Rational {
    a.iter()
        .zip(b)
        .fold(Rational::zero(), |acc, (x, y)| acc + x * y)
}

fn ambient_vector(dim: usize, entries: &[(usize, Rational)]) -> Vec<Rational> {
    let mut v = vec![Rational::zero(); dim];
    for (i, c) in entries {
        v[*i] += c;
    }
    v
}

fn difference(dim: usize, i: usize, j: usize) -> Vec<Rational> {
    ambient_vector(dim, &[(i, integer(1)), (j, integer(-1))])
}

fn prefix_sum(dim: usize, len: usize, coeff: &Rational) -> Vec<Rational> {
    let mut v = vec![Rational::zero(); dim];
    for x in v.iter_mut().take(len) {
        *x = coeff.clone();
    }
    v
}

impl RootSystem {
    /// Builds the root system of `cartan_type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCartanType`] for the exceptional types
    /// other than `G2`.
    pub fn new(cartan_type: CartanType) -> Result<Self> {
        let n = cartan_type.rank();
        let one = integer(1);
        let half = fraction(1, 2);
        let (ambient_dimension, simple_roots, fundamental_weights) = match cartan_type.family() {
            Family::A => {
                let dim = n + 1;
                let simple = (0..n).map(|i| difference(dim, i, i + 1)).collect();
                let weights = (0..n).map(|i| prefix_sum(dim, i + 1, &one)).collect();
                (dim, simple, weights)
            }
            Family::B => {
                let mut simple: Vec<Vec<Rational>> =
                    (0..n - 1).map(|i| difference(n, i, i + 1)).collect();
                simple.push(ambient_vector(n, &[(n - 1, one.clone())]));
                let mut weights: Vec<Vec<Rational>> =
                    (0..n - 1).map(|i| prefix_sum(n, i + 1, &one)).collect();
                weights.push(prefix_sum(n, n, &half));
                (n, simple, weights)
            }
            Family::C => {
                let mut simple: Vec<Vec<Rational>> =
                    (0..n - 1).map(|i| difference(n, i, i + 1)).collect();
                simple.push(ambient_vector(n, &[(n - 1, integer(2))]));
                let weights = (0..n).map(|i| prefix_sum(n, i + 1, &one)).collect();
                (n, simple, weights)
            }
            Family::D => {
                let mut simple: Vec<Vec<Rational>> =
                    (0..n - 1).map(|i| difference(n, i, i + 1)).collect();
                simple.push(ambient_vector(n, &[(n - 2, one.clone()), (n - 1, one.clone())]));
                let mut weights: Vec<Vec<Rational>> =
                    (0..n - 2).map(|i| prefix_sum(n, i + 1, &one)).collect();
                let mut spin_minus = prefix_sum(n, n, &half);
                spin_minus[n - 1] = -half.clone();
                weights.push(spin_minus);
                weights.push(prefix_sum(n, n, &half));
                (n, simple, weights)
            }
            Family::G => {
                let v = |a: i64, b: i64, c: i64| vec![integer(a), integer(b), integer(c)];
                (3, vec![v(0, 1, -1), v(1, -2, 1)], vec![v(1, 0, -1), v(2, -1, -1)])
            }
            Family::E | Family::F => {
                return Err(Error::UnsupportedCartanType(cartan_type.to_string()))
            }
        };

        let cartan_matrix = cartan_matrix(&simple_roots)?;
        let positive_roots = positive_roots(&simple_roots, &cartan_matrix);
        Ok(Self {
            cartan_type,
            ambient_dimension,
            simple_roots,
            fundamental_weights,
            cartan_matrix,
            positive_roots,
        })
    }

    /// The Cartan type.
    #[must_use]
    pub fn cartan_type(&self) -> CartanType {
        self.cartan_type
    }

    /// Number of simple roots.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.simple_roots.len()
    }

    /// Dimension of the ambient space holding roots and weights.
    #[must_use]
    pub fn ambient_dimension(&self) -> usize {
        self.ambient_dimension
    }

    /// Simple roots, 0-indexed.
    #[must_use]
    pub fn simple_roots(&self) -> &[Vec<Rational>] {
        &self.simple_roots
    }

    /// Fundamental weights, 0-indexed.
    #[must_use]
    pub fn fundamental_weights(&self) -> &[Vec<Rational>] {
        &self.fundamental_weights
    }

    /// `a[i][j] = ⟨α_i, α_j^∨⟩`.
    #[must_use]
    pub fn cartan_matrix(&self) -> &[Vec<i64>] {
        &self.cartan_matrix
    }

    /// Positive roots ordered by height.
    #[must_use]
    pub fn positive_roots(&self) -> &[Root] {
        &self.positive_roots
    }

    /// Order of the Weyl group.
    #[must_use]
    pub fn weyl_group_order(&self) -> BigInt {
        self.cartan_type.weyl_group_order()
    }

    /// Half the sum of the positive roots.
    #[must_use]
    pub fn rho(&self) -> Vec<Rational> {
        let half = fraction(1, 2);
        let mut rho = vec![Rational::zero(); self.ambient_dimension];
        for root in &self.positive_roots {
            for (r, c) in rho.iter_mut().zip(&root.coordinates) {
                *r += c * &half;
            }
        }
        rho
    }

    /// `Σ coefficients[i] ω_i` in ambient coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if the number of coefficients is not the rank.
    pub fn weight(&self, coefficients: &[i64]) -> Result<Vec<Rational>> {
        if coefficients.len() != self.rank() {
            return Err(Error::InvalidWeight {
                weight: coefficients.to_vec(),
                reason: format!("expected {} coordinates", self.rank()),
            });
        }
        let mut out = vec![Rational::zero(); self.ambient_dimension];
        for (a, omega) in coefficients.iter().zip(&self.fundamental_weights) {
            let a = integer(*a);
            for (o, w) in out.iter_mut().zip(omega) {
                *o += &a * w;
            }
        }
        Ok(out)
    }

    /// `⟨v, α_i^∨⟩ = 2(v, α_i) / (α_i, α_i)`.
    #[must_use]
    pub fn pairing(&self, v: &[Rational], i: usize) -> Rational {
        let alpha = &self.simple_roots[i];
        dot(v, alpha) * integer(2) / dot(alpha, alpha)
    }

    /// The simple reflection `s_i v = v - ⟨v, α_i^∨⟩ α_i`.
    #[must_use]
    pub fn reflect(&self, i: usize, v: &[Rational]) -> Vec<Rational> {
        let c = self.pairing(v, i);
        v.iter()
            .zip(&self.simple_roots[i])
            .map(|(x, a)| x - &c * a)
            .collect()
    }
}

fn cartan_matrix(simple_roots: &[Vec<Rational>]) -> Result<Vec<Vec<i64>>> {
    simple_roots
        .iter()
        .map(|a| {
            simple_roots
                .iter()
                .map(|b| to_i64(&(dot(a, b) * integer(2) / dot(b, b))))
                .collect()
        })
        .collect()
}

/// Positive roots by root strings: `β + α_i` is a root exactly when
/// `p - ⟨β, α_i^∨⟩ > 0`, with `p` the largest `k` such that `β - kα_i` is a root.
fn positive_roots(simple_roots: &[Vec<Rational>], cartan: &[Vec<i64>]) -> Vec<Root> {
    let rank = simple_roots.len();
    let unit = |i: usize| -> Vec<i64> { (0..rank).map(|j| i64::from(i == j)).collect() };
    let mut found: Vec<Vec<i64>> = (0..rank).map(unit).collect();
    let mut known: HashSet<Vec<i64>> = found.iter().cloned().collect();
    let mut level: Vec<Vec<i64>> = found.clone();
    while !level.is_empty() {
        let mut next = Vec::new();
        for beta in &level {
            for i in 0..rank {
                let mut p = 0;
                loop {
                    let mut lower = beta.clone();
                    lower[i] -= p + 1;
                    if known.contains(&lower) {
                        p += 1;
                    } else {
                        break;
                    }
                }
                let pairing: i64 = (0..rank).map(|j| beta[j] * cartan[j][i]).sum();
                if p - pairing > 0 {
                    let mut raised = beta.clone();
                    raised[i] += 1;
                    if known.insert(raised.clone()) {
                        next.push(raised);
                    }
                }
            }
        }
        found.extend(next.iter().cloned());
        level = next;
    }

    found
        .into_iter()
        .map(|expansion| {
            let mut coordinates = vec![Rational::zero(); simple_roots[0].len()];
            for (k, alpha) in expansion.iter().zip(simple_roots) {
                let k = integer(*k);
                for (c, a) in coordinates.iter_mut().zip(alpha) {
                    *c += &k * a;
                }
            }
            Root {
                coordinates,
                expansion,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(s: &str) -> RootSystem {
        RootSystem::new(s.parse().expect("valid type")).expect("supported type")
    }

    #[test]
    fn positive_root_counts() {
        let counts: Vec<usize> = ["A1", "A3", "B2", "B3", "C3", "D4", "G2"]
            .iter()
            .map(|s| system(s).positive_roots().len())
            .collect();
        assert_eq!(counts, vec![1, 6, 4, 9, 9, 12, 6]);
    }

    #[test]
    fn fundamental_weights_are_dual_to_coroots() {
        for name in ["A4", "B3", "C3", "D4", "D5", "G2"] {
            let rs = system(name);
            for (i, omega) in rs.fundamental_weights().iter().enumerate() {
                for j in 0..rs.rank() {
                    let expected = integer(i64::from(i == j));
                    assert_eq!(rs.pairing(omega, j), expected, "{name}: <w{i}, a{j}>");
                }
            }
        }
    }

    #[test]
    fn cartan_matrix_of_b2() {
        let rs = system("B2");
        assert_eq!(rs.cartan_matrix(), &[vec![2, -2], vec![-1, 2]]);
    }

    #[test]
    fn g2_highest_root() {
        let rs = system("G2");
        let highest = rs.positive_roots().last().expect("nonempty");
        assert_eq!(highest.expansion, vec![3, 2]);
        assert_eq!(highest.height(), 5);
    }

    #[test]
    fn reflection_is_involution() {
        let rs = system("C3");
        let v = rs.rho();
        for i in 0..3 {
            assert_eq!(rs.reflect(i, &rs.reflect(i, &v)), v);
        }
    }

    #[test]
    fn exceptional_types_are_rejected() {
        let e6 = "E6".parse().expect("valid type");
        assert!(matches!(
            RootSystem::new(e6),
            Err(Error::UnsupportedCartanType(_))
        ));
    }
}
