//! Chern numbers and holomorphic Euler characteristics.

use std::collections::BTreeMap;

use num_traits::{One, Zero};

use super::{Variety, VectorBundle};
use crate::algebra::symmetric::{elementary_monomial, partitions};
use crate::algebra::{Polynomial, Rational};
use crate::error::{Error, Result};

/// `∫_X c_{d_1} ⋯ c_{d_k}`.
///
/// # Errors
///
/// - [`Error::InvalidDegrees`] for an empty list or a zero degree;
/// - [`Error::DegreeMismatch`] when the degrees do not sum to `dim X`;
/// - integration errors of the variety.
pub fn chern_number<V: Variety + ?Sized>(variety: &V, degrees: &[usize]) -> Result<Rational> {
    if degrees.is_empty() || degrees.contains(&0) {
        return Err(Error::InvalidDegrees(degrees.to_vec()));
    }
    let sum: usize = degrees.iter().sum();
    let dimension = variety.dimension();
    if sum != dimension {
        return Err(Error::DegreeMismatch { sum, dimension });
    }
    let classes = variety.chern_classes();
    let integrand = degrees.iter().fold(Polynomial::one(), |acc, &d| {
        &acc * classes.get(d).unwrap_or(&Polynomial::zero())
    });
    variety.integration(&integrand)
}

/// `χ(X, E) = ∫_X ch(E) td(X)` by Hirzebruch–Riemann–Roch.
///
/// # Errors
///
/// Returns [`Error::BaseMismatch`] when the bundle's base has another
/// dimension than the variety, and integration errors otherwise.
pub fn euler_characteristic<V, E>(variety: &V, bundle: &E) -> Result<Rational>
where
    V: Variety + ?Sized,
    E: VectorBundle + ?Sized,
{
    let n = variety.dimension();
    let base = bundle.base();
    if base.dimension != n {
        return Err(Error::BaseMismatch {
            left: variety.base().description,
            right: base.description,
        });
    }
    let character = bundle.chern_character();
    let todd = variety.todd_classes();
    let integrand = (0..=n).fold(Polynomial::zero(), |acc, i| match (character.get(i), todd.get(n - i)) {
        (Some(ch), Some(td)) => acc + ch * td,
        _ => acc,
    });
    variety.integration(&integrand)
}

/// Every Chern number of a variety, indexed by partitions of its dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct ChernNumbers {
    dimension: usize,
    values: BTreeMap<Vec<usize>, Rational>,
}

impl ChernNumbers {
    /// Integrates `c_λ` for every partition `λ` of `dim X`.
    ///
    /// A point has the single number `∫ 1`, keyed by the empty partition.
    ///
    /// # Errors
    ///
    /// Propagates integration errors.
    pub fn compute<V: Variety + ?Sized>(variety: &V) -> Result<Self> {
        let dimension = variety.dimension();
        let mut values = BTreeMap::new();
        for lambda in partitions(dimension) {
            let value = if lambda.is_empty() {
                variety.integration(&Polynomial::one())?
            } else {
                chern_number(variety, &lambda)?
            };
            values.insert(lambda, value);
        }
        Ok(Self { dimension, values })
    }

    /// Chern numbers given directly; partitions are normalized to
    /// decreasing order and missing ones count as zero.
    #[must_use]
    pub fn from_values(dimension: usize, values: impl IntoIterator<Item = (Vec<usize>, Rational)>) -> Self {
        let values = values
            .into_iter()
            .map(|(mut lambda, v)| {
                lambda.sort_unstable_by(|a, b| b.cmp(a));
                (lambda, v)
            })
            .collect();
        Self { dimension, values }
    }

    /// Complex dimension of the variety.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// `∫ c_λ`; zero for partitions never recorded.
    #[must_use]
    pub fn get(&self, lambda: &[usize]) -> Rational {
        let mut key = lambda.to_vec();
        key.sort_unstable_by(|a, b| b.cmp(a));
        self.values.get(&key).cloned().unwrap_or_else(Rational::zero)
    }

    /// Recorded numbers in partition order.
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], &Rational)> {
        self.values.iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// Integrates a polynomial in Chern classes (`c_i` is `x_{i-1}`).
    /// Monomials of weighted degree other than the dimension integrate to zero.
    #[must_use]
    pub fn evaluate(&self, class: &Polynomial) -> Rational {
        class.apply_linear(|exponents| {
            let lambda: Vec<usize> = exponents
                .iter()
                .enumerate()
                .rev()
                .flat_map(|(i, &e)| std::iter::repeat(i + 1).take(e as usize))
                .collect();
            if lambda.iter().sum::<usize>() == self.dimension {
                self.get(&lambda)
            } else {
                Rational::zero()
            }
        })
    }

    /// True when every Chern number containing `c_1` vanishes, which is how a
    /// Calabi–Yau condition is visible to Chern numbers.
    #[must_use]
    pub fn first_chern_class_vanishes(&self) -> bool {
        self.values
            .iter()
            .filter(|(lambda, _)| lambda.contains(&1))
            .all(|(_, v)| v.is_zero())
    }

    /// The topological Euler characteristic `∫ c_n`.
    #[must_use]
    pub fn euler_number(&self) -> Rational {
        if self.dimension == 0 {
            return self.get(&[]);
        }
        self.get(&[self.dimension])
    }

    /// Evaluates the product `c_{ν_1} ⋯ c_{ν_k}`.
    #[must_use]
    pub fn elementary(&self, nu: &[usize]) -> Rational {
        self.evaluate(&elementary_monomial(nu))
    }
}
