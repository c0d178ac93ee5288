//! Partitions and the change of basis from monomial to elementary symmetric
//! functions.
//!
//! Chern classes are the elementary symmetric functions of the Chern roots,
//! so a symmetric expression written in monomial symmetric functions `m_λ`
//! becomes a polynomial in Chern classes through [`SymmetricTransition`].
//!
//! # Examples
//!
//! ```
//! use elliptic_genus::algebra::symmetric::SymmetricTransition;
//!
//! // m_{21} = e_2 e_1 - 3 e_3, i.e. c1*c2 - 3*c3
//! let t = SymmetricTransition::new(3)?;
//! let m21 = t.chern_polynomial(&[2, 1]).expect("partition of 3");
//! assert_eq!(m21.format_with(|i| format!("c{}", i + 1)), "c1*c2 - 3*c3");
//! # Ok::<(), elliptic_genus::Error>(())
//! ```

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::linalg;
use super::polynomial::Polynomial;
use super::rational::Rational;
use super::Coefficient;
use crate::error::Result;

/// Partitions of `n` in decreasing lexicographic order, parts decreasing.
///
/// `partitions(0)` is the single empty partition.
#[must_use]
pub fn partitions(n: usize) -> Vec<Vec<usize>> {
    fn fill(remaining: usize, max_part: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        for part in (1..=remaining.min(max_part)).rev() {
            current.push(part);
            fill(remaining - part, part, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    fill(n, n, &mut Vec::new(), &mut out);
    out
}

/// The product `c_{ν_1} c_{ν_2} …`, with `c_i` the variable `x_{i-1}`.
#[must_use]
pub fn elementary_monomial(nu: &[usize]) -> Polynomial {
    let len = nu.iter().copied().max().unwrap_or(0);
    let mut exponents = vec![0u32; len];
    for &part in nu {
        if part > 0 {
            exponents[part - 1] += 1;
        }
    }
    Polynomial::from_term(exponents, Rational::one())
}

/// Number of 0-1 matrices with the given row and column sums.
///
/// This is the coefficient of `m_μ` in `e_ν`.
#[must_use]
pub fn zero_one_matrices(row_sums: &[usize], column_sums: &[usize]) -> BigInt {
    let mut columns: Vec<usize> = column_sums.iter().copied().filter(|&c| c > 0).collect();
    columns.sort_unstable_by(|a, b| b.cmp(a));
    let mut memo = HashMap::new();
    count_rows(row_sums, columns, &mut memo)
}

fn count_rows(
    rows: &[usize],
    columns: Vec<usize>,
    memo: &mut HashMap<(usize, Vec<usize>), BigInt>,
) -> BigInt {
    let Some((&first, rest)) = rows.split_first() else {
        return if columns.is_empty() {
            BigInt::one()
        } else {
            BigInt::zero()
        };
    };
    let key = (rows.len(), columns.clone());
    if let Some(hit) = memo.get(&key) {
        return hit.clone();
    }

    let mut subsets = Vec::new();
    combinations(columns.len(), first, 0, &mut Vec::new(), &mut subsets);
    let mut total = BigInt::zero();
    for subset in subsets {
        let mut next = columns.clone();
        for &j in &subset {
            next[j] -= 1;
        }
        next.retain(|&c| c > 0);
        next.sort_unstable_by(|a, b| b.cmp(a));
        total += count_rows(rest, next, memo);
    }
    memo.insert(key, total.clone());
    total
}

fn combinations(len: usize, k: usize, start: usize, chosen: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if k == 0 {
        out.push(chosen.clone());
        return;
    }
    for j in start..len {
        if len - j < k {
            break;
        }
        chosen.push(j);
        combinations(len, k - 1, j + 1, chosen, out);
        chosen.pop();
    }
}

/// The matrix expressing each `m_λ` of a fixed degree in the `e_ν`.
#[derive(Clone, Debug)]
pub struct SymmetricTransition {
    partitions: Vec<Vec<usize>>,
    monomial_in_elementary: Vec<Vec<Rational>>,
}

impl SymmetricTransition {
    /// Builds the transition for symmetric functions of degree `degree`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Singular`] if the `e`-to-`m` matrix fails to
    /// invert, which does not happen for a correct count of 0-1 matrices.
    pub fn new(degree: usize) -> Result<Self> {
        let partitions = partitions(degree);
        let e_in_m: Vec<Vec<Rational>> = partitions
            .iter()
            .map(|nu| {
                partitions
                    .iter()
                    .map(|mu| Rational::from_integer(zero_one_matrices(nu, mu)))
                    .collect()
            })
            .collect();
        let monomial_in_elementary = linalg::inverse(&e_in_m)?;
        Ok(Self {
            partitions,
            monomial_in_elementary,
        })
    }

    /// Partitions of the degree, in the order used by every row.
    #[must_use]
    pub fn partitions(&self) -> &[Vec<usize>] {
        &self.partitions
    }

    /// Nonzero coefficients `(ν, a)` with `m_λ = Σ a e_ν`, where `λ` is the
    /// `index`-th partition.
    pub fn expansion(&self, index: usize) -> impl Iterator<Item = (&[usize], &Rational)> {
        self.monomial_in_elementary
            .get(index)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|(_, a)| !a.is_zero())
            .map(move |(j, a)| (self.partitions[j].as_slice(), a))
    }

    /// `m_λ` as a polynomial in Chern classes.
    #[must_use]
    pub fn chern_polynomial(&self, lambda: &[usize]) -> Option<Polynomial> {
        let index = self.partitions.iter().position(|p| p == lambda)?;
        Some(
            self.expansion(index)
                .fold(Polynomial::zero(), |acc, (nu, a)| {
                    acc + elementary_monomial(nu).scale(a)
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::integer;

    #[test]
    fn partition_counts() {
        assert_eq!(partitions(0), vec![Vec::<usize>::new()]);
        assert_eq!(partitions(3), vec![vec![3], vec![2, 1], vec![1, 1, 1]]);
        let counts: Vec<usize> = (1..=8).map(|n| partitions(n).len()).collect();
        assert_eq!(counts, vec![1, 2, 3, 5, 7, 11, 15, 22]);
    }

    #[test]
    fn zero_one_counts() {
        assert_eq!(zero_one_matrices(&[2, 1], &[1, 1, 1]), BigInt::from(3));
        assert_eq!(zero_one_matrices(&[2, 1], &[2, 1]), BigInt::from(1));
        assert_eq!(zero_one_matrices(&[3], &[3]), BigInt::zero());
        assert_eq!(zero_one_matrices(&[], &[]), BigInt::one());
    }

    #[test]
    fn power_sum_in_chern_classes() {
        // m_2 = p_2 = c1^2 - 2 c2
        let t = SymmetricTransition::new(2).expect("invertible");
        let p2 = t.chern_polynomial(&[2]).expect("partition of 2");
        let expected = elementary_monomial(&[1, 1]) - elementary_monomial(&[2]).scale(&integer(2));
        assert_eq!(p2, expected);
    }

    #[test]
    fn top_monomial_is_top_elementary() {
        let t = SymmetricTransition::new(4).expect("invertible");
        assert_eq!(t.chern_polynomial(&[1, 1, 1, 1]), Some(elementary_monomial(&[4])));
        assert_eq!(t.chern_polynomial(&[5]), None);
    }
}
