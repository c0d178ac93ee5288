//! Recognizing an expansion as a combination of the weak Jacobi basis.

use std::collections::BTreeSet;

use num_traits::Zero;
use tracing::debug;

use crate::algebra::linalg::{self, Solution};
use crate::algebra::{Rational, Series};
use crate::error::{Error, Result};
use crate::jacobi::{basis_half_integral, JacobiSeries, WeakJacobiForm};

/// Coefficients of `expansion` in the basis of weak Jacobi forms of weight 0
/// and index `double_index / 2`.
///
/// Rows are the `(q^n, y^e)` coefficients for `n = 0, 1, …`, one more power
/// of `q` per round, until the system has full rank. Every row seen so far
/// is checked against the solution.
///
/// # Errors
///
/// - [`Error::NotJacobiForm`] when the rows are inconsistent;
/// - [`Error::Underdetermined`] when the known `q`-powers, at most
///   `double_index + 1` of them, never reach full rank.
pub fn fit_coefficients(expansion: &JacobiSeries, double_index: usize) -> Result<Vec<Rational>> {
    let rounds = expansion.precision().min(double_index + 1);
    let basis = basis_half_integral(double_index, rounds)?;
    let unknowns = basis.len();

    let mut rows: Vec<Vec<Rational>> = Vec::new();
    let mut rhs: Vec<Rational> = Vec::new();
    let mut rank = 0;
    for n in 0..rounds {
        let Some(target) = expansion.coefficient(n) else {
            break;
        };
        let mut exponents: BTreeSet<i32> = target.exponents().collect();
        for form in &basis {
            if let Some(c) = form.expansion().coefficient(n) {
                exponents.extend(c.exponents());
            }
        }
        for e in exponents {
            rows.push(
                basis
                    .iter()
                    .map(|form| form.coefficient(n, e).unwrap_or_else(Rational::zero))
                    .collect(),
            );
            rhs.push(target.coefficient(e));
        }

        match linalg::solve(&rows, &rhs, unknowns) {
            Solution::Unique(coefficients) => {
                debug!(round = n, rows = rows.len(), unknowns, "weak Jacobi fit determined");
                return Ok(coefficients);
            }
            Solution::Underdetermined { rank: reached } => {
                debug!(round = n, rows = rows.len(), rank = reached, unknowns, "weak Jacobi fit underdetermined");
                rank = reached;
            }
            Solution::Inconsistent => {
                debug!(round = n, rows = rows.len(), "weak Jacobi fit inconsistent");
                return Err(Error::NotJacobiForm { double_index });
            }
        }
    }
    Err(Error::Underdetermined { rank, unknowns })
}

/// `Σ_i coefficients[i] · basis_i`, expanded modulo `q^precision`.
///
/// # Errors
///
/// Propagates failures building the basis.
pub fn combine(coefficients: &[Rational], double_index: usize, precision: usize) -> Result<JacobiSeries> {
    let basis: Vec<WeakJacobiForm> = basis_half_integral(double_index, precision)?;
    Ok(basis
        .iter()
        .zip(coefficients)
        .filter(|(_, c)| !c.is_zero())
        .fold(Series::zero(precision), |acc, (form, c)| {
            acc + form.expansion().scale(c)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::integer;
    use crate::jacobi::{phi_0_1, phi_0_3_2, phi_minus2_1};

    #[test]
    fn recovers_a_known_combination() {
        let b = phi_0_1(3);
        let a = phi_minus2_1(3);
        let e4 = crate::jacobi::eisenstein(4, 3).expect("even weight");
        // 3 φ_{0,1}^2 - 5 φ_{-2,1}^2 E4
        let target = b.pow(2).expansion().scale(&integer(3))
            - a.pow(2).mul_modular(&e4, 4).expansion().scale(&integer(5));
        let coefficients = fit_coefficients(&target, 4).expect("in the span");
        assert_eq!(coefficients, vec![integer(3), integer(-5)]);
        let rebuilt = combine(&coefficients, 4, 3).expect("basis");
        assert_eq!(rebuilt, target);
    }

    #[test]
    fn rejects_forms_of_the_wrong_index() {
        let target = phi_0_3_2(3).expansion().clone();
        assert_eq!(
            fit_coefficients(&target, 2),
            Err(Error::NotJacobiForm { double_index: 2 })
        );
    }

    #[test]
    fn too_few_rows_are_underdetermined() {
        let unknown: JacobiSeries = Series::zero(0);
        assert_eq!(
            fit_coefficients(&unknown, 4),
            Err(Error::Underdetermined { rank: 0, unknowns: 2 })
        );
    }

    #[test]
    fn empty_basis_fits_only_zero() {
        assert_eq!(fit_coefficients(&Series::zero(2), 1), Ok(vec![]));
        let nonzero = phi_0_3_2(2).expansion().clone();
        assert!(fit_coefficients(&nonzero, 1).is_err());
    }
}
