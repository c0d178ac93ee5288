//! Gaussian elimination over Q.

use num_traits::{One, Zero};

use super::rational::Rational;
use crate::error::{Error, Result};

/// Outcome of solving `A x = b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// Exactly one solution.
    Unique(Vec<Rational>),
    /// Consistent, but the columns of `A` are dependent.
    Underdetermined {
        /// Rank of `A`.
        rank: usize,
    },
    /// No solution.
    Inconsistent,
}

/// Reduces the first `columns` columns of `rows` to reduced row echelon form
/// in place and returns the pivot columns.
fn reduce(rows: &mut [Vec<Rational>], columns: usize) -> Vec<usize> {
    let mut pivots = Vec::new();
    let mut r = 0;
    for c in 0..columns {
        if r == rows.len() {
            break;
        }
        let Some(p) = (r..rows.len()).find(|&i| !rows[i][c].is_zero()) else {
            continue;
        };
        rows.swap(r, p);
        let inv = rows[r][c].recip();
        for v in rows[r].iter_mut() {
            *v = &*v * &inv;
        }
        for i in 0..rows.len() {
            if i == r || rows[i][c].is_zero() {
                continue;
            }
            let factor = rows[i][c].clone();
            for j in 0..rows[i].len() {
                let delta = &factor * &rows[r][j];
                rows[i][j] -= delta;
            }
        }
        pivots.push(c);
        r += 1;
    }
    pivots
}

/// Rank of a matrix given by rows.
#[must_use]
pub fn rank(matrix: &[Vec<Rational>]) -> usize {
    let columns = matrix.first().map_or(0, Vec::len);
    let mut rows = matrix.to_vec();
    reduce(&mut rows, columns).len()
}

/// Solves `A x = b` for `unknowns` unknowns.
///
/// Inconsistency takes precedence over rank deficiency.
#[must_use]
pub fn solve(a: &[Vec<Rational>], b: &[Rational], unknowns: usize) -> Solution {
    let mut rows: Vec<Vec<Rational>> = a
        .iter()
        .zip(b)
        .map(|(row, rhs)| {
            let mut augmented: Vec<Rational> = (0..unknowns)
                .map(|j| row.get(j).cloned().unwrap_or_else(Rational::zero))
                .collect();
            augmented.push(rhs.clone());
            augmented
        })
        .collect();
    let pivots = reduce(&mut rows, unknowns + 1);
    if pivots.last() == Some(&unknowns) {
        return Solution::Inconsistent;
    }
    if pivots.len() < unknowns {
        return Solution::Underdetermined { rank: pivots.len() };
    }
    Solution::Unique(rows.iter().take(unknowns).map(|row| row[unknowns].clone()).collect())
}

/// Inverse of a square matrix.
///
/// # Errors
///
/// Returns [`Error::Singular`] when the matrix is not invertible.
pub fn inverse(matrix: &[Vec<Rational>]) -> Result<Vec<Vec<Rational>>> {
    let n = matrix.len();
    let mut rows: Vec<Vec<Rational>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut augmented = row.clone();
            augmented.extend((0..n).map(|j| {
                if i == j {
                    Rational::one()
                } else {
                    Rational::zero()
                }
            }));
            augmented
        })
        .collect();
    if reduce(&mut rows, n).len() < n {
        return Err(Error::Singular);
    }
    Ok(rows.into_iter().map(|row| row[n..].to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{fraction, integer};

    fn m(rows: &[&[i64]]) -> Vec<Vec<Rational>> {
        rows.iter()
            .map(|r| r.iter().map(|&x| integer(x)).collect())
            .collect()
    }

    #[test]
    fn rank_of_dependent_rows() {
        assert_eq!(rank(&m(&[&[1, 2, 3], &[2, 4, 6], &[0, 1, 1]])), 2);
        assert_eq!(rank(&[]), 0);
    }

    #[test]
    fn unique_solution_with_redundant_rows() {
        let a = m(&[&[1, 1], &[1, -1], &[2, 0]]);
        let b = vec![integer(3), integer(1), integer(4)];
        assert_eq!(solve(&a, &b, 2), Solution::Unique(vec![integer(2), integer(1)]));
    }

    #[test]
    fn inconsistent_and_underdetermined() {
        let a = m(&[&[1, 1], &[2, 2]]);
        assert_eq!(
            solve(&a, &[integer(1), integer(3)], 2),
            Solution::Inconsistent
        );
        assert_eq!(
            solve(&a, &[integer(1), integer(2)], 2),
            Solution::Underdetermined { rank: 1 }
        );
    }

    #[test]
    fn inverse_of_triangular() {
        let inv = inverse(&m(&[&[2, 1], &[0, 4]])).expect("invertible");
        assert_eq!(
            inv,
            vec![
                vec![fraction(1, 2), fraction(-1, 8)],
                vec![integer(0), fraction(1, 4)]
            ]
        );
        assert_eq!(inverse(&m(&[&[1, 2], &[2, 4]])), Err(Error::Singular));
    }
}
