//! Bases of weak Jacobi forms of weight 0.

use super::eisenstein::eisenstein;
use super::generators::{phi_0_1, phi_0_3_2, phi_minus2_1};
use super::WeakJacobiForm;
use crate::error::Result;

/// Pairs `(a, b)` with `2a + 3b = n`, largest `a` first.
fn weight_splittings(n: usize) -> impl Iterator<Item = (u32, u32)> {
    (0..=n / 2)
        .rev()
        .filter(move |a| (n - 2 * a) % 3 == 0)
        .map(move |a| (a as u32, ((n - 2 * a) / 3) as u32))
}

/// Basis of weak Jacobi forms of weight 0 and index `index`:
/// `φ_{0,1}^m` together with `φ_{0,1}^{m-i} φ_{-2,1}^i E_4^a E_6^b` for
/// `2 ≤ i ≤ m` and `2a + 3b = i`.
///
/// # Errors
///
/// Propagates failures building the Eisenstein series, which do not occur
/// for the weights used here.
pub fn basis_integral(index: usize, precision: usize) -> Result<Vec<WeakJacobiForm>> {
    let a = phi_minus2_1(precision);
    let b = phi_0_1(precision);
    let e4 = eisenstein(4, precision)?;
    let e6 = eisenstein(6, precision)?;

    let mut basis = vec![b.pow(index as u32)];
    for i in 2..=index {
        let jacobi = b.pow((index - i) as u32).product(&a.pow(i as u32));
        for (p, r) in weight_splittings(i) {
            let modular = e4.pow(p) * e6.pow(r);
            basis.push(jacobi.mul_modular(&modular, 4 * p as i32 + 6 * r as i32));
        }
    }
    Ok(basis)
}

/// Basis of weak Jacobi forms of weight 0 and index `double_index / 2`.
///
/// Even `D` gives [`basis_integral`] of index `D/2`; odd `D` gives
/// `φ_{0,3/2}` times the integral basis of index `(D-3)/2`, which is empty
/// for `D = 1`.
///
/// # Errors
///
/// Same as [`basis_integral`].
pub fn basis_half_integral(double_index: usize, precision: usize) -> Result<Vec<WeakJacobiForm>> {
    if double_index % 2 == 0 {
        return basis_integral(double_index / 2, precision);
    }
    if double_index < 3 {
        return Ok(Vec::new());
    }
    let c = phi_0_3_2(precision);
    Ok(basis_integral((double_index - 3) / 2, precision)?
        .iter()
        .map(|form| c.product(form))
        .collect())
}
