//! Normalized Eisenstein series.

use num_traits::One;

use crate::algebra::{bernoulli_numbers, divisor_sigma, integer, Rational, Series};
use crate::error::{Error, Result};

/// `E_k = 1 - (2k / B_k) Σ_{n≥1} σ_{k-1}(n) q^n + O(q^precision)`.
///
/// # Errors
///
/// Returns [`Error::InvalidEisensteinWeight`] for odd `k` or `k < 2`.
///
/// # Examples
///
/// ```
/// use elliptic_genus::jacobi::eisenstein;
/// use elliptic_genus::algebra::integer;
///
/// let e4 = eisenstein(4, 3)?;
/// assert_eq!(e4.coefficient(1), Some(&integer(240)));
/// # Ok::<(), elliptic_genus::Error>(())
/// ```
pub fn eisenstein(k: u32, precision: usize) -> Result<Series<Rational>> {
    if k < 2 || k % 2 == 1 {
        return Err(Error::InvalidEisensteinWeight(k));
    }
    let bernoulli = bernoulli_numbers(k as usize);
    let factor = -(integer(2 * i64::from(k)) / &bernoulli[k as usize]);
    Ok(Series::from_fn(precision, |n| {
        if n == 0 {
            Rational::one()
        } else {
            &factor * Rational::from_integer(divisor_sigma(n, k - 1))
        }
    }))
}
