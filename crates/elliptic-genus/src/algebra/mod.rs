//! Exact algebra: rationals, polynomials, Laurent polynomials, truncated
//! power series, and linear algebra over Q.
//!
//! Every structure here is exact. Series carry their precision explicitly:
//! a [`Series`] with `n` stored coefficients means "known modulo `q^n`", and
//! arithmetic between series keeps the smaller precision.
//!
//! # Examples
//!
//! ```
//! use elliptic_genus::algebra::{integer, Laurent, Rational, Series};
//!
//! // (1 - y q)^{-1} = 1 + y q + y^2 q^2 + O(q^3)
//! let y = Laurent::<Rational>::y();
//! let f = Series::one(3) - Series::monomial(1, y, 3);
//! let g = f.inverse().expect("unit constant term");
//! assert_eq!(g.coefficient(2), Some(&Laurent::monomial(2, integer(1))));
//! ```

use std::fmt;
use std::ops::{Neg, Sub};

use num_traits::{One, Zero};

mod laurent;
pub mod linalg;
mod polynomial;
mod rational;
mod series;
pub mod symmetric;

pub use laurent::Laurent;
pub use polynomial::{Monomial, Polynomial};
pub use rational::{
    bernoulli_numbers, binomial, divisor_sigma, factorial, fraction, integer, power, primes,
    to_i64, to_usize, Rational,
};
pub use series::Series;

/// A commutative ring the polynomial and series types can take coefficients in.
///
/// Every such ring is a Q-algebra, so it can be scaled by rationals.
pub trait Coefficient:
    Clone + fmt::Debug + PartialEq + Zero + One + Neg<Output = Self> + Sub<Output = Self>
{
    /// Multiplies by a rational scalar.
    #[must_use]
    fn scale(&self, factor: &Rational) -> Self;

    /// The multiplicative inverse, if this element is a unit.
    fn try_inverse(&self) -> Option<Self>;
}

impl Coefficient for Rational {
    #[inline]
    fn scale(&self, factor: &Rational) -> Self {
        self * factor
    }

    fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

/// Wraps a coefficient's text in parentheses when it is a sum.
pub(crate) fn parenthesize(text: &str) -> String {
    if text.contains(' ') {
        format!("({text})")
    } else {
        text.to_string()
    }
}

/// Joins signed term strings, folding `+ -x` into `- x`.
pub(crate) fn join_terms(terms: &[String]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            out.push_str(term);
        } else if let Some(rest) = term.strip_prefix('-') {
            out.push_str(" - ");
            out.push_str(rest);
        } else {
            out.push_str(" + ");
            out.push_str(term);
        }
    }
    out
}

/// Formats `coeff * name`, dropping unit coefficients.
pub(crate) fn format_term(coeff: &str, name: &str) -> String {
    if name.is_empty() {
        return coeff.to_string();
    }
    match coeff {
        "1" => name.to_string(),
        "-1" => format!("-{name}"),
        _ => format!("{}*{name}", parenthesize(coeff)),
    }
}
