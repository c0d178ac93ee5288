//! The generators `φ_{-2,1}`, `φ_{0,1}` and `φ_{0,3/2}` as product expansions.

use num_traits::One;

use super::{JacobiSeries, WeakJacobiForm};
use crate::algebra::{integer, Coefficient, Laurent, Rational, Series};

fn y_power(e: i32) -> Laurent<Rational> {
    Laurent::monomial(e, Rational::one())
}

/// `1 - c q^n`.
fn one_minus(n: usize, c: Laurent<Rational>, precision: usize) -> JacobiSeries {
    Series::one(precision) - Series::monomial(n, c, precision)
}

/// `1 / (1 - c q^n) = Σ_m c^m q^{nm}`.
fn geometric(n: usize, c: &Laurent<Rational>, precision: usize) -> JacobiSeries {
    let mut out = Series::zero(precision);
    let mut power = Laurent::one();
    let mut degree = 0;
    while degree < precision {
        out = out + Series::monomial(degree, power.clone(), precision);
        power = power * c.clone();
        degree += n;
    }
    out
}

/// `Π_{n≥1} (1 - q^n y)^2 (1 - q^n y^{-1})^2 / (1 - q^n)^4`.
fn theta_quotient(precision: usize) -> JacobiSeries {
    (1..precision).fold(Series::one(precision), |acc, n| {
        let numerator = one_minus(n, y_power(1), precision) * one_minus(n, y_power(-1), precision);
        acc * numerator.pow(2) * geometric(n, &Laurent::one(), precision).pow(4)
    })
}

/// `Σ_{n≥1} Σ_{d|n} d (y^d - 2 + y^{-d}) q^n`, the non-constant part of
/// the Weierstrass function in these coordinates.
fn weierstrass_tail(precision: usize) -> JacobiSeries {
    Series::from_fn(precision, |n| {
        (1..=n).filter(|d| n % d == 0).fold(Laurent::default(), |acc, d| {
            let d = d as i32;
            let term = Laurent::from_terms([(d, integer(1)), (0, integer(-2)), (-d, integer(1))]);
            acc + term.scale(&integer(i64::from(d)))
        })
    })
}

/// `φ_{-2,1} = (y - 2 + y^{-1}) + O(q)`, stored as `y φ_{-2,1}`.
#[must_use]
pub fn phi_minus2_1(precision: usize) -> WeakJacobiForm {
    let square = Laurent::from_terms([(0, integer(1)), (1, integer(-2)), (2, integer(1))]);
    let expansion = theta_quotient(precision).mul_coefficient(&square);
    WeakJacobiForm::new(-2, 2, expansion)
}

/// `φ_{0,1} = (y + 10 + y^{-1}) + O(q)`, stored as `y φ_{0,1}`.
///
/// Built as `12 ℘ φ_{-2,1}` with `℘` normalized to `1/12 + y/(1-y)^2 + …`.
#[must_use]
pub fn phi_0_1(precision: usize) -> WeakJacobiForm {
    let a = phi_minus2_1(precision);
    let tail = weierstrass_tail(precision).scale(&integer(12));
    let expansion = a.expansion().clone() * (Series::one(precision) + tail)
        + theta_quotient(precision).mul_coefficient(&Laurent::monomial(1, integer(12)));
    WeakJacobiForm::new(0, 2, expansion)
}

/// `φ_{0,3/2} = (y^{1/2} + y^{-1/2}) + O(q)`, stored as `y^{3/2} φ_{0,3/2}`.
///
/// Its product expansion is `θ_1(2z) / θ_1(z)`:
/// `(y^2 + y) Π_{n≥1} (1 - q^n y^2)(1 - q^n y^{-2}) / ((1 - q^n y)(1 - q^n y^{-1}))`.
#[must_use]
pub fn phi_0_3_2(precision: usize) -> WeakJacobiForm {
    let product = (1..precision).fold(Series::one(precision), |acc, n| {
        acc * one_minus(n, y_power(2), precision)
            * one_minus(n, y_power(-2), precision)
            * geometric(n, &y_power(1), precision)
            * geometric(n, &y_power(-1), precision)
    });
    let lead = Laurent::from_terms([(1, integer(1)), (2, integer(1))]);
    WeakJacobiForm::new(0, 3, product.mul_coefficient(&lead))
}
