//! The universal expansion of the elliptic genus in Chern classes.
//!
//! With Chern roots `x_1 … x_n` of the tangent bundle, the genus is
//! `∫ Π_r F(x_r)` for the single-root factor
//!
//! ```text
//! F(x) = x (1 - y e^{-x}) / (1 - e^{-x})
//!        Π_{m≥1} (1 - y q^m e^{-x}) (1 - y^{-1} q^m e^{x}) / ((1 - q^m e^{-x}) (1 - q^m e^{x}))
//! ```
//!
//! Writing `F(x) = Σ_j a_j x^j`, the degree-`n` part of the product is
//! `Σ_λ a_λ m_λ(x)` over partitions `λ` of `n`, where `a_λ` multiplies
//! `a_{λ_i}` over the parts and `a_0` over the `n - len(λ)` roots left
//! out. The monomial symmetric functions `m_λ` become Chern polynomials.

use num_traits::{One, Zero};

use crate::algebra::symmetric::SymmetricTransition;
use crate::algebra::{bernoulli_numbers, factorial, integer, power, Coefficient, Laurent, Polynomial, Rational, Series};
use crate::error::Result;
use crate::homogeneous::ChernNumbers;
use crate::jacobi::JacobiSeries;

/// A power series in one Chern root `x`, cut after `x^dim`, with
/// coefficients in `q`-series.
#[derive(Clone, Debug)]
struct RootSeries {
    coefficients: Vec<JacobiSeries>,
}

impl RootSeries {
    fn from_fn(dim: usize, f: impl FnMut(usize) -> JacobiSeries) -> Self {
        Self {
            coefficients: (0..=dim).map(f).collect(),
        }
    }

    fn one(dim: usize, precision: usize) -> Self {
        Self::from_fn(dim, |j| {
            if j == 0 {
                Series::one(precision)
            } else {
                Series::zero(precision)
            }
        })
    }

    /// `c q^n e^{s x}`.
    fn exponential(dim: usize, n: usize, c: &Laurent<Rational>, s: i64, precision: usize) -> Self {
        Self::from_fn(dim, |j| {
            let taylor = power(&integer(s), j as u32) / Rational::from_integer(factorial(j));
            Series::monomial(n, c.scale(&taylor), precision)
        })
    }

    fn dim(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    fn plus(&self, other: &Self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip(&other.coefficients)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Self { coefficients }
    }

    fn minus(&self, other: &Self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip(&other.coefficients)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Self { coefficients }
    }

    fn product(&self, other: &Self) -> Self {
        let dim = self.dim();
        let precision = self.coefficients.first().map_or(0, Series::precision);
        let mut out = Self::from_fn(dim, |_| Series::zero(precision));
        for (i, a) in self.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coefficients.iter().enumerate().take(dim + 1 - i) {
                if b.is_zero() {
                    continue;
                }
                let slot = &mut out.coefficients[i + j];
                *slot = slot.clone() + a.clone() * b.clone();
            }
        }
        out
    }
}

/// The coefficients `a_0 … a_dim` of the single-root factor, each known
/// modulo `q^{k+1}`.
#[must_use]
pub fn root_factor_coefficients(dim: usize, k: usize) -> Vec<JacobiSeries> {
    let precision = k + 1;
    let y = Laurent::<Rational>::y();
    let y_inverse = Laurent::monomial(-1, Rational::one());
    let unit = Laurent::<Rational>::one();

    // x / (1 - e^{-x}) = Σ (-1)^j B_j x^j / j!
    let bernoulli = bernoulli_numbers(dim);
    let todd = RootSeries::from_fn(dim, |j| {
        let sign = if j % 2 == 1 { -Rational::one() } else { Rational::one() };
        let c = sign * &bernoulli[j] / Rational::from_integer(factorial(j));
        Series::constant(Laurent::constant(c), precision)
    });
    let one = RootSeries::one(dim, precision);
    let hodge = one.minus(&RootSeries::exponential(dim, 0, &y, -1, precision));
    let mut factor = todd.product(&hodge);

    for m in 1..precision {
        let numerator = one
            .minus(&RootSeries::exponential(dim, m, &y, -1, precision))
            .product(&one.minus(&RootSeries::exponential(dim, m, &y_inverse, 1, precision)));
        let mut falling = RootSeries::from_fn(dim, |_| Series::zero(precision));
        let mut rising = falling.clone();
        let mut j = 0;
        while j * m < precision {
            let s = j as i64;
            falling = falling.plus(&RootSeries::exponential(dim, j * m, &unit, -s, precision));
            rising = rising.plus(&RootSeries::exponential(dim, j * m, &unit, s, precision));
            j += 1;
        }
        factor = factor.product(&numerator).product(&falling).product(&rising);
    }
    factor.coefficients
}

/// `a_λ` for every partition of `dim`, in the order of `transition`.
fn partition_coefficients(
    transition: &SymmetricTransition,
    factor: &[JacobiSeries],
    dim: usize,
    precision: usize,
) -> Vec<JacobiSeries> {
    let unit = Series::one(precision);
    let zero = Series::zero(precision);
    transition
        .partitions()
        .iter()
        .map(|lambda| {
            let parts = lambda.iter().fold(unit.clone(), |acc, &part| {
                acc * factor.get(part).cloned().unwrap_or_else(|| zero.clone())
            });
            let rest = factor.first().map_or_else(|| zero.clone(), |a0| a0.pow((dim - lambda.len()) as u32));
            parts * rest
        })
        .collect()
}

/// The elliptic genus of an `n`-dimensional manifold as a `q`-series whose
/// coefficients are Laurent polynomials in `y` over `Q[c_1 … c_n]`, with
/// `c_i` the variable `x_{i-1}`. Known modulo `q^{k+1}`.
///
/// # Errors
///
/// Propagates failures of the symmetric-function change of basis.
///
/// # Examples
///
/// ```
/// use elliptic_genus::genus::elliptic_genus_chernnum;
///
/// let genus = elliptic_genus_chernnum(1, 0)?;
/// let chi_y = genus.coefficient(0).expect("q^0");
/// // (1 + y) c1 / 2
/// assert_eq!(chi_y.to_string(), "1/2*x0 + 1/2*x0*y");
/// # Ok::<(), elliptic_genus::Error>(())
/// ```
pub fn elliptic_genus_chernnum(dim: usize, k: usize) -> Result<Series<Laurent<Polynomial>>> {
    let precision = k + 1;
    let transition = SymmetricTransition::new(dim)?;
    let factor = root_factor_coefficients(dim, k);
    let coefficients = partition_coefficients(&transition, &factor, dim, precision);

    let mut genus = Series::zero(precision);
    for (lambda, a) in transition.partitions().iter().zip(coefficients) {
        let Some(chern) = transition.chern_polynomial(lambda) else {
            continue;
        };
        genus = genus + a.map(|laurent| laurent.map(|c| chern.scale(c)));
    }
    Ok(genus)
}

/// The elliptic genus of a manifold with the given Chern numbers, known
/// modulo `q^{k+1}`.
///
/// # Errors
///
/// Propagates failures of the symmetric-function change of basis.
pub fn elliptic_genus_from_chern_numbers(numbers: &ChernNumbers, k: usize) -> Result<JacobiSeries> {
    let dim = numbers.dimension();
    let precision = k + 1;
    let transition = SymmetricTransition::new(dim)?;
    let factor = root_factor_coefficients(dim, k);
    let coefficients = partition_coefficients(&transition, &factor, dim, precision);

    let mut genus = Series::zero(precision);
    for (index, a) in coefficients.into_iter().enumerate() {
        let value = transition
            .expansion(index)
            .fold(Rational::zero(), |acc, (nu, c)| acc + c * numbers.get(nu));
        if !value.is_zero() {
            genus = genus + a.scale(&value);
        }
    }
    Ok(genus)
}

/// The `χ_y` genus `Σ_p χ(Ω^p) (-y)^p` in Chern classes.
///
/// # Errors
///
/// Same as [`elliptic_genus_chernnum`].
pub fn chi_y_chernnum(dim: usize) -> Result<Laurent<Polynomial>> {
    let genus = elliptic_genus_chernnum(dim, 0)?;
    Ok(genus.coefficient(0).cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::fraction;
    use crate::algebra::symmetric::elementary_monomial;

    fn laurent(pairs: &[(i32, i64)]) -> Laurent<Rational> {
        Laurent::from_terms(pairs.iter().map(|&(e, c)| (e, integer(c))))
    }

    #[test]
    fn root_factor_at_q0() {
        // (1 + x/2 + x^2/12)(1 - y + y x - y x^2/2)
        let a = root_factor_coefficients(2, 0);
        assert_eq!(a[0].coefficient(0), Some(&laurent(&[(0, 1), (1, -1)])));
        let a1 = Laurent::from_terms([(0, fraction(1, 2)), (1, fraction(1, 2))]);
        assert_eq!(a[1].coefficient(0), Some(&a1));
        let a2 = Laurent::from_terms([(0, fraction(1, 12)), (1, fraction(-1, 12))]);
        assert_eq!(a[2].coefficient(0), Some(&a2));
    }

    #[test]
    fn constant_term_vanishes_at_y_equals_one() {
        let a = root_factor_coefficients(1, 3);
        for n in 0..4 {
            let c = a[0].coefficient(n).expect("precision 4");
            assert!(c.sum_coefficients().is_zero(), "q^{n}");
        }
    }

    #[test]
    fn chi_y_of_surfaces_in_chern_classes() {
        // χ_y = χ(O) - χ(Ω^1) y + χ(O) y^2 with χ(O) = (c1^2 + c2)/12
        let chi = chi_y_chernnum(2).expect("transition");
        let todd = (elementary_monomial(&[1, 1]) + elementary_monomial(&[2])).scale(&fraction(1, 12));
        assert_eq!(chi.coefficient(0), todd);
        assert_eq!(chi.coefficient(2), todd);
    }

    #[test]
    fn projective_line() {
        let numbers = ChernNumbers::from_values(1, [(vec![1], integer(2))]);
        let genus = elliptic_genus_from_chern_numbers(&numbers, 2).expect("transition");
        assert_eq!(genus.coefficient(0), Some(&laurent(&[(0, 1), (1, 1)])));
        // the elliptic genus at y = 1 is the Euler number
        let at_one = genus.map(Laurent::sum_coefficients);
        assert_eq!(at_one, Series::constant(integer(2), 3));
    }

    #[test]
    fn point() {
        let numbers = ChernNumbers::from_values(0, [(vec![], integer(3))]);
        let genus = elliptic_genus_from_chern_numbers(&numbers, 1).expect("transition");
        assert_eq!(genus, Series::constant(Laurent::constant(integer(3)), 2));
    }
}
