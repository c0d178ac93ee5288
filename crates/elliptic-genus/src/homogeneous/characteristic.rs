//! Characteristic classes computed from graded lists of Chern classes.
//!
//! A graded list `[c_0, c_1, …, c_n]` holds one homogeneous polynomial per
//! degree. Everything here works in the truncated ring where degrees above
//! the base dimension vanish.

use num_traits::{One, Zero};

use crate::algebra::{bernoulli_numbers, factorial, fraction, integer, Coefficient, Polynomial, Rational};

fn part(classes: &[Polynomial], k: usize) -> Polynomial {
    classes.get(k).cloned().unwrap_or_default()
}

/// Splits a class into its homogeneous parts of degree `0..=max_degree`.
#[must_use]
pub fn graded_parts(class: &Polynomial, max_degree: usize) -> Vec<Polynomial> {
    (0..=max_degree)
        .map(|d| class.homogeneous_part(d as u32))
        .collect()
}

/// The sum of a graded list.
#[must_use]
pub fn total(classes: &[Polynomial]) -> Polynomial {
    classes.iter().fold(Polynomial::zero(), |acc, c| acc + c)
}

/// Degree-wise product `(a · b)_k = Σ_{i+j=k} a_i b_j`.
#[must_use]
pub fn graded_product(a: &[Polynomial], b: &[Polynomial], max_degree: usize) -> Vec<Polynomial> {
    (0..=max_degree)
        .map(|k| {
            (0..=k).fold(Polynomial::zero(), |acc, i| {
                acc + &part(a, i) * &part(b, k - i)
            })
        })
        .collect()
}

/// Inverse of a graded class with `c_0 = 1`: `g_k = -Σ_{i=1}^{k} c_i g_{k-i}`.
#[must_use]
pub fn graded_inverse(classes: &[Polynomial], max_degree: usize) -> Vec<Polynomial> {
    let mut inverse: Vec<Polynomial> = Vec::with_capacity(max_degree + 1);
    inverse.push(Polynomial::one());
    for k in 1..=max_degree {
        let sum = (1..=k).fold(Polynomial::zero(), |acc, i| acc + &part(classes, i) * &inverse[k - i]);
        inverse.push(-sum);
    }
    inverse
}

/// Power sums `p_1 … p_n` of the Chern roots from the Chern classes, by
/// Newton's identities `k e_k = Σ_{i=1}^{k} (-1)^{i-1} e_{k-i} p_i`.
///
/// Index 0 of the result is zero; the caller knows the rank.
#[must_use]
pub fn power_sums(chern: &[Polynomial], max_degree: usize) -> Vec<Polynomial> {
    let mut p: Vec<Polynomial> = vec![Polynomial::zero()];
    for k in 1..=max_degree {
        let mut acc = part(chern, k).scale(&integer(k as i64));
        for i in 1..k {
            let term = &part(chern, k - i) * &p[i];
            acc = if i % 2 == 1 { acc - term } else { acc + term };
        }
        p.push(if k % 2 == 1 { acc } else { -acc });
    }
    p
}

/// The Chern character `[rank, ch_1, …, ch_n]` with `ch_k = p_k / k!`.
#[must_use]
pub fn chern_character(rank: usize, chern: &[Polynomial], max_degree: usize) -> Vec<Polynomial> {
    let mut ch = power_sums(chern, max_degree);
    ch[0] = Polynomial::constant(integer(rank as i64));
    for (k, class) in ch.iter_mut().enumerate().skip(1) {
        *class = class.scale(&Rational::from_integer(factorial(k)).recip());
    }
    ch
}

/// Chern classes from a Chern character, inverting Newton's identities.
#[must_use]
pub fn chern_from_character(character: &[Polynomial], max_degree: usize) -> Vec<Polynomial> {
    let p: Vec<Polynomial> = (0..=max_degree)
        .map(|k| part(character, k).scale(&Rational::from_integer(factorial(k))))
        .collect();
    let mut e: Vec<Polynomial> = vec![Polynomial::one()];
    for k in 1..=max_degree {
        let mut acc = Polynomial::zero();
        for i in 1..=k {
            let term = &e[k - i] * &p[i];
            acc = if i % 2 == 1 { acc + term } else { acc - term };
        }
        e.push(acc.scale(&fraction(1, k as i64)));
    }
    e
}

/// The multiplicative class with `log Q(x) = Σ_k log_coefficients[k] x^k`,
/// evaluated as `exp(Σ_k l_k p_k)` and split by degree.
///
/// `chern[k]` must be homogeneous of ordinary total degree `k`, as the
/// classes of weight polynomials are; the result is graded by total degree.
#[must_use]
pub fn multiplicative_class(
    log_coefficients: &[Rational],
    chern: &[Polynomial],
    max_degree: usize,
) -> Vec<Polynomial> {
    let p = power_sums(chern, max_degree);
    let exponent = (1..=max_degree).fold(Polynomial::zero(), |acc, k| match log_coefficients.get(k) {
        Some(l) if !l.is_zero() => acc + p[k].scale(l),
        _ => acc,
    });
    let bound = max_degree as u32;
    let mut result = Polynomial::one();
    let mut term = Polynomial::one();
    for j in 1..=max_degree {
        term = term
            .mul_truncated(&exponent, bound)
            .scale(&fraction(1, j as i64));
        if term.is_zero() {
            break;
        }
        result = result + &term;
    }
    graded_parts(&result, max_degree)
}

/// Coefficients of `log(x / (1 - e^{-x})) = x/2 - Σ_{k≥1} B_{2k} x^{2k} / (2k (2k)!)`
/// up to `x^max_degree`.
#[must_use]
pub fn todd_log_coefficients(max_degree: usize) -> Vec<Rational> {
    let bernoulli = bernoulli_numbers(max_degree.max(1));
    (0..=max_degree)
        .map(|k| match k {
            0 => Rational::zero(),
            1 => fraction(1, 2),
            _ if k % 2 == 0 => {
                -(&bernoulli[k] / Rational::from_integer(factorial(k) * k))
            }
            _ => Rational::zero(),
        })
        .collect()
}

/// The Todd classes `td_0 … td_n`.
///
/// Same grading requirement as [`multiplicative_class`].
#[must_use]
pub fn todd_classes(chern: &[Polynomial], max_degree: usize) -> Vec<Polynomial> {
    multiplicative_class(&todd_log_coefficients(max_degree), chern, max_degree)
}
