//! Weak Jacobi forms of weight 0 and their q-expansions.
//!
//! A weak Jacobi form `φ(τ, z)` of index `m` is stored through the
//! expansion of `y^m φ`, where `q = e^{2πiτ}` and `y = e^{2πiz}`. For
//! half-integral `m = D/2` this keeps every exponent of `y` integral, and
//! the stored coefficients satisfy `c(n, e) = c(n, D - e)` for even weight.
//! This is the normalization of elliptic genera: the `q^0` coefficient of
//! the genus of a `D`-dimensional manifold is its `χ_y` genus.
//!
//! # Examples
//!
//! ```
//! use elliptic_genus::jacobi::{basis_integral, phi_0_1};
//! use elliptic_genus::algebra::integer;
//!
//! // φ_{0,1} = (y^{-1} + 10 + y) + O(q)
//! let phi = phi_0_1(2);
//! let q0 = phi.expansion().coefficient(0).expect("precision 2");
//! assert_eq!(q0.coefficient(1), integer(10));
//! assert_eq!(basis_integral(3, 2)?.len(), 3);
//! # Ok::<(), elliptic_genus::Error>(())
//! ```

use std::fmt;

use serde::Serialize;

use crate::algebra::{Laurent, Rational, Series};
use crate::error::Result;

mod basis;
mod eisenstein;
mod generators;

pub use basis::{basis_half_integral, basis_integral};
pub use eisenstein::eisenstein;
pub use generators::{phi_0_1, phi_0_3_2, phi_minus2_1};

/// A series in `q` with Laurent polynomials in `y` as coefficients.
pub type JacobiSeries = Series<Laurent<Rational>>;

/// A weak Jacobi form, known up to `O(q^precision)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeakJacobiForm {
    weight: i32,
    double_index: usize,
    expansion: JacobiSeries,
}

impl WeakJacobiForm {
    /// A form of the given weight and index `double_index / 2`, from the
    /// expansion of `y^{double_index / 2} φ`.
    #[must_use]
    pub fn new(weight: i32, double_index: usize, expansion: JacobiSeries) -> Self {
        Self {
            weight,
            double_index,
            expansion,
        }
    }

    /// The constant form `1` of weight and index zero.
    #[must_use]
    pub fn one(precision: usize) -> Self {
        Self::new(0, 0, Series::one(precision))
    }

    /// Modular weight.
    #[must_use]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Twice the index.
    #[must_use]
    pub fn double_index(&self) -> usize {
        self.double_index
    }

    /// The stored expansion of `y^{index} φ`.
    #[must_use]
    pub fn expansion(&self) -> &JacobiSeries {
        &self.expansion
    }

    /// Number of known `q` coefficients.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.expansion.precision()
    }

    /// The coefficient of `q^n y^e` in the stored expansion.
    #[must_use]
    pub fn coefficient(&self, n: usize, e: i32) -> Option<Rational> {
        self.expansion.coefficient(n).map(|c| c.coefficient(e))
    }

    /// The product, adding weights and indices.
    #[must_use]
    pub fn product(&self, other: &Self) -> Self {
        Self {
            weight: self.weight + other.weight,
            double_index: self.double_index + other.double_index,
            expansion: self.expansion.clone() * other.expansion.clone(),
        }
    }

    /// `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::one(self.precision()), |acc, _| acc.product(self))
    }

    /// Multiplies by a modular form of the given weight.
    #[must_use]
    pub fn mul_modular(&self, form: &Series<Rational>, weight: i32) -> Self {
        Self {
            weight: self.weight + weight,
            double_index: self.double_index,
            expansion: self.expansion.clone() * form.map(|c| Laurent::constant(c.clone())),
        }
    }

    /// Drops every term from `q^precision` on.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PrecisionExceeded`] when the form is not known that far.
    pub fn truncate(&self, precision: usize) -> Result<Self> {
        Ok(Self {
            weight: self.weight,
            double_index: self.double_index,
            expansion: self.expansion.truncate(precision)?,
        })
    }

    /// The `q`-series at `y = 1`.
    #[must_use]
    pub fn at_y_equals_one(&self) -> Series<Rational> {
        self.expansion.map(Laurent::sum_coefficients)
    }

    /// True when `c(n, e) = c(n, D - e)` for every known coefficient.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let d = self.double_index as i32;
        self.expansion
            .coefficients()
            .iter()
            .all(|c| c.terms().all(|(e, a)| c.coefficient(d - e) == *a))
    }
}

impl fmt::Display for WeakJacobiForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weight {} index {}/2: {}",
            self.weight, self.double_index, self.expansion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::integer;

    #[test]
    fn products_add_weight_and_index() {
        let a = phi_minus2_1(3);
        let c = phi_0_3_2(3);
        let ac = a.product(&c);
        assert_eq!(ac.weight(), -2);
        assert_eq!(ac.double_index(), 5);
        assert!(ac.is_symmetric());
        assert_eq!(a.pow(2).double_index(), 4);
        assert_eq!(a.pow(0), WeakJacobiForm::one(3));
    }

    #[test]
    fn modular_factor_keeps_index() {
        let e4 = eisenstein(4, 3).expect("even weight");
        let form = phi_minus2_1(3).pow(2).mul_modular(&e4, 4);
        assert_eq!(form.weight(), 0);
        assert_eq!(form.double_index(), 4);
        // q^0 of φ_{-2,1}^2 E4 is (1 - y)^4
        assert_eq!(form.coefficient(0, 2), Some(integer(6)));
        assert_eq!(form.coefficient(5, 0), None);
    }

    #[test]
    fn truncation_and_specialization() {
        let phi = phi_0_1(4);
        let cut = phi.truncate(2).expect("within precision");
        assert_eq!(cut.precision(), 2);
        assert!(phi.truncate(5).is_err());
        // φ_{0,1}(τ, 0) = 12
        assert_eq!(phi.at_y_equals_one(), Series::constant(integer(12), 4));
    }

    #[test]
    fn display_names_index() {
        let text = phi_minus2_1(1).to_string();
        assert!(text.starts_with("weight -2 index 2/2: "), "{text}");
    }
}
