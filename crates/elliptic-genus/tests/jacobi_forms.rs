//! Weak Jacobi forms: generators, bases and Eisenstein series.

use elliptic_genus::algebra::{fraction, integer, Rational, Series};
use elliptic_genus::jacobi::{
    basis_half_integral, basis_integral, eisenstein, phi_0_1, phi_0_3_2, phi_minus2_1,
};
use elliptic_genus::Error;

#[test]
fn generator_weights_and_indices() {
    let a = phi_minus2_1(4);
    let b = phi_0_1(4);
    let c = phi_0_3_2(4);
    assert_eq!((a.weight(), a.double_index()), (-2, 2));
    assert_eq!((b.weight(), b.double_index()), (0, 2));
    assert_eq!((c.weight(), c.double_index()), (0, 3));
}

#[test]
fn integral_basis_sizes() {
    let sizes: Vec<usize> = (1..=4)
        .map(|m| basis_integral(m, 2).expect("basis").len())
        .collect();
    assert_eq!(sizes, vec![1, 2, 3, 4]);
}

#[test]
fn basis_forms_are_symmetric_in_y() {
    for d in 2..=8 {
        for form in basis_half_integral(d, 4).expect("basis") {
            assert!(form.is_symmetric(), "D = {d}: {form}");
        }
    }
}

#[test]
fn basis_forms_at_y_equals_one_are_constant() {
    // a weight 0 weak Jacobi form at z = 0 is a modular form of weight 0
    for d in 2..=6 {
        for form in basis_half_integral(d, 4).expect("basis") {
            let at_one = form.at_y_equals_one();
            let constant = at_one.coefficient(0).cloned().expect("precision 4");
            assert_eq!(at_one, Series::constant(constant, 4), "D = {d}: {form}");
        }
    }
}

#[test]
fn discriminant_from_eisenstein_series() {
    // Δ = (E4^3 - E6^2) / 1728 = q - 24 q^2 + 252 q^3 - 1472 q^4
    let e4 = eisenstein(4, 5).expect("even weight");
    let e6 = eisenstein(6, 5).expect("even weight");
    let delta = (e4.pow(3) - e6.pow(2)).scale(&fraction(1, 1728));
    let expected: Vec<Rational> = [0, 1, -24, 252, -1472].into_iter().map(integer).collect();
    assert_eq!(delta.coefficients(), expected.as_slice());
}

#[test]
fn eisenstein_weights_are_validated() {
    assert_eq!(eisenstein(1, 3), Err(Error::InvalidEisensteinWeight(1)));
    assert_eq!(eisenstein(7, 3), Err(Error::InvalidEisensteinWeight(7)));
    assert!(eisenstein(12, 3).is_ok());
}
