//! Calabi–Yau complete intersections.
//!
//! The quintic threefold in `P^4` and the quartic K3 surface in `P^3` have
//! well-known invariants: their elliptic genera are `χ/2 · φ_{0,3/2}` and
//! `2 φ_{0,1}` respectively.

use elliptic_genus::algebra::{integer, Laurent, Rational, Series};
use elliptic_genus::jacobi::{phi_0_1, phi_0_3_2};
use elliptic_genus::{
    chern_number, chi_y, elliptic_genus, elliptic_genus_from_chern_numbers, euler_characteristic,
    ChernNumbers, CompleteIntersection, HomogeneousSpace, IrreducibleEquivariantVectorBundle,
    ParabolicSubgroup, Variety, VectorBundle,
};

fn projective(n: usize) -> HomogeneousSpace {
    let group = format!("A{n}").parse().expect("valid group");
    let levi = format!("A{}", n - 1).parse().expect("valid levi");
    HomogeneousSpace::new(ParabolicSubgroup::new(group, levi, &[1]).expect("P^n"))
}

fn line(space: &HomogeneousSpace, k: i64) -> IrreducibleEquivariantVectorBundle {
    let mut hw = vec![0; space.parabolic_subgroup().root_system().rank()];
    hw[0] = k;
    IrreducibleEquivariantVectorBundle::new(space.clone(), &hw).expect("line bundle")
}

fn quintic() -> CompleteIntersection {
    let p4 = projective(4);
    CompleteIntersection::new(p4.clone(), line(&p4, 5)).expect("quintic")
}

fn quartic() -> CompleteIntersection {
    let p3 = projective(3);
    CompleteIntersection::new(p3.clone(), line(&p3, 4)).expect("quartic")
}

fn laurent(pairs: &[(i32, i64)]) -> Laurent<Rational> {
    Laurent::from_terms(pairs.iter().map(|&(e, c)| (e, integer(c))))
}

// =============================================================================
// Quintic threefold
// =============================================================================

#[test]
fn quintic_invariants() {
    let x = quintic();
    assert_eq!(x.dimension(), 3);
    assert_eq!(chern_number(&x, &[3]).expect("integrable"), integer(-200));
    assert_eq!(
        euler_characteristic(&x, &x.tangent_bundle()).expect("integrable"),
        integer(-100)
    );
    // h^0(O(1)) = 5 on the quintic
    let h = x.restrict(&line(x.ambient(), 1)).expect("restrictable");
    assert_eq!(euler_characteristic(&x, &h).expect("integrable"), integer(5));
}

#[test]
fn quintic_chi_y() {
    let chi = chi_y(&quintic()).expect("integrable");
    assert_eq!(chi, laurent(&[(1, -100), (2, -100)]));
}

#[test]
fn quintic_elliptic_genus() {
    let x = quintic();
    let genus = elliptic_genus(&x, 3).expect("Jacobi fit");
    let expected = phi_0_3_2(4).expansion().scale(&integer(-100));
    assert_eq!(genus, expected);
    assert_eq!(
        genus.coefficient(1),
        Some(&laurent(&[(-1, 100), (1, -100), (2, -100), (4, 100)]))
    );
    // at y = 1 the genus is the Euler number
    let at_one = genus.map(Laurent::sum_coefficients);
    assert_eq!(at_one, Series::constant(integer(-200), 4));
}

#[test]
fn quintic_direct_expansion_matches_the_jacobi_form() {
    let numbers = ChernNumbers::compute(&quintic()).expect("integrable");
    assert!(numbers.first_chern_class_vanishes());
    let direct = elliptic_genus_from_chern_numbers(&numbers, 2).expect("expansion");
    assert_eq!(direct, phi_0_3_2(3).expansion().scale(&integer(-100)));
}

// =============================================================================
// K3 surface
// =============================================================================

#[test]
fn k3_elliptic_genus() {
    let k3 = quartic();
    assert_eq!(chern_number(&k3, &[2]).expect("integrable"), integer(24));
    assert_eq!(chern_number(&k3, &[1, 1]).expect("integrable"), integer(0));
    let genus = elliptic_genus(&k3, 2).expect("Jacobi fit");
    assert_eq!(genus, phi_0_1(3).expansion().scale(&integer(2)));
    assert_eq!(genus.coefficient(0), Some(&laurent(&[(0, 2), (1, 20), (2, 2)])));
}

#[test]
fn k3_structure_sheaf_and_tangent_bundle() {
    let k3 = quartic();
    let trivial = elliptic_genus::ChernBundle::trivial(k3.base(), 1);
    assert_eq!(euler_characteristic(&k3, &trivial).expect("integrable"), integer(2));
    // χ(T) = -h^{1,1} = -20
    assert_eq!(
        euler_characteristic(&k3, &k3.tangent_bundle()).expect("integrable"),
        integer(-20)
    );
    assert_eq!(k3.tangent_bundle().rank(), 2);
}
