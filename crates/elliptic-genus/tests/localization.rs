//! Localization integration tests.
//!
//! Checks integrals on flag varieties of every supported type against
//! classical values: Euler numbers, degrees of Grassmannians, Chern numbers
//! of projective spaces, and the Weyl-group count of fixed points.

use elliptic_genus::algebra::{binomial, integer, Rational};
use elliptic_genus::{
    chern_number, CartanType, ChernNumbers, HomogeneousSpace, ParabolicSubgroup, Variety,
};

fn space(group: &str, levi: &str, crossed: &[usize]) -> HomogeneousSpace {
    let p = ParabolicSubgroup::new(
        group.parse().expect("valid group"),
        levi.parse().expect("valid levi"),
        crossed,
    )
    .expect("valid parabolic");
    HomogeneousSpace::new(p)
}

// =============================================================================
// Fixed points
// =============================================================================

#[test]
fn fixed_points_count_weyl_cosets() {
    for (group, levi, crossed) in [
        ("A4", "A1xA2", &[2][..]),
        ("B3", "A2", &[3]),
        ("B3", "B2", &[1]),
        ("C3", "C2", &[1]),
        ("C3", "A2", &[3]),
        ("D4", "A3", &[1]),
        ("D4", "A1xA1xA1", &[2]),
        ("G2", "A1", &[2]),
        ("A3", "", &[1, 2, 3]),
    ] {
        let x = space(group, levi, crossed);
        let p = x.parabolic_subgroup();
        let expected = p.weyl_group_order() / p.levi_weyl_group_order();
        assert_eq!(
            x.euler_number(),
            usize::try_from(expected).expect("small group"),
            "{group}/{levi}"
        );
        let top = chern_number(&x, &[x.dimension()]).expect("integrable");
        assert_eq!(top, integer(x.euler_number() as i64), "{group}/{levi}");
    }
}

#[test]
fn quadrics_and_their_euler_numbers() {
    // Q^{2n-1} = B_n / P_1 and Q^{2n-2} = D_n / P_1
    let q5 = space("B3", "B2", &[1]);
    assert_eq!(q5.dimension(), 5);
    assert_eq!(q5.euler_number(), 6);
    let q6 = space("D4", "A3", &[1]);
    assert_eq!(q6.dimension(), 6);
    assert_eq!(q6.euler_number(), 8);
}

// =============================================================================
// Chern numbers
// =============================================================================

#[test]
fn projective_space_chern_numbers() {
    // c(P^n) = (1 + h)^{n+1}, so c_λ = Π C(n+1, λ_i)
    for n in 1..=4usize {
        let group: CartanType = format!("A{n}").parse().expect("valid group");
        let pn = HomogeneousSpace::new(ParabolicSubgroup::from_crossed_nodes(group, &[1]).expect("P^n"));
        let numbers = ChernNumbers::compute(&pn).expect("integrable");
        for (lambda, value) in numbers.iter() {
            let expected = lambda.iter().fold(integer(1), |acc, &d| {
                acc * Rational::from_integer(binomial(n + 1, d))
            });
            assert_eq!(value, &expected, "P^{n} {lambda:?}");
        }
    }
}

#[test]
fn grassmannian_gr_2_4() {
    let gr = space("A3", "A1xA1", &[2]);
    assert_eq!(chern_number(&gr, &[1, 1, 1, 1]).expect("integrable"), integer(512));
    assert_eq!(chern_number(&gr, &[4]).expect("integrable"), integer(6));
    assert_eq!(chern_number(&gr, &[2, 2]).expect("integrable"), integer(98));
}

#[test]
fn lagrangian_grassmannian_is_a_quadric() {
    // LG(2,4) = C2/P_2 is the 3-dimensional quadric: c1 = 3h, h^3 = 2
    let lg = space("C2", "A1", &[2]);
    assert_eq!(lg.dimension(), 3);
    assert_eq!(chern_number(&lg, &[1, 1, 1]).expect("integrable"), integer(54));
    assert_eq!(chern_number(&lg, &[3]).expect("integrable"), integer(4));
}

#[test]
fn g2_adjoint_variety() {
    // G2/P_2 is 5-dimensional with 6 fixed points and index 3
    let x = space("G2", "A1", &[2]);
    assert_eq!(x.dimension(), 5);
    assert_eq!(chern_number(&x, &[5]).expect("integrable"), integer(6));
}
