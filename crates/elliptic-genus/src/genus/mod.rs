//! Elliptic genera and `χ_y` genera.
//!
//! The genus is returned unnormalized: as a `q`-series whose `q^0`
//! coefficient is the `χ_y` genus `Σ_p χ(Ω^p) (-y)^p`, which is
//! `y^{n/2}` times the weak Jacobi form of index `n/2`.
//!
//! When every Chern number containing `c_1` vanishes the genus is a weak
//! Jacobi form of weight 0, so it is found from a few `q`-powers of the
//! direct expansion and then expanded from the Jacobi basis to any
//! precision. Otherwise the direct expansion is used throughout.
//!
//! # Examples
//!
//! ```
//! use elliptic_genus::genus::chi_y;
//! use elliptic_genus::homogeneous::{HomogeneousSpace, ParabolicSubgroup};
//!
//! let p1 = HomogeneousSpace::new(ParabolicSubgroup::from_crossed_nodes("A1".parse()?, &[1])?);
//! assert_eq!(chi_y(&p1)?.to_string(), "1 + y");
//! # Ok::<(), elliptic_genus::Error>(())
//! ```

use tracing::debug;

use crate::algebra::{Laurent, Rational};
use crate::error::Result;
use crate::homogeneous::{ChernNumbers, Variety};
use crate::jacobi::JacobiSeries;

mod expansion;
pub mod fit;

pub use expansion::{
    chi_y_chernnum, elliptic_genus_chernnum, elliptic_genus_from_chern_numbers,
    root_factor_coefficients,
};

/// The elliptic genus of `variety`, known modulo `q^{k+1}`.
///
/// # Errors
///
/// - integration errors while computing Chern numbers;
/// - [`crate::Error::NotJacobiForm`] or [`crate::Error::Underdetermined`]
///   when a variety with vanishing `c_1` numbers fails the Jacobi fit.
pub fn elliptic_genus<V: Variety + ?Sized>(variety: &V, k: usize) -> Result<JacobiSeries> {
    let numbers = ChernNumbers::compute(variety)?;
    elliptic_genus_of_numbers(&numbers, k)
}

/// The elliptic genus from Chern numbers alone, taking the Jacobi route
/// whenever the `c_1` numbers vanish.
///
/// # Errors
///
/// Same as [`elliptic_genus`].
pub fn elliptic_genus_of_numbers(numbers: &ChernNumbers, k: usize) -> Result<JacobiSeries> {
    let dim = numbers.dimension();
    if !numbers.first_chern_class_vanishes() {
        debug!(dim, k, "direct expansion");
        return elliptic_genus_from_chern_numbers(numbers, k);
    }
    debug!(dim, k, "fitting in the weak Jacobi basis");
    let rows = elliptic_genus_from_chern_numbers(numbers, dim)?;
    let coefficients = fit::fit_coefficients(&rows, dim)?;
    fit::combine(&coefficients, dim, k + 1)
}

/// The `χ_y` genus `Σ_p χ(Ω^p) (-y)^p`.
///
/// # Errors
///
/// Propagates integration errors.
pub fn chi_y<V: Variety + ?Sized>(variety: &V) -> Result<Laurent<Rational>> {
    let numbers = ChernNumbers::compute(variety)?;
    let genus = elliptic_genus_from_chern_numbers(&numbers, 0)?;
    Ok(genus.coefficient(0).cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{integer, Series};
    use crate::homogeneous::{
        CompleteIntersection, HomogeneousSpace, IrreducibleEquivariantVectorBundle,
        ParabolicSubgroup,
    };

    fn hypersurface(n: usize, degree: i64) -> CompleteIntersection {
        let group = format!("A{n}").parse().expect("valid group");
        let space = HomogeneousSpace::new(ParabolicSubgroup::from_crossed_nodes(group, &[1]).expect("P^n"));
        let mut hw = vec![0; n];
        hw[0] = degree;
        let bundle = IrreducibleEquivariantVectorBundle::new(space.clone(), &hw).expect("O(d)");
        CompleteIntersection::new(space, bundle).expect("hypersurface")
    }

    #[test]
    fn plane_cubic_has_vanishing_genus() {
        let curve = hypersurface(2, 3);
        let genus = elliptic_genus(&curve, 3).expect("Jacobi fit");
        assert_eq!(genus, Series::zero(4));
    }

    #[test]
    fn jacobi_route_agrees_with_direct_expansion() {
        let quartic = hypersurface(3, 4);
        let numbers = ChernNumbers::compute(&quartic).expect("integrable");
        let fitted = elliptic_genus_of_numbers(&numbers, 3).expect("Jacobi fit");
        let direct = elliptic_genus_from_chern_numbers(&numbers, 3).expect("expansion");
        assert_eq!(fitted, direct);
    }

    #[test]
    fn chi_y_of_projective_plane() {
        let p2 = HomogeneousSpace::new(
            ParabolicSubgroup::from_crossed_nodes("A2".parse().expect("A2"), &[1]).expect("P^2"),
        );
        let chi = chi_y(&p2).expect("integrable");
        assert_eq!(chi, Laurent::from_terms([(0, integer(1)), (1, integer(1)), (2, integer(1))]));
        // not Calabi-Yau: the genus is the direct expansion, still χ_top at y = 1
        let genus = elliptic_genus(&p2, 2).expect("expansion");
        let at_one = genus.map(Laurent::sum_coefficients);
        assert_eq!(at_one, Series::constant(integer(3), 3));
    }
}
