//! Homogeneous spaces `G/P`, equivariant vector bundles on them, and
//! complete intersections cut out by sections of such bundles.
//!
//! Cohomology classes are [`Polynomial`]s in the ambient coordinates
//! `x_0 … x_{N-1}` of the root system of `G`: an equivariant line bundle of
//! weight `w` has first Chern class the linear form `Σ w_i x_i`. Integrals
//! are computed by Atiyah–Bott localization over the fixed points of the
//! maximal torus, which are indexed by `W/W_L`.
//!
//! # Examples
//!
//! ```
//! use elliptic_genus::homogeneous::{chern_number, HomogeneousSpace, ParabolicSubgroup};
//! use elliptic_genus::algebra::integer;
//!
//! // P^2 = SL(3)/P_1
//! let p = ParabolicSubgroup::new("A2".parse()?, "A1".parse()?, &[1])?;
//! let p2 = HomogeneousSpace::new(p);
//! assert_eq!(chern_number(&p2, &[2])?, integer(3));
//! assert_eq!(chern_number(&p2, &[1, 1])?, integer(9));
//! # Ok::<(), elliptic_genus::Error>(())
//! ```

use crate::algebra::{Polynomial, Rational};
use crate::error::Result;

mod bundle;
pub mod characteristic;
mod complete_intersection;
mod numbers;
mod parabolic;
mod space;

pub use bundle::{
    direct_sum, tensor_product, ChernBundle, EquivariantVectorBundle,
    IrreducibleEquivariantVectorBundle,
};
pub use complete_intersection::CompleteIntersection;
pub use numbers::{chern_number, euler_characteristic, ChernNumbers};
pub use parabolic::ParabolicSubgroup;
pub use space::HomogeneousSpace;

/// Identifies the base of a bundle: two bundles can be combined only when
/// their bases agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseSpace {
    /// Human-readable description of the variety.
    pub description: String,
    /// Complex dimension.
    pub dimension: usize,
}

/// A compact complex manifold on which classes can be integrated.
pub trait Variety {
    /// Complex dimension.
    fn dimension(&self) -> usize;

    /// Description used to match bundles against this variety.
    fn base(&self) -> BaseSpace;

    /// Chern classes `c_0 … c_n` of the tangent bundle.
    fn chern_classes(&self) -> Vec<Polynomial>;

    /// Integral over the fundamental class. Only the degree-`n` part of
    /// `class` contributes.
    ///
    /// # Errors
    ///
    /// Implementations report failures of exact localization.
    fn integration(&self, class: &Polynomial) -> Result<Rational>;

    /// The tangent bundle, known by its Chern classes.
    fn tangent_bundle(&self) -> ChernBundle {
        ChernBundle::new(self.base(), self.dimension(), self.chern_classes())
    }

    /// The cotangent bundle.
    fn cotangent_bundle(&self) -> ChernBundle {
        self.tangent_bundle().dual()
    }

    /// Todd classes of the tangent bundle.
    fn todd_classes(&self) -> Vec<Polynomial> {
        characteristic::todd_classes(&self.chern_classes(), self.dimension())
    }
}

/// A complex vector bundle known through its Chern classes.
pub trait VectorBundle {
    /// The variety the bundle lives on.
    fn base(&self) -> BaseSpace;

    /// Rank of the bundle.
    fn rank(&self) -> usize;

    /// Chern classes `c_0 … c_n` with `n` the base dimension.
    fn chern_classes(&self) -> Vec<Polynomial>;

    /// Total Chern class.
    fn total_chern_class(&self) -> Polynomial {
        characteristic::total(&self.chern_classes())
    }

    /// Chern character `ch_0 … ch_n`.
    fn chern_character(&self) -> Vec<Polynomial> {
        characteristic::chern_character(self.rank(), &self.chern_classes(), self.base().dimension)
    }

    /// Todd classes `td_0 … td_n`.
    fn todd_classes(&self) -> Vec<Polynomial> {
        characteristic::todd_classes(&self.chern_classes(), self.base().dimension)
    }

    /// Forgets everything but the Chern data.
    fn to_chern_bundle(&self) -> ChernBundle {
        ChernBundle::new(self.base(), self.rank(), self.chern_classes())
    }
}
