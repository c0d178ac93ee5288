//! Elliptic genera of homogeneous spaces and of complete intersections in them.
//!
//! A generalized flag variety `G/P` is described by a Cartan type, a Levi
//! type and the crossed nodes of its Dynkin diagram. Its cohomology is
//! handled through torus-equivariant classes, and every integral is an exact
//! Atiyah–Bott localization sum over the `|W/W_L|` torus-fixed points.
//!
//! # Layers
//!
//! | Module | Content |
//! |--------|---------|
//! | [`algebra`] | rationals, polynomials, Laurent polynomials, `q`-series, linear algebra, symmetric functions |
//! | [`lie`] | Cartan types, root systems, Weyl group words, Freudenthal multiplicities |
//! | [`homogeneous`] | parabolic subgroups, `G/P`, homogeneous bundles, complete intersections, Chern numbers |
//! | [`jacobi`] | Eisenstein series, generators and bases of weak Jacobi forms |
//! | [`genus`] | the elliptic genus and the `χ_y` genus |
//!
//! # Example: the quintic threefold
//!
//! ```
//! use elliptic_genus::{
//!     chern_number, chi_y, CompleteIntersection, HomogeneousSpace,
//!     IrreducibleEquivariantVectorBundle, ParabolicSubgroup,
//! };
//! use elliptic_genus::algebra::integer;
//!
//! // P^4 = SL(5)/P_1 and the zero locus of a section of O(5)
//! let p4 = HomogeneousSpace::new(ParabolicSubgroup::new("A4".parse()?, "A3".parse()?, &[1])?);
//! let o5 = IrreducibleEquivariantVectorBundle::new(p4.clone(), &[5, 0, 0, 0])?;
//! let quintic = CompleteIntersection::new(p4, o5)?;
//!
//! assert_eq!(chern_number(&quintic, &[3])?, integer(-200));
//! assert_eq!(chi_y(&quintic)?.to_string(), "-100*y - 100*y^2");
//! # Ok::<(), elliptic_genus::Error>(())
//! ```
//!
//! # Conventions
//!
//! - Dynkin nodes are 1-indexed, in Bourbaki order.
//! - Cohomology classes are polynomials in the ambient coordinates of the
//!   root system; Chern-class polynomials use `x_{i-1}` for `c_i`.
//! - Genera are unnormalized: the `q^0` coefficient is `Σ_p χ(Ω^p)(-y)^p`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod algebra;
pub mod error;
pub mod genus;
pub mod homogeneous;
pub mod jacobi;
pub mod lie;

pub use error::{Error, Result};
pub use genus::{
    chi_y, chi_y_chernnum, elliptic_genus, elliptic_genus_chernnum,
    elliptic_genus_from_chern_numbers,
};
pub use homogeneous::{
    chern_number, euler_characteristic, ChernBundle, ChernNumbers, CompleteIntersection,
    EquivariantVectorBundle, HomogeneousSpace, IrreducibleEquivariantVectorBundle,
    ParabolicSubgroup, Variety, VectorBundle,
};
pub use jacobi::{WeakJacobiForm, JacobiSeries};
pub use lie::{CartanType, LeviType};
