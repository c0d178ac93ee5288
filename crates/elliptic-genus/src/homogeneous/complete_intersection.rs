//! Zero loci of regular sections of homogeneous bundles.

use std::fmt;

use num_traits::Zero;

use super::bundle::{ChernBundle, EquivariantVectorBundle};
use super::characteristic;
use super::space::HomogeneousSpace;
use super::{BaseSpace, Variety, VectorBundle};
use crate::algebra::{Polynomial, Rational};
use crate::error::{Error, Result};

/// The zero locus `X ⊂ G/P` of a regular section of `E`, so that
/// `T_X = T_{G/P}|_X - E|_X` and `∫_X α = ∫_{G/P} α · c_top(E)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteIntersection {
    ambient: HomogeneousSpace,
    bundle: EquivariantVectorBundle,
    dimension: usize,
}

impl CompleteIntersection {
    /// The complete intersection of `bundle` in `ambient`.
    ///
    /// # Errors
    ///
    /// - [`Error::BaseMismatch`] when the bundle lives on another space;
    /// - [`Error::RankExceedsDimension`] when the rank exceeds `dim ambient`.
    pub fn new(
        ambient: HomogeneousSpace,
        bundle: impl Into<EquivariantVectorBundle>,
    ) -> Result<Self> {
        let bundle = bundle.into();
        if bundle.space() != &ambient {
            return Err(Error::BaseMismatch {
                left: ambient.to_string(),
                right: bundle.space().to_string(),
            });
        }
        let rank = bundle.rank();
        let dimension = ambient
            .dimension()
            .checked_sub(rank)
            .ok_or(Error::RankExceedsDimension {
                rank,
                dimension: ambient.dimension(),
            })?;
        Ok(Self {
            ambient,
            bundle,
            dimension,
        })
    }

    /// The ambient homogeneous space.
    #[must_use]
    pub fn ambient(&self) -> &HomogeneousSpace {
        &self.ambient
    }

    /// The bundle whose section cuts out the intersection.
    #[must_use]
    pub fn bundle(&self) -> &EquivariantVectorBundle {
        &self.bundle
    }

    /// Restriction of a bundle on the ambient space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaseMismatch`] when `bundle` does not live on the ambient space.
    pub fn restrict<B: VectorBundle + ?Sized>(&self, bundle: &B) -> Result<ChernBundle> {
        let ambient_base = self.ambient.base();
        let base = bundle.base();
        if base != ambient_base {
            return Err(Error::BaseMismatch {
                left: ambient_base.description,
                right: base.description,
            });
        }
        Ok(ChernBundle::new(self.base(), bundle.rank(), bundle.chern_classes()))
    }
}

impl Variety for CompleteIntersection {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn base(&self) -> BaseSpace {
        BaseSpace {
            description: self.to_string(),
            dimension: self.dimension,
        }
    }

    /// `c(T_{G/P}) · c(E)^{-1}`, cut at the dimension of the intersection.
    fn chern_classes(&self) -> Vec<Polynomial> {
        let inverse = characteristic::graded_inverse(&self.bundle.chern_classes(), self.dimension);
        characteristic::graded_product(&self.ambient.chern_classes(), &inverse, self.dimension)
    }

    fn integration(&self, class: &Polynomial) -> Result<Rational> {
        let top = class.homogeneous_part(self.dimension as u32);
        if top.is_zero() {
            return Ok(Rational::zero());
        }
        self.ambient.integration(&(&top * &self.bundle.euler_class()))
    }
}

impl fmt::Display for CompleteIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "complete intersection of {:?} in {}",
            self.bundle
                .weights()
                .iter()
                .map(|(w, m)| format!(
                    "{}^{m}",
                    w.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
                ))
                .collect::<Vec<_>>(),
            self.ambient
        )
    }
}
