//! Integration on `G/P` by localization at torus-fixed points.

use std::fmt;
use std::sync::Arc;

use num_traits::{One, Zero};
use tracing::debug;

use super::bundle::EquivariantVectorBundle;
use super::parabolic::ParabolicSubgroup;
use super::{BaseSpace, Variety, VectorBundle};
use crate::algebra::{integer, primes, Polynomial, Rational};
use crate::error::{Error, Result};
use crate::lie::dot;

/// The generalized flag variety `G/P`.
#[derive(Clone, Debug)]
pub struct HomogeneousSpace {
    parabolic: Arc<ParabolicSubgroup>,
    tangent_weights: Vec<Vec<Rational>>,
    evaluation_points: [Vec<Rational>; 2],
}

impl PartialEq for HomogeneousSpace {
    fn eq(&self, other: &Self) -> bool {
        self.parabolic == other.parabolic
    }
}

impl HomogeneousSpace {
    /// The homogeneous space of a parabolic subgroup.
    #[must_use]
    pub fn new(parabolic: ParabolicSubgroup) -> Self {
        let system = parabolic.root_system();
        let tangent_weights = parabolic
            .tangent_roots()
            .map(|root| root.coordinates.clone())
            .collect();

        // ρ is strictly dominant; -Σ p_i ω_i with distinct primes is strictly
        // anti-dominant and shares no accidental symmetry with it.
        let dominant = system.rho();
        let mut antidominant = vec![Rational::zero(); system.ambient_dimension()];
        for (p, omega) in primes(system.rank()).into_iter().zip(system.fundamental_weights()) {
            let p = integer(p as i64);
            for (x, w) in antidominant.iter_mut().zip(omega) {
                *x -= &p * w;
            }
        }

        Self {
            parabolic: Arc::new(parabolic),
            tangent_weights,
            evaluation_points: [dominant, antidominant],
        }
    }

    /// The parabolic subgroup `P`.
    #[must_use]
    pub fn parabolic_subgroup(&self) -> &ParabolicSubgroup {
        &self.parabolic
    }

    /// Number of ambient coordinates of weights and classes.
    #[must_use]
    pub fn ambient_dimension(&self) -> usize {
        self.parabolic.root_system().ambient_dimension()
    }

    /// Tangent weights at the base point, in ambient coordinates.
    #[must_use]
    pub fn tangent_weights(&self) -> &[Vec<Rational>] {
        &self.tangent_weights
    }

    /// First Chern class of the equivariant line bundle of weight `weight`.
    #[must_use]
    pub fn class_of_weight(&self, weight: &[Rational]) -> Polynomial {
        Polynomial::linear_form(weight)
    }

    /// The tangent bundle with its torus weights.
    #[must_use]
    pub fn equivariant_tangent_bundle(&self) -> EquivariantVectorBundle {
        EquivariantVectorBundle::from_parts(
            self.clone(),
            self.tangent_weights.iter().map(|w| (w.clone(), 1)).collect(),
        )
    }

    /// Topological Euler characteristic, the number of torus-fixed points.
    #[must_use]
    pub fn euler_number(&self) -> usize {
        self.parabolic.coset_representatives().len()
    }

    fn localize(&self, top: &Polynomial, point: &[Rational]) -> Result<Rational> {
        let system = self.parabolic.root_system();
        let mut total = Rational::zero();
        for w in self.parabolic.coset_representatives() {
            let moved = w.act_inverse(system, point);
            let euler = self
                .tangent_weights
                .iter()
                .fold(Rational::one(), |acc, beta| acc * dot(beta, &moved));
            if euler.is_zero() {
                return Err(Error::DegenerateFixedPoint(w.to_string()));
            }
            total += top.evaluate(&moved) / euler;
        }
        Ok(total)
    }
}

impl Variety for HomogeneousSpace {
    fn dimension(&self) -> usize {
        self.tangent_weights.len()
    }

    fn base(&self) -> BaseSpace {
        BaseSpace {
            description: self.to_string(),
            dimension: self.dimension(),
        }
    }

    fn chern_classes(&self) -> Vec<Polynomial> {
        self.equivariant_tangent_bundle().chern_classes()
    }

    /// # Errors
    ///
    /// [`Error::InconsistentLocalization`] when the dominant and
    /// anti-dominant evaluation points give different sums.
    fn integration(&self, class: &Polynomial) -> Result<Rational> {
        let top = class.homogeneous_part(self.dimension() as u32);
        if top.is_zero() {
            return Ok(Rational::zero());
        }
        debug!(
            space = %self,
            terms = top.term_count(),
            fixed_points = self.euler_number(),
            "localizing"
        );
        let [dominant, antidominant] = &self.evaluation_points;
        let first = self.localize(&top, dominant)?;
        let second = self.localize(&top, antidominant)?;
        if first != second {
            return Err(Error::InconsistentLocalization {
                first: first.to_string(),
                second: second.to_string(),
            });
        }
        Ok(first)
    }
}

impl fmt::Display for HomogeneousSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parabolic)
    }
}
