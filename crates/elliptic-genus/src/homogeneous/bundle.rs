//! Vector bundles: homogeneous bundles given by torus weights, irreducible
//! homogeneous bundles given by a highest weight, and bundles known only by
//! their Chern classes.

use std::collections::BTreeMap;
use std::fmt;

use num_traits::{One, Zero};

use super::characteristic;
use super::space::HomogeneousSpace;
use super::{BaseSpace, Variety, VectorBundle};
use crate::algebra::{Polynomial, Rational};
use crate::error::{Error, Result};

fn check_bases(left: &BaseSpace, right: &BaseSpace) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(Error::BaseMismatch {
            left: left.description.clone(),
            right: right.description.clone(),
        })
    }
}

/// A homogeneous vector bundle `G ×_P V` recorded by the multiset of torus
/// weights of `V`.
#[derive(Clone, Debug, PartialEq)]
pub struct EquivariantVectorBundle {
    space: HomogeneousSpace,
    weights: BTreeMap<Vec<Rational>, usize>,
}

impl EquivariantVectorBundle {
    /// A bundle with the given weights and multiplicities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] when a weight does not have the
    /// ambient dimension of `space`.
    pub fn new(space: HomogeneousSpace, weights: BTreeMap<Vec<Rational>, usize>) -> Result<Self> {
        let expected = space.ambient_dimension();
        if let Some(bad) = weights.keys().find(|w| w.len() != expected) {
            return Err(Error::InvalidWeight {
                weight: Vec::new(),
                reason: format!(
                    "weight {:?} has {} coordinates, expected {expected}",
                    bad.iter().map(ToString::to_string).collect::<Vec<_>>(),
                    bad.len()
                ),
            });
        }
        Ok(Self::from_parts(space, weights))
    }

    /// A bundle from a list of weights, repeated weights counted with multiplicity.
    ///
    /// # Errors
    ///
    /// Same as [`EquivariantVectorBundle::new`].
    pub fn from_weights(
        space: HomogeneousSpace,
        weights: impl IntoIterator<Item = Vec<Rational>>,
    ) -> Result<Self> {
        let mut counted = BTreeMap::new();
        for w in weights {
            *counted.entry(w).or_insert(0) += 1;
        }
        Self::new(space, counted)
    }

    pub(crate) fn from_parts(
        space: HomogeneousSpace,
        mut weights: BTreeMap<Vec<Rational>, usize>,
    ) -> Self {
        weights.retain(|_, m| *m > 0);
        Self { space, weights }
    }

    /// The homogeneous space the bundle lives on.
    #[must_use]
    pub fn space(&self) -> &HomogeneousSpace {
        &self.space
    }

    /// Torus weights with multiplicities.
    #[must_use]
    pub fn weights(&self) -> &BTreeMap<Vec<Rational>, usize> {
        &self.weights
    }

    /// `E ⊕ F`: the union of the weight multisets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaseMismatch`] when the bundles live on different spaces.
    pub fn direct_sum(&self, other: &Self) -> Result<Self> {
        self.check_space(other)?;
        let mut weights = self.weights.clone();
        for (w, m) in &other.weights {
            *weights.entry(w.clone()).or_insert(0) += m;
        }
        Ok(Self::from_parts(self.space.clone(), weights))
    }

    /// `E ⊗ F`: all pairwise sums of weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaseMismatch`] when the bundles live on different spaces.
    pub fn tensor_product(&self, other: &Self) -> Result<Self> {
        self.check_space(other)?;
        let mut weights = BTreeMap::new();
        for (a, ma) in &self.weights {
            for (b, mb) in &other.weights {
                let sum: Vec<Rational> = a.iter().zip(b).map(|(x, y)| x + y).collect();
                *weights.entry(sum).or_insert(0) += ma * mb;
            }
        }
        Ok(Self::from_parts(self.space.clone(), weights))
    }

    /// `E*`: negated weights.
    #[must_use]
    pub fn dual(&self) -> Self {
        let weights = self
            .weights
            .iter()
            .map(|(w, m)| (w.iter().map(|x| -x).collect(), *m))
            .collect();
        Self::from_parts(self.space.clone(), weights)
    }

    /// Top Chern class `Π w^m`, without truncation.
    #[must_use]
    pub fn euler_class(&self) -> Polynomial {
        self.weights.iter().fold(Polynomial::one(), |acc, (w, m)| {
            &acc * &Polynomial::linear_form(w).pow(*m as u32)
        })
    }

    fn check_space(&self, other: &Self) -> Result<()> {
        if self.space == other.space {
            Ok(())
        } else {
            Err(Error::BaseMismatch {
                left: self.space.to_string(),
                right: other.space.to_string(),
            })
        }
    }
}

impl VectorBundle for EquivariantVectorBundle {
    fn base(&self) -> BaseSpace {
        self.space.base()
    }

    fn rank(&self) -> usize {
        self.weights.values().sum()
    }

    /// Elementary symmetric polynomials of the weights, up to the base dimension.
    fn chern_classes(&self) -> Vec<Polynomial> {
        let dim = self.space.dimension();
        let bound = dim as u32;
        let mut total = Polynomial::one();
        for (w, m) in &self.weights {
            let factor = Polynomial::one() + Polynomial::linear_form(w);
            for _ in 0..*m {
                total = total.mul_truncated(&factor, bound);
            }
        }
        characteristic::graded_parts(&total, dim)
    }
}

impl fmt::Display for EquivariantVectorBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equivariant bundle of rank {} on {}", self.rank(), self.space)
    }
}

/// The homogeneous bundle induced by an irreducible `L`-representation.
#[derive(Clone, Debug, PartialEq)]
pub struct IrreducibleEquivariantVectorBundle {
    highest_weight: Vec<i64>,
    bundle: EquivariantVectorBundle,
}

impl IrreducibleEquivariantVectorBundle {
    /// The bundle with highest weight `Σ highest_weight[i] ω_{i+1}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] when the weight has the wrong length
    /// or is not dominant for the Levi factor.
    pub fn new(space: HomogeneousSpace, highest_weight: &[i64]) -> Result<Self> {
        let weights = space
            .parabolic_subgroup()
            .weight_multiplicities(highest_weight)?;
        Ok(Self {
            highest_weight: highest_weight.to_vec(),
            bundle: EquivariantVectorBundle::from_parts(space, weights),
        })
    }

    /// The highest weight in fundamental-weight coordinates.
    #[must_use]
    pub fn highest_weight(&self) -> &[i64] {
        &self.highest_weight
    }

    /// The underlying weight data.
    #[must_use]
    pub fn as_equivariant(&self) -> &EquivariantVectorBundle {
        &self.bundle
    }
}

impl From<IrreducibleEquivariantVectorBundle> for EquivariantVectorBundle {
    fn from(irreducible: IrreducibleEquivariantVectorBundle) -> Self {
        irreducible.bundle
    }
}

impl VectorBundle for IrreducibleEquivariantVectorBundle {
    fn base(&self) -> BaseSpace {
        self.bundle.base()
    }

    fn rank(&self) -> usize {
        self.bundle.rank()
    }

    fn chern_classes(&self) -> Vec<Polynomial> {
        self.bundle.chern_classes()
    }
}

impl fmt::Display for IrreducibleEquivariantVectorBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "irreducible bundle with highest weight {:?} on {}",
            self.highest_weight,
            self.bundle.space()
        )
    }
}

/// A bundle known only by its rank and Chern classes.
#[derive(Clone, Debug, PartialEq)]
pub struct ChernBundle {
    base: BaseSpace,
    rank: usize,
    chern_classes: Vec<Polynomial>,
}

impl ChernBundle {
    /// A bundle with the given Chern classes, padded with zeros or cut to
    /// the base dimension.
    #[must_use]
    pub fn new(base: BaseSpace, rank: usize, mut chern_classes: Vec<Polynomial>) -> Self {
        chern_classes.resize(base.dimension + 1, Polynomial::zero());
        Self {
            base,
            rank,
            chern_classes,
        }
    }

    /// The trivial bundle of the given rank.
    #[must_use]
    pub fn trivial(base: BaseSpace, rank: usize) -> Self {
        Self::new(base, rank, vec![Polynomial::one()])
    }

    /// The dual bundle: `c_i(E*) = (-1)^i c_i(E)`.
    #[must_use]
    pub fn dual(&self) -> Self {
        let chern_classes = self
            .chern_classes
            .iter()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.clone() } else { -c })
            .collect();
        Self {
            base: self.base.clone(),
            rank: self.rank,
            chern_classes,
        }
    }
}

impl VectorBundle for ChernBundle {
    fn base(&self) -> BaseSpace {
        self.base.clone()
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn chern_classes(&self) -> Vec<Polynomial> {
        self.chern_classes.clone()
    }
}

/// `E ⊕ F` for any two bundles on the same base: `c(E ⊕ F) = c(E) c(F)`.
///
/// # Errors
///
/// Returns [`Error::BaseMismatch`] when the bases differ.
pub fn direct_sum<E, F>(left: &E, right: &F) -> Result<ChernBundle>
where
    E: VectorBundle + ?Sized,
    F: VectorBundle + ?Sized,
{
    let base = left.base();
    check_bases(&base, &right.base())?;
    let classes = characteristic::graded_product(
        &left.chern_classes(),
        &right.chern_classes(),
        base.dimension,
    );
    Ok(ChernBundle::new(base, left.rank() + right.rank(), classes))
}

/// `E ⊗ F` for any two bundles on the same base: `ch(E ⊗ F) = ch(E) ch(F)`.
///
/// # Errors
///
/// Returns [`Error::BaseMismatch`] when the bases differ.
pub fn tensor_product<E, F>(left: &E, right: &F) -> Result<ChernBundle>
where
    E: VectorBundle + ?Sized,
    F: VectorBundle + ?Sized,
{
    let base = left.base();
    check_bases(&base, &right.base())?;
    let character = characteristic::graded_product(
        &left.chern_character(),
        &right.chern_character(),
        base.dimension,
    );
    let classes = characteristic::chern_from_character(&character, base.dimension);
    Ok(ChernBundle::new(base, left.rank() * right.rank(), classes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{integer, Coefficient};
    use crate::homogeneous::ParabolicSubgroup;

    fn projective(n: usize) -> HomogeneousSpace {
        let group = format!("A{n}").parse().expect("valid group");
        let p = ParabolicSubgroup::from_crossed_nodes(group, &[1]).expect("valid parabolic");
        HomogeneousSpace::new(p)
    }

    fn line(space: &HomogeneousSpace, k: i64) -> IrreducibleEquivariantVectorBundle {
        let mut hw = vec![0; space.parabolic_subgroup().root_system().rank()];
        hw[0] = k;
        IrreducibleEquivariantVectorBundle::new(space.clone(), &hw).expect("line bundle")
    }

    #[test]
    fn line_bundles_on_projective_space() {
        let p2 = projective(2);
        let o2 = line(&p2, 2);
        assert_eq!(o2.rank(), 1);
        assert_eq!(o2.chern_classes()[1], Polynomial::variable(0).scale(&integer(2)));
        assert!(o2.chern_classes()[2].is_zero());
    }

    #[test]
    fn tangent_bundle_of_p2() {
        let p2 = projective(2);
        let t = p2.equivariant_tangent_bundle();
        assert_eq!(t.rank(), 2);
        assert_eq!(p2.integration(&t.chern_classes()[1].pow(2)).expect("integrable"), integer(9));
        assert_eq!(p2.integration(&t.euler_class()).expect("integrable"), integer(3));
    }

    #[test]
    fn weight_operations_match_chern_operations() {
        let p3 = projective(3);
        let a = line(&p3, 1).as_equivariant().clone();
        let b = p3.equivariant_tangent_bundle();
        let sum = a.direct_sum(&b).expect("same base");
        let product = a.tensor_product(&b).expect("same base");
        assert_eq!(sum.rank(), 4);
        assert_eq!(product.rank(), 3);

        let generic_sum = direct_sum(&a, &b).expect("same base");
        let generic_product = tensor_product(&a, &b).expect("same base");
        assert_eq!(sum.chern_classes(), generic_sum.chern_classes());
        assert_eq!(product.chern_classes(), generic_product.chern_classes());
        assert_eq!(generic_product.rank(), 3);
    }

    #[test]
    fn dual_flips_odd_classes() {
        let p2 = projective(2);
        let t = p2.equivariant_tangent_bundle();
        let dual_weights = t.dual();
        let dual_chern = t.to_chern_bundle().dual();
        assert_eq!(dual_weights.chern_classes(), dual_chern.chern_classes());
    }

    #[test]
    fn bases_must_agree() {
        let p2 = projective(2);
        let p3 = projective(3);
        let a = p2.equivariant_tangent_bundle();
        let b = p3.equivariant_tangent_bundle();
        assert!(matches!(a.direct_sum(&b), Err(Error::BaseMismatch { .. })));
        assert!(matches!(tensor_product(&a, &b), Err(Error::BaseMismatch { .. })));
    }

    #[test]
    fn weights_must_have_ambient_length() {
        let p2 = projective(2);
        let bad = EquivariantVectorBundle::from_weights(p2, [vec![integer(1)]]);
        assert!(matches!(bad, Err(Error::InvalidWeight { .. })));
    }
}
