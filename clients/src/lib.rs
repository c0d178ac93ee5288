//! Shared argument handling for the `ellgen` client.
//!
//! A variety on the command line is a homogeneous space `G/P`, optionally
//! cut down to the zero locus of a generic section of a direct sum of
//! irreducible homogeneous bundles:
//!
//! ```text
//! ellgen chi-y --group A4 --crossed 1 --section 5,0,0,0
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use elliptic_genus::algebra::{Laurent, Rational, Series};
use elliptic_genus::{
    CartanType, ChernBundle, CompleteIntersection, EquivariantVectorBundle, HomogeneousSpace,
    IrreducibleEquivariantVectorBundle, LeviType, ParabolicSubgroup, Variety, VectorBundle,
};
use serde::Serialize;
use tracing::info;

/// A highest weight in fundamental-weight coordinates, written `a,b,c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Weight(pub Vec<i64>);

impl FromStr for Weight {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.split(',')
            .map(|part| {
                part.trim()
                    .parse::<i64>()
                    .map_err(|e| format!("bad weight entry `{part}`: {e}"))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Weight)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(i64::to_string).collect();
        write!(f, "({})", parts.join(","))
    }
}

/// Flags selecting a variety.
#[derive(Args, Clone, Debug)]
pub struct VarietyArgs {
    /// Cartan type of the group, e.g. `A4`, `C3`, `G2`.
    #[arg(long)]
    pub group: CartanType,

    /// Levi type, e.g. `A1xA2`; derived from the crossed nodes when omitted.
    #[arg(long)]
    pub levi: Option<LeviType>,

    /// Crossed Dynkin nodes, 1-indexed, comma separated.
    #[arg(long, value_delimiter = ',', required = true)]
    pub crossed: Vec<usize>,

    /// Highest weight of a bundle whose generic section cuts out the
    /// variety; repeat for a complete intersection.
    #[arg(long = "section")]
    pub sections: Vec<Weight>,
}

/// A variety built from [`VarietyArgs`].
#[derive(Debug)]
pub enum Target {
    /// The homogeneous space itself.
    Space(HomogeneousSpace),
    /// A complete intersection in it.
    Intersection(CompleteIntersection),
}

impl VarietyArgs {
    /// Builds the homogeneous space and, if sections were given, the
    /// complete intersection.
    ///
    /// # Errors
    ///
    /// Fails when the group data is inconsistent, a weight is invalid, or the
    /// sections have more total rank than the dimension.
    pub fn build(&self) -> Result<Target> {
        let parabolic = match &self.levi {
            Some(levi) => ParabolicSubgroup::new(self.group, levi.clone(), &self.crossed),
            None => ParabolicSubgroup::from_crossed_nodes(self.group, &self.crossed),
        }
        .context("invalid parabolic subgroup")?;
        let space = HomogeneousSpace::new(parabolic);
        info!(space = %space, fixed_points = space.euler_number(), "built homogeneous space");

        let mut bundle: Option<EquivariantVectorBundle> = None;
        for weight in &self.sections {
            let summand = IrreducibleEquivariantVectorBundle::new(space.clone(), &weight.0)
                .with_context(|| format!("invalid section weight {weight}"))?;
            bundle = Some(match bundle {
                None => summand.into(),
                Some(sum) => sum.direct_sum(summand.as_equivariant())?,
            });
        }
        match bundle {
            None => Ok(Target::Space(space)),
            Some(bundle) => {
                let x = CompleteIntersection::new(space, bundle)
                    .context("invalid complete intersection")?;
                info!(variety = %x, dimension = x.dimension(), "built complete intersection");
                Ok(Target::Intersection(x))
            }
        }
    }
}

impl Target {
    /// The variety to integrate over.
    #[must_use]
    pub fn variety(&self) -> &dyn Variety {
        match self {
            Self::Space(space) => space,
            Self::Intersection(x) => x,
        }
    }

    /// The ambient homogeneous space.
    #[must_use]
    pub fn ambient(&self) -> &HomogeneousSpace {
        match self {
            Self::Space(space) => space,
            Self::Intersection(x) => x.ambient(),
        }
    }

    /// The irreducible homogeneous bundle of the given highest weight,
    /// restricted to the variety.
    ///
    /// # Errors
    ///
    /// Fails when the weight is not valid for the ambient space.
    pub fn bundle(&self, weight: &Weight) -> Result<ChernBundle> {
        let bundle = IrreducibleEquivariantVectorBundle::new(self.ambient().clone(), &weight.0)
            .with_context(|| format!("invalid bundle weight {weight}"))?;
        Ok(match self {
            Self::Space(_) => bundle.to_chern_bundle(),
            Self::Intersection(x) => x.restrict(&bundle)?,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(space) => space.fmt(f),
            Self::Intersection(x) => x.fmt(f),
        }
    }
}

/// A `q`-series with text coefficients, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct SeriesReport {
    /// Coefficients are known below `q^precision`.
    pub precision: usize,
    /// `q^n` coefficients as text.
    pub coefficients: Vec<String>,
}

impl SeriesReport {
    /// Report for a series of rationals.
    #[must_use]
    pub fn rational(series: &Series<Rational>) -> Self {
        Self {
            precision: series.precision(),
            coefficients: series.coefficients().iter().map(ToString::to_string).collect(),
        }
    }

    /// Report for a series of Laurent polynomials in `y`.
    #[must_use]
    pub fn laurent(series: &Series<Laurent<Rational>>) -> Self {
        Self {
            precision: series.precision(),
            coefficients: series.coefficients().iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(group: &str, crossed: &[usize], sections: &[&str]) -> VarietyArgs {
        VarietyArgs {
            group: group.parse().expect("valid group"),
            levi: None,
            crossed: crossed.to_vec(),
            sections: sections.iter().map(|s| s.parse().expect("weight")).collect(),
        }
    }

    #[test]
    fn weights_parse_from_comma_lists() {
        assert_eq!("5,0,0,0".parse::<Weight>(), Ok(Weight(vec![5, 0, 0, 0])));
        assert_eq!(" -1, 2".parse::<Weight>(), Ok(Weight(vec![-1, 2])));
        assert!("1,x".parse::<Weight>().is_err());
        assert_eq!(Weight(vec![1, 0]).to_string(), "(1,0)");
    }

    #[test]
    fn sections_cut_down_the_dimension() {
        let p4 = args("A4", &[1], &[]).build().expect("P^4");
        assert_eq!(p4.variety().dimension(), 4);
        let quintic = args("A4", &[1], &["5,0,0,0"]).build().expect("quintic");
        assert_eq!(quintic.variety().dimension(), 3);
        let curve = args("A3", &[1], &["2,0,0", "2,0,0"]).build().expect("(2,2) curve");
        assert_eq!(curve.variety().dimension(), 1);
        assert_eq!(curve.ambient().dimension(), 3);
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(args("A2", &[3], &[]).build().is_err());
        assert!(args("A2", &[1], &["1"]).build().is_err());
        assert!(args("A1", &[1], &["1", "1"]).build().is_err());
    }
}
