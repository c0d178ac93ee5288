//! Parabolic subgroups given by crossed Dynkin diagrams.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use num_bigint::BigInt;
use tracing::debug;

use crate::algebra::Rational;
use crate::error::{Error, Result};
use crate::lie::freudenthal::{weight_multiplicities, WeightedRoot};
use crate::lie::{dot, orbit, CartanType, Family, LeviType, Root, RootSystem, WeylElement};

/// The parabolic subgroup `P ⊂ G` whose Levi factor is obtained by deleting
/// the crossed nodes of the Dynkin diagram of `G`.
///
/// Nodes are numbered from 1, following Bourbaki.
#[derive(Clone, Debug)]
pub struct ParabolicSubgroup {
    group: CartanType,
    levi: LeviType,
    crossed: Vec<usize>,
    system: RootSystem,
    levi_nodes: Vec<usize>,
    levi_roots: Vec<usize>,
    tangent_roots: Vec<usize>,
    cosets: Vec<WeylElement>,
}

impl PartialEq for ParabolicSubgroup {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.crossed == other.crossed
    }
}

impl ParabolicSubgroup {
    /// Builds the parabolic subgroup of `group` with Levi type `levi` and
    /// the given crossed nodes.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedCartanType`] for exceptional groups other than `G2`;
    /// - [`Error::InvalidNodes`] when a node is out of range or repeated;
    /// - [`Error::LeviMismatch`] when `levi` is not the type of the uncrossed sub-diagram.
    pub fn new(group: CartanType, levi: LeviType, crossed_nodes: &[usize]) -> Result<Self> {
        let system = RootSystem::new(group)?;
        let rank = system.rank();
        let crossed: BTreeSet<usize> = crossed_nodes.iter().copied().collect();
        if crossed.len() != crossed_nodes.len() || crossed.iter().any(|&n| n == 0 || n > rank) {
            return Err(Error::InvalidNodes {
                nodes: crossed_nodes.to_vec(),
                rank,
            });
        }

        let levi_nodes: Vec<usize> = (0..rank).filter(|i| !crossed.contains(&(i + 1))).collect();
        let derived = classify(&system, &levi_nodes)?;
        if !derived.is_isomorphic(&levi) {
            return Err(Error::LeviMismatch {
                expected: derived.to_string(),
                found: levi.to_string(),
            });
        }

        let (levi_roots, tangent_roots): (Vec<usize>, Vec<usize>) =
            (0..system.positive_roots().len()).partition(|&k| {
                let root = &system.positive_roots()[k];
                crossed.iter().all(|&c| root.expansion[c - 1] == 0)
            });

        let mut anchor = vec![Rational::default(); system.ambient_dimension()];
        for &c in &crossed {
            for (a, w) in anchor.iter_mut().zip(&system.fundamental_weights()[c - 1]) {
                *a += w;
            }
        }
        let cosets: Vec<WeylElement> = orbit(&system, &anchor)
            .into_iter()
            .map(|(_, w)| w)
            .collect();
        debug!(
            group = %group,
            levi = %levi,
            cosets = cosets.len(),
            "enumerated coset representatives"
        );

        Ok(Self {
            group,
            levi,
            crossed: crossed.into_iter().collect(),
            system,
            levi_nodes,
            levi_roots,
            tangent_roots,
            cosets,
        })
    }

    /// Builds the parabolic subgroup with the Levi type read off the diagram.
    ///
    /// # Errors
    ///
    /// Same as [`ParabolicSubgroup::new`], minus the Levi check.
    pub fn from_crossed_nodes(group: CartanType, crossed_nodes: &[usize]) -> Result<Self> {
        let system = RootSystem::new(group)?;
        let rank = system.rank();
        let levi_nodes: Vec<usize> = (0..rank)
            .filter(|i| !crossed_nodes.contains(&(i + 1)))
            .collect();
        let levi = classify(&system, &levi_nodes)?;
        Self::new(group, levi, crossed_nodes)
    }

    /// The ambient group `G`.
    #[must_use]
    pub fn group(&self) -> CartanType {
        self.group
    }

    /// The Levi type as declared.
    #[must_use]
    pub fn levi(&self) -> &LeviType {
        &self.levi
    }

    /// Crossed nodes, sorted, 1-indexed.
    #[must_use]
    pub fn crossed_nodes(&self) -> &[usize] {
        &self.crossed
    }

    /// The root system of `G`.
    #[must_use]
    pub fn root_system(&self) -> &RootSystem {
        &self.system
    }

    /// Simple roots of the Levi factor, in ambient coordinates.
    pub fn levi_simple_roots(&self) -> impl Iterator<Item = &Vec<Rational>> {
        self.levi_nodes
            .iter()
            .map(move |&i| &self.system.simple_roots()[i])
    }

    /// Positive roots of the Levi factor.
    pub fn levi_positive_roots(&self) -> impl Iterator<Item = &Root> {
        self.levi_roots
            .iter()
            .map(move |&k| &self.system.positive_roots()[k])
    }

    /// `Φ⁺ \ Φ_L⁺`, the weights of the tangent space at the base point.
    pub fn tangent_roots(&self) -> impl Iterator<Item = &Root> {
        self.tangent_roots
            .iter()
            .map(move |&k| &self.system.positive_roots()[k])
    }

    /// Number of tangent roots, the dimension of `G/P`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.tangent_roots.len()
    }

    /// Minimal-length representatives of `W/W_L`.
    #[must_use]
    pub fn coset_representatives(&self) -> &[WeylElement] {
        &self.cosets
    }

    /// `|W(G)|`
    #[must_use]
    pub fn weyl_group_order(&self) -> BigInt {
        self.group.weyl_group_order()
    }

    /// `|W(L)|`
    #[must_use]
    pub fn levi_weyl_group_order(&self) -> BigInt {
        self.levi.weyl_group_order()
    }

    /// Weights of the irreducible `L`-representation with highest weight
    /// `Σ highest_weight[i] ω_{i+1}`, with multiplicities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] when the weight has the wrong number
    /// of coordinates or a negative coordinate on an uncrossed node.
    pub fn weight_multiplicities(
        &self,
        highest_weight: &[i64],
    ) -> Result<BTreeMap<Vec<Rational>, usize>> {
        let ambient = self.system.weight(highest_weight)?;
        if let Some(&node) = self.levi_nodes.iter().find(|&&i| highest_weight[i] < 0) {
            return Err(Error::InvalidWeight {
                weight: highest_weight.to_vec(),
                reason: format!("not dominant for the Levi factor at node {}", node + 1),
            });
        }
        let simple: Vec<Vec<Rational>> = self.levi_simple_roots().cloned().collect();
        let positive: Vec<WeightedRoot> = self
            .levi_positive_roots()
            .map(|root| WeightedRoot {
                coordinates: root.coordinates.clone(),
                height: root.expansion.iter().map(|&k| k.unsigned_abs() as usize).sum(),
            })
            .collect();
        weight_multiplicities(&ambient, &simple, &positive)
    }

    /// ASCII picture of the Dynkin diagram, crossed nodes drawn as `X`.
    #[must_use]
    pub fn dynkin_diagram(&self) -> String {
        let rank = self.system.rank();
        let node = |i: usize| if self.crossed.contains(&(i + 1)) { 'X' } else { 'O' };
        let bond = |i: usize| match (self.group.family(), i + 2 == rank) {
            (Family::B, true) => "=>=",
            (Family::C, true) => "=<=",
            (Family::G, _) => "≡<≡",
            _ => "---",
        };
        let chain_len = if self.group.family() == Family::D { rank - 1 } else { rank };

        let mut line = String::new();
        let mut labels = String::new();
        for i in 0..chain_len {
            if i > 0 {
                line.push_str(bond(i - 1));
            }
            line.push(node(i));
            labels.push_str(&format!("{:<4}", i + 1));
        }
        if self.group.family() != Family::D {
            return format!("{line}\n{}", labels.trim_end());
        }
        let column = 4 * rank.saturating_sub(3);
        let pad = " ".repeat(column);
        format!(
            "{line}\n{pad}|\n{pad}{}\n{}  ({} attached to {})",
            node(rank - 1),
            labels.trim_end(),
            rank,
            rank.saturating_sub(2).max(1)
        )
    }
}

impl fmt::Display for ParabolicSubgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/P with Levi {} (crossed {:?})",
            self.group, self.levi, self.crossed
        )
    }
}

/// Type of the sub-diagram on `nodes` (0-indexed).
fn classify(system: &RootSystem, nodes: &[usize]) -> Result<LeviType> {
    let cartan = system.cartan_matrix();
    let simple = system.simple_roots();
    let mut remaining: BTreeSet<usize> = nodes.iter().copied().collect();
    let mut components = Vec::new();
    while let Some(&start) = remaining.iter().next() {
        let mut component = vec![start];
        remaining.remove(&start);
        let mut frontier = vec![start];
        while let Some(i) = frontier.pop() {
            let linked: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|&j| cartan[i][j] != 0)
                .collect();
            for j in linked {
                remaining.remove(&j);
                component.push(j);
                frontier.push(j);
            }
        }

        let size = component.len();
        let bonds: Vec<i64> = component
            .iter()
            .flat_map(|&i| component.iter().filter(move |&&j| i < j).map(move |&j| (i, j)))
            .map(|(i, j)| cartan[i][j] * cartan[j][i])
            .filter(|&b| b != 0)
            .collect();
        let max_degree = component
            .iter()
            .map(|&i| component.iter().filter(|&&j| j != i && cartan[i][j] != 0).count())
            .max()
            .unwrap_or(0);

        let family = if size == 1 {
            Family::A
        } else if bonds.contains(&3) {
            Family::G
        } else if bonds.contains(&2) {
            let lengths: Vec<Rational> = component
                .iter()
                .map(|&i| dot(&simple[i], &simple[i]))
                .collect();
            let shortest = lengths.iter().min().cloned().unwrap_or_default();
            if lengths.iter().filter(|&l| *l == shortest).count() == 1 {
                Family::B
            } else {
                Family::C
            }
        } else if max_degree >= 3 {
            Family::D
        } else {
            Family::A
        };
        components.push(CartanType::new(family, size)?);
    }
    Ok(LeviType::new(components))
}
