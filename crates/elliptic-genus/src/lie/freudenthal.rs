//! Weight multiplicities of irreducible representations by Freudenthal's formula.
//!
//! For a highest weight `λ` and a weight `μ`,
//!
//! ```text
//! ((λ+ρ, λ+ρ) - (μ+ρ, μ+ρ)) m(μ) = 2 Σ_{α>0} Σ_{k≥1} m(μ+kα) (μ+kα, α)
//! ```
//!
//! Weights are visited level by level, where the level of `μ` is the height
//! of `λ - μ`; the recursion stops at the first empty level.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use num_traits::{Signed, Zero};

use super::root_system::dot;
use crate::algebra::{fraction, integer, to_usize, Rational};
use crate::error::Result;

/// A positive root of the (sub)system in ambient coordinates, with its height.
#[derive(Clone, Debug)]
pub struct WeightedRoot {
    /// Ambient coordinates.
    pub coordinates: Vec<Rational>,
    /// Height in the simple roots of the same (sub)system.
    pub height: usize,
}

fn add(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

fn sub(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

fn shifted(mu: &[Rational], alpha: &[Rational], k: usize) -> Vec<Rational> {
    let k = integer(k as i64);
    mu.iter().zip(alpha).map(|(m, a)| m + &k * a).collect()
}

/// Weights with multiplicities of the irreducible representation with
/// dominant highest weight `highest`.
///
/// `simple_roots` and `positive_roots` describe the (possibly reducible)
/// root system the representation belongs to; both may be empty, in which
/// case the representation is the one-dimensional character `highest`.
///
/// # Errors
///
/// Returns [`crate::Error::Arithmetic`] if a multiplicity comes out
/// negative or fractional, which means `highest` was not dominant integral.
pub fn weight_multiplicities(
    highest: &[Rational],
    simple_roots: &[Vec<Rational>],
    positive_roots: &[WeightedRoot],
) -> Result<BTreeMap<Vec<Rational>, usize>> {
    let mut rho = vec![Rational::zero(); highest.len()];
    for root in positive_roots {
        rho = add(&rho, &root.coordinates);
    }
    let half = fraction(1, 2);
    let rho: Vec<Rational> = rho.iter().map(|r| r * &half).collect();

    let top = {
        let v = add(highest, &rho);
        dot(&v, &v)
    };

    let mut multiplicities: HashMap<Vec<Rational>, usize> = HashMap::new();
    multiplicities.insert(highest.to_vec(), 1);
    let mut level = vec![highest.to_vec()];
    let mut depth = 0usize;
    while !level.is_empty() {
        depth += 1;
        let candidates: BTreeSet<Vec<Rational>> = level
            .iter()
            .flat_map(|mu| simple_roots.iter().map(move |alpha| sub(mu, alpha)))
            .collect();

        let mut next = Vec::new();
        for mu in candidates {
            let v = add(&mu, &rho);
            let gap = &top - dot(&v, &v);
            if !gap.is_positive() {
                continue;
            }
            let mut sum = Rational::zero();
            for root in positive_roots {
                let mut k = 1;
                while k * root.height <= depth {
                    let raised = shifted(&mu, &root.coordinates, k);
                    if let Some(&m) = multiplicities.get(&raised) {
                        sum += integer(m as i64) * dot(&raised, &root.coordinates);
                    }
                    k += 1;
                }
            }
            let multiplicity = to_usize(&(sum * integer(2) / gap))?;
            if multiplicity > 0 {
                multiplicities.insert(mu.clone(), multiplicity);
                next.push(mu);
            }
        }
        level = next;
    }

    Ok(multiplicities.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lie::RootSystem;

    fn full_system(name: &str) -> (RootSystem, Vec<WeightedRoot>) {
        let rs = RootSystem::new(name.parse().expect("valid type")).expect("supported");
        let roots = rs
            .positive_roots()
            .iter()
            .map(|r| WeightedRoot {
                coordinates: r.coordinates.clone(),
                height: r.height() as usize,
            })
            .collect();
        (rs, roots)
    }

    fn dimension(weights: &BTreeMap<Vec<Rational>, usize>) -> usize {
        weights.values().sum()
    }

    #[test]
    fn adjoint_of_a2() {
        let (rs, roots) = full_system("A2");
        let hw = rs.weight(&[1, 1]).expect("weight");
        let weights = weight_multiplicities(&hw, rs.simple_roots(), &roots).expect("dominant");
        assert_eq!(dimension(&weights), 8);
        // ω_1 = e_0 and ω_2 = e_0 + e_1, so the zero weight of sl_3 sits at (1, 1, 1)
        assert_eq!(weights.get(&vec![integer(1); 3]), Some(&2));
        assert_eq!(weights.values().filter(|&&m| m == 1).count(), 6);
    }

    #[test]
    fn vector_and_spin_representations_of_b3() {
        let (rs, roots) = full_system("B3");
        let vector = rs.weight(&[1, 0, 0]).expect("weight");
        let spin = rs.weight(&[0, 0, 1]).expect("weight");
        let adjoint = rs.weight(&[0, 1, 0]).expect("weight");
        let dim = |hw: &[Rational]| {
            dimension(&weight_multiplicities(hw, rs.simple_roots(), &roots).expect("dominant"))
        };
        assert_eq!(dim(&vector), 7);
        assert_eq!(dim(&spin), 8);
        assert_eq!(dim(&adjoint), 21);
    }

    #[test]
    fn seven_dimensional_g2() {
        let (rs, roots) = full_system("G2");
        let hw = rs.weight(&[1, 0]).expect("weight");
        let weights = weight_multiplicities(&hw, rs.simple_roots(), &roots).expect("dominant");
        assert_eq!(dimension(&weights), 7);
    }

    #[test]
    fn empty_system_gives_a_character() {
        let hw = vec![integer(3), integer(-1)];
        let weights = weight_multiplicities(&hw, &[], &[]).expect("character");
        assert_eq!(weights.len(), 1);
        assert_eq!(weights.get(&hw), Some(&1));
    }
}
