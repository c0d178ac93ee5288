//! Weyl group elements as words in simple reflections, and orbits.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::root_system::RootSystem;
use crate::algebra::Rational;

/// `w = s_{j_1} s_{j_2} … s_{j_m}` stored as the word `[j_1, …, j_m]` (0-indexed).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WeylElement {
    word: Vec<usize>,
}

impl WeylElement {
    /// The identity.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// The element with the given reduced or unreduced word.
    #[must_use]
    pub fn from_word(word: Vec<usize>) -> Self {
        Self { word }
    }

    /// The word, leftmost reflection first.
    #[must_use]
    pub fn word(&self) -> &[usize] {
        &self.word
    }

    /// Length of the stored word.
    #[must_use]
    pub fn length(&self) -> usize {
        self.word.len()
    }

    /// `w v`: the rightmost reflection acts first.
    #[must_use]
    pub fn act(&self, system: &RootSystem, v: &[Rational]) -> Vec<Rational> {
        self.word
            .iter()
            .rev()
            .fold(v.to_vec(), |acc, &j| system.reflect(j, &acc))
    }

    /// `w⁻¹ v`: the leftmost reflection acts first.
    #[must_use]
    pub fn act_inverse(&self, system: &RootSystem, v: &[Rational]) -> Vec<Rational> {
        self.word
            .iter()
            .fold(v.to_vec(), |acc, &j| system.reflect(j, &acc))
    }
}

impl fmt::Display for WeylElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.word.is_empty() {
            return f.write_str("1");
        }
        let letters: Vec<String> = self.word.iter().map(|j| format!("s{}", j + 1)).collect();
        f.write_str(&letters.join("*"))
    }
}

/// The orbit of `start` under the Weyl group, found breadth first.
///
/// Each orbit point `μ` comes with an element `w` of minimal length such
/// that `w · start = μ`. When `start` is dominant with stabilizer `W_L`,
/// these elements are the minimal coset representatives of `W/W_L`.
#[must_use]
pub fn orbit(system: &RootSystem, start: &[Rational]) -> Vec<(Vec<Rational>, WeylElement)> {
    let mut seen: HashSet<Vec<Rational>> = HashSet::new();
    seen.insert(start.to_vec());
    let mut queue = VecDeque::from([(start.to_vec(), WeylElement::identity())]);
    let mut out = Vec::new();
    while let Some((mu, w)) = queue.pop_front() {
        for i in 0..system.rank() {
            let next = system.reflect(i, &mu);
            if seen.insert(next.clone()) {
                let mut word = Vec::with_capacity(w.length() + 1);
                word.push(i);
                word.extend_from_slice(w.word());
                queue.push_back((next, WeylElement { word }));
            }
        }
        out.push((mu, w));
    }
    out
}
