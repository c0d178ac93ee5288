//! Cartan types of simple Lie algebras and of Levi subalgebras.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::One;
use serde::Serialize;

use crate::algebra::factorial;
use crate::error::{Error, Result};

/// Family letter of a simple Lie algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Family {
    /// `sl(n+1)`
    A,
    /// `so(2n+1)`
    B,
    /// `sp(2n)`
    C,
    /// `so(2n)`
    D,
    /// Exceptional `E6`, `E7`, `E8`.
    E,
    /// Exceptional `F4`.
    F,
    /// Exceptional `G2`.
    G,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        };
        f.write_str(letter)
    }
}

/// A Cartan type such as `A4` or `G2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CartanType {
    family: Family,
    rank: usize,
}

impl CartanType {
    /// Validates the rank for the family.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCartanType`] for ranks the family does not have.
    pub fn new(family: Family, rank: usize) -> Result<Self> {
        let valid = match family {
            Family::A | Family::B | Family::C => rank >= 1,
            Family::D => rank >= 2,
            Family::E => (6..=8).contains(&rank),
            Family::F => rank == 4,
            Family::G => rank == 2,
        };
        if valid {
            Ok(Self { family, rank })
        } else {
            Err(Error::InvalidCartanType(format!("{family}{rank}")))
        }
    }

    /// The family letter.
    #[inline]
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Number of simple roots.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Order of the Weyl group.
    #[must_use]
    pub fn weyl_group_order(&self) -> BigInt {
        let n = self.rank;
        match self.family {
            Family::A => factorial(n + 1),
            Family::B | Family::C => BigInt::from(2).pow(n as u32) * factorial(n),
            Family::D => BigInt::from(2).pow(n as u32 - 1) * factorial(n),
            Family::G => BigInt::from(12),
            Family::F => BigInt::from(1152),
            Family::E => match n {
                6 => BigInt::from(51_840),
                7 => BigInt::from(2_903_040),
                _ => BigInt::from(696_729_600),
            },
        }
    }

    /// Splits into canonical simple components, identifying
    /// `B1 = C1 = A1`, `C2 = B2`, `D3 = A3` and `D2 = A1 × A1`.
    #[must_use]
    pub fn canonical_components(&self) -> Vec<CartanType> {
        let a = |rank| CartanType {
            family: Family::A,
            rank,
        };
        match (self.family, self.rank) {
            (Family::B | Family::C, 1) => vec![a(1)],
            (Family::C, 2) => vec![CartanType {
                family: Family::B,
                rank: 2,
            }],
            (Family::D, 2) => vec![a(1), a(1)],
            (Family::D, 3) => vec![a(3)],
            _ => vec![*self],
        }
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.rank)
    }
}

impl FromStr for CartanType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidCartanType(s.to_string());
        let mut chars = trimmed.chars();
        let family = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Family::A,
            Some('B') => Family::B,
            Some('C') => Family::C,
            Some('D') => Family::D,
            Some('E') => Family::E,
            Some('F') => Family::F,
            Some('G') => Family::G,
            _ => return Err(invalid()),
        };
        let rank: usize = chars
            .as_str()
            .trim()
            .trim_start_matches('_')
            .parse()
            .map_err(|_| invalid())?;
        Self::new(family, rank).map_err(|_| invalid())
    }
}

/// Type of a Levi subalgebra: a product of simple components, empty for a torus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LeviType {
    components: Vec<CartanType>,
}

impl LeviType {
    /// A Levi type from its components.
    #[must_use]
    pub fn new(components: Vec<CartanType>) -> Self {
        Self { components }
    }

    /// The type of a maximal torus (no simple components).
    #[must_use]
    pub fn torus() -> Self {
        Self::default()
    }

    /// The components as given.
    #[must_use]
    pub fn components(&self) -> &[CartanType] {
        &self.components
    }

    /// Sorted canonical components, for comparing types up to isomorphism.
    #[must_use]
    pub fn canonical(&self) -> Vec<CartanType> {
        let mut out: Vec<CartanType> = self
            .components
            .iter()
            .flat_map(CartanType::canonical_components)
            .collect();
        out.sort();
        out
    }

    /// True when both types describe isomorphic algebras.
    #[must_use]
    pub fn is_isomorphic(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }

    /// Semisimple rank.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.components.iter().map(CartanType::rank).sum()
    }

    /// Order of the Weyl group, the product over components.
    #[must_use]
    pub fn weyl_group_order(&self) -> BigInt {
        self.components
            .iter()
            .fold(BigInt::one(), |acc, c| acc * c.weyl_group_order())
    }
}

impl fmt::Display for LeviType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("T");
        }
        let parts: Vec<String> = self.components.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("x"))
    }
}

impl FromStr for LeviType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "T" || trimmed == "0" {
            return Ok(Self::torus());
        }
        let components = trimmed
            .split(['x', '*', '×'])
            .map(str::parse)
            .collect::<Result<Vec<CartanType>>>()?;
        Ok(Self { components })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cartan_types() {
        let a4: CartanType = "A4".parse().expect("valid");
        assert_eq!((a4.family(), a4.rank()), (Family::A, 4));
        assert_eq!("g2".parse::<CartanType>().map(|t| t.to_string()), Ok("G2".into()));
        assert!("G3".parse::<CartanType>().is_err());
        assert!("D1".parse::<CartanType>().is_err());
        assert!("Q2".parse::<CartanType>().is_err());
        assert!("A".parse::<CartanType>().is_err());
    }

    #[test]
    fn weyl_orders() {
        let order = |s: &str| s.parse::<CartanType>().map(|t| t.weyl_group_order()).ok();
        assert_eq!(order("A3"), Some(BigInt::from(24)));
        assert_eq!(order("B3"), Some(BigInt::from(48)));
        assert_eq!(order("D4"), Some(BigInt::from(192)));
        assert_eq!(order("G2"), Some(BigInt::from(12)));
    }

    #[test]
    fn levi_isomorphisms() {
        let parse = |s: &str| s.parse::<LeviType>().expect("valid levi");
        assert!(parse("C2").is_isomorphic(&parse("B2")));
        assert!(parse("D3xA1").is_isomorphic(&parse("A1xA3")));
        assert!(parse("D2").is_isomorphic(&parse("A1xA1")));
        assert!(parse("B1").is_isomorphic(&parse("C1")));
        assert!(!parse("A2").is_isomorphic(&parse("A1xA1")));
        assert_eq!(parse("").rank(), 0);
        assert_eq!(parse("A1xA2").weyl_group_order(), BigInt::from(12));
    }

    #[test]
    fn levi_display_round_trip() {
        let levi: LeviType = "A1xB2".parse().expect("valid levi");
        assert_eq!(levi.to_string(), "A1xB2");
        assert_eq!(LeviType::torus().to_string(), "T");
    }
}
