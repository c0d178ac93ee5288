//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors raised while building varieties, bundles, or genera.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A Cartan type string could not be parsed, or names a rank the family does not have.
    #[error("invalid Cartan type `{0}`")]
    InvalidCartanType(String),

    /// The Cartan type is well-formed but has no root system realization here.
    #[error("Cartan type {0} is not supported (classical types and G2 only)")]
    UnsupportedCartanType(String),

    /// Crossed nodes are out of range or repeated.
    #[error("invalid crossed nodes {nodes:?} for a Dynkin diagram of rank {rank}")]
    InvalidNodes {
        /// The nodes as given (1-indexed).
        nodes: Vec<usize>,
        /// Rank of the ambient Dynkin diagram.
        rank: usize,
    },

    /// The declared Levi type differs from the uncrossed sub-diagram.
    #[error("Levi type {found} does not match the sub-diagram type {expected}")]
    LeviMismatch {
        /// Type of the sub-diagram left after deleting the crossed nodes.
        expected: String,
        /// Levi type supplied by the caller.
        found: String,
    },

    /// A highest weight has the wrong length or is not dominant for the Levi.
    #[error("invalid weight {weight:?}: {reason}")]
    InvalidWeight {
        /// The offending weight, in fundamental-weight coordinates or ambient length.
        weight: Vec<i64>,
        /// What is wrong with it.
        reason: String,
    },

    /// Two bundles, or a bundle and a variety, live on different bases.
    #[error("base mismatch: {left} vs {right}")]
    BaseMismatch {
        /// Description of the first base.
        left: String,
        /// Description of the second base.
        right: String,
    },

    /// A Chern number was requested with a zero degree.
    #[error("Chern degrees must be positive, got {0:?}")]
    InvalidDegrees(Vec<usize>),

    /// Chern degrees do not add up to the dimension.
    #[error("Chern degrees sum to {sum}, but the variety has dimension {dimension}")]
    DegreeMismatch {
        /// Sum of the requested degrees.
        sum: usize,
        /// Complex dimension of the variety.
        dimension: usize,
    },

    /// The zero locus of the bundle would have negative dimension.
    #[error("a bundle of rank {rank} cannot cut a complete intersection in dimension {dimension}")]
    RankExceedsDimension {
        /// Rank of the bundle.
        rank: usize,
        /// Dimension of the ambient space.
        dimension: usize,
    },

    /// The localization sums at two regular points disagree.
    #[error("localization sums disagree: {first} vs {second}")]
    InconsistentLocalization {
        /// Value at the dominant point.
        first: String,
        /// Value at the anti-dominant point.
        second: String,
    },

    /// A tangent weight vanished at a fixed point, so the evaluation point was not regular.
    #[error("tangent weights vanish at the evaluation point {0}")]
    DegenerateFixedPoint(String),

    /// A square matrix has no inverse.
    #[error("matrix is singular")]
    Singular,

    /// The Jacobi fit did not reach full rank with the rows available.
    #[error("Jacobi basis coefficients are underdetermined: rank {rank} for {unknowns} unknowns")]
    Underdetermined {
        /// Rank reached by the coefficient rows.
        rank: usize,
        /// Size of the weak Jacobi basis.
        unknowns: usize,
    },

    /// The direct expansion is not a combination of the weak Jacobi basis.
    #[error("the genus is not a weak Jacobi form of weight 0 and index {double_index}/2")]
    NotJacobiForm {
        /// Twice the index of the expected Jacobi form.
        double_index: usize,
    },

    /// Eisenstein series exist only for even weights of at least 2.
    #[error("Eisenstein series need an even weight >= 2, got {0}")]
    InvalidEisensteinWeight(u32),

    /// A truncation asked for more terms than a series carries.
    #[error("requested precision O(q^{requested}) exceeds the available O(q^{available})")]
    PrecisionExceeded {
        /// Requested number of coefficients.
        requested: usize,
        /// Number of coefficients available.
        available: usize,
    },

    /// An exact computation produced a value outside its expected domain.
    #[error("arithmetic failure: {0}")]
    Arithmetic(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
