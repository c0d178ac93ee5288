//! Root systems, Weyl groups, and weight multiplicities.
//!
//! Only what the homogeneous-space machinery needs: classical types and
//! `G2` realized in ambient coordinates, simple reflections, breadth-first
//! Weyl orbits, and Freudenthal's multiplicity formula.
//!
//! # Examples
//!
//! ```
//! use elliptic_genus::lie::{orbit, RootSystem};
//!
//! let a2 = RootSystem::new("A2".parse()?)?;
//! assert_eq!(a2.positive_roots().len(), 3);
//! assert_eq!(orbit(&a2, &a2.rho()).len(), 6);
//! # Ok::<(), elliptic_genus::Error>(())
//! ```

mod cartan;
pub mod freudenthal;
mod root_system;
mod weyl;

pub use cartan::{CartanType, Family, LeviType};
pub use root_system::{dot, Root, RootSystem};
pub use weyl::{orbit, WeylElement};
