//! Well-separated pairs: the core unit the WSPD builds and the oracle
//! replays to answer distance queries.

mod builder;
mod checker;
mod oracle;

pub use builder::calculate_separation;
pub use checker::check_separation;
pub use oracle::SeparationDistanceOracle;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::cell::GridCell;
use crate::distance::Distance;
use crate::node::Node;

/// A well-separated pair of cells. `Trivial` pairs answer every query with
/// the closed-form trivial distance; `Complex` pairs route every query
/// through a pair of centers.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separation {
    Trivial {
        a: GridCell,
        b: GridCell,
    },
    Complex {
        a: GridCell,
        b: GridCell,
        ca: Node,
        cb: Node,
        d: Distance,
    },
}

impl Separation {
    #[inline]
    #[must_use]
    pub fn a(&self) -> GridCell {
        match self {
            Separation::Trivial { a, .. } | Separation::Complex { a, .. } => *a,
        }
    }

    #[inline]
    #[must_use]
    pub fn b(&self) -> GridCell {
        match self {
            Separation::Trivial { b, .. } | Separation::Complex { b, .. } => *b,
        }
    }
}
