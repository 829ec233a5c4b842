//! The four semantic axes.
//!
//! Every vocabulary token maps to exactly one axis; a coordinate is a
//! distribution over the four. The axes are named after the verb families
//! the default vocabulary encodes — there is no hierarchy and no sub-typing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of semantic axes. Fixed; coordinates are arrays of this length.
pub const AXIS_COUNT: usize = 4;

/// A semantic axis — one of exactly four fixed verb families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Verbs that bring something into existence: create, build, write, emit.
    Creation,
    /// Verbs that check or guard: check, verify, assert, handle.
    Validation,
    /// Verbs that change existing state: set, update, delete, iterate.
    Mutation,
    /// Verbs that observe or retrieve: get, read, query, parse, return.
    Inspection,
}

impl Axis {
    /// All four axes, in coordinate-component order.
    pub fn all() -> &'static [Axis; AXIS_COUNT] {
        &[
            Self::Creation,
            Self::Validation,
            Self::Mutation,
            Self::Inspection,
        ]
    }

    /// Component index of this axis in a coordinate.
    pub fn index(self) -> usize {
        match self {
            Self::Creation => 0,
            Self::Validation => 1,
            Self::Mutation => 2,
            Self::Inspection => 3,
        }
    }

    /// Axis name as a lowercase string.
    pub fn name(self) -> &'static str {
        match self {
            Self::Creation => "creation",
            Self::Validation => "validation",
            Self::Mutation => "mutation",
            Self::Inspection => "inspection",
        }
    }

    /// Parse an axis from its lowercase name. Used by config overrides.
    pub fn from_name(name: &str) -> Option<Axis> {
        match name {
            "creation" => Some(Self::Creation),
            "validation" => Some(Self::Validation),
            "mutation" => Some(Self::Mutation),
            "inspection" => Some(Self::Inspection),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_cover_all_components() {
        let mut seen = [false; AXIS_COUNT];
        for axis in Axis::all() {
            seen[axis.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn name_round_trips() {
        for axis in Axis::all() {
            assert_eq!(Axis::from_name(axis.name()), Some(*axis));
        }
        assert_eq!(Axis::from_name("harmony"), None);
    }
}
