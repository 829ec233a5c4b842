//! Semantic coordinates — distributions over the four axes.
//!
//! A coordinate is either a probability-style 4-vector summing to 1, or the
//! all-zero sentinel meaning "no recognized tokens". The sentinel is an
//! out-of-band value: callers must branch on `is_zero()` before treating the
//! components as a distribution.

use serde::{Deserialize, Serialize};

use super::axis::{Axis, AXIS_COUNT};

/// Tolerance for the sum-to-one invariant after normalization.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// A point in the 4-axis semantic space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate([f64; AXIS_COUNT]);

impl Coordinate {
    /// The zero sentinel: no recognized tokens. Not a valid distribution.
    pub const ZERO: Coordinate = Coordinate([0.0; AXIS_COUNT]);

    /// The anchor point (1,1,1,1): maximum extension along every axis.
    /// A fixed boundary reference for distance comparisons only — it is
    /// exempt from the sum-to-one invariant.
    pub const ANCHOR: Coordinate = Coordinate([1.0; AXIS_COUNT]);

    /// Build a coordinate directly from components. No normalization.
    pub fn new(components: [f64; AXIS_COUNT]) -> Self {
        Self(components)
    }

    /// Normalize per-axis totals into a distribution.
    ///
    /// Returns the zero sentinel when the grand total is zero.
    pub fn from_axis_totals(totals: [f64; AXIS_COUNT]) -> Self {
        let sum: f64 = totals.iter().sum();
        if sum == 0.0 {
            return Self::ZERO;
        }
        let mut components = totals;
        for c in &mut components {
            *c /= sum;
        }
        debug_assert!((components.iter().sum::<f64>() - 1.0).abs() < NORMALIZATION_TOLERANCE);
        Self(components)
    }

    /// Whether this is the "no recognized tokens" sentinel.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    /// Raw components in axis order.
    pub fn components(&self) -> [f64; AXIS_COUNT] {
        self.0
    }

    /// Component along a single axis.
    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    /// Sum of all components. 1.0 (within tolerance) for any non-sentinel
    /// coordinate produced by `from_axis_totals`.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Euclidean distance to another coordinate.
    ///
    /// Symmetric, zero iff the coordinates are component-wise equal, and
    /// satisfies the triangle inequality. The zero sentinel is NOT
    /// special-cased here — sentinel policy belongs to the caller.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Distance to the anchor point (1,1,1,1).
    pub fn anchor_distance(&self) -> f64 {
        self.distance(&Self::ANCHOR)
    }

    /// The axis with the largest component, or `None` for the sentinel.
    /// Ties resolve to the lower axis index.
    pub fn dominant_axis(&self) -> Option<Axis> {
        if self.is_zero() {
            return None;
        }
        let mut best = Axis::Creation;
        for axis in Axis::all() {
            if self.0[axis.index()] > self.0[best.index()] {
                best = *axis;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_sums_to_one() {
        let c = Coordinate::from_axis_totals([3.0, 1.0, 0.0, 4.0]);
        assert!((c.sum() - 1.0).abs() < NORMALIZATION_TOLERANCE);
        assert_eq!(c.get(Axis::Creation), 0.375);
    }

    #[test]
    fn zero_totals_yield_sentinel() {
        let c = Coordinate::from_axis_totals([0.0; AXIS_COUNT]);
        assert!(c.is_zero());
        assert_eq!(c, Coordinate::ZERO);
    }

    #[test]
    fn anchor_is_not_a_distribution() {
        assert_eq!(Coordinate::ANCHOR.sum(), 4.0);
        assert!(!Coordinate::ANCHOR.is_zero());
    }

    #[test]
    fn distance_between_opposite_unit_axes() {
        let u = Coordinate::new([0.0, 0.0, 0.0, 1.0]);
        let v = Coordinate::new([0.0, 0.0, 1.0, 0.0]);
        assert!((u.distance(&v) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn dominant_axis_of_sentinel_is_none() {
        assert_eq!(Coordinate::ZERO.dominant_axis(), None);
        let c = Coordinate::from_axis_totals([0.0, 0.0, 2.0, 1.0]);
        assert_eq!(c.dominant_axis(), Some(Axis::Mutation));
    }
}
