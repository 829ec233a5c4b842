//! The embedding operation.

use accord_core::types::axis::AXIS_COUNT;
use accord_core::{Coordinate, TokenBag};

use crate::vocabulary::Vocabulary;

/// Embed a token bag as a distribution over the four axes.
///
/// Per-axis totals are weighted by occurrence count. Tokens absent from the
/// vocabulary are silently ignored — a known precision limitation of the
/// fixed table, not an error. A bag with no recognized tokens embeds to the
/// zero sentinel.
pub fn embed(bag: &TokenBag, vocabulary: &Vocabulary) -> Coordinate {
    let mut totals = [0.0f64; AXIS_COUNT];
    for (token, count) in bag.iter() {
        if let Some(axis) = vocabulary.lookup(token) {
            totals[axis.index()] += f64::from(count);
        }
    }
    Coordinate::from_axis_totals(totals)
}
