//! Body reduction: constructs → operation verb tokens.
//!
//! The construct → token mapping is a fixed contract. Changing a marker
//! token here silently re-weights every score, so the markers are named
//! constants and the vocabulary test pins their axis assignments.

use accord_core::TokenBag;

use crate::parser::types::BodyConstruct;

use super::identifier::leading_token;

/// Marker emitted for every assignment.
pub const ASSIGNMENT_TOKEN: &str = "set";
/// Marker emitted for every return statement.
pub const RETURN_TOKEN: &str = "return";
/// Marker emitted for conditionals (if/elif, ternaries, match arms).
pub const CONDITIONAL_TOKEN: &str = "check";
/// Marker emitted for loops and comprehensions.
pub const LOOP_TOKEN: &str = "iterate";
/// Marker emitted per except clause.
pub const HANDLER_TOKEN: &str = "handle";
/// Marker for unclassified constructs. Deliberately absent from the default
/// vocabulary: unknown syntax adds no signal instead of skewing an axis.
pub const NEUTRAL_TOKEN: &str = "pass";

/// Reduce a function body to its operation-verb bag.
///
/// Call heads contribute their leading word only (`delete_user` → `delete`);
/// nested definitions contribute nothing.
pub fn reduce_body(constructs: &[BodyConstruct]) -> TokenBag {
    let mut bag = TokenBag::new();
    for construct in constructs {
        match construct {
            BodyConstruct::Call { head } | BodyConstruct::MethodCall { head } => {
                if let Some(verb) = leading_token(head) {
                    bag.add(&verb);
                }
            }
            BodyConstruct::Assignment => bag.add(ASSIGNMENT_TOKEN),
            BodyConstruct::Return => bag.add(RETURN_TOKEN),
            BodyConstruct::Conditional => bag.add(CONDITIONAL_TOKEN),
            BodyConstruct::Loop => bag.add(LOOP_TOKEN),
            BodyConstruct::TryHandler => bag.add(HANDLER_TOKEN),
            BodyConstruct::NestedFunction => {}
            BodyConstruct::Other { .. } => bag.add(NEUTRAL_TOKEN),
        }
    }
    bag
}
