//! Harmony scoring: (intent, execution) → severity.
//!
//! A record is only ever constructed in its final, scored form — there is
//! no mutable half-scored state to observe. The zero-sentinel policy lives
//! here and only here: a zero intent OR zero execution coordinate means
//! "insufficient signal" and yields `Severity::Unknown`. It is never
//! coerced to distance 0 (false harmony) or to a maximal distance (false
//! disharmony).

use accord_core::HarmonyThresholds;

use crate::coords::EmbedCache;
use crate::parser::FunctionSyntax;
use crate::reducer::{reduce_body, split_identifier};
use crate::report::FunctionRecord;
use crate::vocabulary::Vocabulary;

/// Scores function syntax against one vocabulary and one threshold set.
pub struct HarmonyScorer<'a> {
    vocabulary: &'a Vocabulary,
    cache: &'a EmbedCache,
    thresholds: HarmonyThresholds,
}

impl<'a> HarmonyScorer<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        cache: &'a EmbedCache,
        thresholds: HarmonyThresholds,
    ) -> Self {
        Self {
            vocabulary,
            cache,
            thresholds,
        }
    }

    /// Score one function definition.
    pub fn score(&self, function: &FunctionSyntax) -> FunctionRecord {
        let name_bag = split_identifier(&function.name);
        let body_bag = reduce_body(&function.body);

        let intent = self.cache.get_or_embed(&name_bag, self.vocabulary);
        let execution = self.cache.get_or_embed(&body_bag, self.vocabulary);

        if intent.is_zero() || execution.is_zero() {
            return FunctionRecord::unscored(
                function.qualified_name.clone(),
                function.line,
                intent,
                execution,
            );
        }

        let distance = intent.distance(&execution);
        FunctionRecord::scored(
            function.qualified_name.clone(),
            function.line,
            intent,
            execution,
            distance,
            self.thresholds.classify(distance),
        )
    }
}
