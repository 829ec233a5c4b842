//! Per-file harmony analysis pipeline.
//!
//! parse → reduce → embed (through the cache) → score → assemble.
//! Each file is an independent, stateless computation over its own tree;
//! the only shared resource is the content-addressed embed cache.

use std::sync::Arc;
use std::time::Instant;

use accord_core::{HarmonyThresholds, ParseError};

use crate::coords::EmbedCache;
use crate::parser::{FunctionSyntax, PythonParser};
use crate::report::{FileReport, FunctionRecord};
use crate::scorer::HarmonyScorer;
use crate::vocabulary::Vocabulary;

/// One analysis pipeline: a parser plus the shared scoring context.
///
/// Not `Sync` (the parser holds mutable tree-sitter state). For parallel
/// runs, build one pipeline per worker over the same `Arc<Vocabulary>` and
/// a clone of the same `EmbedCache`.
pub struct HarmonyPipeline {
    parser: PythonParser,
    vocabulary: Arc<Vocabulary>,
    cache: EmbedCache,
    thresholds: HarmonyThresholds,
}

impl HarmonyPipeline {
    /// Create a pipeline with its own cache.
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        thresholds: HarmonyThresholds,
    ) -> Result<Self, ParseError> {
        Self::with_cache(vocabulary, thresholds, EmbedCache::default())
    }

    /// Create a pipeline sharing an existing cache.
    pub fn with_cache(
        vocabulary: Arc<Vocabulary>,
        thresholds: HarmonyThresholds,
        cache: EmbedCache,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            parser: PythonParser::new()?,
            vocabulary,
            cache,
            thresholds,
        })
    }

    /// The vocabulary this pipeline scores against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Analyze one source file.
    pub fn analyze_source(&mut self, source: &str, file: &str) -> Result<FileReport, ParseError> {
        let start = Instant::now();
        let functions = self.parser.parse(source, file)?;

        let scorer = HarmonyScorer::new(&self.vocabulary, &self.cache, self.thresholds);
        let mut records = Vec::new();
        for function in &functions {
            score_tree(&scorer, function, &mut records);
        }

        tracing::debug!(file, functions = records.len(), "analyzed");
        Ok(FileReport::assemble(
            file.to_string(),
            records,
            start.elapsed().as_micros() as u64,
        ))
    }
}

/// Score a function and its nested definitions, parents first.
fn score_tree(scorer: &HarmonyScorer<'_>, function: &FunctionSyntax, out: &mut Vec<FunctionRecord>) {
    let record = scorer.score(function);
    tracing::trace!(
        function = %record.qualified_name,
        severity = %record.severity,
        distance = record.distance,
        "scored"
    );
    out.push(record);
    for nested in &function.nested {
        score_tree(scorer, nested, out);
    }
}
