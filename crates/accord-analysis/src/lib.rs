//! # accord-analysis
//!
//! Analysis engine for the Accord harmony linter.
//! Contains the vocabulary table, coordinate embedding, Python parser,
//! syntax reducer, harmony scorer, and report assembly.

pub mod coords;
pub mod engine;
pub mod parser;
pub mod reducer;
pub mod report;
pub mod scorer;
pub mod vocabulary;

pub use coords::EmbedCache;
pub use engine::HarmonyPipeline;
pub use report::{FileReport, FunctionRecord, RunSummary, SeveritySummary};
pub use scorer::HarmonyScorer;
pub use vocabulary::{Vocabulary, VocabularyBuilder};
