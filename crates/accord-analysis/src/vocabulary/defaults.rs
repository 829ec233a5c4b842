//! The built-in vocabulary table.
//!
//! One flat list of (token, axis) pairs, grouped by verb family. The table
//! is deliberately small and fixed: unknown tokens are ignored by the
//! embedding step, so growing the table widens coverage without changing
//! the scoring model. Site-specific jargon belongs in `[vocabulary]`
//! config overrides, not here.

use accord_core::Axis;

/// Default entries. Must be conflict-free; `Vocabulary::default_table`
/// builds through the validating builder and a test pins this.
pub const DEFAULT_ENTRIES: &[(&str, Axis)] = &[
    // Creation: verbs that bring something into existence.
    ("create", Axis::Creation),
    ("make", Axis::Creation),
    ("build", Axis::Creation),
    ("new", Axis::Creation),
    ("init", Axis::Creation),
    ("initialize", Axis::Creation),
    ("generate", Axis::Creation),
    ("construct", Axis::Creation),
    ("spawn", Axis::Creation),
    ("add", Axis::Creation),
    ("insert", Axis::Creation),
    ("append", Axis::Creation),
    ("push", Axis::Creation),
    ("write", Axis::Creation),
    ("save", Axis::Creation),
    ("store", Axis::Creation),
    ("emit", Axis::Creation),
    ("produce", Axis::Creation),
    ("register", Axis::Creation),
    ("open", Axis::Creation),
    ("start", Axis::Creation),
    ("launch", Axis::Creation),
    ("compose", Axis::Creation),
    ("allocate", Axis::Creation),
    ("clone", Axis::Creation),
    ("copy", Axis::Creation),
    ("format", Axis::Creation),
    ("export", Axis::Creation),
    ("serialize", Axis::Creation),
    ("encode", Axis::Creation),
    ("render", Axis::Creation),
    ("print", Axis::Creation),
    ("log", Axis::Creation),
    ("setup", Axis::Creation),
    ("prepare", Axis::Creation),
    ("define", Axis::Creation),
    ("declare", Axis::Creation),
    ("publish", Axis::Creation),
    // Validation: verbs that check, guard, or gate.
    ("check", Axis::Validation),
    ("validate", Axis::Validation),
    ("verify", Axis::Validation),
    ("assert", Axis::Validation),
    ("ensure", Axis::Validation),
    ("test", Axis::Validation),
    ("guard", Axis::Validation),
    ("confirm", Axis::Validation),
    ("audit", Axis::Validation),
    ("sanitize", Axis::Validation),
    ("enforce", Axis::Validation),
    ("expect", Axis::Validation),
    ("handle", Axis::Validation),
    ("catch", Axis::Validation),
    ("require", Axis::Validation),
    ("authorize", Axis::Validation),
    ("authenticate", Axis::Validation),
    ("allow", Axis::Validation),
    ("deny", Axis::Validation),
    ("permit", Axis::Validation),
    ("approve", Axis::Validation),
    ("reject", Axis::Validation),
    ("accept", Axis::Validation),
    ("is", Axis::Validation),
    ("has", Axis::Validation),
    ("can", Axis::Validation),
    ("should", Axis::Validation),
    // Mutation: verbs that change or destroy existing state.
    ("set", Axis::Mutation),
    ("assign", Axis::Mutation),
    ("update", Axis::Mutation),
    ("delete", Axis::Mutation),
    ("remove", Axis::Mutation),
    ("destroy", Axis::Mutation),
    ("clear", Axis::Mutation),
    ("reset", Axis::Mutation),
    ("modify", Axis::Mutation),
    ("change", Axis::Mutation),
    ("drop", Axis::Mutation),
    ("apply", Axis::Mutation),
    ("move", Axis::Mutation),
    ("replace", Axis::Mutation),
    ("toggle", Axis::Mutation),
    ("swap", Axis::Mutation),
    ("sort", Axis::Mutation),
    ("merge", Axis::Mutation),
    ("pop", Axis::Mutation),
    ("stop", Axis::Mutation),
    ("close", Axis::Mutation),
    ("kill", Axis::Mutation),
    ("terminate", Axis::Mutation),
    ("cancel", Axis::Mutation),
    ("revoke", Axis::Mutation),
    ("purge", Axis::Mutation),
    ("flush", Axis::Mutation),
    ("commit", Axis::Mutation),
    ("rollback", Axis::Mutation),
    ("iterate", Axis::Mutation),
    ("process", Axis::Mutation),
    ("transform", Axis::Mutation),
    ("convert", Axis::Mutation),
    ("normalize", Axis::Mutation),
    ("strip", Axis::Mutation),
    ("trim", Axis::Mutation),
    ("truncate", Axis::Mutation),
    ("increment", Axis::Mutation),
    ("decrement", Axis::Mutation),
    ("disable", Axis::Mutation),
    ("enable", Axis::Mutation),
    ("patch", Axis::Mutation),
    ("mutate", Axis::Mutation),
    ("send", Axis::Mutation),
    ("dispatch", Axis::Mutation),
    ("execute", Axis::Mutation),
    ("run", Axis::Mutation),
    ("trigger", Axis::Mutation),
    ("schedule", Axis::Mutation),
    ("retry", Axis::Mutation),
    ("sync", Axis::Mutation),
    // Inspection: verbs that observe, retrieve, or derive knowledge.
    ("get", Axis::Inspection),
    ("read", Axis::Inspection),
    ("fetch", Axis::Inspection),
    ("find", Axis::Inspection),
    ("query", Axis::Inspection),
    ("search", Axis::Inspection),
    ("load", Axis::Inspection),
    ("parse", Axis::Inspection),
    ("compute", Axis::Inspection),
    ("calculate", Axis::Inspection),
    ("count", Axis::Inspection),
    ("list", Axis::Inspection),
    ("select", Axis::Inspection),
    ("filter", Axis::Inspection),
    ("scan", Axis::Inspection),
    ("lookup", Axis::Inspection),
    ("resolve", Axis::Inspection),
    ("extract", Axis::Inspection),
    ("inspect", Axis::Inspection),
    ("analyze", Axis::Inspection),
    ("detect", Axis::Inspection),
    ("measure", Axis::Inspection),
    ("observe", Axis::Inspection),
    ("peek", Axis::Inspection),
    ("view", Axis::Inspection),
    ("show", Axis::Inspection),
    ("display", Axis::Inspection),
    ("decode", Axis::Inspection),
    ("deserialize", Axis::Inspection),
    ("collect", Axis::Inspection),
    ("gather", Axis::Inspection),
    ("retrieve", Axis::Inspection),
    ("receive", Axis::Inspection),
    ("return", Axis::Inspection),
    ("yield", Axis::Inspection),
    ("compare", Axis::Inspection),
    ("match", Axis::Inspection),
    // Common domain nouns that carry a knowledge flavor in names.
    ("user", Axis::Inspection),
    ("data", Axis::Inspection),
    ("info", Axis::Inspection),
];
