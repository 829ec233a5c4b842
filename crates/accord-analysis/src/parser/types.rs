//! Syntax shapes handed from the parser to the reducer.

use smallvec::SmallVec;

/// Body constructs the reducer knows how to tokenize — a closed set.
///
/// Anything the grammar produces outside this set lands in `Other` with its
/// node kind preserved: one unrecognized construct never aborts the
/// analysis of the rest of the function or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyConstruct {
    /// A plain call; `head` is the callee identifier (`fetch(...)`).
    Call { head: String },
    /// A call on an attribute; `head` is the method name
    /// (`database.delete_user(...)` → `delete_user`).
    MethodCall { head: String },
    /// Plain, augmented, or walrus assignment.
    Assignment,
    Return,
    /// `if`/`elif`, ternary expressions, `match`, comprehension filters.
    Conditional,
    /// `for`/`while` and comprehensions.
    Loop,
    /// One per `except` clause.
    TryHandler,
    /// Marker only — the nested definition itself is analyzed as its own
    /// record and contributes nothing to the enclosing body.
    NestedFunction,
    /// Unclassified syntax, kept for diagnostics.
    Other { kind: String },
}

/// Most function bodies are short; keep small ones inline.
pub type BodyConstructs = SmallVec<[BodyConstruct; 8]>;

/// One function definition, reduced to what scoring needs.
#[derive(Debug, Clone)]
pub struct FunctionSyntax {
    /// Dotted path of enclosing classes and defs (`Service.save.inner`).
    pub qualified_name: String,
    /// The declared name alone (`inner`, `<lambda>`).
    pub name: String,
    /// 1-based source line of the definition.
    pub line: u32,
    /// Body constructs in source order, nested bodies excluded.
    pub body: BodyConstructs,
    /// Definitions nested inside this one, analyzed independently.
    pub nested: Vec<FunctionSyntax>,
}
