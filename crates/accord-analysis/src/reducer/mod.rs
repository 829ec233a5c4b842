//! Syntax reducer: function syntax → token bags.
//!
//! Two halves: `split_identifier` turns a declared name into its word
//! multiset, and `reduce_body` turns the body constructs into operation
//! verbs under a fixed, documented policy. The reducer decides WHICH
//! literal tokens a construct emits; what those tokens *mean* is entirely
//! the vocabulary table's business.

pub mod body;
pub mod identifier;

pub use body::reduce_body;
pub use identifier::{leading_token, split_identifier};
