//! Hash collection aliases used throughout the workspace.
//!
//! FxHash is a non-cryptographic hasher; all keys here are short identifier
//! strings or small integers, never attacker-controlled collision targets.

pub use rustc_hash::{FxHashMap, FxHashSet};
