//! anagram-core — Pure anagram logic, no I/O.
//!
//! Builds character-frequency signatures and compares them. Frontends read
//! the input and render the resulting [`Verdict`].

pub mod config;
pub mod signature;
pub mod types;

pub use signature::{build_signature, check, signatures_equal, Signature};
pub use types::Verdict;
