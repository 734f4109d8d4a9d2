//! Line parsing: word splitting and sub-command chaining.

pub mod chain;
pub mod tokens;
