//! Data models for the Team Member Directory.
//!
//! Field names serialize as camelCase to match the public JSON contract.

mod member;

pub use member::*;
