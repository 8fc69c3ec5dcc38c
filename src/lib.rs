//! Parses C source with tree-sitter, walks the resulting syntax tree to collect structural
//! features, and infers an algorithmic recurrence for each recursive function it finds.
//!
//! - [`text`] / [`node`] — byte-range and syntax-tree query utilities
//! - [`classify`] — expression → {divide, shift, decrease} classifier
//! - [`alias`] — per-function local alias table
//! - [`frame`] — per-function walking state and recurrence accumulators
//! - [`walker`] — the tree descent driving the classifier, alias table, and frames
//! - [`recurrence`] — frame → output recurrence record
//! - [`model`] — the serializable response document
//! - [`analyze`] — the `parse_code` entry point tying the above together
//! - [`error`] / [`http`] — the HTTP transport around the analyzer

pub mod alias;
pub mod analyze;
pub mod classify;
pub mod error;
pub mod frame;
pub mod http;
pub mod model;
pub mod node;
pub mod recurrence;
pub mod text;
pub mod traverse;
pub mod walker;

pub use analyze::parse_code;
