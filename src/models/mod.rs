//! Models module for the playground
//!
//! Fragment kinds and the fixed three-buffer record the rest of the crate
//! operates on.

pub mod fragment;
pub mod sources;

// Re-export commonly used types
pub use fragment::*;
pub use sources::Sources;
