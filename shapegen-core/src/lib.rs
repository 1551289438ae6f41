//! Core utilities and types for shapegen.
//!
//! This crate provides fundamental types and utilities used across
//! the shapegen workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile};
// String utilities
pub use utils::to_pascal_case;
