//! Shared code generation utilities for the shapegen generator.
//!
//! This crate provides language-agnostic abstractions used by
//! language-specific generators (e.g., `shapegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, TypeRef, etc.)
//! - [`generation`] - Output management (ImportCollector)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, SymbolProvider, NamingConvention)

pub mod builder;
pub mod generation;
pub mod language;

mod error;

pub use error::{CodegenError, Result};
