//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use shapegen_model::{Member, Shape};

use crate::{CodegenError, builder::TypeRef};

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory
    pub written: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Resolves shapes and members to target-language symbols.
///
/// Resolution is deterministic: the same shape always yields the same
/// symbol.
pub trait SymbolProvider {
    /// Resolve a shape to its type.
    fn to_symbol(&self, shape: &Shape) -> Result<TypeRef, CodegenError>;

    /// Resolve the type of a member's target.
    fn member_symbol(&self, member: &Member) -> Result<TypeRef, CodegenError>;

    /// The sanitized property name for a member.
    fn member_name(&self, member: &Member) -> String;
}
