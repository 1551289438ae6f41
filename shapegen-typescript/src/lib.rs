//! TypeScript model generator for shapegen.
//!
//! Turns a [`Model`](shapegen_model::Model) into a single TypeScript module
//! holding one interface per structure and union. Every structure also gets a
//! `filterSensitiveLog` helper that returns a copy of a value with sensitive
//! data replaced by a placeholder.
//!
//! # Usage
//!
//! ```ignore
//! use shapegen_codegen::language::LanguageCodegen;
//! use shapegen_model::Model;
//! use shapegen_typescript::Generator;
//! use std::path::Path;
//!
//! let model = Model::from_file("model.toml")?;
//! let generator = Generator::new(&model);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("output"))?;
//! ```
//!
//! # Generated Output
//!
//! - `models/models_0.ts` by default, configurable through `[codegen].output`.

mod files;
mod generator;
mod members;
mod naming;
mod redaction;
mod sensitivity;
mod structure;
mod symbol_provider;
mod type_mapper;

pub use files::{GENERATED_HEADER, ModelsTs};
pub use generator::{
    DEFAULT_OUTPUT, DEFAULT_PLACEHOLDER_IMPORT, GeneratedModels, GenerationSummary, Generator,
    GeneratorSettings, StructureRedaction,
};
pub use members::{MemberOptions, MemberWriter, effective_required, is_optional};
pub use naming::TS_NAMING;
pub use redaction::{
    DEFAULT_PLACEHOLDER, MemberOverride, RedactExpr, RedactionBody, RedactionSynthesizer,
};
pub use sensitivity::IterationAnalyzer;
pub use structure::{ShapeOutput, StructureGenerator};
pub use symbol_provider::TypeScriptSymbolProvider;
pub use type_mapper::TypeScriptTypeMapper;
