//! TypeScript file generators.

mod models_ts;

pub use models_ts::ModelsTs;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by shapegen. DO NOT EDIT.";
