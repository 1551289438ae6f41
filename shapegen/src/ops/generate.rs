//! Generate operation - models file generation.

use std::path::Path;

use eyre::{Context, Result};
use shapegen_codegen::language::LanguageCodegen;
use shapegen_model::Model;
use shapegen_typescript::{Generator, GeneratorSettings};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the models file path is relative to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Leave out documentation comments, whatever the model says.
    pub no_docs: bool,
    /// Models file path overriding `[codegen].output`.
    pub file: Option<&'a str>,
}

/// Execute the generate operation.
pub fn generate(model: &Model, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut settings = GeneratorSettings::from_config(model.codegen());
    if opts.no_docs {
        settings = settings.with_no_docs(true);
    }
    if let Some(file) = opts.file {
        settings = settings.with_output(file);
    }

    let generator = Generator::new(model).with_settings(settings);
    let summary = generator
        .build()
        .wrap_err("Failed to generate code")?
        .summary;

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview().wrap_err("Failed to generate code")?,
        })
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
        })
    };

    Ok(GenerateReport {
        language: generator.language(),
        summary,
        result,
    })
}
