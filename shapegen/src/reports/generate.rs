//! Generate command report.

use std::path::PathBuf;

use shapegen_codegen::language::PreviewFile;
use shapegen_typescript::GenerationSummary;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target language of the generated code.
    pub language: &'static str,
    pub summary: GenerationSummary,
    pub result: GenerationResult,
}

/// Files written to disk, or a dry-run preview.
#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths written, relative to the output directory.
    pub written: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        out.key_value("Language", self.language);
        out.key_value("Structures", &self.summary.structures.to_string());
        out.key_value("Unions", &self.summary.unions.to_string());
        out.key_value("Redacted members", &self.summary.overrides.to_string());
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_summary(out);
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for path in &written.written {
            out.added_item(path);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_summary(out);
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }
}
