use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use shapegen_model::Model;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the model file (defaults to ./model.toml)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Models file path relative to the output directory (overrides [codegen].output)
    #[arg(long)]
    pub file: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave out documentation comments
    #[arg(long)]
    pub no_docs: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let model = Model::from_file(&self.model).unwrap_or_exit();

        let report = ops::generate(
            &model,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                no_docs: self.no_docs,
                file: self.file.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
