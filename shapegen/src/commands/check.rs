use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use shapegen_model::Model;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model file (defaults to ./model.toml)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let model = Model::from_file(&self.model).unwrap_or_exit();

        let report = ops::check(&model, &self.model)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
