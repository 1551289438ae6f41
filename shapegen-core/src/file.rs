use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content (without header)
    fn render(&self) -> String;

    /// Render the file content with the header from its rules prepended
    fn contents(&self) -> String {
        with_header(self.rules().header, &self.render())
    }

    /// Write the file to disk, replacing any existing file
    fn write(&self, base: &Path) -> Result<()> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

fn with_header(header: Option<&str>, content: &str) -> String {
    match header {
        Some(header) => format!("{}\n\n{}", header, content),
        None => content.to_string(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules for this file.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &with_header(self.rules.header, &self.content))
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line written above the content, followed by a blank line.
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Set the header line.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}
