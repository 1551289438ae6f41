//! The generated models file.

use std::path::{Path, PathBuf};

use shapegen_codegen::{
    builder::{CodeBuilder, CodeFragment},
    generation::ImportCollector,
};
use shapegen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;

/// A TypeScript module holding model declarations.
///
/// Renders imports first, then each declaration separated by a blank line.
#[derive(Debug, Clone, Default)]
pub struct ModelsTs {
    path: String,
    imports: ImportCollector,
    declarations: Vec<Vec<CodeFragment>>,
}

impl ModelsTs {
    /// Create an empty file at `path`, relative to the output directory.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Relative path of the file.
    pub fn relative_path(&self) -> &str {
        &self.path
    }

    /// Import a named symbol.
    pub fn import(&mut self, module: &str, symbol: &str) {
        self.imports.add(module, symbol);
    }

    /// Append a declaration.
    pub fn declare(&mut self, fragments: Vec<CodeFragment>) {
        self.declarations.push(fragments);
    }

    /// Number of declarations in the file.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl GeneratedFile for ModelsTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::default().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for (module, symbols) in self.imports.iter() {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            builder.push_line(&format!(
                "import {{ {} }} from \"{}\";",
                symbols.join(", "),
                module
            ));
        }

        if !self.imports.is_empty() && !self.declarations.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.declarations.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.emit(fragments);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = ModelsTs::new("models/models_0.ts");
        assert_eq!(file.render(), "");
        assert!(file.is_empty());
        assert_eq!(
            file.path(Path::new("out")),
            PathBuf::from("out/models/models_0.ts")
        );
    }

    #[test]
    fn test_imports_and_declarations() {
        let mut file = ModelsTs::new("models.ts");
        file.import("@aws-sdk/smithy-client", "SENSITIVE_STRING");
        file.import("@aws-sdk/smithy-client", "SENSITIVE_STRING");
        file.declare(vec![CodeFragment::line("export interface A {}")]);
        file.declare(vec![CodeFragment::line("export interface B {}")]);

        assert_eq!(
            file.render(),
            "import { SENSITIVE_STRING } from \"@aws-sdk/smithy-client\";\n\nexport interface A {}\n\nexport interface B {}\n"
        );
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn test_contents_has_header() {
        let mut file = ModelsTs::new("models.ts");
        file.declare(vec![CodeFragment::line("export interface A {}")]);

        assert_eq!(
            file.contents(),
            format!("{}\n\nexport interface A {{}}\n", GENERATED_HEADER)
        );
    }
}
