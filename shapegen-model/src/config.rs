//! Generator configuration carried in the model file.

use indexmap::IndexMap;
use serde::Deserialize;

/// The `[codegen]` table of a model file.
///
/// Every field is optional; generators apply their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Output path of the generated models file, relative to the output directory.
    pub output: Option<String>,
    /// Skip documentation comments on generated members.
    pub no_docs: bool,
    /// Identifier substituted for sensitive values.
    pub placeholder: Option<String>,
    /// Module the placeholder is imported from.
    pub placeholder_import: Option<String>,
    /// Members left out of each structure's declaration, keyed by shape name.
    pub suppress: IndexMap<String, Vec<String>>,
}

impl CodegenConfig {
    /// Members suppressed for the given shape.
    pub fn suppressed(&self, shape: &str) -> &[String] {
        self.suppress.get(shape).map(Vec::as_slice).unwrap_or(&[])
    }
}
