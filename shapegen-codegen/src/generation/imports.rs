//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted, so the
/// rendered import block is deterministic.
///
/// # Example
///
/// ```
/// use shapegen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@aws-sdk/smithy-client", "SENSITIVE_STRING");
/// imports.add("@aws-sdk/smithy-client", "SENSITIVE_STRING");
///
/// let (module, symbols) = imports.iter().next().unwrap();
/// assert_eq!(module, "@aws-sdk/smithy-client");
/// assert_eq!(symbols.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}
