//! Shared utility functions for code generation.

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Only `_`, `-` and whitespace separate words. Case inside a word is kept,
/// so names that are already PascalCase, acronyms included, pass through.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .map(capitalize)
        .collect()
}
