//! Source span lookup for diagnostics.

use miette::SourceSpan;

/// Find the span of a shape declaration in a TOML or JSON model file.
pub(crate) fn find_shape_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("[shapes.{}]", name),   // [shapes.Name]
        format!("[shapes.{}.", name),   // [shapes.Name.members.x]
        format!("\"{}\":", name),       // JSON: "Name": { ... }
        format!("\"{}\" :", name),      // JSON with space before colon
        format!("shapes.{} ", name),    // dotted key: shapes.Name = { ... }
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // Point at the name itself, not the surrounding syntax.
            let start = pos + pattern.find(name).unwrap_or(0);
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    None
}

/// Find the span of a quoted member target (`target = "Name"`).
pub(crate) fn find_target_span(src: &str, target: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", target);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, target.len())))
}

/// Convert a 1-based line/column pair to a byte offset.
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }
    None
}
