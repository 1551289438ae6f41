//! Check command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    pub model_path: PathBuf,
    pub shapes: ShapeCounts,
    /// Members that receive a `filterSensitiveLog` override.
    pub redacted: Vec<RedactedMember>,
    pub warnings: Vec<String>,
}

/// Declared shapes by kind.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub structures: usize,
    pub unions: usize,
    pub collections: usize,
    pub maps: usize,
    pub scalars: usize,
}

impl ShapeCounts {
    pub fn total(&self) -> usize {
        self.structures + self.unions + self.collections + self.maps + self.scalars
    }
}

/// One redaction override.
#[derive(Debug, PartialEq, Eq)]
pub struct RedactedMember {
    pub shape: String,
    pub member: String,
    /// How the value is redacted: placeholder, delegate, elements or entries.
    pub kind: &'static str,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        out.newline();

        let counts = &self.shapes;
        out.section(&format!("Shapes ({})", counts.total()));
        out.key_value("  structures", &counts.structures.to_string());
        out.key_value("  unions", &counts.unions.to_string());
        out.key_value("  collections", &counts.collections.to_string());
        out.key_value("  maps", &counts.maps.to_string());
        out.key_value("  scalars", &counts.scalars.to_string());

        out.newline();
        if self.redacted.is_empty() {
            out.preformatted("No sensitive members");
            return;
        }
        out.section(&format!("Redacted members ({})", self.redacted.len()));
        for member in &self.redacted {
            out.list_item(&format!("{}.{} ({})", member.shape, member.member, member.kind));
        }
    }
}
