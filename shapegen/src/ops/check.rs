//! Check operation - model validation and redaction overview.

use std::path::Path;

use eyre::{Context, Result};
use shapegen_model::{Model, ShapeKind};
use shapegen_typescript::Generator;

use crate::reports::{CheckReport, RedactedMember, ShapeCounts};

/// Execute the check operation.
///
/// Generates the models in memory, so every failure `generate` would hit
/// surfaces here too, and lists the members that will be redacted.
pub fn check(model: &Model, model_path: &Path) -> Result<CheckReport> {
    let generator = Generator::new(model);
    generator.build().wrap_err("Validation failed")?;

    let redacted = generator
        .redactions()
        .wrap_err("Validation failed")?
        .into_iter()
        .flat_map(|redaction| {
            let shape = redaction.shape.to_string();
            redaction
                .body
                .overrides()
                .iter()
                .map(|o| RedactedMember {
                    shape: shape.clone(),
                    member: o.name.clone(),
                    kind: o.expr.kind(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(CheckReport {
        model_path: model_path.to_path_buf(),
        shapes: count_shapes(model),
        redacted,
        warnings: suppression_warnings(model),
    })
}

fn count_shapes(model: &Model) -> ShapeCounts {
    let mut counts = ShapeCounts::default();
    for shape in model.declared_shapes() {
        match shape.kind {
            ShapeKind::Structure { .. } => counts.structures += 1,
            ShapeKind::Union { .. } => counts.unions += 1,
            ShapeKind::Collection { .. } => counts.collections += 1,
            ShapeKind::Map { .. } => counts.maps += 1,
            ShapeKind::Scalar(_) => counts.scalars += 1,
        }
    }
    counts
}

/// Suppression entries that do not name a member of a structure or union.
fn suppression_warnings(model: &Model) -> Vec<String> {
    let config = model.codegen();
    let mut warnings = Vec::new();
    for name in config.suppress.keys() {
        let Some(shape) = model
            .shape(&name.as_str().into())
            .filter(|s| s.is_structure() || s.is_union())
        else {
            warnings.push(format!(
                "suppression names '{}', which is not a structure or union",
                name
            ));
            continue;
        };
        for member in config.suppressed(name) {
            if !shape.members().iter().any(|m| &m.name == member) {
                warnings.push(format!(
                    "suppressed member '{}.{}' does not exist",
                    name, member
                ));
            }
        }
    }
    warnings
}
