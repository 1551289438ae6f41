use shapegen_model::ShapeId;
use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Faults raised while generating code for a shape.
///
/// Each variant names the shape being generated so the failure can be traced
/// back to the model.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A member targets a shape the model does not contain.
    #[error("shape '{id}' is not defined in the model")]
    UnknownShape { id: ShapeId },

    /// A list or map reaches itself without passing through a named type.
    #[error("collection '{id}' contains itself and cannot be expressed as an inline type")]
    RecursiveCollection { id: ShapeId },

    /// Two shapes resolve to the same type name.
    #[error("shapes '{first}' and '{second}' both resolve to the type name '{name}'")]
    DuplicateTypeName {
        name: String,
        first: ShapeId,
        second: ShapeId,
    },

    /// Element-wise redaction was requested for a member that cannot hold
    /// sensitive data.
    #[error("{kind} redaction attempted for '{shape}' while it was not required")]
    IterationNotRequired { shape: ShapeId, kind: &'static str },
}

impl CodegenError {
    /// Create an unknown shape error.
    pub fn unknown_shape(id: impl Into<ShapeId>) -> Self {
        Self::UnknownShape { id: id.into() }
    }
}
