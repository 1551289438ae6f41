use std::{path::Path, str::FromStr};

use indexmap::IndexMap;

use crate::{
    CodegenConfig, Error, Member, Result, ScalarType, Shape, ShapeId, SourceContext, Trait,
    raw::RawModel,
};

/// A resolved shape graph plus generator configuration.
///
/// Every model starts with the prelude scalars (`String`, `Boolean`, ...)
/// already declared, so members may target them without declaring them.
#[derive(Debug, Clone)]
pub struct Model {
    shapes: IndexMap<ShapeId, Shape>,
    codegen: CodegenConfig,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "model.toml")
    }
}

impl Model {
    /// Create a model containing only the prelude scalars.
    pub fn new() -> Self {
        let shapes = ScalarType::ALL
            .into_iter()
            .map(|scalar| {
                let shape = Shape::scalar(scalar.prelude_name(), scalar);
                (shape.id.clone(), shape)
            })
            .collect();

        Self {
            shapes,
            codegen: CodegenConfig::default(),
        }
    }

    /// Load a model file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content, &filename),
            Some("json") => Self::from_json_str(&content, &filename),
            _ => Err(Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })),
        }
    }

    /// Parse a TOML model with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawModel = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        raw.into_model(&ctx)
    }

    /// Parse a JSON model with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawModel = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        raw.into_model(&ctx)
    }

    /// Replace the generator configuration.
    pub fn with_codegen(mut self, codegen: CodegenConfig) -> Self {
        self.codegen = codegen;
        self
    }

    /// Add a shape (builder style).
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.insert(shape);
        self
    }

    /// Add or replace a shape.
    pub fn insert(&mut self, shape: Shape) {
        self.shapes.insert(shape.id.clone(), shape);
    }

    /// Look up a shape by id.
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Shapes declared by the model, excluding the prelude.
    pub fn declared_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values().filter(|shape| !Self::is_prelude(&shape.id))
    }

    /// Whether the id names a prelude scalar.
    pub fn is_prelude(id: &ShapeId) -> bool {
        ScalarType::from_prelude_name(id.as_str()).is_some()
    }

    /// The shape a member targets.
    pub fn target(&self, member: &Member) -> Option<&Shape> {
        self.shape(&member.target)
    }

    /// Check a trait on the member, falling back to its target shape.
    pub fn member_has_trait(&self, member: &Member, t: Trait) -> bool {
        member.has_trait(t) || self.target(member).is_some_and(|shape| shape.has_trait(t))
    }

    /// Generator configuration from the `[codegen]` table.
    pub fn codegen(&self) -> &CodegenConfig {
        &self.codegen
    }
}
