//! Iteration-necessity analysis.
//!
//! Decides whether a list or map member needs element-wise redaction: only
//! a path ending in a structure can hide a sensitive value that the
//! structure's own `filterSensitiveLog` must strip.

use std::collections::HashSet;

use shapegen_codegen::{CodegenError, Result};
use shapegen_model::{Member, Model, Shape, ShapeId, ShapeKind};

/// Answers whether redaction must iterate into a member's value.
#[derive(Debug, Clone, Copy)]
pub struct IterationAnalyzer<'a> {
    model: &'a Model,
}

impl<'a> IterationAnalyzer<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Whether the member's target can reach a structure.
    ///
    /// Structures answer `true`; lists, sets and maps defer to their element
    /// or value member; scalars and unions answer `false`. A list or map seen
    /// twice on the same path answers `false`, since a pure collection cycle
    /// never reaches a structure.
    pub fn iteration_required(&self, member: &Member) -> Result<bool> {
        self.visit(member, &mut HashSet::new())
    }

    fn visit(&self, member: &Member, path: &mut HashSet<&'a ShapeId>) -> Result<bool> {
        let target = self.target(member)?;
        match &target.kind {
            ShapeKind::Structure { .. } => Ok(true),
            ShapeKind::Collection { member: next, .. } | ShapeKind::Map { value: next, .. } => {
                if !path.insert(&target.id) {
                    return Ok(false);
                }
                let required = self.visit(next, path);
                path.remove(&target.id);
                required
            }
            ShapeKind::Union { .. } | ShapeKind::Scalar(_) => Ok(false),
        }
    }

    fn target(&self, member: &Member) -> Result<&'a Shape> {
        self.model
            .target(member)
            .ok_or_else(|| CodegenError::unknown_shape(member.target.clone()))
    }
}

#[cfg(test)]
mod tests {
    use shapegen_model::{ScalarType, Trait};

    use super::*;

    fn model() -> Model {
        Model::new()
            .with_shape(Shape::structure(
                "Inner",
                vec![Member::new("secret", "String").with_trait(Trait::Sensitive)],
            ))
            .with_shape(Shape::union("Choice", vec![Member::new("inner", "Inner")]))
            .with_shape(Shape::list("Names", "String"))
            .with_shape(Shape::list("Inners", "Inner"))
            .with_shape(Shape::map("NamesByKey", "Names"))
            .with_shape(Shape::map("InnersByKey", "Inners"))
            .with_shape(Shape::list("Choices", "Choice"))
            .with_shape(Shape::scalar("Token", ScalarType::String).with_trait(Trait::Sensitive))
    }

    fn required(model: &Model, target: &str) -> bool {
        IterationAnalyzer::new(model)
            .iteration_required(&Member::new("m", target))
            .unwrap()
    }

    #[test]
    fn test_scalars_never_require_iteration() {
        let model = model();
        assert!(!required(&model, "String"));
        assert!(!required(&model, "Token"));
    }

    #[test]
    fn test_structures_require_iteration() {
        assert!(required(&model(), "Inner"));
    }

    #[test]
    fn test_unions_are_not_iterated() {
        let model = model();
        assert!(!required(&model, "Choice"));
        assert!(!required(&model, "Choices"));
    }

    #[test]
    fn test_collections_defer_to_elements() {
        let model = model();
        assert!(!required(&model, "Names"));
        assert!(required(&model, "Inners"));
        assert!(!required(&model, "NamesByKey"));
        assert!(required(&model, "InnersByKey"));
    }

    #[test]
    fn test_collection_cycle_terminates() {
        let model = Model::new()
            .with_shape(Shape::list("Forest", "Trees"))
            .with_shape(Shape::map("Trees", "Forest"));
        assert!(!required(&model, "Forest"));
    }

    #[test]
    fn test_structure_cycle_terminates() {
        let model = Model::new()
            .with_shape(Shape::structure(
                "Node",
                vec![Member::new("children", "NodeList")],
            ))
            .with_shape(Shape::list("NodeList", "Node"));
        assert!(required(&model, "NodeList"));
    }

    #[test]
    fn test_dangling_target() {
        let model = Model::new().with_shape(Shape::list("Broken", "Missing"));
        let err = IterationAnalyzer::new(&model)
            .iteration_required(&Member::new("m", "Broken"))
            .unwrap_err();
        assert!(matches!(err, CodegenError::UnknownShape { .. }));
    }
}
