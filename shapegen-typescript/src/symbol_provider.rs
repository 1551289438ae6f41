//! Shape to TypeScript symbol resolution.

use std::collections::HashSet;

use shapegen_codegen::{
    CodegenError, Result,
    builder::{PrimitiveType, TypeMapper, TypeRef},
    language::SymbolProvider,
};
use shapegen_model::{Member, Model, ScalarType, Shape, ShapeId, ShapeKind};

use crate::{TS_NAMING, TypeScriptTypeMapper};

/// Resolves model shapes to TypeScript types.
///
/// Structures and unions become named types; lists, sets and maps are
/// spelled inline (`Array<T>`, `Record<string, T>`).
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptSymbolProvider<'a> {
    model: &'a Model,
}

impl<'a> TypeScriptSymbolProvider<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Resolve a shape and render it as TypeScript.
    pub fn type_name(&self, shape: &Shape) -> Result<String> {
        Ok(TypeScriptTypeMapper.render_type(&self.to_symbol(shape)?))
    }

    /// Resolve a member's target and render it as TypeScript.
    pub fn member_type_name(&self, member: &Member) -> Result<String> {
        Ok(TypeScriptTypeMapper.render_type(&self.member_symbol(member)?))
    }

    fn expect_shape(&self, id: &ShapeId) -> Result<&'a Shape> {
        self.model
            .shape(id)
            .ok_or_else(|| CodegenError::unknown_shape(id.clone()))
    }

    fn resolve(&self, shape: &'a Shape, inline: &mut HashSet<&'a ShapeId>) -> Result<TypeRef> {
        match &shape.kind {
            ShapeKind::Structure { .. } | ShapeKind::Union { .. } => {
                Ok(TypeRef::named(TS_NAMING.type_name(shape.id.as_str())))
            }
            ShapeKind::Collection { member, .. } => {
                let element = self.resolve_inline(shape, member, inline)?;
                Ok(TypeRef::array(element))
            }
            ShapeKind::Map { value, .. } => {
                let value = self.resolve_inline(shape, value, inline)?;
                Ok(TypeRef::map(value))
            }
            ShapeKind::Scalar(scalar) => Ok(TypeRef::primitive(primitive(*scalar))),
        }
    }

    /// Resolve the target of a collection or map member, tracking the
    /// inline shapes entered so far.
    fn resolve_inline(
        &self,
        owner: &'a Shape,
        member: &'a Member,
        inline: &mut HashSet<&'a ShapeId>,
    ) -> Result<TypeRef> {
        if !inline.insert(&owner.id) {
            return Err(CodegenError::RecursiveCollection {
                id: owner.id.clone(),
            });
        }
        let target = self.expect_shape(&member.target)?;
        let resolved = self.resolve(target, inline);
        inline.remove(&owner.id);
        resolved
    }
}

fn primitive(scalar: ScalarType) -> PrimitiveType {
    match scalar {
        ScalarType::String => PrimitiveType::String,
        ScalarType::Boolean => PrimitiveType::Bool,
        ScalarType::Byte
        | ScalarType::Short
        | ScalarType::Integer
        | ScalarType::Long
        | ScalarType::Float
        | ScalarType::Double
        | ScalarType::BigDecimal => PrimitiveType::Number,
        ScalarType::BigInteger => PrimitiveType::BigInt,
        ScalarType::Timestamp => PrimitiveType::Timestamp,
        ScalarType::Blob => PrimitiveType::Bytes,
        ScalarType::Document => PrimitiveType::Any,
    }
}

impl SymbolProvider for TypeScriptSymbolProvider<'_> {
    fn to_symbol(&self, shape: &Shape) -> Result<TypeRef> {
        // Re-borrow from the model so the traversal shares its lifetime.
        let shape = self.expect_shape(&shape.id)?;
        self.resolve(shape, &mut HashSet::new())
    }

    fn member_symbol(&self, member: &Member) -> Result<TypeRef> {
        let target = self.expect_shape(&member.target)?;
        self.resolve(target, &mut HashSet::new())
    }

    fn member_name(&self, member: &Member) -> String {
        TS_NAMING.field_name(&member.name)
    }
}
