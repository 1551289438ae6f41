//! On-disk model format and its conversion into a [`Model`].

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    CodegenConfig, CollectionKind, Member, Model, Result, ScalarType, Shape, ShapeKind,
    SourceContext, Trait, Traits,
};

/// Root of a model file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawModel {
    #[serde(default)]
    codegen: CodegenConfig,
    #[serde(default)]
    shapes: IndexMap<String, RawShape>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawShapeType {
    Structure,
    Union,
    List,
    Set,
    Map,
    String,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Timestamp,
    Blob,
    Document,
}

impl RawShapeType {
    fn name(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Union => "union",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            other => other.scalar().map_or("scalar", |s| s.type_name()),
        }
    }

    fn scalar(self) -> Option<ScalarType> {
        Some(match self {
            Self::String => ScalarType::String,
            Self::Boolean => ScalarType::Boolean,
            Self::Byte => ScalarType::Byte,
            Self::Short => ScalarType::Short,
            Self::Integer => ScalarType::Integer,
            Self::Long => ScalarType::Long,
            Self::Float => ScalarType::Float,
            Self::Double => ScalarType::Double,
            Self::BigInteger => ScalarType::BigInteger,
            Self::BigDecimal => ScalarType::BigDecimal,
            Self::Timestamp => ScalarType::Timestamp,
            Self::Blob => ScalarType::Blob,
            Self::Document => ScalarType::Document,
            Self::Structure | Self::Union | Self::List | Self::Set | Self::Map => return None,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShape {
    #[serde(rename = "type")]
    ty: RawShapeType,
    #[serde(default)]
    traits: Vec<Trait>,
    documentation: Option<String>,
    /// Structure and union members.
    #[serde(default)]
    members: IndexMap<String, RawMember>,
    /// Collection element.
    member: Option<RawMember>,
    /// Map key.
    key: Option<RawMember>,
    /// Map value.
    value: Option<RawMember>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMember {
    target: String,
    #[serde(default)]
    traits: Vec<Trait>,
    documentation: Option<String>,
}

/// Resolves raw declarations against the set of known shape names.
struct Resolver<'a> {
    ctx: &'a SourceContext,
    known: HashSet<&'a str>,
}

impl Resolver<'_> {
    fn member(&self, shape: &str, name: &str, raw: RawMember) -> Result<Member> {
        if !self.known.contains(raw.target.as_str()) {
            return Err(self.ctx.unknown_target_error(shape, name, raw.target));
        }
        Ok(Member {
            name: name.to_string(),
            target: raw.target.into(),
            traits: raw.traits.into_iter().collect(),
            documentation: raw.documentation,
        })
    }

    fn required(
        &self,
        shape: &str,
        kind: &'static str,
        field: &'static str,
        raw: Option<RawMember>,
    ) -> Result<Member> {
        match raw {
            Some(raw) => self.member(shape, field, raw),
            None => Err(self.ctx.missing_member_error(shape, kind, field)),
        }
    }

    fn shape(&self, name: &str, raw: RawShape) -> Result<Shape> {
        let kind_name = raw.ty.name();
        let reject = |present: bool, field: &'static str| -> Result<()> {
            if present {
                Err(self.ctx.unexpected_member_error(name, kind_name, field))
            } else {
                Ok(())
            }
        };

        let has_members = !raw.members.is_empty();
        let kind = if let Some(scalar) = raw.ty.scalar() {
            reject(has_members, "members")?;
            reject(raw.member.is_some(), "member")?;
            reject(raw.key.is_some(), "key")?;
            reject(raw.value.is_some(), "value")?;
            ShapeKind::Scalar(scalar)
        } else {
            match raw.ty {
                RawShapeType::Structure | RawShapeType::Union => {
                    reject(raw.member.is_some(), "member")?;
                    reject(raw.key.is_some(), "key")?;
                    reject(raw.value.is_some(), "value")?;
                    let members = raw
                        .members
                        .into_iter()
                        .map(|(member_name, m)| self.member(name, &member_name, m))
                        .collect::<Result<Vec<_>>>()?;
                    if matches!(raw.ty, RawShapeType::Structure) {
                        ShapeKind::Structure { members }
                    } else {
                        ShapeKind::Union { members }
                    }
                }
                RawShapeType::List | RawShapeType::Set => {
                    reject(has_members, "members")?;
                    reject(raw.key.is_some(), "key")?;
                    reject(raw.value.is_some(), "value")?;
                    let kind = if matches!(raw.ty, RawShapeType::List) {
                        CollectionKind::List
                    } else {
                        CollectionKind::Set
                    };
                    ShapeKind::Collection {
                        kind,
                        member: self.required(name, kind_name, "member", raw.member)?,
                    }
                }
                // Only maps remain once scalars are handled.
                _ => {
                    reject(has_members, "members")?;
                    reject(raw.member.is_some(), "member")?;
                    ShapeKind::Map {
                        key: self.required(name, kind_name, "key", raw.key)?,
                        value: self.required(name, kind_name, "value", raw.value)?,
                    }
                }
            }
        };

        Ok(Shape {
            id: name.into(),
            kind,
            traits: raw.traits.into_iter().collect::<Traits>(),
            documentation: raw.documentation,
        })
    }
}

impl RawModel {
    /// Resolve every declaration and build the model.
    pub(crate) fn into_model(self, ctx: &SourceContext) -> Result<Model> {
        if let Some(name) = self
            .shapes
            .keys()
            .find(|name| ScalarType::from_prelude_name(name).is_some())
        {
            return Err(ctx.prelude_conflict_error(name.as_str()));
        }

        let names: Vec<String> = self.shapes.keys().cloned().collect();
        let resolver = Resolver {
            ctx,
            known: ScalarType::ALL
                .iter()
                .map(|s| s.prelude_name())
                .chain(names.iter().map(String::as_str))
                .collect(),
        };

        let mut model = Model::new().with_codegen(self.codegen);
        for (name, raw) in self.shapes {
            model.insert(resolver.shape(&name, raw)?);
        }
        Ok(model)
    }
}
