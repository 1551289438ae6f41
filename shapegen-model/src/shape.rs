//! Shapes, members and traits.

use std::{collections::BTreeSet, fmt};

use serde::Deserialize;

/// Identity of a shape within a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    /// Create a shape id from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the shape name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ShapeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A semantic annotation attached to a shape or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trait {
    /// The value must be redacted in diagnostic output.
    Sensitive,
    /// The value is mandatory on construction.
    Required,
    /// The value may be generated by the client, so it is never required.
    AutoToken,
}

impl Trait {
    /// Name of the trait as written in model files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sensitive => "sensitive",
            Self::Required => "required",
            Self::AutoToken => "auto-token",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of traits applied to a shape or member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traits(BTreeSet<Trait>);

impl Traits {
    /// Create an empty trait set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a trait is present.
    pub fn has(&self, t: Trait) -> bool {
        self.0.contains(&t)
    }

    /// Apply a trait.
    pub fn insert(&mut self, t: Trait) {
        self.0.insert(t);
    }
}

impl FromIterator<Trait> for Traits {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A named, trait-bearing reference from an owning shape to a target shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Raw member name as written in the model.
    pub name: String,
    /// The shape this member refers to.
    pub target: ShapeId,
    /// Traits applied directly to the member.
    pub traits: Traits,
    /// Documentation text.
    pub documentation: Option<String>,
}

impl Member {
    /// Create a member with no traits.
    pub fn new(name: impl Into<String>, target: impl Into<ShapeId>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            traits: Traits::new(),
            documentation: None,
        }
    }

    /// Apply a trait.
    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.insert(t);
        self
    }

    /// Set documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Check whether the member itself carries a trait.
    ///
    /// Use [`Model::member_has_trait`](crate::Model::member_has_trait) to also
    /// consult the target shape.
    pub fn has_trait(&self, t: Trait) -> bool {
        self.traits.has(t)
    }
}

/// Sub-kind of a collection shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Set,
}

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
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

impl ScalarType {
    /// Every scalar type, in prelude order.
    pub const ALL: [ScalarType; 13] = [
        Self::String,
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::BigInteger,
        Self::BigDecimal,
        Self::Timestamp,
        Self::Blob,
        Self::Document,
    ];

    /// Name of the prelude shape for this scalar (e.g. "BigInteger").
    pub fn prelude_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::BigInteger => "BigInteger",
            Self::BigDecimal => "BigDecimal",
            Self::Timestamp => "Timestamp",
            Self::Blob => "Blob",
            Self::Document => "Document",
        }
    }

    /// Find the scalar whose prelude shape has the given name.
    pub fn from_prelude_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.prelude_name() == name)
    }

    /// Type name as written in model files (e.g. "big-integer").
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::BigInteger => "big-integer",
            Self::BigDecimal => "big-decimal",
            Self::Timestamp => "timestamp",
            Self::Blob => "blob",
            Self::Document => "document",
        }
    }
}

/// The kind of a shape together with its members.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Ordered, named set of members.
    Structure { members: Vec<Member> },
    /// Tagged union; every member is optional.
    Union { members: Vec<Member> },
    /// List or set with a single element member.
    Collection { kind: CollectionKind, member: Member },
    /// String-keyed map.
    Map { key: Member, value: Member },
    /// Leaf value.
    Scalar(ScalarType),
}

impl ShapeKind {
    /// Name of the kind as written in model files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Structure { .. } => "structure",
            Self::Union { .. } => "union",
            Self::Collection {
                kind: CollectionKind::List,
                ..
            } => "list",
            Self::Collection {
                kind: CollectionKind::Set,
                ..
            } => "set",
            Self::Map { .. } => "map",
            Self::Scalar(scalar) => scalar.type_name(),
        }
    }
}

/// A node in the schema's type graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub traits: Traits,
    pub documentation: Option<String>,
}

impl Shape {
    fn new(id: impl Into<ShapeId>, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            traits: Traits::new(),
            documentation: None,
        }
    }

    /// Create a structure shape.
    pub fn structure(id: impl Into<ShapeId>, members: Vec<Member>) -> Self {
        Self::new(id, ShapeKind::Structure { members })
    }

    /// Create a union shape.
    pub fn union(id: impl Into<ShapeId>, members: Vec<Member>) -> Self {
        Self::new(id, ShapeKind::Union { members })
    }

    /// Create a list shape whose element member targets `target`.
    pub fn list(id: impl Into<ShapeId>, target: impl Into<ShapeId>) -> Self {
        Self::collection(id, CollectionKind::List, Member::new("member", target))
    }

    /// Create a set shape whose element member targets `target`.
    pub fn set(id: impl Into<ShapeId>, target: impl Into<ShapeId>) -> Self {
        Self::collection(id, CollectionKind::Set, Member::new("member", target))
    }

    /// Create a collection shape with a fully specified element member.
    pub fn collection(id: impl Into<ShapeId>, kind: CollectionKind, member: Member) -> Self {
        Self::new(id, ShapeKind::Collection { kind, member })
    }

    /// Create a map shape with `String` keys and values targeting `value`.
    pub fn map(id: impl Into<ShapeId>, value: impl Into<ShapeId>) -> Self {
        Self::map_with(
            id,
            Member::new("key", ScalarType::String.prelude_name()),
            Member::new("value", value),
        )
    }

    /// Create a map shape with fully specified key and value members.
    pub fn map_with(id: impl Into<ShapeId>, key: Member, value: Member) -> Self {
        Self::new(id, ShapeKind::Map { key, value })
    }

    /// Create a scalar shape.
    pub fn scalar(id: impl Into<ShapeId>, scalar: ScalarType) -> Self {
        Self::new(id, ShapeKind::Scalar(scalar))
    }

    /// Apply a trait.
    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.insert(t);
        self
    }

    /// Set documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Check whether the shape carries a trait.
    pub fn has_trait(&self, t: Trait) -> bool {
        self.traits.has(t)
    }

    /// All members of the shape in declaration order.
    pub fn members(&self) -> Vec<&Member> {
        match &self.kind {
            ShapeKind::Structure { members } | ShapeKind::Union { members } => {
                members.iter().collect()
            }
            ShapeKind::Collection { member, .. } => vec![member],
            ShapeKind::Map { key, value } => vec![key, value],
            ShapeKind::Scalar(_) => Vec::new(),
        }
    }

    pub fn is_structure(&self) -> bool {
        matches!(self.kind, ShapeKind::Structure { .. })
    }

    pub fn is_union(&self) -> bool {
        matches!(self.kind, ShapeKind::Union { .. })
    }
}
