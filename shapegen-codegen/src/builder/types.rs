//! Language-agnostic type system for code generation.
//!
//! Shapes resolve to a [`TypeRef`]; a [`TypeMapper`] turns it into the
//! target language's spelling.

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type (string, number, bool, etc.).
    Primitive(PrimitiveType),
    /// An ordered collection of `T`.
    Array(Box<TypeRef>),
    /// A string-keyed map with values of `T`.
    Map(Box<TypeRef>),
    /// A named type (interface, class, alias).
    Named(String),
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create a string-keyed map type reference.
    pub fn map(value: TypeRef) -> Self {
        Self::Map(Box::new(value))
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Primitive types supported across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Text (TS: string).
    String,
    /// Boolean (TS: boolean).
    Bool,
    /// Any fixed-width or decimal number (TS: number).
    Number,
    /// Arbitrary precision integer (TS: bigint).
    BigInt,
    /// Point in time (TS: Date).
    Timestamp,
    /// Binary data (TS: Uint8Array).
    Bytes,
    /// Untyped document value (TS: any).
    Any,
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map an array type (e.g., `Array<T>`).
    fn map_array(&self, inner: &str) -> String;

    /// Map a string-keyed map type (e.g., `Record<string, T>`).
    fn map_map(&self, value: &str) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str)
            }
            TypeRef::Map(value) => {
                let value_str = self.render_type(value);
                self.map_map(&value_str)
            }
            TypeRef::Named(name) => name.clone(),
        }
    }
}
