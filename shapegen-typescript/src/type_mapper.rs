//! TypeScript type mapper implementation.

use shapegen_codegen::builder::{PrimitiveType, TypeMapper};

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "string",
            PrimitiveType::Bool => "boolean",
            PrimitiveType::Number => "number",
            PrimitiveType::BigInt => "bigint",
            PrimitiveType::Timestamp => "Date",
            PrimitiveType::Bytes => "Uint8Array",
            PrimitiveType::Any => "any",
        }
        .to_string()
    }

    fn map_array(&self, inner: &str) -> String {
        format!("Array<{}>", inner)
    }

    fn map_map(&self, value: &str) -> String {
        format!("Record<string, {}>", value)
    }
}

#[cfg(test)]
mod tests {
    use shapegen_codegen::builder::TypeRef;

    use super::*;

    #[test]
    fn test_typescript_primitives() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_primitive(PrimitiveType::String), "string");
        assert_eq!(mapper.map_primitive(PrimitiveType::Bool), "boolean");
        assert_eq!(mapper.map_primitive(PrimitiveType::Number), "number");
        assert_eq!(mapper.map_primitive(PrimitiveType::BigInt), "bigint");
        assert_eq!(mapper.map_primitive(PrimitiveType::Timestamp), "Date");
        assert_eq!(mapper.map_primitive(PrimitiveType::Bytes), "Uint8Array");
        assert_eq!(mapper.map_primitive(PrimitiveType::Any), "any");
    }

    #[test]
    fn test_typescript_composite_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(
            mapper.render_type(&TypeRef::array(TypeRef::named("User"))),
            "Array<User>"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::map(TypeRef::array(TypeRef::primitive(PrimitiveType::String)))),
            "Record<string, Array<string>>"
        );
    }
}
