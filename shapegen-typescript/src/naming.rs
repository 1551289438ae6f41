//! TypeScript-specific naming conventions.

use shapegen_codegen::language::NamingConvention;
use shapegen_core::to_pascal_case;

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

fn member_name(name: &str) -> String {
    name.to_string()
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    shape_to_type: to_pascal_case,
    // Properties keep the member name as modeled
    member_to_field: member_name,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words and globals referenced by generated code
        "Array",
        "Date",
        "Object",
        "Record",
        "Uint8Array",
        "any",
        "as",
        "async",
        "await",
        "bigint",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
    ],
    // Assigning to this property would replace the object's prototype
    reserved_fields: &["__proto__"],
    escape_reserved: escape_ts_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_type() {
        assert_eq!(TS_NAMING.type_name("user_profile"), "UserProfile");
        assert_eq!(TS_NAMING.type_name("GetUserInput"), "GetUserInput");
    }

    #[test]
    fn test_ts_naming_type_escapes_builtins() {
        assert_eq!(TS_NAMING.type_name("Date"), "_Date");
        assert_eq!(TS_NAMING.type_name("record"), "_Record");
        assert_eq!(TS_NAMING.type_name("Object"), "_Object");
        assert_eq!(TS_NAMING.type_name("object"), "_Object");
        assert_eq!(TS_NAMING.type_name("User"), "User");
    }

    #[test]
    fn test_ts_naming_field() {
        assert_eq!(TS_NAMING.field_name("user_name"), "user_name");
        assert_eq!(TS_NAMING.field_name("class"), "class");
        assert_eq!(TS_NAMING.field_name("__proto__"), "___proto__");
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("async"));
        assert!(TS_NAMING.is_reserved("interface"));
        assert!(!TS_NAMING.is_reserved("hello"));
    }

    #[test]
    fn test_ts_safe_name_idempotent() {
        let once = TS_NAMING.safe_name("class");
        assert_eq!(once, "_class");
        assert_eq!(TS_NAMING.safe_name(&once), once);
        assert_eq!(TS_NAMING.safe_field(&TS_NAMING.safe_field("__proto__")), "___proto__");
    }
}
