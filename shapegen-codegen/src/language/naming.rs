//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform shape and member names and how to keep them
/// clear of words the target language reserves.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a shape name to a type name (e.g., "user_list" -> "UserList")
    pub shape_to_type: fn(&str) -> String,
    /// Transform a member name to a property name
    pub member_to_field: fn(&str) -> String,
    /// Words that cannot be used as type names
    pub reserved_words: &'static [&'static str],
    /// Words that cannot be used as property names
    pub reserved_fields: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "_type")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name is a reserved property name.
    pub fn is_reserved_field(&self, name: &str) -> bool {
        self.reserved_fields.contains(&name)
    }

    /// Get a safe type name, escaping until no reserved word collides.
    ///
    /// Names that never collide come back unchanged, and applying this to
    /// its own output is a no-op.
    pub fn safe_name(&self, name: &str) -> String {
        self.escape_while(name, |n| self.is_reserved(n))
    }

    /// Get a safe property name, escaping until no reserved property collides.
    pub fn safe_field(&self, name: &str) -> String {
        self.escape_while(name, |n| self.is_reserved_field(n))
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.shape_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a property name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.member_to_field)(name);
        self.safe_field(&transformed)
    }

    fn escape_while(&self, name: &str, reserved: impl Fn(&str) -> bool) -> String {
        let mut name = name.to_string();
        while reserved(&name) {
            name = (self.escape_reserved)(&name);
        }
        name
    }
}
