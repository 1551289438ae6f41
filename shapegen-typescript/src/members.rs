//! Member declarations for interfaces.

use std::collections::BTreeSet;

use shapegen_codegen::{Result, builder::CodeFragment, language::SymbolProvider};
use shapegen_model::{Member, Shape, Trait};

use crate::TypeScriptSymbolProvider;

/// Options for one member emission pass.
///
/// Built once per shape and passed by reference; emission never changes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberOptions {
    /// Raw member names left out of the declaration.
    pub skip: BTreeSet<String>,
    /// Text placed before every member name (e.g. `readonly `).
    pub prefix: String,
    /// Leave out documentation comments.
    pub no_docs: bool,
}

impl MemberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the given members.
    pub fn skip<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the declaration prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set whether documentation comments are emitted.
    pub fn no_docs(mut self, no_docs: bool) -> Self {
        self.no_docs = no_docs;
        self
    }

    fn is_skipped(&self, member: &Member) -> bool {
        self.skip.contains(&member.name)
    }
}

/// Whether a member must be present on construction.
///
/// Auto-filled tokens are never required, so callers may omit them.
pub fn effective_required(member: &Member) -> bool {
    member.has_trait(Trait::Required) && !member.has_trait(Trait::AutoToken)
}

/// Whether a member is declared with `?`.
pub fn is_optional(owner: &Shape, member: &Member) -> bool {
    owner.is_union() || !effective_required(member)
}

/// Emits member declarations for structures and unions.
pub struct MemberWriter<'a> {
    symbols: TypeScriptSymbolProvider<'a>,
}

impl<'a> MemberWriter<'a> {
    pub fn new(symbols: TypeScriptSymbolProvider<'a>) -> Self {
        Self { symbols }
    }

    /// Declarations for every member of `owner` not suppressed by `options`.
    ///
    /// Each documented member is followed by a blank line unless it is the
    /// last member written.
    pub fn declarations(&self, owner: &Shape, options: &MemberOptions) -> Result<Vec<CodeFragment>> {
        let members = owner.members();
        let visible: Vec<&Member> = members
            .into_iter()
            .filter(|m| !options.is_skipped(m))
            .collect();

        let mut fragments = Vec::new();
        for (position, member) in visible.iter().enumerate() {
            let documentation = member
                .documentation
                .as_deref()
                .filter(|_| !options.no_docs);
            if let Some(doc) = documentation {
                fragments.push(CodeFragment::jsdoc(doc));
            }

            fragments.push(CodeFragment::line(self.declaration(owner, member, options)?));

            if documentation.is_some() && position + 1 < visible.len() {
                fragments.push(CodeFragment::blank());
            }
        }
        Ok(fragments)
    }

    fn declaration(&self, owner: &Shape, member: &Member, options: &MemberOptions) -> Result<String> {
        let name = self.symbols.member_name(member);
        let ty = self.symbols.member_type_name(member)?;
        let optional = if is_optional(owner, member) { "?" } else { "" };
        let nullable = if effective_required(member) {
            " | undefined"
        } else {
            ""
        };
        Ok(format!(
            "{}{}{}: {}{};",
            options.prefix, name, optional, ty, nullable
        ))
    }
}

#[cfg(test)]
mod tests {
    use shapegen_codegen::builder::CodeBuilder;
    use shapegen_model::Model;

    use super::*;

    fn render(model: &Model, owner: &str, options: &MemberOptions) -> String {
        let writer = MemberWriter::new(TypeScriptSymbolProvider::new(model));
        let owner = model.shape(&owner.into()).unwrap();
        let mut builder = CodeBuilder::typescript();
        builder.emit(&writer.declarations(owner, options).unwrap());
        builder.build()
    }

    #[test]
    fn test_required_and_optional_members() {
        let model = Model::new().with_shape(Shape::structure(
            "User",
            vec![
                Member::new("name", "String").with_trait(Trait::Required),
                Member::new("age", "Integer"),
            ],
        ));

        assert_eq!(
            render(&model, "User", &MemberOptions::new()),
            "name: string | undefined;\nage?: number;\n"
        );
    }

    #[test]
    fn test_auto_token_is_optional() {
        let model = Model::new().with_shape(Shape::structure(
            "CreateInput",
            vec![
                Member::new("token", "String")
                    .with_trait(Trait::Required)
                    .with_trait(Trait::AutoToken),
            ],
        ));

        assert_eq!(
            render(&model, "CreateInput", &MemberOptions::new()),
            "token?: string;\n"
        );
    }

    #[test]
    fn test_union_members_always_optional() {
        let model = Model::new().with_shape(Shape::union(
            "Choice",
            vec![
                Member::new("text", "String").with_trait(Trait::Required),
                Member::new("count", "Long"),
            ],
        ));

        assert_eq!(
            render(&model, "Choice", &MemberOptions::new()),
            "text?: string | undefined;\ncount?: number;\n"
        );
    }

    #[test]
    fn test_skip_and_prefix() {
        let model = Model::new().with_shape(Shape::structure(
            "User",
            vec![
                Member::new("id", "String"),
                Member::new("internal", "String"),
                Member::new("__proto__", "String"),
            ],
        ));

        let options = MemberOptions::new().skip(["internal"]).prefix("readonly ");
        let output = render(&model, "User", &options);

        assert_eq!(output, "readonly id?: string;\nreadonly ___proto__?: string;\n");
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_docs_and_separators() {
        let model = Model::new().with_shape(Shape::structure(
            "User",
            vec![
                Member::new("name", "String").doc("The name."),
                Member::new("age", "Integer"),
                Member::new("email", "String").doc("The email."),
            ],
        ));

        assert_eq!(
            render(&model, "User", &MemberOptions::new()),
            "/**\n * The name.\n */\nname?: string;\n\nage?: number;\n/**\n * The email.\n */\nemail?: string;\n"
        );
    }

    #[test]
    fn test_no_separator_after_last_visible_member() {
        let model = Model::new().with_shape(Shape::structure(
            "User",
            vec![
                Member::new("name", "String").doc("The name."),
                Member::new("hidden", "String"),
            ],
        ));

        let options = MemberOptions::new().skip(["hidden"]);
        assert_eq!(
            render(&model, "User", &options),
            "/**\n * The name.\n */\nname?: string;\n"
        );
    }

    #[test]
    fn test_no_docs() {
        let model = Model::new().with_shape(Shape::structure(
            "User",
            vec![
                Member::new("name", "String").doc("The name."),
                Member::new("age", "Integer"),
            ],
        ));

        let options = MemberOptions::new().no_docs(true);
        assert_eq!(
            render(&model, "User", &options),
            "name?: string;\nage?: number;\n"
        );
    }

    #[test]
    fn test_dangling_target_propagates() {
        let model = Model::new().with_shape(Shape::structure(
            "User",
            vec![Member::new("pet", "Pet")],
        ));
        let writer = MemberWriter::new(TypeScriptSymbolProvider::new(&model));
        let owner = model.shape(&"User".into()).unwrap();

        assert!(writer.declarations(owner, &MemberOptions::new()).is_err());
    }
}
