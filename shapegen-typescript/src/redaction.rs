//! Synthesis of `filterSensitiveLog` bodies.
//!
//! A structure's helper returns a shallow copy of its argument with one
//! override per member that holds sensitive data. Overrides are built as a
//! [`RedactExpr`] tree and only turned into TypeScript by [`RedactionBody`].

use std::fmt;

use shapegen_codegen::{
    CodegenError, Result,
    builder::{CodeFragment, Renderable},
    language::SymbolProvider,
};
use shapegen_model::{Member, Model, Shape, ShapeKind, Trait};
use tracing::debug;

use crate::{IterationAnalyzer, TypeScriptSymbolProvider};

/// Identifier substituted for sensitive values by default.
pub const DEFAULT_PLACEHOLDER: &str = "SENSITIVE_STRING";

/// An expression producing the redacted form of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedactExpr {
    /// The placeholder constant.
    Placeholder,
    /// `<symbol>.filterSensitiveLog(<value>)`
    Delegate { symbol: String, value: String },
    /// `<value>.map(item => <element>)`
    Elements {
        value: String,
        element: Box<RedactExpr>,
    },
    /// Rebuild a map from its entries, redacting each value.
    Entries {
        value: String,
        value_type: String,
        entry: Box<RedactExpr>,
    },
}

impl RedactExpr {
    /// Short name of the expression kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Delegate { .. } => "delegate",
            Self::Elements { .. } => "elements",
            Self::Entries { .. } => "entries",
        }
    }

    /// Whether the placeholder appears anywhere in the expression.
    pub fn uses_placeholder(&self) -> bool {
        match self {
            Self::Placeholder => true,
            Self::Delegate { .. } => false,
            Self::Elements { element: inner, .. } | Self::Entries { entry: inner, .. } => {
                inner.uses_placeholder()
            }
        }
    }

    /// Render as TypeScript.
    pub fn render(&self, placeholder: &str) -> String {
        match self {
            Self::Placeholder => placeholder.to_string(),
            Self::Delegate { symbol, value } => format!("{}.filterSensitiveLog({})", symbol, value),
            Self::Elements { value, element } => {
                format!("{}.map(item => {})", value, element.render(placeholder))
            }
            Self::Entries {
                value,
                value_type,
                entry,
            } => format!(
                "Object.entries({}).reduce((acc: any, [key, value]: [string, {}]) => ({{ ...acc, [key]: {} }}), {{}})",
                value,
                value_type,
                entry.render(placeholder)
            ),
        }
    }
}

/// A guarded override of one property in the redacted copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOverride {
    /// Sanitized property name.
    pub name: String,
    pub expr: RedactExpr,
}

/// Body of a `filterSensitiveLog` arrow function: `...obj,` then overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionBody {
    placeholder: String,
    overrides: Vec<MemberOverride>,
}

impl RedactionBody {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            overrides: Vec::new(),
        }
    }

    /// Append an override.
    pub fn push(&mut self, name: impl Into<String>, expr: RedactExpr) {
        self.overrides.push(MemberOverride {
            name: name.into(),
            expr,
        });
    }

    pub fn overrides(&self) -> &[MemberOverride] {
        &self.overrides
    }

    /// Whether any override needs the placeholder in scope.
    pub fn uses_placeholder(&self) -> bool {
        self.overrides.iter().any(|o| o.expr.uses_placeholder())
    }
}

impl fmt::Display for RedactionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.to_fragments().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            if let CodeFragment::Line(line) = fragment {
                f.write_str(line)?;
            }
        }
        Ok(())
    }
}

impl Renderable for RedactionBody {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line("...obj,")];
        fragments.extend(self.overrides.iter().map(|o| {
            CodeFragment::line(format!(
                "...(obj.{0} && {{ {0}: {1} }}),",
                o.name,
                o.expr.render(&self.placeholder)
            ))
        }));
        fragments
    }
}

/// Builds redaction bodies for structures.
pub struct RedactionSynthesizer<'a> {
    model: &'a Model,
    symbols: TypeScriptSymbolProvider<'a>,
    analyzer: IterationAnalyzer<'a>,
    placeholder: String,
}

impl<'a> RedactionSynthesizer<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            symbols: TypeScriptSymbolProvider::new(model),
            analyzer: IterationAnalyzer::new(model),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Use a different placeholder identifier.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Synthesize the body for a structure's members, in declaration order.
    ///
    /// Sensitive members are replaced outright. Structure members delegate
    /// to their own helper. List and map members are rewritten element-wise
    /// only when their elements can reach a structure.
    pub fn synthesize(&self, shape: &Shape) -> Result<RedactionBody> {
        let mut body = RedactionBody::new(&self.placeholder);

        for member in shape.members() {
            let Some(expr) = self.member_override(member)? else {
                continue;
            };
            let name = self.symbols.member_name(member);
            debug!(shape = %shape.id, member = %name, kind = expr.kind(), "redaction override");
            body.push(name, expr);
        }

        Ok(body)
    }

    fn member_override(&self, member: &Member) -> Result<Option<RedactExpr>> {
        if self.model.member_has_trait(member, Trait::Sensitive) {
            return Ok(Some(RedactExpr::Placeholder));
        }

        let name = self.symbols.member_name(member);
        let value = format!("obj.{}", name);
        let target = self.target(member)?;

        match &target.kind {
            ShapeKind::Structure { .. } => self.redact_structure(target, value).map(Some),
            ShapeKind::Collection { member: element, .. } => {
                if self.analyzer.iteration_required(element)? {
                    self.redact_collection(target, element, value).map(Some)
                } else {
                    Ok(None)
                }
            }
            ShapeKind::Map { value: entry, .. } => {
                if self.analyzer.iteration_required(entry)? {
                    self.redact_map(target, entry, value).map(Some)
                } else {
                    Ok(None)
                }
            }
            ShapeKind::Union { .. } | ShapeKind::Scalar(_) => Ok(None),
        }
    }

    /// A nested structure is hidden when the structure itself is sensitive,
    /// and otherwise redacts itself.
    fn redact_structure(&self, shape: &Shape, value: String) -> Result<RedactExpr> {
        if shape.has_trait(Trait::Sensitive) {
            return Ok(RedactExpr::Placeholder);
        }
        Ok(RedactExpr::Delegate {
            symbol: self.symbols.type_name(shape)?,
            value,
        })
    }

    fn redact_collection(&self, owner: &Shape, element: &Member, value: String) -> Result<RedactExpr> {
        if self.model.member_has_trait(element, Trait::Sensitive) {
            return Ok(RedactExpr::Placeholder);
        }
        let element = self.nested(owner, element, "collection", "item")?;
        Ok(RedactExpr::Elements {
            value,
            element: Box::new(element),
        })
    }

    fn redact_map(&self, owner: &Shape, entry: &Member, value: String) -> Result<RedactExpr> {
        if self.model.member_has_trait(entry, Trait::Sensitive) {
            return Ok(RedactExpr::Placeholder);
        }
        let value_type = self.symbols.member_type_name(entry)?;
        let entry = self.nested(owner, entry, "map", "value")?;
        Ok(RedactExpr::Entries {
            value,
            value_type,
            entry: Box::new(entry),
        })
    }

    /// Redaction for a single element or entry value bound to `binding`.
    fn nested(
        &self,
        owner: &Shape,
        member: &Member,
        kind: &'static str,
        binding: &str,
    ) -> Result<RedactExpr> {
        let target = self.target(member)?;
        let value = binding.to_string();
        match &target.kind {
            ShapeKind::Structure { .. } => self.redact_structure(target, value),
            ShapeKind::Collection { member: element, .. } => {
                self.redact_collection(target, element, value)
            }
            ShapeKind::Map { value: entry, .. } => self.redact_map(target, entry, value),
            ShapeKind::Union { .. } | ShapeKind::Scalar(_) => {
                Err(CodegenError::IterationNotRequired {
                    shape: owner.id.clone(),
                    kind,
                })
            }
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
    use shapegen_model::ScalarType;

    use super::*;

    fn synthesize(model: &Model, shape: &str) -> Result<RedactionBody> {
        RedactionSynthesizer::new(model).synthesize(model.shape(&shape.into()).unwrap())
    }

    #[test]
    fn test_render_expressions() {
        let expr = RedactExpr::Elements {
            value: "obj.items".into(),
            element: Box::new(RedactExpr::Entries {
                value: "item".into(),
                value_type: "Inner".into(),
                entry: Box::new(RedactExpr::Delegate {
                    symbol: "Inner".into(),
                    value: "value".into(),
                }),
            }),
        };

        assert_eq!(
            expr.render("SENSITIVE_STRING"),
            "obj.items.map(item => Object.entries(item).reduce((acc: any, [key, value]: [string, Inner]) => ({ ...acc, [key]: Inner.filterSensitiveLog(value) }), {}))"
        );
        assert!(!expr.uses_placeholder());
        assert_eq!(expr.kind(), "elements");
    }

    #[test]
    fn test_sensitive_scalar_member() {
        let model = Model::new().with_shape(Shape::structure(
            "Credentials",
            vec![
                Member::new("a", "String").with_trait(Trait::Sensitive),
                Member::new("b", "String"),
            ],
        ));

        let body = synthesize(&model, "Credentials").unwrap();
        assert_eq!(
            body.to_string(),
            "...obj,\n...(obj.a && { a: SENSITIVE_STRING }),"
        );
        assert!(body.uses_placeholder());
    }

    #[test]
    fn test_sensitive_target_shape() {
        let model = Model::new()
            .with_shape(Shape::scalar("Password", ScalarType::String).with_trait(Trait::Sensitive))
            .with_shape(Shape::structure(
                "Login",
                vec![Member::new("password", "Password")],
            ));

        let body = synthesize(&model, "Login").unwrap();
        assert_eq!(body.overrides().len(), 1);
        assert_eq!(body.overrides()[0].expr, RedactExpr::Placeholder);
    }

    #[test]
    fn test_nested_structure_delegates() {
        let model = Model::new()
            .with_shape(Shape::structure("Inner", vec![Member::new("x", "String")]))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("inner", "Inner")],
            ));

        assert_eq!(
            synthesize(&model, "Outer").unwrap().to_string(),
            "...obj,\n...(obj.inner && { inner: Inner.filterSensitiveLog(obj.inner) }),"
        );
    }

    #[test]
    fn test_sensitive_structure_shape_is_hidden() {
        let model = Model::new()
            .with_shape(
                Shape::structure("Secret", vec![Member::new("x", "String")])
                    .with_trait(Trait::Sensitive),
            )
            .with_shape(Shape::list("Secrets", "Secret"))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("secrets", "Secrets")],
            ));

        assert_eq!(
            synthesize(&model, "Outer").unwrap().to_string(),
            "...obj,\n...(obj.secrets && { secrets: SENSITIVE_STRING }),"
        );
    }

    #[test]
    fn test_list_of_structures() {
        let model = Model::new()
            .with_shape(Shape::structure(
                "Inner",
                vec![Member::new("secret", "String").with_trait(Trait::Sensitive)],
            ))
            .with_shape(Shape::list("Inners", "Inner"))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("items", "Inners")],
            ));

        assert_eq!(
            synthesize(&model, "Outer").unwrap().to_string(),
            "...obj,\n...(obj.items && { items: obj.items.map(item => Inner.filterSensitiveLog(item)) }),"
        );
    }

    #[test]
    fn test_map_of_scalar_lists_has_no_override() {
        let model = Model::new()
            .with_shape(Shape::list("Names", "String"))
            .with_shape(Shape::map("NamesByKey", "Names"))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("m", "NamesByKey")],
            ));

        let body = synthesize(&model, "Outer").unwrap();
        assert!(body.overrides().is_empty());
        assert_eq!(body.to_string(), "...obj,");
        assert!(!body.uses_placeholder());
    }

    #[test]
    fn test_sensitive_collection_member() {
        let model = Model::new()
            .with_shape(Shape::structure("Inner", vec![Member::new("x", "String")]))
            .with_shape(Shape::list("Inners", "Inner"))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("items", "Inners").with_trait(Trait::Sensitive)],
            ));

        let body = synthesize(&model, "Outer").unwrap();
        assert_eq!(
            body.to_string(),
            "...obj,\n...(obj.items && { items: SENSITIVE_STRING }),"
        );
    }

    #[test]
    fn test_sensitive_map_values() {
        let model = Model::new()
            .with_shape(Shape::structure("Inner", vec![Member::new("x", "String")]))
            .with_shape(Shape::map_with(
                "InnersByKey",
                Member::new("key", "String"),
                Member::new("value", "Inner").with_trait(Trait::Sensitive),
            ))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("byKey", "InnersByKey")],
            ));

        let body = synthesize(&model, "Outer").unwrap();
        assert_eq!(
            body.to_string(),
            "...obj,\n...(obj.byKey && { byKey: SENSITIVE_STRING }),"
        );
    }

    #[test]
    fn test_map_of_lists_of_structures() {
        let model = Model::new()
            .with_shape(Shape::structure("Inner", vec![Member::new("x", "String")]))
            .with_shape(Shape::list("Inners", "Inner"))
            .with_shape(Shape::map("Groups", "Inners"))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("groups", "Groups")],
            ));

        assert_eq!(
            synthesize(&model, "Outer").unwrap().to_string(),
            "...obj,\n...(obj.groups && { groups: Object.entries(obj.groups).reduce((acc: any, [key, value]: [string, Array<Inner>]) => ({ ...acc, [key]: value.map(item => Inner.filterSensitiveLog(item)) }), {}) }),"
        );
    }

    #[test]
    fn test_self_referential_structure() {
        let model = Model::new()
            .with_shape(Shape::structure(
                "Node",
                vec![
                    Member::new("label", "String").with_trait(Trait::Sensitive),
                    Member::new("children", "NodeList"),
                ],
            ))
            .with_shape(Shape::list("NodeList", "Node"));

        let body = synthesize(&model, "Node").unwrap();
        let kinds: Vec<_> = body.overrides().iter().map(|o| o.expr.kind()).collect();
        assert_eq!(kinds, vec!["placeholder", "elements"]);
    }

    #[test]
    fn test_union_member_is_not_redacted() {
        let model = Model::new()
            .with_shape(Shape::structure(
                "Inner",
                vec![Member::new("secret", "String").with_trait(Trait::Sensitive)],
            ))
            .with_shape(Shape::union("Choice", vec![Member::new("inner", "Inner")]))
            .with_shape(Shape::structure(
                "Outer",
                vec![Member::new("choice", "Choice")],
            ));

        assert!(synthesize(&model, "Outer").unwrap().overrides().is_empty());
    }

    #[test]
    fn test_custom_placeholder() {
        let model = Model::new().with_shape(Shape::structure(
            "Credentials",
            vec![Member::new("a", "String").with_trait(Trait::Sensitive)],
        ));

        let body = RedactionSynthesizer::new(&model)
            .with_placeholder("REDACTED")
            .synthesize(model.shape(&"Credentials".into()).unwrap())
            .unwrap();
        assert_eq!(body.to_string(), "...obj,\n...(obj.a && { a: REDACTED }),");
    }

    #[test]
    fn test_collection_of_scalars_is_internal_fault() {
        let model = Model::new().with_shape(Shape::list("Names", "String"));
        let synthesizer = RedactionSynthesizer::new(&model);
        let names = model.shape(&"Names".into()).unwrap();
        let ShapeKind::Collection { member, .. } = &names.kind else {
            panic!("expected a collection");
        };

        let err = synthesizer
            .redact_collection(names, member, "obj.names".into())
            .unwrap_err();
        assert!(matches!(
            err,
            CodegenError::IterationNotRequired { ref shape, kind: "collection" } if shape.as_str() == "Names"
        ));
    }
}
