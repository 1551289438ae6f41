//! Interface and namespace generation for structures and unions.

use shapegen_codegen::{
    Result,
    builder::{CodeFragment, Renderable},
};
use shapegen_model::{Model, Shape};
use tracing::debug;

use crate::{
    MemberOptions, MemberWriter, RedactionBody, RedactionSynthesizer, TypeScriptSymbolProvider,
};

/// Generated declarations for one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOutput {
    /// Resolved type name.
    pub name: String,
    /// Interface, followed by the namespace for structures.
    pub fragments: Vec<CodeFragment>,
    /// The `filterSensitiveLog` body, for structures.
    pub redaction: Option<RedactionBody>,
}

/// Generates the TypeScript declarations of structures and unions.
pub struct StructureGenerator<'a> {
    symbols: TypeScriptSymbolProvider<'a>,
    members: MemberWriter<'a>,
    redaction: RedactionSynthesizer<'a>,
}

impl<'a> StructureGenerator<'a> {
    pub fn new(model: &'a Model, placeholder: &str) -> Self {
        let symbols = TypeScriptSymbolProvider::new(model);
        Self {
            symbols,
            members: MemberWriter::new(symbols),
            redaction: RedactionSynthesizer::new(model).with_placeholder(placeholder),
        }
    }

    /// Interface plus a namespace holding its `filterSensitiveLog` helper.
    pub fn structure(&self, shape: &Shape, options: &MemberOptions) -> Result<ShapeOutput> {
        let name = self.symbols.type_name(shape)?;
        debug!(shape = %shape.id, name = %name, "generating structure");

        let mut fragments = self.interface(&name, shape, options)?;
        let redaction = self.redaction.synthesize(shape)?;

        fragments.push(CodeFragment::blank());
        fragments.push(CodeFragment::block(
            format!("export namespace {} {{", name),
            vec![
                CodeFragment::jsdoc("@internal"),
                CodeFragment::block(
                    format!("export const filterSensitiveLog = (obj: {}): any => ({{", name),
                    redaction.to_fragments(),
                    Some("});".to_string()),
                ),
            ],
            Some("}".to_string()),
        ));

        Ok(ShapeOutput {
            name,
            fragments,
            redaction: Some(redaction),
        })
    }

    /// Interface only; every union member is optional.
    pub fn union(&self, shape: &Shape, options: &MemberOptions) -> Result<ShapeOutput> {
        let name = self.symbols.type_name(shape)?;
        debug!(shape = %shape.id, name = %name, "generating union");

        Ok(ShapeOutput {
            fragments: self.interface(&name, shape, options)?,
            name,
            redaction: None,
        })
    }

    /// Dispatch on the shape kind. Other kinds have no declaration of their own.
    pub fn shape(&self, shape: &Shape, options: &MemberOptions) -> Result<Option<ShapeOutput>> {
        if shape.is_structure() {
            self.structure(shape, options).map(Some)
        } else if shape.is_union() {
            self.union(shape, options).map(Some)
        } else {
            Ok(None)
        }
    }

    fn interface(
        &self,
        name: &str,
        shape: &Shape,
        options: &MemberOptions,
    ) -> Result<Vec<CodeFragment>> {
        let mut fragments = Vec::new();
        if let Some(doc) = shape.documentation.as_deref().filter(|_| !options.no_docs) {
            fragments.push(CodeFragment::jsdoc(doc));
        }
        fragments.push(CodeFragment::block(
            format!("export interface {} {{", name),
            self.members.declarations(shape, options)?,
            Some("}".to_string()),
        ));
        Ok(fragments)
    }
}
