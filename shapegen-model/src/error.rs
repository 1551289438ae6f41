use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "model.toml");
/// ctx.unknown_target_error("User", "name", "Strng");
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = crate::span::offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unknown member target error.
    pub fn unknown_target_error(
        &self,
        shape: impl Into<String>,
        member: impl Into<String>,
        target: impl Into<String>,
    ) -> Box<Error> {
        let target = target.into();
        Box::new(Error::UnknownTarget {
            src: self.named_source(),
            span: crate::span::find_target_span(&self.src, &target),
            shape: shape.into(),
            member: member.into(),
            target,
        })
    }

    /// Create an error for a collection or map shape missing a member definition.
    pub fn missing_member_error(
        &self,
        shape: impl Into<String>,
        kind: &'static str,
        field: &'static str,
    ) -> Box<Error> {
        let shape = shape.into();
        Box::new(Error::MissingMember {
            src: self.named_source(),
            span: crate::span::find_shape_span(&self.src, &shape),
            shape,
            kind,
            field,
        })
    }

    /// Create an error for a member definition on a shape kind that has none.
    pub fn unexpected_member_error(
        &self,
        shape: impl Into<String>,
        kind: &'static str,
        field: &'static str,
    ) -> Box<Error> {
        let shape = shape.into();
        Box::new(Error::UnexpectedMember {
            src: self.named_source(),
            span: crate::span::find_shape_span(&self.src, &shape),
            shape,
            kind,
            field,
        })
    }

    /// Create an error for a declaration that shadows a prelude shape.
    pub fn prelude_conflict_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::PreludeConflict {
            src: self.named_source(),
            span: crate::span::find_shape_span(&self.src, &name),
            name,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the model file with '--model <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported model file '{path}'")]
    #[diagnostic(
        code(shapegen::unsupported_format),
        help("model files must use the .toml or .json extension")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse model")]
    #[diagnostic(code(shapegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse model")]
    #[diagnostic(code(shapegen::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("member '{shape}.{member}' targets unknown shape '{target}'")]
    #[diagnostic(
        code(shapegen::unknown_target),
        help("declare a shape named '{target}' or target a prelude scalar such as 'String'")
    )]
    UnknownTarget {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown shape")]
        span: Option<SourceSpan>,
        shape: String,
        member: String,
        target: String,
    },

    #[error("{kind} shape '{shape}' is missing its '{field}' member")]
    #[diagnostic(
        code(shapegen::missing_member),
        help("add `{field} = {{ target = \"String\" }}` to the shape")
    )]
    MissingMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        shape: String,
        kind: &'static str,
        field: &'static str,
    },

    #[error("{kind} shape '{shape}' cannot define '{field}'")]
    #[diagnostic(code(shapegen::unexpected_member))]
    UnexpectedMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        shape: String,
        kind: &'static str,
        field: &'static str,
    },

    #[error("'{name}' is a prelude shape and cannot be redeclared")]
    #[diagnostic(
        code(shapegen::prelude_conflict),
        help("rename the shape, e.g. '{name}Value'")
    )]
    PreludeConflict {
        #[source_code]
        src: NamedSource<String>,
        #[label("redeclared here")]
        span: Option<SourceSpan>,
        name: String,
    },
}
