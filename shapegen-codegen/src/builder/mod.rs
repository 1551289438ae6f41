//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware output buffer
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`TypeRef`] - Language-agnostic type references
//! - [`TypeMapper`] - Trait for language-specific type rendering

mod code_builder;
mod indent;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use types::{PrimitiveType, TypeMapper, TypeRef};
