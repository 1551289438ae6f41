// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Shape model for the generator: shapes, members, traits and the
//! TOML/JSON model file format.

mod config;
mod error;
mod model;
mod raw;
mod shape;
mod span;

pub use config::CodegenConfig;
pub use error::{Error, Result, SourceContext};
pub use model::Model;
pub use shape::{CollectionKind, Member, ScalarType, Shape, ShapeId, ShapeKind, Trait, Traits};
