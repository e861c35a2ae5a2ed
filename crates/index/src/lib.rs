//! # Oxlens Source Index
//!
//! A lightweight, name-based index over one parsed source file.
//!
//! [`build_index`] walks a syntax tree once and records every function (name,
//! parameter names, body identifiers), struct, enum, impl block, trait impl and outer
//! doc comment together with their text ranges. The resulting [`SourceIndex`] is an
//! immutable snapshot: a new parse produces a new index and the old one is dropped.
//!
//! ## Scoping model
//!
//! There is no binding resolution here. A function body is a flat, ordered list of
//! identifier tokens, parameter names included, and lookups compare names as plain
//! strings. Block-level shadowing and closures are not modelled.
//!
//! ## Tolerance
//!
//! Building never fails. Declarations whose name cannot be found are still recorded
//! with `name: None`, and bodies that cannot be located are `None`.

pub mod builder;
pub mod model;
pub mod symbols;

pub use builder::build_index;
pub use model::{
    Function, FunctionBody, FunctionIndex, LocalVariableIdentifier, NamedEntity, ParameterName,
    SourceIndex,
};
pub use symbols::{Symbol, SymbolKind};
