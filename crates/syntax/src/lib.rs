//! # Oxlens Syntax Boundary
//!
//! Everything the indexer needs to know about a parsed source file, and nothing more.
//!
//! The index builder never looks at grammar node names. It walks any tree that
//! implements [`SyntaxNode`], reading four capabilities per node: a grammar-neutral
//! [`SyntaxKind`], a [`TextRange`] in character offsets, the covered source text and
//! the ordered child list.
//!
//! The [`grammar`] module provides the concrete implementation used by the rest of
//! the workspace: a Rust parser built on `tree-sitter-rust`, a [`SyntaxTree`] snapshot
//! owning the source text, and the [`TsNode`] adapter that classifies grammar nodes.

pub mod error;
pub mod grammar;
pub mod kind;
pub mod node;
pub mod offsets;
pub mod text_range;

pub use error::{ParseError, Result};
pub use grammar::{RustParser, SyntaxError, SyntaxTree, TsNode};
pub use kind::SyntaxKind;
pub use node::SyntaxNode;
pub use offsets::OffsetMap;
pub use text_range::TextRange;
