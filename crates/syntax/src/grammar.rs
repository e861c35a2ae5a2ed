//! # Tree-sitter Rust adapter
//!
//! Parses Rust source with `tree-sitter-rust` and exposes the result through the
//! grammar-neutral [`SyntaxNode`] trait. This is the only module that knows grammar
//! node names.

use std::fmt;
use std::sync::Arc;

use tree_sitter::{Node, Parser, Tree};

use crate::{OffsetMap, ParseError, Result, SyntaxKind, SyntaxNode, TextRange};

/// Grammar node kinds spelling out a composite type.
const TYPE_KINDS: &[&str] = &[
    "abstract_type",
    "array_type",
    "bounded_type",
    "dynamic_type",
    "function_type",
    "generic_type",
    "never_type",
    "pointer_type",
    "primitive_type",
    "qualified_type",
    "reference_type",
    "scoped_type_identifier",
    "tuple_type",
    "unit_type",
];

/// Longest snippet of offending source quoted in a syntax error message.
const MAX_SNIPPET_LEN: usize = 24;

/// A reusable Rust parser.
///
/// Not `Sync`: hosts that parse from several threads keep one parser per thread or
/// serialize access.
pub struct RustParser {
    parser: Parser,
}

impl RustParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_rust::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parses `text` into a fresh tree. Never reuses a previous tree: every call
    /// produces an independent snapshot.
    pub fn parse(&mut self, text: impl Into<Arc<str>>) -> Result<SyntaxTree> {
        let text: Arc<str> = text.into();
        let _span = tracing::trace_span!("parse", len = text.len()).entered();

        let tree = self
            .parser
            .parse(text.as_bytes(), None)
            .ok_or(ParseError::NoTree { len: text.len() })?;

        let syntax_tree = SyntaxTree::new(text, tree);
        tracing::debug!(
            has_errors = syntax_tree.has_errors(),
            "parsed {} characters",
            syntax_tree.len()
        );
        Ok(syntax_tree)
    }
}

impl fmt::Debug for RustParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustParser").finish_non_exhaustive()
    }
}

/// An immutable parse of one source text.
pub struct SyntaxTree {
    text: Arc<str>,
    tree: Tree,
    offsets: OffsetMap,
}

impl SyntaxTree {
    fn new(text: Arc<str>, tree: Tree) -> Self {
        let offsets = OffsetMap::new(&text);
        Self {
            text,
            tree,
            offsets,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the source text.
    pub fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    /// Length of the source in characters.
    pub fn len(&self) -> usize {
        self.offsets.char_offset(self.text.len())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn root(&self) -> TsNode<'_> {
        TsNode {
            node: self.tree.root_node(),
            tree: self,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Every error and missing-token node in document order.
    ///
    /// Error regions are reported once; their contents are not searched further.
    pub fn syntax_errors(&self) -> Vec<SyntaxError> {
        let root = self.tree.root_node();
        if !root.has_error() {
            return Vec::new();
        }

        let mut errors = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_missing() {
                errors.push(self.syntax_error(node, format!("missing `{}`", node.kind())));
            } else if node.is_error() {
                let snippet = self.snippet(node);
                errors.push(self.syntax_error(node, format!("unexpected `{snippet}`")));
            } else if node.has_error() {
                let mut cursor = node.walk();
                let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
                stack.extend(children.into_iter().rev());
            }
        }
        errors
    }

    fn syntax_error(&self, node: Node<'_>, message: String) -> SyntaxError {
        SyntaxError {
            message,
            range: self.offsets.char_range(node.byte_range()),
            line: node.start_position().row + 1,
        }
    }

    fn snippet(&self, node: Node<'_>) -> String {
        let text = self.text.get(node.byte_range()).unwrap_or_default();
        let first_line = text.trim().lines().next().unwrap_or_default();
        first_line.chars().take(MAX_SNIPPET_LEN).collect()
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("len", &self.len())
            .field("has_errors", &self.has_errors())
            .finish()
    }
}

/// A syntax error found in a parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    /// 1-based line of the error's start.
    pub line: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.line, self.message, self.range)
    }
}

/// A tree-sitter node viewed through [`SyntaxNode`].
#[derive(Clone, Copy)]
pub struct TsNode<'tree> {
    node: Node<'tree>,
    tree: &'tree SyntaxTree,
}

impl<'tree> TsNode<'tree> {
    /// The grammar's own name for this node, for diagnostics and debugging.
    pub fn grammar_kind(&self) -> &'static str {
        self.node.kind()
    }
}

impl SyntaxNode for TsNode<'_> {
    fn kind(&self) -> SyntaxKind {
        classify(self.node)
    }

    fn range(&self) -> TextRange {
        self.tree.offsets.char_range(self.node.byte_range())
    }

    fn text(&self) -> &str {
        self.tree
            .text
            .get(self.node.byte_range())
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        // Zero-width tokens inserted by error recovery carry no text worth indexing.
        let children = self
            .node
            .children(&mut cursor)
            .filter(|child| !child.is_missing())
            .map(|node| TsNode {
                node,
                tree: self.tree,
            })
            .collect();
        children
    }
}

impl fmt::Debug for TsNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.node.kind(), self.range())
    }
}

fn classify(node: Node<'_>) -> SyntaxKind {
    if node.is_error() {
        return SyntaxKind::Error;
    }

    match node.kind() {
        "source_file" => SyntaxKind::Root,
        "function_item" | "function_signature_item" => SyntaxKind::Function,
        "parameters" => SyntaxKind::ParameterList,
        "parameter" | "self_parameter" => SyntaxKind::Parameter,
        "block" | "declaration_list" | "field_declaration_list" | "enum_variant_list" => {
            SyntaxKind::Block
        }
        "struct_item" => SyntaxKind::Struct,
        "enum_item" => SyntaxKind::Enum,
        "impl_item" => SyntaxKind::Impl,
        "identifier" | "self" | "shorthand_field_identifier" if node.is_named() => {
            SyntaxKind::Ident
        }
        "type_identifier" => SyntaxKind::TypeIdent,
        "lifetime" | "label" => SyntaxKind::Lifetime,
        "line_comment" | "block_comment" => {
            if node.child_by_field_name("outer").is_some() {
                SyntaxKind::DocComment
            } else {
                SyntaxKind::Comment
            }
        }
        "for" if !node.is_named() => SyntaxKind::For,
        "{" => SyntaxKind::OpenBrace,
        "}" => SyntaxKind::CloseBrace,
        kind if TYPE_KINDS.contains(&kind) => SyntaxKind::Type,
        _ => SyntaxKind::Other,
    }
}
