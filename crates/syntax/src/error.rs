use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Failures of the parser collaborator itself.
///
/// Syntax errors in the source are not represented here: a file full of errors still
/// parses into a tree, and those errors are reported as data by
/// [`SyntaxTree::syntax_errors`](crate::SyntaxTree::syntax_errors).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Incompatible Rust grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("Parser produced no syntax tree for a {len}-byte source")]
    NoTree { len: usize },
}
