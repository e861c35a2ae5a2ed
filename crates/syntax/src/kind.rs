use std::fmt;

/// Grammar-neutral classification of a syntax tree node.
///
/// Only the roles the indexer cares about get their own variant; everything else is
/// [`SyntaxKind::Other`] and is simply walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// The file-level node.
    Root,
    /// A function declaration, with or without a body.
    Function,
    /// The parenthesised parameter list of a function declaration.
    ParameterList,
    /// One parameter, including `self` parameters.
    Parameter,
    /// A brace-delimited body: function blocks, impl bodies, struct fields, enum variants.
    Block,
    Struct,
    Enum,
    /// An `impl` block; whether it implements a trait is decided by a [`SyntaxKind::For`]
    /// child.
    Impl,
    /// A composite type expression (generics, references, paths, tuples...).
    Type,
    /// A bare type name token.
    TypeIdent,
    /// A value-level identifier token, including `self`.
    Ident,
    /// A lifetime or loop label (`'a`). Its inner name is not an identifier.
    Lifetime,
    /// An outer doc comment (`///` or `/** */`).
    DocComment,
    /// Any other comment.
    Comment,
    /// The `for` keyword token.
    For,
    OpenBrace,
    CloseBrace,
    /// A region the parser could not make sense of.
    Error,
    Other,
}

impl SyntaxKind {
    /// Whether the node names or spells out a type.
    pub const fn is_type(self) -> bool {
        matches!(self, Self::Type | Self::TypeIdent)
    }

    /// Whether the node is an identifier-like leaf usable as a declaration name.
    pub const fn is_name(self) -> bool {
        matches!(self, Self::Ident | Self::TypeIdent)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Function => "function",
            Self::ParameterList => "parameter list",
            Self::Parameter => "parameter",
            Self::Block => "block",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Impl => "impl",
            Self::Type => "type",
            Self::TypeIdent => "type identifier",
            Self::Ident => "identifier",
            Self::Lifetime => "lifetime",
            Self::DocComment => "doc comment",
            Self::Comment => "comment",
            Self::For => "`for`",
            Self::OpenBrace => "`{`",
            Self::CloseBrace => "`}`",
            Self::Error => "error",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
