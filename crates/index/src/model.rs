//! # Index Data Model
//!
//! Plain records produced by the builder and the lookup queries the occurrence resolver
//! runs against them. All caret lookups use [`TextRange::contains_caret`], so a caret
//! touching either end of a name token selects that token.

use index_vec::IndexVec;
use oxlens_syntax::TextRange;
use smol_str::SmolStr;

index_vec::define_index_type! {
    /// Position of a function in the index, in declaration order.
    pub struct FunctionIndex = usize;
}

/// Immutable snapshot of the declarations found in one syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIndex {
    /// Functions in declaration order; an enclosing function precedes the functions
    /// nested in it.
    pub(crate) functions: IndexVec<FunctionIndex, Function>,
    pub(crate) structs: Vec<NamedEntity>,
    pub(crate) enums: Vec<NamedEntity>,
    pub(crate) impls: Vec<NamedEntity>,
    pub(crate) trait_impls: Vec<NamedEntity>,
    pub(crate) doc_comments: Vec<NamedEntity>,
}

impl SourceIndex {
    pub fn new() -> Self {
        Self {
            functions: IndexVec::new(),
            structs: Vec::new(),
            enums: Vec::new(),
            impls: Vec::new(),
            trait_impls: Vec::new(),
            doc_comments: Vec::new(),
        }
    }

    pub fn functions(&self) -> &IndexVec<FunctionIndex, Function> {
        &self.functions
    }

    pub fn function(&self, id: FunctionIndex) -> Option<&Function> {
        self.functions.get(id)
    }

    /// The innermost function whose declaration contains `offset`.
    pub fn function_at(&self, offset: usize) -> Option<&Function> {
        self.functions
            .iter()
            .rev()
            .filter(|function| function.range.contains_caret(offset))
            .min_by_key(|function| function.range.len())
    }

    /// All functions declared as `name`. Duplicates are kept, in declaration order.
    pub fn functions_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Function> {
        self.functions
            .iter()
            .filter(move |function| function.name() == Some(name))
    }

    pub fn structs(&self) -> &[NamedEntity] {
        &self.structs
    }

    pub fn enums(&self) -> &[NamedEntity] {
        &self.enums
    }

    pub fn impls(&self) -> &[NamedEntity] {
        &self.impls
    }

    pub fn trait_impls(&self) -> &[NamedEntity] {
        &self.trait_impls
    }

    pub fn doc_comments(&self) -> &[NamedEntity] {
        &self.doc_comments
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.structs.is_empty()
            && self.enums.is_empty()
            && self.impls.is_empty()
            && self.trait_impls.is_empty()
            && self.doc_comments.is_empty()
    }
}

impl Default for SourceIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// `None` when the declaration is too broken to carry a name.
    pub name: Option<SmolStr>,
    /// The whole declaration, signature and body.
    pub range: TextRange,
    /// Parameter names in declaration order.
    pub parameters: Vec<ParameterName>,
    /// `None` for bodiless signatures and bodies lost to parse errors.
    pub body: Option<FunctionBody>,
}

impl Function {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn body(&self) -> Option<&FunctionBody> {
        self.body.as_ref()
    }

    pub fn parameter_name_at(&self, offset: usize) -> Option<&ParameterName> {
        self.parameters
            .iter()
            .find(|param| param.range.contains_caret(offset))
    }

    /// The first parameter spelled `text`.
    pub fn parameter_name_matching(&self, text: &str) -> Option<&ParameterName> {
        self.parameters.iter().find(|param| param.text == text)
    }
}

/// The name token of one parameter, without its type annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterName {
    pub text: SmolStr,
    pub range: TextRange,
}

impl ParameterName {
    pub fn new(text: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }
}

/// A function's block and every identifier token inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody {
    pub range: TextRange,
    /// Identifier tokens in document order, uses of parameters included.
    pub locals: Vec<LocalVariableIdentifier>,
}

impl FunctionBody {
    pub fn local_variable_identifiers(&self) -> &[LocalVariableIdentifier] {
        &self.locals
    }

    pub fn local_variable_identifier_at(&self, offset: usize) -> Option<&LocalVariableIdentifier> {
        self.locals
            .iter()
            .find(|local| local.range.contains_caret(offset))
    }

    pub fn local_variable_identifiers_named<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a LocalVariableIdentifier> {
        self.locals.iter().filter(move |local| local.text == text)
    }
}

/// One identifier token inside a function body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalVariableIdentifier {
    pub text: SmolStr,
    pub range: TextRange,
}

impl LocalVariableIdentifier {
    pub fn new(text: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }
}

/// A struct, enum, impl block, trait impl or doc comment, kept for symbol listing.
///
/// For doc comments the name is the raw comment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    pub name: Option<SmolStr>,
    pub range: TextRange,
    pub body: Option<TextRange>,
}

impl NamedEntity {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
