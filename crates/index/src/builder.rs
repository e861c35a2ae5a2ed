//! # Source Index Builder
//!
//! One depth-first, pre-order pass over the tree. Each declaration kind is turned into
//! its record by a small pure extraction function over the declaration's sub-tree;
//! the walk itself only dispatches on [`SyntaxKind`] and keeps descending, so nested
//! functions, methods inside impl blocks and doc comments anywhere are all found.
//!
//! Names are found heuristically:
//! - a function's name is the first identifier of its declaration, depth-first;
//! - a parameter's name is the last identifier of its pattern, type excluded;
//! - an impl's name is the first identifier of the implemented type's path.
//!
//! Lifetimes and loop labels are never entered: the `a` of `'a` is not a binding.
//!
//! These approximations misfire on some shapes (`fn` with a missing name picks up the
//! first parameter, destructured parameters keep only their last binding).

use oxlens_syntax::{SyntaxKind, SyntaxNode, TextRange};
use smol_str::SmolStr;
use tracing::{debug, trace, trace_span};

use crate::model::{
    Function, FunctionBody, LocalVariableIdentifier, NamedEntity, ParameterName, SourceIndex,
};

/// Builds the index for the tree rooted at `root`. Never fails.
pub fn build_index<N>(root: &N) -> SourceIndex
where
    N: SyntaxNode + Clone,
{
    let _span = trace_span!("build_index", range = %root.range()).entered();

    let index = SourceIndexBuilder::new().build(root);
    debug!(
        functions = index.functions.len(),
        structs = index.structs.len(),
        enums = index.enums.len(),
        impls = index.impls.len(),
        trait_impls = index.trait_impls.len(),
        doc_comments = index.doc_comments.len(),
        "built source index"
    );
    index
}

struct SourceIndexBuilder {
    index: SourceIndex,
}

impl SourceIndexBuilder {
    fn new() -> Self {
        Self {
            index: SourceIndex::new(),
        }
    }

    fn build<N>(mut self, root: &N) -> SourceIndex
    where
        N: SyntaxNode + Clone,
    {
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            self.record(&node);
            stack.extend(node.children().into_iter().rev());
        }
        self.index
    }

    fn record<N>(&mut self, node: &N)
    where
        N: SyntaxNode + Clone,
    {
        match node.kind() {
            SyntaxKind::Function => {
                self.index.functions.push(function(node));
            }
            SyntaxKind::Struct => self.index.structs.push(braced_entity(node)),
            SyntaxKind::Enum => self.index.enums.push(braced_entity(node)),
            SyntaxKind::Impl => self.record_impl(node),
            SyntaxKind::DocComment => self.index.doc_comments.push(doc_comment(node)),
            SyntaxKind::Root
            | SyntaxKind::ParameterList
            | SyntaxKind::Parameter
            | SyntaxKind::Block
            | SyntaxKind::Type
            | SyntaxKind::TypeIdent
            | SyntaxKind::Ident
            | SyntaxKind::Lifetime
            | SyntaxKind::Comment
            | SyntaxKind::For
            | SyntaxKind::OpenBrace
            | SyntaxKind::CloseBrace
            | SyntaxKind::Error
            | SyntaxKind::Other => {}
        }
    }

    fn record_impl<N>(&mut self, node: &N)
    where
        N: SyntaxNode + Clone,
    {
        let children = node.children();
        let entity = |name: Option<SmolStr>| NamedEntity {
            name,
            range: node.range(),
            body: block_range(&children),
        };

        match children.iter().position(|child| child.kind() == SyntaxKind::For) {
            // `impl Trait for Type`: the label is the trait path as written.
            Some(for_position) => {
                let name = children[..for_position]
                    .iter()
                    .rev()
                    .find(|child| child.kind().is_type())
                    .map(|trait_path| SmolStr::new(trait_path.text()));
                self.index.trait_impls.push(entity(name));
            }
            None => {
                let name = children
                    .iter()
                    .find(|child| child.kind().is_type())
                    .and_then(|ty| ty.find_first(&|n: &N| n.kind().is_name()))
                    .map(|ident| SmolStr::new(ident.text()));
                self.index.impls.push(entity(name));
            }
        }
    }
}

fn function<N>(node: &N) -> Function
where
    N: SyntaxNode + Clone,
{
    let name = node
        .find_first(&|n: &N| n.kind() == SyntaxKind::Ident)
        .map(|ident| SmolStr::new(ident.text()));

    let children = node.children();
    let parameters = children
        .iter()
        .filter(|child| child.kind() == SyntaxKind::ParameterList)
        .flat_map(|list| list.children())
        .filter(|child| child.kind() == SyntaxKind::Parameter)
        .filter_map(|param| parameter_name(&param))
        .collect();
    let body = children
        .iter()
        .find(|child| child.kind() == SyntaxKind::Block)
        .map(function_body);

    Function {
        name,
        range: node.range(),
        parameters,
        body,
    }
}

fn parameter_name<N>(param: &N) -> Option<ParameterName>
where
    N: SyntaxNode + Clone,
{
    let last = param
        .collect_where(
            &|n: &N| n.kind() == SyntaxKind::Ident,
            &|n: &N| !n.kind().is_type() && n.kind() != SyntaxKind::Lifetime,
        )
        .pop();
    if last.is_none() {
        trace!(range = %param.range(), "parameter pattern binds no name");
    }
    last.map(|ident| ParameterName::new(ident.text(), ident.range()))
}

fn function_body<N>(block: &N) -> FunctionBody
where
    N: SyntaxNode + Clone,
{
    let locals = block
        .collect_where(
            &|n: &N| n.kind() == SyntaxKind::Ident,
            &|n: &N| n.kind() != SyntaxKind::Lifetime,
        )
        .into_iter()
        .map(|ident| LocalVariableIdentifier::new(ident.text(), ident.range()))
        .collect();
    FunctionBody {
        range: block.range(),
        locals,
    }
}

/// Structs and enums: first name child, body spanning its braces.
fn braced_entity<N>(node: &N) -> NamedEntity
where
    N: SyntaxNode,
{
    let children = node.children();
    let name = children
        .iter()
        .find(|child| child.kind().is_name())
        .map(|ident| SmolStr::new(ident.text()));
    let body = children
        .iter()
        .find(|child| child.kind() == SyntaxKind::Block)
        .and_then(brace_range);

    NamedEntity {
        name,
        range: node.range(),
        body,
    }
}

/// From the opening brace through the closing brace; `None` unless both are present.
fn brace_range<N>(block: &N) -> Option<TextRange>
where
    N: SyntaxNode,
{
    let delimiters = block.children();
    let open = delimiters
        .iter()
        .find(|child| child.kind() == SyntaxKind::OpenBrace)?;
    let close = delimiters
        .iter()
        .rev()
        .find(|child| child.kind() == SyntaxKind::CloseBrace)?;
    Some(open.range().cover(close.range()))
}

fn block_range<N>(children: &[N]) -> Option<TextRange>
where
    N: SyntaxNode,
{
    children
        .iter()
        .find(|child| child.kind() == SyntaxKind::Block)
        .map(SyntaxNode::range)
}

fn doc_comment<N>(node: &N) -> NamedEntity
where
    N: SyntaxNode,
{
    let text = node.text().trim_end_matches(['\n', '\r']);
    NamedEntity {
        name: Some(SmolStr::new(text)),
        range: node.range(),
        body: None,
    }
}
