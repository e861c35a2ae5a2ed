//! # Document Snapshots
//!
//! A [`Document`] owns the current [`ParsedSource`] of one file behind an `Arc`. Every
//! update parses the new text into a complete new snapshot and swaps it in; readers
//! holding the previous `Arc` keep a consistent text, tree and index until they drop it.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use oxlens_index::{SourceIndex, build_index};
use oxlens_syntax::{ParseError, RustParser, SyntaxError, SyntaxTree};
use tracing::{debug, trace_span};

use crate::occurrences::{Occurrences, find_occurrences};

/// Everything derived from one parse of one text.
#[derive(Debug)]
pub struct ParsedSource {
    tree: SyntaxTree,
    index: SourceIndex,
    syntax_errors: Vec<SyntaxError>,
}

impl ParsedSource {
    pub fn parse(parser: &mut RustParser, text: &str) -> Result<Self, ParseError> {
        let _span = trace_span!("parse_source", len = text.len()).entered();

        let tree = parser.parse(text)?;
        let index = build_index(&tree.root());
        let syntax_errors = tree.syntax_errors();
        debug!(
            functions = index.functions().len(),
            syntax_errors = syntax_errors.len(),
            "parsed source"
        );
        Ok(Self {
            tree,
            index,
            syntax_errors,
        })
    }

    pub fn text(&self) -> &str {
        self.tree.text()
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn index(&self) -> &SourceIndex {
        &self.index
    }

    pub fn syntax_errors(&self) -> &[SyntaxError] {
        &self.syntax_errors
    }

    pub fn occurrences_at(&self, caret: usize) -> Occurrences {
        find_occurrences(&self.index, caret)
    }
}

/// The live state of one open file.
pub struct Document {
    parser: Mutex<RustParser>,
    current: RwLock<Arc<ParsedSource>>,
}

impl Document {
    pub fn new(text: &str) -> Result<Self, ParseError> {
        let mut parser = RustParser::new()?;
        let parsed = ParsedSource::parse(&mut parser, text)?;
        Ok(Self {
            parser: Mutex::new(parser),
            current: RwLock::new(Arc::new(parsed)),
        })
    }

    /// Reparses `text` and publishes the result. On failure the previous snapshot stays
    /// current.
    pub fn update(&self, text: &str) -> Result<Arc<ParsedSource>, ParseError> {
        let parsed = {
            let mut parser = self.parser.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::new(ParsedSource::parse(&mut parser, text)?)
        };

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::clone(&parsed);
        Ok(parsed)
    }

    pub fn snapshot(&self) -> Arc<ParsedSource> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}
