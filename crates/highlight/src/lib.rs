//! # Oxlens Occurrence Highlighting
//!
//! Answers "where else does this appear?" for a caret inside a Rust function: the
//! parameter or local variable under the caret and every same-named identifier in the
//! enclosing function, each tagged as a parameter declaration or a body occurrence.
//!
//! - [`find_occurrences`] is the pure resolver over an [`oxlens_index::SourceIndex`].
//! - [`OccurrencesFinder`] keeps a caret and the last result for an editor host.
//! - [`Document`] owns the parsed state of a file and swaps it wholesale on every edit.
//!
//! ```no_run
//! use oxlens_highlight::{Document, OccurrencesFinder};
//!
//! let document = Document::new("fn main() {\n    let name = 1;\n    name;\n}\n")?;
//! let mut finder = OccurrencesFinder::default();
//! finder.set_caret_position(20);
//! finder.run(document.snapshot().index());
//! assert_eq!(finder.occurrences().len(), 2);
//! # Ok::<(), oxlens_syntax::ParseError>(())
//! ```

pub mod config;
pub mod document;
pub mod finder;
pub mod occurrences;

pub use config::{ConfigError, HighlightConfig};
pub use document::{Document, ParsedSource};
pub use finder::OccurrencesFinder;
pub use occurrences::{OccurrenceKind, Occurrences, find_occurrences};
