//! # Occurrence Resolver
//!
//! Name-based approximation of "every other place this binding appears", answered
//! from a [`SourceIndex`] alone.
//!
//! Resolution is scoped to the innermost function containing the caret. Inside it:
//!
//! 1. A caret on a parameter name yields that parameter plus every body identifier
//!    spelled the same way.
//! 2. Otherwise, a caret on a body identifier yields every body identifier spelled the
//!    same way, plus the first parameter with that name if there is one.
//! 3. Anything else yields nothing.
//!
//! Both paths produce the same set for a parameter and its uses, so the highlight does
//! not depend on which occurrence the caret sits on.

use std::fmt;

use oxlens_index::{Function, SourceIndex};
use oxlens_syntax::TextRange;
use rustc_hash::FxHashMap;
use tracing::{debug, trace_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccurrenceKind {
    Parameter,
    LocalVariable,
}

impl fmt::Display for OccurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter => f.write_str("parameter"),
            Self::LocalVariable => f.write_str("local variable"),
        }
    }
}

/// The highlight set for one caret position: each matching range and how it was
/// classified. Ranges are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrences {
    ranges: FxHashMap<TextRange, OccurrenceKind>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, range: TextRange) -> Option<OccurrenceKind> {
        self.ranges.get(&range).copied()
    }

    pub fn contains(&self, range: TextRange) -> bool {
        self.ranges.contains_key(&range)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (TextRange, OccurrenceKind)> + '_ {
        self.ranges.iter().map(|(range, kind)| (*range, *kind))
    }

    /// Entries ordered by position in the source.
    pub fn sorted(&self) -> Vec<(TextRange, OccurrenceKind)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(range, _)| *range);
        entries
    }

    fn insert(&mut self, range: TextRange, kind: OccurrenceKind) {
        self.ranges.insert(range, kind);
    }
}

impl fmt::Display for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (range, kind) in self.sorted() {
            writeln!(f, "{range} {kind}")?;
        }
        Ok(())
    }
}

/// Resolves the occurrences of the parameter or local variable under `caret`.
///
/// Pure and deterministic. An empty result means the caret is not on a parameter name
/// or body identifier of any function.
pub fn find_occurrences(index: &SourceIndex, caret: usize) -> Occurrences {
    let _span = trace_span!("find_occurrences", caret).entered();

    let mut occurrences = Occurrences::new();
    if let Some(function) = index.function_at(caret) {
        if !collect_from_parameter(function, caret, &mut occurrences) {
            collect_from_local(function, caret, &mut occurrences);
        }
    }

    debug!(
        caret,
        occurrences = occurrences.len(),
        "resolved occurrences"
    );
    occurrences
}

/// Returns `false` when the caret is not on a parameter name.
fn collect_from_parameter(function: &Function, caret: usize, out: &mut Occurrences) -> bool {
    let Some(parameter) = function.parameter_name_at(caret) else {
        return false;
    };

    out.insert(parameter.range, OccurrenceKind::Parameter);
    if let Some(body) = function.body() {
        for local in body.local_variable_identifiers_named(&parameter.text) {
            out.insert(local.range, OccurrenceKind::LocalVariable);
        }
    }
    true
}

fn collect_from_local(function: &Function, caret: usize, out: &mut Occurrences) {
    let Some(body) = function.body() else {
        return;
    };
    let Some(local) = body.local_variable_identifier_at(caret) else {
        return;
    };

    for matching in body.local_variable_identifiers_named(&local.text) {
        out.insert(matching.range, OccurrenceKind::LocalVariable);
    }
    if let Some(parameter) = function.parameter_name_matching(&local.text) {
        out.insert(parameter.range, OccurrenceKind::Parameter);
    }
}
