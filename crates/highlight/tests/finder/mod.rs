//! The stateful finder: caret handling, snapshots and configuration.

use oxlens_highlight::{HighlightConfig, OccurrenceKind, OccurrencesFinder};
use oxlens_syntax::TextRange;
use pretty_assertions::assert_eq;

use crate::{main_with_name, say_hello};

#[test]
fn test_empty_before_first_run() {
    let finder = OccurrencesFinder::default();
    assert!(finder.occurrences().is_empty());
    assert_eq!(finder.priority(), 20);
}

#[test]
fn test_run_replaces_result_wholesale() {
    let parsed = say_hello().parse();
    let mut finder = OccurrencesFinder::default();

    finder.set_caret_position(14);
    finder.run(parsed.index());
    let on_name = finder.occurrences();
    assert_eq!(on_name.len(), 3);

    finder.set_caret_position(28);
    finder.run(parsed.index());
    let on_greeting = finder.occurrences();

    // The earlier snapshot is untouched by the second run.
    assert_eq!(on_name.get(TextRange::new(12, 16)), Some(OccurrenceKind::Parameter));
    assert!(!on_name.contains(TextRange::new(24, 32)));
    assert_eq!(on_greeting.get(TextRange::new(24, 32)), Some(OccurrenceKind::Parameter));
    assert!(!on_greeting.contains(TextRange::new(12, 16)));
}

#[test]
fn test_caret_change_needs_a_run() {
    let parsed = main_with_name().parse();
    let mut finder = OccurrencesFinder::default();

    finder.set_caret_position(22);
    finder.run(parsed.index());
    finder.set_caret_position(200);
    assert_eq!(finder.caret_position(), 200);
    assert_eq!(finder.occurrences().len(), 2);

    finder.run(parsed.index());
    assert!(finder.occurrences().is_empty());
}

#[test]
fn test_cancel_keeps_last_result() {
    let parsed = main_with_name().parse();
    let mut finder = OccurrencesFinder::default();

    finder.set_caret_position(48);
    finder.run(parsed.index());
    finder.cancel();
    assert_eq!(finder.occurrences().len(), 2);
}

#[test]
fn test_disabled_finder_publishes_nothing() {
    let config = HighlightConfig::from_toml_str("enabled = false\npriority = 7\n").unwrap();
    let parsed = main_with_name().parse();
    let mut finder = OccurrencesFinder::new(config);

    finder.set_caret_position(22);
    finder.run(parsed.index());
    assert!(finder.occurrences().is_empty());
    assert_eq!(finder.priority(), 7);
}
