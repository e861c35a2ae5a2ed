//! Resolution over real parses.

use oxlens_highlight::OccurrenceKind::{LocalVariable, Parameter};
use oxlens_highlight::find_occurrences;
use oxlens_syntax::TextRange;
use pretty_assertions::assert_eq;

use crate::{SourceSnapshot, main_with_name, say_hello};

fn r(start: usize, end: usize) -> TextRange {
    TextRange::new(start, end)
}

#[test]
fn test_local_variable_from_declaration() {
    let parsed = main_with_name().parse();

    for caret in [20, 22, 24] {
        assert_eq!(
            parsed.occurrences_at(caret).sorted(),
            vec![(r(20, 24), LocalVariable), (r(48, 52), LocalVariable)],
            "caret at {caret}"
        );
    }
}

#[test]
fn test_other_variables_are_not_included() {
    let parsed_with_age = SourceSnapshot::new()
        .append("fn main() {")
        .append("    let name = &\"john\";")
        .append("    println(name);")
        .append("    let age = 50;")
        .append("}")
        .parse();

    let occurrences = parsed_with_age.occurrences_at(22);
    assert_eq!(occurrences.len(), 2);
    assert!(!occurrences.contains(r(63, 66)));
    assert_eq!(
        parsed_with_age.occurrences_at(64).sorted(),
        vec![(r(63, 66), LocalVariable)]
    );
}

#[test]
fn test_parameter_and_its_uses() {
    let parsed = say_hello().parse();

    let expected = vec![
        (r(12, 16), Parameter),
        (r(85, 89), LocalVariable),
        (r(128, 132), LocalVariable),
    ];
    assert_eq!(parsed.occurrences_at(14).sorted(), expected);
    assert_eq!(parsed.occurrences_at(87).sorted(), expected);
    assert_eq!(parsed.occurrences_at(14), parsed.occurrences_at(87));
}

#[test]
fn test_parameter_caret_boundaries() {
    let parsed = say_hello().parse();

    assert_eq!(parsed.occurrences_at(12), parsed.occurrences_at(16));
    assert_eq!(parsed.occurrences_at(12).get(r(12, 16)), Some(Parameter));
}

#[test]
fn test_parameter_declaration_is_never_a_local() {
    let parsed = say_hello().parse();

    for caret in [12, 14, 16, 85, 89, 130] {
        assert_eq!(parsed.occurrences_at(caret).get(r(12, 16)), Some(Parameter));
    }
    let greeting = parsed.occurrences_at(28);
    assert_eq!(greeting.get(r(24, 32)), Some(Parameter));
    assert_eq!(greeting.len(), 3);
}

#[test]
fn test_every_occurrence_resolves_to_the_same_set() {
    let snapshot = say_hello();
    let parsed = snapshot.parse();
    let function = parsed.index().function_at(0).unwrap();

    for local in &function.body().unwrap().locals {
        let from_here = parsed.occurrences_at(local.range.start + 1);
        for other in function.body().unwrap().local_variable_identifiers_named(&local.text) {
            assert_eq!(
                parsed.occurrences_at(other.range.start + 1),
                from_here,
                "{} at {} and {}",
                local.text,
                local.range,
                other.range
            );
        }
    }
}

#[test]
fn test_identifiers_inside_macro_invocations() {
    let parsed = SourceSnapshot::new()
        .append("fn sayHello(name: &str, greeting: &str) {")
        .append("    log(fmt!(\"Saying '%?' to '%?'\", greeting, name));")
        .append("    println(fmt!(\"%?, %?\", greeting, name));")
        .append("}")
        .parse();

    let occurrences = parsed.occurrences_at(90);
    insta::assert_snapshot!(occurrences.to_string().trim_end(), @r###"
    12..16 parameter
    88..92 local variable
    133..137 local variable
    "###);
}

#[test]
fn test_nothing_outside_names() {
    let parsed = main_with_name().parse();

    // Between `=` and `&`, inside the string literal, on the function name, past the end.
    for caret in [26, 30, 5, 200] {
        assert!(
            parsed.occurrences_at(caret).is_empty(),
            "caret at {caret}"
        );
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let parsed = say_hello().parse();
    assert_eq!(
        find_occurrences(parsed.index(), 87),
        find_occurrences(parsed.index(), 87)
    );
}

#[test]
fn test_non_ascii_text_uses_character_offsets() {
    let snapshot = SourceSnapshot::new()
        .append("fn greet(who: &str) {")
        .append("    let msg = \"¡hola\";")
        .append("    log(msg, who);")
        .append("}");
    let parsed = snapshot.parse();

    let param = snapshot.range_of("who", 0);
    let use_site = snapshot.range_of("who", 1);
    assert_eq!(snapshot.text().find("who);").unwrap(), use_site.start + 1);
    assert_eq!(
        parsed.occurrences_at(use_site.start).sorted(),
        vec![(param, Parameter), (use_site, LocalVariable)]
    );
}

#[test]
fn test_nested_function_scopes_its_own_parameters() {
    let snapshot = SourceSnapshot::new()
        .append("fn outer(x: u8) {")
        .append("    fn inner(x: u8) -> u8 {")
        .append("        x")
        .append("    }")
        .append("    inner(x);")
        .append("}");
    let parsed = snapshot.parse();

    let inner_param = snapshot.range_of("x", 1);
    let inner_use = snapshot.range_of("x", 2);
    assert_eq!(
        parsed.occurrences_at(inner_use.start).sorted(),
        vec![(inner_param, Parameter), (inner_use, LocalVariable)]
    );
}

#[test]
fn test_lifetimes_and_labels_are_not_uses() {
    let parsed = SourceSnapshot::new()
        .append("fn pick<'a>(a: &'a str) -> &'a str {")
        .append("    let b: &'a str = a;")
        .append("    'a: loop { break 'a; }")
        .append("    b")
        .append("}")
        .parse();

    let expected = vec![(r(12, 13), Parameter), (r(58, 59), LocalVariable)];
    assert_eq!(parsed.occurrences_at(12).sorted(), expected);
    assert_eq!(parsed.occurrences_at(58).sorted(), expected);
    // On the label itself: nothing to highlight.
    assert!(parsed.occurrences_at(67).is_empty());
}
