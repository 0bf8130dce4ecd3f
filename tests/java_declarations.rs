//! End-to-end extraction over real Java sources.

use declscan::{analyze_source, ParseError, RequestedKinds};

fn kinds(names: &[&str]) -> RequestedKinds {
    names.iter().copied().collect()
}

fn listing(source: &str, names: &[&str]) -> Vec<String> {
    analyze_source(source, &kinds(names))
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn class_with_method_and_local() {
    let source = "\
class A {
    void run() {
        int x = 1;
    }
}
";
    assert_eq!(
        listing(source, &["class", "function", "field"]),
        vec!["class - [1-5]", "function - [2-4]"]
    );
    assert!(listing(source, &["field"]).is_empty());
}

#[test]
fn javadoc_spans_to_closing_marker() {
    let source = "\
/**
 * Entry point.
 *
 * @author nobody
 */
public final class Main {
    /** Counter. */
    static int count;
}
";
    assert_eq!(
        listing(source, &["comment"]),
        vec!["comment - [1-5]", "comment - [7-7]"]
    );
}

#[test]
fn constructor_locals_are_reported_as_fields() {
    let source = "\
class Point {
    int x;

    Point(int x) {
        int doubled = x * 2;
        this.x = doubled;
    }

    int twice() {
        int doubled = x * 2;
        return doubled;
    }
}
";
    assert_eq!(
        listing(source, &["field"]),
        vec!["field - [2-2]", "field - [5-5]"]
    );
}

#[test]
fn constructor_loop_variables_are_reported_as_fields() {
    let source = "\
class A {
    A(int[] xs) {
        for (int x : xs) {
        }
    }

    void sum(int[] xs) {
        for (int x : xs) {
        }
    }
}
";
    assert_eq!(listing(source, &["field"]), vec!["field - [3-3]"]);
}

#[test]
fn loop_variable_spans_its_type_and_name() {
    let source = "\
class A {
    static {
        for (final
                String name : java.util.List.of(\"a\")) {
        }
    }
}
";
    assert_eq!(listing(source, &["field"]), vec!["field - [3-4]"]);
}

#[test]
fn each_declared_name_is_a_field() {
    let source = "\
class A {
    int a, b;
}
";
    assert_eq!(
        listing(source, &["field"]),
        vec!["field - [2-2]", "field - [2-2]"]
    );
}

#[test]
fn declarators_on_separate_lines() {
    let source = "\
class A {
    int a,
        b;
}
";
    assert_eq!(
        listing(source, &["field"]),
        vec!["field - [2-2]", "field - [3-3]"]
    );
}

#[test]
fn initialized_declarators_end_on_their_own_lines() {
    let source = "\
class A {
    private static int first = 1, second =
        2;

    void m() {
        int hidden, alsoHidden;
    }
}
";
    assert_eq!(
        listing(source, &["field"]),
        vec!["field - [2-2]", "field - [2-3]"]
    );
}

#[test]
fn multi_line_field_ends_on_semicolon() {
    let source = "\
class Table {
    private static final String[] NAMES = {
        \"a\",
        \"b\"
    };
}
";
    assert_eq!(listing(source, &["field"]), vec!["field - [2-5]"]);
}

#[test]
fn abstract_method_is_one_line() {
    let source = "\
abstract class Shape {
    abstract double area();
}
";
    assert_eq!(listing(source, &["function"]), vec!["function - [2-2]"]);
}

#[test]
fn nested_classes_in_source_order() {
    let source = "\
class Outer {
    static class Inner {
        int value;
    }

    void make() {
        class Local {
            int hidden;
        }
    }
}
";
    assert_eq!(
        listing(source, &["class", "field"]),
        vec![
            "class - [1-11]",
            "class - [2-4]",
            "field - [3-3]",
            "class - [7-9]",
        ]
    );
}

#[test]
fn anonymous_class_fields_inside_method_are_local() {
    let source = "\
class Host {
    Runnable task() {
        return new Runnable() {
            int calls;
            public void run() {
                calls++;
            }
        };
    }
}
";
    assert_eq!(
        listing(source, &["function", "field"]),
        vec!["function - [2-9]", "function - [5-7]"]
    );
}

#[test]
fn interface_enum_and_record_are_not_classes() {
    let source = "\
interface Named {
    String PREFIX = \"n\";
    String name();
}

enum Color { RED, GREEN }

record Pair(int a, int b) {}
";
    assert!(listing(source, &["class"]).is_empty());
    assert_eq!(
        listing(source, &["function", "field"]),
        vec!["field - [2-2]", "function - [3-3]"]
    );
}

#[test]
fn comments_between_members() {
    let source = "\
// header
package demo;

class C {
    // before field
    int a; // trailing
    /* block */ int b;
}
";
    assert_eq!(
        listing(source, &["comment"]),
        vec![
            "comment - [1-1]",
            "comment - [5-5]",
            "comment - [6-6]",
            "comment - [7-7]",
        ]
    );
}

#[test]
fn empty_source_has_no_declarations() {
    assert!(listing("", &["class", "function", "field", "comment"]).is_empty());
}

#[test]
fn syntax_error_is_reported() {
    let err = analyze_source("class A {\n    void m( {\n}\n", &RequestedKinds::all()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Syntax { .. } | ParseError::MultipleSyntax { .. }
    ));
}
