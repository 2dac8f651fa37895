#![allow(non_snake_case)]

use super::*;

#[test]
fn SwiftWriter___line___at_depth_zero___unindented() {
    let mut w = SwiftWriter::new();

    w.line("import Foundation");

    assert_eq!(w.as_str(), "import Foundation\n");
}

#[test]
fn SwiftWriter___line___splits_embedded_newlines() {
    let mut w = SwiftWriter::new();
    let mut guard = w.indent();

    guard.line("let a = 1\nlet b = 2");
    drop(guard);

    assert_eq!(w.as_str(), "    let a = 1\n    let b = 2\n");
}

#[test]
fn SwiftWriter___line___empty_lines_carry_no_indentation() {
    let mut w = SwiftWriter::new();
    let mut guard = w.indent();

    guard.line("a\n\nb");
    drop(guard);

    assert_eq!(w.as_str(), "    a\n\n    b\n");
}

#[test]
fn SwiftWriter___block___indents_body_and_closes() {
    let mut w = SwiftWriter::new();

    w.block("public enum Side: Int", "", |w| {
        w.line("case left = 0");
    });

    assert_eq!(
        w.as_str(),
        "public enum Side: Int {\n    case left = 0\n}\n\n"
    );
}

#[test]
fn SwiftWriter___block___appends_suffix() {
    let mut w = SwiftWriter::new();

    w.block("var table = [", ";", |_| {});

    assert_eq!(w.as_str(), "var table = [ {\n};\n\n");
}

#[test]
fn SwiftWriter___block___nested___four_spaces_per_level() {
    let mut w = SwiftWriter::new();

    w.block("extension Variant", "", |w| {
        w.block("public enum GType: Int", "", |w| {
            w.line("case nil = 0");
        });
    });

    assert!(w.as_str().contains("\n        case nil = 0\n"));
    assert!(w.as_str().contains("\n    }\n"));
}

#[test]
fn SwiftWriter___block___restores_depth() {
    let mut w = SwiftWriter::new();

    w.block("struct A", "", |w| {
        assert_eq!(w.depth(), 1);
    });

    assert_eq!(w.depth(), 0);
}

#[test]
fn SwiftWriter___block___returns_body_result() {
    let mut w = SwiftWriter::new();

    let count = w.block("struct A", "", |w| {
        w.line("let x = 1");
        1
    });

    assert_eq!(count, 1);
}

#[test]
fn SwiftWriter___indent___released_on_drop() {
    let mut w = SwiftWriter::new();

    {
        let mut guard = w.indent();
        assert_eq!(guard.depth(), 1);
        let inner = guard.indent();
        assert_eq!(inner.depth(), 2);
    }

    assert_eq!(w.depth(), 0);
}

#[test]
fn SwiftWriter___with_header___starts_at_depth_zero() {
    let w = SwiftWriter::with_header("// header\n");

    assert_eq!(w.depth(), 0);
    assert_eq!(w.finish(), "// header\n");
}

#[test]
fn SwiftWriter___is_empty___reflects_content() {
    let mut w = SwiftWriter::new();
    assert!(w.is_empty());

    w.blank();

    assert!(!w.is_empty());
}
