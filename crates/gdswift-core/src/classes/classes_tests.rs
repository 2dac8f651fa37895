#![allow(non_snake_case)]

use super::*;
use crate::enums::EnumIndex;
use gdswift_schema::{DocConstant, EnumDefinition, EnumMember};

fn class(name: &str, inherits: Option<&str>) -> ApiClass {
    ApiClass {
        name: name.to_string(),
        inherits: inherits.map(str::to_string),
        is_refcounted: Some(false),
        is_instantiable: Some(true),
        enums: None,
    }
}

fn emit(
    class: &ApiClass,
    doc: Option<&ClassDoc>,
) -> (String, EnumIndex, ReferenceTypeRegistry) {
    let mut index = EnumIndex::new();
    let mut reference_types = ReferenceTypeRegistry::new();
    let mut w = SwiftWriter::new();
    {
        let mut enums = EnumSynthesizer::new(&mut index);
        ClassEmitter::new(&mut reference_types).emit(&mut w, class, doc, &mut enums);
    }
    (w.finish(), index, reference_types)
}

#[test]
fn ClassEmitter___derived_class___inherits_parent() {
    let (out, _, _) = emit(&class("Node", Some("Object")), None);

    assert_eq!(out, "open class Node: Object {\n}\n\n");
}

#[test]
fn ClassEmitter___root_class___inherits_wrapped() {
    let (out, _, _) = emit(&class("Object", None), None);

    assert_eq!(out, "open class Object: Wrapped {\n}\n\n");
}

#[test]
fn ClassEmitter___emit___registers_reference_type() {
    let (_, _, reference_types) = emit(&class("Node", Some("Object")), None);

    assert!(reference_types.contains("Node"));
    assert_eq!(reference_types.len(), 1);
}

#[test]
fn ClassEmitter___nested_enum___registered_with_class_prefix() {
    let mut node = class("Node", Some("Object"));
    node.enums = Some(vec![EnumDefinition::new(
        "ProcessMode",
        vec![
            EnumMember::new("PROCESS_MODE_INHERIT", 0),
            EnumMember::new("PROCESS_MODE_PAUSABLE", 1),
        ],
    )]);
    let doc = ClassDoc {
        name: "Node".to_string(),
        brief_description: Some("Base class for all scene objects.".to_string()),
        constants: vec![DocConstant::new(
            "PROCESS_MODE_INHERIT",
            "Inherits [member process_mode] from the node's parent.",
        )],
        ..ClassDoc::default()
    };

    let (out, index, _) = emit(&node, Some(&doc));

    assert_eq!(
        out,
        "/// Base class for all scene objects.\n\
         open class Node: Object {\n    \
         public enum ProcessMode: Int {\n        \
         /// Inherits ``Node/processMode`` from the node's parent.\n        \
         case inherit = 0 // PROCESS_MODE_INHERIT\n        \
         case pausable = 1 // PROCESS_MODE_PAUSABLE\n    \
         }\n\n\
         }\n\n"
    );
    assert!(index.contains("Node.ProcessMode"));
}

#[test]
fn ClassEmitter___nested_bitfield___option_set_inside_class() {
    let mut control = class("Control", Some("CanvasItem"));
    control.enums = Some(vec![EnumDefinition::bitfield(
        "SizeFlags",
        vec![EnumMember::new("SIZE_SHRINK_BEGIN", 0), EnumMember::new("SIZE_FILL", 1)],
    )]);

    let (out, index, _) = emit(&control, None);

    assert!(out.contains("    public struct SizeFlags: OptionSet {"));
    assert!(out.contains("public static let sizeFill = SizeFlags(rawValue: 1)"));
    assert!(index.contains("Control.SizeFlags"));
}
