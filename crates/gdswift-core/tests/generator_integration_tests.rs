//! End-to-end generation over a trimmed engine API snapshot and its
//! documentation tree.

#![allow(non_snake_case)]

use gdswift_core::output::FILE_HEADER;
use gdswift_core::{Generation, Generator, GeneratorConfig, OutputMode};
use gdswift_schema::{DocDirectory, ExtensionApi, NoDocs};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_api() -> ExtensionApi {
    ExtensionApi::from_file(fixtures().join("extension_api.json")).unwrap()
}

fn generate(mode: OutputMode) -> Generation {
    let api = load_api();
    let docs = DocDirectory::new(fixtures().join("doc"));
    let config = GeneratorConfig::new().with_output_mode(mode);
    Generator::new(&api, &docs, config).run().unwrap()
}

fn file<'a>(generation: &'a Generation, path: &str) -> &'a str {
    generation
        .output
        .get(path)
        .unwrap_or_else(|| panic!("{path} not generated"))
}

// =============================================================================
// Global enums
// =============================================================================

mod global_enums {
    use super::*;

    #[test]
    fn core_defs___documented_global_enum() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(core.contains(
            "public enum Side: Int {\n    \
             /// Left side, usually used for ``Control`` or ``StyleBox``-derived classes.\n    \
             case left = 0 // SIDE_LEFT\n"
        ));
        assert!(core.contains("    case bottom = 3 // SIDE_BOTTOM\n"));
    }

    #[test]
    fn core_defs___inline_alignment___denylist_and_duplicates() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(!core.contains("INLINE_ALIGNMENT_TOP_TO"));
        assert!(!core.contains("INLINE_ALIGNMENT_TO_TOP"));
        assert!(!core.contains("INLINE_ALIGNMENT_IMAGE_MASK"));
        assert!(!core.contains("INLINE_ALIGNMENT_TEXT_MASK"));
        assert!(core.contains("    case centerTo = 1 // INLINE_ALIGNMENT_CENTER_TO\n"));
        assert!(core.contains("    case top = 0 // INLINE_ALIGNMENT_TOP\n"));
    }

    #[test]
    fn core_defs___renamed_error_enum() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(core.contains("public enum GodotError: Int {"));
        assert!(core.contains(
            "    /// Methods that return ``Error`` return ``OK`` when no error occurred.\n    case ok = 0 // OK\n"
        ));
    }

    #[test]
    fn core_defs___digit_remainder_keeps_full_name() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(core.contains("    case key0 = 48 // KEY_0\n"));
        assert!(core.contains("    case special = 4194304 // KEY_SPECIAL\n"));
    }

    #[test]
    fn core_defs___bitfields___option_sets_keep_duplicates() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(core.contains("public struct MethodFlags: OptionSet {"));
        assert!(core.contains(
            "    /// Flag for a normal method.\n    public static let methodFlagNormal = MethodFlags(rawValue: 1)\n"
        ));
        assert!(core.contains("    public static let `default` = MethodFlags(rawValue: 1)\n"));
        assert!(core.contains("public struct KeyModifierMask: OptionSet {"));
        assert!(core.contains("    public static let keyMaskShift = KeyModifierMask(rawValue: 33554432)\n"));
    }

    #[test]
    fn core_defs___variant_enums___inside_extension() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(core.contains(
            "extension Variant {\n    public enum GType: Int {\n        case `nil` = 0 // TYPE_NIL\n"
        ));
        assert!(core.contains("extension Variant {\n    public enum Operator: Int {\n"));
        assert!(core.contains("        case opIn = 24 // OP_IN\n"));
    }
}

// =============================================================================
// Built-ins and classes
// =============================================================================

mod declarations {
    use super::*;

    #[test]
    fn builtins___value_and_opaque_types() {
        let generation = generate(OutputMode::SingleFile);

        let builtins = file(&generation, "generated-builtin/builtins.swift");

        assert!(builtins.starts_with(FILE_HEADER));
        assert!(builtins.contains(
            "/// A 2D vector using floating-point coordinates.\npublic struct Vector2 {\n    public static let nativeSize = 8\n"
        ));
        assert!(builtins.contains("public struct Color {"));
        assert!(builtins.contains("    public var r8: Int\n"));
        assert!(builtins.contains("public final class GString {"));
        assert!(builtins.contains("public final class GArray {"));
        assert!(builtins.contains("public final class Callable {"));
        assert!(!builtins.contains("struct Nil"));
        assert!(!builtins.contains("class Nil"));
    }

    #[test]
    fn builtins___nested_enum_docs() {
        let generation = generate(OutputMode::SingleFile);

        let builtins = file(&generation, "generated-builtin/builtins.swift");

        assert!(builtins.contains(
            "        /// Enumerated value for the X axis.\n        case x = 0 // AXIS_X\n"
        ));
    }

    #[test]
    fn classes___shells_with_nested_enums() {
        let generation = generate(OutputMode::SingleFile);

        let classes = file(&generation, "generated/classes.swift");

        assert!(classes.contains(
            "/// Base class for all other classes in the engine.\nopen class Object: Wrapped {\n"
        ));
        assert!(classes.contains("open class RefCounted: Object {\n}\n"));
        assert!(classes.contains(
            "        /// Inherits ``Node/processMode`` from the node's parent. This is the default for any newly created node.\n        case inherit = 0 // PROCESS_MODE_INHERIT\n"
        ));
        assert!(classes.contains("``SceneTree/paused``"));
    }

    #[test]
    fn classes___first_doc_entry_wins() {
        let generation = generate(OutputMode::SingleFile);

        let classes = file(&generation, "generated/classes.swift");

        assert!(classes.contains("Tells the parent ``Container`` to expand"));
        assert!(!classes.contains("Duplicate entry."));
    }

    #[test]
    fn registry___every_class_in_ctor_table() {
        let generation = generate(OutputMode::SingleFile);

        let core = file(&generation, "generated-builtin/core-defs.swift");

        assert!(core.ends_with(
            "var godotFrameworkCtors: [String: Wrapped.Type] = [\n    \
             \"Control\": Control.self,\n    \
             \"Node\": Node.self,\n    \
             \"Object\": Object.self,\n    \
             \"RefCounted\": RefCounted.self,\n\
             ]\n"
        ));
    }

    #[test]
    fn enum_index___global_and_scoped_keys() {
        let generation = generate(OutputMode::SingleFile);

        for key in [
            "Side",
            "Variant.Type",
            "MethodFlags",
            "Vector2.Axis",
            "Object.ConnectFlags",
            "Node.ProcessMode",
            "Control.SizeFlags",
        ] {
            assert!(generation.enums.contains(key), "{key} not indexed");
        }
    }
}

// =============================================================================
// Partitioning and determinism
// =============================================================================

mod partitioning {
    use super::*;

    #[test]
    fn per_type___one_file_per_declaration() {
        let generation = generate(OutputMode::PerType);

        let vector2 = file(&generation, "generated-builtin/Vector2.swift");
        let node = file(&generation, "generated/Node.swift");

        assert!(vector2.starts_with(FILE_HEADER));
        assert!(vector2.contains("public struct Vector2 {"));
        assert!(node.starts_with(FILE_HEADER));
        assert!(node.contains("open class Node: Object {"));
        assert!(generation.output.get("generated/classes.swift").is_none());
    }

    #[test]
    fn modes___same_core_defs() {
        let single = generate(OutputMode::SingleFile);
        let per_type = generate(OutputMode::PerType);

        assert_eq!(
            file(&single, "generated-builtin/core-defs.swift"),
            file(&per_type, "generated-builtin/core-defs.swift")
        );
    }

    #[test]
    fn modes___same_declarations() {
        let single = generate(OutputMode::SingleFile);
        let per_type = generate(OutputMode::PerType);
        let builtins = file(&single, "generated-builtin/builtins.swift");
        let classes = file(&single, "generated/classes.swift");

        for (path, text) in per_type.output.iter() {
            if path.ends_with("core-defs.swift") {
                continue;
            }
            let body = text.strip_prefix(FILE_HEADER).unwrap();
            let combined = if path.starts_with("generated-builtin") { builtins } else { classes };
            assert!(combined.contains(body), "{} differs between modes", path.display());
        }
    }

    #[test]
    fn run___deterministic() {
        let first = generate(OutputMode::SingleFile);
        let second = generate(OutputMode::SingleFile);

        assert_eq!(first.output, second.output);
    }

    #[test]
    fn write_to___files_on_disk() {
        let dir = TempDir::new().unwrap();
        let generation = generate(OutputMode::SingleFile);

        generation.output.write_to(dir.path()).unwrap();

        for (path, text) in generation.output.iter() {
            assert_eq!(fs::read_to_string(dir.path().join(path)).unwrap(), text);
        }
        assert!(dir.path().join("generated-builtin/core-defs.swift").is_file());
        assert!(dir.path().join("generated/classes.swift").is_file());
    }

    #[test]
    fn missing_docs___generation_still_succeeds() {
        let api = load_api();

        let generation = Generator::new(&api, &NoDocs, GeneratorConfig::default())
            .run()
            .unwrap();

        let core = file(&generation, "generated-builtin/core-defs.swift");
        assert!(!core.contains("///"));
        assert!(core.contains("case left = 0 // SIDE_LEFT"));
    }

    #[test]
    fn unknown_build_configuration___sizeless_types() {
        let api = load_api();
        let config = GeneratorConfig::new().with_build_configuration("float_128");

        let generation = Generator::new(&api, &NoDocs, config).run().unwrap();

        let builtins = file(&generation, "generated-builtin/builtins.swift");
        assert!(!builtins.contains("nativeSize"));
        assert!(generation.classification.is_value_type("Vector2"));
    }
}
