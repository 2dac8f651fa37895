//! Identifier normalization for generated Swift code.
//!
//! Schema identifiers are SCREAMING_SNAKE_CASE (enum members) or snake_case
//! (members, properties). Swift wants lowerCamelCase members and PascalCase
//! types, and rejects keywords as bare identifiers.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `SIDE_LEFT` | [`snake_to_camel`] | `sideLeft` |
//! | `Side`, `SIDE_LEFT` | [`drop_matching_prefix`] | `left` |
//! | `default` | [`escape_swift`] | `` `default` `` |
//! | `text_direction` | [`to_pascal_case`] | `TextDirection` |
//!
//! None of these fail: ambiguous input falls back to the plain
//! case-converted form.

use std::borrow::Cow;

/// Swift keywords and contextual names that cannot be used bare as
/// member identifiers.
const SWIFT_KEYWORDS: &[&str] = &[
    "Any",
    "Protocol",
    "Self",
    "Type",
    "as",
    "associatedtype",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "nil",
    "open",
    "operator",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "true",
    "try",
    "typealias",
    "var",
    "where",
    "while",
];

/// Convert snake_case or SCREAMING_SNAKE_CASE to camelCase.
///
/// Underscores are dropped; the character following one is upper-cased and
/// every other character is lower-cased.
///
/// # Examples
///
/// ```
/// use gdswift_core::naming::snake_to_camel;
///
/// assert_eq!(snake_to_camel("TEXT_DIRECTION_LEFT_TO_RIGHT"), "textDirectionLeftToRight");
/// assert_eq!(snake_to_camel("display_name"), "displayName");
/// ```
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Name of an enum member with the owning enum's name stripped.
///
/// The member is camel-cased first; if it starts (case-insensitively) with
/// `enum_name`, that prefix is removed and the next character lower-cased.
/// The unstripped camelCase name is kept when stripping would leave nothing
/// or an identifier starting with a digit.
///
/// # Examples
///
/// ```
/// use gdswift_core::naming::drop_matching_prefix;
///
/// assert_eq!(drop_matching_prefix("TextDirection", "TEXT_DIRECTION_LEFT_TO_RIGHT"), "leftToRight");
/// assert_eq!(drop_matching_prefix("SomeThing", "SOME_THING"), "someThing");
/// assert_eq!(drop_matching_prefix("Key", "KEY_0"), "key0");
/// ```
pub fn drop_matching_prefix(enum_name: &str, member: &str) -> String {
    let camel = snake_to_camel(member);
    let prefix = enum_name.to_lowercase();
    if prefix.is_empty() || !camel.to_lowercase().starts_with(&prefix) {
        return camel;
    }

    let rest: String = camel.chars().skip(enum_name.chars().count()).collect();
    let mut chars = rest.chars();
    match chars.next() {
        None => camel,
        Some(first) if first.is_ascii_digit() => camel,
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Whether `ident` collides with a Swift keyword.
pub fn is_swift_keyword(ident: &str) -> bool {
    SWIFT_KEYWORDS.binary_search(&ident).is_ok()
}

/// Escape `ident` with backticks when it collides with a Swift keyword.
///
/// # Examples
///
/// ```
/// use gdswift_core::naming::escape_swift;
///
/// assert_eq!(escape_swift("default"), "`default`");
/// assert_eq!(escape_swift("left"), "left");
/// ```
pub fn escape_swift(ident: &str) -> Cow<'_, str> {
    if is_swift_keyword(ident) {
        Cow::Owned(format!("`{ident}`"))
    } else {
        Cow::Borrowed(ident)
    }
}

/// Normalized, escaped Swift identifier for an enum member.
pub fn enum_member_name(enum_name: &str, member: &str) -> String {
    escape_swift(&drop_matching_prefix(enum_name, member)).into_owned()
}

/// Convert snake_case to PascalCase.
///
/// # Examples
///
/// ```
/// use gdswift_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("text_direction"), "TextDirection");
/// assert_eq!(to_pascal_case("Vector2"), "Vector2");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
