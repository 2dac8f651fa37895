//! Documentation comments for generated declarations.
//!
//! Engine documentation is written in a BBCode dialect. It is converted to
//! the Markdown flavour Swift doc comments understand, and symbol references
//! become DocC symbol links:
//!
//! | BBCode | Swift doc |
//! |--------|-----------|
//! | `[b]x[/b]` | `**x**` |
//! | `[i]x[/i]` | `_x_` |
//! | `[code]x[/code]` | `` `x` `` |
//! | `[codeblock]` … `[/codeblock]` | fenced block |
//! | `[url=u]x[/url]` | `[x](u)` |
//! | `[Node]`, `[constant X]`, `[enum X]` | ` ``Node`` `, ` ``X`` ` |
//! | `[method get_name]` in class `Node` | ` ``Node/getName`` ` |

use crate::naming::snake_to_camel;
use crate::writer::SwiftWriter;

/// Write `text` as `///` lines. Nothing is written for blank text.
pub fn write_doc(w: &mut SwiftWriter, class: Option<&str>, text: &str) {
    let converted = bbcode_to_markdown(text, class);
    let lines: Vec<&str> = converted.lines().map(str::trim).collect();

    let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
        return;
    };
    let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);

    for line in &lines[first..=last] {
        if line.is_empty() {
            w.line("///");
        } else {
            w.line(&format!("/// {line}"));
        }
    }
}

/// Convert engine BBCode to Swift doc Markdown.
///
/// `class` is the class the text documents; it qualifies unqualified
/// method and member references.
pub fn bbcode_to_markdown(text: &str, class: Option<&str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut link_target: Option<String> = None;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let tag = &after[..close];
        match convert_tag(tag, class, &mut link_target) {
            Some(replacement) => out.push_str(&replacement),
            None => {
                out.push('[');
                out.push_str(tag);
                out.push(']');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

fn convert_tag(tag: &str, class: Option<&str>, link_target: &mut Option<String>) -> Option<String> {
    let simple = match tag {
        "b" | "/b" => Some("**"),
        "i" | "/i" => Some("_"),
        "code" | "/code" | "kbd" | "/kbd" => Some("`"),
        "br" => Some("\n"),
        "codeblock" | "/codeblock" | "/gdscript" | "/csharp" => Some("\n```\n"),
        "gdscript" => Some("\n```gdscript\n"),
        "csharp" => Some("\n```csharp\n"),
        "codeblocks" | "/codeblocks" => Some(""),
        "url" => {
            *link_target = None;
            Some("[")
        }
        _ => None,
    };
    if let Some(s) = simple {
        return Some(s.to_string());
    }

    if tag == "/url" {
        return Some(match link_target.take() {
            Some(url) => format!("]({url})"),
            None => "]".to_string(),
        });
    }
    if let Some(url) = tag.strip_prefix("url=") {
        *link_target = Some(url.to_string());
        return Some("[".to_string());
    }

    if let Some((kind, target)) = tag.split_once(' ') {
        return match kind {
            "method" | "member" | "signal" | "theme_item" => {
                Some(format!("``{}``", member_link(target, class)))
            }
            "constant" | "enum" | "param" | "annotation" => Some(format!("``{target}``")),
            _ => None,
        };
    }

    if is_type_reference(tag) {
        return Some(format!("``{}``", crate::types::swift_type_name(tag)));
    }

    None
}

fn member_link(target: &str, class: Option<&str>) -> String {
    match (target.rsplit_once('.'), class) {
        (Some((owner, name)), _) => format!("{owner}/{}", snake_to_camel(name)),
        (None, Some(class)) => format!("{class}/{}", snake_to_camel(target)),
        (None, None) => snake_to_camel(target),
    }
}

/// `[Node]`, `[@GlobalScope]`: a bare capitalized identifier.
fn is_type_reference(tag: &str) -> bool {
    let name = tag.strip_prefix('@').unwrap_or(tag);
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
