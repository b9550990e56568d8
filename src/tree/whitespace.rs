//! Whitespace passes applied to a tree just before it is serialized.
//!
//! [`indent`] lays the tree out one element per line, filling in only text
//! that is empty or blank. [`flatten`] strips surrounding whitespace from every
//! text and tail. Both passes are idempotent.

use crate::tree::Element;

#[inline]
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Indent a tree in place, one `unit` per nesting level.
///
/// Non-blank text is never replaced, so literal content inside leaf elements
/// and mixed content survive untouched.
///
/// # Examples
///
/// ```
/// use colladoc::tree::{indent, parse_str, to_xml_string};
///
/// let mut root = parse_str("<a><b><c/></b></a>").unwrap();
/// indent(&mut root, "  ");
/// assert_eq!(to_xml_string(&root, None).unwrap(), "<a>\n  <b>\n    <c/>\n  </b>\n</a>\n");
/// ```
pub fn indent(root: &mut Element, unit: &str) {
    indent_at(root, unit, 0);
}

fn indent_at(element: &mut Element, unit: &str, depth: usize) {
    let newline = format!("\n{}", unit.repeat(depth));

    if element.has_children() {
        if is_blank(element.text()) {
            element.set_text(format!("{}{}", newline, unit));
        }
        if is_blank(element.tail()) {
            element.set_tail(newline.clone());
        }
        for child in element.children_mut().iter_mut() {
            indent_at(child, unit, depth + 1);
        }
        // The closing tag lines up with the opening one.
        if let Some(last) = element.children_mut().last_mut()
            && is_blank(last.tail())
        {
            last.set_tail(newline);
        }
    } else if depth > 0 && is_blank(element.tail()) {
        element.set_tail(newline);
    }
}

/// Trim leading and trailing whitespace from every text and tail in a tree.
///
/// Whitespace that was meaningful inside a text node is lost.
pub fn flatten(root: &mut Element) {
    root.walk_mut(&mut |element, _| {
        let text = element.text().trim();
        if text.len() != element.text().len() {
            let text = text.to_string();
            element.set_text(text);
        }
        let tail = element.tail().trim();
        if tail.len() != element.tail().len() {
            let tail = tail.to_string();
            element.set_tail(tail);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{parse_str, to_xml_string};
    use proptest::prelude::*;

    const SAMPLE: &str = "<a>\n   <b>keep  me </b>  <c><d/><e>x</e></c>\n\n</a>";

    #[test]
    fn test_indent_layout() {
        let mut root = parse_str(SAMPLE).unwrap();
        indent(&mut root, "\t");
        assert_eq!(
            to_xml_string(&root, None).unwrap(),
            "<a>\n\t<b>keep  me </b>\n\t<c>\n\t\t<d/>\n\t\t<e>x</e>\n\t</c>\n</a>\n"
        );
    }

    #[test]
    fn test_indent_keeps_non_blank_text() {
        let mut root = parse_str("<a>label<b/></a>").unwrap();
        indent(&mut root, "  ");
        assert_eq!(root.text(), "label");
        assert_eq!(root.children()[0].tail(), "\n");
    }

    #[test]
    fn test_flatten_strips_everything() {
        let mut root = parse_str(SAMPLE).unwrap();
        flatten(&mut root);
        assert_eq!(
            to_xml_string(&root, None).unwrap(),
            "<a><b>keep  me</b><c><d/><e>x</e></c></a>"
        );
    }

    #[test]
    fn test_flatten_then_indent() {
        let mut root = parse_str(SAMPLE).unwrap();
        flatten(&mut root);
        indent(&mut root, "  ");
        let once = to_xml_string(&root, None).unwrap();
        assert!(once.contains("\n  <c>\n    <d/>"));
    }

    fn tree_strategy() -> impl Strategy<Value = Element> {
        let text = prop::sample::select(vec!["", " ", "\n\t", "v", " v ", "a b"]);
        let leaf = (prop::sample::select(vec!["p", "q", "r"]), text.clone(), text.clone())
            .prop_map(|(name, text, tail)| {
                let mut e = Element::new(name).with_text(text);
                e.set_tail(tail);
                e
            });
        leaf.prop_recursive(4, 32, 4, move |inner| {
            (
                prop::sample::select(vec!["s", "t"]),
                text.clone(),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(name, text, children)| {
                    let mut e = Element::new(name).with_text(text);
                    for child in children {
                        e.add_child(child);
                    }
                    e
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_indent_is_idempotent(tree in tree_strategy()) {
            let mut once = tree.clone();
            indent(&mut once, "\t");
            let first = to_xml_string(&once, None).unwrap();
            indent(&mut once, "\t");
            prop_assert_eq!(first, to_xml_string(&once, None).unwrap());
        }

        #[test]
        fn prop_flatten_is_idempotent(tree in tree_strategy()) {
            let mut once = tree.clone();
            flatten(&mut once);
            let first = to_xml_string(&once, None).unwrap();
            flatten(&mut once);
            prop_assert_eq!(first, to_xml_string(&once, None).unwrap());
        }
    }
}
