//! XML text to [`Element`] tree.
//!
//! Namespace declarations such as `xmlns="..."` are kept as ordinary
//! attributes, so a declared default namespace round-trips verbatim. Comments,
//! processing instructions, and the document type declaration are dropped;
//! text on either side of a dropped node is joined.

use crate::common::encoding::decode_input;
use crate::common::{Error, Result};
use crate::tree::Element;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

/// Parse raw document bytes, decoding them first.
pub fn parse_bytes(bytes: &[u8]) -> Result<Element> {
    let text = decode_input(bytes)?;
    parse_str(&text)
}

/// Parse an XML document into its root element.
///
/// Line endings are normalized first: `\r\n` and a lone `\r` both become
/// `\n`. A `&#13;` reference still yields a carriage return.
///
/// # Examples
///
/// ```
/// use colladoc::tree::parse_str;
///
/// let root = parse_str(r#"<a xmlns="urn:x"><b>hi</b> tail</a>"#).unwrap();
/// assert_eq!(root.get_attribute("xmlns"), Some("urn:x"));
/// assert_eq!(root.children()[0].tail(), " tail");
/// ```
pub fn parse_str(xml: &str) -> Result<Element> {
    let xml = normalize_line_endings(xml);
    let mut reader = Reader::from_str(&xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(Error::Parse("Multiple root elements".to_string()));
                }
                stack.push(element_from_start(e)?);
            },
            Ok(Event::Empty(ref e)) => {
                let element = element_from_start(e)?;
                close_element(&mut stack, &mut root, element)?;
            },
            Ok(Event::End(_)) => {
                // End names are matched against start names by the reader.
                if let Some(element) = stack.pop() {
                    close_element(&mut stack, &mut root, element)?;
                }
            },
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t.as_ref())
                    .map_err(|e| Error::Parse(format!("Invalid UTF-8 in text content: {}", e)))?;
                append_text(&mut stack, root.is_some(), text)?;
            },
            Ok(Event::CData(ref c)) => {
                let text = std::str::from_utf8(c.as_ref())
                    .map_err(|e| Error::Parse(format!("Invalid UTF-8 in CDATA section: {}", e)))?;
                append_text(&mut stack, root.is_some(), text)?;
            },
            Ok(Event::GeneralRef(ref r)) => {
                let name = std::str::from_utf8(r.as_ref())
                    .map_err(|e| Error::Parse(format!("Invalid UTF-8 in reference: {}", e)))?;
                let reference = format!("&{};", name);
                let resolved = quick_xml::escape::unescape(&reference)?;
                append_text(&mut stack, root.is_some(), &resolved)?;
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Parse(format!(
                    "XML parsing error at position {}: {}",
                    reader.error_position(),
                    e
                )));
            },
            _ => {
                // Declarations, comments, processing instructions, doctype
            },
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Parse(format!("Unclosed element <{}>", open.name())));
    }
    root.ok_or_else(|| Error::Parse("No root element found".to_string()))
}

fn normalize_line_endings(xml: &str) -> Cow<'_, str> {
    if !xml.contains('\r') {
        return Cow::Borrowed(xml);
    }
    Cow::Owned(xml.replace("\r\n", "\n").replace('\r', "\n"))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| Error::Parse("Invalid UTF-8 in tag name".to_string()))?
        .to_string();
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| Error::Parse("Invalid UTF-8 in attribute key".to_string()))?;
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|_| Error::Parse("Invalid UTF-8 in attribute value".to_string()))?;
        let value = quick_xml::escape::unescape(raw)?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.add_child(element),
        None if root.is_some() => {
            return Err(Error::Parse("Multiple root elements".to_string()));
        },
        None => *root = Some(element),
    }
    Ok(())
}

/// Route character data to the text of the open element, or to the tail of
/// its most recent child.
fn append_text(stack: &mut [Element], after_root: bool, text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(open) => match open.children_mut().last_mut() {
            Some(last) => last.push_tail(text),
            None => open.push_text(text),
        },
        None if text.trim().is_empty() => {},
        None => {
            let place = if after_root { "after" } else { "before" };
            return Err(Error::Parse(format!(
                "Character data {} the root element",
                place
            )));
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_and_tail() {
        let root = parse_str("<a>head<b>inner</b>middle<c/>end</a>").unwrap();
        assert_eq!(root.text(), "head");
        assert_eq!(root.children()[0].text(), "inner");
        assert_eq!(root.children()[0].tail(), "middle");
        assert_eq!(root.children()[1].name(), "c");
        assert_eq!(root.children()[1].tail(), "end");
        assert_eq!(root.tail(), "");
    }

    #[test]
    fn test_parse_keeps_default_namespace_attribute() {
        let root = parse_str(
            r#"<COLLADA xmlns="http://example.com/custom" version="1.4.1"/>"#,
        )
        .unwrap();
        assert_eq!(
            root.attributes(),
            [
                ("xmlns".to_string(), "http://example.com/custom".to_string()),
                ("version".to_string(), "1.4.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_resolves_references() {
        let root =
            parse_str(r#"<a title="x &amp; y">1 &lt; 2 &#65;<![CDATA[<raw>]]></a>"#).unwrap();
        assert_eq!(root.get_attribute("title"), Some("x & y"));
        assert_eq!(root.text(), "1 < 2 A<raw>");
    }

    #[test]
    fn test_parse_drops_comments_and_declaration() {
        let root = parse_str("<?xml version='1.0'?>\n<!-- hi --><a>x<!-- c -->y</a>\n").unwrap();
        assert_eq!(root.name(), "a");
        assert_eq!(root.text(), "xy");
    }

    #[test]
    fn test_parse_normalizes_line_endings() {
        let root = parse_str("<a>\r\n<b>one\r\ntwo\rthree</b>\r\n</a>").unwrap();
        assert_eq!(root.text(), "\n");
        assert_eq!(root.children()[0].text(), "one\ntwo\nthree");
        assert_eq!(root.children()[0].tail(), "\n");

        let root = parse_str("<a>x&#13;y</a>").unwrap();
        assert_eq!(root.text(), "x\ry");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_str("<a><b></a>"), Err(Error::Parse(_))));
        assert!(matches!(parse_str("<a>"), Err(Error::Parse(_))));
        assert!(matches!(parse_str(""), Err(Error::Parse(_))));
        assert!(matches!(parse_str("<a/><b/>"), Err(Error::Parse(_))));
        assert!(matches!(parse_str("text<a/>"), Err(Error::Parse(_))));
        assert!(matches!(parse_str(r#"<a x="1" x="2"/>"#), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_bytes_decodes_input() {
        let root = parse_bytes(b"\xEF\xBB\xBF<a>ok</a>").unwrap();
        assert_eq!(root.text(), "ok");
    }
}
