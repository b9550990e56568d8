//! [`Element`] tree to XML text.
//!
//! Text and tail strings are written exactly as stored; any layout comes from
//! the whitespace passes in [`crate::tree::whitespace`]. Elements with neither
//! text nor children are written as empty-element tags.

use crate::common::{Error, Result};
use crate::tree::Element;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{Cursor, Write};

/// Serialize a tree to a UTF-8 string.
///
/// When `declaration` names an encoding, an XML declaration carrying that
/// label is written first, followed by a newline.
pub fn to_xml_string(root: &Element, declaration: Option<&str>) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    if let Some(encoding) = declaration {
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some(encoding), None)),
        )?;
        emit(&mut writer, Event::Text(BytesText::new("\n")))?;
    }
    write_element(&mut writer, root)?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result)
        .map_err(|e| Error::Encoding(format!("Invalid UTF-8 in generated XML: {}", e)))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.text().is_empty() && !element.has_children() {
        emit(writer, Event::Empty(start))?;
    } else {
        emit(writer, Event::Start(start))?;
        if !element.text().is_empty() {
            emit(writer, Event::Text(BytesText::new(element.text())))?;
        }
        for child in element.children() {
            write_element(writer, child)?;
        }
        emit(writer, Event::End(BytesEnd::new(element.name())))?;
    }

    if !element.tail().is_empty() {
        emit(writer, Event::Text(BytesText::new(element.tail())))?;
    }
    Ok(())
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_str;

    #[test]
    fn test_write_compact_tree() {
        let root = Element::new("unit")
            .with_attribute("name", "meter")
            .with_attribute("meter", "1.0");
        assert_eq!(
            to_xml_string(&root, None).unwrap(),
            r#"<unit name="meter" meter="1.0"/>"#
        );
    }

    #[test]
    fn test_write_declaration_and_tails() {
        let mut child = Element::new("b").with_text("x");
        child.set_tail("\n");
        let mut root = Element::new("a").with_text("\n").with_child(child);
        root.set_tail("\n");

        let xml = to_xml_string(&root, Some("UTF-8")).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n<b>x</b>\n</a>\n"
        );
    }

    #[test]
    fn test_write_escapes_special_characters() {
        let root = Element::new("a")
            .with_attribute("title", "x & \"y\"")
            .with_text("1 < 2");
        let xml = to_xml_string(&root, None).unwrap();
        let reparsed = parse_str(&xml).unwrap();
        assert_eq!(reparsed, root);
    }
}
