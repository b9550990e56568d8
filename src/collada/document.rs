//! The COLLADA document model.
//!
//! A [`ColladaDocument`] owns an element tree rooted at `<COLLADA>`. New
//! documents are instantiated from a fixed skeleton; existing ones are parsed
//! from bytes. Either way the contributor block is stamped with the current
//! user and this library's identity.
//!
//! # Example
//!
//! ```no_run
//! use colladoc::{ColladaDocument, WriteOptions};
//!
//! # fn main() -> colladoc::Result<()> {
//! let mut doc = ColladaDocument::new("my-exporter")?;
//! doc.set_unit_scale("centimeter", None)?;
//! doc.set_up_axis("z")?;
//! doc.save("scene.dae", &WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```

use crate::collada::axis::UpAxis;
use crate::collada::constants::{
    COLLADA_NAMESPACE, NAMESPACE_ATTRIBUTE, REQUIRED_ASSET_PATHS, ROOT_ELEMENT, TEMPLATE,
    TOOL_IDENTITY, path,
};
use crate::collada::options::{Whitespace, WriteOptions};
use crate::collada::timestamp::{format_timestamp, now, parse_timestamp};
use crate::collada::unit::{DEFAULT_UNIT, UnitScale};
use crate::common::encoding::{encode_text, resolve_output_encoding};
use crate::common::user::current_user;
use crate::common::{Error, Result};
use crate::tree::{self, Element};
use chrono::{DateTime, FixedOffset};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// An in-memory COLLADA 1.4.1 document.
#[derive(Debug, Clone)]
pub struct ColladaDocument {
    root: Element,
    is_new: bool,
    created_pending: bool,
}

impl ColladaDocument {
    /// Create a new document from the built-in skeleton.
    ///
    /// `tool` is appended to the authoring tool identity; pass `""` for none.
    pub fn new(tool: &str) -> Result<Self> {
        let root = tree::parse_str(TEMPLATE)?;
        let mut doc = Self {
            root,
            is_new: true,
            created_pending: true,
        };
        doc.ensure_namespace();
        doc.stamp_contributor(tool)?;
        debug!(tool, "created COLLADA document from template");
        Ok(doc)
    }

    /// Load a document from a file.
    pub fn open<P: AsRef<Path>>(path: P, tool: &str) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read COLLADA document");
        Self::from_bytes(&bytes, tool)
    }

    /// Load a document from any reader, consuming it to the end.
    pub fn from_reader<R: Read>(mut reader: R, tool: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, tool)
    }

    /// Load a document from raw bytes.
    ///
    /// The root must be `<COLLADA>` and every required asset field must be
    /// present. A default namespace declared on the root is kept verbatim;
    /// when none is declared the COLLADA namespace is added.
    pub fn from_bytes(bytes: &[u8], tool: &str) -> Result<Self> {
        let root = tree::parse_bytes(bytes)?;
        if root.name() != ROOT_ELEMENT {
            return Err(Error::Schema(format!(
                "root element is <{}>, expected <{}>",
                root.name(),
                ROOT_ELEMENT
            )));
        }

        let mut doc = Self {
            root,
            is_new: false,
            created_pending: false,
        };
        doc.ensure_namespace();
        if let Some(missing) = REQUIRED_ASSET_PATHS
            .iter()
            .find(|p| doc.root.find(p).is_none())
        {
            return Err(Error::missing_element(missing));
        }
        doc.stamp_contributor(tool)?;
        debug!(
            namespace = doc.namespace().unwrap_or_default(),
            version = doc.version().unwrap_or_default(),
            "loaded COLLADA document"
        );
        Ok(doc)
    }

    /// Whether this document was created from the skeleton rather than loaded.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// The `<COLLADA>` root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    ///
    /// Removing required asset fields makes later accessors fail with
    /// [`Error::Schema`].
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Default namespace declared on the root.
    pub fn namespace(&self) -> Option<&str> {
        self.root.get_attribute(NAMESPACE_ATTRIBUTE)
    }

    /// Schema version declared on the root.
    pub fn version(&self) -> Option<&str> {
        self.root.get_attribute("version")
    }

    fn ensure_namespace(&mut self) {
        if !self.root.has_attribute(NAMESPACE_ATTRIBUTE) {
            self.root
                .insert_attribute(0, NAMESPACE_ATTRIBUTE, COLLADA_NAMESPACE);
        }
    }

    fn stamp_contributor(&mut self, tool: &str) -> Result<()> {
        let identity = if tool.is_empty() {
            TOOL_IDENTITY.to_string()
        } else {
            format!("{} | {}", TOOL_IDENTITY, tool)
        };
        self.element_mut(path::AUTHOR)?.set_text(current_user());
        self.element_mut(path::AUTHORING_TOOL)?.set_text(identity);
        Ok(())
    }

    fn element(&self, path: &str) -> Result<&Element> {
        self.root
            .find(path)
            .ok_or_else(|| Error::missing_element(path))
    }

    fn element_mut(&mut self, path: &str) -> Result<&mut Element> {
        self.root
            .find_mut(path)
            .ok_or_else(|| Error::missing_element(path))
    }

    /// Text of `contributor/author`.
    pub fn author(&self) -> Result<&str> {
        Ok(self.element(path::AUTHOR)?.text())
    }

    /// Text of `contributor/authoring_tool`.
    pub fn authoring_tool(&self) -> Result<&str> {
        Ok(self.element(path::AUTHORING_TOOL)?.text())
    }

    /// Text of `contributor/comments`, if the element exists.
    pub fn comments(&self) -> Option<&str> {
        self.root.find(path::COMMENTS).map(Element::text)
    }

    /// Set `contributor/comments`.
    pub fn set_comments(&mut self, comments: impl Into<String>) -> Result<()> {
        self.element_mut(path::COMMENTS)?.set_text(comments);
        Ok(())
    }

    /// Text of `contributor/copyright`, if the element exists.
    pub fn copyright(&self) -> Option<&str> {
        self.root.find(path::COPYRIGHT).map(Element::text)
    }

    /// Set `contributor/copyright`.
    pub fn set_copyright(&mut self, copyright: impl Into<String>) -> Result<()> {
        self.element_mut(path::COPYRIGHT)?.set_text(copyright);
        Ok(())
    }

    /// Unit name and meters-per-unit from `asset/unit`.
    pub fn unit_scale(&self) -> Result<UnitScale> {
        let unit = self.element(path::UNIT)?;
        let name = unit
            .get_attribute("name")
            .ok_or_else(|| Error::missing_attribute(path::UNIT, "name"))?;
        let meter = unit
            .get_numeric_attribute("meter")
            .ok_or_else(|| match unit.get_attribute("meter") {
                Some(raw) => Error::Schema(format!(
                    "'{}' has a non-numeric meter value: {}",
                    path::UNIT,
                    raw
                )),
                None => Error::missing_attribute(path::UNIT, "meter"),
            })?;
        Ok(UnitScale::new(name, meter))
    }

    /// Set the document unit.
    ///
    /// With an explicit `scale`, `name` and `scale` are written as given and
    /// the call always succeeds. Without one, `name` is looked up
    /// case-insensitively among the known units; an unknown name leaves the
    /// document untouched and returns `Ok(false)`.
    pub fn set_unit_scale(&mut self, name: &str, scale: Option<f64>) -> Result<bool> {
        let unit = match scale {
            Some(meter) => UnitScale::new(name, meter),
            None => match UnitScale::lookup(name) {
                Some(unit) => unit,
                None => {
                    warn!(unit = name, "unknown unit name, document unit left unchanged");
                    return Ok(false);
                },
            },
        };
        self.apply_unit(&unit)?;
        Ok(true)
    }

    /// Write a unit with both attributes replaced together.
    pub fn apply_unit(&mut self, unit: &UnitScale) -> Result<()> {
        let meter = unit.meter_text();
        self.element_mut(path::UNIT)?
            .replace_attributes([("name", unit.name.as_str()), ("meter", meter.as_str())]);
        Ok(())
    }

    /// Restore the default unit, one meter.
    pub fn reset_unit_scale(&mut self) -> Result<bool> {
        self.set_unit_scale(DEFAULT_UNIT, None)
    }

    /// Parsed `asset/up_axis`, or `None` when it holds an unrecognized value.
    pub fn up_axis(&self) -> Result<Option<UpAxis>> {
        Ok(self.element(path::UP_AXIS)?.text().parse().ok())
    }

    /// Set `asset/up_axis` from a token.
    ///
    /// Case is ignored and only the first character is consulted, so `"y"`,
    /// `"Y_UP"` and `"yes"` are equivalent. An unrecognized token, including
    /// the empty string, leaves the document untouched and returns
    /// `Ok(false)`.
    pub fn set_up_axis(&mut self, axis: &str) -> Result<bool> {
        let element = self.element_mut(path::UP_AXIS)?;
        match UpAxis::from_token(axis) {
            Some(up) => {
                element.set_text(up.as_str());
                Ok(true)
            },
            None => {
                warn!(axis, "unrecognized up axis, document left unchanged");
                Ok(false)
            },
        }
    }

    /// Parsed `asset/created`, `None` while still empty.
    pub fn created(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.timestamp_at(path::CREATED)
    }

    /// Parsed `asset/modified`, `None` while still empty.
    pub fn modified(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.timestamp_at(path::MODIFIED)
    }

    fn timestamp_at(&self, path: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let text = self.element(path)?.text();
        if text.trim().is_empty() {
            return Ok(None);
        }
        parse_timestamp(text).map(Some)
    }

    fn stamp_timestamps(
        root: &mut Element,
        timestamp: &DateTime<FixedOffset>,
        stamp_created: bool,
    ) -> Result<()> {
        let text = format_timestamp(timestamp);
        if stamp_created {
            root.find_mut(path::CREATED)
                .ok_or_else(|| Error::missing_element(path::CREATED))?
                .set_text(text.clone());
        }
        root.find_mut(path::MODIFIED)
            .ok_or_else(|| Error::missing_element(path::MODIFIED))?
            .set_text(text);
        Ok(())
    }

    /// Stamp, lay out, and serialize the document into encoded bytes.
    ///
    /// `created` is stamped on the first successful write of a new document
    /// only; `modified` is stamped on every successful write. A failed write
    /// leaves the document unchanged.
    pub fn to_bytes(&mut self, options: &WriteOptions) -> Result<Vec<u8>> {
        let encoding = resolve_output_encoding(&options.encoding)?;
        let timestamp = options.timestamp.unwrap_or_else(now);

        let mut staged = self.root.clone();
        Self::stamp_timestamps(&mut staged, &timestamp, self.created_pending)?;
        match options.whitespace {
            Whitespace::Indent => tree::indent(&mut staged, &options.indent_unit),
            Whitespace::Flatten => tree::flatten(&mut staged),
        }

        let declaration = options.xml_declaration.then_some(encoding.name());
        let text = tree::to_xml_string(&staged, declaration)?;
        let bytes = encode_text(&text, encoding)?;

        self.root = staged;
        self.created_pending = false;
        Ok(bytes)
    }

    /// Write the document to a writer.
    pub fn write_to<W: Write>(&mut self, mut writer: W, options: &WriteOptions) -> Result<()> {
        let bytes = self.to_bytes(options)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!(
            encoding = %options.encoding,
            whitespace = ?options.whitespace,
            bytes = bytes.len(),
            "wrote COLLADA document"
        );
        Ok(())
    }

    /// Write the document to a file, creating or truncating it.
    pub fn save<P: AsRef<Path>>(&mut self, path: P, options: &WriteOptions) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file), options)?;
        debug!(path = %path.display(), "saved COLLADA document");
        Ok(())
    }

    /// Indented UTF-8 text of the document.
    ///
    /// This is a full write: timestamps are stamped as for [`Self::write_to`].
    pub fn to_xml_string(&mut self) -> Result<String> {
        let bytes = self.to_bytes(&WriteOptions::default())?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Encoding(format!("Invalid UTF-8 in generated XML: {}", e)))
    }
}
