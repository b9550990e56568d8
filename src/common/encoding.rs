//! Character encoding utilities for COLLADA documents.
//!
//! Documents are held in memory as UTF-8. This module resolves the encoding
//! label a caller asks for at write time, encodes serialized text into it, and
//! decodes input bytes back into UTF-8 at load time.

use crate::common::{Error, Result};
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Number of leading bytes inspected when sniffing the XML declaration.
const DECLARATION_SNIFF_LEN: usize = 1024;

/// Labels naming ISO-8859-1 itself. The WHATWG table maps these to
/// windows-1252, which disagrees with Latin-1 on 0x80..=0x9F.
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
];

fn is_latin1_label(label: &str) -> bool {
    LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label))
}

/// A resolved output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    /// UTF-8, written without a byte order mark
    Utf8,
    /// UTF-16 little endian, written with a byte order mark
    Utf16Le,
    /// UTF-16 big endian, written with a byte order mark
    Utf16Be,
    /// 7-bit US-ASCII
    Ascii,
    /// ISO-8859-1, one byte per code point up to U+00FF
    Latin1,
    /// Any other single- or multi-byte encoding known to encoding_rs
    Legacy(&'static Encoding),
}

impl OutputEncoding {
    /// Canonical name written into the XML declaration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
            Self::Legacy(encoding) => encoding.name(),
        }
    }
}

/// Resolve an encoding label such as `"UTF-8"` or `"iso-8859-1"`.
///
/// Labels follow the WHATWG Encoding Standard, except that `"ascii"` and
/// `"us-ascii"` are strict 7-bit ASCII and the ISO-8859-1 labels (`"latin1"`,
/// `"l1"`, ...) are strict Latin-1 rather than windows-1252. Other aliases
/// resolve to the encoding the standard names; [`OutputEncoding::name`]
/// reports which one.
///
/// # Examples
/// ```
/// use colladoc::common::encoding::{resolve_output_encoding, OutputEncoding};
///
/// assert_eq!(resolve_output_encoding("utf-8").unwrap(), OutputEncoding::Utf8);
/// assert!(resolve_output_encoding("no-such-charset").is_err());
/// ```
pub fn resolve_output_encoding(label: &str) -> Result<OutputEncoding> {
    let trimmed = label.trim();
    if trimmed.eq_ignore_ascii_case("ascii") || trimmed.eq_ignore_ascii_case("us-ascii") {
        return Ok(OutputEncoding::Ascii);
    }
    if is_latin1_label(trimmed) {
        return Ok(OutputEncoding::Latin1);
    }

    let encoding = Encoding::for_label(trimmed.as_bytes())
        .ok_or_else(|| Error::Encoding(format!("Unknown encoding label: {}", label)))?;

    Ok(if encoding == encoding_rs::UTF_8 {
        OutputEncoding::Utf8
    } else if encoding == encoding_rs::UTF_16LE {
        OutputEncoding::Utf16Le
    } else if encoding == encoding_rs::UTF_16BE {
        OutputEncoding::Utf16Be
    } else {
        OutputEncoding::Legacy(encoding)
    })
}

/// Encode UTF-8 text into the requested output encoding.
///
/// Fails with [`Error::Encoding`] when a character has no representation in
/// the target encoding.
pub fn encode_text(text: &str, encoding: OutputEncoding) -> Result<Vec<u8>> {
    match encoding {
        OutputEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        OutputEncoding::Utf16Le => {
            let mut out = Vec::with_capacity(2 + text.len() * 2);
            out.extend_from_slice(&[0xFF, 0xFE]);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            Ok(out)
        },
        OutputEncoding::Utf16Be => {
            let mut out = Vec::with_capacity(2 + text.len() * 2);
            out.extend_from_slice(&[0xFE, 0xFF]);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            Ok(out)
        },
        OutputEncoding::Ascii => {
            if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
                return Err(Error::Encoding(format!(
                    "Character {:?} (U+{:04X}) cannot be encoded as US-ASCII",
                    ch, ch as u32
                )));
            }
            Ok(text.as_bytes().to_vec())
        },
        OutputEncoding::Latin1 => text
            .chars()
            .map(|ch| {
                u8::try_from(u32::from(ch)).map_err(|_| {
                    Error::Encoding(format!(
                        "Character {:?} (U+{:04X}) cannot be encoded as ISO-8859-1",
                        ch, ch as u32
                    ))
                })
            })
            .collect(),
        OutputEncoding::Legacy(encoding) => {
            // encoding_rs substitutes numeric character references for
            // unmappable characters; treat any substitution as a failure.
            let (bytes, used, had_errors) = encoding.encode(text);
            if had_errors || used != encoding {
                return Err(Error::Encoding(format!(
                    "Text contains characters that cannot be encoded as {}",
                    encoding.name()
                )));
            }
            Ok(bytes.into_owned())
        },
    }
}

/// Decode raw document bytes into UTF-8 text.
///
/// The encoding is chosen from, in order: a byte order mark, the byte pattern
/// of a UTF-16 XML declaration, the `encoding` pseudo-attribute of the XML
/// declaration, and finally UTF-8.
pub fn decode_input(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_strict(&bytes[bom_len..], encoding);
    }

    match bytes {
        [0x3C, 0x00, 0x3F, 0x00, ..] => return decode_strict(bytes, encoding_rs::UTF_16LE),
        [0x00, 0x3C, 0x00, 0x3F, ..] => return decode_strict(bytes, encoding_rs::UTF_16BE),
        _ => {},
    }

    let declared = declared_encoding(bytes);
    if declared.as_deref().is_some_and(|label| is_latin1_label(label.trim())) {
        return Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()));
    }

    let encoding = declared
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(encoding_rs::UTF_8);

    decode_strict(bytes, encoding)
}

fn decode_strict<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| {
            Error::Parse(format!("Input is not valid {}", encoding.name()))
        })
}

/// Extract the `encoding` pseudo-attribute from a leading XML declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(DECLARATION_SNIFF_LEN)];
    if !head.starts_with(b"<?xml") {
        return None;
    }

    let end = head.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&head[..end]).ok()?;
    let after = &decl[decl.find("encoding")? + "encoding".len()..];
    let after = after.trim_start().strip_prefix('=')?.trim_start();

    let quote = after.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &after[1..];
    let close = value.find(quote)?;
    Some(value[..close].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_labels() {
        assert_eq!(resolve_output_encoding("UTF-8").unwrap(), OutputEncoding::Utf8);
        assert_eq!(resolve_output_encoding("utf8").unwrap(), OutputEncoding::Utf8);
        assert_eq!(resolve_output_encoding("UTF-16LE").unwrap(), OutputEncoding::Utf16Le);
        assert_eq!(resolve_output_encoding("utf-16be").unwrap(), OutputEncoding::Utf16Be);
        assert_eq!(resolve_output_encoding("US-ASCII").unwrap(), OutputEncoding::Ascii);
        assert!(matches!(
            resolve_output_encoding("iso-8859-2").unwrap(),
            OutputEncoding::Legacy(_)
        ));
        assert!(matches!(
            resolve_output_encoding("klingon"),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn test_encode_ascii_rejects_non_ascii() {
        assert_eq!(encode_text("abc", OutputEncoding::Ascii).unwrap(), b"abc");
        assert!(matches!(
            encode_text("caf\u{e9}", OutputEncoding::Ascii),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn test_encode_legacy_rejects_unmappable() {
        let latin2 = resolve_output_encoding("iso-8859-2").unwrap();
        assert_eq!(encode_text("\u{10d}", latin2).unwrap(), vec![0xE8]);
        assert!(matches!(
            encode_text("\u{4e2d}", latin2),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn test_latin1_is_strict() {
        for label in ["ISO-8859-1", "latin1", "L1"] {
            assert_eq!(resolve_output_encoding(label).unwrap(), OutputEncoding::Latin1);
        }
        assert_eq!(OutputEncoding::Latin1.name(), "ISO-8859-1");

        assert_eq!(
            encode_text("\u{80}\u{e9}\u{ff}", OutputEncoding::Latin1).unwrap(),
            vec![0x80, 0xE9, 0xFF]
        );
        assert!(matches!(
            encode_text("\u{20ac}5", OutputEncoding::Latin1),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn test_aliases_report_resolved_name() {
        let turkish = resolve_output_encoding("iso-8859-9").unwrap();
        assert_eq!(turkish.name(), "windows-1254");
        assert_eq!(resolve_output_encoding("utf8").unwrap().name(), "UTF-8");
        assert_eq!(resolve_output_encoding("ascii").unwrap().name(), "US-ASCII");
    }

    #[test]
    fn test_decode_declared_latin1_keeps_c1_range() {
        let bytes = b"<?xml version='1.0' encoding='latin1'?><a>\x80</a>";
        assert_eq!(
            decode_input(bytes).unwrap(),
            "<?xml version='1.0' encoding='latin1'?><a>\u{80}</a>"
        );
    }

    #[test]
    fn test_encode_utf16_writes_bom() {
        let le = encode_text("<a/>", OutputEncoding::Utf16Le).unwrap();
        assert_eq!(&le[..4], &[0xFF, 0xFE, b'<', 0x00]);
        let be = encode_text("<a/>", OutputEncoding::Utf16Be).unwrap();
        assert_eq!(&be[..4], &[0xFE, 0xFF, 0x00, b'<']);
    }

    #[test]
    fn test_decode_input_variants() {
        assert_eq!(decode_input(b"<a/>").unwrap(), "<a/>");
        assert_eq!(decode_input(b"\xEF\xBB\xBF<a/>").unwrap(), "<a/>");

        let utf16 = encode_text("<?xml version='1.0'?><a/>", OutputEncoding::Utf16Le).unwrap();
        assert_eq!(decode_input(&utf16).unwrap(), "<?xml version='1.0'?><a/>");
        assert_eq!(decode_input(&utf16[2..]).unwrap(), "<?xml version='1.0'?><a/>");

        let latin1 = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>\xE9</a>";
        assert_eq!(
            decode_input(latin1).unwrap(),
            "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>\u{e9}</a>"
        );
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(matches!(decode_input(b"<a>\xFF</a>"), Err(Error::Parse(_))));
    }
}
